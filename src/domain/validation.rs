use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NoCredentials,
    InvalidDate { field: &'static str, input: String },
    MissingBotIdentity,
    InvalidUrl { input: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NoCredentials => write!(
                f,
                "at least one of secret_key, api_token or api_key must be provided"
            ),
            Self::InvalidDate { field, input } => write!(f, "invalid {field} value: {input}"),
            Self::MissingBotIdentity => write!(
                f,
                "bot must be identified by bot_token or by bot_id, bot_name and bot_nickname"
            ),
            Self::InvalidUrl { input, reason } => write!(f, "invalid url {input}: {reason}"),
        }
    }
}

impl std::error::Error for ValidationError {}
