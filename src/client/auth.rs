use std::fmt;

use crate::client::SubgramError;
use crate::domain::{ApiKey, ApiToken, SecretKey, ValidationError};

/// Header carrying the resolved credential.
pub const AUTH_HEADER: &str = "Auth";

const SECRET_KEY_ENV: &str = "SUBGRAM_SECRET_KEY";
const API_TOKEN_ENV: &str = "SUBGRAM_API_TOKEN";
const API_KEY_ENV: &str = "SUBGRAM_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Credential class an endpoint authenticates with.
pub enum KeyType {
    /// `secret_key`: orders and bot management.
    Secret,
    /// `api_token`: balance, filters, statistics, exclusions.
    Token,
    /// Per-bot `api_key`: sponsors, subscriptions, user info.
    Bot,
}

impl KeyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Secret => "secret",
            Self::Token => "token",
            Self::Bot => "bot",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Client identity: up to three independent credentials, at least one present.
pub struct Credentials {
    secret_key: Option<SecretKey>,
    api_token: Option<ApiToken>,
    api_key: Option<ApiKey>,
}

impl Credentials {
    /// Fails with [`ValidationError::NoCredentials`] when all three are absent.
    pub fn new(
        secret_key: Option<SecretKey>,
        api_token: Option<ApiToken>,
        api_key: Option<ApiKey>,
    ) -> Result<Self, ValidationError> {
        if secret_key.is_none() && api_token.is_none() && api_key.is_none() {
            return Err(ValidationError::NoCredentials);
        }
        Ok(Self {
            secret_key,
            api_token,
            api_key,
        })
    }

    /// Only a `secret_key`.
    pub fn secret_key(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(Some(SecretKey::new(value)?), None, None)
    }

    /// Only an `api_token`.
    pub fn api_token(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(None, Some(ApiToken::new(value)?), None)
    }

    /// Only a bot `api_key`.
    pub fn api_key(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(None, None, Some(ApiKey::new(value)?))
    }

    pub fn with_secret_key(mut self, value: SecretKey) -> Self {
        self.secret_key = Some(value);
        self
    }

    pub fn with_api_token(mut self, value: ApiToken) -> Self {
        self.api_token = Some(value);
        self
    }

    pub fn with_api_key(mut self, value: ApiKey) -> Self {
        self.api_key = Some(value);
        self
    }

    /// Read `SUBGRAM_SECRET_KEY`, `SUBGRAM_API_TOKEN` and `SUBGRAM_API_KEY`.
    ///
    /// Unset or blank variables count as absent.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self::new(
            present(SECRET_KEY_ENV).map(SecretKey::new).transpose()?,
            present(API_TOKEN_ENV).map(ApiToken::new).transpose()?,
            present(API_KEY_ENV).map(ApiKey::new).transpose()?,
        )
    }

    pub fn has(&self, key_type: KeyType) -> bool {
        self.resolve(key_type).is_ok()
    }

    /// Credential for `key_type`. Never touches the network.
    pub fn resolve(&self, key_type: KeyType) -> Result<&str, SubgramError> {
        let value = match key_type {
            KeyType::Secret => self.secret_key.as_ref().map(SecretKey::as_str),
            KeyType::Token => self.api_token.as_ref().map(ApiToken::as_str),
            KeyType::Bot => self.api_key.as_ref().map(ApiKey::as_str),
        };
        value.ok_or(SubgramError::MissingCredential { key_type })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn construction_requires_at_least_one_credential() {
        assert_eq!(
            Credentials::new(None, None, None),
            Err(ValidationError::NoCredentials)
        );
        assert!(Credentials::secret_key("s").is_ok());
        assert!(Credentials::api_token("t").is_ok());
        assert!(Credentials::api_key("b").is_ok());
    }

    #[test]
    fn resolve_maps_each_class_to_its_credential() {
        let credentials = Credentials::secret_key("s")
            .unwrap()
            .with_api_token(ApiToken::new("t").unwrap())
            .with_api_key(ApiKey::new("b").unwrap());

        assert_eq!(credentials.resolve(KeyType::Secret).unwrap(), "s");
        assert_eq!(credentials.resolve(KeyType::Token).unwrap(), "t");
        assert_eq!(credentials.resolve(KeyType::Bot).unwrap(), "b");
    }

    #[test]
    fn resolve_fails_for_every_missing_class() {
        let only_bot = Credentials::api_key("b").unwrap();
        for key_type in [KeyType::Secret, KeyType::Token] {
            let err = only_bot.resolve(key_type).unwrap_err();
            assert!(matches!(
                err,
                SubgramError::MissingCredential { key_type: missing } if missing == key_type
            ));
        }
        assert!(only_bot.has(KeyType::Bot));
        assert!(!only_bot.has(KeyType::Secret));
    }

    #[test]
    fn missing_credential_message_names_the_class() {
        let err = Credentials::api_key("b")
            .unwrap()
            .resolve(KeyType::Secret)
            .unwrap_err();
        assert!(err.to_string().contains("secret"));
    }

    #[test]
    fn from_lookup_skips_blank_values() {
        let env = HashMap::from([(SECRET_KEY_ENV, "  "), (API_TOKEN_ENV, "token")]);
        let credentials =
            Credentials::from_lookup(|name| env.get(name).map(|value| (*value).to_owned()))
                .unwrap();
        assert!(!credentials.has(KeyType::Secret));
        assert!(credentials.has(KeyType::Token));

        let empty = HashMap::<&str, &str>::new();
        assert_eq!(
            Credentials::from_lookup(|name| empty.get(name).map(|value| (*value).to_owned())),
            Err(ValidationError::NoCredentials)
        );
    }
}
