use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("API error: HTTP {status}")]
    Api { status: u16, body: Value },

    #[error("response does not match schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Classify and decode a response body into the schema `T`.
///
/// Only a status `>= 400` whose body also says `"status": "error"` is an API
/// error. Any other body, whatever the HTTP status, is validated against `T`;
/// undeclared fields are ignored.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ResponseError> {
    let value: Value = serde_json::from_str(body)?;

    if status >= 400 && value.get("status").and_then(Value::as_str) == Some("error") {
        return Err(ResponseError::Api {
            status,
            body: value,
        });
    }

    Ok(serde_json::from_value(value)?)
}
