//! Client layer: credentials, the request executor and the business groups built on it.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::ValidationError;
use crate::transport::ResponseError;

mod account;
mod advertiser;
mod auth;
mod executor;
mod publisher;
mod session;

pub use account::Account;
pub use advertiser::Advertiser;
pub use auth::{AUTH_HEADER, Credentials, KeyType};
pub use executor::Executor;
pub use publisher::Publisher;
pub use session::HttpMethod;

use session::{Connector, ReqwestConnector};

/// Production API origin.
pub const DEFAULT_ENDPOINT: &str = "https://api.subgram.org";
/// Total timeout applied to every request of a session.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SubgramClient`].
///
/// Every failure reaches the caller as-is: nothing is retried, recovered or logged.
pub enum SubgramError {
    /// The operation needs a credential class the client was not given.
    /// Raised before any network I/O.
    #[error("no {key_type} credential configured for this operation")]
    MissingCredential { key_type: KeyType },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// HTTP status `>= 400` and the body says `"status": "error"`.
    #[error("API error: HTTP {status}: {body}")]
    Api {
        status: u16,
        body: serde_json::Value,
    },

    /// Response body does not match the expected schema.
    #[error("schema error: {0}")]
    Schema(#[source] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<ResponseError> for SubgramError {
    fn from(value: ResponseError) -> Self {
        match value {
            ResponseError::Api { status, body } => Self::Api { status, body },
            ResponseError::Schema(err) => Self::Schema(err),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SubgramClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct SubgramClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl SubgramClientBuilder {
    /// Create a builder with the default endpoint and timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the API origin. A trailing `/` is dropped.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the total timeout of each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SubgramClient`]. No connection is opened until the first call.
    pub fn build(self) -> Result<SubgramClient, SubgramError> {
        let connector = ReqwestConnector {
            user_agent: self.user_agent.clone(),
        };
        self.build_with(Arc::new(connector))
    }

    fn build_with(self, connector: Arc<dyn Connector>) -> Result<SubgramClient, SubgramError> {
        let endpoint = validate_endpoint(&self.endpoint)?;
        Ok(SubgramClient {
            executor: Executor::new(endpoint, self.credentials, connector, self.timeout),
        })
    }
}

fn validate_endpoint(input: &str) -> Result<String, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidUrl {
        input: input.to_owned(),
        reason,
    };

    let url = Url::parse(input).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_owned()));
    }
    Ok(input.trim_end_matches('/').to_owned())
}

/// High-level SubGram client.
///
/// Holds the credentials and one lazily opened HTTP session shared by every
/// call. Operations are grouped by audience:
/// - [`SubgramClient::advertiser`] for orders,
/// - [`SubgramClient::publisher`] for sponsors and bots,
/// - [`SubgramClient::account`] for balance, filters and statistics.
///
/// Call [`SubgramClient::close`] when done; the session is also released on drop.
pub struct SubgramClient {
    executor: Executor,
}

impl SubgramClient {
    /// Create a client using the default endpoint and timeout.
    ///
    /// For more customization, use [`SubgramClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            executor: Executor::new(
                DEFAULT_ENDPOINT.to_owned(),
                credentials,
                Arc::new(ReqwestConnector::default()),
                DEFAULT_TIMEOUT,
            ),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SubgramClientBuilder {
        SubgramClientBuilder::new(credentials)
    }

    /// The underlying executor, for endpoints without a typed wrapper.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub fn credentials(&self) -> &Credentials {
        self.executor.credentials()
    }

    pub fn advertiser(&self) -> Advertiser<'_> {
        Advertiser::new(&self.executor)
    }

    pub fn publisher(&self) -> Publisher<'_> {
        Publisher::new(&self.executor)
    }

    pub fn account(&self) -> Account<'_> {
        Account::new(&self.executor)
    }

    /// Release the HTTP session. Safe to call repeatedly; a later call opens a new one.
    ///
    /// Returns `true` if an open session was closed.
    pub fn close(&self) -> bool {
        self.executor.close()
    }
}


#[cfg(test)]
mod tests {
    use super::session::testing::FakeTransport;
    use super::*;

    #[test]
    fn builder_applies_overrides() {
        let client = SubgramClient::builder(Credentials::api_key("key").unwrap())
            .endpoint("https://example.invalid/api/")
            .timeout(Duration::from_secs(3))
            .user_agent("tests")
            .build()
            .unwrap();
        assert_eq!(client.executor().base(), "https://example.invalid/api");
        assert_eq!(client.executor().timeout(), Duration::from_secs(3));
        assert!(!client.executor().is_open());
    }

    #[test]
    fn defaults_point_at_production() {
        let client = SubgramClient::new(Credentials::api_key("key").unwrap());
        assert_eq!(client.executor().base(), DEFAULT_ENDPOINT);
        assert_eq!(client.executor().timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn builder_rejects_invalid_endpoints() {
        for endpoint in [
            "not a url",
            "ftp://example.invalid",
            "https://example.invalid/?a=1",
        ] {
            let err = SubgramClient::builder(Credentials::api_key("key").unwrap())
                .endpoint(endpoint)
                .build()
                .err()
                .unwrap();
            assert!(
                matches!(
                    err,
                    SubgramError::Validation(ValidationError::InvalidUrl { .. })
                ),
                "{endpoint}: {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn close_is_idempotent() {
        let client = testing::client(FakeTransport::new(
            200,
            r#"{"status": "ok", "code": 200, "balance": 1.5}"#,
        ));
        assert!(!client.close());

        client.account().balance().await.unwrap();
        assert!(client.close());
        assert!(!client.close());
    }

    #[test]
    fn api_error_display_carries_status() {
        let err = SubgramError::from(ResponseError::Api {
            status: 404,
            body: serde_json::json!({"status": "error"}),
        });
        assert!(err.to_string().contains("404"));
    }
}
