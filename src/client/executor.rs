use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::client::SubgramError;
use crate::client::auth::{Credentials, KeyType};
use crate::client::session::{Connector, HttpMethod, HttpRequest, Session};
use crate::domain::ValidationError;
use crate::transport::{Payload, decode_response};

/// Runs one authenticated request against `{base}/{path}` and decodes the reply.
///
/// Owns the client's single session; concurrent calls share it.
pub struct Executor {
    base: String,
    credentials: Credentials,
    session: Session,
}

impl Executor {
    pub(crate) fn new(
        base: String,
        credentials: Credentials,
        connector: Arc<dyn Connector>,
        timeout: Duration,
    ) -> Self {
        Self {
            base,
            credentials,
            session: Session::new(connector, timeout),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn timeout(&self) -> Duration {
        self.session.timeout()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    /// Close the current session. Returns `false` when none was open.
    pub fn close(&self) -> bool {
        self.session.close()
    }

    /// Execute a request and decode the body into `T`.
    ///
    /// Errors:
    /// - [`SubgramError::MissingCredential`] before any request is sent,
    /// - [`SubgramError::Transport`] when the exchange itself fails,
    /// - [`SubgramError::Api`] for a status `>= 400` with `"status": "error"`,
    /// - [`SubgramError::Schema`] when the body does not match `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        key_type: KeyType,
        query: Option<Payload>,
        body: Option<Payload>,
    ) -> Result<T, SubgramError> {
        let transport = self.session.acquire().map_err(SubgramError::Transport)?;
        let auth = self.credentials.resolve(key_type)?.to_owned();
        let url = self.url(path, query)?;

        tracing::debug!(
            method = method.as_str(),
            path,
            key_type = key_type.as_str(),
            "sending request"
        );
        let response = transport
            .send(HttpRequest {
                method,
                url,
                body: body.map(Payload::into_json),
                auth,
            })
            .await
            .map_err(SubgramError::Transport)?;
        tracing::debug!(path, status = response.status, "received response");

        Ok(decode_response(response.status, &response.body)?)
    }

    fn url(&self, path: &str, query: Option<Payload>) -> Result<String, SubgramError> {
        let raw = format!("{}/{}", self.base, path);
        let mut url = Url::parse(&raw).map_err(|err| ValidationError::InvalidUrl {
            input: raw.clone(),
            reason: err.to_string(),
        })?;

        let pairs = query.map(Payload::into_query).unwrap_or_default();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url.into())
    }
}
