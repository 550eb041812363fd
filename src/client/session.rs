use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde_json::Value;

use crate::client::auth::AUTH_HEADER;

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub method: HttpMethod,
    /// Full URL, query string included.
    pub url: String,
    pub body: Option<Value>,
    /// Value of the [`AUTH_HEADER`] header.
    pub auth: String,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, BoxError>>;
}

/// Opens sessions. A session is opened with the client's total request timeout.
pub(crate) trait Connector: Send + Sync {
    fn connect(&self, timeout: Duration) -> Result<Arc<dyn HttpTransport>, BoxError>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method.into(), &request.url)
                .header(AUTH_HEADER, request.auth);
            if let Some(body) = request.body.as_ref() {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ReqwestConnector {
    pub user_agent: Option<String>,
}

impl Connector for ReqwestConnector {
    fn connect(&self, timeout: Duration) -> Result<Arc<dyn HttpTransport>, BoxError> {
        let mut builder = reqwest::Client::builder().timeout(timeout);
        if let Some(user_agent) = self.user_agent.as_ref() {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build()?;
        Ok(Arc::new(ReqwestTransport { client }))
    }
}

/// The single session of one client, opened on first use.
///
/// Every caller gets a handle to the same open session; requests already holding
/// a handle keep it alive after [`Session::close`], later ones open a new session.
pub(crate) struct Session {
    connector: Arc<dyn Connector>,
    timeout: Duration,
    current: Mutex<Option<Arc<dyn HttpTransport>>>,
}

impl Session {
    pub fn new(connector: Arc<dyn Connector>, timeout: Duration) -> Self {
        Self {
            connector,
            timeout,
            current: Mutex::new(None),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn acquire(&self) -> Result<Arc<dyn HttpTransport>, BoxError> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(transport) = current.as_ref() {
            return Ok(Arc::clone(transport));
        }

        let transport = self.connector.connect(self.timeout)?;
        tracing::trace!(timeout = ?self.timeout, "opened HTTP session");
        *current = Some(Arc::clone(&transport));
        Ok(transport)
    }

    pub fn is_open(&self) -> bool {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns `true` if a live session was closed by this call.
    pub fn close(&self) -> bool {
        let closed = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        if closed {
            tracing::trace!("closed HTTP session");
        }
        closed
    }
}
