use async_trait::async_trait;
use thiserror::Error;

/// A minimal HTTP response: status code plus raw body bytes.
///
/// Response headers are intentionally not carried. Nothing in the
/// aggregation pipelines reads them - there is no ETag caching and no
/// rate-limit tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status code is in the 2xx range.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("http transport error: {0}")]
    Transport(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("no mock response registered for {url}")]
    NoMockResponse { url: String },
}

/// Transport boundary for all outbound HTTP I/O.
///
/// Every upstream call in this crate is an unauthenticated GET returning
/// JSON, so the boundary is a single method. Implementations must be safe to
/// share across providers; the real transport is backed by one connection
/// pool.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}

#[cfg(any(feature = "github", feature = "gitlab", feature = "bitbucket"))]
pub mod reqwest_transport {
    use super::*;

    use std::time::Duration as StdDuration;

    /// User-Agent sent with every request. GitHub rejects requests without one.
    const USER_AGENT: &str = concat!("forgefolio/", env!("CARGO_PKG_VERSION"));

    /// A real HTTP transport backed by reqwest.
    #[derive(Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new(client: reqwest::Client) -> Self {
            Self { client }
        }

        /// Build a transport with a bounded per-request timeout.
        ///
        /// The timeout covers the whole request, connect through body read.
        /// A slow upstream surfaces as [`HttpError::Timeout`] instead of
        /// stalling the caller indefinitely.
        pub fn with_timeout(timeout: StdDuration) -> Result<Self, HttpError> {
            use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

            let mut headers = HeaderMap::new();
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

            let client = reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(USER_AGENT)
                .default_headers(headers)
                .build()
                .map_err(|e| HttpError::Transport(e.to_string()))?;
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl HttpTransport for ReqwestTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
            let resp = self
                .client
                .get(url)
                .send()
                .await
                .map_err(classify_reqwest_error)?;

            let status = resp.status().as_u16();
            let body = resp
                .bytes()
                .await
                .map_err(classify_reqwest_error)?
                .to_vec();

            Ok(HttpResponse { status, body })
        }
    }

    fn classify_reqwest_error(e: reqwest::Error) -> HttpError {
        if e.is_timeout() {
            HttpError::Timeout(e.to_string())
        } else {
            HttpError::Transport(e.to_string())
        }
    }
}

// ---------- Test-only mock transport ----------

#[cfg(test)]
use std::collections::{HashMap, VecDeque};
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// In-memory mock transport for unit tests: no sockets, no loopback servers.
///
/// Responses are registered per URL and served in FIFO order; every request
/// is recorded for assertion.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[cfg(test)]
#[derive(Default)]
struct MockTransportInner {
    routes: HashMap<String, VecDeque<HttpResponse>>,
    requests: Vec<String>,
}

#[cfg(test)]
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for a URL.
    pub fn push_response(&self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) {
        let mut inner = self
            .inner
            .lock()
            .expect("mock transport lock should not be poisoned");
        inner
            .routes
            .entry(url.into())
            .or_default()
            .push_back(HttpResponse {
                status,
                body: body.into(),
            });
    }

    /// Register a 200 response with a JSON body.
    pub fn push_json(&self, url: impl Into<String>, body: &serde_json::Value) {
        self.push_response(url, 200, body.to_string().into_bytes());
    }

    /// URLs requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        let inner = self
            .inner
            .lock()
            .expect("mock transport lock should not be poisoned");
        inner.requests.clone()
    }
}

#[cfg(test)]
#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let mut inner = self
            .inner
            .lock()
            .expect("mock transport lock should not be poisoned");

        inner.requests.push(url.to_string());

        match inner.routes.get_mut(url).and_then(|q| q.pop_front()) {
            Some(resp) => Ok(resp),
            None => Err(HttpError::NoMockResponse {
                url: url.to_string(),
            }),
        }
    }
}
