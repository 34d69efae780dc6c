//! reqwest client implementation
//!
//! Wraps reqwest and implements the RedirectFollower trait from unshort-core.

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Proxy;
use reqwest::redirect::Policy;
use url::Url;

use unshort_core::{
    Error, HttpSettings, RedirectFollower, Resolution, Result, TransportError, TransportErrorKind,
};

/// reqwest client wrapper
#[derive(Debug, Clone)]
pub struct ReqwestFollower {
    inner: reqwest::Client,
}

impl ReqwestFollower {
    /// Create a new client from HTTP settings
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        // Zero means "report the first hop", not "fail on the first redirect"
        let policy = match settings.max_redirects {
            0 => Policy::none(),
            n => Policy::limited(n),
        };

        let mut builder = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .connect_timeout(Duration::from_millis(settings.connect_timeout_ms))
            .redirect(policy);

        if !settings.system_proxy {
            builder = builder.no_proxy();
        }

        if let Some(proxy) = &settings.proxy {
            let proxy = Proxy::all(proxy.as_str()).map_err(|e| Error::Client(error_chain(&e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Client(error_chain(&e)))?;

        tracing::debug!(
            max_redirects = settings.max_redirects,
            connect_timeout_ms = settings.connect_timeout_ms,
            "Built HTTP client"
        );

        Ok(Self { inner: client })
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }
}

#[async_trait]
impl RedirectFollower for ReqwestFollower {
    async fn follow(&self, url: &Url) -> std::result::Result<Resolution, TransportError> {
        let response = self
            .inner
            .head(url.clone())
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        Ok(Resolution::new(
            response.url().clone(),
            response.status().as_u16(),
        ))
    }
}

/// Classify a reqwest error and flatten its cause chain into the message
fn transport_error(err: &reqwest::Error) -> TransportError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_redirect() {
        TransportErrorKind::Redirect
    } else if err.is_connect() {
        TransportErrorKind::Connect
    } else if err.is_request() || err.is_body() || err.is_decode() || err.is_builder() {
        TransportErrorKind::Request
    } else {
        TransportErrorKind::Other
    };

    TransportError::new(kind, error_chain(err))
}

fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
