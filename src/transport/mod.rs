//! Reqwest-based transport layer.
//!
//! * `ReqwestAsync` respects the `no_proxy` flag to ignore system proxy
//!   environment variables (HTTP_PROXY, HTTPS_PROXY, etc.).
//! * The cookie store is enabled so the portal session cookie persists
//!   across calls.

use crate::core::error::PortalError;
use async_trait::async_trait;
use http::{Method, StatusCode};
use reqwest::Client;
use std::{collections::HashMap, time::Duration};
use url::Url;

#[cfg(feature = "rustls")]
fn ensure_rustls_provider() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

#[cfg(not(feature = "rustls"))]
fn ensure_rustls_provider() {}

/// Trait implemented by any async HTTP layer.
#[async_trait]
pub trait AsyncTransport: Clone + Send + Sync + 'static {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HashMap<String, String>,
        timeout: Duration,
    ) -> Result<(StatusCode, String), PortalError>;
}

/// Default async transport built on `reqwest`.
#[derive(Clone)]
pub struct ReqwestAsync {
    client: Client,
}

impl ReqwestAsync {
    /// Construct a new transport.
    ///
    /// * `insecure` – accept invalid TLS certificates.
    /// * `ua` – User-Agent header.
    /// * `timeout` – per-request timeout.
    /// * `no_proxy` – ignore system proxy environment variables.
    pub fn new(insecure: bool, ua: &str, timeout: Duration, no_proxy: bool) -> Self {
        ensure_rustls_provider();

        let mut builder = Client::builder()
            .danger_accept_invalid_certs(insecure)
            .user_agent(ua)
            .cookie_store(true)
            .timeout(timeout);

        if no_proxy {
            builder = builder.no_proxy();
        }

        Self {
            client: builder.build().expect("build reqwest"),
        }
    }
}

#[async_trait]
impl AsyncTransport for ReqwestAsync {
    async fn send(
        &self,
        method: Method,
        url: Url,
        headers: HashMap<String, String>,
        timeout: Duration,
    ) -> Result<(StatusCode, String), PortalError> {
        let mut req = self
            .client
            .request(method.clone(), url.clone())
            .timeout(timeout);

        for (k, v) in &headers {
            req = req.header(k, v);
        }

        let resp = req.send().await.map_err(|e| PortalError::Reqwest {
            source: e,
            method: method.clone(),
            url: url.clone(),
        })?;

        let code = resp.status();
        let body = resp.text().await.map_err(|e| PortalError::Reqwest {
            source: e,
            method,
            url,
        })?;
        Ok((code, body))
    }
}

pub type DefaultAsyncTransport = ReqwestAsync;
