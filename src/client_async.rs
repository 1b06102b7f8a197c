//! High-level asynchronous portal client.

use crate::{
    core::{Countries, Endpoint, OrganisationDetail, PortalError, Profile, url::normalize_base_url},
    transport::{AsyncTransport, DefaultAsyncTransport},
};
use serde_json::Value;
use std::{collections::HashMap, time::Duration};
use url::Url;

/// Builder for [`PortalAsync`].
///
/// *Do not construct directly; call* `PortalAsync::builder(..)` *instead.*
pub struct PortalAsyncBuilder<T = DefaultAsyncTransport> {
    base_url: String,
    insecure: bool,
    timeout: Duration,
    no_proxy: bool,
    transport: T,
}

/* ───────────── impl for DefaultAsyncTransport ───────────── */
impl PortalAsyncBuilder<DefaultAsyncTransport> {
    /// Create a builder with default settings.
    fn default_builder(base: impl Into<String>) -> Self {
        Self {
            base_url: base.into(),
            insecure: false,
            timeout: Duration::from_secs(30),
            no_proxy: false,
            transport: DefaultAsyncTransport::new(
                false,
                "portal-sdk-rust",
                Duration::from_secs(30),
                false,
            ),
        }
    }

    /// Rebuild the internal default transport after flag changes.
    fn refresh_transport(&mut self) {
        self.transport = DefaultAsyncTransport::new(
            self.insecure,
            "portal-sdk-rust",
            self.timeout,
            self.no_proxy,
        );
    }

    /// Ignore system proxy environment variables.
    pub fn no_system_proxy(mut self) -> Self {
        self.no_proxy = true;
        self.refresh_transport();
        self
    }

    /// Accept invalid TLS certificates (**dangerous**).
    pub fn danger_accept_invalid_certs(mut self, yes: bool) -> Self {
        self.insecure = yes;
        self.refresh_transport();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, t: Duration) -> Self {
        self.timeout = t;
        self.refresh_transport();
        self
    }
}

/* ───────────── generic impl (any transport) ───────────── */
impl<T: AsyncTransport> PortalAsyncBuilder<T> {
    /// Swap out the underlying transport.
    pub fn transport<NT: AsyncTransport>(self, t: NT) -> PortalAsyncBuilder<NT> {
        PortalAsyncBuilder {
            base_url: self.base_url,
            insecure: self.insecure,
            timeout: self.timeout,
            no_proxy: self.no_proxy,
            transport: t,
        }
    }

    /// Finalize the builder and create the client.
    pub fn build(self) -> Result<PortalAsync<T>, PortalError> {
        Ok(PortalAsync {
            base: normalize_base_url(&self.base_url)?,
            timeout: self.timeout,
            transport: self.transport,
        })
    }
}

/* ───────────── concrete client ───────────── */
#[derive(Clone)]
pub struct PortalAsync<T: AsyncTransport = DefaultAsyncTransport> {
    base: Url,
    timeout: Duration,
    transport: T,
}

impl PortalAsync<DefaultAsyncTransport> {
    /// Start a builder chain (recommended).
    #[must_use]
    pub fn builder(base: impl Into<String>) -> PortalAsyncBuilder<DefaultAsyncTransport> {
        PortalAsyncBuilder::default_builder(base)
    }

    /// Quick path: all default settings.
    pub fn new(base: impl Into<String>) -> Result<Self, PortalError> {
        Self::builder(base).build()
    }
}

impl<T: AsyncTransport> PortalAsync<T> {
    /// GET `api/profile` – the current user's profile.
    pub async fn profile(&self) -> Result<Value, PortalError> {
        self.request(&Profile).await
    }

    /// GET `api/countries` – the country list.
    pub async fn countries(&self) -> Result<Value, PortalError> {
        self.request(&Countries).await
    }

    /// GET `api/organisations/<id>` – a single organisation record.
    ///
    /// `id` is forwarded into the path as-is; no validation happens here.
    pub async fn organisation(&self, id: &str) -> Result<Value, PortalError> {
        self.request(&OrganisationDetail(id)).await
    }

    /// Issue a single request for `ep` and settle exactly once: the decoded
    /// body on success, the transport or HTTP error otherwise.
    pub async fn request<E: Endpoint>(&self, ep: &E) -> Result<E::Output, PortalError> {
        let mut hdr = HashMap::new();
        hdr.insert("Accept".into(), "application/json".into());

        let url = self.base.join(&ep.path())?;

        #[cfg(feature = "tracing")]
        let start = std::time::Instant::now();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "portal.request",
            http.method = %ep.method(),
            http.path = %url.path(),
            http.status = tracing::field::Empty,
            latency_ms = tracing::field::Empty,
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let sent = self
            .transport
            .send(ep.method(), url.clone(), hdr, self.timeout)
            .await;

        #[cfg(feature = "tracing")]
        span.record("latency_ms", start.elapsed().as_millis() as i64);

        let (code, body) = sent?;

        #[cfg(feature = "tracing")]
        span.record("http.status", code.as_u16() as i64);

        if !code.is_success() {
            return Err(PortalError::Http {
                code,
                method: ep.method(),
                url,
                body,
            });
        }

        ep.parse(body)
    }
}
