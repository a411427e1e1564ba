//! HTTP transport implementation using hyper-util.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower_service::Service;

use crate::{
    ClientConfig, ClientConfigBuilder, Error, Locator, Response, Result, Transport,
    connector::https_connector,
};

/// Future type for the Tower `Service` implementation.
pub type TransportFuture = Pin<Box<dyn Future<Output = Result<Response<Bytes>>> + Send + 'static>>;

/// Transport over hyper-util with connection pooling and TLS.
///
/// Each [`Transport::fetch`] issues one `GET`, bounded by
/// [`ClientConfig::timeout`], and buffers the whole body. Clones share the
/// connection pool.
///
/// # Example
///
/// ```ignore
/// use fetchling::HyperTransport;
/// use std::time::Duration;
///
/// let transport = HyperTransport::builder()
///     .timeout(Duration::from_secs(5))
///     .user_agent("agify-demo")
///     .build();
/// ```
#[derive(Clone)]
pub struct HyperTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Create a transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a transport with custom configuration.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let connector = https_connector(&config);

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(connector);

        Self {
            inner,
            config: Arc::new(config),
        }
    }

    /// Create a new transport builder.
    #[must_use]
    pub fn builder() -> HyperTransportBuilder {
        HyperTransportBuilder::default()
    }

    /// Get the transport configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a hyper `GET` request for a locator.
    fn build_request(&self, locator: &Locator) -> Result<http::Request<Full<Bytes>>> {
        let url = locator.to_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_locator(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        http::Request::builder()
            .method(http::Method::GET)
            .uri(url.as_str())
            .header(http::header::ACCEPT, self.config.accept.as_str())
            .header(http::header::USER_AGENT, self.config.user_agent.as_str())
            .body(Full::default())
            .map_err(|e| Error::invalid_locator(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    ///
    /// Repeated headers are joined with `", "`; bytes that are not UTF-8 are
    /// replaced with `U+FFFD`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        let mut extracted: HashMap<String, String> = HashMap::with_capacity(headers.keys_len());
        for (name, value) in headers {
            let value = String::from_utf8_lossy(value.as_bytes());
            extracted
                .entry(name.to_string())
                .and_modify(|joined| {
                    joined.push_str(", ");
                    joined.push_str(&value);
                })
                .or_insert_with(|| value.into_owned());
        }
        extracted
    }

    async fn execute(&self, locator: &Locator) -> Result<Response<Bytes>> {
        let request = self.build_request(locator)?;

        // Headers and body share one deadline.
        let exchange = async {
            let response = self
                .inner
                .request(request)
                .await
                .map_err(Self::map_hyper_error)?;

            let status = response.status().as_u16();
            let headers = Self::extract_headers(response.headers());

            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| Error::connection(e.to_string()))?
                .to_bytes();

            Ok::<_, Error>(Response::new(status, headers, body))
        };

        tokio::time::timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| Error::Timeout)?
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        // The top-level message is generic; the cause chain says what happened.
        let mut msg = err.to_string();
        let mut is_tls = false;
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            let _ = write!(msg, ": {cause}");
            is_tls |= Self::is_tls_error(cause);
            source = cause.source();
        }

        if is_tls {
            Error::tls(msg)
        } else {
            Error::connection(msg)
        }
    }

    /// hyper-rustls reports handshake failures as nested `io::Error`s around
    /// a `rustls::Error`, and `io::Error::source` skips the wrapped error.
    fn is_tls_error(cause: &(dyn std::error::Error + 'static)) -> bool {
        if cause.is::<rustls::Error>() {
            return true;
        }
        let mut wrapped = cause
            .downcast_ref::<std::io::Error>()
            .and_then(std::io::Error::get_ref);
        while let Some(inner) = wrapped {
            if inner.is::<rustls::Error>() {
                return true;
            }
            wrapped = inner
                .downcast_ref::<std::io::Error>()
                .and_then(std::io::Error::get_ref);
        }
        false
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HyperTransport {
    async fn fetch(&self, locator: &Locator) -> Result<Response<Bytes>> {
        self.execute(locator).await
    }
}

impl Service<Locator> for HyperTransport {
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = TransportFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, locator: Locator) -> Self::Future {
        let transport = self.clone();
        Box::pin(async move { transport.execute(&locator).await })
    }
}

/// Builder for [`HyperTransport`].
#[derive(Debug, Clone, Default)]
pub struct HyperTransportBuilder {
    config: ClientConfigBuilder,
}

impl HyperTransportBuilder {
    /// Set the exchange timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config = self.config.pool_idle_per_host(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.pool_idle_timeout(timeout);
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(user_agent);
        self
    }

    /// Set the `Accept` header.
    #[must_use]
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.config = self.config.accept(accept);
        self
    }

    /// Build the transport.
    #[must_use]
    pub fn build(self) -> HyperTransport {
        HyperTransport::with_config(self.config.build())
    }
}
