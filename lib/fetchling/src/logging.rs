//! Fetch logging.
//!
//! The core operation never logs; presentation is the caller's concern.
//! Callers that want a trace of each exchange wrap their transport in
//! [`Logging`], usually through [`LoggingLayer`].

use std::time::Instant;

use bytes::Bytes;
use tower::Layer;
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{Locator, Response, Result, Transport};

/// Layer that adds fetch logging to a transport.
///
/// # Example
///
/// ```ignore
/// use fetchling::{HyperTransport, LoggingLayer};
/// use tower::Layer;
///
/// let transport = LoggingLayer::new().layer(HyperTransport::new());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

/// Log level for the logging wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Log at debug level (includes response headers).
    Debug,
    /// Log at info level (summary only).
    #[default]
    Info,
}

impl LoggingLayer {
    /// Create a new logging layer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging layer that logs at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }
}

impl<T> Layer<T> for LoggingLayer {
    type Service = Logging<T>;

    fn layer(&self, inner: T) -> Self::Service {
        Logging {
            inner,
            level: self.level,
        }
    }
}

/// Transport wrapper that logs each fetch.
#[derive(Debug, Clone)]
pub struct Logging<T> {
    inner: T,
    level: LogLevel,
}

impl<T> Logging<T> {
    /// Wrap `inner`, logging at info level.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            level: LogLevel::Info,
        }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// The wrapped transport.
    #[must_use]
    pub const fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Transport> Transport for Logging<T> {
    async fn fetch(&self, locator: &Locator) -> Result<Response<Bytes>> {
        let span = span!(Level::INFO, "fetch", locator = %locator);
        let level = self.level;

        async move {
            let start = Instant::now();
            info!("sending request");

            let result = self.inner.fetch(locator).await;

            // Saturating conversion to u64 (truncates after ~584 million years)
            let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            match &result {
                Ok(response) => {
                    let status = response.status();
                    if level == LogLevel::Debug {
                        debug!(status, headers = ?response.headers(), "response headers");
                    }
                    if response.is_success() {
                        info!(status, elapsed_ms, "request completed");
                    } else {
                        warn!(status, elapsed_ms, "request failed with HTTP error");
                    }
                }
                Err(err) => {
                    warn!(error = %err, elapsed_ms, "request failed");
                }
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::{Future, ready};

    use assert2::{check, let_assert};

    use super::*;
    use crate::Error;

    struct Canned(u16);

    impl Transport for Canned {
        fn fetch(&self, _locator: &Locator) -> impl Future<Output = Result<Response<Bytes>>> + Send {
            ready(match self.0 {
                0 => Err(Error::connection("unreachable")),
                status => Ok(Response::new(status, HashMap::new(), Bytes::new())),
            })
        }
    }

    fn locator() -> Locator {
        Locator::new("https://api.example.test/").expect("locator")
    }

    #[test]
    fn logging_layer_default() {
        let logging = LoggingLayer::new().layer(Canned(200));
        check!(logging.level() == LogLevel::Info);
    }

    #[test]
    fn logging_layer_debug() {
        let logging = LoggingLayer::debug().layer(Canned(200));
        check!(logging.level() == LogLevel::Debug);
    }

    #[tokio::test]
    async fn passes_outcomes_through() {
        let_assert!(Ok(response) = Logging::new(Canned(204)).fetch(&locator()).await);
        check!(response.status() == 204);

        let_assert!(Ok(response) = LoggingLayer::debug().layer(Canned(503)).fetch(&locator()).await);
        check!(response.status() == 503);

        let_assert!(Err(err) = Logging::new(Canned(0)).fetch(&locator()).await);
        check!(err.is_connection());
    }
}
