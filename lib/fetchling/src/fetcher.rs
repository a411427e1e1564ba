//! Caller entry point.
//!
//! [`Fetcher`] pairs a transport with a decoder so callers only hand over a
//! locator string.

use serde::de::DeserializeOwned;
use tower::Layer;

use crate::{
    Decoder, FetchStrategy, HyperTransport, JsonDecoder, Locator, Logging, LoggingLayer, Result,
    Transport,
};

/// A transport and a decoder, ready to fetch and parse.
///
/// # Example
///
/// ```ignore
/// use fetchling::Fetcher;
///
/// #[derive(Debug, Deserialize)]
/// struct Agify {
///     name: String,
///     age: Option<u32>,
/// }
///
/// let fetcher = Fetcher::json::<Agify>().with_logging();
/// let guess = fetcher.fetch_and_parse("https://api.agify.io/?name=meelad").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher<X = HyperTransport, D = JsonDecoder<serde_json::Value>> {
    transport: X,
    decoder: D,
}

impl Fetcher {
    /// JSON fetcher over a default [`HyperTransport`], yielding `serde_json::Value`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(HyperTransport::new(), JsonDecoder::new())
    }

    /// JSON fetcher over a default [`HyperTransport`], yielding `T`.
    #[must_use]
    pub fn json<T>() -> Fetcher<HyperTransport, JsonDecoder<T>>
    where
        T: DeserializeOwned + Send,
    {
        Fetcher::with_parts(HyperTransport::new(), JsonDecoder::new())
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl<X, D> Fetcher<X, D> {
    /// Assemble a fetcher from its collaborators.
    pub const fn with_parts(transport: X, decoder: D) -> Self {
        Self { transport, decoder }
    }

    /// The transport.
    #[must_use]
    pub const fn transport(&self) -> &X {
        &self.transport
    }

    /// The decoder.
    #[must_use]
    pub const fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Replace the decoder.
    #[must_use]
    pub fn with_decoder<E>(self, decoder: E) -> Fetcher<X, E> {
        Fetcher {
            transport: self.transport,
            decoder,
        }
    }

    /// Wrap the transport with a layer.
    #[must_use]
    pub fn layer<L: Layer<X>>(self, layer: &L) -> Fetcher<L::Service, D> {
        Fetcher {
            transport: layer.layer(self.transport),
            decoder: self.decoder,
        }
    }

    /// Log every exchange at info level.
    #[must_use]
    pub fn with_logging(self) -> Fetcher<Logging<X>, D> {
        self.layer(&LoggingLayer::new())
    }
}

impl<X, D> Fetcher<X, D>
where
    X: Transport,
    D: Decoder,
{
    /// Fetch `locator` and decode its body.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidLocator`] for an empty locator, otherwise the
    /// failures of [`fetchling_core::fetch_and_parse`].
    pub async fn fetch_and_parse(&self, locator: impl Into<String>) -> Result<D::Output> {
        let locator = Locator::new(locator)?;
        fetchling_core::fetch_and_parse(&self.transport, &self.decoder, &locator).await
    }

    /// Same as [`Self::fetch_and_parse`], driven by `strategy`.
    pub async fn fetch_with<S>(&self, strategy: &S, locator: impl Into<String>) -> Result<D::Output>
    where
        S: FetchStrategy,
        X: Clone + 'static,
        D: Clone + 'static,
        D::Output: 'static,
    {
        let locator = Locator::new(locator)?;
        strategy
            .fetch_and_parse(self.transport.clone(), self.decoder.clone(), locator)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::future::{Future, ready};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert2::{check, let_assert};
    use bytes::Bytes;

    use super::*;
    use crate::{AsyncStrategy, CallbackStrategy, Error, FutureStrategy, Response, TextDecoder};

    #[derive(Clone, Default)]
    struct Echo {
        calls: Arc<AtomicUsize>,
    }

    impl Transport for Echo {
        fn fetch(&self, locator: &Locator) -> impl Future<Output = Result<Response<Bytes>>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let body = serde_json::json!({ "locator": locator.as_str() }).to_string();
            ready(Ok(Response::new(200, HashMap::new(), Bytes::from(body))))
        }
    }

    #[tokio::test]
    async fn empty_locator_never_reaches_transport() {
        let transport = Echo::default();
        let fetcher = Fetcher::with_parts(transport.clone(), JsonDecoder::<serde_json::Value>::new());

        let_assert!(Err(err) = fetcher.fetch_and_parse("").await);
        check!(matches!(err, Error::InvalidLocator(_)));
        let_assert!(Err(_) = fetcher.fetch_with(&AsyncStrategy, "   ").await);
        check!(transport.calls.load(Ordering::SeqCst) == 0);
    }

    #[tokio::test]
    async fn decodes_through_configured_decoder() {
        let fetcher = Fetcher::with_parts(Echo::default(), JsonDecoder::<serde_json::Value>::new());
        let_assert!(Ok(value) = fetcher.fetch_and_parse("https://api.example.test/").await);
        check!(value["locator"] == "https://api.example.test/");

        let fetcher = fetcher.with_decoder(TextDecoder);
        let_assert!(Ok(text) = fetcher.fetch_and_parse("https://api.example.test/").await);
        check!(text == r#"{"locator":"https://api.example.test/"}"#);
    }

    #[tokio::test]
    async fn every_strategy_gives_the_same_value() {
        let fetcher = Fetcher::with_parts(Echo::default(), JsonDecoder::<serde_json::Value>::new())
            .with_logging();
        let locator = "https://api.example.test/?name=meelad";

        let_assert!(Ok(direct) = fetcher.fetch_and_parse(locator).await);
        let_assert!(Ok(callback) = fetcher.fetch_with(&CallbackStrategy, locator).await);
        let_assert!(Ok(future) = fetcher.fetch_with(&FutureStrategy, locator).await);
        let_assert!(Ok(via_async) = fetcher.fetch_with(&AsyncStrategy, locator).await);

        check!(direct == callback);
        check!(direct == future);
        check!(direct == via_async);
        check!(fetcher.transport().inner().calls.load(Ordering::SeqCst) == 4);
    }
}
