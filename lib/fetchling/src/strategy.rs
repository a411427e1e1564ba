//! Three ways to drive the same fetch.
//!
//! Each strategy performs exactly the operation of
//! [`fetch_and_parse`](fetchling_core::fetch_and_parse) (fetch, status check,
//! decode) and yields the same result. They differ only in how completion
//! reaches the caller:
//!
//! - [`CallbackStrategy`] runs the fetch on a spawned task and hands the
//!   outcome to a callback.
//! - [`FutureStrategy`] chains the steps with `TryFutureExt` combinators.
//! - [`AsyncStrategy`] is plain `async`/`await` with `?`.

use std::future::{Future, ready};

use futures_util::TryFutureExt;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::{Decoder, Error, Locator, Result, Transport};

/// A way of running one fetch-and-parse.
pub trait FetchStrategy {
    /// Short name, used in logs and demo output.
    fn name(&self) -> &'static str;

    /// Fetch `locator` and decode its body.
    ///
    /// # Errors
    ///
    /// Same failure channel as [`fetchling_core::fetch_and_parse`].
    fn fetch_and_parse<X, D>(
        &self,
        transport: X,
        decoder: D,
        locator: Locator,
    ) -> impl Future<Output = Result<D::Output>> + Send
    where
        X: Transport + 'static,
        D: Decoder + 'static,
        D::Output: 'static;
}

/// Completion delivered to a callback from a spawned task.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallbackStrategy;

impl CallbackStrategy {
    /// Spawn the fetch and call `callback` with its outcome.
    ///
    /// Must be called from within a Tokio runtime. The returned handle only
    /// tells when the callback has run; the outcome goes to the callback.
    ///
    /// # Example
    ///
    /// ```ignore
    /// CallbackStrategy::fetch_with_callback(transport, JsonDecoder::<Value>::new(), locator, |result| {
    ///     match result {
    ///         Ok(data) => println!("Data received: {data}"),
    ///         Err(err) => eprintln!("Error in fetch: {err}"),
    ///     }
    /// });
    /// ```
    pub fn fetch_with_callback<X, D, F>(
        transport: X,
        decoder: D,
        locator: Locator,
        callback: F,
    ) -> JoinHandle<()>
    where
        X: Transport + 'static,
        D: Decoder + 'static,
        D::Output: 'static,
        F: FnOnce(Result<D::Output>) + Send + 'static,
    {
        tokio::spawn(async move {
            let result = fetchling_core::fetch_and_parse(&transport, &decoder, &locator).await;
            callback(result);
        })
    }
}

impl FetchStrategy for CallbackStrategy {
    fn name(&self) -> &'static str {
        "callback"
    }

    fn fetch_and_parse<X, D>(
        &self,
        transport: X,
        decoder: D,
        locator: Locator,
    ) -> impl Future<Output = Result<D::Output>> + Send
    where
        X: Transport + 'static,
        D: Decoder + 'static,
        D::Output: 'static,
    {
        async move {
            let (tx, rx) = oneshot::channel();
            let _task = AbortOnDrop(Self::fetch_with_callback(
                transport,
                decoder,
                locator,
                move |result| {
                    // The receiver only goes away if the caller stopped waiting.
                    let _ = tx.send(result);
                },
            ));
            rx.await.unwrap_or(Err(Error::Callback))
        }
    }
}

/// Aborts the spawned fetch once nobody awaits its outcome.
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Steps chained with future combinators.
#[derive(Debug, Clone, Copy, Default)]
pub struct FutureStrategy;

impl FetchStrategy for FutureStrategy {
    fn name(&self) -> &'static str {
        "future"
    }

    fn fetch_and_parse<X, D>(
        &self,
        transport: X,
        decoder: D,
        locator: Locator,
    ) -> impl Future<Output = Result<D::Output>> + Send
    where
        X: Transport + 'static,
        D: Decoder + 'static,
        D::Output: 'static,
    {
        async move {
            transport
                .fetch(&locator)
                .and_then(|response| ready(response.error_for_status()))
                .and_then(|response| decoder.decode(response.into_body()))
                .await
        }
    }
}

/// Plain `async`/`await`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncStrategy;

impl FetchStrategy for AsyncStrategy {
    fn name(&self) -> &'static str {
        "async"
    }

    fn fetch_and_parse<X, D>(
        &self,
        transport: X,
        decoder: D,
        locator: Locator,
    ) -> impl Future<Output = Result<D::Output>> + Send
    where
        X: Transport + 'static,
        D: Decoder + 'static,
        D::Output: 'static,
    {
        async move { fetchling_core::fetch_and_parse(&transport, &decoder, &locator).await }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use assert2::{check, let_assert};
    use bytes::Bytes;

    use super::*;
    use crate::{JsonDecoder, Response};

    #[derive(Clone)]
    struct Canned {
        status: u16,
        body: &'static str,
    }

    impl Transport for Canned {
        fn fetch(&self, _locator: &Locator) -> impl Future<Output = Result<Response<Bytes>>> + Send {
            ready(Ok(Response::new(
                self.status,
                HashMap::new(),
                Bytes::from_static(self.body.as_bytes()),
            )))
        }
    }

    /// Counts how often it is asked to decode.
    #[derive(Clone, Default)]
    struct CountingDecoder {
        calls: Arc<AtomicUsize>,
    }

    impl Decoder for CountingDecoder {
        type Output = serde_json::Value;

        fn decode(&self, _body: Bytes) -> impl Future<Output = Result<Self::Output>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            ready(Ok(serde_json::Value::Null))
        }
    }

    const BODY: &str = r#"{"name":"meelad","age":42}"#;

    fn locator() -> Locator {
        Locator::new("https://api.example.test/?name=meelad").expect("locator")
    }

    async fn run<S: FetchStrategy>(strategy: S, status: u16, body: &'static str) -> Result<serde_json::Value> {
        strategy
            .fetch_and_parse(
                Canned { status, body },
                JsonDecoder::<serde_json::Value>::new(),
                locator(),
            )
            .await
    }

    #[tokio::test]
    async fn strategies_agree_on_success() {
        let expected = serde_json::json!({"name": "meelad", "age": 42});

        let_assert!(Ok(callback) = run(CallbackStrategy, 200, BODY).await);
        let_assert!(Ok(future) = run(FutureStrategy, 200, BODY).await);
        let_assert!(Ok(direct) = run(AsyncStrategy, 200, BODY).await);

        check!(callback == expected);
        check!(future == expected);
        check!(direct == expected);
    }

    #[tokio::test]
    async fn strategies_agree_on_status_failure() {
        for result in [
            run(CallbackStrategy, 500, "").await,
            run(FutureStrategy, 500, "").await,
            run(AsyncStrategy, 500, "").await,
        ] {
            let_assert!(Err(err) = result);
            check!(err.status() == Some(500));
        }
    }

    #[tokio::test]
    async fn strategies_agree_on_decode_failure() {
        for result in [
            run(CallbackStrategy, 200, "{").await,
            run(FutureStrategy, 200, "{").await,
            run(AsyncStrategy, 200, "{").await,
        ] {
            let_assert!(Err(err) = result);
            check!(err.is_decode());
        }
    }

    #[tokio::test]
    async fn future_strategy_skips_decoding_on_status_failure() {
        let decoder = CountingDecoder::default();
        let calls = Arc::clone(&decoder.calls);

        let_assert!(
            Err(err) = FutureStrategy
                .fetch_and_parse(Canned { status: 404, body: "" }, decoder, locator())
                .await
        );
        check!(err.is_not_found());
        check!(calls.load(Ordering::SeqCst) == 0);
    }

    #[tokio::test]
    async fn callback_receives_outcome() {
        let (tx, rx) = oneshot::channel();
        let handle = CallbackStrategy::fetch_with_callback(
            Canned {
                status: 200,
                body: BODY,
            },
            JsonDecoder::<serde_json::Value>::new(),
            locator(),
            move |result| {
                let _ = tx.send(result);
            },
        );

        let_assert!(Ok(()) = handle.await);
        let_assert!(Ok(Ok(value)) = rx.await);
        check!(value["age"] == 42);
    }

    /// Panics instead of decoding a non-empty body.
    struct Fragile;

    impl Decoder for Fragile {
        type Output = serde_json::Value;

        fn decode(&self, body: Bytes) -> impl Future<Output = Result<Self::Output>> + Send {
            assert!(body.is_empty(), "decoder crashed on {} bytes", body.len());
            ready(Ok(serde_json::Value::Null))
        }
    }

    /// Never answers; `live` counts fetches still in flight.
    struct Stalled {
        started: Arc<AtomicUsize>,
        live: Arc<AtomicUsize>,
    }

    struct InFlight(Arc<AtomicUsize>);

    impl Drop for InFlight {
        fn drop(&mut self) {
            self.0.fetch_sub(1, Ordering::SeqCst);
        }
    }

    impl Transport for Stalled {
        fn fetch(&self, _locator: &Locator) -> impl Future<Output = Result<Response<Bytes>>> + Send {
            self.started.fetch_add(1, Ordering::SeqCst);
            self.live.fetch_add(1, Ordering::SeqCst);
            let in_flight = InFlight(Arc::clone(&self.live));
            async move {
                let _in_flight = in_flight;
                std::future::pending::<Result<Response<Bytes>>>().await
            }
        }
    }

    #[tokio::test]
    async fn callback_task_dying_is_reported() {
        let canned = Canned {
            status: 200,
            body: BODY,
        };

        let_assert!(Err(err) = CallbackStrategy.fetch_and_parse(canned, Fragile, locator()).await);
        check!(matches!(err, Error::Callback));
    }

    #[tokio::test]
    async fn abandoned_callback_fetch_is_cancelled() {
        let started = Arc::new(AtomicUsize::new(0));
        let live = Arc::new(AtomicUsize::new(0));
        let transport = Stalled {
            started: Arc::clone(&started),
            live: Arc::clone(&live),
        };

        let outcome = crate::with_deadline(
            Duration::from_millis(50),
            CallbackStrategy.fetch_and_parse(
                transport,
                JsonDecoder::<serde_json::Value>::new(),
                locator(),
            ),
        )
        .await;
        let_assert!(Err(err) = outcome);
        check!(err.is_timeout());
        check!(started.load(Ordering::SeqCst) == 1);

        for _ in 0..16 {
            if live.load(Ordering::SeqCst) == 0 {
                break;
            }
            tokio::task::yield_now().await;
        }
        check!(live.load(Ordering::SeqCst) == 0);
    }

    #[test]
    fn names() {
        check!(CallbackStrategy.name() == "callback");
        check!(FutureStrategy.name() == "future");
        check!(AsyncStrategy.name() == "async");
    }
}
