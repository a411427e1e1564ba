//! Timer-based delayed values.
//!
//! The smallest possible asynchronous producer: a value that becomes
//! available after a fixed delay. Used by the tutorial to contrast callback
//! and future delivery before any network is involved.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay used by the examples.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Resolve to `value` once `delay` has elapsed.
///
/// # Example
///
/// ```ignore
/// let message = deliver_after("Data fetched", DEFAULT_DELAY).await;
/// ```
pub async fn deliver_after<T>(value: T, delay: Duration) -> T {
    tokio::time::sleep(delay).await;
    value
}

/// Spawn a task that calls `callback` with `value` once `delay` has elapsed.
///
/// Must be called from within a Tokio runtime.
pub fn deliver_after_with_callback<T, F>(value: T, delay: Duration, callback: F) -> JoinHandle<()>
where
    T: Send + 'static,
    F: FnOnce(T) + Send + 'static,
{
    tokio::spawn(async move {
        callback(deliver_after(value, delay).await);
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use assert2::{check, let_assert};
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn resolves_after_delay() {
        let start = Instant::now();
        let value = deliver_after("Data fetched", DEFAULT_DELAY).await;

        check!(value == "Data fetched");
        check!(start.elapsed() >= DEFAULT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn callback_runs_after_delay() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);

        let handle = deliver_after_with_callback(
            "https://api.agify.io/?name=meelad".to_string(),
            DEFAULT_DELAY,
            move |value| {
                if let Ok(mut slot) = sink.lock() {
                    *slot = Some(value);
                }
            },
        );

        tokio::time::advance(DEFAULT_DELAY / 2).await;
        check!(seen.lock().map(|slot| slot.is_none()).unwrap_or(false));

        let_assert!(Ok(()) = handle.await);
        let_assert!(Ok(slot) = seen.lock());
        check!(slot.as_deref() == Some("https://api.agify.io/?name=meelad"));
    }
}
