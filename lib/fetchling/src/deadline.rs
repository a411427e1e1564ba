//! Caller-side deadline.
//!
//! The fetch operation has no timeout or cancellation hook of its own. A
//! caller that cannot wait forever races it against a timer here; when the
//! timer wins the fetch future is dropped and its result discarded.

use std::future::Future;
use std::time::Duration;

use crate::{Error, Result};

/// Await `operation`, failing with [`Error::Timeout`] once `limit` elapses.
///
/// # Example
///
/// ```ignore
/// let age = with_deadline(Duration::from_secs(2), fetcher.fetch_and_parse(locator)).await?;
/// ```
pub async fn with_deadline<F, T>(limit: Duration, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(limit, operation)
        .await
        .map_err(|_| Error::Timeout)?
}
