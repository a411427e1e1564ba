//! Transport collaborator.
//!
//! Anything that can turn a [`Locator`] into a [`Response`] satisfies
//! [`Transport`]: the hyper-based client in `fetchling`, a logging wrapper
//! around it, or an in-memory stub in tests.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Locator, Response, Result};

/// Core transport trait.
///
/// Implementations perform exactly one exchange per call and report failures
/// to produce a response (connection, TLS, transport-level timeout) as
/// errors. A non-2xx status is not a transport failure.
pub trait Transport: Send + Sync {
    /// Fetch the resource identified by `locator`.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained:
    /// - Invalid URL
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn fetch(&self, locator: &Locator) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<T: Transport> Transport for &T {
    fn fetch(&self, locator: &Locator) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).fetch(locator)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn fetch(&self, locator: &Locator) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        (**self).fetch(locator)
    }
}
