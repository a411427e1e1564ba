//! Body decoding.
//!
//! A [`Decoder`] turns a buffered response body into the caller's value. It
//! returns a future so that decoders doing real work (streaming parsers,
//! offloading to a blocking pool) fit the same seam as the in-memory ones
//! shipped here.

use std::fmt;
use std::future::{Future, ready};
use std::marker::PhantomData;

use bytes::Bytes;

use crate::Result;

/// Decode collaborator for [`crate::fetch_and_parse`].
pub trait Decoder: Send + Sync {
    /// The decoded value.
    type Output: Send;

    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Decode`] when the body does not have the
    /// expected shape.
    fn decode(&self, body: Bytes) -> impl Future<Output = Result<Self::Output>> + Send;
}

impl<D: Decoder> Decoder for &D {
    type Output = D::Output;

    fn decode(&self, body: Bytes) -> impl Future<Output = Result<Self::Output>> + Send {
        (**self).decode(body)
    }
}

/// Decodes JSON bodies into any `DeserializeOwned` type.
///
/// # Example
///
/// ```
/// use fetchling_core::{Decoder, JsonDecoder};
///
/// # tokio_test_block_on(async {
/// let decoder = JsonDecoder::<serde_json::Value>::new();
/// let value = decoder.decode(r#"{"age":42}"#.into()).await.expect("json");
/// assert_eq!(value["age"], 42);
/// # });
/// # fn tokio_test_block_on(f: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(f)
/// # }
/// ```
pub struct JsonDecoder<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> JsonDecoder<T> {
    /// Creates a JSON decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for JsonDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonDecoder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonDecoder<T> {}

impl<T> fmt::Debug for JsonDecoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonDecoder")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Decoder for JsonDecoder<T>
where
    T: serde::de::DeserializeOwned + Send,
{
    type Output = T;

    fn decode(&self, body: Bytes) -> impl Future<Output = Result<T>> + Send {
        ready(from_json(&body))
    }
}

/// Decodes bodies as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecoder;

impl Decoder for TextDecoder {
    type Output = String;

    fn decode(&self, body: Bytes) -> impl Future<Output = Result<String>> + Send {
        ready(from_utf8(body))
    }
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the exact field that
/// failed (e.g. `user.address.city`).
///
/// # Example
///
/// ```
/// use fetchling_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Person { name: String, age: u32 }
///
/// let person: Person = from_json(br#"{"name":"meelad","age":42}"#).expect("deserialize");
/// assert_eq!(person, Person { name: "meelad".to_string(), age: 42 });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::decode(e.path().to_string(), e.inner().to_string())
    })?;
    // Reject trailing garbage such as `{"a":1} tail`.
    deserializer
        .end()
        .map_err(|e| crate::Error::decode(".", e.to_string()))?;
    Ok(value)
}

/// Interpret bytes as UTF-8 text.
pub fn from_utf8(bytes: Bytes) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| crate::Error::decode(".", e.to_string()))
}
