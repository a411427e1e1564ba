//! The single-shot fetch-and-parse operation.

use crate::{Decoder, Locator, Result, Transport};

/// Fetch `locator` through `transport` and decode the body with `decoder`.
///
/// The operation suspends twice, strictly in order: once for the transport
/// exchange and once for decoding. Decoding only starts after the status was
/// found to be 2xx. Every failure is returned as is; nothing is retried,
/// cached or logged here.
///
/// # Errors
///
/// - Transport errors ([`crate::Error::Connection`], [`crate::Error::Tls`],
///   [`crate::Error::Timeout`], [`crate::Error::InvalidUrl`]) when no
///   response was produced.
/// - [`crate::Error::Status`] for a non-2xx status; the decoder is never
///   called in that case.
/// - [`crate::Error::Decode`] when the body does not decode.
///
/// # Example
///
/// ```ignore
/// use fetchling_core::{JsonDecoder, Locator, fetch_and_parse};
///
/// let locator = Locator::new("https://api.agify.io/?name=meelad")?;
/// let value: serde_json::Value =
///     fetch_and_parse(&transport, &JsonDecoder::new(), &locator).await?;
/// ```
pub async fn fetch_and_parse<X, D>(transport: &X, decoder: &D, locator: &Locator) -> Result<D::Output>
where
    X: Transport,
    D: Decoder,
{
    let response = transport.fetch(locator).await?.error_for_status()?;
    decoder.decode(response.into_body()).await
}
