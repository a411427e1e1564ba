//! Core types and traits for fetchling.
//!
//! This crate provides the runtime-independent half of fetchling:
//! - [`Locator`] - Non-empty resource locator
//! - [`Response`] - HTTP response type
//! - [`Error`] and [`Result`] - Error handling
//! - [`Transport`] - Collaborator that performs the network exchange
//! - [`Decoder`], [`JsonDecoder`], [`TextDecoder`] - Body decoding
//! - [`fetch_and_parse`] - The single-shot fetch, check, decode operation
//! - [`divide`] and [`divide_deferred`] - I/O-free fallible example
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)

mod decode;
mod divide;
mod error;
mod fetch;
mod locator;
pub mod prelude;
mod response;
mod transport;

pub use decode::{Decoder, JsonDecoder, TextDecoder, from_json, from_utf8};
pub use divide::{divide, divide_deferred};
pub use error::{Error, Result};
pub use fetch::fetch_and_parse;
pub use locator::Locator;
pub use response::Response;
pub use transport::Transport;

// Re-export http crate types for status codes
pub use http::StatusCode;
