//! Single-shot asynchronous fetch-and-parse for Rust.
//!
//! Fetch a resource, check its status, decode its body, and get back either
//! the value or one descriptive [`Error`]. No retries, no caching, no hidden
//! state between calls.
//!
//! # Example
//!
//! ```ignore
//! use fetchling::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Agify {
//!     name: String,
//!     age: Option<u32>,
//! }
//!
//! let fetcher = Fetcher::json::<Agify>();
//! let guess = fetcher.fetch_and_parse("https://api.agify.io/?name=meelad").await?;
//! ```
//!
//! The same fetch can be driven as a callback, as a chain of future
//! combinators, or with `async`/`await`; see [`strategy`]. The
//! [tutorial][_tutorial] walks through all three.

pub mod _tutorial;
mod config;
mod connector;
pub mod deadline;
pub mod delay;
mod fetcher;
mod logging;
pub mod prelude;
pub mod strategy;
mod transport;

pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_USER_AGENT};
pub use deadline::with_deadline;
pub use delay::{DEFAULT_DELAY, deliver_after, deliver_after_with_callback};
pub use fetcher::Fetcher;
pub use logging::{LogLevel, Logging, LoggingLayer};
pub use strategy::{AsyncStrategy, CallbackStrategy, FetchStrategy, FutureStrategy};
pub use transport::{HyperTransport, HyperTransportBuilder, TransportFuture};

// Re-export tower for layer composition
pub use tower;

// Re-export core types
pub use fetchling_core::{
    Decoder, Error, JsonDecoder, Locator, Response, Result, StatusCode, TextDecoder, Transport,
    divide, divide_deferred, fetch_and_parse, from_json, from_utf8,
};
