//! Prelude module for convenient imports.
//!
//! ```ignore
//! use fetchling::prelude::*;
//! ```

pub use crate::{
    AsyncStrategy, CallbackStrategy, Decoder, Error, FetchStrategy, Fetcher, FutureStrategy,
    HyperTransport, JsonDecoder, Locator, LoggingLayer, Response, Result, TextDecoder, Transport,
    divide, divide_deferred, with_deadline,
};

pub use serde::{Deserialize, Serialize};
