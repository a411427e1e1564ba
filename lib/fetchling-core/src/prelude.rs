//! Prelude module for convenient imports.
//!
//! ```ignore
//! use fetchling_core::prelude::*;
//! ```

pub use crate::{
    Decoder, Error, JsonDecoder, Locator, Response, Result, TextDecoder, Transport, divide,
    divide_deferred, fetch_and_parse, from_json,
};
