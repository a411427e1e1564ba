//! # Chapter 1: Chaining Futures
//!
//! A future is a value that will be ready later. Combinators let you say
//! what happens next without nesting.
//!
//! ## A Delayed Value
//!
//! ```ignore
//! use fetchling::{DEFAULT_DELAY, deliver_after};
//! use futures_util::FutureExt;
//!
//! deliver_after("https://api.agify.io/?name=meelad", DEFAULT_DELAY)
//!     .map(|locator| println!("{locator}"))
//!     .await;
//! ```
//!
//! ## A Fetch as a Chain
//!
//! [`FutureStrategy`][crate::FutureStrategy] is built from `TryFutureExt`:
//!
//! ```text
//! transport.fetch(&locator)                                 // Result<Response>
//!     .and_then(|response| ready(response.error_for_status())) // stop on non-2xx
//!     .and_then(|response| decoder.decode(response.into_body()))
//! ```
//!
//! Each `and_then` only runs when the previous step succeeded; the first
//! error short-circuits to the end of the chain.
//!
//! ```ignore
//! use fetchling::prelude::*;
//!
//! let fetcher = Fetcher::new();
//! let data = fetcher
//!     .fetch_with(&FutureStrategy, "https://api.agify.io/?name=meelad")
//!     .await?;
//! ```
//!
//! ## Already-Settled Futures
//!
//! Not every future waits on I/O. [`divide_deferred`][crate::divide_deferred]
//! wraps a plain computation:
//!
//! ```ignore
//! use fetchling::divide_deferred;
//! use futures_util::TryFutureExt;
//!
//! divide_deferred(10.0, 2.0)
//!     .map_ok(|quotient| println!("{quotient}"))
//!     .map_err(|err| eprintln!("{err}"))
//!     .await
//!     .ok();
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 2: `async`/`await`][super::chapter_2] - Drop the combinators
