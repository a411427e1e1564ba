//! # Chapter 2: `async`/`await`
//!
//! An `async fn` returns a future; `.await` suspends until it is ready. The
//! code reads top to bottom.
//!
//! ## The Fetch, Linearly
//!
//! This is what [`fetch_and_parse`][crate::fetch_and_parse] does:
//!
//! ```ignore
//! pub async fn fetch_and_parse<X: Transport, D: Decoder>(
//!     transport: &X,
//!     decoder: &D,
//!     locator: &Locator,
//! ) -> Result<D::Output> {
//!     let response = transport.fetch(locator).await?.error_for_status()?;
//!     decoder.decode(response.into_body()).await
//! }
//! ```
//!
//! Two suspension points, in order: the exchange, then decoding. Decoding
//! never starts before the status check passed.
//!
//! ## Using It
//!
//! ```ignore
//! use fetchling::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! struct Agify {
//!     name: String,
//!     age: Option<u32>,
//! }
//!
//! #[tokio::main]
//! async fn main() -> fetchling::Result<()> {
//!     let fetcher = Fetcher::json::<Agify>();
//!     let guess = fetcher.fetch_and_parse("https://api.agify.io/?name=meelad").await?;
//!     println!("{guess:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Comparing the Three
//!
//! | Strategy | Completion arrives | Errors |
//! |----------|--------------------|--------|
//! | [`CallbackStrategy`][crate::CallbackStrategy] | in a callback on another task | `Result` passed to the callback |
//! | [`FutureStrategy`][crate::FutureStrategy] | at the end of a combinator chain | first `Err` short-circuits |
//! | [`AsyncStrategy`][crate::AsyncStrategy] | where you `.await` | `?` |
//!
//! All three return the same value for the same input.
//!
//! ## Next Steps
//!
//! - [Chapter 3: Error Handling][super::chapter_3] - What can go wrong
