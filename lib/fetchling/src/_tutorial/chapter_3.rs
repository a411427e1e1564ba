//! # Chapter 3: Error Handling
//!
//! Every failure comes back as one [`Error`][crate::Error]. Nothing is
//! retried or logged for you; the caller decides.
//!
//! ## What Can Fail
//!
//! | Stage | Variant | Example message |
//! |-------|---------|-----------------|
//! | Transport | `Connection`, `Tls`, `Timeout`, `InvalidUrl` | `connection error: ...` |
//! | Status | `Status { status, body }` | `HTTP error! Status: 404` |
//! | Decode | `Decode { path, message }` | `decode error at 'age': invalid type ...` |
//!
//! ## Log, Rethrow, or Substitute
//!
//! ```ignore
//! use fetchling::prelude::*;
//!
//! let fetcher = Fetcher::new().with_logging();
//! let data = match fetcher.fetch_and_parse(locator).await {
//!     Ok(data) => data,
//!     Err(err) if err.is_not_found() => serde_json::Value::Null, // substitute
//!     Err(err) => {
//!         eprintln!("Error fetching data: {err}");                 // log
//!         return Err(err);                                      // rethrow
//!     }
//! };
//! ```
//!
//! ## Bounding the Wait
//!
//! The fetch itself never gives up. Race it against a timer with
//! [`with_deadline`][crate::with_deadline]:
//!
//! ```ignore
//! use std::time::Duration;
//!
//! let data = with_deadline(Duration::from_secs(2), fetcher.fetch_and_parse(locator)).await?;
//! ```
//!
//! ## Failing Without I/O
//!
//! ```ignore
//! use fetchling::divide;
//!
//! match divide(10.0, 0.0) {
//!     Ok(quotient) => println!("{quotient}"),
//!     Err(err) => eprintln!("{err}"), // Cannot divide by zero!
//! }
//! ```
