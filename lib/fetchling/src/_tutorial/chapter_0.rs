//! # Chapter 0: Callbacks
//!
//! Deliver a value to a function once it is ready.
//!
//! ## What You'll Learn
//!
//! - Produce a value after a delay with [`deliver_after_with_callback`][crate::deliver_after_with_callback]
//! - Run a whole fetch with [`CallbackStrategy`][crate::CallbackStrategy]
//! - Why nested callbacks get hard to follow
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fetchling = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ## A Delayed Value
//!
//! ```ignore
//! use fetchling::{DEFAULT_DELAY, deliver_after_with_callback};
//!
//! #[tokio::main]
//! async fn main() {
//!     let done = deliver_after_with_callback(
//!         "https://api.agify.io/?name=meelad",
//!         DEFAULT_DELAY,
//!         |locator| println!("{locator}"),
//!     );
//!     done.await.ok();
//! }
//! ```
//!
//! The callback runs on a spawned task one second later. `main` only learns
//! that it ran, not what it received.
//!
//! ## A Fetch With a Callback
//!
//! ```ignore
//! use fetchling::prelude::*;
//!
//! let locator = Locator::new("https://api.agify.io/?name=meelad")?;
//! CallbackStrategy::fetch_with_callback(
//!     HyperTransport::new(),
//!     JsonDecoder::<serde_json::Value>::new(),
//!     locator,
//!     |result| match result {
//!         Ok(data) => println!("Data received: {data}"),
//!         Err(err) => eprintln!("Error in fetch: {err}"),
//!     },
//! );
//! ```
//!
//! Using the result for a second request means starting that request from
//! inside the first callback, and so on. Each step nests one level deeper.
//!
//! ## Next Steps
//!
//! - [Chapter 1: Chaining Futures][super::chapter_1] - Flatten the nesting
