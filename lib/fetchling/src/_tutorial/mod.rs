//! # Tutorial: From Callbacks to `async`/`await`
//!
//! The same fetch, written three ways, and then made to fail properly.
//!
//! ## Chapters
//!
//! 1. [Callbacks][chapter_0] - Hand the result to a function
//! 2. [Chaining Futures][chapter_1] - Compose steps with combinators
//! 3. [`async`/`await`][chapter_2] - Write it top to bottom
//! 4. [Error Handling][chapter_3] - Status, decode, and transport failures
//!
//! Ready? Start with [Chapter 0: Callbacks][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
pub mod chapter_3;
