//! Division with a failure path.
//!
//! A second, I/O-free illustration of fallible operations: the same outcome
//! is available directly and as an already-settled future.

use std::future::{Future, ready};

use crate::{Error, Result};

/// Divide `dividend` by `divisor`.
///
/// # Errors
///
/// Returns [`Error::DivideByZero`] when `divisor` is zero.
///
/// # Example
///
/// ```
/// use fetchling_core::divide;
///
/// assert_eq!(divide(10.0, 2.0).expect("non-zero divisor"), 5.0);
/// assert_eq!(divide(10.0, 0.0).unwrap_err().to_string(), "Cannot divide by zero!");
/// ```
pub fn divide(dividend: f64, divisor: f64) -> Result<f64> {
    if divisor == 0.0 {
        return Err(Error::DivideByZero);
    }
    Ok(dividend / divisor)
}

/// [`divide`], delivered through a future that is settled on first poll.
pub fn divide_deferred(dividend: f64, divisor: f64) -> impl Future<Output = Result<f64>> + Send {
    ready(divide(dividend, divisor))
}
