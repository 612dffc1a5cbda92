//! Pure computations behind the HTTP endpoints.
//!
//! # Data Flow
//! ```text
//! raw path segment
//!     → arithmetic.rs (parse operands, checked integer math, sqrt)
//!     → text.rs (palindrome check)
//!     → calendar.rs (date formatting, days until new year via Clock)
//!     → value or CalcError
//! ```
//!
//! # Design Decisions
//! - No HTTP types in this module; handlers adapt results to responses
//! - Non-numeric input is rejected, never coerced to zero
//! - Integer overflow is an error, not wraparound

pub mod arithmetic;
pub mod calendar;
pub mod text;

use thiserror::Error;

/// Errors produced by the computations.
///
/// The `Display` strings are returned verbatim to clients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,

    #[error("Cannot take square root of a negative number")]
    NegativeSqrt,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Result out of range")]
    Overflow,
}

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

pub use calendar::{Clock, FixedClock, SystemClock};
