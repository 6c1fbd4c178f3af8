//! Correlation fault types.

use thiserror::Error;
use wt_core::numeric::ensure_finite;

/// Result type for correlation evaluations.
pub type CorrelationResult<T> = Result<T, CorrelationError>;

/// Numeric faults that a correlation formula can raise.
///
/// These replace the blanket catch-and-default of the reference
/// implementation: the formula reports *what* went wrong and the caller
/// decides whether to substitute a neutral value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrelationError {
    /// Argument outside the function's mathematical domain (negative
    /// square-root or fractional-power argument).
    #[error("Domain error in {what}")]
    DomainError { what: &'static str },

    /// Division by a zero denominator.
    #[error("Division by zero in {what}")]
    DivisionByZero { what: &'static str },

    /// Intermediate or final value overflowed to a non-finite number.
    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },
}

/// Validate a computed factor, naming the quantity on fault.
pub(crate) fn finite(v: f64, what: &'static str) -> CorrelationResult<f64> {
    ensure_finite(v, what).map_err(|_| CorrelationError::NonFinite { what })
}
