//! Error types for metering calculations.

use thiserror::Error;
use wt_pvt::CorrelationError;

/// Errors that can occur during metering calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeteringError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Correlation fault: {0}")]
    Correlation(#[from] CorrelationError),
}

pub type MeteringResult<T> = Result<T, MeteringError>;
