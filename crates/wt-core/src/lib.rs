//! wt-core: stable foundation for the well-test engine.
//!
//! Contains:
//! - units (field-unit conversions + constants)
//! - numeric (tolerances + float validation helpers)
//! - error (shared numeric fault type)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WtError, WtResult};
pub use numeric::*;
pub use units::*;
