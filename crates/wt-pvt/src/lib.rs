//! wt-pvt: PVT correlations for well-test analysis.
//!
//! Provides:
//! - Oil API gravity correction to the 60°F stock-tank reference
//! - Volume correction factor (VCF) for separator liquid
//! - Solution gas-oil ratio correlations (Vasquez-Beggs, Standing, Katz)
//! - Shrinkage factor with GOR/pressure-dependent coefficient tiers
//! - Supercompressibility factor (Sutton + Wichert-Aziz + Papay)
//!
//! # Architecture
//!
//! Every correlation is a pure function of its inputs. Functions whose
//! formulas can fault numerically (fractional powers, square roots,
//! divisions) return [`CorrelationResult`] carrying a typed fault instead of
//! silently substituting a default; the neutral-default fallback is the
//! caller's policy, applied where the processing pipeline can record it.

pub mod error;
pub mod gor;
pub mod oil;
pub mod supercompressibility;

// Re-exports for ergonomics
pub use error::{CorrelationError, CorrelationResult};
pub use gor::{Gor2Method, solution_gor};
pub use oil::{oil_api_at_60f, shrinkage_factor, volume_correction_factor};
pub use supercompressibility::supercompressibility_factor;
