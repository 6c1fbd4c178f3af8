//! wt-meter: separator metering calculations for well tests.
//!
//! Provides:
//! - Orifice gas-flow measurement (basic orifice factor, expansion
//!   factor, flowing-temperature factor, supercompressibility)
//! - Two- and three-phase liquid rate splits from cumulative-meter
//!   interval volumes
//!
//! All calculations are deterministic functions of their inputs,
//! suitable for replay over a recorded test without side effects.

pub mod error;
pub mod orifice;
pub mod phase;

// Re-exports
pub use error::{MeteringError, MeteringResult};
pub use orifice::{GasProperties, OrificeMeter};
pub use phase::{INTERVALS_PER_DAY, PhaseRates, three_phase_rates, two_phase_rates};
