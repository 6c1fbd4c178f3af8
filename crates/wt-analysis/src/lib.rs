//! wt-analysis: well-test time-series processing.
//!
//! Turns an ordered sequence of separator measurements into per-interval
//! oil/water/gas rates and gas-oil ratios, then aggregates them into a
//! test summary.
//!
//! The engine exposes two entry points:
//! - [`compute_results`]: parameters + chronological entries -> one
//!   [`CalculationResult`] per entry
//! - [`compute_averages`]: results -> field-wise arithmetic means
//!
//! Both are pure functions; the cumulative-meter state that links one
//! interval to the next is an explicit accumulator inside the fold, so
//! re-running on identical inputs yields identical output.

pub mod aggregate;
pub mod document;
pub mod entry;
pub mod parameters;
pub mod processor;
pub mod result;
pub mod schedule;

// Re-exports for the public API surface
pub use aggregate::{Averages, compute_averages};
pub use document::TestDocument;
pub use entry::TimeSeriesEntry;
pub use parameters::{ProductionType, SeparationType, TestParameters};
pub use processor::compute_results;
pub use result::{CalcWarning, CalculationResult, GasLiftBreakdown};
pub use schedule::sample_times;
