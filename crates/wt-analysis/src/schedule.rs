//! Sampling-schedule generation.
//!
//! Production tests sample on a fixed 30-minute grid over a configured
//! duration; this pre-populates the time column of a test document.

use chrono::{Duration, NaiveTime};

/// Minutes between samples.
pub const SAMPLE_INTERVAL_MIN: i64 = 30;

/// 30-minute sample times covering `duration_hours` from `start`,
/// inclusive of the start and exclusive of the end.
///
/// Times wrap past midnight for tests running overnight.
pub fn sample_times(start: NaiveTime, duration_hours: u32) -> Vec<NaiveTime> {
    let samples = (i64::from(duration_hours) * 60) / SAMPLE_INTERVAL_MIN;
    (0..samples)
        .map(|i| start + Duration::minutes(i * SAMPLE_INTERVAL_MIN))
        .collect()
}
