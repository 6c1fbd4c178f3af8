//! Test-level aggregation of interval results.

use crate::result::CalculationResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Arithmetic mean of every numeric result field, keyed by field name.
///
/// Empty when computed from an empty result sequence. Gas-lift keys are
/// present only when the results carry a gas-lift breakdown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Averages(pub BTreeMap<String, f64>);

impl Averages {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.0.get(field).copied()
    }
}

/// Unweighted arithmetic mean of each numeric field across all results.
pub fn compute_averages(results: &[CalculationResult]) -> Averages {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for result in results {
        for (name, value) in result.numeric_fields() {
            let slot = sums.entry(name.to_string()).or_insert((0.0, 0));
            slot.0 += value;
            slot.1 += 1;
        }
    }

    Averages(
        sums.into_iter()
            .map(|(name, (sum, count))| (name, sum / count as f64))
            .collect(),
    )
}
