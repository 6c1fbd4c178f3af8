//! Test-document schema.
//!
//! The opaque per-test document the surrounding application persists and
//! hands to the engine: parameters plus the ordered entry sequence. The
//! CLI loads it from YAML; it round-trips through JSON unchanged.

use crate::entry::TimeSeriesEntry;
use crate::parameters::TestParameters;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestDocument {
    /// Well or test identifier
    pub name: String,
    pub parameters: TestParameters,
    /// Chronologically ordered measurement intervals
    #[serde(default)]
    pub entries: Vec<TimeSeriesEntry>,
}
