//! Per-interval calculation output.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A correlation fault that was replaced by its neutral default.
///
/// The numeric output stays identical to the fail-soft reference
/// behavior; the warning records which quantity faulted and why, so a
/// near-default value can be told apart from a faulted one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcWarning {
    /// Result quantity the fallback was applied to
    pub field: String,
    /// Fault description from the correlation layer
    pub detail: String,
}

/// Gas-lift specific accounting, present only for gas-lift wells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GasLiftBreakdown {
    /// Injected gas rate copied from the entry (MSCF/d)
    pub q_gas_inj_mscf_d: f64,
    /// Produced gas net of injection, floored at zero (MSCF/d)
    pub formation_gas_mscf_d: f64,
    /// Formation-gas/oil ratio (SCF/STB)
    pub gor1_formation_scf_stb: f64,
    /// Formation GOR1 plus solution GOR (SCF/STB)
    pub total_gor_formation_scf_stb: f64,
}

/// Rates and ratios computed for one sampling interval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub time: NaiveTime,
    pub q_oil_bbl_d: f64,
    pub q_water_bbl_d: f64,
    pub total_liquid_bbl_d: f64,
    pub q_gas_mscf_d: f64,
    /// Produced-gas/oil ratio (SCF/STB), zero when no oil was produced
    pub gor1_scf_stb: f64,
    /// Solution GOR from the configured correlation (SCF/STB)
    pub gor2_scf_stb: f64,
    pub total_gor_scf_stb: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_lift: Option<GasLiftBreakdown>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<CalcWarning>,
}

impl CalculationResult {
    /// Numeric fields as (name, value) pairs, in display order.
    ///
    /// This is the key set the aggregator averages over; gas-lift fields
    /// appear only when the breakdown is present.
    pub fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        let mut fields = vec![
            ("q_oil_bbl_d", self.q_oil_bbl_d),
            ("q_water_bbl_d", self.q_water_bbl_d),
            ("total_liquid_bbl_d", self.total_liquid_bbl_d),
            ("q_gas_mscf_d", self.q_gas_mscf_d),
            ("gor1_scf_stb", self.gor1_scf_stb),
            ("gor2_scf_stb", self.gor2_scf_stb),
            ("total_gor_scf_stb", self.total_gor_scf_stb),
        ];
        if let Some(gl) = &self.gas_lift {
            fields.push(("q_gas_inj_mscf_d", gl.q_gas_inj_mscf_d));
            fields.push(("formation_gas_mscf_d", gl.formation_gas_mscf_d));
            fields.push(("gor1_formation_scf_stb", gl.gor1_formation_scf_stb));
            fields.push(("total_gor_formation_scf_stb", gl.total_gor_formation_scf_stb));
        }
        fields
    }
}
