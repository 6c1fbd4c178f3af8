//! One measurement interval of the test.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A single sampling interval of the production test.
///
/// Entries form a chronologically ordered sequence; the cumulative meter
/// readings are differenced against the previous entry's, so order is
/// significant. Numeric fields default to zero when absent, matching the
/// blank-cell behavior of the data-entry grid that feeds the engine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TimeSeriesEntry {
    /// Sample time (wall clock, 30-minute grid)
    pub time: NaiveTime,
    /// Choke setting (64ths of an inch)
    #[serde(default)]
    pub choke: f64,
    /// Wellhead pressure (psig)
    #[serde(default)]
    pub whp_psig: f64,
    /// Wellhead temperature (°C)
    #[serde(default)]
    pub wht_c: f64,
    /// Casing pressure (psig)
    #[serde(default)]
    pub casing_psig: f64,
    /// Separator pressure (psig)
    #[serde(default)]
    pub sep_p_psig: f64,
    /// Gas-leg temperature (°C)
    #[serde(default)]
    pub gas_t_c: f64,
    /// Oil-outlet pressure (psig)
    #[serde(default)]
    pub oil_outlet_p_psig: f64,
    /// Oil-outlet temperature (°C); also used as the separator liquid
    /// temperature for VCF and solution-GOR evaluation
    #[serde(default)]
    pub oil_t_c: f64,
    /// Cumulative oil-leg meter reading (bbl, three-phase only)
    #[serde(default)]
    pub meter_oil_bbl: f64,
    /// Cumulative water-leg meter reading (bbl, three-phase only)
    #[serde(default)]
    pub meter_water_bbl: f64,
    /// Water-in-oil fraction (%, three-phase only)
    #[serde(default)]
    pub wio_pct: f64,
    /// Cumulative liquid-leg meter reading (bbl, two-phase only)
    #[serde(default)]
    pub meter_liquid_bbl: f64,
    /// Basic sediment and water fraction (%, two-phase only)
    #[serde(default)]
    pub bsw_pct: f64,
    /// Orifice differential pressure (inH2O)
    #[serde(default)]
    pub gas_dp_in_h2o: f64,
    /// Injected gas rate (MSCF/d, gas lift only)
    #[serde(default)]
    pub q_gas_inj_mscf_d: f64,
}
