//! Per-test configuration.

use serde::{Deserialize, Serialize};
use wt_meter::{GasProperties, OrificeMeter};
use wt_pvt::Gor2Method;

/// Separator configuration for the test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationType {
    /// Separate oil- and water-leg meters plus water-in-oil fraction.
    ThreePhase,
    /// Combined liquid-leg meter plus BSW fraction.
    TwoPhase,
}

/// Lift mechanism of the tested well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionType {
    NaturalFlow,
    /// Adds injected-gas accounting: formation gas and formation GORs.
    GasLift,
    Esp,
}

/// Immutable test-level configuration, entered once per test.
///
/// Read-only to the engine; each measurement interval supplies the
/// per-entry values in [`crate::TimeSeriesEntry`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TestParameters {
    /// Oil gravity at observed conditions (°API)
    pub oil_api: f64,
    /// Temperature at which the gravity was observed (°C)
    pub oil_temp_obs_c: f64,
    /// Liquid meter calibration factor (dimensionless, typically 0.5-1.5)
    pub meter_factor: f64,
    pub separation_type: SeparationType,
    pub production_type: ProductionType,
    #[serde(default)]
    pub gor2_method: Gor2Method,
    /// Gas specific gravity relative to air
    pub sg_gas: f64,
    /// Orifice plate bore (inches)
    pub orifice_d_in: f64,
    /// Meter tube internal diameter (inches)
    pub line_bore_in: f64,
    /// Hydrogen sulfide content (ppm, mole basis)
    #[serde(default)]
    pub h2s_ppm: f64,
    /// Carbon dioxide content (ppm, mole basis)
    #[serde(default)]
    pub co2_ppm: f64,
}

impl TestParameters {
    /// Orifice meter geometry for the gas leg.
    pub fn orifice_meter(&self) -> OrificeMeter {
        OrificeMeter::new(self.orifice_d_in, self.line_bore_in)
    }

    /// Gas composition inputs for the metering chain.
    pub fn gas_properties(&self) -> GasProperties {
        GasProperties {
            sg_gas: self.sg_gas,
            h2s_ppm: self.h2s_ppm,
            co2_ppm: self.co2_ppm,
        }
    }
}
