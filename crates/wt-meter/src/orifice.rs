//! Orifice gas-flow measurement.
//!
//! Implements the square-root orifice metering equation with the factor
//! chain used for separator gas lines: basic orifice factor from plate
//! geometry, specific-gravity factor, expansion factor, flowing
//! temperature factor, and supercompressibility.

use crate::error::{MeteringError, MeteringResult};
use serde::{Deserialize, Serialize};
use wt_core::units::{
    PSI_PER_IN_H2O, celsius_to_fahrenheit, fahrenheit_to_rankine, gauge_to_absolute_psia,
};
use wt_pvt::supercompressibility_factor;

/// Gas composition inputs shared by the metering chain.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GasProperties {
    /// Specific gravity relative to air (dimensionless)
    pub sg_gas: f64,
    /// Hydrogen sulfide content (ppm, mole basis)
    #[serde(default)]
    pub h2s_ppm: f64,
    /// Carbon dioxide content (ppm, mole basis)
    #[serde(default)]
    pub co2_ppm: f64,
}

/// Orifice meter plate and tube geometry (inches).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct OrificeMeter {
    /// Orifice plate bore diameter
    pub orifice_d_in: f64,
    /// Meter tube internal diameter
    pub line_bore_in: f64,
}

impl OrificeMeter {
    pub fn new(orifice_d_in: f64, line_bore_in: f64) -> Self {
        Self {
            orifice_d_in,
            line_bore_in,
        }
    }

    /// Diameter ratio β = d/D.
    pub fn beta(&self) -> MeteringResult<f64> {
        if self.line_bore_in <= 0.0 {
            return Err(MeteringError::InvalidArg {
                what: "line bore must be positive",
            });
        }
        Ok(self.orifice_d_in / self.line_bore_in)
    }

    /// Discharge coefficient from the β-ratio fit.
    pub fn discharge_coefficient(&self) -> MeteringResult<f64> {
        let beta = self.beta()?;
        Ok(0.5959 + 0.0312 * beta.powf(2.1) - 0.1840 * beta.powi(8))
    }

    /// Basic orifice factor Fb.
    ///
    /// Requires β < 1: the velocity-of-approach term 1/sqrt(1-β⁴)
    /// diverges as the bore fills the tube.
    pub fn basic_orifice_factor(&self) -> MeteringResult<f64> {
        let beta = self.beta()?;
        let approach = 1.0 - beta.powi(4);
        if approach <= 0.0 {
            return Err(MeteringError::NonPhysical {
                what: "beta ratio must be below 1",
            });
        }
        let cd = self.discharge_coefficient()?;
        Ok(338.17 * self.orifice_d_in * self.orifice_d_in * cd / approach.sqrt())
    }

    /// Supercompressibility factor at flowing conditions upstream of
    /// the plate.
    ///
    /// Kept separate from the rate equation so the caller owns the
    /// fallback when the Papay chain faults: a neutral Fpv of 1.0 still
    /// yields a usable rate from the remaining factor chain.
    pub fn flowing_fpv(
        &self,
        hw_in_h2o: f64,
        sep_p_psig: f64,
        gas_t_c: f64,
        gas: &GasProperties,
    ) -> MeteringResult<f64> {
        let pf = gauge_to_absolute_psia(sep_p_psig);
        let p1 = pf + hw_in_h2o * PSI_PER_IN_H2O;
        let gas_t_f = celsius_to_fahrenheit(gas_t_c);
        Ok(supercompressibility_factor(
            gas.sg_gas,
            p1,
            gas_t_f,
            gas.h2s_ppm,
            gas.co2_ppm,
        )?)
    }

    /// Volumetric gas rate through the orifice (MSCF/d).
    ///
    /// `hw_in_h2o` is the differential head across the plate,
    /// `sep_p_psig` the static gauge pressure and `gas_t_c` the flowing
    /// gas temperature. `fpv` comes from [`Self::flowing_fpv`], or 1.0
    /// when the caller substitutes the neutral default after a fault.
    pub fn gas_rate_mscf_d(
        &self,
        hw_in_h2o: f64,
        sep_p_psig: f64,
        gas_t_c: f64,
        gas: &GasProperties,
        fpv: f64,
    ) -> MeteringResult<f64> {
        let fb = self.basic_orifice_factor()?;
        let beta = self.beta()?;

        if gas.sg_gas <= 0.0 {
            return Err(MeteringError::InvalidArg {
                what: "gas specific gravity must be positive",
            });
        }
        let fg = 1.0 / gas.sg_gas.sqrt();

        // Static and upstream pressures
        let pf = gauge_to_absolute_psia(sep_p_psig);
        let delta_p_psi = hw_in_h2o * PSI_PER_IN_H2O;
        let p1 = pf + delta_p_psi;
        if p1 == 0.0 {
            return Err(MeteringError::NonPhysical {
                what: "upstream pressure is zero",
            });
        }
        let y2 = 1.0 - (0.41 + 0.35 * beta.powi(4)) * delta_p_psi / (1.28 * p1);

        let gas_t_f = celsius_to_fahrenheit(gas_t_c);
        let rankine = fahrenheit_to_rankine(gas_t_f);
        if rankine <= 0.0 {
            return Err(MeteringError::NonPhysical {
                what: "flowing temperature below absolute zero",
            });
        }
        let ftf = (520.0 / rankine).sqrt();

        let head_product = hw_in_h2o * pf;
        if head_product < 0.0 {
            return Err(MeteringError::NonPhysical {
                what: "negative differential head",
            });
        }

        Ok(24.0 * fb * fg * y2 * ftf * fpv * head_product.sqrt() / 1000.0)
    }
}
