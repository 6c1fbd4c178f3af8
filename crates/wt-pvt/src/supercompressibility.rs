//! Supercompressibility factor for natural gas.
//!
//! Chain of closed-form estimates: Sutton pseudo-critical properties,
//! Wichert-Aziz sour-gas correction (H2S/CO2), Papay compressibility
//! factor, then `Fpv = 1/sqrt(Z)`.

use crate::error::{CorrelationError, CorrelationResult, finite};
use wt_core::units::fahrenheit_to_rankine;

/// Pseudo-critical temperature (°R) and pressure (psia) from gas
/// specific gravity (Sutton).
fn sutton_pseudo_criticals(sg_gas: f64) -> (f64, f64) {
    let tpc = 168.0 + 325.0 * sg_gas - 12.5 * sg_gas * sg_gas;
    let ppc = 677.0 + 15.0 * sg_gas - 37.5 * sg_gas * sg_gas;
    (tpc, ppc)
}

/// Papay compressibility factor from pseudo-reduced properties.
fn papay_z(tpr: f64, ppr: f64) -> f64 {
    1.0 - (3.52 * ppr) / 10f64.powf(0.9813 * tpr)
        + (0.274 * ppr * ppr) / 10f64.powf(0.8157 * tpr)
}

/// Supercompressibility factor `Fpv` at flowing conditions.
///
/// `p_psia` is the absolute flowing pressure, `temp_f` the flowing
/// temperature, and the sour components are given in ppm (mole basis).
pub fn supercompressibility_factor(
    sg_gas: f64,
    p_psia: f64,
    temp_f: f64,
    h2s_ppm: f64,
    co2_ppm: f64,
) -> CorrelationResult<f64> {
    let y_h2s = h2s_ppm / 1e6;
    let y_co2 = co2_ppm / 1e6;

    let (tpc, ppc) = sutton_pseudo_criticals(sg_gas);

    // Wichert-Aziz correction for acid gas content
    let a = y_h2s + y_co2;
    let epsilon = 120.0 * (a.powf(0.9) - a.powf(1.6)) + 15.0 * (y_h2s.sqrt() - y_h2s.powi(4));
    let epsilon = finite(epsilon, "Wichert-Aziz epsilon")?;
    let tpc_corr = tpc - epsilon;
    let ppc_denom = tpc + y_h2s * (1.0 - y_h2s) * epsilon;
    if ppc_denom == 0.0 {
        return Err(CorrelationError::DivisionByZero {
            what: "corrected pseudo-critical pressure",
        });
    }
    let ppc_corr = ppc * tpc_corr / ppc_denom;

    if tpc_corr == 0.0 {
        return Err(CorrelationError::DivisionByZero {
            what: "pseudo-reduced temperature",
        });
    }
    if ppc_corr == 0.0 {
        return Err(CorrelationError::DivisionByZero {
            what: "pseudo-reduced pressure",
        });
    }
    let tpr = fahrenheit_to_rankine(temp_f) / tpc_corr;
    let ppr = p_psia / ppc_corr;

    let z = finite(papay_z(tpr, ppr), "Papay Z factor")?;
    if z <= 0.0 {
        return Err(CorrelationError::DomainError {
            what: "Papay Z factor",
        });
    }

    finite(1.0 / z.sqrt(), "supercompressibility factor")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweet_gas_fpv_near_unity() {
        // Moderate pressure, lean sweet gas: Z just below 1, Fpv just above
        let fpv = supercompressibility_factor(0.65, 114.7, 77.0, 0.0, 0.0).unwrap();
        assert!(fpv > 1.0 && fpv < 1.05, "fpv = {fpv}");
    }

    #[test]
    fn sweet_gas_matches_uncorrected_papay() {
        // With zero acid gas the Wichert-Aziz correction must vanish
        let (tpc, ppc) = sutton_pseudo_criticals(0.65);
        let tpr = (77.0 + 460.0) / tpc;
        let ppr = 500.0 / ppc;
        let expected = 1.0 / papay_z(tpr, ppr).sqrt();

        let fpv = supercompressibility_factor(0.65, 500.0, 77.0, 0.0, 0.0).unwrap();
        assert!((fpv - expected).abs() < 1e-12);
    }

    #[test]
    fn sour_gas_shifts_fpv() {
        let sweet = supercompressibility_factor(0.70, 800.0, 100.0, 0.0, 0.0).unwrap();
        let sour = supercompressibility_factor(0.70, 800.0, 100.0, 50_000.0, 30_000.0).unwrap();
        assert!(sweet.is_finite() && sour.is_finite());
        assert!((sweet - sour).abs() > 1e-6);
    }

    #[test]
    fn fpv_grows_with_pressure() {
        let low = supercompressibility_factor(0.65, 100.0, 80.0, 0.0, 0.0).unwrap();
        let high = supercompressibility_factor(0.65, 1000.0, 80.0, 0.0, 0.0).unwrap();
        assert!(high > low);
    }
}
