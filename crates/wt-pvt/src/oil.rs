//! Oil-phase correlations: API gravity correction, volume correction
//! factor, and shrinkage factor.

use crate::error::{CorrelationResult, finite};
use wt_core::units::{STANDARD_TEMP_F, celsius_to_fahrenheit};

/// Correct an observed API gravity to the 60°F stock-tank reference.
///
/// Observed temperatures at or below 60°F need no correction and the
/// input gravity passes through unchanged.
pub fn oil_api_at_60f(api_obs: f64, temp_obs_c: f64) -> f64 {
    let temp_f = celsius_to_fahrenheit(temp_obs_c);
    if temp_f <= STANDARD_TEMP_F {
        api_obs
    } else {
        let delta_t = temp_f - STANDARD_TEMP_F;
        api_obs - 0.00035 * delta_t * (api_obs - 10.0)
    }
}

/// Volume correction factor for separator liquid relative to the
/// stock-tank reference temperature.
///
/// `exp(-(alpha*dt + beta*dt^2))` with an API-dependent thermal-expansion
/// coefficient. Exactly 1.0 when the separator runs at 60°F.
pub fn volume_correction_factor(sep_temp_c: f64, api_60: f64) -> CorrelationResult<f64> {
    let sep_temp_f = celsius_to_fahrenheit(sep_temp_c);
    let delta_t = sep_temp_f - STANDARD_TEMP_F;
    let alpha = 0.00034878 - 0.00000091 * api_60;
    let beta = 2.5e-9;
    finite(
        (-(alpha * delta_t + beta * delta_t * delta_t)).exp(),
        "volume correction factor",
    )
}

/// Shrinkage factor for separator oil.
///
/// The base coefficient is picked by API tier, then overridden for
/// low-GOR and/or low-pressure separation. The combined low-GOR and
/// low-pressure condition takes precedence over either one alone.
pub fn shrinkage_factor(gor2: f64, sep_p_psig: f64, api_60: f64) -> f64 {
    let mut c = if api_60 > 35.0 {
        2.5e-7
    } else if api_60 >= 25.0 {
        3.0e-7
    } else {
        3.5e-7
    };

    if gor2 < 100.0 && sep_p_psig < 50.0 {
        c = 5e-8;
    } else if gor2 < 100.0 {
        c = 1e-7;
    } else if sep_p_psig < 50.0 {
        c = 2e-7;
    }

    1.0 - c * gor2 * sep_p_psig
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_passthrough_at_or_below_60f() {
        // 15°C -> 59°F: no correction
        assert_eq!(oil_api_at_60f(32.0, 15.0), 32.0);
        // 140/9 °C -> exactly 60°F: boundary is inclusive
        assert_eq!(oil_api_at_60f(32.0, 140.0 / 9.0), 32.0);
    }

    #[test]
    fn api_corrected_above_60f() {
        // 60°C -> 140°F, delta_t = 80
        let api = oil_api_at_60f(30.0, 60.0);
        let expected = 30.0 - 0.00035 * 80.0 * 20.0;
        assert!((api - expected).abs() < 1e-12);
        assert!(api < 30.0);
    }

    #[test]
    fn vcf_is_unity_at_reference_temp() {
        let vcf = volume_correction_factor(140.0 / 9.0, 35.0).unwrap();
        assert!((vcf - 1.0).abs() < 1e-12);
    }

    #[test]
    fn vcf_below_unity_for_hot_separator() {
        let vcf = volume_correction_factor(40.0, 35.0).unwrap();
        assert!(vcf > 0.0 && vcf < 1.0);
    }

    #[test]
    fn shrinkage_base_tiers() {
        // High GOR and pressure keep the API-tier coefficient
        let sf_light = shrinkage_factor(500.0, 200.0, 40.0);
        assert!((sf_light - (1.0 - 2.5e-7 * 500.0 * 200.0)).abs() < 1e-12);

        let sf_mid = shrinkage_factor(500.0, 200.0, 30.0);
        assert!((sf_mid - (1.0 - 3.0e-7 * 500.0 * 200.0)).abs() < 1e-12);

        let sf_heavy = shrinkage_factor(500.0, 200.0, 20.0);
        assert!((sf_heavy - (1.0 - 3.5e-7 * 500.0 * 200.0)).abs() < 1e-12);
    }

    #[test]
    fn shrinkage_combined_override_wins() {
        // gor2 < 100 AND sep_p < 50 must pick c = 5e-8, not the
        // single-condition coefficients
        let sf = shrinkage_factor(50.0, 30.0, 40.0);
        assert!((sf - (1.0 - 5e-8 * 50.0 * 30.0)).abs() < 1e-15);
    }

    #[test]
    fn shrinkage_single_overrides() {
        let sf_low_gor = shrinkage_factor(50.0, 200.0, 40.0);
        assert!((sf_low_gor - (1.0 - 1e-7 * 50.0 * 200.0)).abs() < 1e-12);

        let sf_low_p = shrinkage_factor(500.0, 30.0, 40.0);
        assert!((sf_low_p - (1.0 - 2e-7 * 500.0 * 30.0)).abs() < 1e-12);
    }
}
