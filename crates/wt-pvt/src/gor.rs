//! Solution gas-oil ratio (GOR2) correlations.
//!
//! Three empirical correlations are supported, with an automatic
//! selection mode that picks by API gravity tier.

use crate::error::{CorrelationResult, finite};
use serde::{Deserialize, Serialize};
use wt_core::units::{celsius_to_fahrenheit, fahrenheit_to_rankine, gauge_to_absolute_psia};

/// Correlation used for the solution gas-oil ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gor2Method {
    /// Pick by API tier: Vasquez-Beggs above 35°API, Standing for
    /// 25-35°API, Katz below 25°API.
    #[default]
    Auto,
    /// Vasquez-Beggs with API-dependent coefficient sets.
    VasquezBeggs,
    Standing,
    Katz,
}

// Vasquez-Beggs coefficient sets (c1, c2, c3)
const VB_LIGHT: (f64, f64, f64) = (0.0178, 1.1870, 23.931);
const VB_HEAVY: (f64, f64, f64) = (0.0362, 1.0937, 25.724);

/// Solution GOR at separator conditions (SCF/STB).
///
/// `sep_p_psig` is converted to absolute pressure and `sep_temp_c` to
/// Fahrenheit once, here; the individual correlations take absolute
/// pressure and °F.
pub fn solution_gor(
    api_60: f64,
    sg_gas: f64,
    sep_p_psig: f64,
    sep_temp_c: f64,
    method: Gor2Method,
) -> CorrelationResult<f64> {
    let p_abs = gauge_to_absolute_psia(sep_p_psig);
    let temp_f = celsius_to_fahrenheit(sep_temp_c);

    match method {
        Gor2Method::Auto => {
            if api_60 > 35.0 {
                vasquez_beggs(sg_gas, p_abs, api_60, temp_f, VB_LIGHT)
            } else if api_60 >= 25.0 {
                standing(sg_gas, p_abs, api_60, temp_f)
            } else {
                katz(sg_gas, p_abs, api_60, temp_f)
            }
        }
        Gor2Method::VasquezBeggs => {
            let coeffs = if api_60 <= 30.0 { VB_HEAVY } else { VB_LIGHT };
            vasquez_beggs(sg_gas, p_abs, api_60, temp_f, coeffs)
        }
        Gor2Method::Standing => standing(sg_gas, p_abs, api_60, temp_f),
        Gor2Method::Katz => katz(sg_gas, p_abs, api_60, temp_f),
    }
}

fn vasquez_beggs(
    sg_gas: f64,
    p_abs: f64,
    api_60: f64,
    temp_f: f64,
    (c1, c2, c3): (f64, f64, f64),
) -> CorrelationResult<f64> {
    finite(
        sg_gas * c1 * p_abs.powf(c2) * (c3 * api_60 / fahrenheit_to_rankine(temp_f)).exp(),
        "Vasquez-Beggs GOR",
    )
}

fn standing(sg_gas: f64, p_abs: f64, api_60: f64, temp_f: f64) -> CorrelationResult<f64> {
    let exponent = 0.0125 * api_60 - 0.00091 * temp_f;
    finite(
        sg_gas * ((p_abs * 10f64.powf(exponent)) / 18.2).powf(1.204),
        "Standing GOR",
    )
}

fn katz(sg_gas: f64, p_abs: f64, api_60: f64, temp_f: f64) -> CorrelationResult<f64> {
    let exponent = 0.01245 * api_60 - 0.00091 * temp_f;
    finite(
        0.224 * sg_gas * p_abs.powf(1.182) * 10f64.powf(exponent),
        "Katz GOR",
    )
}
