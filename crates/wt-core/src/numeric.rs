//! Float comparison and validation helpers.

use crate::WtError;

/// Comparison tolerances, absolute plus relative.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    /// Purely absolute comparison, no relative term.
    ///
    /// Used when checking computed rates against hand-evaluated
    /// reference values with a fixed precision.
    pub fn absolute(abs: f64) -> Self {
        Self { abs, rel: 0.0 }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol`.
pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities, naming the offending quantity.
///
/// The correlation crates funnel every computed factor through this
/// before handing it to the caller.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, WtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(WtError::NonFinite { what, value: v })
    }
}
