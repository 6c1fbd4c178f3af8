//! Liquid-phase rate splits from cumulative separator meter deltas.
//!
//! Interval volumes are barrels accumulated over one 30-minute sampling
//! interval; multiplying by [`INTERVALS_PER_DAY`] annualizes them to
//! barrels per day.

/// 30-minute sampling intervals per day.
pub const INTERVALS_PER_DAY: f64 = 48.0;

/// Oil and water rates for one sampling interval (bbl/d).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseRates {
    pub q_oil_bbl_d: f64,
    pub q_water_bbl_d: f64,
}

impl PhaseRates {
    pub fn total_bbl_d(&self) -> f64 {
        self.q_oil_bbl_d + self.q_water_bbl_d
    }
}

/// Split a three-phase separator interval into oil and water rates.
///
/// `vs_oil_bbl` and `vs_water_bbl` are the oil- and water-leg meter
/// deltas, `wio` the water-in-oil fraction (0-1). The oil rate is
/// corrected for metering error, shrinkage and thermal expansion; free
/// water plus the water carried in the oil leg forms the water rate.
pub fn three_phase_rates(
    vs_oil_bbl: f64,
    vs_water_bbl: f64,
    wio: f64,
    meter_factor: f64,
    sf: f64,
    vcf: f64,
) -> PhaseRates {
    PhaseRates {
        q_oil_bbl_d: vs_oil_bbl * (1.0 - wio) * meter_factor * sf * vcf * INTERVALS_PER_DAY,
        q_water_bbl_d: (vs_water_bbl * meter_factor + vs_oil_bbl * wio) * INTERVALS_PER_DAY,
    }
}

/// Split a two-phase separator interval into oil and water rates.
///
/// `vs_liquid_bbl` is the combined liquid-leg meter delta and `bsw` the
/// basic sediment and water fraction (0-1).
pub fn two_phase_rates(
    vs_liquid_bbl: f64,
    bsw: f64,
    meter_factor: f64,
    sf: f64,
    vcf: f64,
) -> PhaseRates {
    PhaseRates {
        q_oil_bbl_d: vs_liquid_bbl * (1.0 - bsw) * meter_factor * sf * vcf * INTERVALS_PER_DAY,
        q_water_bbl_d: vs_liquid_bbl * meter_factor * bsw * INTERVALS_PER_DAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_phase_split() {
        let rates = three_phase_rates(10.0, 2.0, 0.1, 1.0, 1.0, 1.0);
        assert!((rates.q_oil_bbl_d - 10.0 * 0.9 * 48.0).abs() < 1e-12);
        assert!((rates.q_water_bbl_d - (2.0 + 1.0) * 48.0).abs() < 1e-12);
        assert!((rates.total_bbl_d() - (rates.q_oil_bbl_d + rates.q_water_bbl_d)).abs() < 1e-12);
    }

    #[test]
    fn two_phase_split() {
        let rates = two_phase_rates(50.0, 0.1, 1.0, 0.95, 0.99);
        let expected_oil = 50.0 * 0.9 * 0.95 * 0.99 * 48.0;
        assert!((rates.q_oil_bbl_d - expected_oil).abs() < 1e-9);
        assert!((rates.q_water_bbl_d - 50.0 * 0.1 * 48.0).abs() < 1e-9);
    }

    #[test]
    fn meter_factor_scales_both_legs() {
        let base = two_phase_rates(50.0, 0.2, 1.0, 1.0, 1.0);
        let scaled = two_phase_rates(50.0, 0.2, 1.1, 1.0, 1.0);
        assert!((scaled.q_oil_bbl_d - base.q_oil_bbl_d * 1.1).abs() < 1e-9);
        assert!((scaled.q_water_bbl_d - base.q_water_bbl_d * 1.1).abs() < 1e-9);
    }

    #[test]
    fn negative_interval_volume_propagates() {
        // Non-monotonic cumulative meters are carried through as negative
        // rates, not clamped and not an error
        let rates = two_phase_rates(-5.0, 0.1, 1.0, 1.0, 1.0);
        assert!(rates.q_oil_bbl_d < 0.0);
        assert!(rates.q_water_bbl_d < 0.0);
    }
}
