//! Time-series processing: the ordered fold that turns cumulative meter
//! readings into per-interval rates.

use crate::entry::TimeSeriesEntry;
use crate::parameters::{ProductionType, SeparationType, TestParameters};
use crate::result::{CalcWarning, CalculationResult, GasLiftBreakdown};
use tracing::warn;
use wt_meter::{PhaseRates, three_phase_rates, two_phase_rates};
use wt_pvt::{oil_api_at_60f, shrinkage_factor, solution_gor, volume_correction_factor};

/// Cumulative meter readings carried from one interval to the next.
///
/// Interval volumes are the difference between an entry's cumulative
/// reading and the previous one; the test starts from zeroed meters.
#[derive(Clone, Copy, Debug, Default)]
struct MeterState {
    prev_oil_bbl: f64,
    prev_water_bbl: f64,
    prev_liquid_bbl: f64,
}

/// Substitute the documented neutral default when a correlation faults,
/// recording the substitution on the result.
fn or_default<E: std::fmt::Display>(
    value: Result<f64, E>,
    default: f64,
    field: &'static str,
    warnings: &mut Vec<CalcWarning>,
) -> f64 {
    match value {
        Ok(v) => v,
        Err(e) => {
            warn!(field, fault = %e, fallback = default, "correlation fault, using default");
            warnings.push(CalcWarning {
                field: field.to_string(),
                detail: e.to_string(),
            });
            default
        }
    }
}

/// Compute one [`CalculationResult`] per entry, in input order.
///
/// Entries must be chronological: each interval's volume is the delta of
/// its cumulative meter readings against the previous entry's, threaded
/// through the fold as [`MeterState`]. Non-monotonic readings produce
/// negative interval volumes and propagate as negative rates; they are
/// not an error. All other per-entry calculations are independent.
pub fn compute_results(
    params: &TestParameters,
    entries: &[TimeSeriesEntry],
) -> Vec<CalculationResult> {
    // Gravity correction uses test-level observed values, not per-entry data
    let api_60 = oil_api_at_60f(params.oil_api, params.oil_temp_obs_c);
    let meter = params.orifice_meter();
    let gas = params.gas_properties();

    let mut state = MeterState::default();
    let mut results = Vec::with_capacity(entries.len());

    for entry in entries {
        let mut warnings = Vec::new();

        // Separator liquid temperature: the oil-outlet reading
        let sep_temp_c = entry.oil_t_c;

        let vcf = or_default(
            volume_correction_factor(sep_temp_c, api_60),
            1.0,
            "vcf",
            &mut warnings,
        );
        let gor2 = or_default(
            solution_gor(
                api_60,
                params.sg_gas,
                entry.sep_p_psig,
                sep_temp_c,
                params.gor2_method,
            ),
            0.0,
            "gor2_scf_stb",
            &mut warnings,
        );
        let sf = shrinkage_factor(gor2, entry.sep_p_psig, api_60);

        let rates = match params.separation_type {
            SeparationType::ThreePhase => {
                let vs_oil = entry.meter_oil_bbl - state.prev_oil_bbl;
                let vs_water = entry.meter_water_bbl - state.prev_water_bbl;
                state.prev_oil_bbl = entry.meter_oil_bbl;
                state.prev_water_bbl = entry.meter_water_bbl;
                three_phase_rates(
                    vs_oil,
                    vs_water,
                    entry.wio_pct / 100.0,
                    params.meter_factor,
                    sf,
                    vcf,
                )
            }
            SeparationType::TwoPhase => {
                let vs_liquid = entry.meter_liquid_bbl - state.prev_liquid_bbl;
                state.prev_liquid_bbl = entry.meter_liquid_bbl;
                two_phase_rates(
                    vs_liquid,
                    entry.bsw_pct / 100.0,
                    params.meter_factor,
                    sf,
                    vcf,
                )
            }
        };
        let PhaseRates {
            q_oil_bbl_d,
            q_water_bbl_d,
        } = rates;

        // Fpv faults are neutralized to 1.0 so the rest of the factor
        // chain still produces a rate; only faults of the metering
        // chain itself zero the gas rate.
        let fpv = or_default(
            meter.flowing_fpv(entry.gas_dp_in_h2o, entry.sep_p_psig, entry.gas_t_c, &gas),
            1.0,
            "fpv",
            &mut warnings,
        );
        let q_gas = or_default(
            meter.gas_rate_mscf_d(
                entry.gas_dp_in_h2o,
                entry.sep_p_psig,
                entry.gas_t_c,
                &gas,
                fpv,
            ),
            0.0,
            "q_gas_mscf_d",
            &mut warnings,
        );

        let gor1 = if q_oil_bbl_d > 0.0 {
            q_gas * 1000.0 / q_oil_bbl_d
        } else {
            0.0
        };

        let gas_lift = match params.production_type {
            ProductionType::GasLift => {
                let formation_gas = (q_gas - entry.q_gas_inj_mscf_d).max(0.0);
                let gor1_formation = if q_oil_bbl_d > 0.0 {
                    formation_gas * 1000.0 / q_oil_bbl_d
                } else {
                    0.0
                };
                Some(GasLiftBreakdown {
                    q_gas_inj_mscf_d: entry.q_gas_inj_mscf_d,
                    formation_gas_mscf_d: formation_gas,
                    gor1_formation_scf_stb: gor1_formation,
                    total_gor_formation_scf_stb: gor1_formation + gor2,
                })
            }
            ProductionType::NaturalFlow | ProductionType::Esp => None,
        };

        results.push(CalculationResult {
            time: entry.time,
            q_oil_bbl_d,
            q_water_bbl_d,
            total_liquid_bbl_d: rates.total_bbl_d(),
            q_gas_mscf_d: q_gas,
            gor1_scf_stb: gor1,
            gor2_scf_stb: gor2,
            total_gor_scf_stb: gor1 + gor2,
            gas_lift,
            warnings,
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use wt_pvt::Gor2Method;

    fn two_phase_params() -> TestParameters {
        TestParameters {
            oil_api: 30.0,
            oil_temp_obs_c: 15.5,
            meter_factor: 1.0,
            separation_type: SeparationType::TwoPhase,
            production_type: ProductionType::NaturalFlow,
            gor2_method: Gor2Method::Auto,
            sg_gas: 0.65,
            orifice_d_in: 2.0,
            line_bore_in: 4.0,
            h2s_ppm: 0.0,
            co2_ppm: 0.0,
        }
    }

    fn entry_at(hour: u32, meter_liquid_bbl: f64) -> TimeSeriesEntry {
        TimeSeriesEntry {
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            choke: 32.0,
            whp_psig: 500.0,
            wht_c: 40.0,
            casing_psig: 300.0,
            sep_p_psig: 100.0,
            gas_t_c: 25.0,
            oil_outlet_p_psig: 95.0,
            oil_t_c: 20.0,
            meter_oil_bbl: 0.0,
            meter_water_bbl: 0.0,
            wio_pct: 0.0,
            meter_liquid_bbl,
            bsw_pct: 10.0,
            gas_dp_in_h2o: 50.0,
            q_gas_inj_mscf_d: 0.0,
        }
    }

    #[test]
    fn cumulative_meters_are_differenced() {
        let params = two_phase_params();
        let results = compute_results(&params, &[entry_at(8, 50.0), entry_at(9, 120.0)]);
        assert_eq!(results.len(), 2);
        // Second interval volume is 70 bbl, not 120
        let ratio = results[1].q_oil_bbl_d / results[0].q_oil_bbl_d;
        assert!((ratio - 70.0 / 50.0).abs() < 1e-9);
    }

    #[test]
    fn non_monotonic_meter_gives_negative_rate() {
        let params = two_phase_params();
        let results = compute_results(&params, &[entry_at(8, 50.0), entry_at(9, 30.0)]);
        assert!(results[1].q_oil_bbl_d < 0.0);
        assert!(results[1].warnings.is_empty());
    }

    #[test]
    fn gor1_is_zero_without_oil() {
        let params = two_phase_params();
        let results = compute_results(&params, &[entry_at(8, 0.0)]);
        assert_eq!(results[0].q_oil_bbl_d, 0.0);
        assert_eq!(results[0].gor1_scf_stb, 0.0);
        assert!(results[0].q_gas_mscf_d > 0.0);
    }

    #[test]
    fn formation_gas_is_floored_at_zero() {
        let mut params = two_phase_params();
        params.production_type = ProductionType::GasLift;
        let mut entry = entry_at(8, 50.0);
        // Inject far more than the well produces
        entry.q_gas_inj_mscf_d = 1e6;
        let results = compute_results(&params, &[entry]);
        let gl = results[0].gas_lift.unwrap();
        assert_eq!(gl.formation_gas_mscf_d, 0.0);
        assert_eq!(gl.gor1_formation_scf_stb, 0.0);
        assert_eq!(gl.total_gor_formation_scf_stb, results[0].gor2_scf_stb);
    }

    #[test]
    fn natural_flow_has_no_gas_lift_breakdown() {
        let params = two_phase_params();
        let results = compute_results(&params, &[entry_at(8, 50.0)]);
        assert!(results[0].gas_lift.is_none());
    }

    #[test]
    fn three_phase_dispatch_uses_leg_meters() {
        let mut params = two_phase_params();
        params.separation_type = SeparationType::ThreePhase;
        let mut entry = entry_at(8, 0.0);
        entry.meter_oil_bbl = 40.0;
        entry.meter_water_bbl = 10.0;
        entry.wio_pct = 5.0;
        let results = compute_results(&params, &[entry]);
        // Water leg plus carried water-in-oil
        let expected_water = (10.0 + 40.0 * 0.05) * 48.0;
        assert!((results[0].q_water_bbl_d - expected_water).abs() < 1e-9);
        assert!(results[0].q_oil_bbl_d > 0.0);
    }

    #[test]
    fn faulted_gas_meter_defaults_to_zero_with_warning() {
        let mut params = two_phase_params();
        // Full-bore plate: beta = 1 faults the orifice factor
        params.orifice_d_in = 4.0;
        let results = compute_results(&params, &[entry_at(8, 50.0)]);
        assert_eq!(results[0].q_gas_mscf_d, 0.0);
        assert!(
            results[0]
                .warnings
                .iter()
                .any(|w| w.field == "q_gas_mscf_d")
        );
        // Liquid split is unaffected
        assert!(results[0].q_oil_bbl_d > 0.0);
    }

    #[test]
    fn fpv_fault_defaults_to_unity_not_zero_rate() {
        let params = two_phase_params();
        let mut entry = entry_at(8, 50.0);
        // High line pressure and very cold gas push the Papay Z factor
        // negative, faulting the supercompressibility chain
        entry.sep_p_psig = 2670.0;
        entry.gas_t_c = -100.0;
        let results = compute_results(&params, &[entry]);
        let r = &results[0];
        assert!(r.q_gas_mscf_d > 0.0, "gas rate must survive an Fpv fault");
        assert!(r.warnings.iter().any(|w| w.field == "fpv"));
        assert!(r.warnings.iter().all(|w| w.field != "q_gas_mscf_d"));
    }
}
