// wt-core/src/units.rs
//
// Field-unit conversions used by the correlation and metering crates.
// The industry correlations implemented downstream are defined in
// oilfield units (°F, psia, inH2O, °API), so conversions stay explicit
// f64 helpers rather than a typed quantity system.

/// Standard atmospheric pressure (psia), added to gauge readings.
pub const ATMOSPHERIC_PSIA: f64 = 14.7;

/// Stock-tank reference temperature (°F).
pub const STANDARD_TEMP_F: f64 = 60.0;

/// Offset from Fahrenheit to Rankine.
pub const RANKINE_OFFSET: f64 = 460.0;

/// Pressure equivalent of one inch of water column (psi).
pub const PSI_PER_IN_H2O: f64 = 0.03613;

#[inline]
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Convert a gauge pressure reading (psig) to absolute pressure (psia).
#[inline]
pub fn gauge_to_absolute_psia(psig: f64) -> f64 {
    psig + ATMOSPHERIC_PSIA
}

/// Convert a Fahrenheit temperature to Rankine.
#[inline]
pub fn fahrenheit_to_rankine(f: f64) -> f64 {
    f + RANKINE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_fahrenheit_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn sixty_fahrenheit_is_exact() {
        // 140/9 °C is the stock-tank reference point
        assert!((celsius_to_fahrenheit(140.0 / 9.0) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn gauge_to_absolute() {
        assert_eq!(gauge_to_absolute_psia(0.0), 14.7);
        assert_eq!(gauge_to_absolute_psia(100.0), 114.7);
    }
}
