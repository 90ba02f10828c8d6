//! Temperature unit conversion. Generated values are Celsius; the
//! converter is applied exactly once, before display and recording.

use crate::model::{Samples, TemperatureUnit};

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a single Celsius value to the target unit.
/// Celsius is the identity; Fahrenheit applies `c * 9/5 + 32`, rounded.
pub fn celsius_to(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => round2(value_c * 9.0 / 5.0 + 32.0),
    }
}

/// Element-wise conversion preserving the scalar/sequence shape.
pub fn convert(temperatures: &Samples<f64>, unit: TemperatureUnit) -> Samples<f64> {
    temperatures.map(|c| celsius_to(*c, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_is_identity() {
        assert_eq!(celsius_to(-3.17, TemperatureUnit::Celsius), -3.17);
    }

    #[test]
    fn fahrenheit_formula() {
        assert_eq!(celsius_to(0.0, TemperatureUnit::Fahrenheit), 32.0);
        assert_eq!(celsius_to(100.0, TemperatureUnit::Fahrenheit), 212.0);
        assert_eq!(celsius_to(-10.0, TemperatureUnit::Fahrenheit), 14.0);
    }

    #[test]
    fn fahrenheit_rounds_to_two_decimals() {
        // 12.345 * 9/5 + 32 = 54.221
        assert_eq!(celsius_to(12.345, TemperatureUnit::Fahrenheit), 54.22);
    }

    #[test]
    fn fahrenheit_inverts_within_tolerance() {
        for &c in &[-10.0, -3.33, 0.0, 17.82, 35.0] {
            let f = celsius_to(c, TemperatureUnit::Fahrenheit);
            let back = (f - 32.0) * 5.0 / 9.0;
            assert!((back - c).abs() < 0.01, "{c} -> {f} -> {back}");
        }
    }

    #[test]
    fn convert_preserves_shape() {
        let scalar = convert(&Samples::One(10.0), TemperatureUnit::Fahrenheit);
        assert_eq!(scalar, Samples::One(50.0));

        let series = convert(&Samples::Many(vec![0.0, 10.0]), TemperatureUnit::Fahrenheit);
        assert_eq!(series, Samples::Many(vec![32.0, 50.0]));
    }
}
