//! Display formatting for calculator results.

/// Scale used to cut results down to twelve decimal places.
const PRECISION_SCALE: f64 = 1e12;

/// Distance from an integer below which a result is shown without decimals.
const INTEGER_EPSILON: f64 = 1e-12;

/// Format a result for display.
///
/// Truncates to twelve decimal places to hide binary floating point noise,
/// then drops the fractional part when the value is integral. The scaled
/// value saturates at the `i64` range, so very large magnitudes are clamped.
pub fn format_number(value: f64) -> String {
    if value.is_nan() || value.is_infinite() {
        return "Error".to_string();
    }

    let rounded = ((value * PRECISION_SCALE) as i64) as f64 / PRECISION_SCALE;
    let integral = rounded as i64;

    if (rounded - integral as f64).abs() < INTEGER_EPSILON {
        integral.to_string()
    } else {
        rounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floating_point_noise_is_hidden() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(0.1 * 3.0), "0.3");
    }

    #[test]
    fn test_integers_drop_fraction() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.75), "-0.75");
        assert_eq!(format_number(1.0 / 3.0), "0.333333333333");
    }

    #[test]
    fn test_tiny_values_truncate_to_zero() {
        assert_eq!(format_number(1e-13), "0");
        assert_eq!(format_number(-1e-13), "0");
    }

    #[test]
    fn test_large_magnitudes_saturate() {
        assert_eq!(format_number(9_000_000.0), "9000000");
        assert_eq!(format_number(1e7), "9223372.036854776");
        assert_eq!(format_number(1e300), "9223372.036854776");
        assert_eq!(format_number(-1e7), "-9223372.036854776");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::NAN), "Error");
        assert_eq!(format_number(f64::INFINITY), "Error");
        assert_eq!(format_number(f64::NEG_INFINITY), "Error");
    }

    #[test]
    fn test_format_is_idempotent() {
        for value in [0.1 + 0.2, 4.0, -6.0, 2.5, -0.75, 14.0, 0.5, 1234.5] {
            let shown = format_number(value);
            let reparsed: f64 = shown.parse().unwrap();
            assert_eq!(format_number(reparsed), shown);
        }
    }
}
