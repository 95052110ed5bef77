// File: crates/fnchart-core/src/numeric.rs
// Summary: Rounding and number formatting used for tooltips, tick labels and stored bounds.

/// Round to 2 decimal places.
///
/// `f64::EPSILON` is added before scaling so values like `2.675` (stored as
/// `2.67499999…`) round up to `2.68`. Halves round toward +∞, so
/// `-2.675` becomes `-2.67`. NaN and infinities propagate.
#[inline]
pub fn round2(x: f64) -> f64 {
    let v = (x + f64::EPSILON) * 100.0;
    let f = v.floor();
    (if v - f >= 0.5 { f + 1.0 } else { f }) / 100.0
}

/// Format a number the way a script engine prints it: shortest round-trip
/// digits, no trailing `.0` on integral values, `-0` printed as `0`, and
/// exponent form (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if !(1e-6..1e21).contains(&abs) {
        let s = format!("{v:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    // Display for f64 already yields the shortest representation that round-trips.
    format!("{v}")
}

/// Format a tick value, trimming float noise from the step arithmetic.
pub fn format_tick(v: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let rounded = format!("{v:.decimals$}");
    let parsed = rounded.parse::<f64>().unwrap_or(v);
    format_number(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_compensates_binary_representation() {
        assert_eq!(round2(2.675), 2.68);
        assert_eq!(round2(1.005), 1.01);
        assert_eq!(round2(1.23456), 1.23);
        assert_eq!(round2(-5.0), -5.0);
    }

    #[test]
    fn round2_negative_halves_round_up() {
        assert_eq!(round2(-2.675), -2.67);
        assert_eq!(round2(-10.125), -10.12);
        assert_eq!(round2(-1.465), -1.46);
    }

    #[test]
    fn round2_propagates_non_finite() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert_eq!(round2(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn numbers_print_without_trailing_zero() {
        assert_eq!(format_number(2.68), "2.68");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1), "0.1");
    }

    #[test]
    fn large_and_tiny_numbers_use_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e22), "-1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(123456789012345680000.0), "123456789012345680000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn ticks_drop_step_noise() {
        assert_eq!(format_tick(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick(20.0, 10.0), "20");
        assert_eq!(format_tick(-0.5, 0.5), "-0.5");
    }
}
