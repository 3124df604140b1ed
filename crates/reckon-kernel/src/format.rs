//! Number rendering for results and prompts.

/// Render a number for display.
///
/// Integral values keep a trailing `.0` (`5.0`, `-20.0`). Other values use
/// the shortest representation that reads back to the same `f64`. Very
/// large or very small magnitudes switch to scientific notation with a
/// signed, two-digit exponent (`1e+20`, `1.5e-05`). NaN renders as `nan`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::integral(5.0, "5.0")]
    #[case::negative_integral(-20.0, "-20.0")]
    #[case::zero(0.0, "0.0")]
    #[case::fraction(0.333, "0.333")]
    #[case::rounded_sum(0.3, "0.3")]
    #[case::large_exponent(1e20, "1e+20")]
    #[case::large_mantissa(1.5e17, "1.5e+17")]
    #[case::small(1.5e-5, "1.5e-05")]
    #[case::hundred_exponent(1e100, "1e+100")]
    #[case::infinity(f64::INFINITY, "inf")]
    #[case::neg_infinity(f64::NEG_INFINITY, "-inf")]
    #[case::nan(f64::NAN, "nan")]
    fn renders(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_number(value), expected);
    }
}
