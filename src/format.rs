//! Display formatting for evaluation results.
//!
//! Results are shown the way a pocket calculator display shows them: six
//! significant digits in general (`%g`) notation with trailing zeros removed.

const SIGNIFICANT_DIGITS: i32 = 6;

/// Render `value` with six significant digits.
///
/// Fixed notation is used when the decimal exponent lies in `-4..6`;
/// otherwise the value is written as a mantissa and a signed two-digit
/// exponent. Non-finite values render as `inf`, `-inf` and `nan`.
///
/// # Examples
///
/// ```rust
/// use shuntcalc::format_number;
///
/// assert_eq!(format_number(11.0), "11");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// assert_eq!(format_number(1234567.0), "1.23457e+06");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { "inf" } else { "-inf" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to the target precision first so the exponent reflects carries
    // such as 999999.5 -> 1e+06.
    let scientific = format!("{:.*e}", 5, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..SIGNIFICANT_DIGITS).contains(&exponent) {
        let decimals = usize::try_from(SIGNIFICANT_DIGITS - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    }
}

/// Strip trailing zeros after the decimal point, and the point itself.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "0")]
    #[case(-0.0, "0")]
    #[case(9.0, "9")]
    #[case(-2.5, "-2.5")]
    #[case(0.1, "0.1")]
    #[case(123_456.0, "123456")]
    #[case(999_999.5, "1e+06")]
    #[case(0.000_123_456_7, "0.000123457")]
    #[case(0.000_012_5, "1.25e-05")]
    #[case(3.141_592_653_589_793, "3.14159")]
    #[case(1e21, "1e+21")]
    #[case(f64::INFINITY, "inf")]
    #[case(f64::NEG_INFINITY, "-inf")]
    #[case(f64::NAN, "nan")]
    fn general_notation(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_number(value), expected);
    }
}
