//! Significant-digit number formatting.

/// Formats `value` with `digits` significant digits, the way `%g` does.
///
/// Fixed notation is used while the decimal exponent (after rounding) is in
/// `-4..digits`; otherwise scientific notation with a signed, two-digit
/// minimum exponent. Trailing zeros and a dangling decimal point are removed.
///
/// # Example
///
/// ```
/// use hanoiforge_runner::format_significant;
///
/// assert_eq!(format_significant(1.481_481, 5), "1.4815");
/// assert_eq!(format_significant(0.000_012, 5), "1.2e-05");
/// assert_eq!(format_significant(123_456.0, 5), "1.2346e+05");
/// assert_eq!(format_significant(2.5, 5), "2.5");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
