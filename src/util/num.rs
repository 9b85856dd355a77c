/// Formats a number the way the language renders it everywhere.
///
/// Integral values render without a decimal point. Everything else renders
/// with six decimal places, after which trailing zeros (and a bare trailing
/// point) are stripped.
///
/// # Example
/// ```
/// use briar::util::num::format_number;
///
/// assert_eq!(format_number(11.0), "11");
/// assert_eq!(format_number(2.75), "2.75");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-3.0), "-3");
/// ```
#[must_use]
pub fn format_number(num: f64) -> String {
    if num.fract() == 0.0 && num >= i64::MIN as f64 && num <= i64::MAX as f64 {
        return format!("{}", num as i64);
    }
    if num.fract() == 0.0 && num.is_finite() {
        // integral but outside i64; no fractional digits to strip
        return format!("{num:.0}");
    }

    let mut text = format!("{num:.6}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
