//! Currency formatting for predicted sales.

/// Format a value as dollars with thousands separators and two decimals.
///
/// ```
/// use predictor_core::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(-98765.432), "$-98,765.43");
/// ```
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value.to_string().to_lowercase());
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("${sign}{grouped}.{cents}")
}
