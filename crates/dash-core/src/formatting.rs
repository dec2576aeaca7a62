//! Number formatting for KPI cards, bar labels, and trend tables.

/// Sentinel shown in place of a degenerate average (mean over zero rows).
pub const DASH_PLACEHOLDER: &str = "\u{2014}";

/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use dash_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    // Handle the sign separately so the thousands grouping works on the
    // absolute value.
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Round to the requested decimal places.
    // Add a tiny epsilon (half ULP at the target precision) before rounding
    // to avoid IEEE 754 binary-representation issues at exact midpoints.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let frac_part = rounded - rounded.trunc();

    let int_str = integer_part.to_string();
    let grouped = group_thousands(&int_str);

    let result = if decimals == 0 {
        grouped
    } else {
        // Format the fractional part to the exact number of decimals.
        let frac_str = format!("{:.prec$}", frac_part, prec = decimals as usize);
        // `frac_str` starts with "0.", e.g. "0.50". Strip the leading "0".
        let decimal_digits = &frac_str[1..];
        format!("{}{}", grouped, decimal_digits)
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format a monetary amount as a USD string with two decimal places and
/// thousands separators.
///
/// # Examples
///
/// ```
/// use dash_core::formatting::format_currency;
///
/// assert_eq!(format_currency(1234.56),  "$1,234.56");
/// assert_eq!(format_currency(0.0),      "$0.00");
/// assert_eq!(format_currency(-9.99),    "$-9.99");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("$-{}", format_number(amount.abs(), 2))
    } else {
        format!("${}", format_number(amount, 2))
    }
}

/// Format a percentage value with two decimal places.
///
/// ```
/// use dash_core::formatting::format_percent;
///
/// assert_eq!(format_percent(29.545454), "29.55%");
/// assert_eq!(format_percent(0.0), "0.00%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a unit count as an integer with thousands separators.
pub fn format_count(value: f64) -> String {
    format_number(value, 0)
}

/// Format an average price, substituting the dash placeholder for `NaN`.
pub fn format_average_price(value: f64) -> String {
    if value.is_nan() {
        DASH_PLACEHOLDER.to_string()
    } else {
        format_currency(value)
    }
}

/// Format an average unit count, substituting the dash placeholder for `NaN`.
pub fn format_average_units(value: f64) -> String {
    if value.is_nan() {
        DASH_PLACEHOLDER.to_string()
    } else {
        format!("{} units", format_number(value, 0))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── format_number ────────────────────────────────────────────────────────

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_number_no_thousands() {
        assert_eq!(format_number(123.456, 2), "123.46");
    }

    #[test]
    fn test_format_number_with_thousands() {
        assert_eq!(format_number(1_234.5, 1), "1,234.5");
    }

    #[test]
    fn test_format_number_millions() {
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-9_876.5, 1), "-9,876.5");
    }

    #[test]
    fn test_format_number_exact_thousands() {
        assert_eq!(format_number(1_000.0, 0), "1,000");
    }

    #[test]
    fn test_format_number_rounds_up() {
        assert_eq!(format_number(1.005, 2), "1.01");
    }

    // ── format_currency ──────────────────────────────────────────────────────

    #[test]
    fn test_format_currency_positive() {
        assert_eq!(format_currency(1_234.56), "$1,234.56");
    }

    #[test]
    fn test_format_currency_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-9.99), "$-9.99");
    }

    #[test]
    fn test_format_currency_large() {
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    // ── format_percent ───────────────────────────────────────────────────────

    #[test]
    fn test_format_percent_two_decimals() {
        assert_eq!(format_percent(29.545454545), "29.55%");
    }

    #[test]
    fn test_format_percent_zero() {
        assert_eq!(format_percent(0.0), "0.00%");
    }

    // ── format_count ─────────────────────────────────────────────────────────

    #[test]
    fn test_format_count_integer() {
        assert_eq!(format_count(1_500.0), "1,500");
    }

    // ── averages ─────────────────────────────────────────────────────────────

    #[test]
    fn test_format_average_price_value() {
        assert_eq!(format_average_price(1.5), "$1.50");
    }

    #[test]
    fn test_format_average_price_nan() {
        assert_eq!(format_average_price(f64::NAN), DASH_PLACEHOLDER);
    }

    #[test]
    fn test_format_average_units_value() {
        assert_eq!(format_average_units(46.25), "46 units");
    }

    #[test]
    fn test_format_average_units_nan() {
        assert_eq!(format_average_units(f64::NAN), DASH_PLACEHOLDER);
    }
}
