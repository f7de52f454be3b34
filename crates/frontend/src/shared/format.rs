//! Number formatting for tables and stat cards, pt-BR conventions.

/// Placeholder for missing non-monetary values.
pub const PLACEHOLDER: &str = "-";

/// Formats a monetary value with exactly 2 fraction digits, thousands
/// separated by `.` and `,` as the decimal separator.
///
/// ```
/// use frontend::shared::format::format_money;
/// assert_eq!(format_money(1234.56), "1.234,56");
/// ```
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    format!("{},{}", group_thousands(integer_part), decimal_part)
}

/// Formats an integer with `.` thousands separators.
pub fn format_int(value: i64) -> String {
    group_thousands(&value.to_string())
}

/// Missing quantities render as the placeholder dash.
pub fn format_quantity(value: Option<i64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push('.');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1.234,56");
        assert_eq!(format_money(1234567.891), "1.234.567,89");
        assert_eq!(format_money(0.0), "0,00");
        assert_eq!(format_money(-1234.5), "-1.234,50");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(1234567), "1.234.567");
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(-1234), "-1.234");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(Some(3)), "3");
        assert_eq!(format_quantity(None), PLACEHOLDER);
    }
}
