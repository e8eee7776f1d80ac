//! Display formatting helpers shared by the demo screens.

/// Format a dollar value with thousands separators and cents.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let total_cents = (value.abs() * 100.0).round() as i64;
    let (dollars, cents) = (total_cents / 100, total_cents % 100);
    format!("{sign}${}.{cents:02}", group_thousands(dollars.to_string()))
}

/// Format a dollar value without cents, for tight table columns.
pub fn format_currency_short(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let dollars = value.abs().round() as i64;
    format!("{sign}${}", group_thousands(dollars.to_string()))
}

/// Format a value that is already in percentage points (e.g. `6.5` -> "6.500%").
pub fn format_rate(value: f64) -> String {
    format!("{value:.3}%")
}

fn group_thousands(digits: String) -> String {
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(-642.37), "-$642.37");
    }

    #[test]
    fn test_currency_short() {
        assert_eq!(format_currency_short(2_274.62), "$2,275");
        assert_eq!(format_currency_short(-48.0), "-$48");
    }

    #[test]
    fn test_rate() {
        assert_eq!(format_rate(6.5), "6.500%");
    }
}
