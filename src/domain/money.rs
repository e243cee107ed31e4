use super::symbol_for;

/// Monetary amounts are integers in the smallest unit the denomination
/// tables use, so no fractional arithmetic is ever needed.
pub type Units = i64;

/// Group digits in threes with commas.
/// Example: 3007 -> "3,007", 100000000 -> "100,000,000", -1234 -> "-1,234"
pub fn format_grouped(amount: Units) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a total with the currency's symbol in front.
/// Example: ("TWD", 3007) -> "$3,007", ("CNY", 1010) -> "¥1,010"
pub fn format_total(currency: &str, total: Units) -> String {
    format!("{}{}", symbol_for(currency), format_grouped(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(7), "7");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(3007), "3,007");
        assert_eq!(format_grouped(123456), "123,456");
        assert_eq!(format_grouped(1234567), "1,234,567");
        assert_eq!(format_grouped(100_000_000), "100,000,000");
        assert_eq!(format_grouped(-1234), "-1,234");
        assert_eq!(format_grouped(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total("TWD", 3007), "$3,007");
        assert_eq!(format_total("CNY", 1010), "¥1,010");
        assert_eq!(format_total("KRW", 50000), "₩50,000");
        assert_eq!(format_total("USD", 0), "USD0");
    }
}
