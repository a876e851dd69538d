//! Утилиты форматирования чисел и сумм

/// Currency suffix for amounts.
pub const CURRENCY: &str = "ریال";

/// Форматирует число с разделителем тысяч (запятая) и указанным количеством знаков после точки
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Сумма в риалах без дробной части: `"12,500,000 ریال"`
pub fn format_money(value: f64) -> String {
    format!("{} {}", format_number_with_decimals(value, 0), CURRENCY)
}

/// Заменяет латинские цифры на персидские (۰-۹)
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(0x06F0 + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1,234,567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(12_500_000.0), "12,500,000 ریال");
        assert_eq!(format_money(0.0), "0 ریال");
    }

    #[test]
    fn test_to_persian_digits() {
        assert_eq!(to_persian_digits("T-105"), "T-۱۰۵");
        assert_eq!(to_persian_digits("سارا"), "سارا");
    }
}
