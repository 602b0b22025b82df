/// Symbol printed before every price.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats `amount` with two decimals and comma thousands separators, e.g. `₹ 1,234.50`.
///
/// The sign goes after the symbol, and a negative amount that rounds to zero keeps
/// its sign (`₹ -0.00`). Non-finite amounts print as `₹ inf`, `₹ -inf` or `₹ NaN`.
pub fn format_price(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{CURRENCY_SYMBOL} {amount}");
    }

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };

    format!("{CURRENCY_SYMBOL} {sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(4_766_729.248), "₹ 4,766,729.25");
        assert_eq!(format_price(1000.0), "₹ 1,000.00");
        assert_eq!(format_price(999.999), "₹ 1,000.00");
    }

    #[test]
    fn small_values() {
        assert_eq!(format_price(0.0), "₹ 0.00");
        assert_eq!(format_price(12.5), "₹ 12.50");
        assert_eq!(format_price(123.0), "₹ 123.00");
    }

    #[test]
    fn negative_values() {
        assert_eq!(format_price(-1234.5), "₹ -1,234.50");
        assert_eq!(format_price(-987_654.321), "₹ -987,654.32");
        assert_eq!(format_price(-0.001), "₹ -0.00");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_price(f64::INFINITY), "₹ inf");
        assert_eq!(format_price(f64::NEG_INFINITY), "₹ -inf");
        assert_eq!(format_price(f64::NAN), "₹ NaN");
    }
}
