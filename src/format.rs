//! Number formatting shared by the TUI tables and the console renderers

use rust_decimal::Decimal;

use crate::models::Currency;

/// Replacement string shown when amounts are hidden
pub const MASK: &str = "****";

/// Group the integer part with commas, fixed to `dp` decimal places
pub fn thousands(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp(dp);
    let raw = format!("{:.*}", dp as usize, rounded);
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Like [`thousands`] with an explicit `+` on non-negative values
pub fn signed_thousands(value: Decimal, dp: u32) -> String {
    let formatted = thousands(value, dp);
    if value.round_dp(dp) < Decimal::ZERO {
        formatted
    } else {
        format!("+{}", formatted)
    }
}

/// Unit price, up to four decimal places with trailing zeros trimmed
pub fn price(value: Decimal) -> String {
    value.round_dp(4).normalize().to_string()
}

/// Percentage with two decimal places and an explicit sign
pub fn percent(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    if rounded < Decimal::ZERO {
        format!("{:.2}%", rounded)
    } else {
        format!("+{:.2}%", rounded)
    }
}

/// Amount prefixed with the currency symbol when the currency has one
pub fn currency_amount(value: Decimal, currency: &Currency) -> String {
    match currency.symbol() {
        Some(symbol) => format!("{}{}", symbol, thousands(value, 2)),
        None => thousands(value, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_thousands_groups_integer_digits() {
        assert_eq!(thousands(dec!(50000), 2), "50,000.00");
        assert_eq!(thousands(dec!(1234567.891), 2), "1,234,567.89");
        assert_eq!(thousands(dec!(999), 2), "999.00");
        assert_eq!(thousands(dec!(0.5), 2), "0.50");
    }

    #[test]
    fn test_thousands_keeps_negative_sign_outside_groups() {
        assert_eq!(thousands(dec!(-3000), 2), "-3,000.00");
        assert_eq!(thousands(dec!(-735), 2), "-735.00");
    }

    #[test]
    fn test_thousands_without_decimals() {
        assert_eq!(thousands(dec!(1000.6), 0), "1,001");
        assert_eq!(thousands(dec!(12), 0), "12");
    }

    #[test]
    fn test_signed_thousands_marks_inflows() {
        assert_eq!(signed_thousands(dec!(50000), 2), "+50,000.00");
        assert_eq!(signed_thousands(dec!(-3000), 2), "-3,000.00");
        assert_eq!(signed_thousands(dec!(0), 2), "+0.00");
    }

    #[test]
    fn test_price_trims_trailing_zeros() {
        assert_eq!(price(dec!(185.50)), "185.5");
        assert_eq!(price(dec!(350.5)), "350.5");
        assert_eq!(price(dec!(45000)), "45000");
        assert_eq!(price(dec!(0.0450)), "0.045");
    }

    #[test]
    fn test_price_rounds_past_four_places() {
        assert_eq!(price(dec!(1.23456)), "1.2346");
    }

    #[test]
    fn test_percent_always_carries_sign() {
        assert_eq!(percent(dec!(20.05)), "+20.05%");
        assert_eq!(percent(dec!(25)), "+25.00%");
        assert_eq!(percent(dec!(-8.16)), "-8.16%");
    }

    #[test]
    fn test_currency_amount_uses_symbol_when_known() {
        assert_eq!(currency_amount(dec!(18550), &Currency::Cny), "¥18,550.00");
        assert_eq!(currency_amount(dec!(18550), &Currency::Usd), "$18,550.00");
        assert_eq!(currency_amount(dec!(18550), &Currency::Hkd), "18,550.00");
        assert_eq!(
            currency_amount(dec!(1250.5), &Currency::Other("EUR".to_string())),
            "1,250.50"
        );
    }
}
