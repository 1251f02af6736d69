//! Formatting utilities for risk metric display.

use rust_decimal::Decimal;

use super::constants::{CURRENCY_DP, HUNDRED};

/// Format a fractional value as percentage string.
#[must_use]
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value * HUNDRED)
}

/// Format a confidence level, e.g. 0.99 as "99.00%".
#[must_use]
pub fn format_confidence(confidence: f64) -> String {
    format_pct(confidence)
}

/// Format a currency amount with thousands separators, e.g. "$1,234.50".
#[must_use]
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp(CURRENCY_DP);
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{frac}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_pct(0.1523), "15.23%");
        assert_eq!(format_pct(-0.023_1), "-2.31%");
        assert_eq!(format_confidence(0.99), "99.00%");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(999.5)), "$999.50");
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
        assert_eq!(format_currency(dec!(156003400.34)), "$156,003,400.34");
        assert_eq!(format_currency(dec!(-1234567.891)), "-$1,234,567.89");
    }
}
