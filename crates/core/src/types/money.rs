//! Price parsing and USD display formatting.
//!
//! Catalog prices arrive as human-entered strings that may use `,` or `.`
//! as either the decimal or the thousands separator, with arbitrary currency
//! symbols mixed in. [`parse_price`] normalizes them into a single
//! [`Decimal`]; [`format_usd`] renders amounts back out for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Errors that can occur when parsing a price string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    /// The input contains no digits at all.
    #[error("price string contains no digits")]
    Empty,
    /// The input could not be read as a number after normalization.
    #[error("price string is not a number: {0:?}")]
    NotNumeric(String),
}

/// Parse a heterogeneous price string into a numeric amount.
///
/// The separator rules:
/// - When both `,` and `.` appear, the one appearing last is the decimal
///   separator; every occurrence of the other is grouping and is removed.
/// - When only one kind appears, it is the decimal separator only if the
///   string ends with it followed by one or two digits; otherwise every
///   occurrence is grouping.
///
/// ## Examples
///
/// ```
/// use laced_core::parse_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_price("$1,234.56"), Ok(Decimal::new(123_456, 2)));
/// assert_eq!(parse_price("1.234,56"), Ok(Decimal::new(123_456, 2)));
/// assert_eq!(parse_price("12,5"), Ok(Decimal::new(125, 1)));
/// assert!(parse_price("abc").is_err());
/// ```
///
/// # Errors
///
/// Returns [`PriceParseError::Empty`] when the input holds no digits, and
/// [`PriceParseError::NotNumeric`] when the normalized string is not a
/// valid number.
pub fn parse_price(value: &str) -> Result<Decimal, PriceParseError> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.'))
        .collect();
    if cleaned.is_empty() {
        return Err(PriceParseError::Empty);
    }

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) => {
            let (decimal_sep, thousands_sep) = if comma > dot { (',', '.') } else { ('.', ',') };
            cleaned.replace(thousands_sep, "").replace(decimal_sep, ".")
        }
        (Some(_), None) => normalize_single_separator(&cleaned, ','),
        (None, Some(_)) => normalize_single_separator(&cleaned, '.'),
        (None, None) => cleaned,
    };

    normalized
        .parse::<Decimal>()
        .map_err(|_| PriceParseError::NotNumeric(value.to_owned()))
}

/// Decide whether a lone separator kind marks decimals or grouping.
///
/// Decimal only when the string ends with the separator followed by one or
/// two digits; any remaining occurrences are grouping and are stripped.
fn normalize_single_separator(cleaned: &str, sep: char) -> String {
    match cleaned.rsplit_once(sep) {
        Some((whole, frac))
            if (1..=2).contains(&frac.len()) && frac.chars().all(|c| c.is_ascii_digit()) =>
        {
            format!("{}.{frac}", whole.replace(sep, ""))
        }
        _ => cleaned.chars().filter(|&c| c != sep).collect(),
    }
}

/// Format an amount as a USD display string.
///
/// Two fraction digits, thousands grouping, `-` ahead of the `$` for
/// negative amounts.
///
/// ```
/// use laced_core::format_usd;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_usd(Decimal::new(12_345, 1)), "$1,234.50");
/// assert_eq!(format_usd(Decimal::ZERO), "$0.00");
/// ```
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{frac}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_currency_symbol_and_grouping() {
        assert_eq!(parse_price("$1,234.56"), Ok(dec("1234.56")));
    }

    #[test]
    fn test_parse_european_separators() {
        assert_eq!(parse_price("1.234,56"), Ok(dec("1234.56")));
    }

    #[test]
    fn test_parse_comma_grouping_without_decimals() {
        assert_eq!(parse_price("1,234"), Ok(dec("1234")));
    }

    #[test]
    fn test_parse_comma_as_decimal() {
        assert_eq!(parse_price("12,5"), Ok(dec("12.5")));
    }

    #[test]
    fn test_parse_dot_grouping_without_decimals() {
        assert_eq!(parse_price("1.234"), Ok(dec("1234")));
    }

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_price("120"), Ok(dec("120")));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_price("abc"), Err(PriceParseError::Empty));
    }

    #[test]
    fn test_parse_rejects_separators_only() {
        assert_eq!(
            parse_price("..."),
            Err(PriceParseError::NotNumeric("...".to_owned()))
        );
    }

    #[test]
    fn test_parse_strips_currency_words() {
        assert_eq!(parse_price("USD 99.90"), Ok(dec("99.90")));
    }

    #[test]
    fn test_parse_grouped_thousands_with_trailing_decimal() {
        assert_eq!(parse_price("1,234,5"), Ok(dec("1234.5")));
    }

    #[test]
    fn test_format_usd_grouping_and_padding() {
        assert_eq!(format_usd(dec("1234.5")), "$1,234.50");
        assert_eq!(format_usd(dec("0")), "$0.00");
        assert_eq!(format_usd(dec("1234567.891")), "$1,234,567.89");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(dec("-12.5")), "-$12.50");
    }

    #[test]
    fn test_format_usd_small_amounts_keep_leading_zero() {
        assert_eq!(format_usd(dec("0.5")), "$0.50");
    }
}
