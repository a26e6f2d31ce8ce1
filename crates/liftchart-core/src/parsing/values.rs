use crate::profile::schema::ValueRange;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a chart number, accepting both decimal comma and decimal point.
///
/// Handles formats like:
/// - "12" -> 12
/// - "12.5" -> 12.5
/// - "12,5" -> 12.5 (German/Scandinavian decimal comma)
///
/// Anything that does not parse is absent rather than an error.
pub fn parse_number(s: &str) -> Option<Decimal> {
    let normalized = s.trim().replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Parse a number and keep it only when it falls inside `range`.
pub fn plausible(s: &str, range: &ValueRange) -> Option<Decimal> {
    parse_number(s).filter(|v| range.contains(*v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn capacity() -> ValueRange {
        ValueRange {
            min: dec!(0.5),
            max: dec!(5000),
        }
    }

    #[test]
    fn test_integer() {
        assert_eq!(parse_number("45"), Some(dec!(45)));
    }

    #[test]
    fn test_comma_and_point_agree() {
        assert_eq!(parse_number("12,5"), Some(dec!(12.5)));
        assert_eq!(parse_number("12.5"), Some(dec!(12.5)));
        assert_eq!(parse_number("12,5"), parse_number("12.5"));
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(parse_number("  8.0 "), Some(dec!(8.0)));
    }

    #[test]
    fn test_malformed_is_none() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("1,2,3"), None);
    }

    #[test]
    fn test_capacity_bounds_inclusive() {
        assert_eq!(plausible("0.5", &capacity()), Some(dec!(0.5)));
        assert_eq!(plausible("5000", &capacity()), Some(dec!(5000)));
        assert_eq!(plausible("0.49", &capacity()), None);
        assert_eq!(plausible("5000.01", &capacity()), None);
    }
}
