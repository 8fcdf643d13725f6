//! Formatting and validation helpers shared by the normalizer and pages.
//!
//! All formatters are total: they accept loosely-typed input and degrade to an
//! empty or zero rendering rather than failing.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde_json::Value;
use storedash_core::{Email, Money, group_thousands};

pub use storedash_core::capitalize_label as capitalize_first;

const DATE_FORMAT: &str = "%b %-d, %Y";
const DATE_TIME_FORMAT: &str = "%b %-d, %Y, %I:%M %p";
const ID_LENGTH: usize = 9;

/// Naive timestamp layouts accepted in addition to RFC 3339, tried in order.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// =============================================================================
// Numbers and money
// =============================================================================

/// Strictly parse a decimal number, accepting scientific notation.
///
/// Surrounding whitespace is ignored; any other stray character fails.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Format a decimal amount as US dollars (`$1,234.50`).
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    Money::usd(amount).display()
}

/// Format a raw, possibly absent, value as US dollars.
///
/// Absent and `null` values render as `$0.00`. Numbers and numeric strings
/// are converted strictly, so a value that is present but not a number also
/// renders as `$0.00` instead of a not-a-number marker.
#[must_use]
pub fn format_currency(raw: Option<&Value>) -> String {
    let amount = match raw {
        Some(Value::Number(n)) => parse_decimal(&n.to_string()),
        Some(Value::String(s)) => parse_decimal(s),
        _ => None,
    };
    format_money(amount.unwrap_or(Decimal::ZERO))
}

/// Format an integer with thousands separators (`65,802`).
#[must_use]
pub fn format_number(number: i64) -> String {
    let digits = group_thousands(&number.unsigned_abs().to_string());
    if number < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Format a ratio as a percentage (`0.021` → `2.1%`).
#[must_use]
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0)
}

// =============================================================================
// Dates
// =============================================================================

/// Interpret a raw value as a UTC timestamp.
///
/// Accepts RFC 3339 strings, naive `YYYY-MM-DD[THH:MM[:SS]]` strings (taken
/// as UTC), and numbers as epoch milliseconds.
#[must_use]
pub fn parse_timestamp(raw: &Value) -> Option<DateTime<Utc>> {
    match raw {
        Value::String(s) => parse_timestamp_str(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(float_millis))
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)] // out-of-range values fail the timestamp lookup
const fn float_millis(millis: f64) -> i64 {
    millis as i64
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a raw date value as `Jan 5, 2024`, or an empty string.
#[must_use]
pub fn format_date(raw: &Value) -> String {
    parse_timestamp(raw).map_or_else(String::new, |dt| dt.format(DATE_FORMAT).to_string())
}

/// Format a raw date value as `Jan 5, 2024, 03:04 PM`, or an empty string.
#[must_use]
pub fn format_date_time(raw: &Value) -> String {
    parse_timestamp(raw).map_or_else(String::new, |dt| {
        dt.format(DATE_TIME_FORMAT).to_string()
    })
}

// =============================================================================
// Strings
// =============================================================================

/// Truncate to at most `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", text.get(..byte_idx).unwrap_or(text)),
        None => text.to_owned(),
    }
}

/// Generate a short random identifier of lower-case base-36 characters.
#[must_use]
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
        .collect()
}

// =============================================================================
// Validation
// =============================================================================

/// Whether the text is a well-formed email address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    Email::parse(email).is_ok()
}

/// Whether the text looks like a phone number.
///
/// An optional leading `+`, then digits, spaces, dashes and parentheses,
/// with at least one digit.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let body = phone.strip_prefix('+').unwrap_or(phone);
    !body.is_empty()
        && body.chars().any(|c| c.is_ascii_digit())
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_format_currency_absent_is_zero() {
        assert_eq!(format_currency(None), "$0.00");
        assert_eq!(format_currency(Some(&Value::Null)), "$0.00");
    }

    #[test]
    fn test_format_currency_numbers_and_strings() {
        assert_eq!(format_currency(Some(&json!(200))), "$200.00");
        assert_eq!(format_currency(Some(&json!("19.99"))), "$19.99");
        assert_eq!(format_currency(Some(&json!(1234.5))), "$1,234.50");
        assert_eq!(format_currency(Some(&json!("-5"))), "-$5.00");
    }

    #[test]
    fn test_format_currency_non_numeric_degrades() {
        assert_eq!(format_currency(Some(&json!("abc"))), "$0.00");
        assert_eq!(format_currency(Some(&json!("12abc"))), "$0.00");
        assert_eq!(format_currency(Some(&json!(true))), "$0.00");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(" 19.99 "), Some(Decimal::new(1999, 2)));
        assert_eq!(parse_decimal("1e3"), Some(Decimal::from(1000)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("1.2.3"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&json!("2024-01-05")), "Jan 5, 2024");
        assert_eq!(format_date(&json!("2024-03-15T10:30:00Z")), "Mar 15, 2024");
        assert_eq!(format_date(&json!("2024-03-15T23:30:00-05:00")), "Mar 16, 2024");
        assert_eq!(format_date(&json!(1_704_412_800_000_i64)), "Jan 5, 2024");
        assert_eq!(format_date(&json!("not a date")), "");
        assert_eq!(format_date(&json!("")), "");
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time(&json!("2024-01-05T15:04:00Z")),
            "Jan 5, 2024, 03:04 PM"
        );
        assert_eq!(format_date_time(&Value::Null), "");
    }

    #[test]
    fn test_format_number_and_percentage() {
        assert_eq!(format_number(65_802), "65,802");
        assert_eq!(format_number(-1_234_567), "-1,234,567");
        assert_eq!(format_number(0), "0");
        assert_eq!(format_percentage(0.021, 1), "2.1%");
        assert_eq!(format_percentage(0.5, 0), "50%");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
        assert_eq!(truncate_text("ééééé", 2), "éé...");
        assert_eq!(truncate_text("", 3), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("publish"), "Publish");
        assert_eq!(capitalize_first("FLEX"), "Flex");
    }

    #[test]
    fn test_generate_id() {
        let id = generate_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_validation() {
        assert!(is_valid_email("admin@dashboard.com"));
        assert!(!is_valid_email("admin@dashboard"));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(!is_valid_phone("555-CALL"));
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone("()"));
    }
}
