//! Loosely-typed input records.
//!
//! Raw records come from mock datasets and HTTP responses with no schema:
//! fields may be missing, `null`, empty, named in camelCase or snake_case,
//! and numbers may arrive as strings. [`RawRecord`] wraps such a value and
//! answers explicit presence questions over an ordered list of candidate
//! keys, so each normalizer reads like a field map.

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::helpers::parse_decimal;

/// Whether a raw value counts as "no record at all".
///
/// `null`, `false`, zero and the empty string are falsy; everything else,
/// including empty objects and arrays, is a record.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Whether a field value is present: neither `null` nor an empty string.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    !matches!(value, Value::Null) && value.as_str().is_none_or(|s| !s.is_empty())
}

/// A borrowed view over one raw record.
///
/// Non-object values behave as a record with no fields.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> RawRecord<'a> {
    /// Wrap a raw value.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    /// The first present value among `keys`, in order.
    #[must_use]
    pub fn get(self, keys: &[&str]) -> Option<&'a Value> {
        self.candidates(keys).next()
    }

    /// The first present scalar among `keys`, as text.
    ///
    /// Numbers and booleans are rendered in their JSON form; arrays and
    /// objects are skipped.
    #[must_use]
    pub fn text(self, keys: &[&str]) -> Option<String> {
        self.candidates(keys).find_map(scalar_text)
    }

    /// Like [`RawRecord::text`], falling back to `default`.
    #[must_use]
    pub fn text_or(self, keys: &[&str], default: &str) -> String {
        self.text(keys).unwrap_or_else(|| default.to_owned())
    }

    /// The first candidate that parses to a non-zero decimal.
    ///
    /// Strings are read up to the end of their leading number, so
    /// `"19.99 USD"` yields `19.99`.
    #[must_use]
    pub fn decimal(self, keys: &[&str]) -> Option<Decimal> {
        self.candidates(keys)
            .filter_map(coerce_decimal)
            .find(|d| !d.is_zero())
    }

    /// The first candidate that parses to a non-zero float.
    #[must_use]
    pub fn float(self, keys: &[&str]) -> Option<f64> {
        self.candidates(keys)
            .filter_map(coerce_float)
            .find(|f| *f != 0.0)
    }

    /// The first candidate that parses to a non-zero integer.
    ///
    /// Fractions truncate toward zero; strings are read up to the end of
    /// their leading digits.
    #[must_use]
    pub fn int(self, keys: &[&str]) -> Option<i64> {
        self.candidates(keys).filter_map(coerce_int).find(|i| *i != 0)
    }

    /// The string entries of the first array among `keys`.
    ///
    /// Non-string entries are dropped; a missing or non-array field yields
    /// an empty list.
    #[must_use]
    pub fn strings(self, keys: &[&str]) -> Vec<String> {
        self.candidates(keys)
            .find_map(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn candidates(self, keys: &[&str]) -> impl Iterator<Item = &'a Value> {
        let fields = self.fields;
        keys.iter()
            .filter_map(move |key| fields.and_then(|f| f.get(*key)))
            .filter(|value| is_present(value))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// The longest prefix of `text` (after leading whitespace) that reads as a
/// decimal number with optional sign, fraction and exponent.
fn float_prefix(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text.get(..end)
}

/// The leading optionally-signed run of digits in `text`.
fn int_prefix(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(bytes, sign);
    if digits == 0 {
        return None;
    }
    text.get(..sign + digits)
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Magnitudes beyond `Decimal`'s range (about 7.9e28) do not coerce.
fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => float_prefix(s).and_then(parse_decimal),
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    let float = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => float_prefix(s).and_then(|p| p.parse::<f64>().ok()),
        _ => None,
    };
    float.filter(|f| f.is_finite())
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_float)),
        Value::String(s) => int_prefix(s).and_then(|p| p.parse::<i64>().ok()),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)] // range checked above the cast
fn truncate_float(value: f64) -> Option<i64> {
    const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    (value.is_finite() && value.abs() < LIMIT).then(|| value.trunc() as i64)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_is_falsy() {
        assert!(is_falsy(&Value::Null));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));
        assert!(!is_falsy(&json!({})));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!("0")));
    }

    #[test]
    fn test_camel_case_wins() {
        let value = json!({"productName": "Camel", "product_name": "Snake"});
        let record = RawRecord::new(&value);
        assert_eq!(
            record.text(&["productName", "product_name"]).unwrap(),
            "Camel"
        );
    }

    #[test]
    fn test_absent_and_empty_fall_through() {
        let value = json!({"productName": "", "product_name": null, "name": "Widget"});
        let record = RawRecord::new(&value);
        assert_eq!(
            record.text(&["productName", "product_name", "name"]).unwrap(),
            "Widget"
        );
        assert_eq!(record.text_or(&["missing"], "Fallback"), "Fallback");
    }

    #[test]
    fn test_numbers_render_as_text() {
        let value = json!({"id": 42});
        assert_eq!(RawRecord::new(&value).text(&["id"]).unwrap(), "42");
    }

    #[test]
    fn test_non_object_has_no_fields() {
        let value = json!("just a string");
        let record = RawRecord::new(&value);
        assert!(record.get(&["name"]).is_none());
        assert!(record.decimal(&["price"]).is_none());
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(float_prefix("19.99abc"), Some("19.99"));
        assert_eq!(float_prefix("  -3.5e2x"), Some("-3.5e2"));
        assert_eq!(float_prefix(".5"), Some(".5"));
        assert_eq!(float_prefix("7."), Some("7."));
        assert_eq!(float_prefix("1e"), Some("1"));
        assert_eq!(float_prefix("abc"), None);
        assert_eq!(float_prefix("-"), None);
        assert_eq!(float_prefix("."), None);
    }

    #[test]
    fn test_decimal_coercion() {
        let value = json!({"a": "19.99", "b": 200, "c": "12 units", "d": "abc"});
        let record = RawRecord::new(&value);
        assert_eq!(record.decimal(&["a"]), Some(Decimal::new(1999, 2)));
        assert_eq!(record.decimal(&["b"]), Some(Decimal::from(200)));
        assert_eq!(record.decimal(&["c"]), Some(Decimal::from(12)));
        assert_eq!(record.decimal(&["d"]), None);
    }

    #[test]
    fn test_decimal_out_of_range_does_not_coerce() {
        let value = json!({"a": 1e30, "b": "1e30", "c": -1e30});
        let record = RawRecord::new(&value);
        assert_eq!(record.decimal(&["a"]), None);
        assert_eq!(record.decimal(&["b"]), None);
        assert_eq!(record.decimal(&["c"]), None);
    }

    #[test]
    fn test_zero_falls_through_to_next_candidate() {
        let value = json!({"discount_amount": "0", "discount": 15});
        let record = RawRecord::new(&value);
        assert_eq!(
            record.decimal(&["discountAmount", "discount_amount", "discount"]),
            Some(Decimal::from(15))
        );
    }

    #[test]
    fn test_int_coercion() {
        let value = json!({"a": "3 items", "b": 2.9, "c": "-4", "d": "1e3", "e": "x"});
        let record = RawRecord::new(&value);
        assert_eq!(record.int(&["a"]), Some(3));
        assert_eq!(record.int(&["b"]), Some(2));
        assert_eq!(record.int(&["c"]), Some(-4));
        assert_eq!(record.int(&["d"]), Some(1));
        assert_eq!(record.int(&["e"]), None);
    }

    #[test]
    fn test_float_coercion() {
        let value = json!({"a": "0.021", "b": 65.5, "c": "NaN"});
        let record = RawRecord::new(&value);
        assert_eq!(record.float(&["a"]), Some(0.021));
        assert_eq!(record.float(&["b"]), Some(65.5));
        assert_eq!(record.float(&["c"]), None);
    }

    #[test]
    fn test_strings_keep_only_text_entries() {
        let value = json!({"colors": ["red", 3, null, "blue"], "tags": "not-a-list"});
        let record = RawRecord::new(&value);
        assert_eq!(record.strings(&["colors"]), vec!["red", "blue"]);
        assert!(record.strings(&["tags"]).is_empty());
        assert!(record.strings(&["missing"]).is_empty());
    }
}
