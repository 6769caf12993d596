//! Lenient field deserializers for estimate requests.
//!
//! Estimate forms post whatever the user typed. Numeric fields accept JSON
//! numbers, numeric strings, `null`, or anything else; values that do not
//! parse as a number price as zero instead of rejecting the request.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

/// Converts a JSON value to a decimal, falling back to zero.
///
/// # Examples
///
/// ```
/// use cutting_estimator::api::coerce_decimal;
/// use rust_decimal_macros::dec;
/// use serde_json::json;
///
/// assert_eq!(coerce_decimal(&json!(12.5)), dec!(12.5));
/// assert_eq!(coerce_decimal(&json!(" 20 ")), dec!(20));
/// assert_eq!(coerce_decimal(&json!("abc")), dec!(0));
/// assert_eq!(coerce_decimal(&json!(null)), dec!(0));
/// ```
pub fn coerce_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }
    .unwrap_or(Decimal::ZERO)
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Deserializes a decimal leniently. Pair with `#[serde(default)]` so a
/// missing field is zero too.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_decimal(&value))
}

/// Deserializes an item id, generating a fresh one when the value is not a UUID.
pub fn uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|text| Uuid::parse_str(text.trim()).ok())
        .unwrap_or_else(Uuid::new_v4))
}

/// Deserializes free text, treating `null` and non-strings as empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}
