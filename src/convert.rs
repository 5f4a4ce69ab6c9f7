//! Moving values between `serde_json` and [`Value`].
//!
//! JSON has a single number type while transforms keep integers and floats
//! apart, so numbers are split on the way in and joined on the way out.

use serde_json::{Map, Number};

use crate::Value;

/// Reads a JSON document into a [`Value`].
///
/// Numbers that fit an `i64` become [`Value::Integer`]; everything else
/// (fractions, exponents, integers above `i64::MAX`) becomes
/// [`Value::Float`]. Object key order is not kept.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => number_to_value(&n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key, json_to_value(value)))
                .collect(),
        ),
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Integer(i)
    } else {
        n.as_f64().map_or(Value::Null, Value::Float)
    }
}

/// Writes a transform result back out as JSON.
///
/// Integers stay integral (`99`, never `99.0`). Floats that have no JSON
/// form (NaN, infinities) are written as `null`.
pub fn value_to_json(value: Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(b),
        Value::Integer(i) => serde_json::Value::Number(Number::from(i)),
        Value::Float(f) => Number::from_f64(f).map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::String(s) => serde_json::Value::String(s),
        Value::Array(items) => serde_json::Value::Array(items.into_iter().map(value_to_json).collect()),
        Value::Object(entries) => serde_json::Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key, value_to_json(value)))
                .collect::<Map<_, _>>(),
        ),
    }
}

#[test]
fn test_numbers_keep_their_kind() {
    use serde_json::json;

    assert_eq!(json_to_value(json!(99)), Value::Integer(99));
    assert_eq!(json_to_value(json!(99.0)), Value::Float(99.0));
    assert_eq!(json_to_value(json!(u64::MAX)), Value::Float(u64::MAX as f64));
    assert_eq!(value_to_json(Value::Integer(99)).to_string(), "99");
    assert_eq!(value_to_json(Value::Float(f64::INFINITY)), serde_json::Value::Null);
}
