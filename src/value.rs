use std::collections::HashMap;

use crate::ast::{Literal, Number};

/// A JSON value as seen by compiled transforms.
///
/// Integers and floats are kept apart (unlike standard JSON which only has
/// "number") so that `limit:99` yields `99` rather than `99.0`.
///
/// # Examples
///
/// ```
/// use metaline::Value;
/// use std::collections::HashMap;
///
/// let integer = Value::Integer(42);
/// let array = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
///
/// let mut obj = HashMap::new();
/// obj.insert("key".to_string(), Value::String("value".to_string()));
/// let object = Value::Object(obj);
///
/// assert_eq!(object.get("key"), Value::String("value".to_string()));
/// assert_eq!(integer.get("key"), Value::Null);
/// assert!(array.is_array());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Array of values
    Array(Vec<Value>),

    /// Object with string keys
    Object(HashMap<String, Value>),
}

impl Value {
    pub fn empty_object() -> Self {
        Value::Object(HashMap::new())
    }

    /// Single-key object `{key: value}`
    pub fn singleton(key: impl Into<String>, value: Value) -> Self {
        let mut map = HashMap::with_capacity(1);
        map.insert(key.into(), value);
        Value::Object(map)
    }

    /// Property read used by `#name`. Anything that is not an object, or an
    /// object without the key, reads as `Null`.
    pub fn get(&self, property: &str) -> Value {
        match self {
            Value::Object(map) => map.get(property).cloned().unwrap_or(Value::Null),
            _ => Value::Null,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Structural equality where `1` and `1.0` are the same value.
    pub fn same_value(&self, other: &Value) -> bool {
        matches!((self.key(), other.key()), (Some(a), Some(b)) if a == b)
    }

    /// Hashable identity under [`Value::same_value`]. Integral floats
    /// collapse onto integers and object entries are sorted by key.
    ///
    /// `None` when the value holds a NaN, which equals nothing.
    pub(crate) fn key(&self) -> Option<ValueKey> {
        let key = match self {
            Value::Null => ValueKey::Null,
            Value::Boolean(b) => ValueKey::Boolean(*b),
            Value::Integer(n) => ValueKey::Integer(*n),
            Value::Float(f) if f.is_nan() => return None,
            Value::Float(f) => float_key(*f),
            Value::String(s) => ValueKey::String(s.clone()),
            Value::Array(items) => {
                ValueKey::Array(items.iter().map(Value::key).collect::<Option<_>>()?)
            }
            Value::Object(map) => {
                let mut entries = map
                    .iter()
                    .map(|(k, v)| v.key().map(|key| (k.clone(), key)))
                    .collect::<Option<Vec<_>>>()?;
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                ValueKey::Object(entries)
            }
        };
        Some(key)
    }

    /// Returns a human-readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// See [`Value::key`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(u64),
    String(String),
    Array(Vec<ValueKey>),
    Object(Vec<(String, ValueKey)>),
}

// [-2^63, 2^63) is exactly the i64 range
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn float_key(f: f64) -> ValueKey {
    if f.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&f) {
        ValueKey::Integer(f as i64)
    } else {
        ValueKey::Float(f.to_bits())
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(Number::Integer(n)) => Value::Integer(*n),
            Literal::Number(Number::Float(n)) => Value::Float(*n),
            Literal::String(s) => Value::String(s.clone()),
        }
    }
}

#[test]
fn test_same_value_numbers() {
    assert!(Value::Integer(1).same_value(&Value::Float(1.0)));
    assert!(Value::Integer(0).same_value(&Value::Float(-0.0)));
    assert!(!Value::Integer(1).same_value(&Value::Float(1.5)));
    assert!(!Value::Float(f64::NAN).same_value(&Value::Float(f64::NAN)));
    assert!(!Value::Integer(1).same_value(&Value::String("1".into())));
}

#[test]
fn test_key_ignores_object_order() {
    let a = Value::Object(HashMap::from([
        ("x".to_string(), Value::Integer(1)),
        ("y".to_string(), Value::Array(vec![Value::Float(2.0)])),
    ]));
    let b = Value::Object(HashMap::from([
        ("y".to_string(), Value::Array(vec![Value::Integer(2)])),
        ("x".to_string(), Value::Float(1.0)),
    ]));
    assert_eq!(a.key(), b.key());
    assert!(a.same_value(&b));
}
