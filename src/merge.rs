//! Deep merge of partial phrase results.
//!
//! Phrase outputs are usually nested (`{where: {...}}`), so combining them
//! with a shallow key overwrite would lose data. Objects are merged key by
//! key, arrays element by element, and everything else is replaced by the
//! later value.

use crate::value::Value;

/// Merges `source` on top of `target`.
///
/// - object + object: union of keys, recursing where both sides have a key
/// - array + array: `result[i] = merge(target[i], source[i])`; the longer
///   side's trailing elements are carried over as they are
/// - anything else: `source` wins
///
/// # Examples
///
/// ```
/// use metaline::merge::merge;
/// use metaline::Value;
///
/// let target = Value::singleton("where", Value::singleton("a", Value::Integer(1)));
/// let source = Value::singleton("where", Value::singleton("b", Value::Integer(2)));
///
/// let merged = merge(target, source);
/// assert_eq!(merged.get("where").get("a"), Value::Integer(1));
/// assert_eq!(merged.get("where").get("b"), Value::Integer(2));
/// ```
pub fn merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target), Value::Object(source)) => {
            for (key, value) in source {
                let merged = match target.remove(&key) {
                    Some(existing) => merge(existing, value),
                    None => value,
                };
                target.insert(key, merged);
            }
            Value::Object(target)
        }
        (Value::Array(target), Value::Array(source)) => Value::Array(merge_arrays(target, source)),
        (_, source) => source,
    }
}

fn merge_arrays(target: Vec<Value>, source: Vec<Value>) -> Vec<Value> {
    let mut result = Vec::with_capacity(target.len().max(source.len()));
    let mut target = target.into_iter();
    let mut source = source.into_iter();

    loop {
        match (target.next(), source.next()) {
            (Some(a), Some(b)) => result.push(merge(a, b)),
            (Some(a), None) => result.push(a),
            (None, Some(b)) => result.push(b),
            (None, None) => break,
        }
    }
    result
}

/// Left fold of `parts` through [`merge`], starting from an empty object.
pub fn merge_all(parts: impl IntoIterator<Item = Value>) -> Value {
    parts.into_iter().fold(Value::empty_object(), merge)
}
