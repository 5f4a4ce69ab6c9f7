use std::collections::HashSet;

use crate::{
    convert::{json_to_value, value_to_json},
    merge::{merge, merge_all},
    value::Value,
};

/// One `key.key.#property` group of a map phrase.
///
/// Each element contributes `element[property]` nested under `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub path: Vec<String>,
    pub property: String,
}

impl Field {
    fn read(&self, element: &Value) -> Value {
        wrap(&self.path, element.get(&self.property))
    }
}

/// What a compiled phrase computes before its leading path is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// `$` - the input itself
    Input,

    /// `#name` - one field of the input
    Property(String),

    /// `key:value` - a constant (the key is part of the wrapping path)
    Literal(Value),

    /// `$>#name` - flat, deduplicated list of one field across the input array
    Pluck(String),

    /// `$>key.#name...` - one object per input element
    Project(Vec<Field>),
}

/// A compiled phrase: evaluate `body`, then nest it under `wrap`.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub wrap: Vec<String>,
    pub body: Body,
}

impl Step {
    pub fn evaluate(&self, input: &Value) -> Value {
        let value = match &self.body {
            Body::Input => input.clone(),
            Body::Property(name) => input.get(name),
            Body::Literal(value) => value.clone(),
            Body::Pluck(name) => pluck(name, input),
            Body::Project(fields) => project_each(fields, input),
        };
        wrap(&self.wrap, value)
    }
}

/// How the phrases of a program are combined.
#[derive(Debug, Clone, PartialEq)]
pub enum Composition {
    /// No phrases: always `{}`
    Empty,

    /// Exactly one phrase, returned as is
    Single(Step),

    /// Several bare map phrases sharing one object per input element
    Columns(Vec<Field>),

    /// Everything else: deep-merge of every phrase result
    Merge(Vec<Step>),
}

impl Composition {
    pub fn name(&self) -> &'static str {
        match self {
            Composition::Empty => "empty",
            Composition::Single(_) => "single",
            Composition::Columns(_) => "columns",
            Composition::Merge(_) => "merge",
        }
    }
}

/// A compiled phrase string.
///
/// Transforms hold no state between calls and never modify their input, so
/// one instance can be shared freely (it is `Send + Sync`) and applied any
/// number of times.
///
/// # Examples
///
/// ```
/// use metaline::{compile, Value};
///
/// let transform = compile("limit:99").unwrap();
/// let output = transform.apply(&Value::Null);
/// assert_eq!(output.get("limit"), Value::Integer(99));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    composition: Composition,
}

impl Transform {
    pub fn new(composition: Composition) -> Self {
        Transform { composition }
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Runs the transform against `input`.
    pub fn apply(&self, input: &Value) -> Value {
        match &self.composition {
            Composition::Empty => Value::empty_object(),
            Composition::Single(step) => step.evaluate(input),
            Composition::Columns(fields) => project_each(fields, input),
            Composition::Merge(steps) => merge_all(steps.iter().map(|step| step.evaluate(input))),
        }
    }

    /// [`Transform::apply`] for `serde_json` values.
    pub fn apply_json(&self, input: &serde_json::Value) -> serde_json::Value {
        value_to_json(self.apply(&json_to_value(input.clone())))
    }
}

/// Nests `value` under `path`, innermost key last: `[a, b]` gives `{a: {b: value}}`.
fn wrap(path: &[String], value: Value) -> Value {
    path.iter()
        .rev()
        .fold(value, |inner, key| Value::singleton(key.clone(), inner))
}

fn elements(input: &Value) -> &[Value] {
    match input {
        Value::Array(items) => items.as_slice(),
        other => {
            log::debug!("map over {} yields an empty array", other.type_name());
            &[]
        }
    }
}

/// Flattens one level and keeps the first of every group of
/// [`Value::same_value`] equals, in input order.
fn pluck(property: &str, input: &Value) -> Value {
    let mut seen = HashSet::new();
    let mut unique = vec![];

    let mut push_unique = |value: Value| match value.key() {
        Some(key) => {
            if seen.insert(key) {
                unique.push(value);
            }
        }
        // NaN is never a duplicate
        None => unique.push(value),
    };

    for element in elements(input) {
        match element.get(property) {
            Value::Array(items) => items.into_iter().for_each(&mut push_unique),
            value => push_unique(value),
        }
    }

    Value::Array(unique)
}

fn project(fields: &[Field], element: &Value) -> Value {
    fields
        .iter()
        .fold(Value::empty_object(), |acc, field| merge(acc, field.read(element)))
}

fn project_each(fields: &[Field], input: &Value) -> Value {
    Value::Array(
        elements(input)
            .iter()
            .map(|element| project(fields, element))
            .collect(),
    )
}
