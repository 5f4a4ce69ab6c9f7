//! Property-based tests for the metaline pipeline.
//!
//! 1. **Lexer and parser never panic** on arbitrary text
//! 2. **`$` is the identity** for any input
//! 3. **Transforms are deterministic** and **never mutate their input**
//! 4. **Error positions stay within the input**

use metaline::convert::json_to_value;
use metaline::{Value, compile, parse};
use proptest::prelude::*;
use serde_json::json;

/// Phrases that always compile.
const PHRASES: &[&str] = &[
    "$",
    "limit:99",
    "a.limit:99.9",
    "where.directorId.in.$",
    "where.directorId.in.$;limit:99",
    "$>#id",
    "$>id.#directorId",
    "$>id.#directorId;$>foo.#bar",
    "where.id.in.$>#id;limit:99",
    "#id",
    "a.b.#id;a.c:x",
];

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(json!(null)),
        any::<bool>().prop_map(|b| json!(b)),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(|s| json!(s)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("(id|bar|directorId|x)", inner, 0..4)
                .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
        ]
    })
    .prop_map(json_to_value)
}

fn phrase_alphabet() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![".", "$", ">", "#", ":", ";", "a", "id", "9", "9.9", " ", "@"]),
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn parse_never_panics(input in "\\PC{0,40}") {
        let _ = parse(&input);
    }

    #[test]
    fn parse_never_panics_on_phrase_alphabet(input in phrase_alphabet()) {
        let _ = compile(&input);
    }

    #[test]
    fn error_position_within_input(input in phrase_alphabet()) {
        if let Err(e) = compile(&input) {
            prop_assert!(e.position() <= input.chars().count());
        }
    }

    #[test]
    fn input_reference_is_identity(value in arb_value()) {
        let transform = compile("$").unwrap();
        prop_assert_eq!(transform.apply(&value), value);
    }

    #[test]
    fn transforms_are_deterministic_and_pure(
        phrase in prop::sample::select(PHRASES),
        value in arb_value(),
    ) {
        let transform = compile(phrase).unwrap();
        let before = value.clone();

        let first = transform.apply(&value);
        let second = transform.apply(&value);

        prop_assert_eq!(first, second);
        prop_assert_eq!(value, before);
    }
}
