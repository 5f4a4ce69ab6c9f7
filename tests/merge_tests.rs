// tests/merge_tests.rs

use metaline::convert::{json_to_value, value_to_json};
use metaline::merge::{merge, merge_all};
use serde_json::{Value as Json, json};

fn merged(target: Json, source: Json) -> Json {
    value_to_json(merge(json_to_value(target), json_to_value(source)))
}

#[test]
fn test_disjoint_keys_union() {
    assert_eq!(merged(json!({"a": 1}), json!({"b": 2})), json!({"a": 1, "b": 2}));
}

#[test]
fn test_nested_objects_recurse() {
    assert_eq!(
        merged(
            json!({"where": {"directorId": {"in": [1, 2]}}}),
            json!({"where": {"limit": 99}})
        ),
        json!({"where": {"directorId": {"in": [1, 2]}, "limit": 99}})
    );
}

#[test]
fn test_scalar_source_wins() {
    assert_eq!(merged(json!({"a": 1}), json!({"a": "x"})), json!({"a": "x"}));
    assert_eq!(merged(json!(1), json!(2)), json!(2));
}

#[test]
fn test_type_mismatch_source_wins() {
    assert_eq!(merged(json!({"a": {"b": 1}}), json!({"a": [1]})), json!({"a": [1]}));
    assert_eq!(merged(json!([1, 2]), json!({"a": 1})), json!({"a": 1}));
    assert_eq!(merged(json!({"a": 1}), json!(null)), json!(null));
}

#[test]
fn test_arrays_merge_by_index() {
    assert_eq!(
        merged(json!([{"id": 1}, {"id": 2}]), json!([{"foo": 2}, {"foo": 3}])),
        json!([{"id": 1, "foo": 2}, {"id": 2, "foo": 3}])
    );
}

#[test]
fn test_longer_target_keeps_tail() {
    assert_eq!(merged(json!([1, 2, 3]), json!([9])), json!([9, 2, 3]));
}

#[test]
fn test_longer_source_keeps_tail() {
    assert_eq!(
        merged(json!([{"a": 1}]), json!([{"b": 1}, {"c": 2}])),
        json!([{"a": 1, "b": 1}, {"c": 2}])
    );
}

#[test]
fn test_empty_arrays() {
    assert_eq!(merged(json!([]), json!([1])), json!([1]));
    assert_eq!(merged(json!([1]), json!([])), json!([1]));
}

#[test]
fn test_merge_all_starts_from_empty_object() {
    assert_eq!(value_to_json(merge_all(Vec::new())), json!({}));

    let parts = vec![
        json_to_value(json!({"where": {"a": 1}})),
        json_to_value(json!({"where": {"b": 2}})),
        json_to_value(json!({"limit": 3})),
    ];
    assert_eq!(
        value_to_json(merge_all(parts)),
        json!({"where": {"a": 1, "b": 2}, "limit": 3})
    );
}
