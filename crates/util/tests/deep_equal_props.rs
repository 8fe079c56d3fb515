use patchwork_util::{deep_equal, JsonValue};
use proptest::prelude::*;
use serde_json::Value;

fn arb_json() -> impl Strategy<Value = Value> {
    tree(prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::String),
    ])
}

/// Integer-only trees, where `serde_json`'s representation-based number
/// equality coincides with numeric equality.
fn arb_integer_json() -> impl Strategy<Value = Value> {
    tree(prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-3i64..3).prop_map(Value::from),
        "[ab]{0,1}".prop_map(Value::String),
    ])
}

fn tree(leaf: impl Strategy<Value = Value> + 'static) -> impl Strategy<Value = Value> {
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..6)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

fn reverse_members(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(reverse_members).collect()),
        Value::Object(members) => Value::Object(
            members
                .iter()
                .rev()
                .map(|(k, v)| (k.clone(), reverse_members(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn separately_built_trees_are_equal(src in arb_json()) {
        let a = JsonValue::from(src.clone());
        let b = JsonValue::from(src);
        prop_assert!(deep_equal(&a, &b));
    }

    #[test]
    fn member_order_is_ignored(src in arb_json()) {
        let a = JsonValue::from(src.clone());
        let b = JsonValue::from(reverse_members(&src));
        prop_assert!(deep_equal(&a, &b));
    }

    #[test]
    fn agrees_with_serde_equality(a in arb_integer_json(), b in arb_integer_json()) {
        let expected = a == b;
        prop_assert_eq!(deep_equal(&JsonValue::from(a), &JsonValue::from(b)), expected);
    }
}
