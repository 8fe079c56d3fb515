use serde_json::Number;

use crate::json_value::{JsonNode, JsonValue};

/// Performs a deep equality check between two JSON values.
///
/// - Primitives compare by value; numbers by numeric value, so `1` equals
///   `1.0`.
/// - Arrays compare element by element, in order.
/// - Objects compare by key set and per-key value; member order is ignored.
/// - Values of different kinds are never equal.
///
/// Handles that share an allocation are equal without descending.
///
/// # Examples
///
/// ```
/// use patchwork_util::{deep_equal, JsonValue};
/// use serde_json::json;
///
/// let a = JsonValue::from(json!({"foo": [1, 2, 3], "bar": 1.0}));
/// let b = JsonValue::from(json!({"bar": 1, "foo": [1, 2, 3]}));
/// let c = JsonValue::from(json!({"foo": [1, 3, 2], "bar": 1}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &JsonValue, b: &JsonValue) -> bool {
    if JsonValue::ptr_eq(a, b) {
        return true;
    }
    match (a.node(), b.node()) {
        (JsonNode::Null, JsonNode::Null) => true,
        (JsonNode::Bool(a), JsonNode::Bool(b)) => a == b,
        (JsonNode::Number(a), JsonNode::Number(b)) => number_equal(a, b),
        (JsonNode::String(a), JsonNode::String(b)) => a == b,

        (JsonNode::Array(arr_a), JsonNode::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(a, b)| deep_equal(a, b))
        }

        (JsonNode::Object(obj_a), JsonNode::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        _ => false,
    }
}

/// Compares two JSON numbers by value rather than by representation.
///
/// Integers are compared exactly, also against floats: a float equals an
/// integer only if it is integral and converts to the very same value.
/// Two floats compare as `f64`.
pub fn number_equal(a: &Number, b: &Number) -> bool {
    match (integer_value(a), integer_value(b)) {
        (Some(a), Some(b)) => a == b,
        (Some(int), None) => b.as_f64().is_some_and(|float| float_is_integer(float, int)),
        (None, Some(int)) => a.as_f64().is_some_and(|float| float_is_integer(float, int)),
        (None, None) => matches!((a.as_f64(), b.as_f64()), (Some(a), Some(b)) if a == b),
    }
}

/// Any `i64` or `u64` fits in `i128`.
fn integer_value(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

fn float_is_integer(float: f64, int: i128) -> bool {
    // 2^127: every integral float below it converts to i128 exactly.
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
    float.fract() == 0.0 && float.abs() < LIMIT && float as i128 == int
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn eq(a: serde_json::Value, b: serde_json::Value) -> bool {
        deep_equal(&JsonValue::from(a), &JsonValue::from(b))
    }

    // Scalar tests
    #[test]
    fn test_equal_numbers() {
        assert!(eq(json!(1), json!(1)));
    }

    #[test]
    fn test_not_equal_numbers() {
        assert!(!eq(json!(1), json!(2)));
    }

    #[test]
    fn test_integer_and_float_with_same_value_equal() {
        assert!(eq(json!(1), json!(1.0)));
        assert!(eq(json!(-2.0), json!(-2)));
        assert!(!eq(json!(1), json!(1.5)));
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        assert!(eq(json!(u64::MAX), json!(u64::MAX)));
        assert!(!eq(json!(u64::MAX), json!(u64::MAX - 1)));
        assert!(!eq(json!(-1), json!(u64::MAX)));
        assert!(eq(json!(i64::MIN), json!(i64::MIN)));
    }

    #[test]
    fn test_large_integer_against_float_compares_exactly() {
        // 2^53 + 1 has no f64 representation; it rounds to 2^53.
        assert!(!eq(json!(9007199254740993u64), json!(9007199254740992.0)));
        assert!(!eq(json!(9007199254740992.0), json!(9007199254740993u64)));
        assert!(eq(json!(9007199254740992u64), json!(9007199254740992.0)));
        assert!(!eq(json!(-9007199254740993i64), json!(-9007199254740992.0)));
        assert!(eq(json!(-9007199254740992i64), json!(-9007199254740992.0)));
        assert!(!eq(json!(u64::MAX), json!(18446744073709551615.0)));
        assert!(!eq(json!(1), json!(1e300)));
    }

    #[test]
    fn test_number_and_array_not_equal() {
        assert!(!eq(json!(1), json!([])));
    }

    #[test]
    fn test_zero_and_null_not_equal() {
        assert!(!eq(json!(0), json!(null)));
    }

    #[test]
    fn test_equal_strings() {
        assert!(eq(json!("a"), json!("a")));
    }

    #[test]
    fn test_not_equal_strings() {
        assert!(!eq(json!("a"), json!("b")));
        assert!(!eq(json!("a"), json!("A")));
    }

    #[test]
    fn test_empty_string_and_null_not_equal() {
        assert!(!eq(json!(""), json!(null)));
    }

    #[test]
    fn test_null_equal_null() {
        assert!(eq(json!(null), json!(null)));
    }

    #[test]
    fn test_booleans() {
        assert!(eq(json!(true), json!(true)));
        assert!(eq(json!(false), json!(false)));
        assert!(!eq(json!(true), json!(false)));
    }

    #[test]
    fn test_one_and_true_not_equal() {
        assert!(!eq(json!(1), json!(true)));
    }

    #[test]
    fn test_zero_and_false_not_equal() {
        assert!(!eq(json!(0), json!(false)));
    }

    // Object tests
    #[test]
    fn test_empty_objects_equal() {
        assert!(eq(json!({}), json!({})));
    }

    #[test]
    fn test_equal_objects_different_order() {
        assert!(eq(json!({"a": 1, "b": "2"}), json!({"b": "2", "a": 1})));
    }

    #[test]
    fn test_not_equal_objects_extra_property() {
        assert!(!eq(
            json!({"a": 1, "b": "2"}),
            json!({"a": 1, "b": "2", "c": []})
        ));
    }

    #[test]
    fn test_not_equal_objects_different_properties() {
        assert!(!eq(
            json!({"a": 1, "b": "2", "c": 3}),
            json!({"a": 1, "b": "2", "d": 3})
        ));
    }

    #[test]
    fn test_empty_object_and_array_not_equal() {
        assert!(!eq(json!({}), json!([])));
    }

    // Array tests
    #[test]
    fn test_arrays_are_order_sensitive() {
        assert!(eq(json!([1, 2, 3]), json!([1, 2, 3])));
        assert!(!eq(json!([1, 2, 3]), json!([3, 2, 1])));
    }

    #[test]
    fn test_not_equal_arrays_different_length() {
        assert!(!eq(json!([1, 2, 3]), json!([1, 2])));
    }

    #[test]
    fn test_not_equal_arrays_of_objects() {
        assert!(!eq(
            json!([{"a": "a"}, {"b": "b"}]),
            json!([{"a": "a"}, {"b": "c"}])
        ));
    }

    #[test]
    fn test_shared_handle_short_circuits() {
        let a = JsonValue::from(json!({"x": [1, {"y": null}]}));
        assert!(deep_equal(&a, &a.clone()));
    }

    #[test]
    fn test_big_object() {
        assert!(eq(
            json!({
                "prop1": "value1",
                "prop4": {
                    "subProp1": "sub value1",
                    "subProp2": {
                        "subSubProp1": "sub sub value1",
                        "subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]
                    }
                },
                "prop5": 1000
            }),
            json!({
                "prop5": 1000,
                "prop1": "value1",
                "prop4": {
                    "subProp2": {
                        "subSubProp1": "sub sub value1",
                        "subSubProp2": [1, 2, {"prop": 2, "prop2": 1}, 4, 5]
                    },
                    "subProp1": "sub value1"
                }
            })
        ));
    }
}
