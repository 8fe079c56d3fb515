//! Conversions between [`JsonValue`] and `serde_json`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use super::{JsonNode, JsonValue, Map};

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        let node = match value {
            Value::Null => JsonNode::Null,
            Value::Bool(b) => JsonNode::Bool(b),
            Value::Number(n) => JsonNode::Number(n),
            Value::String(s) => JsonNode::String(s),
            Value::Array(items) => {
                JsonNode::Array(items.into_iter().map(JsonValue::from).collect())
            }
            Value::Object(members) => JsonNode::Object(
                members
                    .into_iter()
                    .map(|(key, val)| (key, JsonValue::from(val)))
                    .collect(),
            ),
        };
        JsonValue::new(node)
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        match value.node() {
            JsonNode::Null => Value::Null,
            JsonNode::Bool(b) => Value::Bool(*b),
            JsonNode::Number(n) => Value::Number(n.clone()),
            JsonNode::String(s) => Value::String(s.clone()),
            JsonNode::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            JsonNode::Object(members) => Value::Object(
                members
                    .iter()
                    .map(|(key, val)| (key.clone(), Value::from(val)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::new(JsonNode::Bool(b))
    }
}

impl From<i64> for JsonValue {
    fn from(n: i64) -> Self {
        JsonValue::new(JsonNode::Number(n.into()))
    }
}

impl From<u64> for JsonValue {
    fn from(n: u64) -> Self {
        JsonValue::new(JsonNode::Number(n.into()))
    }
}

impl From<i32> for JsonValue {
    fn from(n: i32) -> Self {
        JsonValue::from(i64::from(n))
    }
}

/// Non-finite floats have no JSON representation and become `null`, as in
/// `serde_json`.
impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::new(Number::from_f64(n).map_or(JsonNode::Null, JsonNode::Number))
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::new(JsonNode::String(s.to_owned()))
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::new(JsonNode::String(s))
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(items: Vec<JsonValue>) -> Self {
        JsonValue::array(items)
    }
}

impl From<Map> for JsonValue {
    fn from(members: Map) -> Self {
        JsonValue::object(members)
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.node() {
            JsonNode::Null => serializer.serialize_unit(),
            JsonNode::Bool(b) => serializer.serialize_bool(*b),
            JsonNode::Number(n) => n.serialize(serializer),
            JsonNode::String(s) => serializer.serialize_str(s),
            JsonNode::Array(items) => serializer.collect_seq(items),
            JsonNode::Object(members) => serializer.collect_map(members),
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(JsonValue::from)
    }
}
