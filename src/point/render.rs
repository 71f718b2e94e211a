//! Canonical rendering of point data
//!
//! Records serialize in their space's declared order, nested spaces
//! included, so the output never depends on how the input map was built.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::space::{Space, ValueKind};

/// A record viewed through its space.
pub(crate) struct OrderedRecord<'a> {
    pub space: &'a Space,
    pub data: &'a Map<String, Value>,
}

/// A value viewed through its declared kind.
struct OrderedValue<'a> {
    kind: &'a ValueKind,
    value: &'a Value,
}

impl Serialize for OrderedRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.space.len()))?;
        for dim in self.space.dimensions() {
            if let Some(value) = self.data.get(&dim.name) {
                map.serialize_entry(
                    &dim.name,
                    &OrderedValue {
                        kind: &dim.kind,
                        value,
                    },
                )?;
            }
        }
        map.end()
    }
}

impl Serialize for OrderedValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self.kind, self.value) {
            (ValueKind::Nested { space }, Value::Object(data)) => {
                OrderedRecord { space, data }.serialize(serializer)
            }
            (ValueKind::List { element }, Value::Array(items)) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&OrderedValue {
                        kind: element,
                        value: item,
                    })?;
                }
                seq.end()
            }
            (_, value) => value.serialize(serializer),
        }
    }
}

/// Pretty JSON with four-space indentation, fields in declared order.
pub(crate) fn pretty(space: &Space, data: &Map<String, Value>) -> serde_json::Result<String> {
    let mut buffer = Vec::with_capacity(64);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    OrderedRecord { space, data }.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| serde::ser::Error::custom(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not a record: {}", other),
        }
    }

    #[test]
    fn test_pretty_uses_four_spaces() {
        let space = Space::named("S", [("age", ValueKind::Int)]).unwrap();
        let out = pretty(&space, &record(json!({"age": 29}))).unwrap();
        assert_eq!(out, "{\n    \"age\": 29\n}");
    }

    #[test]
    fn test_pretty_follows_declared_order() {
        let space = Space::named("S", [("zeta", ValueKind::Int), ("alpha", ValueKind::Int)]).unwrap();
        let out = pretty(&space, &record(json!({"alpha": 1, "zeta": 2}))).unwrap();
        assert_eq!(out, "{\n    \"zeta\": 2,\n    \"alpha\": 1\n}");
    }

    #[test]
    fn test_nested_records_follow_their_own_order() {
        let inner = Space::named("Inner", [("y", ValueKind::Int), ("x", ValueKind::Int)]).unwrap();
        let outer = Space::named(
            "Outer",
            [("items", ValueKind::list(ValueKind::nested(inner.clone()))), ("one", ValueKind::nested(inner))],
        )
        .unwrap();

        let data = record(json!({
            "one": {"x": 1, "y": 2},
            "items": [{"x": 3, "y": 4}]
        }));
        let out = pretty(&outer, &data).unwrap();

        let compact: String = out.split_whitespace().collect();
        assert_eq!(compact, r#"{"items":[{"y":4,"x":3}],"one":{"y":2,"x":1}}"#);
    }

    #[test]
    fn test_empty_record() {
        let space = crate::space::builtins::empty();
        assert_eq!(pretty(&space, &Map::new()).unwrap(), "{}");
    }
}
