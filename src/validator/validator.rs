//! Validator for data mappings against a space
//!
//! Validation semantics, per record level:
//! - Every declared key is present
//! - No undeclared key is present
//! - Every value's kind matches the declared kind exactly
//!
//! Forbidden behaviors:
//! - Implicit coercion (an int is not a float, `"29"` is not an int)
//! - Null values
//! - Default values
//!
//! Nested spaces and list elements are checked recursively.

use serde_json::{Map, Value};

use super::config::ValidatorConfig;
use super::errors::{SchemaError, SchemaResult, Violation};
use crate::observability::{log_event_with_fields, Event};
use crate::space::{Space, ValueKind};

/// Path used when the data itself is not a record
pub const ROOT_PATH: &str = "$root";

/// Checks data against a space.
///
/// Validation does not mutate data and is deterministic: the same
/// (space, data) pair always yields the same outcome and violations.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the given configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates any JSON value against `space`.
    ///
    /// # Errors
    ///
    /// `SchemaError` listing the violations. A non-object value is a type
    /// mismatch at `$root`.
    pub fn validate(&self, space: &Space, data: &Value) -> SchemaResult<()> {
        match data.as_object() {
            Some(record) => self.validate_record(space, record),
            None => Err(self.reject(space, vec![root_mismatch(data)])),
        }
    }

    /// Validates a record against `space`.
    pub fn validate_record(&self, space: &Space, record: &Map<String, Value>) -> SchemaResult<()> {
        let mut sink = Sink::new(self.config.stops_early());
        check_record(space, record, "", &mut sink);

        if sink.violations.is_empty() {
            Ok(())
        } else {
            Err(self.reject(space, sink.violations))
        }
    }

    pub(crate) fn reject(&self, space: &Space, violations: Vec<Violation>) -> SchemaError {
        let err = SchemaError::new(space.display_name(), space.expected_schema(), violations);

        if self.config.log_rejections {
            let count = err.violations().len().to_string();
            let first = err
                .violations()
                .first()
                .map(ToString::to_string)
                .unwrap_or_default();
            log_event_with_fields(
                Event::PointRejected,
                &[
                    ("first", first.as_str()),
                    ("space", err.space_name()),
                    ("violations", count.as_str()),
                ],
            );
        }

        err
    }
}

/// Type mismatch for a value that is not a record at all.
pub(crate) fn root_mismatch(data: &Value) -> Violation {
    Violation::type_mismatch(ROOT_PATH, "record", json_kind_name(data))
}

/// Collects violations, optionally stopping after the first.
struct Sink {
    stop_early: bool,
    violations: Vec<Violation>,
}

impl Sink {
    fn new(stop_early: bool) -> Self {
        Self {
            stop_early,
            violations: Vec::new(),
        }
    }

    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn full(&self) -> bool {
        self.stop_early && !self.violations.is_empty()
    }
}

/// Key set first, then kinds.
fn check_record(space: &Space, record: &Map<String, Value>, prefix: &str, sink: &mut Sink) {
    for dim in space.dimensions() {
        if !record.contains_key(&dim.name) {
            sink.push(Violation::missing_key(make_path(prefix, &dim.name)));
            if sink.full() {
                return;
            }
        }
    }

    for key in record.keys() {
        if !space.contains(key) {
            sink.push(Violation::extra_key(make_path(prefix, key)));
            if sink.full() {
                return;
            }
        }
    }

    for dim in space.dimensions() {
        if let Some(value) = record.get(&dim.name) {
            check_value(&dim.kind, value, &make_path(prefix, &dim.name), sink);
            if sink.full() {
                return;
            }
        }
    }
}

fn check_value(kind: &ValueKind, value: &Value, path: &str, sink: &mut Sink) {
    let matches = match (kind, value) {
        (_, Value::Null) => false,
        (ValueKind::Int, Value::Number(n)) => n.is_i64() || n.is_u64(),
        (ValueKind::Float, Value::Number(n)) => n.is_f64(),
        (ValueKind::Text, Value::String(_)) => true,
        (ValueKind::Bool, Value::Bool(_)) => true,
        (ValueKind::List { element }, Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                check_value(element, item, &format!("{}[{}]", path, i), sink);
                if sink.full() {
                    return;
                }
            }
            true
        }
        (ValueKind::Nested { space }, Value::Object(record)) => {
            check_record(space, record, path, sink);
            true
        }
        _ => false,
    };

    if !matches {
        sink.push(Violation::type_mismatch(
            path,
            kind.type_name(),
            json_kind_name(value),
        ));
    }
}

/// Returns the kind name of a JSON value for error messages.
pub fn json_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "record",
    }
}

fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quiet() -> Validator {
        Validator::new(ValidatorConfig::quiet())
    }

    fn person() -> Space {
        Space::named(
            "Person",
            [
                ("name", ValueKind::Text),
                ("age", ValueKind::Int),
                ("height", ValueKind::Float),
                ("alive", ValueKind::Bool),
            ],
        )
        .unwrap()
    }

    fn address() -> Space {
        Space::named("Address", [("city", ValueKind::Text), ("zip", ValueKind::Int)]).unwrap()
    }

    #[test]
    fn test_valid_record_passes() {
        let data = json!({"name": "Ada", "age": 36, "height": 1.65, "alive": false});
        assert!(quiet().validate(&person(), &data).is_ok());
    }

    #[test]
    fn test_missing_key_fails() {
        let data = json!({"name": "Ada", "age": 36, "height": 1.65});

        let err = quiet().validate(&person(), &data).unwrap_err();
        assert_eq!(err.code(), "CADCAD_SCHEMA_MISMATCH");
        assert_eq!(err.missing_keys().collect::<Vec<_>>(), vec!["alive"]);
    }

    #[test]
    fn test_extra_key_fails() {
        let data = json!({"name": "Ada", "age": 36, "height": 1.65, "alive": true, "pet": "cat"});

        let err = quiet().validate(&person(), &data).unwrap_err();
        assert_eq!(err.extra_keys().collect::<Vec<_>>(), vec!["pet"]);
    }

    #[test]
    fn test_type_mismatch_names_key_and_kinds() {
        let data = json!({"name": "Ada", "age": "36", "height": 1.65, "alive": true});

        let err = quiet().validate(&person(), &data).unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::type_mismatch("age", "int", "str")]
        );
    }

    #[test]
    fn test_no_numeric_coercion() {
        let int_for_float = json!({"name": "Ada", "age": 36, "height": 2, "alive": true});
        let float_for_int = json!({"name": "Ada", "age": 36.0, "height": 1.5, "alive": true});

        let err = quiet().validate(&person(), &int_for_float).unwrap_err();
        assert_eq!(err.violations()[0], Violation::type_mismatch("height", "float", "int"));

        let err = quiet().validate(&person(), &float_for_int).unwrap_err();
        assert_eq!(err.violations()[0], Violation::type_mismatch("age", "int", "float"));
    }

    #[test]
    fn test_bool_is_not_int() {
        let space = Space::named("S", [("n", ValueKind::Int)]).unwrap();
        let err = quiet().validate(&space, &json!({"n": true})).unwrap_err();
        assert_eq!(err.violations()[0], Violation::type_mismatch("n", "int", "bool"));
    }

    #[test]
    fn test_null_rejected() {
        let data = json!({"name": null, "age": 36, "height": 1.65, "alive": true});

        let err = quiet().validate(&person(), &data).unwrap_err();
        assert_eq!(err.violations()[0], Violation::type_mismatch("name", "str", "null"));
    }

    #[test]
    fn test_non_record_rejected_at_root() {
        let err = quiet().validate(&person(), &json!([1, 2])).unwrap_err();
        assert_eq!(err.violations()[0].path(), ROOT_PATH);
    }

    #[test]
    fn test_aggregate_reports_everything() {
        let data = json!({"nme": "Ada", "age": "36", "height": 1.65});

        let err = quiet().validate(&person(), &data).unwrap_err();
        assert_eq!(
            err.violations(),
            &[
                Violation::missing_key("name"),
                Violation::missing_key("alive"),
                Violation::extra_key("nme"),
                Violation::type_mismatch("age", "int", "str"),
            ]
        );
    }

    #[test]
    fn test_first_violation_mode_stops_early() {
        let validator = Validator::new(ValidatorConfig {
            log_rejections: false,
            ..ValidatorConfig::first_violation()
        });
        let data = json!({"nme": "Ada", "age": "36", "height": 1.65});

        let err = validator.validate(&person(), &data).unwrap_err();
        assert_eq!(err.violations(), &[Violation::missing_key("name")]);
    }

    #[test]
    fn test_first_violation_mode_still_catches_types() {
        let validator = Validator::new(ValidatorConfig {
            log_rejections: false,
            ..ValidatorConfig::first_violation()
        });
        let data = json!({"name": "Ada", "age": "36", "height": 1.65, "alive": true});

        let err = validator.validate(&person(), &data).unwrap_err();
        assert_eq!(err.type_mismatches().count(), 1);
    }

    #[test]
    fn test_nested_space_validation() {
        let space = Space::named(
            "User",
            [("id", ValueKind::Int), ("home", ValueKind::nested(address()))],
        )
        .unwrap();

        let valid = json!({"id": 1, "home": {"city": "Lisbon", "zip": 1000}});
        assert!(quiet().validate(&space, &valid).is_ok());

        let missing = json!({"id": 1, "home": {"city": "Lisbon"}});
        let err = quiet().validate(&space, &missing).unwrap_err();
        assert_eq!(err.missing_keys().collect::<Vec<_>>(), vec!["home.zip"]);

        let not_record = json!({"id": 1, "home": "Lisbon"});
        let err = quiet().validate(&space, &not_record).unwrap_err();
        assert_eq!(
            err.violations()[0],
            Violation::type_mismatch("home", "Address", "str")
        );
    }

    #[test]
    fn test_list_element_validation() {
        let space = Space::named("Post", [("tags", ValueKind::list(ValueKind::Text))]).unwrap();

        assert!(quiet().validate(&space, &json!({"tags": ["a", "b"]})).is_ok());
        assert!(quiet().validate(&space, &json!({"tags": []})).is_ok());

        let err = quiet()
            .validate(&space, &json!({"tags": ["a", 1, "c"]}))
            .unwrap_err();
        assert_eq!(err.violations()[0].path(), "tags[1]");
    }

    #[test]
    fn test_list_of_nested_spaces() {
        let space = Space::named(
            "Book",
            [("addresses", ValueKind::list(ValueKind::nested(address())))],
        )
        .unwrap();

        let data = json!({"addresses": [{"city": "A", "zip": 1}, {"city": "B"}]});
        let err = quiet().validate(&space, &data).unwrap_err();
        assert_eq!(err.missing_keys().collect::<Vec<_>>(), vec!["addresses[1].zip"]);
    }

    #[test]
    fn test_error_carries_expected_schema() {
        let err = quiet().validate(&person(), &json!({})).unwrap_err();
        assert_eq!(err.space_name(), "Person");
        assert_eq!(
            err.expected_schema(),
            &["name -> str", "age -> int", "height -> float", "alive -> bool"]
        );
    }

    #[test]
    fn test_empty_space_accepts_empty_record() {
        let space = crate::space::builtins::empty();
        assert!(quiet().validate(&space, &json!({})).is_ok());
        assert!(quiet().validate(&space, &json!({"x": 1})).is_err());
    }

    #[test]
    fn test_json_kind_names() {
        assert_eq!(json_kind_name(&json!(null)), "null");
        assert_eq!(json_kind_name(&json!(1)), "int");
        assert_eq!(json_kind_name(&json!(1.5)), "float");
        assert_eq!(json_kind_name(&json!("x")), "str");
        assert_eq!(json_kind_name(&json!([])), "list");
        assert_eq!(json_kind_name(&json!({})), "record");
    }
}
