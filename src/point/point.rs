//! Point - an immutable record bound to one space
//!
//! - Built only through the validator; construction is all or nothing
//! - Holds a shared handle to its space, never a copy
//! - No mutators: an "update" builds a new point
//! - Renders deterministically in the space's declared order

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use super::errors::{PointError, PointResult};
use super::render::{self, OrderedRecord};
use crate::space::{same_space, Space};
use crate::validator::{SchemaResult, Validator};

/// A frozen record that conforms to its space.
#[derive(Debug, Clone)]
pub struct Point {
    space: Arc<Space>,
    data: Map<String, Value>,
}

impl Point {
    /// Validates `data` against `space` and builds a point.
    ///
    /// # Errors
    ///
    /// `SchemaError` if `data` is not a record, has missing or undeclared
    /// keys, or holds a value of the wrong kind. Nothing is built on error.
    pub fn new(space: Arc<Space>, data: Value) -> SchemaResult<Self> {
        Self::with_validator(&Validator::default(), space, data)
    }

    /// Same as [`Point::new`] with an explicit validator.
    pub fn with_validator(validator: &Validator, space: Arc<Space>, data: Value) -> SchemaResult<Self> {
        let record = match data {
            Value::Object(record) => record,
            other => {
                return Err(validator.reject(&space, vec![crate::validator::root_mismatch(&other)]))
            }
        };

        validator.validate_record(&space, &record)?;

        Ok(Self {
            space,
            data: record,
        })
    }

    /// Builds a point from (key, value) pairs.
    pub fn from_pairs<I, K>(space: Arc<Space>, pairs: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let record: Map<String, Value> = pairs.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self::new(space, Value::Object(record))
    }

    /// Returns the space this point conforms to
    #[inline]
    pub fn space(&self) -> &Arc<Space> {
        &self.space
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` if `key` is not a dimension of the space.
    pub fn get(&self, key: &str) -> PointResult<&Value> {
        self.data.get(key).ok_or_else(|| PointError::KeyNotFound {
            key: key.to_string(),
            space: self.space.display_name().to_string(),
        })
    }

    /// Returns (key, value) pairs in the space's declared order
    pub fn data(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.space
            .dimensions()
            .iter()
            .filter_map(|d| self.data.get_key_value(&d.name))
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the keys in the space's declared order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.space.dimension_names()
    }

    /// Builds a new point with `key` set to `value`.
    ///
    /// The new data goes through validation again; `self` is untouched.
    pub fn with(&self, key: &str, value: Value) -> SchemaResult<Point> {
        let mut data = self.data.clone();
        data.insert(key.to_string(), value);
        Point::new(Arc::clone(&self.space), Value::Object(data))
    }
}

/// Points are equal when they share a space and hold equal data.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        same_space(&self.space, &other.space) && self.data == other.data
    }
}

/// Serializes the data only, in declared order.
impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OrderedRecord {
            space: &self.space,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = render::pretty(&self.space, &self.data).map_err(|_| fmt::Error)?;
        writeln!(f, "Frozen point in space {} has data", self.space.display_name())?;
        writeln!(f, "{}", body)
    }
}
