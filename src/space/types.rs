//! Space and value kind definitions
//!
//! Supported kinds:
//! - int: 64-bit integer
//! - float: 64-bit floating point
//! - str: UTF-8 text
//! - bool: Boolean
//! - list: homogeneous list with an element kind
//! - space: nested record checked against its own space

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::errors::{SpaceError, SpaceResult};

/// Name used for spaces built without one
pub const ANONYMOUS: &str = "anonymous";

/// Closed set of kinds a dimension can declare
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ValueKind {
    /// 64-bit integer
    Int,
    /// 64-bit floating point
    Float,
    /// UTF-8 text
    #[serde(rename = "str")]
    Text,
    /// Boolean
    Bool,
    /// Homogeneous list
    List {
        /// Kind of every element
        element: Box<ValueKind>,
    },
    /// Nested record with its own space
    #[serde(rename = "space")]
    Nested {
        /// Space the nested record must conform to
        space: Arc<Space>,
    },
}

impl ValueKind {
    /// Shorthand for a list kind
    pub fn list(element: ValueKind) -> Self {
        ValueKind::List {
            element: Box::new(element),
        }
    }

    /// Shorthand for a nested space kind
    pub fn nested(space: impl Into<Arc<Space>>) -> Self {
        ValueKind::Nested {
            space: space.into(),
        }
    }

    /// Returns the type name used in schemas and error messages.
    ///
    /// Nested spaces are named by their space name.
    pub fn type_name(&self) -> String {
        match self {
            ValueKind::Int => "int".into(),
            ValueKind::Float => "float".into(),
            ValueKind::Text => "str".into(),
            ValueKind::Bool => "bool".into(),
            ValueKind::List { element } => format!("list[{}]", element.type_name()),
            ValueKind::Nested { space } => space.display_name().to_string(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Parses primitive type names and `list[...]` of them.
///
/// Nested spaces have no textual name and must be built with [`ValueKind::nested`].
impl FromStr for ValueKind {
    type Err = SpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "int" => Ok(ValueKind::Int),
            "float" => Ok(ValueKind::Float),
            "str" => Ok(ValueKind::Text),
            "bool" => Ok(ValueKind::Bool),
            _ => match trimmed
                .strip_prefix("list[")
                .and_then(|rest| rest.strip_suffix(']'))
            {
                Some(inner) => Ok(ValueKind::list(inner.parse()?)),
                None => Err(SpaceError::ill_formed(s, "not a supported type name")),
            },
        }
    }
}

/// One named, typed entry of a space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    /// Field identifier
    pub name: String,
    /// Declared kind
    #[serde(flatten)]
    pub kind: ValueKind,
    /// Human-readable meaning, not part of space identity
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self::described(name, kind, String::new())
    }

    /// A dimension with a description, e.g. `("age", Int, "My age in years")`.
    pub fn described(
        name: impl Into<String>,
        kind: ValueKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
        }
    }

    /// Same identifier and kind; descriptions are ignored.
    fn same_shape(&self, other: &Dimension) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl<K: Into<String>> From<(K, ValueKind)> for Dimension {
    fn from((name, kind): (K, ValueKind)) -> Self {
        Dimension::new(name, kind)
    }
}

/// A typed schema: an optional name and an ordered list of dimensions.
///
/// Identifiers are unique. A space never changes after construction;
/// share it through `Arc<Space>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SpaceDef")]
pub struct Space {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    dimensions: Vec<Dimension>,
}

#[derive(Deserialize)]
struct SpaceDef {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    dimensions: Vec<Dimension>,
}

impl TryFrom<SpaceDef> for Space {
    type Error = SpaceError;

    fn try_from(def: SpaceDef) -> Result<Self, Self::Error> {
        Space::build(def.name, def.dimensions)
    }
}

impl Space {
    /// Creates an anonymous space from (identifier, kind) pairs or
    /// [`Dimension`]s.
    pub fn new<I, D>(fields: I) -> SpaceResult<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<Dimension>,
    {
        Self::build(None, collect_dimensions(fields))
    }

    /// Creates a named space from (identifier, kind) pairs or [`Dimension`]s.
    ///
    /// # Errors
    ///
    /// `DuplicateDimension` if an identifier repeats, `IllFormed` if one is empty.
    pub fn named<I, D>(name: impl Into<String>, fields: I) -> SpaceResult<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<Dimension>,
    {
        Self::build(Some(name.into()), collect_dimensions(fields))
    }

    /// Reads a space from its JSON description:
    ///
    /// ```json
    /// {"name": "MySpace", "dimensions": [{"name": "age", "type": "int"}]}
    /// ```
    ///
    /// Unknown type tags and malformed entries are `IllFormed`.
    pub fn from_json(description: &str) -> SpaceResult<Self> {
        serde_json::from_str(description)
            .map_err(|e| SpaceError::ill_formed("<description>", e.to_string()))
    }

    pub(crate) fn build(name: Option<String>, dimensions: Vec<Dimension>) -> SpaceResult<Self> {
        let mut seen = HashSet::with_capacity(dimensions.len());
        for dim in &dimensions {
            if dim.name.is_empty() {
                return Err(SpaceError::ill_formed("", "dimension identifiers must not be empty"));
            }
            if !seen.insert(dim.name.as_str()) {
                return Err(SpaceError::DuplicateDimension(dim.name.clone()));
            }
        }
        Ok(Self { name, dimensions })
    }

    /// Assembles a space whose identifiers are unique by construction.
    pub(crate) fn from_parts(name: Option<String>, dimensions: Vec<Dimension>) -> Self {
        debug_assert!(Self::build(name.clone(), dimensions.clone()).is_ok());
        Self { name, dimensions }
    }

    /// Returns the declared name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the name, or `"anonymous"` for unnamed spaces
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }

    /// Returns the dimensions in declared order
    #[inline]
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Returns the identifiers in declared order
    pub fn dimension_names(&self) -> impl Iterator<Item = &str> {
        self.dimensions.iter().map(|d| d.name.as_str())
    }

    /// Returns the description of `key`, empty if none was given
    pub fn description_of(&self, key: &str) -> Option<&str> {
        self.dimensions
            .iter()
            .find(|d| d.name == key)
            .map(|d| d.description.as_str())
    }

    /// Returns the declared kind of `key`
    pub fn kind_of(&self, key: &str) -> Option<&ValueKind> {
        self.dimensions
            .iter()
            .find(|d| d.name == key)
            .map(|d| &d.kind)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.kind_of(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// True for a space with no dimensions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// `"name -> kind"` entries in declared order, for error messages.
    pub fn expected_schema(&self) -> Vec<String> {
        self.dimensions
            .iter()
            .map(|d| format!("{} -> {}", d.name, d.kind))
            .collect()
    }

    /// Returns the schema as JSON, expanding nested spaces recursively.
    ///
    /// Primitive dimensions map to their type name.
    pub fn unroll_schema(&self) -> Value {
        let mut schema = Map::new();
        for dim in &self.dimensions {
            let entry = match &dim.kind {
                ValueKind::Nested { space } => space.unroll_schema(),
                kind => Value::String(kind.type_name()),
            };
            schema.insert(dim.name.clone(), entry);
        }
        Value::Object(schema)
    }

    /// True if both spaces declare the same kinds in the same order.
    ///
    /// Identifiers and space names are ignored.
    pub fn is_equivalent(&self, other: &Space) -> bool {
        self.dimensions.len() == other.dimensions.len()
            && self
                .dimensions
                .iter()
                .zip(&other.dimensions)
                .all(|(a, b)| a.kind == b.kind)
    }
}

/// Two spaces are equal when their names match and they declare the same
/// dimensions in the same order. Descriptions are ignored.
impl PartialEq for Space {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.dimensions.len() == other.dimensions.len()
            && self
                .dimensions
                .iter()
                .zip(&other.dimensions)
                .all(|(a, b)| a.same_shape(b))
    }
}

impl Eq for Space {}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty space {}", self.display_name());
        }
        write!(f, "Space {} has dimensions {{", self.display_name())?;
        for (i, dim) in self.dimensions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", dim.name, dim.kind)?;
        }
        write!(f, "}}")
    }
}

/// Identity check used by points and trajectories: the same handle, or an
/// equal space.
pub fn same_space(a: &Arc<Space>, b: &Arc<Space>) -> bool {
    Arc::ptr_eq(a, b) || a == b
}

fn collect_dimensions<I, D>(fields: I) -> Vec<Dimension>
where
    I: IntoIterator<Item = D>,
    D: Into<Dimension>,
{
    fields.into_iter().map(Into::into).collect()
}
