//! Schema mismatch errors
//!
//! Error code: CADCAD_SCHEMA_MISMATCH
//!
//! A `SchemaError` always carries at least one violation. Each violation
//! names the offending key path; type mismatches also name the expected
//! and actual kinds.

use std::fmt;

/// One way a data mapping disagrees with its space
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A declared key is absent
    MissingKey { path: String },
    /// A key is present but not declared
    ExtraKey { path: String },
    /// A value's kind differs from the declared kind
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },
}

impl Violation {
    pub fn missing_key(path: impl Into<String>) -> Self {
        Violation::MissingKey { path: path.into() }
    }

    pub fn extra_key(path: impl Into<String>) -> Self {
        Violation::ExtraKey { path: path.into() }
    }

    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Violation::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Key path of the offending field (e.g. `home.city`, `tags[1]`)
    pub fn path(&self) -> &str {
        match self {
            Violation::MissingKey { path }
            | Violation::ExtraKey { path }
            | Violation::TypeMismatch { path, .. } => path,
        }
    }

    /// True for missing and extra keys
    pub fn is_key_mismatch(&self) -> bool {
        matches!(self, Violation::MissingKey { .. } | Violation::ExtraKey { .. })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingKey { path } => write!(f, "missing key '{}'", path),
            Violation::ExtraKey { path } => write!(f, "undeclared key '{}'", path),
            Violation::TypeMismatch {
                path,
                expected,
                actual,
            } => write!(f, "field '{}': expected {}, got {}", path, expected, actual),
        }
    }
}

/// Data rejected by a space's schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    /// Display name of the space
    space: String,
    /// `"name -> kind"` entries in declared order
    expected: Vec<String>,
    /// Never empty
    violations: Vec<Violation>,
}

impl SchemaError {
    pub(crate) fn new(
        space: impl Into<String>,
        expected: Vec<String>,
        violations: Vec<Violation>,
    ) -> Self {
        debug_assert!(!violations.is_empty());
        Self {
            space: space.into(),
            expected,
            violations,
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        "CADCAD_SCHEMA_MISMATCH"
    }

    /// Returns the name of the space the data was checked against
    pub fn space_name(&self) -> &str {
        &self.space
    }

    /// Returns the expected schema as `"name -> kind"` entries
    pub fn expected_schema(&self) -> &[String] {
        &self.expected
    }

    /// Returns every violation found
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the paths of missing keys
    pub fn missing_keys(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().filter_map(|v| match v {
            Violation::MissingKey { path } => Some(path.as_str()),
            _ => None,
        })
    }

    /// Returns the paths of undeclared keys
    pub fn extra_keys(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().filter_map(|v| match v {
            Violation::ExtraKey { path } => Some(path.as_str()),
            _ => None,
        })
    }

    /// Returns the type mismatches
    pub fn type_mismatches(&self) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(|v| matches!(v, Violation::TypeMismatch { .. }))
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] data does not match space {}: expected [{}]",
            self.code(),
            self.space,
            self.expected.join(", ")
        )?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Result type for validation
pub type SchemaResult<T> = Result<T, SchemaError>;
