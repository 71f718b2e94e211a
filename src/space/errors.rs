//! Space construction errors
//!
//! Error codes:
//! - CADCAD_DUPLICATE_DIMENSION
//! - CADCAD_ILL_FORMED_SPACE
//! - CADCAD_DIMENSION_EXISTS
//! - CADCAD_UNKNOWN_DIMENSION
//! - CADCAD_NO_COMMON_DIMENSIONS
//! - CADCAD_SPACE_ALREADY_REGISTERED
//! - CADCAD_UNNAMED_SPACE

use thiserror::Error;

/// Result type for space operations
pub type SpaceResult<T> = Result<T, SpaceError>;

/// Errors raised while building or deriving a space
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpaceError {
    #[error("dimension '{0}' is declared more than once")]
    DuplicateDimension(String),

    #[error("ill-formed schema entry '{entry}': {reason}")]
    IllFormed { entry: String, reason: String },

    #[error("dimension '{dimension}' already exists in space {space}")]
    DimensionExists { dimension: String, space: String },

    #[error("dimension '{dimension}' not found in space {space}")]
    UnknownDimension { dimension: String, space: String },

    #[error("space {space} does not contain any of the requested dimensions")]
    NoCommonDimensions { space: String },

    #[error("space {0} is already registered")]
    AlreadyRegistered(String),

    #[error("only named spaces can be registered")]
    Unnamed,
}

impl SpaceError {
    pub(crate) fn ill_formed(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        SpaceError::IllFormed {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SpaceError::DuplicateDimension(_) => "CADCAD_DUPLICATE_DIMENSION",
            SpaceError::IllFormed { .. } => "CADCAD_ILL_FORMED_SPACE",
            SpaceError::DimensionExists { .. } => "CADCAD_DIMENSION_EXISTS",
            SpaceError::UnknownDimension { .. } => "CADCAD_UNKNOWN_DIMENSION",
            SpaceError::NoCommonDimensions { .. } => "CADCAD_NO_COMMON_DIMENSIONS",
            SpaceError::AlreadyRegistered(_) => "CADCAD_SPACE_ALREADY_REGISTERED",
            SpaceError::Unnamed => "CADCAD_UNNAMED_SPACE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SpaceError::DuplicateDimension("age".into()).code(),
            "CADCAD_DUPLICATE_DIMENSION"
        );
        assert_eq!(SpaceError::Unnamed.code(), "CADCAD_UNNAMED_SPACE");
    }

    #[test]
    fn test_display_names_dimension_and_space() {
        let err = SpaceError::UnknownDimension {
            dimension: "pred".into(),
            space: "Prey".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("pred"));
        assert!(display.contains("Prey"));
    }
}
