//! # Point Errors

use thiserror::Error;

/// Result type for point lookups
pub type PointResult<T> = Result<T, PointError>;

/// Point errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointError {
    #[error("key '{key}' not found in point of space {space}")]
    KeyNotFound { key: String, space: String },
}

impl PointError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            PointError::KeyNotFound { .. } => "CADCAD_KEY_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_display() {
        let err = PointError::KeyNotFound {
            key: "ag".into(),
            space: "MySpace".into(),
        };
        assert_eq!(err.code(), "CADCAD_KEY_NOT_FOUND");
        assert_eq!(format!("{}", err), "key 'ag' not found in point of space MySpace");
    }
}
