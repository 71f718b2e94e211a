//! # Trajectory Errors

use thiserror::Error;

/// Result type for trajectory operations
pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

/// Trajectory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    #[error("point of space {actual} cannot join a trajectory of space {expected}")]
    SpaceMismatch { expected: String, actual: String },
}

impl TrajectoryError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TrajectoryError::SpaceMismatch { .. } => "CADCAD_SPACE_MISMATCH",
        }
    }
}
