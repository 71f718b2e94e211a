//! Crate-level error

use thiserror::Error;

use crate::point::PointError;
use crate::space::SpaceError;
use crate::trajectory::TrajectoryError;
use crate::validator::SchemaError;

/// Result type for callers mixing spaces, points and trajectories
pub type Result<T> = std::result::Result<T, Error>;

/// Any error this crate returns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Space(#[from] SpaceError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Point(#[from] PointError),

    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
}

impl Error {
    /// Stable error code of the underlying error
    pub fn code(&self) -> &'static str {
        match self {
            Error::Space(e) => e.code(),
            Error::Schema(e) => e.code(),
            Error::Point(e) => e.code(),
            Error::Trajectory(e) => e.code(),
        }
    }
}
