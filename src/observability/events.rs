//! Observable events for cadcad spaces
//!
//! Every log line emitted by this crate names one of these events.
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Spaces
    /// A named space was added to a registry
    SpaceRegistered,
    /// A dimension rename referenced a missing or taken identifier
    DimensionRenameFailed,

    // Points
    /// Data was rejected by the validator
    PointRejected,

    // Trajectories
    /// An empty trajectory was created for a space
    TrajectoryStarted,
    /// A point was appended to a trajectory
    TrajectoryAppended,
    /// A point from a foreign space was refused
    TrajectoryRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SpaceRegistered => "SPACE_REGISTERED",
            Event::DimensionRenameFailed => "DIMENSION_RENAME_FAILED",
            Event::PointRejected => "POINT_REJECTED",
            Event::TrajectoryStarted => "TRAJECTORY_STARTED",
            Event::TrajectoryAppended => "TRAJECTORY_APPENDED",
            Event::TrajectoryRejected => "TRAJECTORY_REJECTED",
        }
    }

    /// Severity this event is logged at.
    ///
    /// Per-step events are TRACE so a long run stays quiet at the default level.
    pub fn severity(&self) -> Severity {
        match self {
            Event::SpaceRegistered => Severity::Info,
            Event::TrajectoryStarted | Event::TrajectoryAppended => Severity::Trace,
            Event::PointRejected | Event::TrajectoryRejected => Severity::Warn,
            Event::DimensionRenameFailed => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
