//! Trajectories: the recorded evolution of a run
//!
//! A trajectory starts empty and only ever grows. States are
//! {empty, non-empty}; append is the only transition and there is no way
//! back to empty.
//!
//! A trajectory has a single writer: `append` takes `&mut self`. Share one
//! between threads behind a `Mutex`.

mod errors;
mod trajectory;

pub use errors::{TrajectoryError, TrajectoryResult};
pub use trajectory::Trajectory;
