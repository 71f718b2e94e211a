//! cadcad-spaces - typed spaces, frozen points and trajectories
//!
//! The validation core of a state-space simulation language:
//!
//! - [`Space`]: a typed schema of named dimensions
//! - [`Validator`]: checks data against a space
//! - [`Point`]: an immutable record that passed validation
//! - [`Trajectory`]: the append-only history of one run
//!
//! ```
//! use std::sync::Arc;
//! use cadcad_spaces::{Point, Space, Trajectory, ValueKind};
//! use serde_json::json;
//!
//! let space = Arc::new(Space::named("MySpace", [("age", ValueKind::Int)]).unwrap());
//! let point = Point::new(Arc::clone(&space), json!({"age": 29})).unwrap();
//! assert_eq!(
//!     point.to_string(),
//!     "Frozen point in space MySpace has data\n{\n    \"age\": 29\n}\n"
//! );
//!
//! let mut trajectory = Trajectory::new(space);
//! trajectory.append(point).unwrap();
//! assert_eq!(trajectory.len(), 1);
//! ```

pub mod error;
pub mod observability;
pub mod point;
pub mod space;
pub mod trajectory;
pub mod validator;

pub use error::{Error, Result};
pub use point::{Point, PointError};
pub use space::{builtins, Dimension, Space, SpaceError, SpaceRegistry, ValueKind};
pub use trajectory::{Trajectory, TrajectoryError};
pub use validator::{SchemaError, ValidationMode, Validator, ValidatorConfig, Violation};
