//! Spaces: typed schemas for simulation state
//!
//! A space declares which dimensions a point carries and the kind of each.
//!
//! # Design Principles
//!
//! - Identifiers are unique within a space
//! - Kinds come from a closed set, nested spaces included
//! - A space never changes after construction
//! - Points and trajectories share a space through `Arc<Space>`

mod algebra;
pub mod builtins;
mod errors;
mod registry;
mod types;

pub use errors::{SpaceError, SpaceResult};
pub use registry::SpaceRegistry;
pub use types::{same_space, Dimension, Space, ValueKind, ANONYMOUS};
