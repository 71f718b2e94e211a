//! Points: frozen records in a space
//!
//! A point pairs a shared space handle with data the validator accepted.
//! There is no way to build a point that skips validation and no way to
//! change one afterwards.

mod errors;
mod point;
mod render;

pub use errors::{PointError, PointResult};
pub use point::Point;
