//! Common spaces reusable by any simulation

use super::types::{Dimension, Space, ValueKind};

/// A space with no dimensions.
///
/// Identity element of [`Space::cartesian`] and [`Space::merge`].
pub fn empty() -> Space {
    Space::from_parts(Some("EmptySpace".into()), Vec::new())
}

/// The one dimensional space of real numbers
pub fn real() -> Space {
    one_dimensional("Real", "real", ValueKind::Float)
}

/// The one dimensional space of integers
pub fn integer() -> Space {
    one_dimensional("Integer", "integer", ValueKind::Int)
}

/// The one dimensional space of bits
pub fn bit() -> Space {
    one_dimensional("Bit", "bit", ValueKind::Bool)
}

fn one_dimensional(name: &str, dimension: &str, kind: ValueKind) -> Space {
    Space::from_parts(Some(name.into()), vec![Dimension::new(dimension, kind)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shapes() {
        assert!(empty().is_empty());
        assert_eq!(real().kind_of("real"), Some(&ValueKind::Float));
        assert_eq!(integer().kind_of("integer"), Some(&ValueKind::Int));
        assert_eq!(bit().kind_of("bit"), Some(&ValueKind::Bool));
    }

    #[test]
    fn test_builtin_names() {
        assert_eq!(empty().name(), Some("EmptySpace"));
        assert_eq!(real().name(), Some("Real"));
        assert_eq!(integer().name(), Some("Integer"));
        assert_eq!(bit().name(), Some("Bit"));
    }
}
