//! Algebra of spaces
//!
//! Every operation builds a new space; operands are never modified.
//!
//! - `a * b`: cartesian product, each operand becomes one nested dimension
//! - `a + b`: merge, the union of both dimension lists
//! - `a.power(n)`: `n` nested copies of `a`
//! - `a.nest()`: `a` wrapped as the single dimension of a new space
//!
//! The empty space is the identity of both `*` and `+`.

use std::ops::{Add, Mul};
use std::sync::Arc;

use super::builtins;
use super::errors::{SpaceError, SpaceResult};
use super::types::{Dimension, Space, ValueKind};
use crate::observability::{log_event_with_fields, Event};

impl Space {
    /// Cartesian product: a space with the two operands as nested dimensions.
    ///
    /// Dimensions are keyed by the lowercase operand names, with `_0`/`_1`
    /// suffixes when those names collide.
    pub fn cartesian(&self, other: &Space) -> Space {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let left = self.display_name().to_lowercase();
        let right = other.display_name().to_lowercase();
        let (left, right) = if left == right {
            (format!("{}_0", left), format!("{}_1", right))
        } else {
            (left, right)
        };

        Space::from_parts(
            Some(format!("{}*{}", self.display_name(), other.display_name())),
            vec![
                Dimension::new(left, ValueKind::nested(self.clone())),
                Dimension::new(right, ValueKind::nested(other.clone())),
            ],
        )
    }

    /// Merge: dimensions of `self` followed by those of `other`.
    ///
    /// A colliding identifier `k` from `other` takes the first free name
    /// among `k_1`, `k_2`, ...
    pub fn merge(&self, other: &Space) -> Space {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let mut dimensions = self.dimensions().to_vec();
        for dim in other.dimensions() {
            let name = if is_taken(&dimensions, &dim.name) {
                fresh_name(&dimensions, &dim.name)
            } else {
                dim.name.clone()
            };
            dimensions.push(Dimension {
                name,
                ..dim.clone()
            });
        }

        Space::from_parts(
            Some(format!("{}+{}", self.display_name(), other.display_name())),
            dimensions,
        )
    }

    /// `n` nested copies of `self`, keyed `<name>_0 .. <name>_{n-1}`.
    ///
    /// `power(0)` is the empty space and `power(1)` is `self`.
    pub fn power(&self, n: usize) -> Space {
        match n {
            0 => builtins::empty(),
            1 => self.clone(),
            _ => {
                let base = self.display_name().to_lowercase();
                let shared = Arc::new(self.clone());
                let dimensions = (0..n)
                    .map(|i| {
                        Dimension::new(
                            format!("{}_{}", base, i),
                            ValueKind::Nested {
                                space: Arc::clone(&shared),
                            },
                        )
                    })
                    .collect();
                Space::from_parts(Some(format!("{}-{}", n, self.display_name())), dimensions)
            }
        }
    }

    /// Product of many spaces, named `AxBxC`, one nested dimension per operand.
    pub fn multiply(operands: &[&Space]) -> Space {
        if operands.is_empty() {
            return builtins::empty();
        }

        let name = operands
            .iter()
            .map(|s| s.display_name())
            .collect::<Vec<_>>()
            .join("x");
        let dimensions = operands
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Dimension::new(
                    format!("{}_{}", s.display_name().to_lowercase(), i),
                    ValueKind::nested((*s).clone()),
                )
            })
            .collect();

        Space::from_parts(Some(name), dimensions)
    }

    /// Wraps `self` as the single dimension of a new space.
    ///
    /// The new space is named `nested-<name>` when `rename` is set.
    pub fn nest(&self, rename: bool) -> Space {
        let name = if rename {
            Some(format!("nested-{}", self.display_name()))
        } else {
            self.name().map(str::to_string)
        };
        Space::from_parts(
            name,
            vec![Dimension::new(self.display_name(), ValueKind::nested(self.clone()))],
        )
    }

    /// Renames dimensions, keeping their declared position.
    ///
    /// Pairs are applied in order as `(old, new)`.
    ///
    /// # Errors
    ///
    /// - `DimensionExists` if `new` is already an identifier
    /// - `UnknownDimension` if `old` is not
    pub fn rename_dims(&self, renames: &[(&str, &str)]) -> SpaceResult<Space> {
        let mut dimensions = self.dimensions().to_vec();

        for &(old, new) in renames {
            if is_taken(&dimensions, new) {
                log_event_with_fields(
                    Event::DimensionRenameFailed,
                    &[("dimension", new), ("space", self.display_name())],
                );
                return Err(SpaceError::DimensionExists {
                    dimension: new.to_string(),
                    space: self.display_name().to_string(),
                });
            }

            match dimensions.iter_mut().find(|d| d.name == old) {
                Some(dim) => dim.name = new.to_string(),
                None => {
                    log_event_with_fields(
                        Event::DimensionRenameFailed,
                        &[("dimension", old), ("space", self.display_name())],
                    );
                    return Err(SpaceError::UnknownDimension {
                        dimension: old.to_string(),
                        space: self.display_name().to_string(),
                    });
                }
            }
        }

        Space::build(self.name().map(str::to_string), dimensions)
    }

    /// Keeps only the listed dimensions, in `self`'s declared order.
    ///
    /// Names not present in `self` are skipped.
    pub fn subspace(&self, names: &[&str]) -> SpaceResult<Space> {
        let dimensions: Vec<_> = self
            .dimensions()
            .iter()
            .filter(|d| names.contains(&d.name.as_str()))
            .cloned()
            .collect();

        if dimensions.is_empty() {
            return Err(SpaceError::NoCommonDimensions {
                space: self.display_name().to_string(),
            });
        }

        Ok(Space::from_parts(
            Some(format!("sub-{}", self.display_name())),
            dimensions,
        ))
    }

    /// Adds dimensions not already present.
    ///
    /// An identifier already declared with the same kind is skipped; with a
    /// different kind it is a `DuplicateDimension`.
    pub fn derive<I, K>(&self, extra: I) -> SpaceResult<Space>
    where
        I: IntoIterator<Item = (K, ValueKind)>,
        K: Into<String>,
    {
        let mut dimensions = self.dimensions().to_vec();

        for (name, kind) in extra {
            let name = name.into();
            match dimensions.iter().find(|d| d.name == name) {
                Some(existing) if existing.kind == kind => continue,
                Some(_) => return Err(SpaceError::DuplicateDimension(name)),
                None => dimensions.push(Dimension::new(name, kind)),
            }
        }

        Space::build(Some(format!("derived-{}", self.display_name())), dimensions)
    }
}

impl Mul for &Space {
    type Output = Space;

    fn mul(self, rhs: &Space) -> Space {
        self.cartesian(rhs)
    }
}

impl Add for &Space {
    type Output = Space;

    fn add(self, rhs: &Space) -> Space {
        self.merge(rhs)
    }
}

fn is_taken(dimensions: &[Dimension], name: &str) -> bool {
    dimensions.iter().any(|d| d.name == name)
}

fn fresh_name(dimensions: &[Dimension], base: &str) -> String {
    let mut n = 1;
    loop {
        let candidate = format!("{}_{}", base, n);
        if !is_taken(dimensions, &candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prey() -> Space {
        Space::named("Prey", [("count", ValueKind::Int), ("rate", ValueKind::Float)]).unwrap()
    }

    fn predator() -> Space {
        Space::named("Predator", [("count", ValueKind::Int), ("hunger", ValueKind::Float)]).unwrap()
    }

    #[test]
    fn test_cartesian_nests_operands() {
        let product = &prey() * &predator();

        assert_eq!(product.name(), Some("Prey*Predator"));
        assert_eq!(product.len(), 2);
        assert_eq!(product.kind_of("prey"), Some(&ValueKind::nested(prey())));
        assert_eq!(product.kind_of("predator"), Some(&ValueKind::nested(predator())));
    }

    #[test]
    fn test_cartesian_with_itself_suffixes_keys() {
        let square = prey().cartesian(&prey());
        let names: Vec<_> = square.dimension_names().collect();
        assert_eq!(names, vec!["prey_0", "prey_1"]);
    }

    #[test]
    fn test_empty_is_identity() {
        let empty = builtins::empty();
        assert_eq!(prey().cartesian(&empty), prey());
        assert_eq!(empty.cartesian(&prey()), prey());
        assert_eq!(prey().merge(&empty), prey());
        assert_eq!(empty.merge(&prey()), prey());
    }

    #[test]
    fn test_merge_renames_collisions() {
        let merged = &prey() + &predator();

        assert_eq!(merged.name(), Some("Prey+Predator"));
        let names: Vec<_> = merged.dimension_names().collect();
        assert_eq!(names, vec!["count", "rate", "count_1", "hunger"]);
    }

    #[test]
    fn test_merge_keeps_descriptions() {
        let a = Space::named("A", [Dimension::described("x", ValueKind::Int, "first")]).unwrap();
        let b = Space::named("B", [Dimension::described("x", ValueKind::Int, "second")]).unwrap();

        let merged = a.merge(&b);
        assert_eq!(merged.description_of("x"), Some("first"));
        assert_eq!(merged.description_of("x_1"), Some("second"));
    }

    #[test]
    fn test_merge_skips_taken_suffixes() {
        let a = Space::named("A", [("x", ValueKind::Int), ("x_1", ValueKind::Int)]).unwrap();
        let b = Space::named("B", [("x", ValueKind::Bool)]).unwrap();

        let merged = a.merge(&b);
        assert_eq!(merged.kind_of("x_2"), Some(&ValueKind::Bool));
    }

    #[test]
    fn test_power() {
        assert!(prey().power(0).is_empty());
        assert_eq!(prey().power(1), prey());

        let cubed = prey().power(3);
        assert_eq!(cubed.name(), Some("3-Prey"));
        let names: Vec<_> = cubed.dimension_names().collect();
        assert_eq!(names, vec!["prey_0", "prey_1", "prey_2"]);
    }

    #[test]
    fn test_power_shares_one_handle() {
        let squared = prey().power(2);
        let handles: Vec<_> = squared
            .dimensions()
            .iter()
            .map(|d| match &d.kind {
                ValueKind::Nested { space } => Arc::clone(space),
                other => panic!("unexpected kind {}", other),
            })
            .collect();
        assert!(Arc::ptr_eq(&handles[0], &handles[1]));
    }

    #[test]
    fn test_multiply() {
        let product = Space::multiply(&[&prey(), &predator(), &builtins::bit()]);

        assert_eq!(product.name(), Some("PreyxPredatorxBit"));
        let names: Vec<_> = product.dimension_names().collect();
        assert_eq!(names, vec!["prey_0", "predator_1", "bit_2"]);
        assert!(Space::multiply(&[]).is_empty());
    }

    #[test]
    fn test_nest() {
        let nested = prey().nest(true);
        assert_eq!(nested.name(), Some("nested-Prey"));
        assert_eq!(nested.kind_of("Prey"), Some(&ValueKind::nested(prey())));

        assert_eq!(prey().nest(false).name(), Some("Prey"));
    }

    #[test]
    fn test_rename_keeps_position() {
        let renamed = prey().rename_dims(&[("count", "population")]).unwrap();
        let names: Vec<_> = renamed.dimension_names().collect();
        assert_eq!(names, vec!["population", "rate"]);
        assert_eq!(renamed.name(), Some("Prey"));
    }

    #[test]
    fn test_rename_to_existing_fails() {
        let err = prey().rename_dims(&[("count", "rate")]).unwrap_err();
        assert_eq!(err.code(), "CADCAD_DIMENSION_EXISTS");
    }

    #[test]
    fn test_rename_unknown_fails() {
        let err = prey().rename_dims(&[("missing", "other")]).unwrap_err();
        assert_eq!(
            err,
            SpaceError::UnknownDimension {
                dimension: "missing".into(),
                space: "Prey".into()
            }
        );
    }

    #[test]
    fn test_subspace() {
        let sub = prey().subspace(&["rate", "unknown"]).unwrap();
        assert_eq!(sub.name(), Some("sub-Prey"));
        assert_eq!(sub.len(), 1);
        assert!(sub.contains("rate"));

        let err = prey().subspace(&["unknown"]).unwrap_err();
        assert_eq!(err.code(), "CADCAD_NO_COMMON_DIMENSIONS");
    }

    #[test]
    fn test_derive() {
        let derived = prey()
            .derive([("count", ValueKind::Int), ("alive", ValueKind::Bool)])
            .unwrap();
        assert_eq!(derived.name(), Some("derived-Prey"));
        let names: Vec<_> = derived.dimension_names().collect();
        assert_eq!(names, vec!["count", "rate", "alive"]);

        let err = prey().derive([("count", ValueKind::Float)]).unwrap_err();
        assert_eq!(err, SpaceError::DuplicateDimension("count".into()));
    }
}
