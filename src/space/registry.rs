//! In-memory registry of named spaces
//!
//! - One space per name
//! - Registrations are immutable: a name cannot be registered twice
//! - Lookups hand out shared `Arc<Space>` handles

use std::collections::BTreeMap;
use std::sync::Arc;

use super::errors::{SpaceError, SpaceResult};
use super::types::Space;
use crate::observability::{log_event_with_fields, Event};

/// Name-keyed registry of spaces.
#[derive(Debug, Default)]
pub struct SpaceRegistry {
    spaces: BTreeMap<String, Arc<Space>>,
}

impl SpaceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named space and returns its shared handle.
    ///
    /// # Errors
    ///
    /// - `Unnamed` if the space has no name
    /// - `AlreadyRegistered` if the name is taken
    pub fn register(&mut self, space: impl Into<Arc<Space>>) -> SpaceResult<Arc<Space>> {
        let space = space.into();
        let name = space.name().ok_or(SpaceError::Unnamed)?.to_string();

        if self.spaces.contains_key(&name) {
            return Err(SpaceError::AlreadyRegistered(name));
        }

        let dimensions = space.len().to_string();
        log_event_with_fields(
            Event::SpaceRegistered,
            &[("dimensions", dimensions.as_str()), ("space", name.as_str())],
        );

        self.spaces.insert(name, Arc::clone(&space));
        Ok(space)
    }

    /// Gets a space by name.
    pub fn get(&self, name: &str) -> Option<Arc<Space>> {
        self.spaces.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.spaces.contains_key(name)
    }

    /// Returns all registered spaces, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Space>> {
        self.spaces.values()
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}
