//! Name registry for scene nodes

use std::collections::HashMap;

use super::{NodeHandle, SceneError};

/// Maps node names to the live node that owns them.
///
/// First writer wins: registering a name that is already present fails and
/// leaves the existing entry untouched.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    entries: HashMap<String, NodeHandle>,
}

impl NameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `name` for `handle`
    pub fn register(&mut self, name: &str, handle: NodeHandle) -> Result<(), SceneError> {
        if self.entries.contains_key(name) {
            return Err(SceneError::DuplicateName(name.to_string()));
        }
        self.entries.insert(name.to_string(), handle);
        Ok(())
    }

    /// Release `name` if, and only if, it is still owned by `handle`.
    ///
    /// Returns whether an entry was removed. Stale calls are no-ops.
    pub fn unregister(&mut self, name: &str, handle: NodeHandle) -> bool {
        if self.entries.get(name) == Some(&handle) {
            self.entries.remove(name);
            true
        } else {
            false
        }
    }

    /// Node currently owning `name`
    pub fn lookup(&self, name: &str) -> Option<NodeHandle> {
        self.entries.get(name).copied()
    }

    /// Whether `name` is taken
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no names are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
