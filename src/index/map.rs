//! Index implementation
//!
//! HashMap-based key → offset map.

use std::collections::HashMap;

/// In-memory index mapping each live key to the byte offset of its record
#[derive(Debug, Default)]
pub struct Index {
    entries: HashMap<String, u64>,
}

impl Index {
    /// Create a new empty Index
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Get the offset for a key, or `None` if absent
    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries.get(key).copied()
    }

    /// Map a key to an offset, overwriting any existing mapping
    pub fn put(&mut self, key: String, offset: u64) {
        self.entries.insert(key, offset);
    }

    /// Remove a key's mapping
    ///
    /// Returns `true` if the key was present. No-op otherwise.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all mappings
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
