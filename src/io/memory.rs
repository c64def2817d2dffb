//! In-memory reference implementation of [`DocumentStore`].

use super::{DocumentStore, StoreError};
use crate::core::FileName;
use std::collections::HashMap;
use std::sync::RwLock;

/// A `DocumentStore` backed by an in-process map.
///
/// Interior mutability keeps the trait methods at `&self`, so the same
/// store handle can be shared by an effect environment and inspected
/// by a test afterwards.
///
/// # Example
///
/// ```rust
/// use draftstate::core::FileName;
/// use draftstate::io::{DocumentStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// let name = FileName::new("notes").unwrap();
///
/// store.save(&name, "hello").unwrap();
/// assert_eq!(store.load(&name).unwrap(), Some("hello".to_string()));
/// assert_eq!(store.list(), vec![name]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<FileName, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an entry exists under `name`.
    pub fn contains(&self, name: &FileName) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(name))
            .unwrap_or(false)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Check whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for MemoryStore {
    fn save(&self, name: &FileName, content: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        entries.insert(name.clone(), content.to_string());
        Ok(())
    }

    fn load(&self, name: &FileName) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        Ok(entries.get(name).cloned())
    }

    fn list(&self) -> Vec<FileName> {
        let mut names: Vec<FileName> = self
            .entries
            .read()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }
}
