//! Ordered tables of named document entries (levels, family symbols)

use crate::error::{ModelError, Result};
use crate::types::ElementId;
use indexmap::IndexMap;

pub mod family_symbol;
pub mod level;

pub use family_symbol::FamilySymbol;
pub use level::Level;

/// Base trait for all table entries
pub trait TableEntry {
    /// Get the entry's element id
    fn id(&self) -> ElementId;

    /// Set the entry's element id
    fn set_id(&mut self, id: ElementId);

    /// Get the entry's name
    fn name(&self) -> &str;
}

/// Table of entries keyed by element id, kept in insertion order
///
/// Names are not keys: several entries may share a name, and name lookup is
/// exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<ElementId, T>,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
        }
    }

    /// Add an entry; its id must be valid and unused
    pub fn add(&mut self, entry: T) -> Result<()> {
        let id = entry.id();
        if id.is_invalid() {
            return Err(ModelError::Custom(format!(
                "Entry '{}' has no element id",
                entry.name()
            )));
        }
        if self.entries.contains_key(&id) {
            return Err(ModelError::Custom(format!(
                "Element id {} already exists in table",
                id
            )));
        }
        self.entries.insert(id, entry);
        Ok(())
    }

    /// Get an entry by id
    pub fn get(&self, id: ElementId) -> Option<&T> {
        self.entries.get(&id)
    }

    /// Get a mutable entry by id
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut T> {
        self.entries.get_mut(&id)
    }

    /// First entry whose name equals `name` exactly
    pub fn find_by_name(&self, name: &str) -> Option<&T> {
        self.entries.values().find(|e| e.name() == name)
    }

    /// Check if an entry exists
    pub fn contains(&self, id: ElementId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
