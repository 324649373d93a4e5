//! Level table entry

use super::TableEntry;
use crate::types::{ElementId, Length};

/// A named horizontal datum that walls anchor to
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Element id
    pub id: ElementId,
    /// Level name
    pub name: String,
    /// Elevation above the project base point
    pub elevation: Length,
}

impl Level {
    /// Create a level at the given elevation; the id is assigned by the document
    pub fn new(name: impl Into<String>, elevation: Length) -> Self {
        Level {
            id: ElementId::INVALID,
            name: name.into(),
            elevation,
        }
    }
}

impl TableEntry for Level {
    fn id(&self) -> ElementId {
        self.id
    }

    fn set_id(&mut self, id: ElementId) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }
}
