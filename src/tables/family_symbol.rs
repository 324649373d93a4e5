//! Family symbol (loadable type) table entry

use super::TableEntry;
use crate::elements::Category;
use crate::types::ElementId;

/// A named type of a loaded family, e.g. one size of a door family
///
/// Inactive symbols cannot be instantiated.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilySymbol {
    /// Element id
    pub id: ElementId,
    /// Category of the family
    pub category: Category,
    /// Name of the family this type belongs to
    pub family_name: String,
    /// Type name
    pub name: String,
    /// Whether the symbol is ready to be placed
    pub active: bool,
}

impl FamilySymbol {
    /// Create an inactive symbol; the id is assigned by the document
    pub fn new(
        category: Category,
        family_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        FamilySymbol {
            id: ElementId::INVALID,
            category,
            family_name: family_name.into(),
            name: name.into(),
            active: false,
        }
    }

    /// Check if the symbol can be instantiated
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the symbol as instantiable
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Check whether this symbol is `family_name` / `type_name`
    pub fn matches(&self, family_name: &str, type_name: &str) -> bool {
        self.name == type_name && self.family_name == family_name
    }
}

impl TableEntry for FamilySymbol {
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
