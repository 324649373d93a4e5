//! Host document elements and traits

use crate::types::ElementId;
use serde::Deserialize;
use std::fmt;

pub mod family_instance;
pub mod parameter;
pub mod wall;

pub use family_instance::{
    FamilyInstance, InstanceFlags, StructuralType, DEFAULT_WINDOW_SILL_HEIGHT,
};
pub use parameter::{BuiltInParameter, ParameterValue, Parameters, StorageType};
pub use wall::{Wall, DEFAULT_UNCONNECTED_HEIGHT};

/// Element category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Wall,
    Door,
    Window,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Wall => "Walls",
            Category::Door => "Doors",
            Category::Window => "Windows",
        };
        f.write_str(name)
    }
}

/// Base trait for all document elements
pub trait Element {
    /// Common element data
    fn common(&self) -> &ElementCommon;

    /// Mutable common element data
    fn common_mut(&mut self) -> &mut ElementCommon;

    /// Element category
    fn category(&self) -> Category;

    /// Get the element id
    fn id(&self) -> ElementId {
        self.common().id
    }

    /// Set the element id
    fn set_id(&mut self, id: ElementId) {
        self.common_mut().id = id;
    }

    /// Level the element is associated with
    fn level_id(&self) -> ElementId {
        self.common().level_id
    }
}

/// Common data shared by all elements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementCommon {
    /// Element id
    pub id: ElementId,
    /// Associated level
    pub level_id: ElementId,
    /// Exposed built-in parameters
    pub parameters: Parameters,
}

impl ElementCommon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a specific level
    pub fn on_level(level_id: ElementId) -> Self {
        ElementCommon {
            level_id,
            ..Self::new()
        }
    }
}

/// Enumeration of all element kinds for type-safe storage
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Wall(Wall),
    FamilyInstance(FamilyInstance),
}

impl ElementType {
    /// Get a reference to the element trait object
    pub fn as_element(&self) -> &dyn Element {
        match self {
            ElementType::Wall(e) => e,
            ElementType::FamilyInstance(e) => e,
        }
    }

    /// Get a mutable reference to the element trait object
    pub fn as_element_mut(&mut self) -> &mut dyn Element {
        match self {
            ElementType::Wall(e) => e,
            ElementType::FamilyInstance(e) => e,
        }
    }

    pub fn as_wall(&self) -> Option<&Wall> {
        match self {
            ElementType::Wall(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_family_instance(&self) -> Option<&FamilyInstance> {
        match self {
            ElementType::FamilyInstance(fi) => Some(fi),
            _ => None,
        }
    }
}
