//! Family instance element (doors, windows)

use super::{BuiltInParameter, Category, Element, ElementCommon, ParameterValue};
use crate::types::{ElementId, Length, Point3};
use bitflags::bitflags;

/// Sill height a freshly placed window starts with (3 ft)
pub const DEFAULT_WINDOW_SILL_HEIGHT: Length = Length::from_internal(3.0);

bitflags! {
    /// Orientation flags of a placed instance.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InstanceFlags: u8 {
        /// Facing direction has been flipped.
        const FACING_FLIPPED = 0x1;
    }
}

/// Structural role of a placed instance; doors and windows carry no load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructuralType {
    #[default]
    NonStructural,
}

/// An instance of a family symbol placed in the document
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyInstance {
    /// Common element data
    pub common: ElementCommon,
    /// Category copied from the symbol
    pub category: Category,
    /// Symbol this instance was created from
    pub symbol_id: ElementId,
    /// Hosting element (wall), invalid when unhosted
    pub host_id: ElementId,
    /// Insertion point
    pub location: Point3,
    /// Structural role
    pub structural_type: StructuralType,
    /// Orientation flags
    pub flags: InstanceFlags,
    /// Direction the instance faces
    pub facing: Point3,
}

impl FamilyInstance {
    /// Create an instance of `symbol_id` at `location`, hosted by `host_id`
    /// on `level_id`, facing `facing`
    pub fn new(
        category: Category,
        symbol_id: ElementId,
        host_id: ElementId,
        level_id: ElementId,
        location: Point3,
        facing: Point3,
    ) -> Self {
        let mut common = ElementCommon::on_level(level_id);
        let sill = match category {
            Category::Window => DEFAULT_WINDOW_SILL_HEIGHT,
            _ => Length::ZERO,
        };
        common.parameters.declare(
            BuiltInParameter::InstanceSillHeight,
            ParameterValue::Double(sill.value()),
        );
        FamilyInstance {
            common,
            category,
            symbol_id,
            host_id,
            location,
            structural_type: StructuralType::NonStructural,
            flags: InstanceFlags::empty(),
            facing,
        }
    }

    /// Reverse the facing direction
    pub fn flip_facing(&mut self) {
        self.flags.toggle(InstanceFlags::FACING_FLIPPED);
        self.facing = -self.facing;
    }

    pub fn facing_flipped(&self) -> bool {
        self.flags.contains(InstanceFlags::FACING_FLIPPED)
    }

    /// Current sill height
    pub fn sill_height(&self) -> Length {
        let value = self
            .common
            .parameters
            .get(BuiltInParameter::InstanceSillHeight)
            .and_then(|v| v.as_double())
            .unwrap_or(0.0);
        Length::from_internal(value)
    }
}

impl Element for FamilyInstance {
    fn common(&self) -> &ElementCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ElementCommon {
        &mut self.common
    }

    fn category(&self) -> Category {
        self.category
    }
}
