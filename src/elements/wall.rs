//! Wall element

use super::{BuiltInParameter, Category, Element, ElementCommon, ParameterValue};
use crate::geometry::Line;
use crate::types::{ElementId, Length, Point3};

/// Height of a wall whose top is not constrained to a level (10 ft)
pub const DEFAULT_UNCONNECTED_HEIGHT: Length = Length::from_internal(10.0);

/// A straight wall located by its centerline
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    /// Common element data
    pub common: ElementCommon,
    /// Centerline
    pub location: Line,
    /// Structural wall flag
    pub structural: bool,
}

impl Wall {
    /// Create a wall along `location`, based on `base_level`, with an
    /// unconnected top
    pub fn new(location: Line, base_level: ElementId, structural: bool) -> Self {
        let mut common = ElementCommon::on_level(base_level);
        common.parameters.declare(
            BuiltInParameter::WallBaseConstraint,
            ParameterValue::ElementId(base_level),
        );
        common.parameters.declare(
            BuiltInParameter::WallHeightType,
            ParameterValue::ElementId(ElementId::INVALID),
        );
        common.parameters.declare(
            BuiltInParameter::WallUnconnectedHeight,
            ParameterValue::Double(DEFAULT_UNCONNECTED_HEIGHT.value()),
        );
        Wall {
            common,
            location,
            structural,
        }
    }

    /// Level the wall is based on
    pub fn base_level(&self) -> ElementId {
        self.common
            .parameters
            .get(BuiltInParameter::WallBaseConstraint)
            .and_then(|v| v.as_element_id())
            .unwrap_or(self.common.level_id)
    }

    /// Level the wall top is constrained to, if any
    pub fn top_constraint(&self) -> Option<ElementId> {
        self.common
            .parameters
            .get(BuiltInParameter::WallHeightType)
            .and_then(|v| v.as_element_id())
            .filter(|id| id.is_valid())
    }

    /// Height used when the top is unconnected
    pub fn unconnected_height(&self) -> Length {
        let value = self
            .common
            .parameters
            .get(BuiltInParameter::WallUnconnectedHeight)
            .and_then(|v| v.as_double())
            .unwrap_or(DEFAULT_UNCONNECTED_HEIGHT.value());
        Length::from_internal(value)
    }

    /// Exterior face normal, assuming the wall belongs to a counter-clockwise loop
    pub fn orientation(&self) -> Point3 {
        self.location.direction().cross(&Point3::UNIT_Z)
    }
}

impl Element for Wall {
    fn common(&self) -> &ElementCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ElementCommon {
        &mut self.common
    }

    fn category(&self) -> Category {
        Category::Wall
    }
}
