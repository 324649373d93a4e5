//! Door and window placement

use crate::catalog;
use crate::elements::{BuiltInParameter, Category, ParameterValue, StructuralType};
use crate::error::{ModelError, Result};
use crate::geometry::Line;
use crate::host::HostDocument;
use crate::tables::{FamilySymbol, Level};
use crate::types::{ElementId, Length, Point3};
use serde::Deserialize;
use std::fmt;

/// Kind of opening placed in a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

impl OpeningKind {
    /// Catalog category holding types of this kind
    pub fn category(&self) -> Category {
        match self {
            OpeningKind::Door => Category::Door,
            OpeningKind::Window => Category::Window,
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpeningKind::Door => f.write_str("door"),
            OpeningKind::Window => f.write_str("window"),
        }
    }
}

/// Insertion point of an opening: the midpoint of the wall centerline
pub fn insertion_point(centerline: &Line) -> Point3 {
    centerline.midpoint()
}

/// Place an opening of `symbol` at the middle of `wall`, on `level`
///
/// Windows are flipped once so they face the exterior, and get
/// `sill_height`. Doors are left as placed.
pub fn place_opening<D: HostDocument + ?Sized>(
    doc: &mut D,
    wall: ElementId,
    symbol: &FamilySymbol,
    level: &Level,
    kind: OpeningKind,
    sill_height: Length,
) -> Result<ElementId> {
    let centerline = doc
        .element(wall)
        .ok_or(ModelError::ElementNotFound(wall))?
        .as_wall()
        .map(|w| w.location)
        .ok_or_else(|| ModelError::HostMutation(format!("element {wall} is not a wall")))?;
    let point = insertion_point(&centerline);

    catalog::ensure_active(doc, symbol)?;

    let instance = doc.create_family_instance(
        point,
        symbol.id,
        wall,
        level.id,
        StructuralType::NonStructural,
    )?;

    if kind == OpeningKind::Window {
        doc.flip_facing(instance)?;
        doc.set_parameter(
            instance,
            BuiltInParameter::InstanceSillHeight,
            ParameterValue::Double(sill_height.value()),
        )?;
    }

    tracing::debug!(
        target: "bim_envelope::openings",
        instance = %instance,
        wall = %wall,
        kind = %kind,
        at = %point,
        "opening placed"
    );
    Ok(instance)
}
