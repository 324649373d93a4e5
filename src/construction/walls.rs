//! Wall loop construction

use crate::elements::{BuiltInParameter, ParameterValue};
use crate::error::Result;
use crate::geometry::{EdgeSide, Footprint, FOOTPRINT_EDGES};
use crate::host::HostDocument;
use crate::tables::Level;
use crate::types::ElementId;
use std::ops::Index;

/// The four walls of a footprint, in loop order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallLoop {
    walls: [ElementId; FOOTPRINT_EDGES],
}

impl WallLoop {
    /// Wall ids in loop order (front, right, back, left)
    pub fn ids(&self) -> &[ElementId] {
        &self.walls
    }
}

impl Index<EdgeSide> for WallLoop {
    type Output = ElementId;

    fn index(&self, side: EdgeSide) -> &ElementId {
        &self.walls[side.index()]
    }
}

/// Create one wall per footprint edge, based on `base` with the top
/// constrained to `top`
///
/// The top is a level reference, not a fixed height: walls follow `top` when
/// its elevation changes. Any host failure aborts the loop; the caller's
/// transaction discards walls already created.
pub fn build_walls<D: HostDocument + ?Sized>(
    doc: &mut D,
    footprint: &Footprint,
    base: &Level,
    top: &Level,
) -> Result<WallLoop> {
    let mut walls = [ElementId::INVALID; FOOTPRINT_EDGES];
    for (side, line) in footprint.edges() {
        let wall = doc.create_wall(line, base.id, false)?;
        doc.set_parameter(
            wall,
            BuiltInParameter::WallHeightType,
            ParameterValue::ElementId(top.id),
        )?;
        tracing::debug!(
            target: "bim_envelope::walls",
            wall = %wall,
            side = %side,
            start = %line.start,
            end = %line.end,
            "wall placed"
        );
        walls[side.index()] = wall;
    }
    Ok(WallLoop { walls })
}
