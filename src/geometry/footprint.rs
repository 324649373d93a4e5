//! Rectangular building footprint

use super::Line;
use crate::types::{Length, Point3};
use serde::Deserialize;
use std::fmt;

/// Number of points in a closed rectangular loop (first == last)
pub const FOOTPRINT_POINTS: usize = 5;

/// Number of edges (and walls) in the loop
pub const FOOTPRINT_EDGES: usize = 4;

/// Side of the rectangle an edge lies on, in loop order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    /// Edge 0, along -y
    Front,
    /// Edge 1, along +x
    Right,
    /// Edge 2, along +y
    Back,
    /// Edge 3, along -x
    Left,
}

impl EdgeSide {
    /// All sides in loop order
    pub const ALL: [EdgeSide; FOOTPRINT_EDGES] =
        [EdgeSide::Front, EdgeSide::Right, EdgeSide::Back, EdgeSide::Left];

    /// Position of the edge in the loop
    pub fn index(&self) -> usize {
        match self {
            EdgeSide::Front => 0,
            EdgeSide::Right => 1,
            EdgeSide::Back => 2,
            EdgeSide::Left => 3,
        }
    }
}

impl fmt::Display for EdgeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeSide::Front => "front",
            EdgeSide::Right => "right",
            EdgeSide::Back => "back",
            EdgeSide::Left => "left",
        };
        f.write_str(name)
    }
}

/// Closed rectangular loop centered at the origin at z = 0
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    points: [Point3; FOOTPRINT_POINTS],
}

impl Footprint {
    /// Build the loop `(-dx,-dy) → (dx,-dy) → (dx,dy) → (-dx,dy) → (-dx,-dy)`
    ///
    /// Half dimensions are not validated: zero yields a degenerate loop.
    pub fn rectangle(half_width: Length, half_depth: Length) -> Self {
        let dx = half_width.value();
        let dy = half_depth.value();
        Footprint {
            points: [
                Point3::new(-dx, -dy, 0.0),
                Point3::new(dx, -dy, 0.0),
                Point3::new(dx, dy, 0.0),
                Point3::new(-dx, dy, 0.0),
                Point3::new(-dx, -dy, 0.0),
            ],
        }
    }

    /// All loop points, closing point included
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Straight edge `i` from point `i` to point `i + 1`
    pub fn edge(&self, side: EdgeSide) -> Line {
        let i = side.index();
        Line::from_points(self.points[i], self.points[i + 1])
    }

    /// All four edges in loop order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeSide, Line)> + '_ {
        EdgeSide::ALL.iter().map(move |side| (*side, self.edge(*side)))
    }

    /// Signed area by the shoelace formula (positive for counter-clockwise)
    pub fn signed_area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].x * w[1].y - w[1].x * w[0].y)
            .sum::<f64>()
            / 2.0
    }

    /// Enclosed area
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Full length along x (`2·dx`)
    pub fn length(&self) -> f64 {
        self.points[1].x - self.points[0].x
    }

    /// Full depth along y (`2·dy`)
    pub fn depth(&self) -> f64 {
        self.points[2].y - self.points[1].y
    }

    /// Check whether the loop encloses no finite area
    pub fn is_degenerate(&self) -> bool {
        let area = self.area();
        !(area > 0.0 && area.is_finite())
    }
}
