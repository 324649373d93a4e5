//! Envelope construction steps: wall loop, then openings

pub mod openings;
pub mod walls;

pub use openings::{insertion_point, place_opening, OpeningKind};
pub use walls::{build_walls, WallLoop};
