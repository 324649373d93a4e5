//! Planar geometry used to lay out the envelope

pub mod footprint;
pub mod line;

pub use footprint::{EdgeSide, Footprint, FOOTPRINT_EDGES, FOOTPRINT_POINTS};
pub use line::Line;
