//! Core value types shared across the crate

pub mod element_id;
pub mod length;
pub mod point;

pub use element_id::ElementId;
pub use length::Length;
pub use point::{Point3, POINT_TOLERANCE};
