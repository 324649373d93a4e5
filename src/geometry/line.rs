//! Bound straight line

use crate::types::{Point3, POINT_TOLERANCE};

/// A straight line bounded by two endpoints
///
/// Used as the location curve of a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point
    pub start: Point3,
    /// End point
    pub end: Point3,
}

impl Line {
    /// Create a line between two points
    ///
    /// Coincident endpoints are allowed here; hosts decide whether a
    /// zero-length curve is acceptable.
    pub fn from_points(start: Point3, end: Point3) -> Self {
        Line { start, end }
    }

    /// Create a line from coordinates
    pub fn from_coords(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        Line::from_points(Point3::new(x1, y1, z1), Point3::new(x2, y2, z2))
    }

    /// Get the length of the line
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Get the direction vector (normalized)
    pub fn direction(&self) -> Point3 {
        (self.end - self.start).normalize()
    }

    /// Get the midpoint of the line
    pub fn midpoint(&self) -> Point3 {
        self.start.midpoint(&self.end)
    }

    /// Check whether the endpoints coincide or are not finite
    pub fn is_degenerate(&self) -> bool {
        // NaN lengths fail the comparison
        !(self.length() > POINT_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_length() {
        let line = Line::from_coords(0.0, 0.0, 0.0, 3.0, 4.0, 0.0);
        assert_eq!(line.length(), 5.0);
    }

    #[test]
    fn test_line_midpoint() {
        let line = Line::from_coords(0.0, 0.0, 0.0, 10.0, 20.0, 30.0);
        assert_eq!(line.midpoint(), Point3::new(5.0, 10.0, 15.0));
    }

    #[test]
    fn test_direction() {
        let line = Line::from_coords(0.0, 0.0, 0.0, 0.0, -8.0, 0.0);
        assert_eq!(line.direction(), Point3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_degenerate() {
        assert!(Line::from_coords(1.0, 1.0, 0.0, 1.0, 1.0, 0.0).is_degenerate());
        assert!(!Line::from_coords(0.0, 0.0, 0.0, 1.0, 0.0, 0.0).is_degenerate());
    }

    #[test]
    fn test_non_finite_is_degenerate() {
        assert!(Line::from_coords(f64::NAN, 0.0, 0.0, f64::NAN, 1.0, 0.0).is_degenerate());
        assert!(Line::from_coords(0.0, 0.0, 0.0, f64::INFINITY, 0.0, 0.0).is_degenerate());
    }
}
