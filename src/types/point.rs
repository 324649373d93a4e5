//! Point type for geometric operations

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Default tolerance for point comparison, in internal units
pub const POINT_TOLERANCE: f64 = 1e-9;

/// 3D point (or displacement) in internal units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Create a new point
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// The origin
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    /// Unit Z vector
    pub const UNIT_Z: Point3 = Point3::new(0.0, 0.0, 1.0);

    /// Length of the vector from the origin to this point
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalize (unit length); zero vectors are returned unchanged
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            *self / len
        } else {
            *self
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: &Point3) -> Point3 {
        Point3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point3) -> f64 {
        (*self - *other).length()
    }

    /// Arithmetic midpoint between this point and another
    pub fn midpoint(&self, other: &Point3) -> Point3 {
        (*self + *other) / 2.0
    }

    /// Compare with another point within `tolerance`
    pub fn is_almost_equal(&self, other: &Point3, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }
}

impl Default for Point3 {
    fn default() -> Self {
        Point3::ORIGIN
    }
}

impl Add for Point3 {
    type Output = Point3;
    fn add(self, other: Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;
    fn sub(self, other: Point3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;
    fn mul(self, scalar: f64) -> Point3 {
        Point3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Point3 {
    type Output = Point3;
    fn div(self, scalar: f64) -> Point3 {
        Point3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Point3 {
    type Output = Point3;
    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_midpoint() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(100.0, 0.0, 0.0);
        assert_eq!(a.midpoint(&b), Point3::new(50.0, 0.0, 0.0));
    }

    #[test]
    fn test_point_operations() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Point3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Point3::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Point3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Point3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_point_cross() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Point3::UNIT_Z);
    }

    #[test]
    fn test_almost_equal() {
        let a = Point3::new(1.0, 1.0, 0.0);
        let b = Point3::new(1.0 + 1e-12, 1.0, 0.0);
        assert!(a.is_almost_equal(&b, POINT_TOLERANCE));
        assert!(!a.is_almost_equal(&Point3::ORIGIN, POINT_TOLERANCE));
    }
}
