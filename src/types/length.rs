//! Length value in internal units

use std::fmt;

/// A scalar length in internal units (decimal feet)
///
/// Produced by [`crate::units::to_internal`]; the raw constructor exists for
/// values already expressed in internal units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Length(f64);

impl Length {
    /// Zero length
    pub const ZERO: Length = Length(0.0);

    /// Wrap a value that is already in internal units
    #[inline]
    pub const fn from_internal(value: f64) -> Self {
        Length(value)
    }

    /// Raw value in internal units
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Half of this length
    pub fn half(&self) -> Length {
        Length(self.0 / 2.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ft", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half() {
        assert_eq!(Length::from_internal(10.0).half(), Length::from_internal(5.0));
    }
}
