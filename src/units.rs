//! Conversion between display units and internal length units
//!
//! Internal lengths are decimal feet. Only length units convert; asking for a
//! conversion from an angle or area unit is an [`ModelError::UnsupportedUnit`].

use crate::error::{ModelError, Result};
use crate::types::Length;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Millimeters per internal unit (one foot)
pub const MILLIMETERS_PER_FOOT: f64 = 304.8;

/// Display units known to the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Unit {
    Millimeters,
    Centimeters,
    Meters,
    Inches,
    Feet,
    /// Angle unit, not convertible to a length
    Degrees,
    /// Area unit, not convertible to a length
    SquareMeters,
}

impl Unit {
    /// Short symbol used in configuration files
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Millimeters => "mm",
            Unit::Centimeters => "cm",
            Unit::Meters => "m",
            Unit::Inches => "in",
            Unit::Feet => "ft",
            Unit::Degrees => "deg",
            Unit::SquareMeters => "m2",
        }
    }

    /// Internal units per one of this unit, if it is a length unit
    fn feet_per_unit(&self) -> Option<f64> {
        match self {
            Unit::Millimeters => Some(1.0 / MILLIMETERS_PER_FOOT),
            Unit::Centimeters => Some(10.0 / MILLIMETERS_PER_FOOT),
            Unit::Meters => Some(1000.0 / MILLIMETERS_PER_FOOT),
            Unit::Inches => Some(1.0 / 12.0),
            Unit::Feet => Some(1.0),
            Unit::Degrees | Unit::SquareMeters => None,
        }
    }

    /// Check whether values in this unit can become a [`Length`]
    pub fn is_length(&self) -> bool {
        self.feet_per_unit().is_some()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "mm" => Ok(Unit::Millimeters),
            "cm" => Ok(Unit::Centimeters),
            "m" => Ok(Unit::Meters),
            "in" => Ok(Unit::Inches),
            "ft" => Ok(Unit::Feet),
            "deg" => Ok(Unit::Degrees),
            "m2" => Ok(Unit::SquareMeters),
            other => Err(ModelError::UnsupportedUnit(other.to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Convert `value` expressed in `unit` to internal units
pub fn to_internal(value: f64, unit: Unit) -> Result<Length> {
    let factor = unit
        .feet_per_unit()
        .ok_or_else(|| ModelError::UnsupportedUnit(unit.symbol().to_string()))?;
    Ok(Length::from_internal(value * factor))
}

/// Convert an internal length back to `unit`
pub fn from_internal(length: Length, unit: Unit) -> Result<f64> {
    let factor = unit
        .feet_per_unit()
        .ok_or_else(|| ModelError::UnsupportedUnit(unit.symbol().to_string()))?;
    Ok(length.value() / factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_feet() {
        let len = to_internal(304.8, Unit::Millimeters).unwrap();
        assert!((len.value() - 1.0).abs() < 1e-12);

        let len = to_internal(10000.0, Unit::Millimeters).unwrap();
        assert!((len.value() - 32.808_398_950_131_23).abs() < 1e-9);
    }

    #[test]
    fn test_other_length_units() {
        assert!((to_internal(1.0, Unit::Meters).unwrap().value() - 3.280_839_895).abs() < 1e-9);
        assert!((to_internal(30.48, Unit::Centimeters).unwrap().value() - 1.0).abs() < 1e-12);
        assert_eq!(to_internal(24.0, Unit::Inches).unwrap().value(), 2.0);
        assert_eq!(to_internal(7.5, Unit::Feet).unwrap().value(), 7.5);
    }

    #[test]
    fn test_round_trip_back_to_millimeters() {
        let len = to_internal(1000.0, Unit::Millimeters).unwrap();
        let mm = from_internal(len, Unit::Millimeters).unwrap();
        assert!((mm - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_length_unit_rejected() {
        let err = to_internal(90.0, Unit::Degrees).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedUnit(ref u) if u == "deg"));
        assert!(from_internal(Length::ZERO, Unit::SquareMeters).is_err());
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("mm".parse::<Unit>().unwrap(), Unit::Millimeters);
        assert_eq!(" ft ".parse::<Unit>().unwrap(), Unit::Feet);
        assert!(matches!(
            "furlong".parse::<Unit>(),
            Err(ModelError::UnsupportedUnit(_))
        ));
    }
}
