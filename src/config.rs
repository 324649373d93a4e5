//! Creation settings
//!
//! [`CreationConfig::default`] is the reference building: 10000 mm × 5000 mm
//! between "Level 1" and "Level 2", one door in the right wall and a window
//! in each of the other three. Settings can also be read from TOML:
//!
//! ```toml
//! base_level = "Level 1"
//! top_level = "Level 2"
//! length = { value = 12000.0, unit = "mm" }
//! depth = { value = 6000.0, unit = "mm" }
//! sill_height = { value = 900.0, unit = "mm" }
//!
//! [door]
//! family = "Single-Flush"
//! type_name = "0915 x 2134mm"
//!
//! [window]
//! family = "Fixed"
//! type_name = "0915 x 1830mm"
//!
//! [[openings]]
//! edge = "right"
//! kind = "door"
//! ```

use crate::construction::OpeningKind;
use crate::error::{ModelError, Result};
use crate::geometry::{EdgeSide, FOOTPRINT_EDGES};
use crate::types::Length;
use crate::units::{self, Unit};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// A length as written by a person: value plus unit
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Dimension {
    pub value: f64,
    pub unit: Unit,
}

impl Dimension {
    pub fn millimeters(value: f64) -> Self {
        Dimension {
            value,
            unit: Unit::Millimeters,
        }
    }

    /// Convert to internal units
    pub fn to_internal(&self) -> Result<Length> {
        units::to_internal(self.value, self.unit)
    }
}

/// Catalog name of a door or window type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeName {
    /// Family name
    pub family: String,
    /// Type name within the family
    pub type_name: String,
}

impl TypeName {
    pub fn new(family: impl Into<String>, type_name: impl Into<String>) -> Self {
        TypeName {
            family: family.into(),
            type_name: type_name.into(),
        }
    }
}

/// One entry of the edge → opening table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OpeningAssignment {
    pub edge: EdgeSide,
    pub kind: OpeningKind,
}

impl OpeningAssignment {
    pub fn new(edge: EdgeSide, kind: OpeningKind) -> Self {
        OpeningAssignment { edge, kind }
    }
}

/// Everything the creation command needs to know
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreationConfig {
    /// Name of the level the walls stand on
    pub base_level: String,
    /// Name of the level the wall tops are constrained to
    pub top_level: String,
    /// Footprint extent along x
    pub length: Dimension,
    /// Footprint extent along y
    pub depth: Dimension,
    /// Window sill height above the base level
    pub sill_height: Dimension,
    /// Door type
    pub door: TypeName,
    /// Window type
    pub window: TypeName,
    /// Openings to place, in placement order
    pub openings: Vec<OpeningAssignment>,
}

impl Default for CreationConfig {
    fn default() -> Self {
        CreationConfig {
            base_level: "Level 1".to_string(),
            top_level: "Level 2".to_string(),
            length: Dimension::millimeters(10000.0),
            depth: Dimension::millimeters(5000.0),
            sill_height: Dimension::millimeters(1000.0),
            door: TypeName::new("Single-Flush", "0915 x 2134mm"),
            window: TypeName::new("Fixed", "0915 x 1830mm"),
            openings: vec![
                OpeningAssignment::new(EdgeSide::Right, OpeningKind::Door),
                OpeningAssignment::new(EdgeSide::Front, OpeningKind::Window),
                OpeningAssignment::new(EdgeSide::Back, OpeningKind::Window),
                OpeningAssignment::new(EdgeSide::Left, OpeningKind::Window),
            ],
        }
    }
}

impl CreationConfig {
    /// Parse and validate TOML settings; missing keys take reference values
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: CreationConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read settings from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Catalog name for an opening kind
    pub fn type_for(&self, kind: OpeningKind) -> &TypeName {
        match kind {
            OpeningKind::Door => &self.door,
            OpeningKind::Window => &self.window,
        }
    }

    /// Check the settings without touching any document
    pub fn validate(&self) -> Result<()> {
        if self.base_level.is_empty() || self.top_level.is_empty() {
            return Err(ModelError::InvalidConfig(
                "level names must not be empty".to_string(),
            ));
        }
        if self.base_level == self.top_level {
            return Err(ModelError::InvalidConfig(format!(
                "base and top level are both '{}'",
                self.base_level
            )));
        }
        for (name, dimension) in [
            ("length", &self.length),
            ("depth", &self.depth),
            ("sill_height", &self.sill_height),
        ] {
            if !dimension.unit.is_length() {
                return Err(ModelError::UnsupportedUnit(dimension.unit.to_string()));
            }
            if !dimension.value.is_finite() {
                return Err(ModelError::InvalidConfig(format!(
                    "{name} must be a finite number, got {}",
                    dimension.value
                )));
            }
        }
        if self.openings.len() > FOOTPRINT_EDGES {
            return Err(ModelError::InvalidConfig(format!(
                "{} openings requested, at most {FOOTPRINT_EDGES} are supported",
                self.openings.len()
            )));
        }
        let mut seen = HashSet::new();
        for assignment in &self.openings {
            if !seen.insert(assignment.edge) {
                return Err(ModelError::InvalidConfig(format!(
                    "more than one opening assigned to the {} edge",
                    assignment.edge
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_building() {
        let config = CreationConfig::default();
        assert_eq!(config.base_level, "Level 1");
        assert_eq!(config.top_level, "Level 2");
        assert_eq!(config.length, Dimension::millimeters(10000.0));
        assert_eq!(config.depth, Dimension::millimeters(5000.0));
        assert_eq!(config.openings.len(), 4);
        assert_eq!(
            config.openings[0],
            OpeningAssignment::new(EdgeSide::Right, OpeningKind::Door)
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CreationConfig::from_toml_str(
            r#"
            base_level = "Ground"
            top_level = "Roof"
            length = { value = 12.0, unit = "m" }
            "#,
        )
        .unwrap();
        assert_eq!(config.base_level, "Ground");
        assert_eq!(config.length.unit, Unit::Meters);
        assert_eq!(config.depth, Dimension::millimeters(5000.0));
        assert_eq!(config.window.family, "Fixed");
    }

    #[test]
    fn test_opening_table_from_toml() {
        let config = CreationConfig::from_toml_str(
            r#"
            [[openings]]
            edge = "front"
            kind = "door"

            [[openings]]
            edge = "back"
            kind = "window"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.openings,
            vec![
                OpeningAssignment::new(EdgeSide::Front, OpeningKind::Door),
                OpeningAssignment::new(EdgeSide::Back, OpeningKind::Window),
            ]
        );
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let err = CreationConfig::from_toml_str(
            r#"
            [[openings]]
            edge = "left"
            kind = "door"

            [[openings]]
            edge = "left"
            kind = "window"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let err = CreationConfig::from_toml_str(r#"depth = { value = 5.0, unit = "yd" }"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::ConfigParse(_)));
    }

    #[test]
    fn test_non_length_unit_rejected() {
        let config = CreationConfig {
            sill_height: Dimension {
                value: 90.0,
                unit: Unit::Degrees,
            },
            ..CreationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ModelError::UnsupportedUnit(_))
        ));
    }

    #[test]
    fn test_non_finite_dimensions_rejected() {
        for text in [
            r#"length = { value = nan, unit = "mm" }"#,
            r#"depth = { value = inf, unit = "mm" }"#,
            r#"sill_height = { value = -inf, unit = "m" }"#,
        ] {
            let err = CreationConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, ModelError::InvalidConfig(_)), "{text}: {err}");
        }
    }

    #[test]
    fn test_same_level_names_rejected() {
        let config = CreationConfig {
            top_level: "Level 1".to_string(),
            ..CreationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
