//! Built-in element parameters

use crate::error::{ModelError, Result};
use crate::types::ElementId;
use indexmap::IndexMap;
use std::fmt;

/// Parameters this crate reads or writes on host elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltInParameter {
    /// Wall base level
    WallBaseConstraint,
    /// Wall top constraint level (invalid id = unconnected)
    WallHeightType,
    /// Wall height used while the top is unconnected
    WallUnconnectedHeight,
    /// Distance from the host level to the bottom of an opening
    InstanceSillHeight,
}

impl BuiltInParameter {
    /// Value kind stored by this parameter
    pub fn storage_type(&self) -> StorageType {
        match self {
            BuiltInParameter::WallBaseConstraint | BuiltInParameter::WallHeightType => {
                StorageType::ElementId
            }
            BuiltInParameter::WallUnconnectedHeight | BuiltInParameter::InstanceSillHeight => {
                StorageType::Double
            }
        }
    }
}

impl fmt::Display for BuiltInParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuiltInParameter::WallBaseConstraint => "WALL_BASE_CONSTRAINT",
            BuiltInParameter::WallHeightType => "WALL_HEIGHT_TYPE",
            BuiltInParameter::WallUnconnectedHeight => "WALL_USER_HEIGHT_PARAM",
            BuiltInParameter::InstanceSillHeight => "INSTANCE_SILL_HEIGHT_PARAM",
        };
        f.write_str(name)
    }
}

/// Kind of value a parameter holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    Double,
    ElementId,
}

/// A parameter value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    /// Length or other real value, in internal units
    Double(f64),
    /// Reference to another element
    ElementId(ElementId),
}

impl ParameterValue {
    pub fn storage_type(&self) -> StorageType {
        match self {
            ParameterValue::Double(_) => StorageType::Double,
            ParameterValue::ElementId(_) => StorageType::ElementId,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            ParameterValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_element_id(&self) -> Option<ElementId> {
        match self {
            ParameterValue::ElementId(id) => Some(*id),
            _ => None,
        }
    }
}

/// The parameters an element exposes, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    values: IndexMap<BuiltInParameter, ParameterValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Parameters {
            values: IndexMap::new(),
        }
    }

    /// Expose a parameter with its initial value
    pub fn declare(&mut self, param: BuiltInParameter, value: ParameterValue) {
        self.values.insert(param, value);
    }

    /// Get a parameter value, if the element exposes the parameter
    pub fn get(&self, param: BuiltInParameter) -> Option<ParameterValue> {
        self.values.get(&param).copied()
    }

    /// Set an exposed parameter; the value kind must match
    pub fn set(&mut self, param: BuiltInParameter, value: ParameterValue) -> Result<()> {
        let slot = self.values.get_mut(&param).ok_or_else(|| {
            ModelError::HostMutation(format!("parameter {param} is not exposed by this element"))
        })?;
        if value.storage_type() != param.storage_type() {
            return Err(ModelError::HostMutation(format!(
                "parameter {param} expects {:?}, got {:?}",
                param.storage_type(),
                value.storage_type()
            )));
        }
        *slot = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_declared_parameter() {
        let mut params = Parameters::new();
        params.declare(BuiltInParameter::InstanceSillHeight, ParameterValue::Double(0.0));
        params
            .set(BuiltInParameter::InstanceSillHeight, ParameterValue::Double(3.0))
            .unwrap();
        assert_eq!(
            params.get(BuiltInParameter::InstanceSillHeight).and_then(|v| v.as_double()),
            Some(3.0)
        );
    }

    #[test]
    fn test_set_undeclared_parameter_fails() {
        let mut params = Parameters::new();
        let err = params
            .set(BuiltInParameter::InstanceSillHeight, ParameterValue::Double(3.0))
            .unwrap_err();
        assert!(matches!(err, ModelError::HostMutation(_)));
    }

    #[test]
    fn test_storage_type_mismatch_fails() {
        let mut params = Parameters::new();
        params.declare(
            BuiltInParameter::WallHeightType,
            ParameterValue::ElementId(ElementId::INVALID),
        );
        assert!(params
            .set(BuiltInParameter::WallHeightType, ParameterValue::Double(1.0))
            .is_err());
        assert!(params
            .set(
                BuiltInParameter::WallHeightType,
                ParameterValue::ElementId(ElementId::new(5))
            )
            .is_ok());
    }

    #[test]
    fn test_parameter_display() {
        assert_eq!(
            BuiltInParameter::InstanceSillHeight.to_string(),
            "INSTANCE_SILL_HEIGHT_PARAM"
        );
    }
}
