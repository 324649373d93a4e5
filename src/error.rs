//! Error types for bim-envelope

use crate::elements::Category;
use crate::types::ElementId;
use thiserror::Error;

/// Main error type for envelope construction
#[derive(Debug, Error)]
pub enum ModelError {
    /// No level carries the requested name
    #[error("Level not found: {0:?}")]
    LevelNotFound(String),

    /// Unit cannot be converted to internal length units
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// No family symbol matches the requested family/type pair
    #[error("{category} type not found: family {family:?}, type {type_name:?}")]
    TypeNotFound {
        category: Category,
        family: String,
        type_name: String,
    },

    /// The host refused a creation or parameter change
    #[error("Host mutation failed: {0}")]
    HostMutation(String),

    /// Element referenced by id does not exist in the document
    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    /// Transaction misuse (nested start, commit without start)
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// The host reported that the user cancelled the operation
    #[error("Cancelled: {0}")]
    Cancelled(String),

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// IO error while reading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl ModelError {
    /// Check whether this error represents a user cancellation
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ModelError::Cancelled(_))
    }
}

/// Result type alias for bim-envelope operations
pub type Result<T> = std::result::Result<T, ModelError>;

impl From<String> for ModelError {
    fn from(s: String) -> Self {
        ModelError::Custom(s)
    }
}

impl From<&str> for ModelError {
    fn from(s: &str) -> Self {
        ModelError::Custom(s.to_string())
    }
}
