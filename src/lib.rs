//! # bim-envelope
//!
//! Builds a simple rectangular building envelope in a host BIM document:
//! four walls between two levels, one door and three windows.
//!
//! ## Quick Start
//!
//! ```rust
//! use bim_envelope::{
//!     BimDocument, Category, CommandOutcome, CreateModelCommand, FamilySymbol, Length, Level,
//! };
//!
//! let mut doc = BimDocument::new();
//! doc.add_level(Level::new("Level 1", Length::ZERO))?;
//! doc.add_level(Level::new("Level 2", Length::from_internal(13.12)))?;
//! doc.add_symbol(FamilySymbol::new(Category::Door, "Single-Flush", "0915 x 2134mm"))?;
//! doc.add_symbol(FamilySymbol::new(Category::Window, "Fixed", "0915 x 1830mm"))?;
//!
//! let result = CreateModelCommand::default().execute(&mut doc);
//! assert_eq!(result.outcome, CommandOutcome::Succeeded);
//! assert_eq!(doc.walls().count(), 4);
//! # Ok::<(), bim_envelope::ModelError>(())
//! ```
//!
//! ## Architecture
//!
//! - `HostDocument` - everything the construction needs from the host
//! - `BimDocument` - in-memory host used for tests and the CLI
//! - `Transaction` - scoped transaction, rolled back unless committed
//! - `CreateModelCommand` - resolves levels, then builds walls and openings
//!   inside one transaction

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod command;
pub mod config;
pub mod construction;
pub mod document;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod host;
pub mod levels;
pub mod notification;
pub mod tables;
pub mod transaction;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use error::{ModelError, Result};
pub use types::{ElementId, Length, Point3};

pub use command::{CommandOutcome, CommandResult, CreateModelCommand, CreationReport, CreationState};
pub use config::CreationConfig;
pub use construction::{OpeningKind, WallLoop};
pub use document::BimDocument;
pub use elements::{Category, Element, ElementType, FamilyInstance, Wall};
pub use geometry::{EdgeSide, Footprint, Line};
pub use host::HostDocument;
pub use tables::{FamilySymbol, Level};
pub use transaction::Transaction;
pub use units::Unit;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_document_creation() {
        let doc = BimDocument::with_title("Envelope");
        assert_eq!(doc.title, "Envelope");
        assert_eq!(doc.element_count(), 0);
    }
}
