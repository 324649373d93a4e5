//! Interface to the host BIM document
//!
//! Everything the envelope construction needs from its host goes through
//! [`HostDocument`]: element queries, element creation, parameter writes and
//! transaction control. [`crate::document::BimDocument`] is an in-memory
//! implementation; an adapter over a real BIM application implements the same
//! trait.

use crate::elements::{BuiltInParameter, Category, ElementType, ParameterValue, StructuralType};
use crate::error::Result;
use crate::geometry::Line;
use crate::tables::{FamilySymbol, Level};
use crate::types::{ElementId, Point3};

/// A host document session
pub trait HostDocument {
    // ---- queries ----

    /// All levels, in host order
    fn levels(&self) -> Vec<&Level>;

    /// All loaded family symbols of `category`, in host order
    fn symbols(&self, category: Category) -> Vec<&FamilySymbol>;

    /// A family symbol by id
    fn symbol(&self, id: ElementId) -> Option<&FamilySymbol>;

    /// A wall or family instance by id
    fn element(&self, id: ElementId) -> Option<&ElementType>;

    // ---- mutations (require an open transaction) ----

    /// Create a straight wall along `line` based on `base_level`
    fn create_wall(&mut self, line: Line, base_level: ElementId, structural: bool)
        -> Result<ElementId>;

    /// Place an instance of `symbol` at `point`, hosted by `host`, on `level`
    fn create_family_instance(
        &mut self,
        point: Point3,
        symbol: ElementId,
        host: ElementId,
        level: ElementId,
        structural_type: StructuralType,
    ) -> Result<ElementId>;

    /// Make a family symbol instantiable
    fn activate_symbol(&mut self, symbol: ElementId) -> Result<()>;

    /// Write a built-in parameter on an element
    fn set_parameter(
        &mut self,
        element: ElementId,
        param: BuiltInParameter,
        value: ParameterValue,
    ) -> Result<()>;

    /// Reverse the facing direction of a family instance
    fn flip_facing(&mut self, instance: ElementId) -> Result<()>;

    // ---- transactions ----

    /// Open a named transaction
    fn begin_transaction(&mut self, name: &str) -> Result<()>;

    /// Make every change since `begin_transaction` permanent
    fn commit_transaction(&mut self) -> Result<()>;

    /// Discard every change since `begin_transaction`
    fn rollback_transaction(&mut self);

    /// Check whether a transaction is open
    fn has_open_transaction(&self) -> bool;
}
