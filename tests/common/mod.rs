//! Shared test utilities for bim-envelope integration tests.
//!
//! Provides the reference document (two levels, one door type, one window
//! type) and a `RecordingDocument` that forwards to a `BimDocument` while
//! logging every host call in order.

#![allow(dead_code)]

use bim_envelope::elements::{BuiltInParameter, ElementType, ParameterValue, StructuralType};
use bim_envelope::units::{self, Unit};
use bim_envelope::{
    BimDocument, Category, ElementId, FamilySymbol, HostDocument, Length, Level, Line, Point3,
    Result,
};

// ===========================================================================
// Reference document
// ===========================================================================

/// Elevation of "Level 2" in the reference document
pub fn top_elevation() -> Length {
    units::to_internal(4000.0, Unit::Millimeters).unwrap()
}

/// Document holding "Level 1", "Level 2" and the reference door and window types
pub fn reference_document() -> BimDocument {
    let mut doc = BimDocument::with_title("Reference");
    doc.add_level(Level::new("Level 1", Length::ZERO)).unwrap();
    doc.add_level(Level::new("Level 2", top_elevation())).unwrap();
    doc.add_symbol(FamilySymbol::new(Category::Door, "Single-Flush", "0915 x 2134mm"))
        .unwrap();
    doc.add_symbol(FamilySymbol::new(Category::Window, "Fixed", "0915 x 1830mm"))
        .unwrap();
    doc
}

/// Reference levels only, no door or window types
pub fn document_without_types() -> BimDocument {
    let mut doc = BimDocument::new();
    doc.add_level(Level::new("Level 1", Length::ZERO)).unwrap();
    doc.add_level(Level::new("Level 2", top_elevation())).unwrap();
    doc
}

/// Compare two floats within `tol`
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tolerance {tol})"
    );
}

// ===========================================================================
// Call recording
// ===========================================================================

/// A host call as seen by `RecordingDocument`
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Begin(String),
    Commit,
    Rollback,
    CreateWall { base_level: ElementId, structural: bool },
    CreateInstance { symbol: ElementId, host: ElementId, structural_type: StructuralType },
    Activate(ElementId),
    SetParameter { element: ElementId, param: BuiltInParameter, value: ParameterValue },
    FlipFacing(ElementId),
}

impl HostCall {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, HostCall::Begin(_) | HostCall::Commit | HostCall::Rollback)
    }
}

/// Forwards to a `BimDocument`, recording every host call
pub struct RecordingDocument {
    pub inner: BimDocument,
    pub calls: Vec<HostCall>,
}

impl RecordingDocument {
    pub fn new(inner: BimDocument) -> Self {
        RecordingDocument {
            inner,
            calls: Vec::new(),
        }
    }

    /// Index of the first call matching `pred`
    pub fn position(&self, pred: impl Fn(&HostCall) -> bool) -> Option<usize> {
        self.calls.iter().position(pred)
    }
}

impl HostDocument for RecordingDocument {
    fn levels(&self) -> Vec<&Level> {
        self.inner.levels()
    }

    fn symbols(&self, category: Category) -> Vec<&FamilySymbol> {
        self.inner.symbols(category)
    }

    fn symbol(&self, id: ElementId) -> Option<&FamilySymbol> {
        self.inner.symbol(id)
    }

    fn element(&self, id: ElementId) -> Option<&ElementType> {
        self.inner.element(id)
    }

    fn create_wall(&mut self, line: Line, base_level: ElementId, structural: bool) -> Result<ElementId> {
        self.calls.push(HostCall::CreateWall { base_level, structural });
        self.inner.create_wall(line, base_level, structural)
    }

    fn create_family_instance(
        &mut self,
        point: Point3,
        symbol: ElementId,
        host: ElementId,
        level: ElementId,
        structural_type: StructuralType,
    ) -> Result<ElementId> {
        self.calls.push(HostCall::CreateInstance {
            symbol,
            host,
            structural_type,
        });
        self.inner
            .create_family_instance(point, symbol, host, level, structural_type)
    }

    fn activate_symbol(&mut self, symbol: ElementId) -> Result<()> {
        self.calls.push(HostCall::Activate(symbol));
        self.inner.activate_symbol(symbol)
    }

    fn set_parameter(
        &mut self,
        element: ElementId,
        param: BuiltInParameter,
        value: ParameterValue,
    ) -> Result<()> {
        self.calls.push(HostCall::SetParameter {
            element,
            param,
            value,
        });
        self.inner.set_parameter(element, param, value)
    }

    fn flip_facing(&mut self, instance: ElementId) -> Result<()> {
        self.calls.push(HostCall::FlipFacing(instance));
        self.inner.flip_facing(instance)
    }

    fn begin_transaction(&mut self, name: &str) -> Result<()> {
        self.calls.push(HostCall::Begin(name.to_string()));
        self.inner.begin_transaction(name)
    }

    fn commit_transaction(&mut self) -> Result<()> {
        self.calls.push(HostCall::Commit);
        self.inner.commit_transaction()
    }

    fn rollback_transaction(&mut self) {
        self.calls.push(HostCall::Rollback);
        self.inner.rollback_transaction()
    }

    fn has_open_transaction(&self) -> bool {
        self.inner.has_open_transaction()
    }
}
