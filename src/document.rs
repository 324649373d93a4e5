//! In-memory BIM document
//!
//! `BimDocument` is a small host that behaves like a BIM application's project
//! document as far as envelope construction is concerned: it owns levels, a
//! catalog of family symbols and the created elements, allocates element ids,
//! and only accepts modifications inside a transaction. Rolling a transaction
//! back restores the document to its state at `begin_transaction`, symbol
//! activation included.

use crate::elements::{
    BuiltInParameter, Category, Element, ElementType, FamilyInstance, ParameterValue,
    StructuralType, Wall,
};
use crate::error::{ModelError, Result};
use crate::geometry::Line;
use crate::host::HostDocument;
use crate::tables::{FamilySymbol, Level, Table, TableEntry};
use crate::types::{ElementId, Point3, POINT_TOLERANCE};
use ahash::AHashMap;

/// Outcome of a finished transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOutcome {
    Committed,
    RolledBack,
}

/// A finished transaction, kept in the document history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub name: String,
    pub outcome: TransactionOutcome,
}

/// State captured when a transaction opens
#[derive(Debug, Clone)]
struct Snapshot {
    symbols: Table<FamilySymbol>,
    elements: AHashMap<ElementId, ElementType>,
    next_id: u64,
}

#[derive(Debug, Clone)]
struct OpenTransaction {
    name: String,
    snapshot: Snapshot,
}

/// In-memory host document
#[derive(Debug, Clone)]
pub struct BimDocument {
    /// Document title
    pub title: String,
    levels: Table<Level>,
    symbols: Table<FamilySymbol>,
    elements: AHashMap<ElementId, ElementType>,
    next_id: u64,
    read_only: bool,
    cancel_requested: bool,
    element_limit: Option<usize>,
    transaction: Option<OpenTransaction>,
    history: Vec<TransactionRecord>,
}

impl BimDocument {
    /// Create an empty document
    pub fn new() -> Self {
        BimDocument {
            title: "Project1".to_string(),
            levels: Table::new(),
            symbols: Table::new(),
            elements: AHashMap::new(),
            // low ids are reserved for built-in elements
            next_id: 0x100,
            read_only: false,
            cancel_requested: false,
            element_limit: None,
            transaction: None,
            history: Vec::new(),
        }
    }

    /// Create an empty document with a title
    pub fn with_title(title: impl Into<String>) -> Self {
        BimDocument {
            title: title.into(),
            ..Self::new()
        }
    }

    /// Allocate a new unique element id
    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a level; returns its id
    pub fn add_level(&mut self, mut level: Level) -> Result<ElementId> {
        let id = self.allocate_id();
        level.set_id(id);
        self.levels.add(level)?;
        Ok(id)
    }

    /// Load a family symbol into the catalog; returns its id
    pub fn add_symbol(&mut self, mut symbol: FamilySymbol) -> Result<ElementId> {
        if symbol.category == Category::Wall {
            return Err(ModelError::Custom(format!(
                "'{}' is not a loadable family category",
                symbol.category
            )));
        }
        let id = self.allocate_id();
        symbol.set_id(id);
        self.symbols.add(symbol)?;
        Ok(id)
    }

    /// Level by id
    pub fn level(&self, id: ElementId) -> Option<&Level> {
        self.levels.get(id)
    }

    /// Level table
    pub fn level_table(&self) -> &Table<Level> {
        &self.levels
    }

    /// Family symbol catalog
    pub fn symbol_table(&self) -> &Table<FamilySymbol> {
        &self.symbols
    }

    /// Make the document refuse every modification
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Ask the next `begin_transaction` to report a user cancellation
    pub fn request_cancel(&mut self) {
        self.cancel_requested = true;
    }

    /// Refuse element creation once the document holds `limit` elements
    pub fn set_element_limit(&mut self, limit: Option<usize>) {
        self.element_limit = limit;
    }

    /// Number of walls and family instances
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// All walls, ordered by id
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.sorted_elements().into_iter().filter_map(|e| e.as_wall())
    }

    /// All family instances, ordered by id
    pub fn family_instances(&self) -> impl Iterator<Item = &FamilyInstance> {
        self.sorted_elements()
            .into_iter()
            .filter_map(|e| e.as_family_instance())
    }

    /// Family instances hosted by `wall`, ordered by id
    pub fn instances_hosted_by(&self, wall: ElementId) -> Vec<&FamilyInstance> {
        self.family_instances()
            .filter(|fi| fi.host_id == wall)
            .collect()
    }

    /// Finished transactions, oldest first
    pub fn transaction_history(&self) -> &[TransactionRecord] {
        &self.history
    }

    fn sorted_elements(&self) -> Vec<&ElementType> {
        let mut ids: Vec<&ElementId> = self.elements.keys().collect();
        ids.sort();
        ids.into_iter().filter_map(|id| self.elements.get(id)).collect()
    }

    fn ensure_modifiable(&self) -> Result<()> {
        if self.read_only {
            return Err(ModelError::HostMutation(format!(
                "document '{}' is read-only",
                self.title
            )));
        }
        if self.transaction.is_none() {
            return Err(ModelError::Transaction(
                "modification outside of a transaction".to_string(),
            ));
        }
        Ok(())
    }

    fn ensure_capacity(&self) -> Result<()> {
        match self.element_limit {
            Some(limit) if self.elements.len() >= limit => Err(ModelError::HostMutation(
                format!("element limit of {limit} reached"),
            )),
            _ => Ok(()),
        }
    }

    fn insert_element(&mut self, mut element: ElementType) -> ElementId {
        let id = self.allocate_id();
        element.as_element_mut().set_id(id);
        self.elements.insert(id, element);
        id
    }

    fn wall(&self, id: ElementId) -> Result<&Wall> {
        match self.elements.get(&id) {
            Some(ElementType::Wall(w)) => Ok(w),
            Some(_) => Err(ModelError::HostMutation(format!(
                "element {id} is not a wall"
            ))),
            None => Err(ModelError::ElementNotFound(id)),
        }
    }
}

/// Distance from `point` to the segment `line`
fn distance_to_segment(point: &Point3, line: &Line) -> f64 {
    let span = line.end - line.start;
    let len_sq = span.dot(&span);
    if len_sq == 0.0 {
        return point.distance(&line.start);
    }
    let t = ((*point - line.start).dot(&span) / len_sq).clamp(0.0, 1.0);
    point.distance(&(line.start + span * t))
}

impl HostDocument for BimDocument {
    fn levels(&self) -> Vec<&Level> {
        self.levels.iter().collect()
    }

    fn symbols(&self, category: Category) -> Vec<&FamilySymbol> {
        self.symbols
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    fn symbol(&self, id: ElementId) -> Option<&FamilySymbol> {
        self.symbols.get(id)
    }

    fn element(&self, id: ElementId) -> Option<&ElementType> {
        self.elements.get(&id)
    }

    fn create_wall(
        &mut self,
        line: Line,
        base_level: ElementId,
        structural: bool,
    ) -> Result<ElementId> {
        self.ensure_modifiable()?;
        self.ensure_capacity()?;
        if !self.levels.contains(base_level) {
            return Err(ModelError::ElementNotFound(base_level));
        }
        if line.is_degenerate() {
            return Err(ModelError::HostMutation(
                "wall curve is too short".to_string(),
            ));
        }
        if !((line.start.z - line.end.z).abs() <= POINT_TOLERANCE) {
            return Err(ModelError::HostMutation(
                "wall curve must be horizontal".to_string(),
            ));
        }

        let id = self.insert_element(ElementType::Wall(Wall::new(line, base_level, structural)));
        tracing::debug!(target: "bim_envelope::document", wall = %id, "wall created");
        Ok(id)
    }

    fn create_family_instance(
        &mut self,
        point: Point3,
        symbol: ElementId,
        host: ElementId,
        level: ElementId,
        structural_type: StructuralType,
    ) -> Result<ElementId> {
        self.ensure_modifiable()?;
        self.ensure_capacity()?;

        let family_symbol = self
            .symbols
            .get(symbol)
            .ok_or(ModelError::ElementNotFound(symbol))?;
        if !family_symbol.is_active() {
            return Err(ModelError::HostMutation(format!(
                "symbol '{}' is not active",
                family_symbol.name
            )));
        }
        let category = family_symbol.category;

        if !self.levels.contains(level) {
            return Err(ModelError::ElementNotFound(level));
        }

        let wall = self.wall(host)?;
        if !(distance_to_segment(&point, &wall.location) <= POINT_TOLERANCE) {
            return Err(ModelError::HostMutation(format!(
                "insertion point {point} is not on host wall {host}"
            )));
        }
        // new instances face the interior side of their host
        let facing = -wall.orientation();

        let mut instance = FamilyInstance::new(category, symbol, host, level, point, facing);
        instance.structural_type = structural_type;
        let id = self.insert_element(ElementType::FamilyInstance(instance));
        tracing::debug!(
            target: "bim_envelope::document",
            instance = %id,
            host = %host,
            category = %category,
            "family instance created"
        );
        Ok(id)
    }

    fn activate_symbol(&mut self, symbol: ElementId) -> Result<()> {
        self.ensure_modifiable()?;
        let entry = self
            .symbols
            .get_mut(symbol)
            .ok_or(ModelError::ElementNotFound(symbol))?;
        entry.activate();
        Ok(())
    }

    fn set_parameter(
        &mut self,
        element: ElementId,
        param: BuiltInParameter,
        value: ParameterValue,
    ) -> Result<()> {
        self.ensure_modifiable()?;
        if let ParameterValue::ElementId(target) = value {
            if target.is_valid() && !self.levels.contains(target) {
                return Err(ModelError::HostMutation(format!(
                    "{param} must reference a level, got {target}"
                )));
            }
        }
        let entry = self
            .elements
            .get_mut(&element)
            .ok_or(ModelError::ElementNotFound(element))?;
        entry.as_element_mut().common_mut().parameters.set(param, value)
    }

    fn flip_facing(&mut self, instance: ElementId) -> Result<()> {
        self.ensure_modifiable()?;
        match self.elements.get_mut(&instance) {
            Some(ElementType::FamilyInstance(fi)) => {
                fi.flip_facing();
                Ok(())
            }
            Some(_) => Err(ModelError::HostMutation(format!(
                "element {instance} cannot be flipped"
            ))),
            None => Err(ModelError::ElementNotFound(instance)),
        }
    }

    fn begin_transaction(&mut self, name: &str) -> Result<()> {
        if self.cancel_requested {
            self.cancel_requested = false;
            return Err(ModelError::Cancelled(format!(
                "transaction '{name}' cancelled by user"
            )));
        }
        if self.read_only {
            return Err(ModelError::HostMutation(format!(
                "document '{}' is read-only",
                self.title
            )));
        }
        if let Some(open) = &self.transaction {
            return Err(ModelError::Transaction(format!(
                "cannot start '{name}' while '{}' is open",
                open.name
            )));
        }
        self.transaction = Some(OpenTransaction {
            name: name.to_string(),
            snapshot: Snapshot {
                symbols: self.symbols.clone(),
                elements: self.elements.clone(),
                next_id: self.next_id,
            },
        });
        Ok(())
    }

    fn commit_transaction(&mut self) -> Result<()> {
        let open = self
            .transaction
            .take()
            .ok_or_else(|| ModelError::Transaction("no open transaction to commit".to_string()))?;
        self.history.push(TransactionRecord {
            name: open.name,
            outcome: TransactionOutcome::Committed,
        });
        Ok(())
    }

    fn rollback_transaction(&mut self) {
        if let Some(open) = self.transaction.take() {
            self.symbols = open.snapshot.symbols;
            self.elements = open.snapshot.elements;
            self.next_id = open.snapshot.next_id;
            self.history.push(TransactionRecord {
                name: open.name,
                outcome: TransactionOutcome::RolledBack,
            });
        }
    }

    fn has_open_transaction(&self) -> bool {
        self.transaction.is_some()
    }
}

impl Default for BimDocument {
    fn default() -> Self {
        Self::new()
    }
}
