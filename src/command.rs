//! The "create model" command
//!
//! Resolves both levels, converts the dimensions, then inside a single
//! transaction builds the wall loop and places every configured opening. The
//! transaction is committed only when every step succeeded; on any error the
//! transaction guard rolls the document back.

use crate::catalog;
use crate::config::CreationConfig;
use crate::construction::{build_walls, place_opening, OpeningKind, WallLoop};
use crate::error::{ModelError, Result};
use crate::geometry::{EdgeSide, Footprint};
use crate::host::HostDocument;
use crate::levels;
use crate::notification::{NotificationCollection, NotificationType};
use crate::tables::Level;
use crate::transaction::Transaction;
use crate::types::{ElementId, Length};
use std::fmt;

/// Name of the host transaction opened by the command
pub const TRANSACTION_NAME: &str = "Create model";

/// Progress of a creation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationState {
    Idle,
    LevelsResolved,
    TransactionOpen,
    WallsBuilt,
    OpeningsPlaced,
    Committed,
    /// Failed after the transaction opened; everything was rolled back
    Aborted,
}

impl fmt::Display for CreationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Result reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Succeeded,
    Failed,
    Cancelled,
}

/// A placed opening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedOpening {
    pub edge: EdgeSide,
    pub kind: OpeningKind,
    pub instance: ElementId,
}

/// What a successful run created
#[derive(Debug, Clone, PartialEq)]
pub struct CreationReport {
    /// Walls in loop order
    pub walls: WallLoop,
    /// Openings in placement order
    pub openings: Vec<PlacedOpening>,
    pub state: CreationState,
    pub notifications: NotificationCollection,
}

impl CreationReport {
    /// Openings of one kind
    pub fn openings_of(&self, kind: OpeningKind) -> impl Iterator<Item = &PlacedOpening> {
        self.openings.iter().filter(move |o| o.kind == kind)
    }
}

/// Result of [`CreateModelCommand::execute`]
#[derive(Debug)]
pub struct CommandResult {
    pub outcome: CommandOutcome,
    /// Last state reached
    pub state: CreationState,
    /// Report of a committed run
    pub report: Option<CreationReport>,
    /// Error of a failed or cancelled run
    pub error: Option<ModelError>,
}

/// Builds the envelope described by a [`CreationConfig`]
#[derive(Debug, Clone, Default)]
pub struct CreateModelCommand {
    config: CreationConfig,
}

impl CreateModelCommand {
    pub fn new(config: CreationConfig) -> Self {
        CreateModelCommand { config }
    }

    pub fn config(&self) -> &CreationConfig {
        &self.config
    }

    /// Run the command and fold the result into what the host expects
    pub fn execute<D: HostDocument + ?Sized>(&self, doc: &mut D) -> CommandResult {
        let mut state = CreationState::Idle;
        match self.run_tracked(doc, &mut state) {
            Ok(report) => CommandResult {
                outcome: CommandOutcome::Succeeded,
                state: report.state,
                report: Some(report),
                error: None,
            },
            Err(err) => {
                let outcome = if err.is_cancellation() {
                    CommandOutcome::Cancelled
                } else {
                    CommandOutcome::Failed
                };
                tracing::warn!(
                    target: "bim_envelope::command",
                    state = %state,
                    error = %err,
                    "create model did not complete"
                );
                CommandResult {
                    outcome,
                    state,
                    report: None,
                    error: Some(err),
                }
            }
        }
    }

    /// Run the command, returning the report or the first error
    pub fn run<D: HostDocument + ?Sized>(&self, doc: &mut D) -> Result<CreationReport> {
        let mut state = CreationState::Idle;
        self.run_tracked(doc, &mut state)
    }

    fn run_tracked<D: HostDocument + ?Sized>(
        &self,
        doc: &mut D,
        state: &mut CreationState,
    ) -> Result<CreationReport> {
        let config = &self.config;
        config.validate()?;
        let mut notifications = NotificationCollection::new();

        let base = levels::resolve_level(doc, &config.base_level, &mut notifications)?;
        let top = levels::resolve_level(doc, &config.top_level, &mut notifications)?;
        advance(state, CreationState::LevelsResolved);

        let dx = config.length.to_internal()?.half();
        let dy = config.depth.to_internal()?.half();
        let sill_height = config.sill_height.to_internal()?;
        let footprint = Footprint::rectangle(dx, dy);
        if footprint.is_degenerate() {
            notifications.notify(
                NotificationType::Warning,
                format!(
                    "footprint {} x {} ft encloses no area",
                    footprint.length(),
                    footprint.depth()
                ),
            );
        }

        let mut txn = Transaction::start(doc, TRANSACTION_NAME)?;
        advance(state, CreationState::TransactionOpen);

        let result = self.build(&mut *txn, &footprint, &base, &top, sill_height, state);
        match result {
            Ok((walls, openings)) => {
                if let Err(err) = txn.commit() {
                    advance(state, CreationState::Aborted);
                    return Err(err);
                }
                advance(state, CreationState::Committed);
                notifications.notify(
                    NotificationType::Info,
                    format!(
                        "created {} walls and {} openings",
                        walls.ids().len(),
                        openings.len()
                    ),
                );
                Ok(CreationReport {
                    walls,
                    openings,
                    state: *state,
                    notifications,
                })
            }
            Err(err) => {
                txn.rollback();
                advance(state, CreationState::Aborted);
                Err(err)
            }
        }
    }

    fn build<D: HostDocument + ?Sized>(
        &self,
        doc: &mut D,
        footprint: &Footprint,
        base: &Level,
        top: &Level,
        sill_height: Length,
        state: &mut CreationState,
    ) -> Result<(WallLoop, Vec<PlacedOpening>)> {
        let walls = build_walls(doc, footprint, base, top)?;
        advance(state, CreationState::WallsBuilt);

        let mut openings = Vec::with_capacity(self.config.openings.len());
        for assignment in &self.config.openings {
            let name = self.config.type_for(assignment.kind);
            let symbol = catalog::require_type(
                doc,
                assignment.kind.category(),
                &name.family,
                &name.type_name,
            )?;
            let instance = place_opening(
                doc,
                walls[assignment.edge],
                &symbol,
                base,
                assignment.kind,
                sill_height,
            )?;
            openings.push(PlacedOpening {
                edge: assignment.edge,
                kind: assignment.kind,
                instance,
            });
        }
        advance(state, CreationState::OpeningsPlaced);
        Ok((walls, openings))
    }
}

fn advance(state: &mut CreationState, next: CreationState) {
    tracing::debug!(target: "bim_envelope::command", from = %state, to = %next, "state");
    *state = next;
}
