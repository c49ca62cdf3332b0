//! Board session service.
//!
//! # Responsibility
//! - Hold the current snapshot and commit engine results as the new state.
//! - Translate drag outcomes and button actions into engine calls.
//! - Emit metadata-only diagnostics for every committed or rejected change.
//!
//! # Invariants
//! - A failed operation leaves snapshot and revision untouched.
//! - The revision grows by exactly one per structural change; no-op moves do
//!   not bump it.
//! - Item and sub-item labels are never written to logs.

use crate::config::BoardConfig;
use crate::engine::id::IdProvider;
use crate::engine::instruction::{MoveInstruction, MoveScope};
use crate::engine::{self, EngineError};
use crate::gesture::{DragOutcome, GestureError};
use crate::model::hierarchy::Hierarchy;
use crate::model::item::NodeId;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from board session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Engine refused the instruction.
    Engine(EngineError),
    /// Drag outcome could not be turned into an instruction.
    Gesture(GestureError),
    /// Move was computed against an older snapshot.
    StaleRevision { expected: u64, actual: u64 },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(err) => write!(f, "{err}"),
            Self::Gesture(err) => write!(f, "{err}"),
            Self::StaleRevision { expected, actual } => write!(
                f,
                "move targets board revision {expected}, current revision is {actual}"
            ),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(err) => Some(err),
            Self::Gesture(err) => Some(err),
            Self::StaleRevision { .. } => None,
        }
    }
}

impl From<EngineError> for BoardError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<GestureError> for BoardError {
    fn from(value: GestureError) -> Self {
        Self::Gesture(value)
    }
}

/// Outcome of one accepted board operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardChange {
    /// Board revision after the operation.
    pub revision: u64,
    /// Whether the snapshot structurally changed.
    pub changed: bool,
    /// Id of the node created by an add operation.
    pub created_id: Option<NodeId>,
}

/// Stateful facade that owns the current board snapshot.
pub struct BoardService<P: IdProvider> {
    current: Hierarchy,
    revision: u64,
    ids: P,
    config: BoardConfig,
}

impl BoardService<Box<dyn IdProvider + Send>> {
    /// Creates a session whose id provider follows `config.id_strategy`.
    pub fn from_config(initial: Hierarchy, config: BoardConfig) -> Self {
        let ids = config.id_strategy.provider();
        Self::new(initial, ids, config)
    }
}

impl<P: IdProvider> BoardService<P> {
    /// Creates a session starting at revision 0.
    pub fn new(initial: Hierarchy, ids: P, config: BoardConfig) -> Self {
        Self {
            current: initial,
            revision: 0,
            ids,
            config,
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> &Hierarchy {
        &self.current
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Applies one move instruction to the current snapshot.
    pub fn apply_move(&mut self, instruction: &MoveInstruction) -> Result<BoardChange, BoardError> {
        let next = match engine::reorder(&self.current, instruction) {
            Ok(next) => next,
            Err(err) => return Err(self.reject("board_move", err.into())),
        };

        if next == self.current {
            debug!(
                "event=board_move module=board status=noop scope={} revision={}",
                scope_label(instruction.scope()),
                self.revision
            );
            return Ok(self.unchanged());
        }

        let change = self.commit(next, None);
        info!(
            "event=board_move module=board status=ok scope={} cross_parent={} revision={} items={} sub_items={}",
            scope_label(instruction.scope()),
            instruction.crosses_parents(),
            change.revision,
            self.current.len(),
            self.current.total_sub_items()
        );
        Ok(change)
    }

    /// Applies a move only if the board is still at `expected_revision`.
    ///
    /// # Errors
    /// - `StaleRevision` when another change was committed in between.
    pub fn apply_move_at(
        &mut self,
        expected_revision: u64,
        instruction: &MoveInstruction,
    ) -> Result<BoardChange, BoardError> {
        if expected_revision != self.revision {
            let err = BoardError::StaleRevision {
                expected: expected_revision,
                actual: self.revision,
            };
            return Err(self.reject("board_move", err));
        }
        self.apply_move(instruction)
    }

    /// Converts a finished drag and applies it.
    pub fn apply_drag(&mut self, outcome: DragOutcome) -> Result<BoardChange, BoardError> {
        match MoveInstruction::try_from(outcome) {
            Ok(instruction) => self.apply_move(&instruction),
            Err(err) => Err(self.reject("board_move", err.into())),
        }
    }

    /// Converts a finished drag and applies it only at `expected_revision`.
    pub fn apply_drag_at(
        &mut self,
        expected_revision: u64,
        outcome: DragOutcome,
    ) -> Result<BoardChange, BoardError> {
        match MoveInstruction::try_from(outcome) {
            Ok(instruction) => self.apply_move_at(expected_revision, &instruction),
            Err(err) => Err(self.reject("board_move", err.into())),
        }
    }

    /// Appends a new item labelled with `config.parent_label`.
    pub fn add_parent(&mut self) -> Result<BoardChange, BoardError> {
        let label = self.config.parent_label.clone();
        let next = match engine::add_parent(&self.current, &mut self.ids, label) {
            Ok(next) => next,
            Err(err) => return Err(self.reject("board_add_parent", err.into())),
        };

        let created_id = next.items().last().map(|item| item.id.clone());
        let change = self.commit(next, created_id);
        info!(
            "event=board_add_parent module=board status=ok revision={} items={}",
            change.revision,
            self.current.len()
        );
        Ok(change)
    }

    /// Appends a new sub-item to `parent_id`.
    pub fn add_sub_item(&mut self, parent_id: &NodeId) -> Result<BoardChange, BoardError> {
        let label = self.config.sub_item_label.clone();
        let next = match engine::add_sub_item(&self.current, parent_id, &mut self.ids, label) {
            Ok(next) => next,
            Err(err) => return Err(self.reject("board_add_sub_item", err.into())),
        };

        let created_id = next
            .find(parent_id)
            .and_then(|parent| parent.sub_items.last())
            .map(|sub_item| sub_item.id.clone());
        let change = self.commit(next, created_id);
        info!(
            "event=board_add_sub_item module=board status=ok revision={} sub_items={}",
            change.revision,
            self.current.total_sub_items()
        );
        Ok(change)
    }

    fn commit(&mut self, next: Hierarchy, created_id: Option<NodeId>) -> BoardChange {
        self.current = next;
        self.revision += 1;
        BoardChange {
            revision: self.revision,
            changed: true,
            created_id,
        }
    }

    fn unchanged(&self) -> BoardChange {
        BoardChange {
            revision: self.revision,
            changed: false,
            created_id: None,
        }
    }

    fn reject(&self, event: &str, err: BoardError) -> BoardError {
        warn!(
            "event={} module=board status=rejected revision={} error={}",
            event, self.revision, err
        );
        err
    }
}

fn scope_label(scope: MoveScope) -> &'static str {
    match scope {
        MoveScope::Parents => "parents",
        MoveScope::SubItems => "sub_items",
    }
}
