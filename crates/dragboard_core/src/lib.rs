//! Core board logic for DragBoard.
//! This crate owns the item hierarchy and every rule for reordering it.

pub mod config;
pub mod engine;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{BoardConfig, ConfigError, IdStrategy};
pub use engine::id::{IdProvider, SequentialIds, UuidIds};
pub use engine::instruction::{MoveInstruction, MoveScope, SubItemSlot};
pub use engine::{
    add_parent, add_sub_item, reorder, EngineError, EngineResult, ListRef, MAX_ID_ATTEMPTS,
};
pub use gesture::{DragOutcome, DropKind, DropLocation, GestureError, PARENT_LIST_DROPPABLE_ID};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::hierarchy::{Hierarchy, HierarchyValidationError};
pub use model::item::{Item, NodeId, SubItem};
pub use model::sample::{sample_board, SAMPLE_FIRST_PARENT_ID};
pub use service::board_service::{BoardChange, BoardError, BoardService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
