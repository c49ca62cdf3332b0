//! Pure board transformation engines.
//!
//! # Responsibility
//! - Compute the next snapshot from a move instruction (`reorder`).
//! - Compute the next snapshot from an append request (`add_parent`,
//!   `add_sub_item`).
//!
//! # Invariants
//! - Every function takes `&Hierarchy` and returns a new snapshot; the input
//!   is never modified.
//! - A failed call produces no snapshot at all, so callers keep their
//!   previous state.
//! - Nothing in this module logs or performs I/O.

use crate::model::item::NodeId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod id;
pub mod instruction;
mod mutation;
mod reorder;

pub use mutation::{add_parent, add_sub_item, MAX_ID_ATTEMPTS};
pub use reorder::reorder;

/// Result type used by engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Names the ordered sequence an index was checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRef {
    /// Top-level item sequence.
    Parents,
    /// Sub-item sequence owned by the given item.
    SubItemsOf(NodeId),
}

impl Display for ListRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parents => write!(f, "parent list"),
            Self::SubItemsOf(id) => write!(f, "sub-items of `{id}`"),
        }
    }
}

/// Caller-contract violations reported by the engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Source or destination index is outside its sequence.
    InvalidIndex {
        list: ListRef,
        index: usize,
        len: usize,
    },
    /// Referenced parent item does not exist.
    UnknownParent(NodeId),
    /// Destination item already owns a sub-item with the moved id.
    SubItemIdConflict {
        parent_id: NodeId,
        sub_item_id: NodeId,
    },
    /// Id provider kept returning ids already taken in the target scope.
    IdCollision(NodeId),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { list, index, len } => {
                write!(f, "index {index} is out of range for {list} (len {len})")
            }
            Self::UnknownParent(id) => write!(f, "parent item not found: {id}"),
            Self::SubItemIdConflict {
                parent_id,
                sub_item_id,
            } => write!(
                f,
                "item `{parent_id}` already owns a sub-item with id `{sub_item_id}`"
            ),
            Self::IdCollision(id) => write!(
                f,
                "id provider returned taken id `{id}` after {MAX_ID_ATTEMPTS} attempts"
            ),
        }
    }
}

impl Error for EngineError {}
