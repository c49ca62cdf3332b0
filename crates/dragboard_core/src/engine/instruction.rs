//! Move instruction values.
//!
//! One instruction describes one completed drag. It is plain data: the
//! gesture side builds it, the reorder engine consumes it.

use crate::model::item::NodeId;
use serde::{Deserialize, Serialize};

/// Which ordered sequence a move acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveScope {
    Parents,
    SubItems,
}

/// Position inside one item's sub-item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItemSlot {
    pub parent_id: NodeId,
    pub index: usize,
}

impl SubItemSlot {
    pub fn new(parent_id: impl Into<NodeId>, index: usize) -> Self {
        Self {
            parent_id: parent_id.into(),
            index,
        }
    }
}

/// A single reorder request.
///
/// `None` destinations mean the drag was released outside every drop target.
/// Destination indices use splice semantics: they address the sequence after
/// the moved element has been removed from its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum MoveInstruction {
    Parents {
        source_index: usize,
        destination_index: Option<usize>,
    },
    SubItems {
        source: SubItemSlot,
        destination: Option<SubItemSlot>,
    },
}

impl MoveInstruction {
    /// Moves one item within the top-level list.
    pub fn parents(source_index: usize, destination_index: usize) -> Self {
        Self::Parents {
            source_index,
            destination_index: Some(destination_index),
        }
    }

    /// Moves one sub-item, possibly into another item.
    pub fn sub_items(source: SubItemSlot, destination: SubItemSlot) -> Self {
        Self::SubItems {
            source,
            destination: Some(destination),
        }
    }

    pub fn scope(&self) -> MoveScope {
        match self {
            Self::Parents { .. } => MoveScope::Parents,
            Self::SubItems { .. } => MoveScope::SubItems,
        }
    }

    /// Returns whether the instruction has no destination.
    pub fn is_no_op(&self) -> bool {
        match self {
            Self::Parents {
                destination_index, ..
            } => destination_index.is_none(),
            Self::SubItems { destination, .. } => destination.is_none(),
        }
    }

    /// Returns whether a sub-item move crosses into another item.
    pub fn crosses_parents(&self) -> bool {
        match self {
            Self::Parents { .. } => false,
            Self::SubItems {
                source,
                destination: Some(destination),
            } => source.parent_id != destination.parent_id,
            Self::SubItems {
                destination: None, ..
            } => false,
        }
    }
}
