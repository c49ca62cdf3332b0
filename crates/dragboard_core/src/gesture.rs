//! Drag outcome adapter.
//!
//! # Responsibility
//! - Translate a completed drag, as reported by a drop-target based UI, into
//!   a `MoveInstruction`.
//!
//! # Invariants
//! - The top-level list is the droppable named `PARENT_LIST_DROPPABLE_ID`.
//! - Every sub-item list is the droppable named after its owning item id.
//! - A drag with no destination always maps to a no-op instruction, whatever
//!   its source names.

use crate::engine::instruction::{MoveInstruction, SubItemSlot};
use crate::model::item::NodeId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Droppable id of the top-level item list.
pub const PARENT_LIST_DROPPABLE_ID: &str = "droppable";

/// Kind of element that was dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropKind {
    Item,
    SubItem,
}

impl DropKind {
    /// Parses the wire label used by UI hosts (`item|sub_item`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "item" | "parent" => Some(Self::Item),
            "sub_item" | "subitem" | "sub-item" => Some(Self::SubItem),
            _ => None,
        }
    }
}

/// One end of a drag: which list, and which slot inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// Raw result of one finished drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOutcome {
    pub kind: DropKind,
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

/// Drag outcomes that cannot describe a valid move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    /// An item drag touched a list other than the top-level list.
    ForeignDroppable { kind: DropKind, droppable_id: String },
    /// A sub-item drag named the top-level list or a blank list.
    InvalidSubItemList(String),
    /// Kind label is not one of `item|sub_item`.
    UnknownKind(String),
}

impl Display for GestureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ForeignDroppable { kind, droppable_id } => write!(
                f,
                "{kind:?} drag cannot use droppable `{droppable_id}`"
            ),
            Self::InvalidSubItemList(id) => {
                write!(f, "sub-item drag references invalid list `{id}`")
            }
            Self::UnknownKind(value) => write!(f, "unknown drag kind `{value}`"),
        }
    }
}

impl Error for GestureError {}

impl TryFrom<DragOutcome> for MoveInstruction {
    type Error = GestureError;

    fn try_from(value: DragOutcome) -> Result<Self, Self::Error> {
        let Some(destination) = value.destination else {
            // Released outside every list: nothing to validate.
            return Ok(match value.kind {
                DropKind::Item => MoveInstruction::Parents {
                    source_index: value.source.index,
                    destination_index: None,
                },
                DropKind::SubItem => MoveInstruction::SubItems {
                    source: unchecked_slot(value.source),
                    destination: None,
                },
            });
        };

        match value.kind {
            DropKind::Item => {
                ensure_parent_list(value.kind, &value.source)?;
                ensure_parent_list(value.kind, &destination)?;
                Ok(MoveInstruction::parents(value.source.index, destination.index))
            }
            DropKind::SubItem => Ok(MoveInstruction::sub_items(
                sub_item_slot(value.source)?,
                sub_item_slot(destination)?,
            )),
        }
    }
}

fn ensure_parent_list(kind: DropKind, location: &DropLocation) -> Result<(), GestureError> {
    if location.droppable_id == PARENT_LIST_DROPPABLE_ID {
        return Ok(());
    }
    Err(GestureError::ForeignDroppable {
        kind,
        droppable_id: location.droppable_id.clone(),
    })
}

/// Droppable ids are item ids verbatim; only blank names are refused.
fn sub_item_slot(location: DropLocation) -> Result<SubItemSlot, GestureError> {
    if location.droppable_id.trim().is_empty()
        || location.droppable_id == PARENT_LIST_DROPPABLE_ID
    {
        return Err(GestureError::InvalidSubItemList(location.droppable_id));
    }
    Ok(unchecked_slot(location))
}

fn unchecked_slot(location: DropLocation) -> SubItemSlot {
    SubItemSlot {
        parent_id: NodeId::new(location.droppable_id),
        index: location.index,
    }
}
