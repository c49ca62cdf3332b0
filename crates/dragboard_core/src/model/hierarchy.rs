//! Immutable board snapshot.
//!
//! # Responsibility
//! - Hold the ordered item sequence that is the whole board state.
//! - Reject snapshots that break identity invariants on construction.
//!
//! # Invariants
//! - Items are stored behind `Arc`, so snapshots derived from one another
//!   share every item an operation did not touch.
//! - No API hands out mutable access to a stored item.

use crate::model::item::{Item, NodeId};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Identity violations detected while building a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyValidationError {
    /// An item or sub-item id is blank.
    EmptyId,
    /// Two items share one id.
    DuplicateItemId(NodeId),
    /// Two sub-items under the same item share one id.
    DuplicateSubItemId {
        parent_id: NodeId,
        sub_item_id: NodeId,
    },
}

impl Display for HierarchyValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "item and sub-item ids must not be blank"),
            Self::DuplicateItemId(id) => write!(f, "duplicate item id: {id}"),
            Self::DuplicateSubItemId {
                parent_id,
                sub_item_id,
            } => write!(
                f,
                "duplicate sub-item id `{sub_item_id}` under item `{parent_id}`"
            ),
        }
    }
}

impl Error for HierarchyValidationError {}

/// Ordered sequence of items; the entire board state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Item>")]
pub struct Hierarchy {
    items: Vec<Arc<Item>>,
}

impl Hierarchy {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a validated snapshot from owned items.
    ///
    /// # Errors
    /// - `EmptyId` when any id is blank.
    /// - `DuplicateItemId` when two items share an id.
    /// - `DuplicateSubItemId` when one item owns two sub-items with the same id.
    pub fn try_from_items(items: Vec<Item>) -> Result<Self, HierarchyValidationError> {
        validate_items(&items)?;
        Ok(Self {
            items: items.into_iter().map(Arc::new).collect(),
        })
    }

    /// Wraps already-shared items without re-validating.
    ///
    /// Callers must preserve the identity invariants themselves.
    pub(crate) fn from_shared(items: Vec<Arc<Item>>) -> Self {
        Self { items }
    }

    /// Shared item handles in board order.
    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().map(|item| item.as_ref())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index).map(|item| item.as_ref())
    }

    /// Looks up one item by id.
    pub fn find(&self, id: &NodeId) -> Option<&Item> {
        self.iter().find(|item| &item.id == id)
    }

    pub fn position_of(&self, id: &NodeId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.position_of(id).is_some()
    }

    /// Returns whether any item owns a sub-item with `id`.
    pub fn contains_sub_item(&self, id: &NodeId) -> bool {
        self.iter().any(|item| item.has_sub_item(id))
    }

    /// Counts sub-items across every item.
    pub fn total_sub_items(&self) -> usize {
        self.items.iter().map(|item| item.sub_items.len()).sum()
    }

    /// Item ids in board order.
    pub fn ids(&self) -> Vec<&NodeId> {
        self.items.iter().map(|item| &item.id).collect()
    }

    /// Clones the snapshot into plain owned items.
    pub fn to_items(&self) -> Vec<Item> {
        self.iter().cloned().collect()
    }
}

impl TryFrom<Vec<Item>> for Hierarchy {
    type Error = HierarchyValidationError;

    fn try_from(value: Vec<Item>) -> Result<Self, Self::Error> {
        Self::try_from_items(value)
    }
}

impl Serialize for Hierarchy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

fn validate_items(items: &[Item]) -> Result<(), HierarchyValidationError> {
    let mut item_ids = HashSet::with_capacity(items.len());
    for item in items {
        if item.id.is_blank() {
            return Err(HierarchyValidationError::EmptyId);
        }
        if !item_ids.insert(&item.id) {
            return Err(HierarchyValidationError::DuplicateItemId(item.id.clone()));
        }

        let mut sub_item_ids = HashSet::with_capacity(item.sub_items.len());
        for sub_item in &item.sub_items {
            if sub_item.id.is_blank() {
                return Err(HierarchyValidationError::EmptyId);
            }
            if !sub_item_ids.insert(&sub_item.id) {
                return Err(HierarchyValidationError::DuplicateSubItemId {
                    parent_id: item.id.clone(),
                    sub_item_id: sub_item.id.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_items, HierarchyValidationError};
    use crate::model::item::{Item, SubItem};

    #[test]
    fn validate_allows_sub_item_id_reuse_across_items() {
        let items = vec![
            Item::with_sub_items("1", "One", vec![SubItem::new("x", "x")]),
            Item::with_sub_items("2", "Two", vec![SubItem::new("x", "x")]),
        ];
        assert!(validate_items(&items).is_ok());
    }

    #[test]
    fn validate_rejects_whitespace_only_sub_item_id() {
        let items = vec![Item::with_sub_items(
            "1",
            "One",
            vec![SubItem::new("  ", "blank")],
        )];
        assert_eq!(
            validate_items(&items).unwrap_err(),
            HierarchyValidationError::EmptyId
        );
    }
}
