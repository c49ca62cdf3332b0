//! Item and sub-item records.
//!
//! # Responsibility
//! - Define the parent-level `Item` and leaf-level `SubItem` shapes.
//! - Provide the opaque `NodeId` identity shared by both levels.
//!
//! # Invariants
//! - `id` is assigned once at creation and never rewritten.
//! - `content` is opaque to the engine; only the rendering side reads it.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque identifier for items and sub-items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns whether the id is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Leaf entity owned by exactly one `Item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    pub id: NodeId,
    pub content: String,
}

impl SubItem {
    pub fn new(id: impl Into<NodeId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Parent-level entity with an ordered list of sub-items.
///
/// Position inside `sub_items` is the only record of sub-item order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: NodeId,
    pub content: String,
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
}

impl Item {
    /// Creates an item with no sub-items.
    pub fn new(id: impl Into<NodeId>, content: impl Into<String>) -> Self {
        Self::with_sub_items(id, content, Vec::new())
    }

    pub fn with_sub_items(
        id: impl Into<NodeId>,
        content: impl Into<String>,
        sub_items: Vec<SubItem>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sub_items,
        }
    }

    /// Returns the index of the sub-item with `id`, if owned by this item.
    pub fn position_of_sub_item(&self, id: &NodeId) -> Option<usize> {
        self.sub_items.iter().position(|sub_item| &sub_item.id == id)
    }

    pub fn has_sub_item(&self, id: &NodeId) -> bool {
        self.position_of_sub_item(id).is_some()
    }

    /// Builds a copy of this item that owns `sub_items` instead.
    ///
    /// Identity and label carry over unchanged.
    pub(crate) fn replace_sub_items(&self, sub_items: Vec<SubItem>) -> Self {
        Self {
            id: self.id.clone(),
            content: self.content.clone(),
            sub_items,
        }
    }
}
