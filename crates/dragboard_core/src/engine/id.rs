//! Injectable id generation for newly created nodes.
//!
//! # Invariants
//! - Providers never derive ids from wall-clock time.
//! - One provider instance never returns the same id twice.

use crate::model::item::NodeId;
use uuid::Uuid;

/// Source of fresh ids for the mutation engine.
pub trait IdProvider {
    /// Returns a candidate id for a new top-level item.
    fn next_item_id(&mut self) -> NodeId;
    /// Returns a candidate id for a new sub-item.
    fn next_sub_item_id(&mut self) -> NodeId;
}

impl<P: IdProvider + ?Sized> IdProvider for Box<P> {
    fn next_item_id(&mut self) -> NodeId {
        (**self).next_item_id()
    }

    fn next_sub_item_id(&mut self) -> NodeId {
        (**self).next_sub_item_id()
    }
}

/// Monotonic counter ids: `item-1`, `sub-2`, ...
///
/// The counter is shared between both kinds, so every id a provider hands
/// out is distinct even across levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    prefix: Option<String>,
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts counting at `next` instead of 1.
    pub fn starting_at(next: u64) -> Self {
        Self { prefix: None, next }
    }

    /// Namespaces every id as `{prefix}-item-{n}` / `{prefix}-sub-{n}`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim();
        Self {
            prefix: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            next: 1,
        }
    }

    fn take(&mut self, kind: &str) -> NodeId {
        let value = self.next;
        self.next = self.next.wrapping_add(1);
        match &self.prefix {
            Some(prefix) => NodeId::new(format!("{prefix}-{kind}-{value}")),
            None => NodeId::new(format!("{kind}-{value}")),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIds {
    fn next_item_id(&mut self) -> NodeId {
        self.take("item")
    }

    fn next_sub_item_id(&mut self) -> NodeId {
        self.take("sub")
    }
}

/// Random v4 UUID ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidIds;

impl IdProvider for UuidIds {
    fn next_item_id(&mut self) -> NodeId {
        NodeId::new(Uuid::new_v4().to_string())
    }

    fn next_sub_item_id(&mut self) -> NodeId {
        NodeId::new(Uuid::new_v4().to_string())
    }
}
