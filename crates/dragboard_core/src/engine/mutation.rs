//! Append-only mutation engine.

use crate::engine::id::IdProvider;
use crate::engine::{EngineError, EngineResult};
use crate::model::hierarchy::Hierarchy;
use crate::model::item::{Item, NodeId, SubItem};
use std::sync::Arc;

/// Upper bound on id-provider calls for one insertion.
pub const MAX_ID_ATTEMPTS: usize = 64;

/// Appends a new empty item to the end of the board.
///
/// # Errors
/// - `IdCollision` when the provider cannot produce an unused item id.
pub fn add_parent(
    hierarchy: &Hierarchy,
    ids: &mut dyn IdProvider,
    content: impl Into<String>,
) -> EngineResult<Hierarchy> {
    let id = fresh_id(|| ids.next_item_id(), |candidate| hierarchy.contains(candidate))?;

    let mut items = hierarchy.items().to_vec();
    items.push(Arc::new(Item::new(id, content)));
    Ok(Hierarchy::from_shared(items))
}

/// Appends a new sub-item to the end of `parent_id`'s sub-items.
///
/// # Errors
/// - `UnknownParent` when no item has `parent_id`; no id is drawn.
/// - `IdCollision` when the provider cannot produce a sub-item id unused on
///   the whole board.
pub fn add_sub_item(
    hierarchy: &Hierarchy,
    parent_id: &NodeId,
    ids: &mut dyn IdProvider,
    content: impl Into<String>,
) -> EngineResult<Hierarchy> {
    let position = hierarchy
        .position_of(parent_id)
        .ok_or_else(|| EngineError::UnknownParent(parent_id.clone()))?;
    let parent = &hierarchy.items()[position];

    // Fresh sub-item ids are unique across the whole board, not just `parent`.
    let id = fresh_id(
        || ids.next_sub_item_id(),
        |candidate| hierarchy.contains_sub_item(candidate),
    )?;

    let mut sub_items = parent.sub_items.clone();
    sub_items.push(SubItem::new(id, content));

    let mut items = hierarchy.items().to_vec();
    items[position] = Arc::new(parent.replace_sub_items(sub_items));
    Ok(Hierarchy::from_shared(items))
}

fn fresh_id(
    mut next: impl FnMut() -> NodeId,
    is_taken: impl Fn(&NodeId) -> bool,
) -> EngineResult<NodeId> {
    let mut last = NodeId::new(String::new());
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = next();
        if !candidate.is_blank() && !is_taken(&candidate) {
            return Ok(candidate);
        }
        last = candidate;
    }
    Err(EngineError::IdCollision(last))
}
