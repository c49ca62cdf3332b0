//! Splice-based reorder engine.

use crate::engine::instruction::{MoveInstruction, SubItemSlot};
use crate::engine::{EngineError, EngineResult, ListRef};
use crate::model::hierarchy::Hierarchy;
use std::sync::Arc;

/// Computes the snapshot that results from applying `instruction`.
///
/// # Contract
/// - No destination: returns the input unchanged (every item shared).
/// - `Parents`: splice one item out of the top-level list and back in at
///   `destination_index` of the shortened list.
/// - `SubItems` within one item: the same splice on that item's sub-items;
///   all other items are shared untouched.
/// - `SubItems` across items: the sub-item leaves its source list and lands
///   at `destination.index` of the destination list, keeping its id/content.
///
/// # Errors
/// - `UnknownParent` when either parent id is missing.
/// - `InvalidIndex` when an index is out of range for its list.
/// - `SubItemIdConflict` when the destination item already owns the moved id.
pub fn reorder(hierarchy: &Hierarchy, instruction: &MoveInstruction) -> EngineResult<Hierarchy> {
    match instruction {
        MoveInstruction::Parents {
            destination_index: None,
            ..
        }
        | MoveInstruction::SubItems {
            destination: None, ..
        } => Ok(hierarchy.clone()),
        MoveInstruction::Parents {
            source_index,
            destination_index: Some(destination_index),
        } => {
            let items = splice(
                hierarchy.items(),
                *source_index,
                *destination_index,
                ListRef::Parents,
            )?;
            Ok(Hierarchy::from_shared(items))
        }
        MoveInstruction::SubItems {
            source,
            destination: Some(destination),
        } if source.parent_id == destination.parent_id => {
            reorder_within_parent(hierarchy, source, destination.index)
        }
        MoveInstruction::SubItems {
            source,
            destination: Some(destination),
        } => move_between_parents(hierarchy, source, destination),
    }
}

fn reorder_within_parent(
    hierarchy: &Hierarchy,
    source: &SubItemSlot,
    destination_index: usize,
) -> EngineResult<Hierarchy> {
    let position = parent_position(hierarchy, source)?;
    let parent = &hierarchy.items()[position];
    let sub_items = splice(
        &parent.sub_items,
        source.index,
        destination_index,
        ListRef::SubItemsOf(parent.id.clone()),
    )?;

    let mut items = hierarchy.items().to_vec();
    items[position] = Arc::new(parent.replace_sub_items(sub_items));
    Ok(Hierarchy::from_shared(items))
}

fn move_between_parents(
    hierarchy: &Hierarchy,
    source: &SubItemSlot,
    destination: &SubItemSlot,
) -> EngineResult<Hierarchy> {
    let source_position = parent_position(hierarchy, source)?;
    let destination_position = parent_position(hierarchy, destination)?;
    let source_parent = &hierarchy.items()[source_position];
    let destination_parent = &hierarchy.items()[destination_position];

    let source_len = source_parent.sub_items.len();
    if source.index >= source_len {
        return Err(EngineError::InvalidIndex {
            list: ListRef::SubItemsOf(source_parent.id.clone()),
            index: source.index,
            len: source_len,
        });
    }
    // Destination list loses nothing, so one past its end is a valid slot.
    let destination_len = destination_parent.sub_items.len();
    if destination.index > destination_len {
        return Err(EngineError::InvalidIndex {
            list: ListRef::SubItemsOf(destination_parent.id.clone()),
            index: destination.index,
            len: destination_len,
        });
    }

    let mut source_sub_items = source_parent.sub_items.clone();
    let moved = source_sub_items.remove(source.index);
    if destination_parent.has_sub_item(&moved.id) {
        return Err(EngineError::SubItemIdConflict {
            parent_id: destination_parent.id.clone(),
            sub_item_id: moved.id,
        });
    }

    let mut destination_sub_items = destination_parent.sub_items.clone();
    destination_sub_items.insert(destination.index, moved);

    let mut items = hierarchy.items().to_vec();
    items[source_position] = Arc::new(source_parent.replace_sub_items(source_sub_items));
    items[destination_position] =
        Arc::new(destination_parent.replace_sub_items(destination_sub_items));
    Ok(Hierarchy::from_shared(items))
}

fn parent_position(hierarchy: &Hierarchy, slot: &SubItemSlot) -> EngineResult<usize> {
    hierarchy
        .position_of(&slot.parent_id)
        .ok_or_else(|| EngineError::UnknownParent(slot.parent_id.clone()))
}

/// Removes `from` and re-inserts it at `to` of the shortened list.
///
/// Both indices must be below `list.len()`: the post-removal list has
/// `len - 1` elements, so its last insert slot is `len - 1`.
fn splice<T: Clone>(list: &[T], from: usize, to: usize, list_ref: ListRef) -> EngineResult<Vec<T>> {
    let len = list.len();
    if from >= len {
        return Err(EngineError::InvalidIndex {
            list: list_ref,
            index: from,
            len,
        });
    }
    if to >= len {
        return Err(EngineError::InvalidIndex {
            list: list_ref,
            index: to,
            len,
        });
    }

    let mut result = list.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    Ok(result)
}
