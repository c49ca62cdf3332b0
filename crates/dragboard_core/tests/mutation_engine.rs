use dragboard_core::{
    add_parent, add_sub_item, reorder, EngineError, Hierarchy, IdProvider, Item, MoveInstruction,
    NodeId, SequentialIds, SubItem, SubItemSlot, UuidIds,
};
use std::sync::Arc;

fn sample() -> Hierarchy {
    Hierarchy::try_from_items(vec![
        Item::with_sub_items(
            "1",
            "First",
            vec![SubItem::new("1a", "alpha"), SubItem::new("1b", "beta")],
        ),
        Item::with_sub_items("2", "Second", vec![SubItem::new("2a", "gamma")]),
    ])
    .unwrap()
}

/// Replays a fixed list of ids, then repeats the last one.
struct ScriptedIds {
    ids: Vec<&'static str>,
    cursor: usize,
}

impl ScriptedIds {
    fn new(ids: Vec<&'static str>) -> Self {
        Self { ids, cursor: 0 }
    }

    fn take(&mut self) -> NodeId {
        let index = self.cursor.min(self.ids.len() - 1);
        self.cursor += 1;
        NodeId::from(self.ids[index])
    }
}

impl IdProvider for ScriptedIds {
    fn next_item_id(&mut self) -> NodeId {
        self.take()
    }

    fn next_sub_item_id(&mut self) -> NodeId {
        self.take()
    }
}

#[test]
fn add_parent_appends_empty_item_with_label() {
    let board = sample();
    let mut ids = SequentialIds::new();

    let next = add_parent(&board, &mut ids, "New Parent Item").unwrap();

    assert_eq!(next.len(), board.len() + 1);
    let created = next.get(2).unwrap();
    assert_eq!(created.id, "item-1");
    assert_eq!(created.content, "New Parent Item");
    assert!(created.sub_items.is_empty());
}

#[test]
fn add_parent_keeps_existing_items_shared() {
    let board = sample();
    let mut ids = SequentialIds::new();

    let next = add_parent(&board, &mut ids, "New").unwrap();

    assert!(Arc::ptr_eq(&board.items()[0], &next.items()[0]));
    assert!(Arc::ptr_eq(&board.items()[1], &next.items()[1]));
    assert_eq!(board.len(), 2);
}

#[test]
fn add_parent_skips_ids_already_on_board() {
    let board = Hierarchy::try_from_items(vec![Item::new("item-1", "Existing")]).unwrap();
    let mut ids = SequentialIds::new();

    let next = add_parent(&board, &mut ids, "New").unwrap();

    assert_eq!(next.get(1).unwrap().id, "item-2");
}

#[test]
fn add_parent_fails_when_provider_only_repeats_taken_id() {
    let board = sample();
    let mut ids = ScriptedIds::new(vec!["1"]);

    let err = add_parent(&board, &mut ids, "New").unwrap_err();

    assert_eq!(err, EngineError::IdCollision("1".into()));
}

#[test]
fn add_sub_item_appends_to_matching_parent_only() {
    let board = sample();
    let mut ids = SequentialIds::new();

    let next = add_sub_item(&board, &"2".into(), &mut ids, "New SubItem").unwrap();

    let parent = next.find(&"2".into()).unwrap();
    assert_eq!(parent.sub_items.len(), 2);
    assert_eq!(parent.sub_items[0].id, "2a");
    assert_eq!(parent.sub_items[1], SubItem::new("sub-1", "New SubItem"));
    assert!(Arc::ptr_eq(&board.items()[0], &next.items()[0]));
    assert_eq!(next.total_sub_items(), board.total_sub_items() + 1);
}

#[test]
fn add_sub_item_to_unknown_parent_is_rejected_without_drawing_an_id() {
    let board = sample();
    let mut ids = SequentialIds::new();

    let err = add_sub_item(&board, &"does-not-exist".into(), &mut ids, "New").unwrap_err();

    assert_eq!(err, EngineError::UnknownParent("does-not-exist".into()));
    assert_eq!(ids.next_sub_item_id(), "sub-1");
    assert_eq!(board, sample());
}

#[test]
fn add_sub_item_skips_id_used_under_another_parent() {
    let board = sample();
    let mut ids = ScriptedIds::new(vec!["2a", "1c"]);

    let next = add_sub_item(&board, &"1".into(), &mut ids, "New").unwrap();

    let parent = next.find(&"1".into()).unwrap();
    assert_eq!(parent.sub_items[2].id, "1c");
}

#[test]
fn added_sub_item_can_later_move_into_any_parent() {
    let board = Hierarchy::try_from_items(vec![
        Item::with_sub_items("A", "Seeded", vec![SubItem::new("sub-1", "seed")]),
        Item::new("B", "Empty"),
    ])
    .unwrap();
    let mut ids = SequentialIds::new();

    let with_sub_item = add_sub_item(&board, &"B".into(), &mut ids, "New").unwrap();
    assert_eq!(with_sub_item.find(&"B".into()).unwrap().sub_items[0].id, "sub-2");

    let moved = reorder(
        &with_sub_item,
        &MoveInstruction::sub_items(SubItemSlot::new("A", 0), SubItemSlot::new("B", 0)),
    )
    .unwrap();

    let ids: Vec<_> = moved
        .find(&"B".into())
        .unwrap()
        .sub_items
        .iter()
        .map(|sub_item| sub_item.id.as_str())
        .collect();
    assert_eq!(ids, vec!["sub-1", "sub-2"]);
    assert!(moved.find(&"A".into()).unwrap().sub_items.is_empty());
}

#[test]
fn add_sub_item_skips_ids_taken_in_same_parent() {
    let board = sample();
    let mut ids = ScriptedIds::new(vec!["1a", "1b", "1c"]);

    let next = add_sub_item(&board, &"1".into(), &mut ids, "New").unwrap();

    assert_eq!(next.find(&"1".into()).unwrap().sub_items[2].id, "1c");
}

#[test]
fn rapid_insertions_never_collide() {
    let mut board = Hierarchy::new();
    let mut ids = UuidIds;

    for _ in 0..50 {
        board = add_parent(&board, &mut ids, "New").unwrap();
    }
    let parent_id = board.get(0).unwrap().id.clone();
    for _ in 0..50 {
        board = add_sub_item(&board, &parent_id, &mut ids, "New").unwrap();
    }

    let items: Vec<Item> = board.to_items();
    assert!(Hierarchy::try_from_items(items).is_ok());
    assert_eq!(board.len(), 50);
    assert_eq!(board.total_sub_items(), 50);
}

#[test]
fn insertions_compose_with_reorder() {
    let board = sample();
    let mut ids = SequentialIds::new();

    let with_parent = add_parent(&board, &mut ids, "Third").unwrap();
    let new_parent_id = with_parent.get(2).unwrap().id.clone();
    let with_sub_item = add_sub_item(&with_parent, &new_parent_id, &mut ids, "leaf").unwrap();
    let moved = reorder(
        &with_sub_item,
        &MoveInstruction::sub_items(
            SubItemSlot::new(new_parent_id.clone(), 0),
            SubItemSlot::new("1", 0),
        ),
    )
    .unwrap();

    let first = moved.find(&"1".into()).unwrap();
    assert_eq!(first.sub_items[0].id, "sub-2");
    assert_eq!(first.sub_items[0].content, "leaf");
    assert!(moved.find(&new_parent_id).unwrap().sub_items.is_empty());
}
