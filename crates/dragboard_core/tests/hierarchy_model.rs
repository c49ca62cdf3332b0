use dragboard_core::{Hierarchy, HierarchyValidationError, Item, NodeId, SubItem};

#[test]
fn try_from_items_keeps_board_order() {
    let board = Hierarchy::try_from_items(vec![
        Item::new("b", "B"),
        Item::new("a", "A"),
        Item::new("c", "C"),
    ])
    .unwrap();

    let ids: Vec<_> = board.ids().into_iter().map(NodeId::as_str).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
    assert_eq!(board.position_of(&"c".into()), Some(2));
    assert!(board.find(&"z".into()).is_none());
}

#[test]
fn try_from_items_rejects_duplicate_item_ids() {
    let err = Hierarchy::try_from_items(vec![Item::new("1", "One"), Item::new("1", "Again")])
        .unwrap_err();

    assert_eq!(err, HierarchyValidationError::DuplicateItemId("1".into()));
}

#[test]
fn try_from_items_rejects_duplicate_sub_item_ids_within_one_item() {
    let err = Hierarchy::try_from_items(vec![Item::with_sub_items(
        "1",
        "One",
        vec![SubItem::new("x", "first"), SubItem::new("x", "second")],
    )])
    .unwrap_err();

    assert_eq!(
        err,
        HierarchyValidationError::DuplicateSubItemId {
            parent_id: "1".into(),
            sub_item_id: "x".into(),
        }
    );
}

#[test]
fn try_from_items_rejects_blank_item_id() {
    let err = Hierarchy::try_from_items(vec![Item::new("", "Nameless")]).unwrap_err();
    assert_eq!(err, HierarchyValidationError::EmptyId);
}

#[test]
fn empty_board_has_no_sub_items() {
    let board = Hierarchy::new();
    assert!(board.is_empty());
    assert_eq!(board.total_sub_items(), 0);
    assert!(board.get(0).is_none());
}

#[test]
fn snapshot_serializes_as_item_array() {
    let board = Hierarchy::try_from_items(vec![Item::with_sub_items(
        "1",
        "First",
        vec![SubItem::new("1a", "alpha")],
    )])
    .unwrap();

    let json = serde_json::to_value(&board).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {
                "id": "1",
                "content": "First",
                "sub_items": [{ "id": "1a", "content": "alpha" }]
            }
        ])
    );

    let decoded: Hierarchy = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, board);
}

#[test]
fn deserialize_defaults_missing_sub_items() {
    let board: Hierarchy =
        serde_json::from_str(r#"[{ "id": "1", "content": "Lonely" }]"#).unwrap();

    assert!(board.get(0).unwrap().sub_items.is_empty());
}

#[test]
fn deserialize_rejects_invalid_snapshot() {
    let value = serde_json::json!([
        { "id": "1", "content": "One", "sub_items": [] },
        { "id": "1", "content": "Two", "sub_items": [] }
    ]);

    let err = serde_json::from_value::<Hierarchy>(value).unwrap_err();
    assert!(err.to_string().contains("duplicate item id"));
}

#[test]
fn contains_sub_item_searches_every_item() {
    let board = Hierarchy::try_from_items(vec![
        Item::new("1", "Empty"),
        Item::with_sub_items("2", "Second", vec![SubItem::new("2a", "gamma")]),
    ])
    .unwrap();

    assert!(board.contains_sub_item(&"2a".into()));
    assert!(!board.contains_sub_item(&"1".into()));
}
