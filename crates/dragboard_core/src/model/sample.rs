//! Built-in starter board.

use crate::model::hierarchy::Hierarchy;
use crate::model::item::{Item, SubItem};
use std::sync::Arc;

/// Id of the first sample item; the default target for quick sub-item adds.
pub const SAMPLE_FIRST_PARENT_ID: &str = "1-asd";

/// Returns the three-column board a fresh UI session starts with.
pub fn sample_board() -> Hierarchy {
    let items = vec![
        Item::with_sub_items(
            SAMPLE_FIRST_PARENT_ID,
            "Parent 1",
            vec![
                SubItem::new("1-sub-a", "Sub 1a"),
                SubItem::new("1-sub-b", "Sub 1b"),
            ],
        ),
        Item::with_sub_items(
            "2-asd",
            "Parent 2",
            vec![SubItem::new("2-sub-a", "Sub 2a")],
        ),
        Item::new("3-asd", "Parent 3"),
    ];
    Hierarchy::from_shared(items.into_iter().map(Arc::new).collect())
}
