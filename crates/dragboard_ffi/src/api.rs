//! FFI board API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose board snapshot, add, and move use-cases to Dart via FRB.
//! - Own the process-wide board session behind a mutex.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A failed call returns `ok=false` and leaves the board unchanged.
//! - Ids cross the boundary as plain UTF-8 strings.

use dragboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    sample_board, BoardChange, BoardConfig, BoardError, BoardService, DragOutcome, DropKind,
    DropLocation, GestureError, Hierarchy, IdProvider, Item, NodeId,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};

type Board = BoardService<Box<dyn IdProvider + Send>>;

static BOARD: OnceLock<Mutex<Board>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Sub-item row for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubItemView {
    pub id: String,
    pub content: String,
}

/// Item row with its ordered sub-items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub content: String,
    pub sub_items: Vec<SubItemView>,
}

/// Current board snapshot envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Revision the snapshot belongs to; pass it back with `board_move`.
    pub revision: u64,
    pub items: Vec<ItemView>,
}

/// Generic action response envelope for board commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Whether the board changed.
    pub changed: bool,
    /// Board revision after the call.
    pub revision: u64,
    /// Id created by add operations.
    pub node_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn from_change(change: BoardChange, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed: change.changed,
            revision: change.revision,
            node_id: change.created_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(revision: u64, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            revision,
            node_id: None,
            message: message.into(),
        }
    }
}

/// Returns the current board snapshot.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardView {
    let board = lock_board();
    BoardView {
        revision: board.revision(),
        items: board.snapshot().iter().map(to_item_view).collect(),
    }
}

/// Appends a new parent item.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_parent() -> BoardActionResponse {
    let mut board = lock_board();
    match board.add_parent() {
        Ok(change) => BoardActionResponse::from_change(change, "Parent item added."),
        Err(err) => {
            BoardActionResponse::failure(board.revision(), format!("board_add_parent failed: {err}"))
        }
    }
}

/// Appends a new sub-item to `parent_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_sub_item(parent_id: String) -> BoardActionResponse {
    let mut board = lock_board();
    match board.add_sub_item(&NodeId::new(parent_id)) {
        Ok(change) => BoardActionResponse::from_change(change, "Sub-item added."),
        Err(err) => BoardActionResponse::failure(
            board.revision(),
            format!("board_add_sub_item failed: {err}"),
        ),
    }
}

/// Applies one finished drag.
///
/// Input semantics:
/// - `kind`: `item|sub_item`.
/// - `source_list` / `destination_list`: droppable ids; the top-level list is
///   `droppable`, each sub-item list is named after its parent id verbatim.
/// - `destination_list = None` or `destination_index = None`: released outside
///   any drop target; reported as success without change.
/// - `expected_revision`: revision of the snapshot the drag was computed on.
///
/// # FFI contract
/// - Never panics.
/// - Stale revisions, unknown lists, and out-of-range indices fail with
///   `ok=false` and leave the board untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn board_move(
    kind: String,
    source_list: String,
    source_index: u32,
    destination_list: Option<String>,
    destination_index: Option<u32>,
    expected_revision: Option<u64>,
) -> BoardActionResponse {
    let mut board = lock_board();
    let Some(kind) = DropKind::parse(&kind) else {
        let err = BoardError::Gesture(GestureError::UnknownKind(kind));
        return BoardActionResponse::failure(board.revision(), format!("board_move failed: {err}"));
    };

    let destination = match (destination_list, destination_index) {
        (Some(list), Some(index)) => Some(DropLocation::new(list, index as usize)),
        _ => None,
    };
    let outcome = DragOutcome {
        kind,
        source: DropLocation::new(source_list, source_index as usize),
        destination,
    };

    let result = match expected_revision {
        Some(expected) => board.apply_drag_at(expected, outcome),
        None => board.apply_drag(outcome),
    };
    match result {
        Ok(change) if change.changed => BoardActionResponse::from_change(change, "Moved."),
        Ok(change) => BoardActionResponse::from_change(change, "No change."),
        Err(err) => {
            BoardActionResponse::failure(board.revision(), format!("board_move failed: {err}"))
        }
    }
}

fn lock_board() -> MutexGuard<'static, Board> {
    let cell = BOARD.get_or_init(|| Mutex::new(new_board()));
    // Commits replace the snapshot in one assignment; a poisoned board is still whole.
    cell.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn new_board() -> Board {
    let config = match BoardConfig::from_env().and_then(BoardConfig::validate) {
        Ok(config) => config,
        Err(err) => {
            warn!("event=board_config module=ffi status=fallback error={err}");
            BoardConfig::default()
        }
    };
    let initial = if config.seed_sample {
        sample_board()
    } else {
        Hierarchy::new()
    };
    BoardService::from_config(initial, config)
}

fn to_item_view(item: &Item) -> ItemView {
    ItemView {
        id: item.id.to_string(),
        content: item.content.clone(),
        sub_items: item
            .sub_items
            .iter()
            .map(|sub_item| SubItemView {
                id: sub_item.id.to_string(),
                content: sub_item.content.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        board_add_parent, board_add_sub_item, board_move, board_snapshot, core_version,
        init_logging, ping,
    };
    use dragboard_core::{PARENT_LIST_DROPPABLE_ID, SAMPLE_FIRST_PARENT_ID};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn add_parent_then_sub_items_shows_up_in_snapshot() {
        let parent = board_add_parent();
        assert!(parent.ok, "{}", parent.message);
        let parent_id = parent.node_id.expect("add parent should return node_id");

        let first = board_add_sub_item(parent_id.clone());
        let second = board_add_sub_item(parent_id.clone());
        assert!(first.ok && second.ok);

        let snapshot = board_snapshot();
        let item = snapshot
            .items
            .iter()
            .find(|item| item.id == parent_id)
            .expect("created parent should be in snapshot");
        let ids: Vec<_> = item.sub_items.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![first.node_id.unwrap(), second.node_id.unwrap()]);
    }

    #[test]
    fn move_sub_item_within_own_parent() {
        let parent_id = board_add_parent().node_id.expect("parent id");
        let first = board_add_sub_item(parent_id.clone()).node_id.unwrap();
        let second = board_add_sub_item(parent_id.clone()).node_id.unwrap();

        let response = board_move(
            "sub_item".to_string(),
            parent_id.clone(),
            0,
            Some(parent_id.clone()),
            Some(1),
            None,
        );
        assert!(response.ok, "{}", response.message);
        assert!(response.changed);

        let snapshot = board_snapshot();
        let item = snapshot.items.iter().find(|item| item.id == parent_id).unwrap();
        let ids: Vec<_> = item.sub_items.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn move_without_destination_reports_no_change() {
        let response = board_move(
            "item".to_string(),
            PARENT_LIST_DROPPABLE_ID.to_string(),
            0,
            None,
            None,
            None,
        );
        assert!(response.ok);
        assert!(!response.changed);
        assert_eq!(response.message, "No change.");
    }

    #[test]
    fn add_sub_item_to_unknown_parent_fails() {
        let response = board_add_sub_item("does-not-exist".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("does-not-exist"));
    }

    #[test]
    fn board_starts_from_sample_items() {
        let snapshot = board_snapshot();
        assert!(snapshot
            .items
            .iter()
            .any(|item| item.id == SAMPLE_FIRST_PARENT_ID));
    }

    #[test]
    fn add_sub_item_matches_parent_id_exactly() {
        let parent_id = board_add_parent().node_id.expect("parent id");

        let padded = board_add_sub_item(format!(" {parent_id} "));
        assert!(!padded.ok);

        let exact = board_add_sub_item(parent_id);
        assert!(exact.ok, "{}", exact.message);
    }

    #[test]
    fn move_with_unknown_kind_fails() {
        let response = board_move(
            "folder".to_string(),
            PARENT_LIST_DROPPABLE_ID.to_string(),
            0,
            Some(PARENT_LIST_DROPPABLE_ID.to_string()),
            Some(0),
            None,
        );
        assert!(!response.ok);
        assert!(response.message.contains("folder"));
    }

    #[test]
    fn move_with_stale_revision_fails() {
        let parent_id = board_add_parent().node_id.expect("parent id");
        board_add_sub_item(parent_id.clone());
        let stale = board_snapshot().revision;
        board_add_sub_item(parent_id.clone());

        let response = board_move(
            "sub_item".to_string(),
            parent_id.clone(),
            0,
            Some(parent_id),
            Some(1),
            Some(stale),
        );
        assert!(!response.ok);
        assert!(response.message.contains("revision"));
    }
}
