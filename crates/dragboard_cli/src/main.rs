//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dragboard_core` linkage.
//! - Replay a fixed session on the sample board and print each snapshot as JSON.
//! - Keep output deterministic for quick local sanity checks.

use dragboard_core::{
    sample_board, BoardConfig, BoardError, BoardService, DragOutcome, DropKind, DropLocation,
    MoveInstruction, SequentialIds, SubItemSlot, PARENT_LIST_DROPPABLE_ID,
    SAMPLE_FIRST_PARENT_ID,
};
use std::process::ExitCode;

type Session = BoardService<SequentialIds>;

fn main() -> ExitCode {
    println!("dragboard_core ping={}", dragboard_core::ping());
    println!("dragboard_core version={}", dragboard_core::core_version());

    let mut session =
        BoardService::new(sample_board(), SequentialIds::new(), BoardConfig::default());
    print_snapshot("initial", &session);

    match replay(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("board session failed at revision {}: {err}", session.revision());
            ExitCode::FAILURE
        }
    }
}

fn replay(session: &mut Session) -> Result<(), BoardError> {
    let created = session.add_parent()?;
    print_snapshot("add_parent", session);

    if let Some(parent_id) = created.created_id {
        session.add_sub_item(&parent_id)?;
        print_snapshot("add_sub_item", session);
    }

    session.apply_move(&MoveInstruction::parents(0, 2))?;
    print_snapshot("move_parent", session);

    session.apply_move(&MoveInstruction::sub_items(
        SubItemSlot::new(SAMPLE_FIRST_PARENT_ID, 0),
        SubItemSlot::new(SAMPLE_FIRST_PARENT_ID, 1),
    ))?;
    print_snapshot("move_sub_item_same_parent", session);

    session.apply_drag(DragOutcome {
        kind: DropKind::SubItem,
        source: DropLocation::new(SAMPLE_FIRST_PARENT_ID, 1),
        destination: Some(DropLocation::new("2-asd", 0)),
    })?;
    print_snapshot("move_sub_item_across_parents", session);

    let change = session.apply_drag(DragOutcome {
        kind: DropKind::Item,
        source: DropLocation::new(PARENT_LIST_DROPPABLE_ID, 0),
        destination: None,
    })?;
    println!("released_outside changed={} revision={}", change.changed, change.revision);
    Ok(())
}

fn print_snapshot(step: &str, session: &Session) {
    match serde_json::to_string(session.snapshot()) {
        Ok(json) => println!("{step} revision={} board={json}", session.revision()),
        Err(err) => eprintln!("{step} snapshot could not be encoded: {err}"),
    }
}
