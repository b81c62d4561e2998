use super::*;
use face_divider::{AppCommand, AppController, AppIntent, DivisionMode};

fn divide_with_grid(controller: &mut AppController, state: &mut face_divider::AppState) {
    start_mode(controller, state, DivisionMode::Grid);
    press(controller, state, [0.0, 0.0, 0.0]);
    press(controller, state, [10.0, 0.0, 0.0]);
    press(controller, state, [0.0, 5.0, 0.0]);
}

#[test]
fn test_undo_and_redo_restore_whole_division() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    divide_with_grid(&mut controller, &mut state);
    assert_eq!(state.edge_count(), 5);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.edge_count(), 0);
    assert_eq!(
        state.ui.status_text,
        "Rückgängig: Flächenteilung: Rechteckraster"
    );
    assert!(state.can_redo());

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.edge_count(), 5);
    assert_eq!(
        state.ui.status_text,
        "Wiederhergestellt: Flächenteilung: Rechteckraster"
    );
}

#[test]
fn test_undo_during_pending_input_cancels_tool_first() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    divide_with_grid(&mut controller, &mut state);

    start_mode(&mut controller, &mut state, DivisionMode::Parallel);
    press(&mut controller, &mut state, [0.0, 0.0, 0.0]);
    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(state.session.is_idle());
    assert_eq!(state.edge_count(), 0);
    let entries = state.command_log.entries();
    assert_eq!(
        &entries[entries.len() - 2..],
        &[AppCommand::DivisionCancel, AppCommand::Undo]
    );
}

#[test]
fn test_cancelled_division_leaves_no_undo_step() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    start_mode(&mut controller, &mut state, DivisionMode::Grid);
    press(&mut controller, &mut state, [0.0, 0.0, 0.0]);
    press(&mut controller, &mut state, [10.0, 0.0, 0.0]);
    send(&mut controller, &mut state, AppIntent::CancelRequested);

    assert!(!state.can_undo());
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.edge_count(), 0);
}
