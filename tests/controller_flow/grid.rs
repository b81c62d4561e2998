use super::*;
use face_divider::{AppController, AppIntent, DivisionMode, SessionPhase};
use std::sync::Arc;

#[test]
fn test_grid_on_square_inserts_five_edges() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    start_mode(&mut controller, &mut state, DivisionMode::Grid);
    assert!(matches!(state.session, SessionPhase::Dividing(_)));

    press(&mut controller, &mut state, [0.0, 0.0, 0.0]);
    move_to(&mut controller, &mut state, [10.0, 0.0, 0.0]);
    press(&mut controller, &mut state, [10.0, 0.0, 0.0]);
    move_to(&mut controller, &mut state, [3.0, 5.0, 0.0]);

    // Vorschau: Rechteck (4) plus Raster (5)
    assert_eq!(state.ui.preview.segments.len(), 9);
    let scene = controller.build_render_scene(&state);
    assert!(scene.has_preview());

    press(&mut controller, &mut state, [3.0, 5.0, 0.0]);

    assert_eq!(state.edge_count(), 5);
    assert!(state.session.is_idle());
    assert_eq!(
        state.ui.status_text,
        "Flächenteilung: Rechteckraster: 5 Kanten eingefügt"
    );
    let report = state.last_commit.as_ref().expect("Bericht vorhanden");
    assert_eq!(report.created_edge_ids.len(), 5);
    assert!(report.failed_segments.is_empty());
}

#[test]
fn test_grid_width_can_be_typed() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    start_mode(&mut controller, &mut state, DivisionMode::Grid);

    press(&mut controller, &mut state, [0.0, 0.0, 0.0]);
    press(&mut controller, &mut state, [10.0, 0.0, 0.0]);
    type_text(&mut controller, &mut state, "5");

    assert_eq!(state.edge_count(), 5);
}

#[test]
fn test_grid_on_deleted_face_notifies() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    let face_id = start_on_first_face(&mut controller, &mut state);

    Arc::make_mut(&mut state.model).remove_face(face_id);
    send(
        &mut controller,
        &mut state,
        AppIntent::ModeSelected {
            mode: DivisionMode::Grid,
        },
    );

    assert!(state.session.is_idle());
    assert_eq!(
        state.ui.notifications,
        vec!["Die gewählte Fläche ist nicht mehr gültig.".to_string()]
    );
}

#[test]
fn test_reactivation_checks_face_again() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    start_mode(&mut controller, &mut state, DivisionMode::Grid);
    press(&mut controller, &mut state, [0.0, 0.0, 0.0]);

    let face_id = first_face(&state);
    Arc::make_mut(&mut state.model).remove_face(face_id);
    send(&mut controller, &mut state, AppIntent::ToolActivated);

    assert!(state.session.is_idle());
    assert_eq!(state.ui.notifications.len(), 1);
    assert_eq!(state.edge_count(), 0);
}
