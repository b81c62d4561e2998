use super::*;
use approx::assert_relative_eq;
use face_divider::{AppController, AppIntent, DivisionMode, PointClassification};

#[test]
fn test_parallel_lines_across_square() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    start_mode(&mut controller, &mut state, DivisionMode::Parallel);

    press(&mut controller, &mut state, [0.0, 0.0, 0.0]);
    move_to(&mut controller, &mut state, [4.0, 0.0, 0.0]);
    press(&mut controller, &mut state, [5.0, 0.0, 0.0]);
    move_to(&mut controller, &mut state, [3.0, 1.0, 0.0]);
    assert!(!state.ui.preview.segments.is_empty());
    press(&mut controller, &mut state, [3.0, 2.0, 0.0]);

    assert!(state.session.is_idle());
    assert!(state.ui.preview.segments.is_empty());
    assert_eq!(state.edge_count(), 6);
    let mut ys: Vec<f64> = state.model.edges().iter().map(|edge| edge.start.y).collect();
    ys.sort_by(f64::total_cmp);
    for (y, expected) in ys.iter().zip([0.0, 2.0, 4.0, 6.0, 8.0, 10.0]) {
        assert_relative_eq!(*y, expected, epsilon = 1e-9);
    }
    for edge in state.model.edges() {
        assert_relative_eq!(edge.start.y, edge.end.y, epsilon = 1e-9);
        assert_relative_eq!((edge.end - edge.start).length(), 10.0, epsilon = 1e-9);
    }
    assert_eq!(
        state.ui.status_text,
        "Flächenteilung: Parallele Linien: 6 Kanten eingefügt"
    );
    assert!(state.can_undo());
}

#[test]
fn test_parallel_lines_skip_the_hole() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![square_with_hole()]);
    start_mode(&mut controller, &mut state, DivisionMode::Parallel);

    press(&mut controller, &mut state, [0.0, 0.0, 0.0]);
    press(&mut controller, &mut state, [5.0, 0.0, 0.0]);
    press(&mut controller, &mut state, [0.0, 2.0, 0.0]);

    // y=4 und y=6 werden vom Loch geteilt
    assert_eq!(state.edge_count(), 8);
    let face = state.model.face(first_face(&state)).expect("Fläche vorhanden");
    for edge in state.model.edges() {
        let midpoint = (edge.start + edge.end) * 0.5;
        assert_ne!(
            face.classify_point(midpoint, 0.001),
            PointClassification::Outside,
            "Kante {:?} liegt im Loch",
            edge
        );
    }
}

#[test]
fn test_typed_spacing_uses_length_units() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    start_mode(&mut controller, &mut state, DivisionMode::Parallel);

    press(&mut controller, &mut state, [0.0, 0.0, 0.0]);
    press(&mut controller, &mut state, [5.0, 0.0, 0.0]);
    type_text(&mut controller, &mut state, "abc");
    assert!(!state.session.is_idle());
    type_text(&mut controller, &mut state, "2500mm");

    // Modell-Einheit Meter: Abstand 2.5 → y ∈ {0, 2.5, 5, 7.5, 10}
    assert_eq!(state.edge_count(), 5);
    assert_eq!(state.ui.beep_count, 0);
}

#[test]
fn test_unresolved_presses_beep_without_progress() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    start_mode(&mut controller, &mut state, DivisionMode::Parallel);

    press_nothing(&mut controller, &mut state);
    assert_eq!(state.ui.beep_count, 1);

    press(&mut controller, &mut state, [0.0, 0.0, 0.0]);
    // Richtung ohne vorherige Bewegung: kein Kandidat
    press_nothing(&mut controller, &mut state);
    assert_eq!(state.ui.beep_count, 2);
    assert_eq!(state.edge_count(), 0);
    assert!(!state.session.is_idle());
}

#[test]
fn test_cancel_before_finalize_inserts_nothing() {
    for presses in 0..3 {
        let mut controller = AppController::new();
        let mut state = state_with_faces(vec![plain_square()]);
        start_mode(&mut controller, &mut state, DivisionMode::Parallel);

        let points = [[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]];
        for point in points.iter().take(presses) {
            press(&mut controller, &mut state, *point);
        }
        send(&mut controller, &mut state, AppIntent::CancelRequested);

        assert!(state.session.is_idle(), "nach {presses} Klicks");
        assert_eq!(state.edge_count(), 0);
        assert!(!state.can_undo());
        assert_eq!(state.ui.status_text, "Unterteilung abgebrochen");
    }
}

#[test]
fn test_tool_switch_discards_pending_input() {
    let mut controller = AppController::new();
    let mut state = state_with_faces(vec![plain_square()]);
    start_mode(&mut controller, &mut state, DivisionMode::Parallel);

    press(&mut controller, &mut state, [0.0, 0.0, 0.0]);
    send(&mut controller, &mut state, AppIntent::ToolDeactivated);

    assert!(state.session.is_idle());
    assert_eq!(state.edge_count(), 0);
}
