//! Gemeinsame Helfer für die Controller-Flow-Tests.

#![allow(dead_code)]

mod grid;
mod history;
mod parallel;

use face_divider::{AppController, AppIntent, AppState, DivisionMode, Face, FaceId, Model};
use glam::DVec3;
use std::sync::Arc;

pub fn square(min: f64, max: f64) -> Vec<DVec3> {
    vec![
        DVec3::new(min, min, 0.0),
        DVec3::new(max, min, 0.0),
        DVec3::new(max, max, 0.0),
        DVec3::new(min, max, 0.0),
    ]
}

/// Quadrat (0,0,0)–(10,10,0), Normale +Z.
pub fn plain_square() -> Face {
    Face::new(square(0.0, 10.0), vec![]).expect("gültige Fläche")
}

/// Quadrat (0,0,0)–(10,10,0) mit quadratischem Loch (3,3)–(7,7).
pub fn square_with_hole() -> Face {
    Face::new(square(0.0, 10.0), vec![square(3.0, 7.0)]).expect("gültige Fläche")
}

pub fn state_with_faces(faces: Vec<Face>) -> AppState {
    let mut model = Model::new();
    for face in faces {
        model.add_face(face);
    }
    let mut state = AppState::new();
    state.model = Arc::new(model);
    state
}

pub fn first_face(state: &AppState) -> FaceId {
    state.model.face_ids().next().expect("mindestens eine Fläche")
}

/// Startet die Sitzung mit der ersten Fläche als Vorauswahl.
pub fn start_on_first_face(controller: &mut AppController, state: &mut AppState) -> FaceId {
    let face_id = first_face(state);
    controller
        .handle_intent(
            state,
            AppIntent::DividerRequested {
                preselected_face: Some(face_id),
            },
        )
        .expect("DividerRequested");
    face_id
}

/// Startet die Sitzung und wählt direkt den Modus.
pub fn start_mode(controller: &mut AppController, state: &mut AppState, mode: DivisionMode) {
    start_on_first_face(controller, state);
    controller
        .handle_intent(state, AppIntent::ModeSelected { mode })
        .expect("ModeSelected");
}

pub fn press(controller: &mut AppController, state: &mut AppState, point: [f64; 3]) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                point: Some(DVec3::from_array(point)),
            },
        )
        .expect("PointerPressed");
}

pub fn press_nothing(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::PointerPressed { point: None })
        .expect("PointerPressed");
}

pub fn move_to(controller: &mut AppController, state: &mut AppState, point: [f64; 3]) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerMoved {
                point: Some(DVec3::from_array(point)),
            },
        )
        .expect("PointerMoved");
}

pub fn type_text(controller: &mut AppController, state: &mut AppState, text: &str) {
    controller
        .handle_intent(
            state,
            AppIntent::TextEntered {
                text: text.to_string(),
            },
        )
        .expect("TextEntered");
}

pub fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller.handle_intent(state, intent).expect("Intent");
}
