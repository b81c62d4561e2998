//! Handler für die Unterteilungs-Sitzung (Flächenwahl, Modus, Werkzeug-Events).

use crate::app::tools::{
    ActiveDivision, DivisionMode, DivisionTool, FaceContext, ToolEffect, ToolEvent,
};
use crate::app::use_cases;
use crate::app::{AppState, SessionPhase};
use crate::core::FaceId;
use glam::DVec3;

const INVALID_FACE: &str = "Die gewählte Fläche ist nicht mehr gültig.";
const CANCELLED: &str = "Unterteilung abgebrochen";

/// Startet eine Sitzung; eine gültige Vorauswahl überspringt die Flächenwahl.
pub fn start(state: &mut AppState, preselected_face: Option<FaceId>) {
    if !state.session.is_idle() {
        log::info!("Laufende Sitzung {} wird ersetzt", state.session.label());
        cancel(state);
    }

    match preselected_face.filter(|id| state.model.contains_face(*id)) {
        Some(face_id) => choose_mode(state, face_id),
        None => {
            state.session = SessionPhase::SelectingFace;
            state.ui.set_status("Fläche zum Unterteilen wählen");
        }
    }
    log::info!("Flächenteilung gestartet: {}", state.session.label());
}

/// Übernimmt die angeklickte Fläche; ungültige Klicks werden abgelehnt.
pub fn pick_face(state: &mut AppState, face_id: Option<FaceId>) {
    if !matches!(state.session, SessionPhase::SelectingFace) {
        log::debug!("Flächenwahl ignoriert in {}", state.session.label());
        return;
    }
    match face_id.filter(|id| state.model.contains_face(*id)) {
        Some(face_id) => choose_mode(state, face_id),
        None => state.ui.beep(),
    }
}

fn choose_mode(state: &mut AppState, face_id: FaceId) {
    state.session = SessionPhase::ChoosingMode { face_id };
    state.ui.set_status("Unterteilungs-Modus wählen");
}

/// Erstellt das Werkzeug für `mode` auf der gewählten Fläche.
pub fn start_division(state: &mut AppState, mode: DivisionMode) {
    let SessionPhase::ChoosingMode { face_id } = state.session else {
        log::debug!("Modus-Wahl ignoriert in {}", state.session.label());
        return;
    };

    let Some(face) = state.model.face(face_id) else {
        invalid_face(state, face_id);
        return;
    };
    let ctx = FaceContext::new(face_id, face, &state.options);
    let tool = ActiveDivision::new(mode, ctx);
    state.ui.set_status(tool.instruction_text());
    state.ui.clear_preview();
    log::info!("Werkzeug '{}' auf Fläche {} aktiviert", tool.name(), face_id);
    state.session = SessionPhase::Dividing(tool);
}

/// Schließt den Modus-Dialog ohne Auswahl.
pub fn dismiss_mode_dialog(state: &mut AppState) {
    if matches!(state.session, SessionPhase::ChoosingMode { .. }) {
        end_session(state, CANCELLED);
    }
}

/// Reaktiviert das Werkzeug; ist die Fläche verschwunden, endet die Sitzung.
pub fn activate_tool(state: &mut AppState) {
    let Some(tool) = state.session.active_tool() else {
        log::debug!("Aktivierung ohne Werkzeug ignoriert");
        return;
    };
    let face_id = tool.face_id();
    if !state.model.contains_face(face_id) {
        invalid_face(state, face_id);
        return;
    }
    let status = tool.status_text().to_string();
    state.ui.set_status(status);
}

/// Werkzeugwechsel im Host: angefangene Eingaben verwerfen.
pub fn deactivate_tool(state: &mut AppState) {
    if state.session.active_tool().is_some() {
        dispatch(state, ToolEvent::Cancel);
    }
}

/// Reicht eine Mausbewegung an das Werkzeug weiter.
pub fn pointer_move(state: &mut AppState, point: DVec3) {
    dispatch(state, ToolEvent::PointerMove(Some(point)));
}

/// Reicht einen Klick an das Werkzeug weiter.
pub fn pointer_down(state: &mut AppState, point: Option<DVec3>) {
    dispatch(state, ToolEvent::PointerDown(point));
}

/// Reicht getippten Text an das Werkzeug weiter.
pub fn text(state: &mut AppState, text: String) {
    dispatch(state, ToolEvent::TextEntry(text));
}

/// Escape: Werkzeug abbrechen bzw. Flächenwahl und Modus-Dialog beenden.
pub fn cancel(state: &mut AppState) {
    match state.session {
        SessionPhase::Idle => {}
        SessionPhase::Dividing(_) => dispatch(state, ToolEvent::Cancel),
        SessionPhase::SelectingFace | SessionPhase::ChoosingMode { .. } => {
            end_session(state, CANCELLED)
        }
    }
}

fn dispatch(state: &mut AppState, event: ToolEvent) {
    let effects = match &mut state.session {
        SessionPhase::Dividing(tool) => tool.handle_event(event),
        _ => {
            log::debug!("{:?} ohne aktives Werkzeug ignoriert", event);
            return;
        }
    };
    apply_effects(state, effects);
}

/// Führt die Seiteneffekte eines Werkzeug-Übergangs aus.
fn apply_effects(state: &mut AppState, effects: Vec<ToolEffect>) {
    let mut committed = false;
    for effect in effects {
        match effect {
            ToolEffect::Status(text) => state.ui.set_status(text),
            ToolEffect::Preview(preview) => state.ui.preview = preview,
            ToolEffect::Reject => state.ui.beep(),
            ToolEffect::Commit(result) => {
                let report = use_cases::editing::apply_tool_result(state, result);
                state.ui.set_status(format!(
                    "{}: {} Kanten eingefügt",
                    report.operation_name,
                    report.created_edge_ids.len()
                ));
                state.last_commit = Some(report);
                committed = true;
            }
            ToolEffect::Finish => {
                state.session = SessionPhase::Idle;
                state.ui.clear_preview();
                if !committed {
                    state.ui.set_status(CANCELLED);
                }
            }
        }
    }
}

fn invalid_face(state: &mut AppState, face_id: FaceId) {
    log::debug!("Fläche {} existiert nicht mehr", face_id);
    state.ui.notify(INVALID_FACE);
    end_session(state, "");
}

fn end_session(state: &mut AppState, status: &str) {
    state.session = SessionPhase::Idle;
    state.ui.clear_preview();
    state.ui.set_status(status);
}
