//! Spielt ein Szenario headless durch den AppController ab.

use super::parser::{Scenario, Step};
use crate::app::{AppController, AppIntent, AppState};
use crate::core::FaceId;
use crate::shared::DividerOptions;
use anyhow::{bail, Result};
use glam::DVec3;
use std::sync::Arc;

/// Baut das Modell des Szenarios und spielt alle Schritte ab.
///
/// Gibt den Endzustand zurück; Status und neue Meldungen werden pro Schritt geloggt.
pub fn run_scenario(scenario: &Scenario, options: DividerOptions) -> Result<AppState> {
    let (model, face_ids) = scenario.build_model(options.tolerance)?;
    let mut state = AppState::with_options(options);
    state.model = Arc::new(model);
    let mut controller = AppController::new();

    log::info!(
        "Szenario: {} Flächen, {} Schritte",
        face_ids.len(),
        scenario.steps.len()
    );

    for (index, step) in scenario.steps.iter().enumerate() {
        let notifications_before = state.ui.notifications.len();

        if let Step::DeleteFace { face } = step {
            let id = face_id(&face_ids, *face, index)?;
            if Arc::make_mut(&mut state.model).remove_face(id).is_none() {
                log::warn!("Schritt {}: Fläche {} war bereits gelöscht", index, face);
            }
            continue;
        }

        let intent = intent_for_step(step, &face_ids, index)?;
        controller.handle_intent(&mut state, intent)?;

        log::debug!("Schritt {} ({:?}): {}", index, step, state.ui.status_text);
        for message in &state.ui.notifications[notifications_before..] {
            log::info!("Schritt {}: Meldung '{}'", index, message);
        }
    }

    log::info!(
        "Szenario beendet: {} Kanten, Status '{}'",
        state.edge_count(),
        state.ui.status_text
    );
    Ok(state)
}

fn intent_for_step(step: &Step, face_ids: &[FaceId], index: usize) -> Result<AppIntent> {
    let point = |p: &Option<[f64; 3]>| p.map(DVec3::from_array);
    let intent = match step {
        Step::Start { face } => AppIntent::DividerRequested {
            preselected_face: optional_face_id(face_ids, *face, index)?,
        },
        Step::PickFace { face } => AppIntent::FacePicked {
            face_id: optional_face_id(face_ids, *face, index)?,
        },
        Step::ChooseMode { mode } => AppIntent::ModeSelected { mode: *mode },
        Step::DismissMode => AppIntent::ModeDialogDismissed,
        Step::Activate => AppIntent::ToolActivated,
        Step::Deactivate => AppIntent::ToolDeactivated,
        Step::Move { point: p } => AppIntent::PointerMoved { point: point(p) },
        Step::Press { point: p } => AppIntent::PointerPressed { point: point(p) },
        Step::Text { text } => AppIntent::TextEntered { text: text.clone() },
        Step::Cancel => AppIntent::CancelRequested,
        Step::Undo => AppIntent::UndoRequested,
        Step::Redo => AppIntent::RedoRequested,
        Step::DeleteFace { .. } => bail!("Schritt {}: delete_face ist kein Host-Intent", index),
    };
    Ok(intent)
}

fn face_id(face_ids: &[FaceId], face: usize, index: usize) -> Result<FaceId> {
    match face_ids.get(face) {
        Some(id) => Ok(*id),
        None => bail!(
            "Schritt {}: Fläche {} existiert nicht ({} Flächen definiert)",
            index,
            face,
            face_ids.len()
        ),
    }
}

fn optional_face_id(
    face_ids: &[FaceId],
    face: Option<usize>,
    index: usize,
) -> Result<Option<FaceId>> {
    face.map(|face| face_id(face_ids, face, index)).transpose()
}
