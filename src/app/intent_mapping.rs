//! Mapping von Host-Intents auf mutierende App-Commands.

use super::tools::DivisionTool;
use super::{AppCommand, AppIntent, AppState, SessionPhase};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DividerRequested { preselected_face } => {
            vec![AppCommand::StartDivider { preselected_face }]
        }
        AppIntent::FacePicked { face_id } => vec![AppCommand::PickFace { face_id }],
        AppIntent::ModeSelected { mode } => vec![AppCommand::StartDivision { mode }],
        AppIntent::ModeDialogDismissed => vec![AppCommand::DismissModeDialog],
        AppIntent::ToolActivated => vec![AppCommand::ActivateTool],
        AppIntent::ToolDeactivated => vec![AppCommand::DeactivateTool],
        // Bewegung ohne Treffer ändert nichts
        AppIntent::PointerMoved { point: None } => vec![],
        AppIntent::PointerMoved { point: Some(point) } => {
            vec![AppCommand::DivisionPointerMove { point }]
        }
        AppIntent::PointerPressed { point } => vec![AppCommand::DivisionPointerDown { point }],
        AppIntent::TextEntered { text } => vec![AppCommand::DivisionText { text }],
        AppIntent::CancelRequested => vec![AppCommand::DivisionCancel],
        AppIntent::UndoRequested => {
            // Angefangene Eingaben verwerfen, bevor das Modell zurückgesetzt wird
            let pending = match &state.session {
                SessionPhase::Dividing(tool) => tool.has_pending_input(),
                _ => false,
            };
            if pending {
                vec![AppCommand::DivisionCancel, AppCommand::Undo]
            } else {
                vec![AppCommand::Undo]
            }
        }
        AppIntent::RedoRequested => vec![AppCommand::Redo],
    }
}
