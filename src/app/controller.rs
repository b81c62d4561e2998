//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Sitzung ===
            AppCommand::StartDivider { preselected_face } => {
                handlers::division::start(state, preselected_face)
            }
            AppCommand::PickFace { face_id } => handlers::division::pick_face(state, face_id),
            AppCommand::StartDivision { mode } => handlers::division::start_division(state, mode),
            AppCommand::DismissModeDialog => handlers::division::dismiss_mode_dialog(state),
            AppCommand::ActivateTool => handlers::division::activate_tool(state),
            AppCommand::DeactivateTool => handlers::division::deactivate_tool(state),

            // === Werkzeug-Events ===
            AppCommand::DivisionPointerMove { point } => {
                handlers::division::pointer_move(state, point)
            }
            AppCommand::DivisionPointerDown { point } => {
                handlers::division::pointer_down(state, point)
            }
            AppCommand::DivisionText { text } => handlers::division::text(state, text),
            AppCommand::DivisionCancel => handlers::division::cancel(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
