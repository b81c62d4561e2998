//! Builder für Render-Szenen aus dem AppState.

use crate::app::{AppState, SessionPhase};
use crate::shared::{DivisionMode, RenderScene};
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let mode_choices = match state.session {
        SessionPhase::ChoosingMode { .. } => DivisionMode::ALL.to_vec(),
        _ => Vec::new(),
    };

    RenderScene {
        model: Arc::clone(&state.model),
        preview_segments: state.ui.preview.segments.clone(),
        highlight_points: state.ui.preview.highlight_points.clone(),
        status_text: state.ui.status_text.clone(),
        mode_choices,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::tools::ToolPreview;
    use crate::app::{AppState, SessionPhase};
    use crate::core::{Face, Model, Segment};
    use crate::shared::DivisionMode;
    use glam::DVec3;
    use std::sync::Arc;

    #[test]
    fn empty_state_has_no_preview() {
        let state = AppState::new();
        let scene = build(&state);
        assert!(!scene.has_preview());
        assert!(Arc::ptr_eq(&scene.model, &state.model));
        assert!(!scene.shows_mode_dialog());
    }

    #[test]
    fn mode_dialog_offers_all_modes() {
        let mut model = Model::new();
        let face = Face::new(
            vec![
                DVec3::ZERO,
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
            ],
            Vec::new(),
        )
        .expect("gültige Fläche");
        let face_id = model.add_face(face);
        let mut state = AppState::new();
        state.model = Arc::new(model);
        state.session = SessionPhase::ChoosingMode { face_id };

        let scene = build(&state);

        assert!(scene.shows_mode_dialog());
        assert_eq!(scene.mode_choices, DivisionMode::ALL.to_vec());
        assert_eq!(scene.mode_choices[0].label(), "Parallele Linien");
    }

    #[test]
    fn preview_and_status_are_copied() {
        let mut state = AppState::new();
        state.ui.preview = ToolPreview {
            segments: vec![Segment::new(DVec3::ZERO, DVec3::X)],
            highlight_points: vec![DVec3::ZERO],
        };
        state.ui.set_status("Richtung wählen");

        let scene = build(&state);

        assert!(scene.has_preview());
        assert_eq!(scene.preview_segments.len(), 1);
        assert_eq!(scene.status_text, "Richtung wählen");
    }
}
