use crate::app::tools::{ActiveDivision, DivisionTool};
use crate::core::FaceId;

/// Phase der Unterteilungs-Sitzung.
///
/// `Idle` → `SelectingFace` (ohne gültige Vorauswahl) → `ChoosingMode` →
/// `Dividing` → `Idle`.
#[derive(Default)]
pub enum SessionPhase {
    /// Keine Sitzung aktiv
    #[default]
    Idle,
    /// Auswahl-Werkzeug wartet auf einen Flächen-Klick
    SelectingFace,
    /// Modus-Dialog für die gewählte Fläche ist offen
    ChoosingMode { face_id: FaceId },
    /// Unterteilungs-Werkzeug arbeitet auf seiner Fläche
    Dividing(ActiveDivision),
}

impl SessionPhase {
    /// Ist keine Sitzung aktiv?
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionPhase::Idle)
    }

    /// Aktives Werkzeug, falls vorhanden.
    pub fn active_tool(&self) -> Option<&ActiveDivision> {
        match self {
            SessionPhase::Dividing(tool) => Some(tool),
            _ => None,
        }
    }

    /// Kurzname für Logs.
    pub fn label(&self) -> String {
        match self {
            SessionPhase::Idle => "Idle".into(),
            SessionPhase::SelectingFace => "SelectingFace".into(),
            SessionPhase::ChoosingMode { face_id } => format!("ChoosingMode({face_id})"),
            SessionPhase::Dividing(tool) => format!("Dividing({})", tool.name()),
        }
    }
}
