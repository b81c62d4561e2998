use crate::app::tools::DivisionMode;
use crate::core::FaceId;
use glam::DVec3;

/// Commands sind mutierende Operationen, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Unterteilungs-Sitzung starten
    StartDivider { preselected_face: Option<FaceId> },
    /// Fläche für die Sitzung übernehmen
    PickFace { face_id: Option<FaceId> },
    /// Werkzeug für den gewählten Modus erstellen
    StartDivision { mode: DivisionMode },
    /// Modus-Dialog schließen, Sitzung beenden
    DismissModeDialog,
    /// Aktives Werkzeug (re)aktivieren, Fläche erneut prüfen
    ActivateTool,
    /// Aktives Werkzeug abbrechen und verwerfen
    DeactivateTool,
    /// Mausbewegung an das Werkzeug weiterreichen
    DivisionPointerMove { point: DVec3 },
    /// Klick an das Werkzeug weiterreichen
    DivisionPointerDown { point: Option<DVec3> },
    /// Getippten Text an das Werkzeug weiterreichen
    DivisionText { text: String },
    /// Sitzung bzw. Werkzeug abbrechen
    DivisionCancel,
    /// Undo
    Undo,
    /// Redo
    Redo,
}
