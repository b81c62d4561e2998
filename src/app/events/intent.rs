use crate::app::tools::DivisionMode;
use crate::core::FaceId;
use glam::DVec3;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben vom Host (Menü, Viewport, Tastatur) ohne direkte Mutationslogik.
///
/// Punkte sind bereits vom Pick-Strahl des Hosts aufgelöst; `None` bedeutet,
/// dass unter dem Cursor nichts getroffen wurde.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Menüeintrag "Fläche unterteilen" (optional mit vorausgewählter Fläche)
    DividerRequested { preselected_face: Option<FaceId> },
    /// Fläche im Auswahl-Werkzeug angeklickt
    FacePicked { face_id: Option<FaceId> },
    /// Modus im Modus-Dialog gewählt
    ModeSelected { mode: DivisionMode },
    /// Modus-Dialog ohne Auswahl geschlossen
    ModeDialogDismissed,
    /// Host hat das Werkzeug (wieder) aktiviert
    ToolActivated,
    /// Host hat das Werkzeug deaktiviert (Werkzeugwechsel)
    ToolDeactivated,
    /// Mausbewegung im Viewport
    PointerMoved { point: Option<DVec3> },
    /// Linksklick im Viewport
    PointerPressed { point: Option<DVec3> },
    /// Getippter Wert (Längen-Eingabe)
    TextEntered { text: String },
    /// Escape
    CancelRequested,
    /// Rückgängig
    UndoRequested,
    /// Wiederherstellen
    RedoRequested,
}
