//! DivisionTool-Trait: Schnittstelle für alle Unterteilungs-Werkzeuge.

use crate::core::FaceId;

use super::{DivisionMode, ToolEffect, ToolEvent, ToolPreview};

/// Schnittstelle für alle Unterteilungs-Werkzeuge (parallele Linien, Raster).
///
/// Werkzeuge sind zustandsbehaftet (Eingabe-Phasen), gehören genau einer Fläche
/// und liefern pro Ereignis eine Liste von Seiteneffekten.
pub trait DivisionTool {
    /// Modus des Werkzeugs
    fn mode(&self) -> DivisionMode;

    /// Anzeigename (Name des Modus)
    fn name(&self) -> &str {
        self.mode().label()
    }

    /// Fläche, auf der das Werkzeug arbeitet
    fn face_id(&self) -> FaceId;

    /// Statustext beim Aktivieren
    fn instruction_text(&self) -> &str;

    /// Statustext der aktuellen Phase (z.B. "Basispunkt wählen")
    fn status_text(&self) -> &str;

    /// Verarbeitet ein Ereignis vollständig und gibt die Seiteneffekte zurück.
    fn handle_event(&mut self, event: ToolEvent) -> Vec<ToolEffect>;

    /// Aktuelle Vorschau-Geometrie.
    fn preview(&self) -> &ToolPreview;

    /// Ist das Werkzeug beendet (übernommen oder abgebrochen)?
    fn is_done(&self) -> bool;

    /// Hat das Werkzeug angefangene Eingaben (Punkte gesetzt, aber noch nicht übernommen)?
    fn has_pending_input(&self) -> bool {
        false
    }
}
