//! Render-Szene als expliziter Übergabevertrag zwischen App und Viewport des Hosts.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie konsumiert.

use super::mode::DivisionMode;
use super::options::DividerOptions;
use crate::core::{Model, Segment};
use glam::DVec3;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Aktuelles Modell (Flächen + eingefügte Kanten)
    pub model: Arc<Model>,
    /// Vorschau-Segmente des aktiven Werkzeugs (flüchtig)
    pub preview_segments: Vec<Segment>,
    /// Hervorgehobene Punkte (Basispunkt, Ecken)
    pub highlight_points: Vec<DVec3>,
    /// Statuszeile
    pub status_text: String,
    /// Angebotene Modi, solange der Modus-Dialog offen ist (sonst leer)
    pub mode_choices: Vec<DivisionMode>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: DividerOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Vorschau gezeichnet werden muss.
    pub fn has_preview(&self) -> bool {
        !self.preview_segments.is_empty() || !self.highlight_points.is_empty()
    }

    /// Gibt zurück, ob der Modus-Dialog angezeigt werden muss.
    pub fn shows_mode_dialog(&self) -> bool {
        !self.mode_choices.is_empty()
    }
}
