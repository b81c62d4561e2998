//! State-Definitionen und Konstruktor für das Parallele-Linien-Werkzeug.

use super::super::common::FaceContext;
use super::super::ToolPreview;
use glam::DVec3;

/// Bestätigte Geometrie nach Basispunkt und Richtung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelFrame {
    /// Projizierter Basispunkt (Offset 0)
    pub base_point: DVec3,
    /// Richtung der Schnittlinien (Einheitsvektor in der Ebene)
    pub direction: DVec3,
    /// `normal × direction`: Achse, entlang der die Linien versetzt werden
    pub perpendicular: DVec3,
    /// Kleinster Ecken-Offset entlang `perpendicular` relativ zum Basispunkt
    pub offset_min: f64,
    /// Größter Ecken-Offset entlang `perpendicular` relativ zum Basispunkt
    pub offset_max: f64,
}

/// Eingabe-Phase des Werkzeugs.
#[derive(Debug, Clone, PartialEq)]
pub enum ParallelPhase {
    /// Wartet auf den Basispunkt
    AwaitingBasePoint,
    /// Basispunkt steht; Richtung folgt der Maus
    AwaitingDirection {
        base_point: DVec3,
        /// Richtungs-Kandidat aus der letzten Mausbewegung
        candidate: Option<DVec3>,
    },
    /// Richtung steht; Abstand folgt der Maus oder wird getippt
    AwaitingSpacing {
        frame: ParallelFrame,
        /// Abstand aus der letzten Mausbewegung
        spacing: Option<f64>,
    },
    /// Übernommen oder abgebrochen
    Done,
}

/// Parallele-Linien-Werkzeug
pub struct ParallelDivisionTool {
    pub(crate) ctx: FaceContext,
    pub(crate) phase: ParallelPhase,
    pub(crate) preview: ToolPreview,
}

impl ParallelDivisionTool {
    /// Erstellt das Werkzeug für die Fläche aus `ctx`.
    pub fn new(ctx: FaceContext) -> Self {
        Self {
            ctx,
            phase: ParallelPhase::AwaitingBasePoint,
            preview: ToolPreview::default(),
        }
    }

    /// Aktuelle Eingabe-Phase.
    pub fn phase(&self) -> &ParallelPhase {
        &self.phase
    }
}
