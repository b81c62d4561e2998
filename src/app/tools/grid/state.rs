//! State-Definitionen und Konstruktor für das Rechteckraster-Werkzeug.

use super::super::common::FaceContext;
use super::super::ToolPreview;
use glam::DVec3;

/// Bestätigte Geometrie nach beiden Ecken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridFrame {
    pub first_corner: DVec3,
    pub second_corner: DVec3,
    /// Kantenrichtung erste → zweite Ecke (Einheitsvektor)
    pub direction: DVec3,
    /// `normal × direction`
    pub perpendicular: DVec3,
    /// Rasterlänge entlang `direction`
    pub length: f64,
    /// Ecken-Projektionen auf `direction` relativ zur ersten Ecke
    pub u_min: f64,
    pub u_max: f64,
    /// Ecken-Projektionen auf `perpendicular` relativ zur ersten Ecke
    pub v_min: f64,
    pub v_max: f64,
}

/// Eingabe-Phase des Werkzeugs.
#[derive(Debug, Clone, PartialEq)]
pub enum GridPhase {
    /// Wartet auf die erste Ecke
    AwaitingFirstCorner,
    /// Erste Ecke steht; die zweite folgt der Maus
    AwaitingSecondCorner {
        first_corner: DVec3,
        /// Projizierte Kandidaten-Ecke aus der letzten Mausbewegung
        candidate: Option<DVec3>,
    },
    /// Kante steht; Breite folgt der Maus oder wird getippt
    AwaitingWidth {
        frame: GridFrame,
        /// Vorzeichenbehaftete Breite aus der letzten Mausbewegung
        width: Option<f64>,
    },
    /// Übernommen oder abgebrochen
    Done,
}

/// Rechteckraster-Werkzeug
pub struct GridDivisionTool {
    pub(crate) ctx: FaceContext,
    pub(crate) phase: GridPhase,
    pub(crate) preview: ToolPreview,
}

impl GridDivisionTool {
    /// Erstellt das Werkzeug für die Fläche aus `ctx`.
    pub fn new(ctx: FaceContext) -> Self {
        Self {
            ctx,
            phase: GridPhase::AwaitingFirstCorner,
            preview: ToolPreview::default(),
        }
    }

    /// Aktuelle Eingabe-Phase.
    pub fn phase(&self) -> &GridPhase {
        &self.phase
    }
}
