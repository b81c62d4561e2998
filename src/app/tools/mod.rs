//! Zustandsbasierte Unterteilungs-Werkzeuge (parallele Linien, Rechteckraster).
//!
//! Jedes Werkzeug implementiert den `DivisionTool`-Trait. Die Übergänge sind
//! reine Funktionen `(Kontext, Phase, Event) -> Transition`, die neben der
//! nächsten Phase eine Liste von `ToolEffect`s liefern. Die Mutation des Modells
//! erfolgt zentral in `apply_tool_result`.

/// Gemeinsame Hilfsfunktionen (Flächen-Kontext, wiederholte Linien).
pub mod common;
/// DivisionTool-Trait: Schnittstelle für alle Unterteilungs-Werkzeuge.
mod division_tool;
/// Rechteckraster-Werkzeug (zwei Ecken + Breite).
pub mod grid;
/// Parallele-Linien-Werkzeug (Basispunkt + Richtung + Abstand).
pub mod parallel;

pub use common::FaceContext;
pub use division_tool::DivisionTool;
pub use grid::GridDivisionTool;
pub use parallel::ParallelDivisionTool;
pub use crate::shared::DivisionMode;

use crate::core::{FaceId, Segment};
use glam::DVec3;

// ── Typen ────────────────────────────────────────────────────────

/// Eingabe-Ereignis für ein Werkzeug.
///
/// Punkte sind bereits vom Host aufgelöst; `None` = Pick-Strahl traf nichts.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEvent {
    /// Mausbewegung über der Szene
    PointerMove(Option<DVec3>),
    /// Linksklick in der Szene
    PointerDown(Option<DVec3>),
    /// Getippter Text (wird als Länge geparst)
    TextEntry(String),
    /// Abbruch (Escape / Werkzeugwechsel)
    Cancel,
}

/// Seiteneffekt eines Übergangs, wird vom Handler ausgeführt.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolEffect {
    /// Statuszeile setzen
    Status(String),
    /// Vorschau ersetzen
    Preview(ToolPreview),
    /// Eingabe abgelehnt (akustisches/visuelles Signal)
    Reject,
    /// Ergebnis in einer rückgängig machbaren Operation übernehmen
    Commit(ToolResult),
    /// Werkzeug ist beendet und wird verworfen
    Finish,
}

/// Ergebnis eines Übergangs: nächste Phase plus Seiteneffekte.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<P> {
    /// Phase nach dem Übergang
    pub phase: P,
    /// Auszuführende Seiteneffekte in Reihenfolge
    pub effects: Vec<ToolEffect>,
}

impl<P> Transition<P> {
    /// Übergang ohne Seiteneffekte.
    pub fn to(phase: P) -> Self {
        Self {
            phase,
            effects: Vec::new(),
        }
    }

    /// Hängt einen Seiteneffekt an.
    pub fn with(mut self, effect: ToolEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Preview-Geometrie für das Rendering (flüchtig, wird nicht gespeichert).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolPreview {
    /// Vorschau-Segmente
    pub segments: Vec<Segment>,
    /// Hervorgehobene Punkte
    pub highlight_points: Vec<DVec3>,
}

/// Ergebnis eines Werkzeugs: reine Daten, keine Mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// Name der rückgängig machbaren Operation
    pub operation_name: &'static str,
    /// Bereinigte Schnitt-Segmente
    pub segments: Vec<Segment>,
}

/// Letzte Vorschau in einer Effekt-Liste (falls vorhanden).
pub(crate) fn last_preview(effects: &[ToolEffect]) -> Option<&ToolPreview> {
    effects.iter().rev().find_map(|effect| match effect {
        ToolEffect::Preview(preview) => Some(preview),
        _ => None,
    })
}

// ── Aktives Werkzeug ─────────────────────────────────────────────

/// Geschlossene Menge der Unterteilungs-Werkzeuge.
pub enum ActiveDivision {
    /// Parallele Linien
    Parallel(ParallelDivisionTool),
    /// Rechteckraster
    Grid(GridDivisionTool),
}

impl ActiveDivision {
    /// Erstellt das Werkzeug für `mode` auf der Fläche aus `ctx`.
    pub fn new(mode: DivisionMode, ctx: FaceContext) -> Self {
        match mode {
            DivisionMode::Parallel => ActiveDivision::Parallel(ParallelDivisionTool::new(ctx)),
            DivisionMode::Grid => ActiveDivision::Grid(GridDivisionTool::new(ctx)),
        }
    }

    fn tool(&self) -> &dyn DivisionTool {
        match self {
            ActiveDivision::Parallel(tool) => tool,
            ActiveDivision::Grid(tool) => tool,
        }
    }

    fn tool_mut(&mut self) -> &mut dyn DivisionTool {
        match self {
            ActiveDivision::Parallel(tool) => tool,
            ActiveDivision::Grid(tool) => tool,
        }
    }
}

impl DivisionTool for ActiveDivision {
    fn mode(&self) -> DivisionMode {
        self.tool().mode()
    }

    fn face_id(&self) -> FaceId {
        self.tool().face_id()
    }

    fn instruction_text(&self) -> &str {
        self.tool().instruction_text()
    }

    fn status_text(&self) -> &str {
        self.tool().status_text()
    }

    fn handle_event(&mut self, event: ToolEvent) -> Vec<ToolEffect> {
        self.tool_mut().handle_event(event)
    }

    fn preview(&self) -> &ToolPreview {
        self.tool().preview()
    }

    fn is_done(&self) -> bool {
        self.tool().is_done()
    }

    fn has_pending_input(&self) -> bool {
        self.tool().has_pending_input()
    }
}
