//! Parser für Szenario-Dateien (TOML).

use crate::app::tools::DivisionMode;
use crate::core::{Face, FaceId, Model};
use anyhow::{Context, Result};
use glam::DVec3;
use serde::Deserialize;
use std::path::Path;

/// Komplettes Szenario.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Scenario {
    /// Flächen in Einfüge-Reihenfolge; Schritte verweisen per Index darauf
    #[serde(default)]
    pub faces: Vec<FaceEntry>,
    /// Abzuspielende Schritte
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Eine Fläche als Punktlisten.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FaceEntry {
    pub outer: Vec<[f64; 3]>,
    #[serde(default)]
    pub holes: Vec<Vec<[f64; 3]>>,
}

/// Ein Schritt des Event-Skripts.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Sitzung starten, optional mit vorausgewählter Fläche
    Start { face: Option<usize> },
    /// Fläche anklicken (ohne Index: Klick ins Leere)
    PickFace { face: Option<usize> },
    /// Modus im Dialog wählen
    ChooseMode { mode: DivisionMode },
    /// Modus-Dialog schließen
    DismissMode,
    /// Werkzeug (re)aktivieren
    Activate,
    /// Werkzeug deaktivieren
    Deactivate,
    /// Mausbewegung (ohne Punkt: kein Treffer)
    Move { point: Option<[f64; 3]> },
    /// Klick (ohne Punkt: kein Treffer)
    Press { point: Option<[f64; 3]> },
    /// Getippter Wert
    Text { text: String },
    /// Escape
    Cancel,
    /// Rückgängig
    Undo,
    /// Wiederherstellen
    Redo,
    /// Host löscht eine Fläche (macht sie ungültig)
    DeleteFace { face: usize },
}

/// Parsed ein Szenario aus TOML-Text.
pub fn parse_scenario(content: &str) -> Result<Scenario> {
    toml::from_str(content).context("Szenario konnte nicht gelesen werden")
}

/// Lädt ein Szenario aus einer Datei.
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Szenario-Datei nicht lesbar: {}", path.display()))?;
    parse_scenario(&content)
}

impl FaceEntry {
    /// Baut die Fläche (prüft Planarität gegen `tolerance` und Mindest-Eckenzahl).
    pub fn to_face(&self, tolerance: f64) -> Result<Face> {
        let outer = self.outer.iter().copied().map(DVec3::from_array).collect();
        let holes = self
            .holes
            .iter()
            .map(|hole| hole.iter().copied().map(DVec3::from_array).collect())
            .collect();
        Face::with_tolerance(outer, holes, tolerance)
    }
}

impl Scenario {
    /// Baut das Modell; die zurückgegebenen IDs entsprechen den Flächen-Indizes.
    pub fn build_model(&self, tolerance: f64) -> Result<(Model, Vec<FaceId>)> {
        let mut model = Model::new();
        let mut ids = Vec::with_capacity(self.faces.len());
        for (index, entry) in self.faces.iter().enumerate() {
            let face = entry
                .to_face(tolerance)
                .with_context(|| format!("Fläche {} ist ungültig", index))?;
            ids.push(model.add_face(face));
        }
        Ok((model, ids))
    }
}
