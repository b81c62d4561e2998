//! Unterteilungs-Modi für den Modus-Dialog des Hosts.

use serde::{Deserialize, Serialize};

/// Unterteilungs-Modus (Auswahl im Modus-Dialog des Hosts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionMode {
    /// Parallele Linien mit festem Abstand
    Parallel,
    /// Rechteckraster in zwei Achsen
    Grid,
}

impl DivisionMode {
    /// Alle Modi in Dialog-Reihenfolge.
    pub const ALL: [DivisionMode; 2] = [DivisionMode::Parallel, DivisionMode::Grid];

    /// Anzeigename für den Modus-Dialog.
    pub fn label(self) -> &'static str {
        match self {
            DivisionMode::Parallel => "Parallele Linien",
            DivisionMode::Grid => "Rechteckraster",
        }
    }

    /// Tooltip für den Modus-Dialog.
    pub fn description(self) -> &'static str {
        match self {
            DivisionMode::Parallel => "Teilt die Fläche mit parallelen Linien in festem Abstand",
            DivisionMode::Grid => "Teilt die Fläche in ein Raster aus gleich großen Rechtecken",
        }
    }
}
