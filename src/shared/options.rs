//! Zentrale Konfiguration für den Face Divider.
//!
//! `DividerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::units::LengthUnit;
use serde::{Deserialize, Serialize};

// ── Geometrie ───────────────────────────────────────────────────────

/// Längen-Toleranz in Modelleinheiten: minimaler Punktabstand, minimale
/// Segmentlänge und Spielraum beim Enthaltensein-Test auf Kanten.
pub const TOLERANCE: f64 = 0.001;
/// Obergrenze wiederholter Schnittlinien pro Achse (Schutz vor winzigen Abständen).
pub const MAX_LINES_PER_AXIS: usize = 2000;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Vorschau-Rendering ─────────────────────────────────────────────

/// Farbe der Vorschau-Segmente (RGBA: Blau).
pub const PREVIEW_COLOR: [f32; 4] = [0.0, 0.47, 0.84, 1.0];
/// Farbe der hervorgehobenen Punkte (RGBA: Orange).
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 0.5, 0.0, 1.0];
/// Linienstärke der Vorschau in Pixeln.
pub const PREVIEW_LINE_WIDTH: f32 = 2.0;
/// Größe der hervorgehobenen Punkte in Pixeln.
pub const HIGHLIGHT_POINT_SIZE: f32 = 6.0;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `face_divider.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DividerOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Längen-Toleranz in Modelleinheiten
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Einheit des Modells (Basis für getippte Längen ohne Einheit)
    #[serde(default)]
    pub length_unit: LengthUnit,
    /// Obergrenze wiederholter Schnittlinien pro Achse
    #[serde(default = "default_max_lines_per_axis")]
    pub max_lines_per_axis: usize,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,

    // ── Vorschau ────────────────────────────────────────────────
    /// Farbe der Vorschau-Segmente
    #[serde(default = "default_preview_color")]
    pub preview_color: [f32; 4],
    /// Farbe der hervorgehobenen Punkte
    #[serde(default = "default_highlight_color")]
    pub highlight_color: [f32; 4],
    /// Linienstärke der Vorschau
    #[serde(default = "default_preview_line_width")]
    pub preview_line_width: f32,
    /// Punktgröße der Hervorhebungen
    #[serde(default = "default_highlight_point_size")]
    pub highlight_point_size: f32,
}

impl Default for DividerOptions {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            length_unit: LengthUnit::default(),
            max_lines_per_axis: MAX_LINES_PER_AXIS,
            history_depth: HISTORY_DEPTH,
            preview_color: PREVIEW_COLOR,
            highlight_color: HIGHLIGHT_COLOR,
            preview_line_width: PREVIEW_LINE_WIDTH,
            highlight_point_size: HIGHLIGHT_POINT_SIZE,
        }
    }
}

fn default_tolerance() -> f64 {
    TOLERANCE
}

fn default_max_lines_per_axis() -> usize {
    MAX_LINES_PER_AXIS
}

fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

fn default_preview_color() -> [f32; 4] {
    PREVIEW_COLOR
}

fn default_highlight_color() -> [f32; 4] {
    HIGHLIGHT_COLOR
}

fn default_preview_line_width() -> f32 {
    PREVIEW_LINE_WIDTH
}

fn default_highlight_point_size() -> f32 {
    HIGHLIGHT_POINT_SIZE
}

impl DividerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text und prüft die Wertebereiche.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        if !(opts.tolerance.is_finite() && opts.tolerance > 0.0) {
            anyhow::bail!("tolerance muss positiv sein (erhalten: {})", opts.tolerance);
        }
        if opts.max_lines_per_axis == 0 {
            anyhow::bail!("max_lines_per_axis muss mindestens 1 sein");
        }
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("face_divider"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("face_divider.toml")
    }
}
