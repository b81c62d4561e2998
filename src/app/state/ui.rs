use crate::app::tools::ToolPreview;

/// Rückmeldungen an den Host: Statuszeile, Meldungen, Signale, Vorschau.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Statuszeile
    pub status_text: String,
    /// Blockierende Meldungen (z.B. ungültige Fläche), älteste zuerst
    pub notifications: Vec<String>,
    /// Anzahl akustischer Signale (abgelehnte Eingaben)
    pub beep_count: usize,
    /// Aktuelle Vorschau des Werkzeugs
    pub preview: ToolPreview,
}

impl UiState {
    /// Erstellt den leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Statuszeile.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }

    /// Zeigt eine Meldung an.
    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.notifications.push(message);
    }

    /// Signalisiert eine abgelehnte Eingabe.
    pub fn beep(&mut self) {
        self.beep_count += 1;
    }

    /// Entfernt die Vorschau.
    pub fn clear_preview(&mut self) {
        self.preview = ToolPreview::default();
    }
}
