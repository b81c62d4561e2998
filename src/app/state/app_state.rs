use crate::app::history::EditHistory;
use crate::app::use_cases::editing::CommitReport;
use crate::app::CommandLog;
use crate::core::Model;
use crate::shared::DividerOptions;
use std::sync::Arc;

use super::{SessionPhase, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Modell (Arc für O(1)-Snapshots)
    pub model: Arc<Model>,
    /// Unterteilungs-Sitzung (Flächenwahl, Modus, aktives Werkzeug)
    pub session: SessionPhase,
    /// Status, Meldungen, Vorschau
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: DividerOptions,
    /// Bericht der letzten Übernahme
    pub last_commit: Option<CommitReport>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(DividerOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: DividerOptions) -> Self {
        Self {
            model: Arc::new(Model::new()),
            session: SessionPhase::Idle,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            last_commit: None,
        }
    }

    /// Anzahl der Flächen (für Statusanzeige)
    pub fn face_count(&self) -> usize {
        self.model.face_count()
    }

    /// Anzahl der eingefügten Kanten (für Statusanzeige)
    pub fn edge_count(&self) -> usize {
        self.model.edge_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
