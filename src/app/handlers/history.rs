//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;
use std::sync::Arc;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let current = Arc::clone(&state.model);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        state.model = prev.model;
        log::info!("Undo ausgeführt: {}", prev.label);
        state.ui.set_status(format!("Rückgängig: {}", prev.label));
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let current = Arc::clone(&state.model);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        state.model = next.model;
        log::info!("Redo ausgeführt: {}", next.label);
        state.ui.set_status(format!("Wiederhergestellt: {}", next.label));
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
