//! JSON-Export des Endzustands eines Szenarios.

use crate::app::AppState;
use crate::core::ModelEdge;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    edge_count: usize,
    edges: &'a [ModelEdge],
    status: &'a str,
    notifications: &'a [String],
    beep_count: usize,
    can_undo: bool,
    can_redo: bool,
}

/// Serialisiert Kanten und Rückmeldungen als formatiertes JSON.
pub fn write_report(state: &AppState) -> Result<String> {
    let report = Report {
        edge_count: state.edge_count(),
        edges: state.model.edges(),
        status: &state.ui.status_text,
        notifications: &state.ui.notifications,
        beep_count: state.ui.beep_count,
        can_undo: state.can_undo(),
        can_redo: state.can_redo(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
