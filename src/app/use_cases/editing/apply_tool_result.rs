//! Use-Case: Ergebnis eines Unterteilungs-Werkzeugs als Kanten einfügen.

use crate::app::history::Snapshot;
use crate::app::tools::ToolResult;
use crate::app::AppState;
use crate::core::{unique_segments, EdgeId, Segment};
use std::sync::Arc;

/// Bericht einer Übernahme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitReport {
    /// Name der Operation
    pub operation_name: String,
    /// IDs der eingefügten Kanten in Einfüge-Reihenfolge
    pub created_edge_ids: Vec<EdgeId>,
    /// Segmente, deren Einfügen fehlschlug (übersprungen)
    pub failed_segments: Vec<Segment>,
}

impl CommitReport {
    /// Wurde mindestens eine Kante eingefügt?
    pub fn has_changes(&self) -> bool {
        !self.created_edge_ids.is_empty()
    }
}

/// Wendet ein `ToolResult` auf den AppState an.
///
/// Segmente werden zuerst bereinigt; ohne verbleibende Segmente passiert nichts.
/// Alle Kanten landen in einem Undo-Schritt mit dem Operationsnamen. Einzelne
/// Fehlschläge werden übersprungen und im Bericht gesammelt. Wird gar keine
/// Kante eingefügt, bleibt das Modell unverändert und es entsteht kein Undo-Schritt.
pub fn apply_tool_result(state: &mut AppState, result: ToolResult) -> CommitReport {
    let tolerance = state.options.tolerance;
    let mut report = CommitReport {
        operation_name: result.operation_name.to_string(),
        ..CommitReport::default()
    };

    let segments = unique_segments(&result.segments, tolerance);
    if segments.is_empty() {
        log::info!("{}: keine Segmente, nichts übernommen", result.operation_name);
        return report;
    }

    // Zustand VOR Mutation; hält eine Referenz, damit make_mut klont
    let before = Arc::clone(&state.model);
    let model = Arc::make_mut(&mut state.model);

    for segment in segments {
        match model.add_edge(segment.a, segment.b, tolerance) {
            Ok(id) => report.created_edge_ids.push(id),
            Err(err) => {
                log::warn!("Segment übersprungen: {err:#}");
                report.failed_segments.push(segment);
            }
        }
    }

    if report.has_changes() {
        state
            .history
            .record_snapshot(Snapshot::new(&before, result.operation_name));
    } else {
        state.model = before;
    }

    log::info!(
        "{}: {} Kanten eingefügt, {} übersprungen",
        result.operation_name,
        report.created_edge_ids.len(),
        report.failed_segments.len()
    );
    report
}
