//! Geometrie-Speicher: Flächen und eingefügte Kanten.

use super::{Face, FaceId, Segment, SegmentKey};
use glam::DVec3;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// ID einer eingefügten Kante.
pub type EdgeId = u64;

/// Eine eingefügte gerade Kante.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelEdge {
    /// Eindeutige Kanten-ID
    pub id: EdgeId,
    /// Startpunkt
    pub start: DVec3,
    /// Endpunkt
    pub end: DVec3,
}

/// Geometrie-Container des Hosts: Flächen plus durch Unterteilung erzeugte Kanten.
///
/// Flächen behalten ihre Einfüge-Reihenfolge (`IndexMap`), damit Abfragen
/// deterministisch bleiben.
#[derive(Debug, Clone, Default)]
pub struct Model {
    faces: IndexMap<FaceId, Face>,
    edges: Vec<ModelEdge>,
    edge_keys: HashSet<SegmentKey>,
    next_face_id: FaceId,
    next_edge_id: EdgeId,
}

impl Model {
    /// Erstellt ein leeres Modell.
    pub fn new() -> Self {
        Self {
            next_face_id: 1,
            next_edge_id: 1,
            ..Default::default()
        }
    }

    /// Fügt eine Fläche hinzu und gibt ihre ID zurück.
    pub fn add_face(&mut self, face: Face) -> FaceId {
        let id = self.next_face_id.max(1);
        self.next_face_id = id + 1;
        self.faces.insert(id, face);
        id
    }

    /// Entfernt eine Fläche. Sie gilt danach als ungültig.
    pub fn remove_face(&mut self, id: FaceId) -> Option<Face> {
        self.faces.shift_remove(&id)
    }

    /// Gibt eine Fläche zurück, falls sie (noch) Teil des Modells ist.
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(&id)
    }

    /// Ist die Fläche noch Teil des Modells?
    pub fn contains_face(&self, id: FaceId) -> bool {
        self.faces.contains_key(&id)
    }

    /// IDs aller Flächen in Einfüge-Reihenfolge.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.keys().copied()
    }

    /// Anzahl der Flächen.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Fügt eine gerade Kante zwischen zwei Punkten ein.
    ///
    /// Schlägt fehl, wenn die Kante nicht länger als `tolerance` ist oder mit einer
    /// bereits vorhandenen Kante zusammenfällt.
    pub fn add_edge(&mut self, start: DVec3, end: DVec3, tolerance: f64) -> anyhow::Result<EdgeId> {
        let segment = Segment::new(start, end);
        if segment.is_degenerate(tolerance) {
            anyhow::bail!(
                "Kante zu kurz ({:.6} <= {:.6})",
                segment.length(),
                tolerance
            );
        }
        if !self.edge_keys.insert(segment.key()) {
            anyhow::bail!("Kante existiert bereits: {:?} → {:?}", start, end);
        }

        let id = self.next_edge_id.max(1);
        self.next_edge_id = id + 1;
        self.edges.push(ModelEdge { id, start, end });
        Ok(id)
    }

    /// Alle eingefügten Kanten in Einfüge-Reihenfolge.
    pub fn edges(&self) -> &[ModelEdge] {
        &self.edges
    }

    /// Anzahl der eingefügten Kanten.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
