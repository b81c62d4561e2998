//! Vorberechneter Kanten- und Ecken-Index einer Fläche.

use super::Face;
use glam::DVec3;

/// Eine Begrenzungskante: unendliche Trägergerade plus endliche Endpunkte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEdge {
    /// Punkt auf der Trägergeraden
    pub line_point: DVec3,
    /// Richtung der Trägergeraden (nicht normalisiert, = end - start)
    pub line_direction: DVec3,
    /// Startpunkt der Kante
    pub start: DVec3,
    /// Endpunkt der Kante
    pub end: DVec3,
}

impl BoundaryEdge {
    /// Erstellt eine Kante aus zwei Endpunkten.
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self {
            line_point: start,
            line_direction: end - start,
            start,
            end,
        }
    }

    /// Länge der endlichen Kante.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Liegt `point` innerhalb der endlichen Kante?
    ///
    /// Summe der Abstände zu beiden Endpunkten muss der Kantenlänge bis auf
    /// `2 × tolerance` entsprechen. Kanten kürzer als `tolerance` enthalten nichts.
    pub fn contains(&self, point: DVec3, tolerance: f64) -> bool {
        let total = self.length();
        if total <= tolerance {
            return false;
        }
        let distance = self.start.distance(point) + point.distance(self.end);
        (distance - total).abs() <= tolerance * 2.0
    }
}

/// Alle Begrenzungskanten und -ecken einer Fläche (äußere Schleife + Löcher).
///
/// Wird einmal bei der Flächenauswahl aufgebaut und danach nicht mehr verändert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryIndex {
    edges: Vec<BoundaryEdge>,
    vertices: Vec<DVec3>,
}

impl BoundaryIndex {
    /// Baut den Index aus allen Schleifen der Fläche.
    pub fn from_face(face: &Face) -> Self {
        Self {
            edges: face.edges().map(|(a, b)| BoundaryEdge::new(a, b)).collect(),
            vertices: face.vertices().collect(),
        }
    }

    /// Begrenzungskanten über alle Schleifen.
    pub fn edges(&self) -> &[BoundaryEdge] {
        &self.edges
    }

    /// Begrenzungsecken über alle Schleifen.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Ist der Index leer (keine Begrenzungsdaten)?
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Minimum und Maximum der Ecken-Projektionen auf `axis`, relativ zu `origin`.
    ///
    /// Ohne Ecken: `(0.0, 0.0)`.
    pub fn projection_range(&self, origin: DVec3, axis: DVec3) -> (f64, f64) {
        let mut values = self.vertices.iter().map(|v| (*v - origin).dot(axis));
        let Some(first) = values.next() else {
            return (0.0, 0.0);
        };
        values.fold((first, first), |(min, max), d| (min.min(d), max.max(d)))
    }
}
