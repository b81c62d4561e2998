//! Planare Fläche mit äußerer Begrenzung und optionalen Löchern.

use super::Plane;
use crate::shared::TOLERANCE;
use glam::{DVec2, DVec3};

/// ID einer Fläche im Modell.
pub type FaceId = u64;

/// Lage eines Punkts relativ zur nutzbaren Flächen-Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    /// Strikt im Inneren und in der Ebene
    Inside,
    /// Auf einer Begrenzungskante (inkl. Ecken) einer beliebigen Schleife
    OnEdge,
    /// Grundriss im Inneren, Punkt liegt aber außerhalb der Ebene
    OnFace,
    /// Außerhalb der äußeren Schleife oder innerhalb eines Lochs
    Outside,
}

impl PointClassification {
    /// Gilt der Punkt als "auf der Fläche" (Inside, OnEdge oder OnFace)?
    pub fn is_on_surface(self) -> bool {
        !matches!(self, PointClassification::Outside)
    }
}

/// Planare polygonale Fläche: eine äußere Schleife und beliebig viele Loch-Schleifen.
///
/// Schleifen sind geschlossen, die letzte Ecke wird implizit mit der ersten verbunden.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    outer: Vec<DVec3>,
    holes: Vec<Vec<DVec3>>,
    plane: Plane,
}

impl Face {
    /// Erstellt eine Fläche aus äußerer Schleife und Löchern.
    ///
    /// Planarität wird gegen die Standard-Toleranz `TOLERANCE` geprüft;
    /// siehe [`Face::with_tolerance`].
    pub fn new(outer: Vec<DVec3>, holes: Vec<Vec<DVec3>>) -> anyhow::Result<Self> {
        Self::with_tolerance(outer, holes, TOLERANCE)
    }

    /// Erstellt eine Fläche mit eigener Planaritäts-Toleranz.
    ///
    /// Schlägt fehl bei weniger als 3 Ecken pro Schleife, degenerierter Normale
    /// oder Ecken, die weiter als `tolerance` von der Ebene entfernt liegen.
    pub fn with_tolerance(
        outer: Vec<DVec3>,
        holes: Vec<Vec<DVec3>>,
        tolerance: f64,
    ) -> anyhow::Result<Self> {
        if outer.len() < 3 {
            anyhow::bail!(
                "Äußere Schleife braucht mindestens 3 Ecken (erhalten: {})",
                outer.len()
            );
        }
        if let Some(hole) = holes.iter().find(|h| h.len() < 3) {
            anyhow::bail!(
                "Loch-Schleife braucht mindestens 3 Ecken (erhalten: {})",
                hole.len()
            );
        }

        let normal = newell_normal(&outer);
        if normal.length() <= f64::EPSILON {
            anyhow::bail!("Flächen-Normale ist degeneriert (kollineare Ecken?)");
        }

        let centroid = outer.iter().copied().sum::<DVec3>() / outer.len() as f64;
        let plane = Plane::new(centroid, normal);

        let off_plane = outer
            .iter()
            .chain(holes.iter().flatten())
            .map(|p| plane.signed_distance(*p).abs())
            .fold(0.0_f64, f64::max);
        if off_plane > tolerance {
            anyhow::bail!(
                "Fläche ist nicht planar (max. Abweichung {:.6})",
                off_plane
            );
        }

        Ok(Self {
            outer,
            holes,
            plane,
        })
    }

    /// Alle Schleifen (äußere zuerst, dann Löcher).
    pub fn loops(&self) -> impl Iterator<Item = &[DVec3]> {
        std::iter::once(self.outer.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }

    /// Alle Ecken-Positionen über alle Schleifen.
    pub fn vertices(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.loops().flat_map(|l| l.iter().copied())
    }

    /// Alle Kanten als (Start, Ende) über alle Schleifen.
    pub fn edges(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        self.loops().flat_map(loop_edges)
    }

    /// Einheits-Normale der Fläche.
    pub fn normal(&self) -> DVec3 {
        self.plane.normal
    }

    /// Trägerebene der Fläche.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Flächeninhalt (äußere Schleife minus Löcher).
    pub fn area(&self) -> f64 {
        let outer = newell_normal(&self.outer).length() * 0.5;
        let holes: f64 = self
            .holes
            .iter()
            .map(|h| newell_normal(h).length() * 0.5)
            .sum();
        (outer - holes).max(0.0)
    }

    /// Klassifiziert einen Punkt gegen die nutzbare Oberfläche.
    pub fn classify_point(&self, point: DVec3, tolerance: f64) -> PointClassification {
        let plane_distance = self.plane.signed_distance(point).abs();
        let projected = self.plane.project_point(point);

        if plane_distance <= tolerance
            && self
                .edges()
                .any(|(a, b)| distance_to_segment(projected, a, b) <= tolerance)
        {
            return PointClassification::OnEdge;
        }

        let local = self.plane.to_local(projected);
        let in_outer = point_in_loop(local, &self.local_loop(&self.outer));
        let in_hole = self
            .holes
            .iter()
            .any(|hole| point_in_loop(local, &self.local_loop(hole)));

        match (in_outer && !in_hole, plane_distance <= tolerance) {
            (true, true) => PointClassification::Inside,
            (true, false) => PointClassification::OnFace,
            (false, _) => PointClassification::Outside,
        }
    }

    fn local_loop(&self, points: &[DVec3]) -> Vec<DVec2> {
        points.iter().map(|p| self.plane.to_local(*p)).collect()
    }
}

/// Kanten einer geschlossenen Schleife (letzte Ecke → erste Ecke inklusive).
fn loop_edges(points: &[DVec3]) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Newell-Normale: Richtung = Normale, Länge = doppelter Flächeninhalt.
fn newell_normal(points: &[DVec3]) -> DVec3 {
    loop_edges(points).fold(DVec3::ZERO, |acc, (a, b)| {
        acc + DVec3::new(
            (a.y - b.y) * (a.z + b.z),
            (a.z - b.z) * (a.x + b.x),
            (a.x - b.x) * (a.y + b.y),
        )
    })
}

/// Even-Odd-Test (Strahl in +X-Richtung).
fn point_in_loop(point: DVec2, polygon: &[DVec2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Kürzester Abstand eines Punkts zu einer endlichen Strecke.
pub(crate) fn distance_to_segment(point: DVec3, a: DVec3, b: DVec3) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
