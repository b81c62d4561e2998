//! Flächen-Ebene: Projektion von Punkten und Vektoren auf die Ebene einer Fläche.

use glam::{DVec2, DVec3};

/// Trägerebene einer planaren Fläche (Einheits-Normale + Punkt auf der Fläche).
///
/// Wird einmal pro Fläche abgeleitet und ist danach unveränderlich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Einheits-Normale der Ebene
    pub normal: DVec3,
    /// Beliebiger Punkt auf der Ebene
    pub origin: DVec3,
}

impl Plane {
    /// Erstellt eine Ebene. Die Normale wird normalisiert.
    pub fn new(origin: DVec3, normal: DVec3) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            origin,
        }
    }

    /// Vorzeichenbehafteter Abstand eines Punkts zur Ebene (entlang der Normale).
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Orthogonale Projektion eines Punkts auf die Ebene.
    pub fn project_point(&self, point: DVec3) -> DVec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Anteil eines Vektors, der in der Ebene liegt (Normal-Komponente entfernt).
    ///
    /// Hält vom Benutzer gezeichnete Richtungen in der Flächenebene, auch wenn der
    /// 3D-Pick leicht neben der Fläche landet.
    pub fn project_vector(&self, vector: DVec3) -> DVec3 {
        vector - self.normal * vector.dot(self.normal)
    }

    /// Orthonormale In-Ebene-Basis (u, v).
    pub fn basis(&self) -> (DVec3, DVec3) {
        if !self.normal.is_normalized() {
            return (DVec3::X, DVec3::Y);
        }
        self.normal.any_orthonormal_pair()
    }

    /// Lokale 2D-Koordinaten eines Punkts in der Ebenen-Basis.
    pub fn to_local(&self, point: DVec3) -> DVec2 {
        let (u, v) = self.basis();
        let rel = point - self.origin;
        DVec2::new(rel.dot(u), rel.dot(v))
    }
}
