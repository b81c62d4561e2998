//! Flächen-Kontext eines aktiven Werkzeugs.

use crate::core::{face_segments, BoundaryIndex, Face, FaceId, Segment};
use crate::shared::{parse_length, DividerOptions, LengthUnit};
use glam::DVec3;

/// Alles, was ein Werkzeug über seine Fläche wissen muss.
///
/// Wird einmal beim Aktivieren gebaut; die Fläche ist eine Kopie, damit das
/// Werkzeug unabhängig von späteren Modell-Snapshots rechnet.
#[derive(Debug, Clone)]
pub struct FaceContext {
    /// ID der Fläche im Modell
    pub face_id: FaceId,
    /// Die Fläche selbst
    pub face: Face,
    /// Begrenzungskanten und -ecken aller Loops
    pub boundary: BoundaryIndex,
    /// Längen-Toleranz
    pub tolerance: f64,
    /// Modelleinheit für getippte Längen
    pub length_unit: LengthUnit,
    /// Obergrenze wiederholter Linien pro Achse
    pub max_lines_per_axis: usize,
}

impl FaceContext {
    /// Baut den Kontext für `face` mit den Laufzeit-Optionen.
    pub fn new(face_id: FaceId, face: &Face, options: &DividerOptions) -> Self {
        Self {
            face_id,
            face: face.clone(),
            boundary: BoundaryIndex::from_face(face),
            tolerance: options.tolerance,
            length_unit: options.length_unit,
            max_lines_per_axis: options.max_lines_per_axis,
        }
    }

    /// Flächennormale (Einheitsvektor).
    pub fn normal(&self) -> DVec3 {
        self.face.normal()
    }

    /// Projiziert einen Punkt auf die Flächenebene.
    pub fn project_point(&self, point: DVec3) -> DVec3 {
        self.face.plane().project_point(point)
    }

    /// Entfernt den Normalanteil eines Vektors.
    pub fn project_vector(&self, vector: DVec3) -> DVec3 {
        self.face.plane().project_vector(vector)
    }

    /// Schnitt-Segmente der Geraden `(origin, direction)` innerhalb der Fläche.
    pub fn face_segments(&self, origin: DVec3, direction: DVec3) -> Vec<Segment> {
        face_segments(&self.face, &self.boundary, origin, direction, self.tolerance)
    }

    /// Projektionsbereich aller Begrenzungsecken auf `axis` relativ zu `origin`.
    pub fn projection_range(&self, origin: DVec3, axis: DVec3) -> (f64, f64) {
        self.boundary.projection_range(origin, axis)
    }

    /// Parst eine getippte Länge; nur positive Werte über der Toleranz zählen.
    pub fn parse_positive_length(&self, text: &str) -> Option<f64> {
        parse_length(text, self.length_unit).filter(|value| *value > self.tolerance)
    }
}
