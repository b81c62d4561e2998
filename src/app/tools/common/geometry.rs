//! Ebenen-gebundene Vektor-Hilfen.

use super::FaceContext;
use glam::DVec3;

/// Auf die Ebene beschränkter Richtungsvektor `from → to` (normalisiert).
///
/// `None`, wenn der projizierte Vektor nicht länger als die Toleranz ist.
pub fn confined_direction(ctx: &FaceContext, from: DVec3, to: DVec3) -> Option<DVec3> {
    let vector = ctx.project_vector(to - from);
    (vector.length() > ctx.tolerance).then(|| vector.normalize())
}

/// `normal × direction` (normalisiert), senkrecht zur Richtung, in der Ebene.
pub fn perpendicular_in_plane(ctx: &FaceContext, direction: DVec3) -> Option<DVec3> {
    let perpendicular = ctx.normal().cross(direction);
    (perpendicular.length() > ctx.tolerance).then(|| perpendicular.normalize())
}
