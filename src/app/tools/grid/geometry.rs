//! Geometrie des Rechteckraster-Werkzeugs.

use super::super::common::{
    exceeds_line_cap, perpendicular_in_plane, repeated_lines, FaceContext, LineFamily,
};
use super::state::GridFrame;
use crate::core::Segment;
use glam::DVec3;

/// Auf die Ebene beschränkte Kandidaten-Ecke; `None` bei zu kurzer Kante.
pub(crate) fn second_corner_candidate(
    ctx: &FaceContext,
    first_corner: DVec3,
    hover: DVec3,
) -> Option<DVec3> {
    let edge = ctx.project_vector(hover - first_corner);
    (edge.length() > ctx.tolerance).then_some(first_corner + edge)
}

/// Bestätigt die zweite Ecke: Richtung, Senkrechte und beide Ecken-Bereiche.
pub(crate) fn frame_for_corners(
    ctx: &FaceContext,
    first_corner: DVec3,
    second_corner: DVec3,
) -> Option<GridFrame> {
    let edge = second_corner - first_corner;
    let length = edge.length();
    if length <= ctx.tolerance {
        return None;
    }
    let direction = edge / length;
    let perpendicular = perpendicular_in_plane(ctx, direction)?;
    let (u_min, u_max) = ctx.projection_range(first_corner, direction);
    let (v_min, v_max) = ctx.projection_range(first_corner, perpendicular);
    Some(GridFrame {
        first_corner,
        second_corner,
        direction,
        perpendicular,
        length,
        u_min,
        u_max,
        v_min,
        v_max,
    })
}

/// Vorzeichenbehaftete Breite der Mausposition relativ zur zweiten Ecke.
pub(crate) fn width_at(frame: &GridFrame, hover: DVec3) -> f64 {
    (hover - frame.second_corner).dot(frame.perpendicular)
}

/// Umriss des aufgespannten Rechtecks (Breite mit Vorzeichen).
///
/// Bei verschwindender Breite nur die Kante erste → zweite Ecke.
pub(crate) fn rectangle_outline(frame: &GridFrame, width: f64, tolerance: f64) -> Vec<Segment> {
    let base = Segment::new(frame.first_corner, frame.second_corner);
    if width.abs() <= tolerance {
        return vec![base];
    }
    let offset = frame.perpendicular * width;
    let third = frame.second_corner + offset;
    let fourth = frame.first_corner + offset;
    vec![
        base,
        Segment::new(frame.second_corner, third),
        Segment::new(third, fourth),
        Segment::new(fourth, frame.first_corner),
    ]
}

/// Linienscharen quer (Schritt = Länge) und längs (Schritt = Breite).
fn grid_families(frame: &GridFrame, width: f64) -> [LineFamily; 2] {
    [
        LineFamily {
            anchor: frame.first_corner,
            offset_axis: frame.direction,
            line_direction: frame.perpendicular,
            min: frame.u_min,
            max: frame.u_max,
            step: frame.length,
        },
        LineFamily {
            anchor: frame.first_corner,
            offset_axis: frame.perpendicular,
            line_direction: frame.direction,
            min: frame.v_min,
            max: frame.v_max,
            step: width,
        },
    ]
}

/// Alle Rasterlinien für Länge und Breite (nicht dedupliziert).
pub(crate) fn build_grid_segments(ctx: &FaceContext, frame: &GridFrame, width: f64) -> Vec<Segment> {
    grid_families(frame, width)
        .iter()
        .flat_map(|family| repeated_lines(ctx, family))
        .collect()
}

/// Wie `build_grid_segments`, aber `None`, wenn eine Achse die
/// Vorschau-Obergrenze überschreitet.
pub(crate) fn preview_grid_segments(
    ctx: &FaceContext,
    frame: &GridFrame,
    width: f64,
) -> Option<Vec<Segment>> {
    let families = grid_families(frame, width);
    if families.iter().any(|family| exceeds_line_cap(ctx, family)) {
        return None;
    }
    Some(build_grid_segments(ctx, frame, width))
}
