//! Geometrie des Parallele-Linien-Werkzeugs.

use super::super::common::{
    exceeds_line_cap, perpendicular_in_plane, repeated_lines, FaceContext, LineFamily,
};
use super::state::ParallelFrame;
use crate::core::Segment;
use glam::DVec3;

/// Bestätigt eine Richtung: Senkrechte und Offset-Bereich über alle Ecken.
///
/// `None`, wenn die Senkrechte entartet (Richtung parallel zur Normalen).
pub(crate) fn frame_for_direction(
    ctx: &FaceContext,
    base_point: DVec3,
    direction: DVec3,
) -> Option<ParallelFrame> {
    let perpendicular = perpendicular_in_plane(ctx, direction)?;
    let (offset_min, offset_max) = ctx.projection_range(base_point, perpendicular);
    Some(ParallelFrame {
        base_point,
        direction,
        perpendicular,
        offset_min,
        offset_max,
    })
}

/// Abstand der Mausposition zur Basislinie.
pub(crate) fn spacing_at(frame: &ParallelFrame, hover: DVec3) -> f64 {
    (hover - frame.base_point).dot(frame.perpendicular).abs()
}

/// Schnitt-Segmente der Basislinie allein.
pub(crate) fn base_line(ctx: &FaceContext, frame: &ParallelFrame) -> Vec<Segment> {
    ctx.face_segments(frame.base_point, frame.direction)
}

fn spacing_family(frame: &ParallelFrame, spacing: f64) -> LineFamily {
    LineFamily {
        anchor: frame.base_point,
        offset_axis: frame.perpendicular,
        line_direction: frame.direction,
        min: frame.offset_min,
        max: frame.offset_max,
        step: spacing,
    }
}

/// Alle Schnitt-Segmente für den Abstand `spacing` (nicht dedupliziert).
///
/// Abstände bis zur Toleranz liefern nur die Basislinie.
pub(crate) fn build_parallel_segments(
    ctx: &FaceContext,
    frame: &ParallelFrame,
    spacing: f64,
) -> Vec<Segment> {
    if spacing <= ctx.tolerance {
        return base_line(ctx, frame);
    }
    repeated_lines(ctx, &spacing_family(frame, spacing))
}

/// Wie `build_parallel_segments`, aber `None` über der Vorschau-Obergrenze.
pub(crate) fn preview_parallel_segments(
    ctx: &FaceContext,
    frame: &ParallelFrame,
    spacing: f64,
) -> Option<Vec<Segment>> {
    if spacing > ctx.tolerance && exceeds_line_cap(ctx, &spacing_family(frame, spacing)) {
        return None;
    }
    Some(build_parallel_segments(ctx, frame, spacing))
}
