//! Wiederholte Schnittlinien über einen Index-Bereich.

use super::FaceContext;
use crate::core::{index_count, index_range, Segment};
use glam::DVec3;

/// Eine Schar paralleler Schnittlinien.
///
/// Linie `i` verläuft durch `anchor + offset_axis * (i * step)` in Richtung
/// `line_direction`; `i` deckt den Bereich `[min, max]` ab (inkl. 0).
#[derive(Debug, Clone, Copy)]
pub struct LineFamily {
    pub anchor: DVec3,
    pub offset_axis: DVec3,
    pub line_direction: DVec3,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Bräuchte die Schar mehr Linien als `max_lines_per_axis`?
///
/// Die Obergrenze gilt nur für die Vorschau; übernommene Ergebnisse werden
/// immer vollständig gebaut.
pub fn exceeds_line_cap(ctx: &FaceContext, family: &LineFamily) -> bool {
    let count = index_count(family.min, family.max, family.step);
    if count > ctx.max_lines_per_axis as u64 {
        log::warn!(
            "{} Linien überschreiten die Vorschau-Obergrenze von {} pro Achse",
            count,
            ctx.max_lines_per_axis
        );
        return true;
    }
    false
}

/// Sammelt die Schnitt-Segmente aller Linien der Schar.
pub fn repeated_lines(ctx: &FaceContext, family: &LineFamily) -> Vec<Segment> {
    index_range(family.min, family.max, family.step)
        .into_iter()
        .flat_map(|i| {
            let origin = family.anchor + family.offset_axis * (i as f64 * family.step);
            ctx.face_segments(origin, family.line_direction)
        })
        .collect()
}
