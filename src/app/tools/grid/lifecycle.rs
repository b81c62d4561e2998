//! Übergangsfunktion und DivisionTool-Implementierung des Rechteckraster-Werkzeugs.

use super::super::common::FaceContext;
use super::super::{
    last_preview, DivisionMode, DivisionTool, ToolEffect, ToolEvent, ToolPreview, ToolResult,
    Transition,
};
use super::geometry::{
    build_grid_segments, frame_for_corners, preview_grid_segments, rectangle_outline,
    second_corner_candidate, width_at,
};
use super::state::{GridDivisionTool, GridFrame, GridPhase};
use crate::core::{unique_segments, FaceId, Segment};
use glam::DVec3;

/// Name der rückgängig machbaren Operation.
pub(crate) const OPERATION_NAME: &str = "Flächenteilung: Rechteckraster";

const TOO_MANY_LINES: &str = "Zu viele Linien: Rastergröße erhöhen";

fn status_for(phase: &GridPhase) -> &'static str {
    match phase {
        GridPhase::AwaitingFirstCorner => "Erste Ecke des Rechtecks wählen",
        GridPhase::AwaitingSecondCorner { .. } => "Zweite Ecke des Rechtecks wählen",
        GridPhase::AwaitingWidth { .. } => "Breite mit der Maus wählen oder als Länge eingeben",
        GridPhase::Done => "Fertig",
    }
}

/// Berechnet den nächsten Zustand und die Seiteneffekte für `event`.
pub(crate) fn transition(
    ctx: &FaceContext,
    phase: &GridPhase,
    event: ToolEvent,
) -> Transition<GridPhase> {
    match (phase, event) {
        (GridPhase::Done, _) => Transition::to(GridPhase::Done),
        (_, ToolEvent::Cancel) => finish(),

        (GridPhase::AwaitingFirstCorner, ToolEvent::PointerDown(Some(point))) => {
            let first_corner = ctx.project_point(point);
            enter(GridPhase::AwaitingSecondCorner {
                first_corner,
                candidate: None,
            })
            .with(ToolEffect::Preview(ToolPreview {
                segments: Vec::new(),
                highlight_points: vec![first_corner],
            }))
        }
        (GridPhase::AwaitingFirstCorner, ToolEvent::PointerDown(None)) => reject(phase.clone()),

        (GridPhase::AwaitingSecondCorner { first_corner, .. }, ToolEvent::PointerMove(Some(hover))) => {
            let candidate = second_corner_candidate(ctx, *first_corner, hover);
            Transition::to(GridPhase::AwaitingSecondCorner {
                first_corner: *first_corner,
                candidate,
            })
            .with(ToolEffect::Preview(edge_preview(*first_corner, candidate)))
        }
        (
            GridPhase::AwaitingSecondCorner {
                first_corner,
                candidate,
            },
            ToolEvent::PointerDown(point),
        ) => {
            let candidate = match point {
                Some(point) => second_corner_candidate(ctx, *first_corner, point),
                None => *candidate,
            };
            match candidate.and_then(|second| frame_for_corners(ctx, *first_corner, second)) {
                Some(frame) => enter(GridPhase::AwaitingWidth { frame, width: None }).with(
                    ToolEffect::Preview(frame_preview(
                        &frame,
                        rectangle_outline(&frame, 0.0, ctx.tolerance),
                    )),
                ),
                None => reject(GridPhase::AwaitingSecondCorner {
                    first_corner: *first_corner,
                    candidate,
                }),
            }
        }

        (GridPhase::AwaitingWidth { frame, .. }, ToolEvent::PointerMove(Some(hover))) => {
            width_preview(ctx, frame, width_at(frame, hover))
        }
        (GridPhase::AwaitingWidth { frame, width }, ToolEvent::PointerDown(point)) => {
            let width = point.map(|point| width_at(frame, point)).or(*width);
            match width.filter(|width| width.abs() > ctx.tolerance) {
                Some(width) => finalize(ctx, frame, width.abs()),
                None => reject(GridPhase::AwaitingWidth {
                    frame: *frame,
                    width,
                }),
            }
        }
        (GridPhase::AwaitingWidth { frame, .. }, ToolEvent::TextEntry(text)) => {
            match ctx.parse_positive_length(&text) {
                Some(width) => finalize(ctx, frame, width),
                None => Transition::to(phase.clone()),
            }
        }

        _ => Transition::to(phase.clone()),
    }
}

fn enter(phase: GridPhase) -> Transition<GridPhase> {
    let status = status_for(&phase).to_string();
    Transition::to(phase).with(ToolEffect::Status(status))
}

fn reject(phase: GridPhase) -> Transition<GridPhase> {
    Transition::to(phase).with(ToolEffect::Reject)
}

fn finish() -> Transition<GridPhase> {
    Transition::to(GridPhase::Done)
        .with(ToolEffect::Preview(ToolPreview::default()))
        .with(ToolEffect::Finish)
}

fn edge_preview(first_corner: DVec3, candidate: Option<DVec3>) -> ToolPreview {
    ToolPreview {
        segments: candidate
            .map(|second| vec![Segment::new(first_corner, second)])
            .unwrap_or_default(),
        highlight_points: vec![first_corner],
    }
}

fn frame_preview(frame: &GridFrame, segments: Vec<Segment>) -> ToolPreview {
    ToolPreview {
        segments,
        highlight_points: vec![frame.first_corner, frame.second_corner],
    }
}

fn width_preview(ctx: &FaceContext, frame: &GridFrame, width: f64) -> Transition<GridPhase> {
    let next = GridPhase::AwaitingWidth {
        frame: *frame,
        width: Some(width),
    };
    let mut segments = rectangle_outline(frame, width, ctx.tolerance);
    if width.abs() <= ctx.tolerance {
        return Transition::to(next).with(ToolEffect::Preview(frame_preview(frame, segments)));
    }

    match preview_grid_segments(ctx, frame, width.abs()) {
        Some(grid) => {
            segments.extend(grid);
            Transition::to(next)
                .with(ToolEffect::Preview(frame_preview(frame, segments)))
                .with(ToolEffect::Status(format!(
                    "Raster: {:.3} × {:.3}",
                    frame.length,
                    width.abs()
                )))
        }
        None => Transition::to(next)
            .with(ToolEffect::Preview(frame_preview(frame, segments)))
            .with(ToolEffect::Status(TOO_MANY_LINES.to_string())),
    }
}

fn finalize(ctx: &FaceContext, frame: &GridFrame, width: f64) -> Transition<GridPhase> {
    let segments = build_grid_segments(ctx, frame, width);
    Transition::to(GridPhase::Done)
        .with(ToolEffect::Preview(ToolPreview::default()))
        .with(ToolEffect::Commit(ToolResult {
            operation_name: OPERATION_NAME,
            segments: unique_segments(&segments, ctx.tolerance),
        }))
        .with(ToolEffect::Finish)
}

impl DivisionTool for GridDivisionTool {
    fn mode(&self) -> DivisionMode {
        DivisionMode::Grid
    }

    fn face_id(&self) -> FaceId {
        self.ctx.face_id
    }

    fn instruction_text(&self) -> &str {
        status_for(&GridPhase::AwaitingFirstCorner)
    }

    fn status_text(&self) -> &str {
        status_for(&self.phase)
    }

    fn handle_event(&mut self, event: ToolEvent) -> Vec<ToolEffect> {
        let Transition { phase, effects } = transition(&self.ctx, &self.phase, event);
        if phase != self.phase {
            log::debug!("Rechteckraster: {:?} -> {:?}", self.phase, phase);
        }
        if let Some(preview) = last_preview(&effects) {
            self.preview = preview.clone();
        }
        self.phase = phase;
        effects
    }

    fn preview(&self) -> &ToolPreview {
        &self.preview
    }

    fn is_done(&self) -> bool {
        self.phase == GridPhase::Done
    }

    fn has_pending_input(&self) -> bool {
        !matches!(self.phase, GridPhase::AwaitingFirstCorner | GridPhase::Done)
    }
}
