//! Übergangsfunktion und DivisionTool-Implementierung des Parallele-Linien-Werkzeugs.

use super::super::common::{confined_direction, FaceContext};
use super::super::{
    last_preview, DivisionMode, DivisionTool, ToolEffect, ToolEvent, ToolPreview, ToolResult,
    Transition,
};
use super::geometry::{
    base_line, build_parallel_segments, frame_for_direction, preview_parallel_segments, spacing_at,
};
use super::state::{ParallelDivisionTool, ParallelFrame, ParallelPhase};
use crate::core::{unique_segments, FaceId, Segment};
use glam::DVec3;

/// Name der rückgängig machbaren Operation.
pub(crate) const OPERATION_NAME: &str = "Flächenteilung: Parallele Linien";

const TOO_MANY_LINES: &str = "Zu viele Linien: Abstand vergrößern";

fn status_for(phase: &ParallelPhase) -> &'static str {
    match phase {
        ParallelPhase::AwaitingBasePoint => "Basispunkt auf der Fläche wählen",
        ParallelPhase::AwaitingDirection { .. } => "Richtung der Linien wählen",
        ParallelPhase::AwaitingSpacing { .. } => {
            "Abstand mit der Maus wählen oder als Länge eingeben"
        }
        ParallelPhase::Done => "Fertig",
    }
}

/// Berechnet den nächsten Zustand und die Seiteneffekte für `event`.
pub(crate) fn transition(
    ctx: &FaceContext,
    phase: &ParallelPhase,
    event: ToolEvent,
) -> Transition<ParallelPhase> {
    match (phase, event) {
        (ParallelPhase::Done, _) => Transition::to(ParallelPhase::Done),
        (_, ToolEvent::Cancel) => finish(),

        (ParallelPhase::AwaitingBasePoint, ToolEvent::PointerDown(Some(point))) => {
            let base_point = ctx.project_point(point);
            enter(ParallelPhase::AwaitingDirection {
                base_point,
                candidate: None,
            })
            .with(ToolEffect::Preview(ToolPreview {
                segments: Vec::new(),
                highlight_points: vec![base_point],
            }))
        }
        (ParallelPhase::AwaitingBasePoint, ToolEvent::PointerDown(None)) => reject(phase.clone()),

        (
            ParallelPhase::AwaitingDirection { base_point, .. },
            ToolEvent::PointerMove(Some(hover)),
        ) => {
            let candidate = confined_direction(ctx, *base_point, hover);
            Transition::to(ParallelPhase::AwaitingDirection {
                base_point: *base_point,
                candidate,
            })
            .with(ToolEffect::Preview(direction_preview(
                ctx,
                *base_point,
                candidate,
            )))
        }
        (
            ParallelPhase::AwaitingDirection {
                base_point,
                candidate,
            },
            ToolEvent::PointerDown(point),
        ) => {
            let candidate = match point {
                Some(point) => confined_direction(ctx, *base_point, point),
                None => *candidate,
            };
            match candidate.and_then(|direction| frame_for_direction(ctx, *base_point, direction)) {
                Some(frame) => enter(ParallelPhase::AwaitingSpacing {
                    frame,
                    spacing: None,
                })
                .with(ToolEffect::Preview(frame_preview(&frame, base_line(ctx, &frame)))),
                None => reject(ParallelPhase::AwaitingDirection {
                    base_point: *base_point,
                    candidate,
                }),
            }
        }

        (ParallelPhase::AwaitingSpacing { frame, .. }, ToolEvent::PointerMove(Some(hover))) => {
            spacing_preview(ctx, frame, spacing_at(frame, hover))
        }
        (ParallelPhase::AwaitingSpacing { frame, spacing }, ToolEvent::PointerDown(point)) => {
            let spacing = point.map(|point| spacing_at(frame, point)).or(*spacing);
            match spacing.filter(|spacing| *spacing > ctx.tolerance) {
                Some(spacing) => finalize(ctx, frame, spacing),
                None => reject(ParallelPhase::AwaitingSpacing {
                    frame: *frame,
                    spacing,
                }),
            }
        }
        (ParallelPhase::AwaitingSpacing { frame, .. }, ToolEvent::TextEntry(text)) => {
            match ctx.parse_positive_length(&text) {
                Some(spacing) => finalize(ctx, frame, spacing),
                None => Transition::to(phase.clone()),
            }
        }

        // Unaufgelöste Bewegungen und Text außerhalb der Abstands-Phase ändern nichts
        _ => Transition::to(phase.clone()),
    }
}

fn enter(phase: ParallelPhase) -> Transition<ParallelPhase> {
    let status = status_for(&phase).to_string();
    Transition::to(phase).with(ToolEffect::Status(status))
}

fn reject(phase: ParallelPhase) -> Transition<ParallelPhase> {
    Transition::to(phase).with(ToolEffect::Reject)
}

fn finish() -> Transition<ParallelPhase> {
    Transition::to(ParallelPhase::Done)
        .with(ToolEffect::Preview(ToolPreview::default()))
        .with(ToolEffect::Finish)
}

fn frame_preview(frame: &ParallelFrame, segments: Vec<Segment>) -> ToolPreview {
    ToolPreview {
        segments,
        highlight_points: vec![frame.base_point],
    }
}

fn direction_preview(ctx: &FaceContext, base_point: DVec3, candidate: Option<DVec3>) -> ToolPreview {
    ToolPreview {
        segments: candidate
            .map(|direction| ctx.face_segments(base_point, direction))
            .unwrap_or_default(),
        highlight_points: vec![base_point],
    }
}

fn spacing_preview(
    ctx: &FaceContext,
    frame: &ParallelFrame,
    spacing: f64,
) -> Transition<ParallelPhase> {
    let next = ParallelPhase::AwaitingSpacing {
        frame: *frame,
        spacing: Some(spacing),
    };
    match preview_parallel_segments(ctx, frame, spacing) {
        Some(segments) => Transition::to(next)
            .with(ToolEffect::Preview(frame_preview(frame, segments)))
            .with(ToolEffect::Status(format!("Abstand: {spacing:.3}"))),
        None => Transition::to(next)
            .with(ToolEffect::Preview(frame_preview(frame, base_line(ctx, frame))))
            .with(ToolEffect::Status(TOO_MANY_LINES.to_string())),
    }
}

fn finalize(ctx: &FaceContext, frame: &ParallelFrame, spacing: f64) -> Transition<ParallelPhase> {
    let segments = build_parallel_segments(ctx, frame, spacing);
    Transition::to(ParallelPhase::Done)
        .with(ToolEffect::Preview(ToolPreview::default()))
        .with(ToolEffect::Commit(ToolResult {
            operation_name: OPERATION_NAME,
            segments: unique_segments(&segments, ctx.tolerance),
        }))
        .with(ToolEffect::Finish)
}

impl DivisionTool for ParallelDivisionTool {
    fn mode(&self) -> DivisionMode {
        DivisionMode::Parallel
    }

    fn face_id(&self) -> FaceId {
        self.ctx.face_id
    }

    fn instruction_text(&self) -> &str {
        status_for(&ParallelPhase::AwaitingBasePoint)
    }

    fn status_text(&self) -> &str {
        status_for(&self.phase)
    }

    fn handle_event(&mut self, event: ToolEvent) -> Vec<ToolEffect> {
        let Transition { phase, effects } = transition(&self.ctx, &self.phase, event);
        if phase != self.phase {
            log::debug!("Parallele Linien: {:?} -> {:?}", self.phase, phase);
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
        self.phase == ParallelPhase::Done
    }

    fn has_pending_input(&self) -> bool {
        !matches!(
            self.phase,
            ParallelPhase::AwaitingBasePoint | ParallelPhase::Done
        )
    }
}
