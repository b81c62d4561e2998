use super::super::{DivisionTool, FaceContext, ToolEffect, ToolEvent, ToolResult};
use super::geometry::{build_parallel_segments, frame_for_direction, preview_parallel_segments};
use super::lifecycle::{transition, OPERATION_NAME};
use super::state::{ParallelDivisionTool, ParallelPhase};
use crate::core::{Face, Segment};
use crate::shared::DividerOptions;
use approx::assert_relative_eq;
use glam::DVec3;

fn square(min: f64, max: f64) -> Vec<DVec3> {
    vec![
        DVec3::new(min, min, 0.0),
        DVec3::new(max, min, 0.0),
        DVec3::new(max, max, 0.0),
        DVec3::new(min, max, 0.0),
    ]
}

fn square_ctx() -> FaceContext {
    let face = Face::new(square(0.0, 10.0), vec![]).expect("gültige Fläche");
    FaceContext::new(1, &face, &DividerOptions::default())
}

fn committed(effects: &[ToolEffect]) -> Option<&ToolResult> {
    effects.iter().find_map(|effect| match effect {
        ToolEffect::Commit(result) => Some(result),
        _ => None,
    })
}

fn pick_base_and_direction(tool: &mut ParallelDivisionTool) {
    tool.handle_event(ToolEvent::PointerDown(Some(DVec3::ZERO)));
    tool.handle_event(ToolEvent::PointerMove(Some(DVec3::new(5.0, 0.0, 0.0))));
    tool.handle_event(ToolEvent::PointerDown(None));
}

#[test]
fn test_frame_for_square_along_x() {
    let ctx = square_ctx();
    let frame = frame_for_direction(&ctx, DVec3::ZERO, DVec3::X).expect("Richtung gültig");
    assert!(frame.perpendicular.abs_diff_eq(DVec3::Y, 1e-12));
    assert_relative_eq!(frame.offset_min, 0.0);
    assert_relative_eq!(frame.offset_max, 10.0);
}

#[test]
fn test_direction_parallel_to_normal_is_degenerate() {
    let ctx = square_ctx();
    assert!(frame_for_direction(&ctx, DVec3::ZERO, DVec3::Z).is_none());
}

#[test]
fn test_build_covers_square_with_six_lines() {
    let ctx = square_ctx();
    let frame = frame_for_direction(&ctx, DVec3::ZERO, DVec3::X).expect("Richtung gültig");
    let segments = build_parallel_segments(&ctx, &frame, 2.0);

    assert_eq!(segments.len(), 6);
    for (segment, y) in segments.iter().zip([0.0, 2.0, 4.0, 6.0, 8.0, 10.0]) {
        assert_relative_eq!(segment.a.y, y, epsilon = 1e-9);
        assert_relative_eq!(segment.b.y, y, epsilon = 1e-9);
        assert_relative_eq!(segment.length(), 10.0, epsilon = 1e-9);
    }
}

#[test]
fn test_tiny_spacing_builds_base_line_only() {
    let ctx = square_ctx();
    let frame = frame_for_direction(&ctx, DVec3::ZERO, DVec3::X).expect("Richtung gültig");
    let segments = build_parallel_segments(&ctx, &frame, 0.0005);
    assert_eq!(segments, vec![Segment::new(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0))]);
}

#[test]
fn test_line_cap_limits_preview_only() {
    let mut ctx = square_ctx();
    ctx.max_lines_per_axis = 5;
    let frame = frame_for_direction(&ctx, DVec3::ZERO, DVec3::X).expect("Richtung gültig");
    assert!(preview_parallel_segments(&ctx, &frame, 2.0).is_none());
    assert!(preview_parallel_segments(&ctx, &frame, 2.5).is_some());
    assert_eq!(build_parallel_segments(&ctx, &frame, 2.0).len(), 6);
}

#[test]
fn test_spacing_above_preview_cap_still_commits() {
    let mut tool = ParallelDivisionTool::new(square_ctx());
    pick_base_and_direction(&mut tool);

    // 10 / 2^-8 = 2560 Abstände, mehr als die Standard-Obergrenze der Vorschau
    tool.handle_event(ToolEvent::PointerMove(Some(DVec3::new(3.0, 0.00390625, 0.0))));
    assert_eq!(tool.preview().segments.len(), 1);

    let effects = tool.handle_event(ToolEvent::TextEntry("0.00390625".to_string()));
    let result = committed(&effects).expect("Ergebnis übernommen");
    assert_eq!(result.segments.len(), 2561);
    assert!(!effects.contains(&ToolEffect::Reject));
    assert!(tool.is_done());
}

#[test]
fn test_full_flow_commits_six_segments() {
    let mut tool = ParallelDivisionTool::new(square_ctx());
    pick_base_and_direction(&mut tool);
    assert!(matches!(tool.phase(), ParallelPhase::AwaitingSpacing { .. }));

    tool.handle_event(ToolEvent::PointerMove(Some(DVec3::new(3.0, 2.0, 0.0))));
    assert_eq!(tool.preview().segments.len(), 6);

    let effects = tool.handle_event(ToolEvent::PointerDown(None));
    let result = committed(&effects).expect("Commit erwartet");
    assert_eq!(result.operation_name, OPERATION_NAME);
    assert_eq!(result.segments.len(), 6);
    assert!(effects.contains(&ToolEffect::Finish));
    assert!(tool.is_done());
    assert!(tool.preview().segments.is_empty());
}

#[test]
fn test_typed_spacing_commits() {
    let mut tool = ParallelDivisionTool::new(square_ctx());
    pick_base_and_direction(&mut tool);

    let effects = tool.handle_event(ToolEvent::TextEntry("2500mm".into()));
    let result = committed(&effects).expect("Commit erwartet");
    // Offsets 0, 2.5, 5, 7.5, 10
    assert_eq!(result.segments.len(), 5);
}

#[test]
fn test_invalid_text_is_ignored_silently() {
    let mut tool = ParallelDivisionTool::new(square_ctx());
    pick_base_and_direction(&mut tool);

    for text in ["abc", "-2", "0", ""] {
        let effects = tool.handle_event(ToolEvent::TextEntry(text.into()));
        assert!(effects.is_empty(), "{text}");
    }
    assert!(matches!(tool.phase(), ParallelPhase::AwaitingSpacing { .. }));
}

#[test]
fn test_unresolved_base_point_is_rejected() {
    let ctx = square_ctx();
    let result = transition(&ctx, &ParallelPhase::AwaitingBasePoint, ToolEvent::PointerDown(None));
    assert_eq!(result.phase, ParallelPhase::AwaitingBasePoint);
    assert_eq!(result.effects, vec![ToolEffect::Reject]);
}

#[test]
fn test_base_point_is_projected_onto_plane() {
    let ctx = square_ctx();
    let result = transition(
        &ctx,
        &ParallelPhase::AwaitingBasePoint,
        ToolEvent::PointerDown(Some(DVec3::new(2.0, 3.0, 4.0))),
    );
    match result.phase {
        ParallelPhase::AwaitingDirection { base_point, candidate } => {
            assert!(base_point.abs_diff_eq(DVec3::new(2.0, 3.0, 0.0), 1e-12));
            assert!(candidate.is_none());
        }
        other => panic!("unerwartete Phase: {other:?}"),
    }
}

#[test]
fn test_degenerate_direction_clears_candidate_and_rejects() {
    let ctx = square_ctx();
    let phase = ParallelPhase::AwaitingDirection {
        base_point: DVec3::ZERO,
        candidate: Some(DVec3::X),
    };

    // Maus direkt über dem Basispunkt (nur Normalanteil)
    let moved = transition(&ctx, &phase, ToolEvent::PointerMove(Some(DVec3::new(0.0, 0.0, 3.0))));
    assert_eq!(
        moved.phase,
        ParallelPhase::AwaitingDirection {
            base_point: DVec3::ZERO,
            candidate: None,
        }
    );

    let pressed = transition(&ctx, &moved.phase, ToolEvent::PointerDown(None));
    assert_eq!(pressed.effects, vec![ToolEffect::Reject]);
    assert!(matches!(pressed.phase, ParallelPhase::AwaitingDirection { .. }));
}

#[test]
fn test_press_without_spacing_is_rejected() {
    let mut tool = ParallelDivisionTool::new(square_ctx());
    pick_base_and_direction(&mut tool);

    let effects = tool.handle_event(ToolEvent::PointerDown(None));
    assert_eq!(effects, vec![ToolEffect::Reject]);

    // Klick auf der Basislinie: Abstand 0
    let effects = tool.handle_event(ToolEvent::PointerDown(Some(DVec3::new(7.0, 0.0, 0.0))));
    assert_eq!(effects, vec![ToolEffect::Reject]);
    assert!(!tool.is_done());
}

#[test]
fn test_cancel_from_every_phase_finishes_without_commit() {
    let ctx = square_ctx();
    let frame = frame_for_direction(&ctx, DVec3::ZERO, DVec3::X).expect("Richtung gültig");
    let phases = [
        ParallelPhase::AwaitingBasePoint,
        ParallelPhase::AwaitingDirection {
            base_point: DVec3::ZERO,
            candidate: Some(DVec3::X),
        },
        ParallelPhase::AwaitingSpacing {
            frame,
            spacing: Some(2.0),
        },
    ];
    for phase in phases {
        let result = transition(&ctx, &phase, ToolEvent::Cancel);
        assert_eq!(result.phase, ParallelPhase::Done);
        assert!(committed(&result.effects).is_none());
        assert!(result.effects.contains(&ToolEffect::Finish));
    }
}

#[test]
fn test_done_ignores_events() {
    let ctx = square_ctx();
    let result = transition(&ctx, &ParallelPhase::Done, ToolEvent::PointerDown(Some(DVec3::ZERO)));
    assert_eq!(result.phase, ParallelPhase::Done);
    assert!(result.effects.is_empty());
}

#[test]
fn test_hole_splits_every_crossing_line() {
    let face = Face::new(square(0.0, 10.0), vec![square(3.0, 7.0)]).expect("gültige Fläche");
    let ctx = FaceContext::new(2, &face, &DividerOptions::default());
    let frame = frame_for_direction(&ctx, DVec3::ZERO, DVec3::X).expect("Richtung gültig");
    let segments = build_parallel_segments(&ctx, &frame, 5.0);

    // y = 0 und y = 10 durchgehend, y = 5 vom Loch geteilt
    assert_eq!(segments.len(), 4);
    let middle: Vec<_> = segments
        .iter()
        .filter(|segment| (segment.a.y - 5.0).abs() < 1e-9)
        .collect();
    assert_eq!(middle.len(), 2);
    for segment in middle {
        assert_relative_eq!(segment.length(), 3.0, epsilon = 1e-9);
    }
}

#[test]
fn test_pending_input_tracks_phase() {
    let mut tool = ParallelDivisionTool::new(square_ctx());
    assert!(!tool.has_pending_input());
    tool.handle_event(ToolEvent::PointerDown(Some(DVec3::ZERO)));
    assert!(tool.has_pending_input());
    tool.handle_event(ToolEvent::Cancel);
    assert!(!tool.has_pending_input());
    assert!(tool.is_done());
}
