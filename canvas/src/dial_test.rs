#![allow(clippy::float_cmp)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::surface::{DisplayList, DrawCommand};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Default weight dial centered on the origin.
fn weight_dial() -> RadialDial {
    RadialDial::default()
}

// Pointer positions at fixed atan2 angles around the origin.
const AT_0: Point = Point { x: -100.0, y: 0.0 };
const AT_90: Point = Point { x: 0.0, y: -100.0 };
const AT_MINUS_90: Point = Point { x: 0.0, y: 100.0 };
const AT_45: Point = Point { x: -100.0, y: -100.0 };

// =============================================================
// Construction
// =============================================================

#[test]
fn inverted_bounds_are_rejected() {
    assert_eq!(RadialDial::new(10, 5, 7), Err(DialError::InvertedBounds { min: 10, max: 5 }));
}

#[test]
fn starts_idle_at_initial_value() {
    let dial = weight_dial();
    assert_eq!(dial.value(), 80);
    assert_eq!(dial.angle(), 0.0);
    assert_eq!(dial.phase(), DialPhase::Idle);
}

#[test]
fn pointer_angle_convention() {
    assert!(approx_eq(pointer_angle(Point::ZERO, AT_0), 0.0));
    assert!(approx_eq(pointer_angle(Point::ZERO, AT_90), 90.0));
    assert!(approx_eq(pointer_angle(Point::ZERO, AT_MINUS_90), -90.0));
}

// =============================================================
// Drag state machine
// =============================================================

#[test]
fn update_while_idle_is_ignored() {
    let mut dial = weight_dial();
    assert_eq!(dial.on_drag_update(AT_90), 80);
    assert_eq!(dial.angle(), 0.0);
}

#[test]
fn drag_rotates_by_swept_angle() {
    let mut dial = weight_dial();
    assert!(dial.on_drag_start(AT_0));
    assert_eq!(dial.on_drag_update(AT_45), 35);
    assert_eq!(dial.angle(), 45.0);
    assert_eq!(dial.on_drag_update(AT_MINUS_90), 170);
}

#[test]
fn drag_clamps_exactly_at_min() {
    let mut dial = weight_dial();
    dial.on_drag_start(AT_0);
    // +90° would mean 80 − 90 = −10; the floor is 20.
    for _ in 0..5 {
        assert_eq!(dial.on_drag_update(AT_90), 20);
        assert_eq!(dial.angle(), 60.0);
    }
}

#[test]
fn drag_clamps_exactly_at_max() {
    let mut dial = RadialDial::new(20, 100, 80).unwrap();
    dial.on_drag_start(AT_0);
    assert_eq!(dial.on_drag_update(AT_MINUS_90), 100);
    assert_eq!(dial.angle(), -20.0);
}

#[test]
fn second_drag_accumulates_from_committed_angle() {
    let mut dial = weight_dial();
    dial.on_drag_start(AT_0);
    dial.on_drag_update(AT_45);
    dial.on_drag_end();
    assert_eq!(dial.phase(), DialPhase::Idle);

    dial.on_drag_start(AT_45);
    assert_eq!(dial.on_drag_update(AT_45), 35);
    assert_eq!(dial.on_drag_update(AT_0), 80);
}

#[test]
fn drag_start_while_dragging_is_rejected() {
    let mut dial = weight_dial();
    assert!(dial.on_drag_start(AT_0));
    assert!(!dial.on_drag_start(AT_90));
    assert_eq!(dial.on_drag_update(AT_0), 80);
}

#[test]
fn drag_end_while_idle_keeps_state() {
    let mut dial = weight_dial();
    dial.on_drag_end();
    assert_eq!(dial.value(), 80);
}

#[test]
fn delta_is_rounded_to_whole_degrees() {
    let mut dial = weight_dial();
    dial.on_drag_start(AT_0);
    // atan2(10, 100) ≈ 5.71°
    dial.on_drag_update(Point::new(-100.0, -10.0));
    assert_eq!(dial.angle(), 6.0);
    assert_eq!(dial.value(), 74);
}

#[test]
fn center_offsets_pointer_angles() {
    let mut dial = weight_dial();
    dial.set_center(Point::new(500.0, 500.0));
    dial.on_drag_start(Point::new(400.0, 500.0));
    assert_eq!(dial.on_drag_update(Point::new(400.0, 400.0)), 35);
}

#[test]
fn random_drags_stay_within_bounds() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut dial = weight_dial();
    for _ in 0..1000 {
        let start = Point::new(rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0));
        dial.on_drag_start(start);
        for _ in 0..5 {
            let p = Point::new(rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0));
            let v = dial.on_drag_update(p);
            assert!((20..=250).contains(&v), "value {v} escaped bounds");
        }
        dial.on_drag_end();
    }
}

// =============================================================
// Layout
// =============================================================

#[test]
fn one_tick_per_value() {
    let layout = weight_dial().layout(&ScaleStyle::default());
    assert_eq!(layout.ticks.len(), 231);
    assert_eq!(layout.ticks[0].value, 20);
}

#[test]
fn tick_kinds_by_step() {
    assert_eq!(TickKind::of(80), TickKind::TenStep);
    assert_eq!(TickKind::of(85), TickKind::FiveStep);
    assert_eq!(TickKind::of(81), TickKind::Normal);
    assert_eq!(TickKind::of(-10), TickKind::TenStep);
}

#[test]
fn current_value_tick_sits_at_top() {
    let style = ScaleStyle::default();
    let mut dial = weight_dial();
    dial.set_center(Point::new(540.0, 625.0));
    let layout = dial.layout(&style);
    let tick = layout.ticks.iter().find(|t| t.value == 80).unwrap();
    assert!(approx_eq(tick.end.x, 540.0));
    assert!(approx_eq(tick.end.y, 625.0 - 625.0));
    assert!(approx_eq(tick.start.y, 35.0));
}

#[test]
fn rotation_moves_new_value_to_top() {
    let mut dial = weight_dial();
    dial.on_drag_start(AT_0);
    dial.on_drag_update(AT_45);
    let layout = dial.layout(&ScaleStyle::default());
    let tick = layout.ticks.iter().find(|t| t.value == 35).unwrap();
    assert!(approx_eq(tick.end.x, 0.0));
}

#[test]
fn labels_only_on_five_and_ten_steps() {
    let style = ScaleStyle::default();
    let layout = weight_dial().layout(&style);
    for tick in &layout.ticks {
        match tick.kind {
            TickKind::Normal => assert!(tick.label.is_none()),
            TickKind::FiveStep => assert_eq!(tick.label.as_ref().map(|l| l.size), Some(9.0)),
            TickKind::TenStep => assert_eq!(tick.label.as_ref().map(|l| l.size), Some(18.0)),
        }
    }
}

#[test]
fn label_sits_inside_tick_and_is_tangent() {
    let style = ScaleStyle::default();
    let layout = weight_dial().layout(&style);
    let tick = layout.ticks.iter().find(|t| t.value == 80).unwrap();
    let label = tick.label.as_ref().unwrap();
    assert_eq!(label.text, "80");
    // outer 625 − length 35 − gap 5 − size 18
    assert!(approx_eq(label.at.distance(Point::ZERO), 567.0));
    assert!(approx_eq(label.rotation_deg, 0.0));
}

#[test]
fn negative_values_are_labelled_by_magnitude() {
    let layout = RadialDial::new(-20, 0, 0).unwrap().layout(&ScaleStyle::default());
    assert_eq!(layout.ticks[0].label.as_ref().map(|l| l.text.as_str()), Some("20"));
}

#[test]
fn indicator_points_up_from_inner_edge() {
    let layout = weight_dial().layout(&ScaleStyle::default());
    let [tip, left, right] = layout.indicator;
    assert!(approx_eq(left.y, -475.0));
    assert!(approx_eq(tip.y, -535.0));
    assert!(approx_eq(right.x - left.x, 8.0));
}

#[test]
fn wheel_center_hangs_below_surface_top() {
    let c = wheel_center(Size::new(1080.0, 300.0), &ScaleStyle::default());
    assert_eq!(c, Point::new(540.0, 625.0));
}

#[test]
fn draw_rotates_each_label_in_isolation() {
    let style = ScaleStyle::default();
    let layout = weight_dial().layout(&style);
    let mut list = DisplayList::default();
    draw(&mut list, &layout, &style).unwrap();
    let labels = layout.ticks.iter().filter(|t| t.label.is_some()).count();
    assert_eq!(list.count(|c| matches!(c, DrawCommand::Rotate { .. })), labels);
    assert_eq!(list.count(|c| matches!(c, DrawCommand::Save)), labels);
    assert_eq!(list.count(|c| matches!(c, DrawCommand::Line { .. })), 231);
}

#[test]
fn default_dial_matches_explicit_construction() {
    assert_eq!(RadialDial::default(), RadialDial::new(20, 250, 80).unwrap());
    assert_eq!(RadialDial::default().value(), 80);
}
