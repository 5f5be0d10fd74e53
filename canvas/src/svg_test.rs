#![allow(clippy::float_cmp)]

use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn segments(data: &str) -> Vec<Segment> {
    parse_path(data).unwrap().segments().to_vec()
}

#[test]
fn absolute_move_and_line() {
    assert_eq!(segments("M10 20 L30 40"), vec![Segment::MoveTo(p(10.0, 20.0)), Segment::LineTo(p(30.0, 40.0))]);
}

#[test]
fn relative_lines_and_axis_moves() {
    assert_eq!(
        segments("m10 10 l5 0 h5 v5 z"),
        vec![
            Segment::MoveTo(p(10.0, 10.0)),
            Segment::LineTo(p(15.0, 10.0)),
            Segment::LineTo(p(20.0, 10.0)),
            Segment::LineTo(p(20.0, 15.0)),
            Segment::Close,
        ]
    );
}

#[test]
fn absolute_axis_lines() {
    assert_eq!(
        segments("M1 2 H7 V9"),
        vec![Segment::MoveTo(p(1.0, 2.0)), Segment::LineTo(p(7.0, 2.0)), Segment::LineTo(p(7.0, 9.0))]
    );
}

#[test]
fn implicit_repeats_after_move_are_lines() {
    assert_eq!(
        segments("M0 0 10 0 10 10"),
        vec![Segment::MoveTo(p(0.0, 0.0)), Segment::LineTo(p(10.0, 0.0)), Segment::LineTo(p(10.0, 10.0))]
    );
    assert_eq!(segments("m1 1 2 2"), vec![Segment::MoveTo(p(1.0, 1.0)), Segment::LineTo(p(3.0, 3.0))]);
}

#[test]
fn implicit_repeats_of_curves() {
    let segs = segments("M0 0 q5 5 10 0 5 -5 10 0");
    assert_eq!(segs[1], Segment::QuadTo { ctrl: p(5.0, 5.0), to: p(10.0, 0.0) });
    assert_eq!(segs[2], Segment::QuadTo { ctrl: p(15.0, -5.0), to: p(20.0, 0.0) });
}

#[test]
fn smooth_cubic_reflects_previous_control() {
    let segs = segments("M0 0 C0 10 10 10 10 0 S20 -10 20 0");
    assert_eq!(segs[2], Segment::CubicTo { ctrl1: p(10.0, -10.0), ctrl2: p(20.0, -10.0), to: p(20.0, 0.0) });
}

#[test]
fn smooth_cubic_without_previous_curve_starts_at_current() {
    let segs = segments("M5 5 S10 10 15 5");
    assert_eq!(segs[1], Segment::CubicTo { ctrl1: p(5.0, 5.0), ctrl2: p(10.0, 10.0), to: p(15.0, 5.0) });
}

#[test]
fn smooth_quad_reflects_previous_control() {
    let segs = segments("M0 0 Q5 10 10 0 T20 0");
    assert_eq!(segs[2], Segment::QuadTo { ctrl: p(15.0, -10.0), to: p(20.0, 0.0) });
}

#[test]
fn smooth_quad_after_cubic_does_not_reflect() {
    let segs = segments("M0 0 C0 10 10 10 10 0 T20 0");
    assert_eq!(segs[2], Segment::QuadTo { ctrl: p(10.0, 0.0), to: p(20.0, 0.0) });
}

#[test]
fn close_returns_cursor_to_subpath_start() {
    let segs = segments("M5 5 L10 5 Z l1 0");
    assert_eq!(segs[3], Segment::LineTo(p(6.0, 5.0)));
}

#[test]
fn arcs_are_rejected() {
    let err = parse_path("M0 0 A5 5 0 0 1 10 10").unwrap_err();
    assert!(matches!(err, PathParseError::Unsupported('A')));
    assert_eq!(err.to_string(), "unsupported path command 'A'");
    assert!(matches!(parse_path("M0 0 a5 5 0 0 1 10 10"), Err(PathParseError::Unsupported('a'))));
}

#[test]
fn truncated_numbers_are_syntax_errors() {
    assert!(matches!(parse_path("M0 0 L10"), Err(PathParseError::Syntax(_))));
    assert!(matches!(parse_path("M0 0 Lx 1"), Err(PathParseError::Syntax(_))));
}

#[test]
fn data_must_start_with_move() {
    let err = parse_path("L0 0").unwrap_err();
    assert!(matches!(err, PathParseError::MissingMoveTo | PathParseError::Syntax(_)));
}

#[test]
fn empty_data_is_empty_path() {
    assert!(parse_path("").unwrap().is_empty());
}

#[test]
fn parsed_square_has_expected_bounds() {
    let path = parse_path("M2 3 h4 v4 h-4 z").unwrap();
    let b = path.bounds().unwrap();
    assert_eq!((b.x, b.y, b.width, b.height), (2.0, 3.0, 4.0, 4.0));
}
