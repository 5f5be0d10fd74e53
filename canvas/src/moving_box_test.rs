use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::surface::{DisplayList, DrawCommand};

const CANVAS: Size = Size { width: 1080.0, height: 2000.0 };

fn within_margins(p: Point) -> bool {
    (300.0..=780.0).contains(&p.x) && (300.0..=1700.0).contains(&p.y)
}

#[test]
fn starts_within_placement_margins() {
    let mut rng = SmallRng::seed_from_u64(9);
    for _ in 0..200 {
        let b = MovingBox::new(CANVAS, &mut rng, 0.0).unwrap();
        assert!(within_margins(b.position(0.0)));
    }
}

#[test]
fn tap_glides_to_new_target() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut b = MovingBox::new(CANVAS, &mut rng, 0.0).unwrap();
    let start = b.position(0.0);
    let target = b.on_tap(&mut rng, 1000.0).unwrap();
    assert!(within_margins(target));
    assert_eq!(b.target(), target);
    assert_eq!(b.position(1000.0), start);
    assert_eq!(b.position(1000.0 + BOX_TRAVEL_MS), target);
}

#[test]
fn rotation_loops_every_three_seconds() {
    let mut rng = SmallRng::seed_from_u64(1);
    let b = MovingBox::new(CANVAS, &mut rng, 500.0).unwrap();
    assert!(b.rotation_deg(500.0).abs() < 1e-9);
    assert!((b.rotation_deg(2000.0) - 180.0).abs() < 1e-9);
    assert!(b.rotation_deg(3500.0).abs() < 1e-9);
    assert!((b.rotation_deg(4250.0) - 90.0).abs() < 1e-9);
}

#[test]
fn small_canvas_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(MovingBox::new(Size::new(500.0, 2000.0), &mut rng, 0.0).is_err());
}

#[test]
fn shrinking_the_canvas_snaps_an_outside_box_to_a_new_spot() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut b = MovingBox::new(CANVAS, &mut rng, 0.0).unwrap();
    b.on_tap(&mut rng, 0.0).unwrap();
    b.set_canvas(Size::new(600.0, 600.0), &mut rng).unwrap();
    // A 300 box on 600 keeps its 300 margins only at (300, 300).
    assert_eq!(b.target(), Point::new(300.0, 300.0));
    assert_eq!(b.position(100.0), Point::new(300.0, 300.0));
}

#[test]
fn growing_the_canvas_keeps_the_target() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut b = MovingBox::new(CANVAS, &mut rng, 0.0).unwrap();
    let target = b.target();
    b.set_canvas(Size::new(2000.0, 3000.0), &mut rng).unwrap();
    assert_eq!(b.target(), target);
    let next = b.on_tap(&mut rng, 0.0).unwrap();
    assert!((300.0..=1700.0).contains(&next.x) && (300.0..=2700.0).contains(&next.y));
}

#[test]
fn draw_rotates_around_box_center() {
    let mut rng = SmallRng::seed_from_u64(5);
    let b = MovingBox::new(CANVAS, &mut rng, 0.0).unwrap();
    let mut list = DisplayList::default();
    draw(&mut list, &b, 750.0).unwrap();
    let rect = b.rect(750.0);
    assert!(matches!(
        list.commands[1],
        DrawCommand::Rotate { degrees, pivot } if (degrees - 90.0).abs() < 1e-9 && pivot == rect.center()
    ));
    assert!(matches!(list.commands[2], DrawCommand::Rect { .. }));
}
