use super::*;
use crate::surface::{DisplayList, DrawCommand};

const EPSILON: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn picker() -> GenderPicker {
    let mut p = GenderPicker::new().unwrap();
    p.set_size(Size::new(1080.0, 2000.0));
    p
}

#[test]
fn builtin_symbols_parse() {
    let p = GenderPicker::new().unwrap();
    assert!(p.symbol(Gender::Male).bounds().width > 0.0);
    assert!(p.symbol(Gender::Female).bounds().height > 0.0);
}

#[test]
fn starts_with_female_selected_and_filled() {
    let p = picker();
    assert_eq!(p.selected(), Gender::Female);
    assert!(approx_eq(p.radius(Gender::Female, 0.0), 80.0));
    assert!(approx_eq(p.radius(Gender::Male, 0.0), 0.0));
    assert!(!p.is_animating(0.0));
}

#[test]
fn symbols_sit_either_side_of_center_with_gap() {
    let p = picker();
    let male = p.symbol(Gender::Male).surface_rect();
    let female = p.symbol(Gender::Female).surface_rect();
    assert!(approx_eq(male.right(), 540.0 - 25.0));
    assert!(approx_eq(female.x, 540.0 + 25.0));
    assert!(approx_eq(female.x - male.right(), 50.0));
    assert!(approx_eq(male.center().y, 1000.0));
    assert!(approx_eq(female.center().y, 1000.0));
}

#[test]
fn symbols_are_scaled_by_nine() {
    let p = picker();
    let male = p.symbol(Gender::Male);
    assert!(approx_eq(male.surface_rect().width, male.bounds().width * 9.0));
    assert!(approx_eq(male.transform().scale, 9.0));
}

#[test]
fn tapping_selected_symbol_is_ignored() {
    let mut p = picker();
    let at = p.symbol(Gender::Female).surface_rect().center();
    assert_eq!(p.on_tap(at, 0.0), None);
    assert_eq!(p.selected(), Gender::Female);
}

#[test]
fn tapping_the_gap_is_ignored() {
    let mut p = picker();
    assert_eq!(p.on_tap(Point::new(540.0, 1000.0), 0.0), None);
}

#[test]
fn tapping_other_symbol_swaps_fills_over_one_second() {
    let mut p = picker();
    let at = p.symbol(Gender::Male).surface_rect().center();
    assert_eq!(p.on_tap(at, 100.0), Some(Gender::Male));
    assert_eq!(p.selected(), Gender::Male);

    assert!(approx_eq(p.radius(Gender::Male, 100.0), 0.0));
    assert!(approx_eq(p.radius(Gender::Female, 100.0), 80.0));
    assert!(p.is_animating(600.0));
    let mid = p.radius(Gender::Male, 600.0);
    assert!(mid > 0.0 && mid < 80.0);

    assert!(approx_eq(p.radius(Gender::Male, 1100.0), 80.0));
    assert!(approx_eq(p.radius(Gender::Female, 1100.0), 0.0));
    assert!(!p.is_animating(1100.0));
}

#[test]
fn gradient_centers_on_bounds_until_tapped() {
    let mut p = picker();
    let bounds = p.symbol(Gender::Male).bounds();
    assert_eq!(p.gradient_center(Gender::Male), bounds.center());

    let at = p.symbol(Gender::Male).surface_rect().origin() + Point::new(20.0, 30.0);
    p.on_tap(at, 0.0);
    let mapped = p.symbol(Gender::Male).transform().to_surface(p.gradient_center(Gender::Male));
    assert!(approx_eq(mapped.x, at.x) && approx_eq(mapped.y, at.y));
}

#[test]
fn malformed_symbol_data_is_an_error() {
    assert!(GenderPicker::from_path_data("M0 0 A1 1 0 0 1 2 2", FEMALE_PATH).is_err());
}

#[test]
fn draw_fills_selected_symbol_through_clip() {
    let p = picker();
    let mut list = DisplayList::default();
    draw(&mut list, &p, 0.0).unwrap();
    assert_eq!(list.count(|c| matches!(c, DrawCommand::Path { .. })), 2);
    assert_eq!(list.count(|c| matches!(c, DrawCommand::Clip { .. })), 1);
    let gradient = list.commands.iter().find_map(|c| match c {
        DrawCommand::Circle { radius, paint, .. } => Some((*radius, paint.brush.clone())),
        _ => None,
    });
    let (radius, brush) = gradient.unwrap();
    assert!(approx_eq(radius, 80.0 * 9.0));
    assert!(matches!(brush, Brush::RadialGradient { radius, .. } if approx_eq(radius, 81.0 * 9.0)));
}
