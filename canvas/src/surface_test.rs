use super::*;

#[test]
fn color_from_argb() {
    assert_eq!(Color::from_argb(0xFF6D_6DFF), Color::rgb(0x6D, 0x6D, 0xFF));
    assert_eq!(Color::from_argb(0x8000_0000).a, 0x80);
}

#[test]
fn color_with_alpha_scales() {
    assert_eq!(Color::BLUE.with_alpha(0.0).a, 0);
    assert_eq!(Color::BLUE.with_alpha(1.0).a, 255);
    assert_eq!(Color::BLUE.with_alpha(0.5).a, 128);
    assert_eq!(Color::BLUE.with_alpha(7.0).a, 255);
}

#[test]
fn color_css() {
    assert_eq!(Color::RED.to_css(), "rgba(255, 0, 0, 1.000)");
}

#[test]
fn paint_builders() {
    let p = Paint::stroke(Color::BLACK, 3.0).with_cap(StrokeCap::Round).with_alpha(0.25);
    assert_eq!(p.style, PaintStyle::Stroke { width: 3.0, cap: StrokeCap::Round });
    assert!((p.alpha - 0.25).abs() < f64::EPSILON);
}

#[test]
fn with_cap_ignores_fill() {
    let p = Paint::fill(Color::BLACK).with_cap(StrokeCap::Round);
    assert_eq!(p.style, PaintStyle::Fill);
}

#[test]
fn display_list_records_in_order() {
    let mut list = DisplayList::new(Size::new(100.0, 100.0));
    list.save();
    list.translate(1.0, 2.0).unwrap_or(());
    list.draw_text("12", Point::new(5.0, 5.0), &TextStyle::new(10.0, Color::BLACK)).unwrap_or(());
    list.restore();
    assert_eq!(list.len(), 4);
    assert_eq!(list.commands[0], DrawCommand::Save);
    assert_eq!(list.commands[3], DrawCommand::Restore);
    assert_eq!(list.texts(), vec!["12"]);
}

#[test]
fn display_list_measure_uses_glyph_advance() {
    let mut list = DisplayList::default();
    let size = list.measure_text("100", &TextStyle::new(10.0, Color::BLACK)).unwrap_or_default();
    assert!((size.width - 18.0).abs() < 1e-9);
}

#[test]
fn display_list_serializes_to_tagged_json() {
    let mut list = DisplayList::new(Size::new(10.0, 10.0));
    list.draw_circle(Point::new(1.0, 1.0), 2.0, &Paint::fill(Color::RED)).unwrap_or(());
    let json = serde_json::to_value(&list).unwrap_or_default();
    assert_eq!(json["commands"][0]["cmd"], "circle");
    assert_eq!(json["commands"][0]["paint"]["brush"]["kind"], "solid");
}

#[test]
fn clear_empties_list() {
    let mut list = DisplayList::default();
    list.save();
    list.clear();
    assert!(list.is_empty());
}
