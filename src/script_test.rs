use canvas::geom::Size;

use super::*;

fn engine(kind: ScreenKind) -> EngineCore {
    EngineCore::new(kind, Size::new(1080.0, 2000.0), 3, 0.0).unwrap()
}

#[test]
fn passive_screens_have_no_script() {
    assert!(demo_script(ScreenKind::Arrow).is_empty());
    assert!(demo_script(ScreenKind::Clock).is_empty());
}

#[test]
fn scripts_are_in_time_order() {
    for kind in ScreenKind::ALL {
        let script = demo_script(kind);
        assert!(script.windows(2).all(|w| w[0].0 <= w[1].0), "{}", kind.name());
    }
}

#[test]
fn every_cue_resolves_on_its_own_screen() {
    for kind in ScreenKind::ALL {
        let engine = engine(kind);
        for (_, cue) in demo_script(kind) {
            assert!(resolve(cue, &engine).is_some(), "{cue:?} on {}", kind.name());
        }
    }
}

#[test]
fn cues_for_other_screens_do_not_resolve() {
    let clock = engine(ScreenKind::Clock);
    assert_eq!(resolve(Cue::TapButton, &clock), None);
    assert_eq!(resolve(Cue::TapSegment(0), &clock), None);
    assert_eq!(resolve(Cue::DragDial { dx: 10.0 }, &clock), None);
}

#[test]
fn dial_drag_starts_at_top_of_band() {
    let weight = engine(ScreenKind::Weight);
    let gesture = resolve(Cue::DragDial { dx: 200.0 }, &weight).unwrap();
    assert_eq!(gesture, Gesture::Drag { from: Point::new(540.0, 1775.0), to: Point::new(740.0, 1775.0) });
}

#[test]
fn missing_segment_does_not_resolve() {
    let grades = engine(ScreenKind::Grades);
    assert_eq!(resolve(Cue::TapSegment(99), &grades), None);
}
