//! Scripted gestures that exercise each screen during a headless run.
//!
//! Cues name what to touch rather than where, and are resolved against the
//! engine when they fire: the clicker's shape moves after every hit, so its
//! position is only known at that moment.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::time::Duration;

use canvas::engine::{EngineCore, Screen, ScreenKind};
use canvas::geom::Point;
use canvas::picker::Gender;

/// How long a scripted drag takes from press to release.
pub const DRAG_DURATION: Duration = Duration::from_millis(800);

/// What to touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    TapSymbol(Gender),
    /// Drag across the top of the dial by `dx` pixels.
    DragDial { dx: f64 },
    TapSegment(usize),
    TapButton,
    TapShape,
    TapAt(Point),
}

/// A cue resolved to surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap(Point),
    Drag { from: Point, to: Point },
}

/// Cues for `kind`, each with its offset from the start of the run.
#[must_use]
pub fn demo_script(kind: ScreenKind) -> Vec<(Duration, Cue)> {
    let ms = Duration::from_millis;
    match kind {
        ScreenKind::Arrow | ScreenKind::Clock => Vec::new(),
        ScreenKind::Gender => vec![(ms(500), Cue::TapSymbol(Gender::Male)), (ms(2000), Cue::TapSymbol(Gender::Female))],
        ScreenKind::Weight => vec![(ms(300), Cue::DragDial { dx: 200.0 })],
        ScreenKind::Grades => vec![(ms(300), Cue::TapSegment(2)), (ms(1500), Cue::TapSegment(5))],
        ScreenKind::Clicker => vec![(ms(200), Cue::TapButton), (ms(600), Cue::TapShape), (ms(900), Cue::TapShape)],
        ScreenKind::MovingBox => vec![(ms(500), Cue::TapAt(Point::ZERO)), (ms(1500), Cue::TapAt(Point::ZERO))],
    }
}

/// Where `cue` lands on the engine's current screen; `None` when the screen
/// has nothing matching.
#[must_use]
pub fn resolve(cue: Cue, engine: &EngineCore) -> Option<Gesture> {
    match (cue, engine.screen()) {
        (Cue::TapAt(at), _) => Some(Gesture::Tap(at)),
        (Cue::TapSymbol(gender), Screen::Gender(picker)) => {
            Some(Gesture::Tap(picker.symbol(gender).surface_rect().center()))
        }
        (Cue::DragDial { dx }, Screen::Weight { dial, style, .. }) => {
            let from = Point::new(dial.center().x, dial.center().y - style.radius);
            Some(Gesture::Drag { from, to: Point::new(from.x + dx, from.y) })
        }
        (Cue::TapSegment(index), Screen::Grades { selector, strip }) => {
            let rect = selector.rects().get(index)?;
            Some(Gesture::Tap(rect.center() + strip.origin()))
        }
        (Cue::TapButton, Screen::Clicker(game)) => Some(Gesture::Tap(game.button_rect().center())),
        (Cue::TapShape, Screen::Clicker(game)) => {
            let field = game.primitive().bounds().center();
            Some(Gesture::Tap(Point::new(field.x, field.y + canvas::consts::GAME_HEADER_HEIGHT)))
        }
        _ => None,
    }
}
