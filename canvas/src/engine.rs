use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::anim::Animation;
use crate::arrow::{self, ArrowAnimator};
use crate::clock::{self, ClockStyle, ClockTime};
use crate::consts::{
    ARROW_DURATION_MS, SELECTOR_STRIP_HEIGHT, SELECTOR_STRIP_INSET, WEIGHT_INITIAL, WEIGHT_MAX, WEIGHT_MIN,
    WEIGHT_STRIP_HEIGHT, WEIGHT_TEXT_SIZE, WEIGHT_UNIT_SIZE,
};
use crate::countdown::Tick;
use crate::dial::{self, DialError, RadialDial, ScaleStyle};
use crate::game::{self, ShapeClicker, TapOutcome};
use crate::geom::{Point, Rect, Size};
use crate::grid::{self, GridStyle};
use crate::input::{GestureTracker, InputEvent};
use crate::moving_box::{self, MovingBox};
use crate::picker::{self, Gender, GenderPicker};
use crate::render::WebSurface;
use crate::selector::{self, SegmentedSelector};
use crate::shapes::ShapeError;
use crate::surface::{Color, Paint, Surface, TextAlign, TextStyle};
use crate::svg::PathParseError;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown screen: {0}")]
    UnknownScreen(String),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Dial(#[from] DialError),
    #[error(transparent)]
    Path(#[from] PathParseError),
}

/// The demos a host can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Arrow,
    Clock,
    Gender,
    Weight,
    Grades,
    Clicker,
    MovingBox,
}

impl ScreenKind {
    pub const ALL: [Self; 7] =
        [Self::Arrow, Self::Clock, Self::Gender, Self::Weight, Self::Grades, Self::Clicker, Self::MovingBox];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::Clock => "clock",
            Self::Gender => "gender",
            Self::Weight => "weight",
            Self::Grades => "grades",
            Self::Clicker => "clicker",
            Self::MovingBox => "box",
        }
    }

    /// Whether the screen needs the one-second ticker.
    #[must_use]
    pub fn ticks(self) -> bool {
        matches!(self, Self::Clock | Self::Clicker)
    }
}

impl FromStr for ScreenKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.name() == wanted).ok_or_else(|| EngineError::UnknownScreen(s.to_owned()))
    }
}

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RenderNeeded,
    WeightChanged(i32),
    GradeSelected(String),
    GenderSelected(Gender),
    Scored { points: u32 },
    GameRunning(bool),
    CountdownFinished,
    BoxMoving { target: Point },
}

/// Per-screen state.
#[derive(Debug, Clone)]
pub enum Screen {
    Arrow { animator: ArrowAnimator, animation: Animation },
    Clock { time: ClockTime, style: ClockStyle },
    Gender(GenderPicker),
    Weight { dial: RadialDial, style: ScaleStyle, strip: Rect },
    Grades { selector: SegmentedSelector, strip: Rect },
    Clicker(ShapeClicker),
    MovingBox(MovingBox),
}

/// Core engine state: everything that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    kind: ScreenKind,
    size: Size,
    screen: Screen,
    rng: SmallRng,
}

impl EngineCore {
    /// Mount `kind` on a surface of `size`. Animations that play on entry
    /// start at `now_ms`; `seed` drives every random placement.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the screen cannot be laid out on `size`.
    pub fn new(kind: ScreenKind, size: Size, seed: u64, now_ms: f64) -> Result<Self, EngineError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let screen = match kind {
            ScreenKind::Arrow => {
                let mut animation = Animation::new(ARROW_DURATION_MS);
                animation.restart(now_ms);
                Screen::Arrow { animator: ArrowAnimator::default(), animation }
            }
            ScreenKind::Clock => Screen::Clock { time: ClockTime::default(), style: ClockStyle::default() },
            ScreenKind::Gender => {
                let mut picker = GenderPicker::new()?;
                picker.set_size(size);
                Screen::Gender(picker)
            }
            ScreenKind::Weight => {
                let style = ScaleStyle::default();
                let strip = weight_strip(size);
                let mut dial = RadialDial::new(WEIGHT_MIN, WEIGHT_MAX, WEIGHT_INITIAL)?;
                dial.set_center(dial_center(strip, &style));
                Screen::Weight { dial, style, strip }
            }
            ScreenKind::Grades => {
                let strip = grades_strip(size);
                let mut selector = SegmentedSelector::academic_grades();
                selector.set_size(strip.size());
                Screen::Grades { selector, strip }
            }
            ScreenKind::Clicker => Screen::Clicker(ShapeClicker::new(size, &mut rng)?),
            ScreenKind::MovingBox => Screen::MovingBox(MovingBox::new(size, &mut rng, now_ms)?),
        };
        Ok(Self { kind, size, screen, rng })
    }

    #[must_use]
    pub fn kind(&self) -> ScreenKind {
        self.kind
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    // --- Viewport ---

    /// Follow a resized surface: strips, dial center, symbol placement and
    /// random placement ranges are recomputed for `size`. Selections, dial
    /// rotation and game state carry over.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Shape`] when the clicker or box no longer fits.
    pub fn set_size(&mut self, size: Size) -> Result<Vec<Action>, EngineError> {
        if size == self.size {
            return Ok(Vec::new());
        }
        match &mut self.screen {
            Screen::Arrow { .. } | Screen::Clock { .. } => {}
            Screen::Gender(picker) => picker.set_size(size),
            Screen::Weight { dial, style, strip } => {
                *strip = weight_strip(size);
                dial.set_center(dial_center(*strip, style));
            }
            Screen::Grades { selector, strip } => {
                *strip = grades_strip(size);
                selector.set_size(strip.size());
            }
            Screen::Clicker(game) => game.set_size(size, &mut self.rng)?,
            Screen::MovingBox(moving) => moving.set_canvas(size, &mut self.rng)?,
        }
        self.size = size;
        Ok(vec![Action::RenderNeeded])
    }

    // --- Input ---

    /// Route one gesture event to the mounted screen.
    ///
    /// # Errors
    ///
    /// Propagates placement failures when a screen respawns something.
    pub fn on_input(&mut self, event: InputEvent, now_ms: f64) -> Result<Vec<Action>, EngineError> {
        let actions = match (&mut self.screen, event) {
            (Screen::Weight { dial, .. }, InputEvent::DragStart { at }) => {
                dial.on_drag_start(at);
                Vec::new()
            }
            (Screen::Weight { dial, .. }, InputEvent::DragUpdate { at }) => {
                let before = dial.value();
                let after = dial.on_drag_update(at);
                if after == before {
                    vec![Action::RenderNeeded]
                } else {
                    vec![Action::WeightChanged(after), Action::RenderNeeded]
                }
            }
            (Screen::Weight { dial, .. }, InputEvent::DragEnd) => {
                dial.on_drag_end();
                Vec::new()
            }
            (Screen::Grades { selector, strip }, InputEvent::Tap { at }) => {
                let local = Point::new(at.x - strip.x, at.y - strip.y);
                if selector.on_tap(local, now_ms) {
                    let label = selector.selected().and_then(|i| selector.labels().get(i)).cloned();
                    label.into_iter().map(Action::GradeSelected).chain([Action::RenderNeeded]).collect()
                } else {
                    Vec::new()
                }
            }
            (Screen::Gender(picker), InputEvent::Tap { at }) => match picker.on_tap(at, now_ms) {
                Some(gender) => vec![Action::GenderSelected(gender), Action::RenderNeeded],
                None => Vec::new(),
            },
            (Screen::Clicker(game), InputEvent::Tap { at }) => match game.on_tap(at, &mut self.rng)? {
                TapOutcome::Toggled => vec![Action::GameRunning(game.is_running()), Action::RenderNeeded],
                TapOutcome::Scored => vec![Action::Scored { points: game.points() }, Action::RenderNeeded],
                TapOutcome::Missed | TapOutcome::Ignored => Vec::new(),
            },
            (Screen::MovingBox(moving), InputEvent::Tap { .. }) => {
                let target = moving.on_tap(&mut self.rng, now_ms)?;
                vec![Action::BoxMoving { target }, Action::RenderNeeded]
            }
            _ => Vec::new(),
        };
        Ok(actions)
    }

    // --- Time ---

    /// Show `time` on the clock screen.
    pub fn set_time(&mut self, time: ClockTime) -> Vec<Action> {
        match &mut self.screen {
            Screen::Clock { time: shown, .. } if *shown != time => {
                *shown = time;
                vec![Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    /// One second of the countdown on the game screen.
    pub fn tick_second(&mut self) -> Vec<Action> {
        let Screen::Clicker(game) = &mut self.screen else {
            return Vec::new();
        };
        match game.tick() {
            Tick::Idle => Vec::new(),
            Tick::Remaining(_) => vec![Action::RenderNeeded],
            Tick::Finished => vec![Action::CountdownFinished, Action::GameRunning(false), Action::RenderNeeded],
        }
    }

    /// Whether frames rendered at `now_ms` still differ from one another.
    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        match &self.screen {
            Screen::Arrow { animation, .. } => animation.is_running(now_ms),
            Screen::Gender(picker) => picker.is_animating(now_ms),
            Screen::Grades { selector, .. } => selector.is_animating(now_ms),
            Screen::MovingBox(_) => true,
            Screen::Clock { .. } | Screen::Weight { .. } | Screen::Clicker(_) => false,
        }
    }

    // --- Render ---

    /// Draw the mounted screen as it looks at `now_ms`.
    ///
    /// # Errors
    ///
    /// Propagates surface failures.
    pub fn render<S: Surface>(&self, surface: &mut S, now_ms: f64) -> Result<(), S::Error> {
        surface.draw_rect(Rect::from_origin_size(Point::ZERO, self.size), &Paint::fill(Color::WHITE))?;
        match &self.screen {
            Screen::Arrow { animator, animation } => {
                grid::draw(surface, &GridStyle::default())?;
                arrow::draw(surface, &animator.compute_frame(animation.progress(now_ms)))
            }
            Screen::Clock { time, style } => {
                let face = clock::compute_face_geometry(*time, style, self.size.center());
                clock::draw(surface, &face)
            }
            Screen::Gender(picker) => picker::draw(surface, picker, now_ms),
            Screen::Weight { dial, style, .. } => {
                draw_weight_readout(surface, dial.value(), self.size.center())?;
                dial::draw(surface, &dial.layout(style), style)
            }
            Screen::Grades { selector, strip } => {
                grid::draw(surface, &GridStyle::default())?;
                surface.save();
                surface.translate(strip.x, strip.y)?;
                selector::draw(surface, selector, now_ms)?;
                surface.restore();
                Ok(())
            }
            Screen::Clicker(game) => game::draw(surface, game),
            Screen::MovingBox(moving) => moving_box::draw(surface, moving, now_ms),
        }
    }
}

/// Bottom band holding the weight dial.
fn weight_strip(size: Size) -> Rect {
    Rect::new(0.0, size.height - WEIGHT_STRIP_HEIGHT, size.width, WEIGHT_STRIP_HEIGHT)
}

/// Wheel center for a dial laid out in `strip`, in surface coordinates.
fn dial_center(strip: Rect, style: &ScaleStyle) -> Point {
    let local = dial::wheel_center(strip.size(), style);
    Point::new(local.x, local.y + strip.y)
}

/// Vertically centered band, inset on both sides.
fn grades_strip(size: Size) -> Rect {
    Rect::new(
        SELECTOR_STRIP_INSET,
        (size.height - SELECTOR_STRIP_HEIGHT) / 2.0,
        size.width - 2.0 * SELECTOR_STRIP_INSET,
        SELECTOR_STRIP_HEIGHT,
    )
}

/// "70 Kg" with a bold number, centered on `center`.
fn draw_weight_readout<S: Surface>(surface: &mut S, value: i32, center: Point) -> Result<(), S::Error> {
    let number = value.to_string();
    let number_style = TextStyle::new(WEIGHT_TEXT_SIZE, Color::BLACK).bold().with_align(TextAlign::Left);
    let unit_style = TextStyle::new(WEIGHT_UNIT_SIZE, Color::GREEN).with_align(TextAlign::Left);
    let number_width = surface.measure_text(&number, &number_style)?.width;
    let unit_width = surface.measure_text(" Kg", &unit_style)?.width;
    let left = center.x - (number_width + unit_width) / 2.0;
    surface.draw_text(&number, Point::new(left, center.y), &number_style)?;
    surface.draw_text(" Kg", Point::new(left + number_width, center.y), &unit_style)
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    gestures: GestureTracker,
    pub core: EngineCore,
}

impl Engine {
    /// Mount `kind` on `canvas`, sized to the element's pixel size.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the element has no 2D context or the screen cannot
    /// be laid out on it.
    pub fn new(canvas: HtmlCanvasElement, kind: ScreenKind, seed: u64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let core = EngineCore::new(kind, canvas_size(&canvas), seed, now_ms()).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { canvas, ctx, gestures: GestureTracker::new(), core })
    }

    // --- Input events ---

    /// # Errors
    ///
    /// See [`EngineCore::on_input`].
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Result<Vec<Action>, JsValue> {
        let events = self.gestures.pointer_down(Point::new(x, y));
        self.dispatch(events)
    }

    /// # Errors
    ///
    /// See [`EngineCore::on_input`].
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<Vec<Action>, JsValue> {
        let events = self.gestures.pointer_move(Point::new(x, y));
        self.dispatch(events)
    }

    /// # Errors
    ///
    /// See [`EngineCore::on_input`].
    pub fn on_pointer_up(&mut self, x: f64, y: f64) -> Result<Vec<Action>, JsValue> {
        let events = self.gestures.pointer_up(Point::new(x, y));
        self.dispatch(events)
    }

    /// # Errors
    ///
    /// See [`EngineCore::on_input`].
    pub fn on_pointer_cancel(&mut self) -> Result<Vec<Action>, JsValue> {
        let events = self.gestures.cancel();
        self.dispatch(events)
    }

    fn dispatch(&mut self, events: Vec<InputEvent>) -> Result<Vec<Action>, JsValue> {
        let now = now_ms();
        let mut actions = Vec::new();
        for event in events {
            let produced = self.core.on_input(event, now).map_err(|e| JsValue::from_str(&e.to_string()))?;
            actions.extend(produced);
        }
        Ok(actions)
    }

    // --- Time ---

    /// Refresh the clock from the browser's local time and advance the game
    /// countdown. Call once per second.
    pub fn on_second(&mut self) -> Vec<Action> {
        let date = js_sys::Date::new_0();
        let time = ClockTime::new(date.get_hours(), date.get_minutes(), date.get_seconds()).unwrap_or_default();
        let mut actions = self.core.set_time(time);
        actions.extend(self.core.tick_second());
        actions
    }

    /// Whether the host should keep requesting animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.core.is_animating(now_ms())
    }

    // --- Render ---

    /// Draw the current state to the canvas, first picking up any change in
    /// the element's size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the screen no longer fits or any `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.sync_size()?;
        let mut surface = WebSurface::new(&self.ctx, self.core.size());
        self.core.render(&mut surface, now_ms())
    }

    // --- Viewport ---

    /// Re-read the canvas element's pixel size and re-lay out the screen if
    /// it changed.
    ///
    /// # Errors
    ///
    /// See [`EngineCore::set_size`].
    pub fn sync_size(&mut self) -> Result<Vec<Action>, JsValue> {
        let size = canvas_size(&self.canvas);
        self.core.set_size(size).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

fn canvas_size(canvas: &HtmlCanvasElement) -> Size {
    Size::new(f64::from(canvas.width()), f64::from(canvas.height()))
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}
