//! Shared numeric constants for the canvas crate.

// ── Paths ───────────────────────────────────────────────────────

/// Polyline steps per curve segment when flattening for measurement.
pub const FLATTEN_STEPS: u32 = 64;

/// Control-point distance factor for approximating a quarter circle with a cubic.
pub const CIRCLE_KAPPA: f64 = 0.552_284_749_831;

// ── Animated arrow ──────────────────────────────────────────────

/// Arrowhead base width.
pub const ARROWHEAD_BASE: f64 = 60.0;

/// Arrowhead height from tip to base.
pub const ARROWHEAD_HEIGHT: f64 = 90.0;

/// How far the tip sits ahead of the path head before rotation.
pub const ARROWHEAD_TIP_OFFSET: f64 = 30.0;

/// Stroke width of the travelled sub-path.
pub const ARROW_STROKE_WIDTH: f64 = 5.0;

/// Time for the arrow to travel the whole path.
pub const ARROW_DURATION_MS: f64 = 5000.0;

// ── Clock ───────────────────────────────────────────────────────

/// Distance from the rim to the tip of each hand.
pub const HOUR_HAND_INSET: f64 = 35.0;
pub const MINUTE_HAND_INSET: f64 = 25.0;
pub const SECOND_HAND_INSET: f64 = 15.0;

pub const HOUR_HAND_WIDTH: f64 = 5.0;
pub const MINUTE_HAND_WIDTH: f64 = 3.0;
pub const SECOND_HAND_WIDTH: f64 = 2.0;

/// Interval of the repeating clock / countdown tick.
pub const TICK_INTERVAL_MS: u64 = 1000;

// ── Weight dial ─────────────────────────────────────────────────

/// Gap between a tick's inner end and its label.
pub const DIAL_LABEL_GAP: f64 = 5.0;

/// Half width of the indicator triangle's base.
pub const DIAL_INDICATOR_HALF_BASE: f64 = 4.0;

pub const DIAL_DEFAULT_MIN: i32 = 20;
pub const DIAL_DEFAULT_MAX: i32 = 250;
pub const DIAL_DEFAULT_INITIAL: i32 = 80;

// ── Weight screen ───────────────────────────────────────────────

/// Height of the strip at the bottom of the screen that shows the dial.
pub const WEIGHT_STRIP_HEIGHT: f64 = 300.0;
pub const WEIGHT_MIN: i32 = 20;
pub const WEIGHT_MAX: i32 = 250;
pub const WEIGHT_INITIAL: i32 = 70;
pub const WEIGHT_TEXT_SIZE: f64 = 45.0;
pub const WEIGHT_UNIT_SIZE: f64 = 25.0;

// ── Segmented selector ──────────────────────────────────────────

/// Selector strip height and its inset from the screen edges.
pub const SELECTOR_STRIP_HEIGHT: f64 = 50.0;
pub const SELECTOR_STRIP_INSET: f64 = 15.0;

pub const SELECTOR_DURATION_MS: f64 = 700.0;
pub const SELECTOR_SPACING: f64 = 15.0;
pub const SELECTOR_STROKE_WIDTH: f64 = 2.0;
pub const SELECTOR_TEXT_SIZE: f64 = 20.0;

// ── Gender picker ───────────────────────────────────────────────

pub const PICKER_SCALE: f64 = 9.0;
pub const PICKER_GAP: f64 = 50.0;
pub const PICKER_SELECTED_RADIUS: f64 = 80.0;
pub const PICKER_DURATION_MS: f64 = 1000.0;

// ── Moving box ──────────────────────────────────────────────────

pub const BOX_SIDE: f64 = 300.0;
pub const BOX_ROTATION_MS: f64 = 3000.0;
pub const BOX_TRAVEL_MS: f64 = 300.0;

// ── Shape clicker ───────────────────────────────────────────────

pub const COUNTDOWN_SECS: u32 = 30;

/// Height of the score/button strip above the playing field.
pub const GAME_HEADER_HEIGHT: f64 = 120.0;

/// Start/Reset button size.
pub const GAME_BUTTON_WIDTH: f64 = 240.0;
pub const GAME_BUTTON_HEIGHT: f64 = 80.0;

pub const GAME_TEXT_SIZE: f64 = 40.0;
pub const GAME_PADDING: f64 = 10.0;

// ── Text ────────────────────────────────────────────────────────

/// Average glyph advance as a fraction of font size, for surfaces without
/// real text metrics.
pub const GLYPH_ADVANCE_RATIO: f64 = 0.6;

// ── Input ───────────────────────────────────────────────────────

/// Pointer travel (px) below which a press-release counts as a tap.
pub const TAP_SLOP_PX: f64 = 8.0;
