//! Weight-scale dial: a large wheel whose rim carries one tick per value,
//! rotated by dragging.
//!
//! DESIGN
//! ======
//! Rotation accumulates the angle swept since the gesture began instead of
//! mapping the pointer angle directly, so crossing the ±180° seam of `atan2`
//! inside one drag never makes the wheel jump. Each drag adds its whole-degree
//! delta to the angle committed by the previous drag; the sum is clamped so
//! the value under the indicator stays within `[min, max]`:
//!
//! ```text
//! value = initial − angle,   initial − max ≤ angle ≤ initial − min
//! ```

#[cfg(test)]
#[path = "dial_test.rs"]
mod dial_test;

use crate::consts::{
    DIAL_DEFAULT_INITIAL, DIAL_DEFAULT_MAX, DIAL_DEFAULT_MIN, DIAL_INDICATOR_HALF_BASE, DIAL_LABEL_GAP,
};
use crate::geom::{Point, Size};
use crate::path::VectorPath;
use crate::surface::{Color, Paint, Surface, TextStyle};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DialError {
    #[error("dial bounds inverted: min {min} > max {max}")]
    InvertedBounds { min: i32, max: i32 },
}

/// Visual parameters of the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleStyle {
    /// Width of the rim band.
    pub width: f64,
    /// Radius of the band's center line.
    pub radius: f64,
    pub normal_color: Color,
    pub five_step_color: Color,
    pub ten_step_color: Color,
    pub normal_length: f64,
    pub five_step_length: f64,
    pub ten_step_length: f64,
    pub indicator_color: Color,
    pub indicator_length: f64,
    pub text_size: f64,
}

impl Default for ScaleStyle {
    fn default() -> Self {
        Self {
            width: 150.0,
            radius: 550.0,
            normal_color: Color::GRAY,
            five_step_color: Color::GREEN,
            ten_step_color: Color::BLACK,
            normal_length: 15.0,
            five_step_length: 25.0,
            ten_step_length: 35.0,
            indicator_color: Color::GREEN,
            indicator_length: 60.0,
            text_size: 18.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Normal,
    FiveStep,
    TenStep,
}

impl TickKind {
    #[must_use]
    pub fn of(value: i32) -> Self {
        if value % 10 == 0 {
            Self::TenStep
        } else if value % 5 == 0 {
            Self::FiveStep
        } else {
            Self::Normal
        }
    }
}

/// A number drawn tangent to the rim.
#[derive(Debug, Clone, PartialEq)]
pub struct DialLabel {
    pub text: String,
    pub at: Point,
    pub rotation_deg: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialTick {
    pub value: i32,
    pub kind: TickKind,
    pub start: Point,
    pub end: Point,
    pub color: Color,
    pub label: Option<DialLabel>,
}

/// Per-frame geometry of the whole dial.
#[derive(Debug, Clone, PartialEq)]
pub struct DialLayout {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub ticks: Vec<DialTick>,
    /// Triangle pointing at the current value (tip first).
    pub indicator: [Point; 3],
}

/// Drag lifecycle. Exactly one gesture can be active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DialPhase {
    #[default]
    Idle,
    Dragging {
        /// Pointer angle when the gesture began, in degrees.
        start_angle: f64,
    },
}

/// Center of the wheel for a surface of `size`: horizontally centered, with
/// the top of the band touching the top edge.
#[must_use]
pub fn wheel_center(size: Size, style: &ScaleStyle) -> Point {
    Point::new(size.width / 2.0, style.width / 2.0 + style.radius)
}

/// Angle of the pointer as seen from `center`, in degrees (atan2 convention).
#[must_use]
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    (center.y - pointer.y).atan2(center.x - pointer.x).to_degrees()
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialDial {
    min: i32,
    max: i32,
    initial: i32,
    center: Point,
    /// Current clamped rotation in degrees.
    angle: f64,
    /// Rotation committed when the last drag ended.
    committed_angle: f64,
    phase: DialPhase,
    value: i32,
}

impl Default for RadialDial {
    /// 20 to 250, starting at 80.
    fn default() -> Self {
        Self {
            min: DIAL_DEFAULT_MIN,
            max: DIAL_DEFAULT_MAX,
            initial: DIAL_DEFAULT_INITIAL,
            center: Point::ZERO,
            angle: 0.0,
            committed_angle: 0.0,
            phase: DialPhase::Idle,
            value: DIAL_DEFAULT_INITIAL,
        }
    }
}

impl RadialDial {
    /// # Errors
    ///
    /// Returns [`DialError::InvertedBounds`] when `min > max`.
    pub fn new(min: i32, max: i32, initial: i32) -> Result<Self, DialError> {
        if min > max {
            return Err(DialError::InvertedBounds { min, max });
        }
        Ok(Self {
            min,
            max,
            initial,
            center: Point::ZERO,
            angle: 0.0,
            committed_angle: 0.0,
            phase: DialPhase::Idle,
            value: initial,
        })
    }

    /// Where the wheel's center is on the surface; pointer angles are measured from here.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn phase(&self) -> DialPhase {
        self.phase
    }

    #[must_use]
    pub fn bounds(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    fn angle_bounds(&self) -> (f64, f64) {
        (f64::from(self.initial - self.max), f64::from(self.initial - self.min))
    }

    /// Begin a drag. Ignored (returns `false`) while another drag is active.
    pub fn on_drag_start(&mut self, pointer: Point) -> bool {
        if matches!(self.phase, DialPhase::Dragging { .. }) {
            return false;
        }
        self.phase = DialPhase::Dragging { start_angle: pointer_angle(self.center, pointer) };
        true
    }

    /// Rotate to follow the pointer and return the value under the indicator.
    ///
    /// Outside a drag the value is returned unchanged.
    pub fn on_drag_update(&mut self, pointer: Point) -> i32 {
        let DialPhase::Dragging { start_angle } = self.phase else {
            return self.value;
        };
        let touch = pointer_angle(self.center, pointer);
        let raw = self.committed_angle + (touch - start_angle).round();
        let (lo, hi) = self.angle_bounds();
        self.angle = raw.clamp(lo, hi);
        self.value = (f64::from(self.initial) - self.angle).round() as i32;
        self.value
    }

    /// Finish the drag and keep the current rotation for the next one.
    pub fn on_drag_end(&mut self) {
        if matches!(self.phase, DialPhase::Dragging { .. }) {
            self.committed_angle = self.angle;
            self.phase = DialPhase::Idle;
        }
    }

    /// Tick, label and indicator geometry for the current rotation.
    #[must_use]
    pub fn layout(&self, style: &ScaleStyle) -> DialLayout {
        let center = self.center;
        let outer_radius = style.radius + style.width / 2.0;
        let inner_radius = style.radius - style.width / 2.0;

        let ticks = (self.min..=self.max)
            .map(|i| {
                let rad = (f64::from(i - self.initial) + self.angle - 90.0).to_radians();
                let kind = TickKind::of(i);
                let (length, color) = match kind {
                    TickKind::TenStep => (style.ten_step_length, style.ten_step_color),
                    TickKind::FiveStep => (style.five_step_length, style.five_step_color),
                    TickKind::Normal => (style.normal_length, style.normal_color),
                };
                let label = match kind {
                    TickKind::Normal => None,
                    TickKind::TenStep | TickKind::FiveStep => {
                        let size = if kind == TickKind::FiveStep { style.text_size / 2.0 } else { style.text_size };
                        let radius = outer_radius - length - DIAL_LABEL_GAP - size;
                        Some(DialLabel {
                            text: i.unsigned_abs().to_string(),
                            at: Point::polar(center, radius, rad),
                            rotation_deg: rad.to_degrees() + 90.0,
                            size,
                        })
                    }
                };
                DialTick {
                    value: i,
                    kind,
                    start: Point::polar(center, outer_radius - length, rad),
                    end: Point::polar(center, outer_radius, rad),
                    color,
                    label,
                }
            })
            .collect();

        let base_y = center.y - inner_radius;
        let indicator = [
            Point::new(center.x, base_y - style.indicator_length),
            Point::new(center.x - DIAL_INDICATOR_HALF_BASE, base_y),
            Point::new(center.x + DIAL_INDICATOR_HALF_BASE, base_y),
        ];

        DialLayout { center, outer_radius, inner_radius, ticks, indicator }
    }
}

/// # Errors
///
/// Propagates surface failures.
pub fn draw<S: Surface>(surface: &mut S, layout: &DialLayout, style: &ScaleStyle) -> Result<(), S::Error> {
    surface.draw_circle(layout.center, style.radius, &Paint::stroke(Color::WHITE, style.width))?;

    for tick in &layout.ticks {
        surface.draw_line(tick.start, tick.end, &Paint::stroke(tick.color, 1.0))?;
        if let Some(label) = &tick.label {
            surface.save();
            surface.rotate(label.rotation_deg, label.at)?;
            surface.draw_text(&label.text, label.at, &TextStyle::new(label.size, Color::BLACK))?;
            surface.restore();
        }
    }

    surface.draw_path(&VectorPath::polygon(&layout.indicator), &Paint::fill(style.indicator_color))
}
