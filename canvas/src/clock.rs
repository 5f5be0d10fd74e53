//! Analog clock face: minute/hour ticks around the rim and three hands.
//!
//! Angles follow the math convention (0° on +x, growing clockwise on screen),
//! so every hand formula subtracts 90° to put twelve o'clock at the top.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use crate::consts::{
    HOUR_HAND_INSET, HOUR_HAND_WIDTH, MINUTE_HAND_INSET, MINUTE_HAND_WIDTH, SECOND_HAND_INSET, SECOND_HAND_WIDTH,
};
use crate::geom::Point;
use crate::surface::{Color, Paint, StrokeCap, Surface};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("time component out of range: {0:02}:{1:02}:{2:02}")]
    OutOfRange(u32, u32, u32),
}

/// Wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] unless `hour < 24`, `minute < 60`
    /// and `second < 60`.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, ClockError> {
        if hour >= 24 || minute >= 60 || second >= 60 {
            return Err(ClockError::OutOfRange(hour, minute, second));
        }
        Ok(Self { hour, minute, second })
    }

    /// Time of day for a count of seconds since midnight (wraps at 24h).
    #[must_use]
    pub fn from_seconds(total: u64) -> Self {
        let of_day = total % 86_400;
        Self { hour: (of_day / 3600) as u32, minute: (of_day / 60 % 60) as u32, second: (of_day % 60) as u32 }
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.minute
    }

    #[must_use]
    pub fn second(self) -> u32 {
        self.second
    }
}

/// Visual parameters of the face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockStyle {
    pub radius: f64,
    pub hour_tick_length: f64,
    pub minute_tick_length: f64,
    pub hour_tick_color: Color,
    pub minute_tick_color: Color,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            radius: 120.0,
            hour_tick_length: 20.0,
            minute_tick_length: 15.0,
            hour_tick_color: Color::BLACK,
            minute_tick_color: Color::GRAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Hour,
    Minute,
}

/// One rim tick, from `start` (inner) to `end` (on the rim).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTick {
    pub degrees: u32,
    pub kind: TickKind,
    pub start: Point,
    pub end: Point,
    pub color: Color,
}

/// A hand from the center to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    pub angle_deg: f64,
    pub end: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    pub center: Point,
    pub radius: f64,
    pub ticks: Vec<ClockTick>,
    pub hour_hand: Hand,
    pub minute_hand: Hand,
    pub second_hand: Hand,
}

#[must_use]
pub fn hour_angle(time: ClockTime) -> f64 {
    f64::from(time.hour % 12) * 30.0 - 90.0
}

#[must_use]
pub fn minute_angle(time: ClockTime) -> f64 {
    f64::from(time.minute) * 6.0 - 90.0
}

#[must_use]
pub fn second_angle(time: ClockTime) -> f64 {
    f64::from(time.second) * 6.0 - 90.0
}

/// Rim ticks for every whole degree in `[0, 360)` that lands on an hour or minute.
#[must_use]
pub fn ticks(center: Point, style: &ClockStyle) -> Vec<ClockTick> {
    (0..360)
        .filter_map(|i: u32| {
            let (kind, length, color) = if i % 30 == 0 {
                (TickKind::Hour, style.hour_tick_length, style.hour_tick_color)
            } else if i % 6 == 0 {
                (TickKind::Minute, style.minute_tick_length, style.minute_tick_color)
            } else {
                return None;
            };
            let rad = f64::from(i).to_radians();
            Some(ClockTick {
                degrees: i,
                kind,
                start: Point::polar(center, style.radius - length, rad),
                end: Point::polar(center, style.radius, rad),
                color,
            })
        })
        .collect()
}

fn hand(center: Point, radius: f64, inset: f64, angle_deg: f64) -> Hand {
    Hand { angle_deg, end: Point::polar(center, radius - inset, angle_deg.to_radians()) }
}

/// Full face geometry for `time`, centered on `center`.
#[must_use]
pub fn compute_face_geometry(time: ClockTime, style: &ClockStyle, center: Point) -> ClockFace {
    ClockFace {
        center,
        radius: style.radius,
        ticks: ticks(center, style),
        hour_hand: hand(center, style.radius, HOUR_HAND_INSET, hour_angle(time)),
        minute_hand: hand(center, style.radius, MINUTE_HAND_INSET, minute_angle(time)),
        second_hand: hand(center, style.radius, SECOND_HAND_INSET, second_angle(time)),
    }
}

/// # Errors
///
/// Propagates surface failures.
pub fn draw<S: Surface>(surface: &mut S, face: &ClockFace) -> Result<(), S::Error> {
    surface.draw_circle(face.center, face.radius, &Paint::fill(Color::WHITE))?;

    for tick in &face.ticks {
        surface.draw_line(tick.start, tick.end, &Paint::stroke(tick.color, 1.0).with_cap(StrokeCap::Round))?;
    }

    let hands = [
        (face.hour_hand, Color::BLACK, HOUR_HAND_WIDTH),
        (face.minute_hand, Color::BLACK, MINUTE_HAND_WIDTH),
        (face.second_hand, Color::RED, SECOND_HAND_WIDTH),
    ];
    for (hand, color, width) in hands {
        surface.draw_line(face.center, hand.end, &Paint::stroke(color, width).with_cap(StrokeCap::Round))?;
    }
    Ok(())
}
