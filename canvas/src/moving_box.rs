//! A red box that spins forever and glides to a random spot on every tap.

#[cfg(test)]
#[path = "moving_box_test.rs"]
mod moving_box_test;

use rand::Rng;

use crate::anim::{Animation, Easing, Repeat, Tween};
use crate::consts::{BOX_ROTATION_MS, BOX_SIDE, BOX_TRAVEL_MS};
use crate::geom::{Point, Rect, Size};
use crate::shapes::{Shape, ShapeError, random_position};
use crate::surface::{Color, Paint, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct MovingBox {
    canvas: Size,
    side: f64,
    position: Tween<Point>,
    rotation: Animation,
}

impl MovingBox {
    /// A box at a random spot, spinning from `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CanvasTooSmall`] when the canvas cannot hold the
    /// box's placement margins.
    pub fn new(canvas: Size, rng: &mut impl Rng, now_ms: f64) -> Result<Self, ShapeError> {
        let side = BOX_SIDE;
        let start = random_position(Shape::Square { side }, canvas, rng)?;
        let mut rotation = Animation::new(BOX_ROTATION_MS).with_easing(Easing::Linear).with_repeat(Repeat::Restart);
        rotation.restart(now_ms);
        Ok(Self { canvas, side, position: Tween::new(start, Animation::new(BOX_TRAVEL_MS)), rotation })
    }

    /// Pick a new target and start gliding toward it.
    ///
    /// # Errors
    ///
    /// See [`MovingBox::new`].
    pub fn on_tap(&mut self, rng: &mut impl Rng, now_ms: f64) -> Result<Point, ShapeError> {
        let target = random_position(Shape::Square { side: self.side }, self.canvas, rng)?;
        self.position.retarget(target, now_ms);
        Ok(target)
    }

    /// Follow a resized canvas. A target that no longer lies inside it is
    /// replaced by a fresh spot the box jumps to.
    ///
    /// # Errors
    ///
    /// See [`MovingBox::new`].
    pub fn set_canvas(&mut self, canvas: Size, rng: &mut impl Rng) -> Result<(), ShapeError> {
        if canvas == self.canvas {
            return Ok(());
        }
        let target = Rect::from_origin_size(self.target(), Size::new(self.side, self.side));
        if !Rect::from_origin_size(Point::ZERO, canvas).contains_rect(&target) {
            let spot = random_position(Shape::Square { side: self.side }, canvas, rng)?;
            self.position.snap(spot);
        }
        self.canvas = canvas;
        Ok(())
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.position.target()
    }

    /// Top-left corner shown at `now_ms`.
    #[must_use]
    pub fn position(&self, now_ms: f64) -> Point {
        self.position.value(now_ms)
    }

    /// Rotation in degrees, in `[0, 360)`.
    #[must_use]
    pub fn rotation_deg(&self, now_ms: f64) -> f64 {
        self.rotation.progress(now_ms) * 360.0
    }

    #[must_use]
    pub fn rect(&self, now_ms: f64) -> Rect {
        Rect::from_origin_size(self.position(now_ms), Size::new(self.side, self.side))
    }
}

/// # Errors
///
/// Propagates surface failures.
pub fn draw<S: Surface>(surface: &mut S, moving: &MovingBox, now_ms: f64) -> Result<(), S::Error> {
    let rect = moving.rect(now_ms);
    surface.save();
    surface.rotate(moving.rotation_deg(now_ms), rect.center())?;
    surface.draw_rect(rect, &Paint::fill(Color::RED))?;
    surface.restore();
    Ok(())
}
