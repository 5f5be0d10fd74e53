//! Shape-clicking reaction game: score points by tapping the shape before the
//! countdown runs out.
//!
//! The surface is split into a header strip (points, Start/Reset button,
//! seconds left) and the playing field below it. Primitives live in field
//! coordinates.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use rand::Rng;

use crate::consts::{GAME_BUTTON_HEIGHT, GAME_BUTTON_WIDTH, GAME_HEADER_HEIGHT, GAME_PADDING, GAME_TEXT_SIZE};
use crate::countdown::{Countdown, Tick};
use crate::geom::{Point, Rect, Size};
use crate::shapes::{self, Primitive, ShapeError};
use crate::surface::{Color, Paint, Surface, TextAlign, TextStyle};

/// Result of a tap on the game surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The Start/Reset button was pressed.
    Toggled,
    /// The shape was hit and respawned.
    Scored,
    Missed,
    /// The game is not running.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeClicker {
    size: Size,
    primitive: Primitive,
    points: u32,
    countdown: Countdown,
}

impl ShapeClicker {
    /// # Errors
    ///
    /// Returns [`ShapeError::CanvasTooSmall`] when the playing field cannot
    /// hold any shape. Kinds too big for the field are never spawned.
    pub fn new(size: Size, rng: &mut impl Rng) -> Result<Self, ShapeError> {
        let field = field_size(size);
        let kind = shapes::random_fitting_kind(field, rng)?;
        let primitive = shapes::spawn_random(kind, field, rng)?;
        Ok(Self { size, primitive, points: 0, countdown: Countdown::default() })
    }

    /// Follow a resized surface. The shape stays put while it still lies
    /// inside the new field and is respawned otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CanvasTooSmall`] when the new field holds no shape.
    pub fn set_size(&mut self, size: Size, rng: &mut impl Rng) -> Result<(), ShapeError> {
        if size == self.size {
            return Ok(());
        }
        let field = field_size(size);
        let mut primitive = Primitive { canvas: field, ..self.primitive };
        if !Rect::from_origin_size(Point::ZERO, field).contains_rect(&primitive.bounds()) {
            primitive = primitive.respawn(rng)?;
        }
        self.size = size;
        self.primitive = primitive;
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    #[must_use]
    pub fn button_rect(&self) -> Rect {
        Rect::new(
            (self.size.width - GAME_BUTTON_WIDTH) / 2.0,
            (GAME_HEADER_HEIGHT - GAME_BUTTON_HEIGHT) / 2.0,
            GAME_BUTTON_WIDTH,
            GAME_BUTTON_HEIGHT,
        )
    }

    /// Start when stopped, reset when running. Points go back to zero either way.
    pub fn toggle(&mut self) {
        self.countdown.set_running(!self.countdown.is_running());
        self.points = 0;
    }

    /// # Errors
    ///
    /// Propagates a failed respawn after a hit.
    pub fn on_tap(&mut self, at: Point, rng: &mut impl Rng) -> Result<TapOutcome, ShapeError> {
        if self.button_rect().contains(at) {
            self.toggle();
            return Ok(TapOutcome::Toggled);
        }
        if !self.is_running() {
            return Ok(TapOutcome::Ignored);
        }
        let local = Point::new(at.x, at.y - GAME_HEADER_HEIGHT);
        if local.y < 0.0 || !self.primitive.contains(local) {
            return Ok(TapOutcome::Missed);
        }
        self.primitive = self.primitive.respawn(rng)?;
        self.points += 1;
        Ok(TapOutcome::Scored)
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Tick {
        self.countdown.tick()
    }
}

fn field_size(size: Size) -> Size {
    Size::new(size.width, (size.height - GAME_HEADER_HEIGHT).max(0.0))
}

/// # Errors
///
/// Propagates surface failures.
pub fn draw<S: Surface>(surface: &mut S, game: &ShapeClicker) -> Result<(), S::Error> {
    let baseline = GAME_HEADER_HEIGHT / 2.0 + GAME_TEXT_SIZE * 0.35;
    let text = TextStyle::new(GAME_TEXT_SIZE, Color::BLACK);

    surface.draw_text(
        &format!("Points: {}", game.points),
        Point::new(GAME_PADDING, baseline),
        &text.with_align(TextAlign::Left),
    )?;

    let button = game.button_rect();
    surface.draw_rect(button, &Paint::fill(Color::BLUE))?;
    let label = if game.is_running() { "Reset" } else { "Start" };
    surface.draw_text(label, Point::new(button.center().x, baseline), &TextStyle::new(GAME_TEXT_SIZE, Color::WHITE))?;

    surface.draw_text(
        &game.remaining_secs().to_string(),
        Point::new(game.size.width - GAME_PADDING, baseline),
        &text.with_align(TextAlign::Right),
    )?;

    surface.save();
    surface.translate(0.0, GAME_HEADER_HEIGHT)?;
    shapes::draw(surface, &game.primitive)?;
    surface.restore();
    Ok(())
}
