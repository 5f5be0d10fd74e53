//! Randomly placed primitives for the shape-clicking game, and point containment.
//!
//! Positions are whole surface units drawn from a range inclusive at both
//! ends. The range keeps the whole shape on the canvas:
//!
//! | Shape | `position` | x range | y range |
//! |-------|-----------|---------|---------|
//! | Circle | center | `[r, W − r]` | `[r, H − r]` |
//! | Square | top-left | `[s, W − s]` | `[s, H − s]` |
//! | Rectangle | top-left | `[w, W − w]` | `[h, H − h]` |

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

use rand::Rng;

use crate::geom::{Point, Rect, Size};
use crate::surface::{Color, Paint, Surface};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ShapeError {
    #[error("{width}x{height} canvas is too small for a {kind:?}")]
    CanvasTooSmall { kind: ShapeKind, width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [Self; 3] = [Self::Circle, Self::Square, Self::Rectangle];

    /// Game dimensions for this kind.
    #[must_use]
    pub fn default_shape(self) -> Shape {
        match self {
            Self::Circle => Shape::Circle { radius: 100.0 },
            Self::Square => Shape::Square { side: 250.0 },
            Self::Rectangle => Shape::Rectangle { width: 350.0, height: 200.0 },
        }
    }
}

/// Pick a kind uniformly.
pub fn random_kind(rng: &mut impl Rng) -> ShapeKind {
    ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())]
}

/// Whether `kind` has at least one whole position on `canvas`.
#[must_use]
pub fn fits(kind: ShapeKind, canvas: Size) -> bool {
    let (mx, my) = kind.default_shape().margins();
    inclusive_range(mx, canvas.width).is_some() && inclusive_range(my, canvas.height).is_some()
}

/// Pick uniformly among the kinds that fit `canvas`. Same draw as
/// [`random_kind`] when every kind fits.
///
/// # Errors
///
/// Returns [`ShapeError::CanvasTooSmall`] when not even a circle fits.
pub fn random_fitting_kind(canvas: Size, rng: &mut impl Rng) -> Result<ShapeKind, ShapeError> {
    let fitting: Vec<ShapeKind> = ShapeKind::ALL.into_iter().filter(|k| fits(*k, canvas)).collect();
    if fitting.is_empty() {
        return Err(ShapeError::CanvasTooSmall { kind: ShapeKind::Circle, width: canvas.width, height: canvas.height });
    }
    Ok(fitting[rng.random_range(0..fitting.len())])
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    #[must_use]
    pub fn kind(self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Square { .. } => ShapeKind::Square,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// Margins kept from the canvas edges on each axis.
    fn margins(self) -> (f64, f64) {
        match self {
            Self::Circle { radius } => (radius, radius),
            Self::Square { side } => (side, side),
            Self::Rectangle { width, height } => (width, height),
        }
    }
}

/// A shape placed on a canvas of known size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub color: Color,
    /// Center for circles, top-left otherwise.
    pub position: Point,
    pub canvas: Size,
}

fn inclusive_range(margin: f64, extent: f64) -> Option<(i64, i64)> {
    let lo = margin.ceil() as i64;
    let hi = (extent - margin).floor() as i64;
    (lo <= hi).then_some((lo, hi))
}

/// Random position for `shape` on `canvas`.
///
/// # Errors
///
/// Returns [`ShapeError::CanvasTooSmall`] when no whole position keeps the
/// shape inside the canvas.
pub fn random_position(shape: Shape, canvas: Size, rng: &mut impl Rng) -> Result<Point, ShapeError> {
    let (mx, my) = shape.margins();
    let too_small = || ShapeError::CanvasTooSmall { kind: shape.kind(), width: canvas.width, height: canvas.height };
    let (x_lo, x_hi) = inclusive_range(mx, canvas.width).ok_or_else(too_small)?;
    let (y_lo, y_hi) = inclusive_range(my, canvas.height).ok_or_else(too_small)?;
    Ok(Point::new(rng.random_range(x_lo..=x_hi) as f64, rng.random_range(y_lo..=y_hi) as f64))
}

/// A red primitive of `kind` at a random position.
///
/// # Errors
///
/// See [`random_position`].
pub fn spawn_random(kind: ShapeKind, canvas: Size, rng: &mut impl Rng) -> Result<Primitive, ShapeError> {
    let shape = kind.default_shape();
    let position = random_position(shape, canvas, rng)?;
    Ok(Primitive { shape, color: Color::RED, position, canvas })
}

impl Primitive {
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        match self.shape {
            Shape::Circle { radius } => p.distance(self.position) <= radius,
            Shape::Square { .. } | Shape::Rectangle { .. } => self.bounds().contains(p),
        }
    }

    /// Axis-aligned box covering the shape.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let Point { x, y } = self.position;
        match self.shape {
            Shape::Circle { radius } => Rect::new(x - radius, y - radius, radius * 2.0, radius * 2.0),
            Shape::Square { side } => Rect::new(x, y, side, side),
            Shape::Rectangle { width, height } => Rect::new(x, y, width, height),
        }
    }

    /// A fresh primitive on the same canvas, its kind chosen uniformly among
    /// those that fit.
    ///
    /// # Errors
    ///
    /// See [`random_fitting_kind`].
    pub fn respawn(&self, rng: &mut impl Rng) -> Result<Self, ShapeError> {
        let kind = random_fitting_kind(self.canvas, rng)?;
        spawn_random(kind, self.canvas, rng).map(|p| Self { color: self.color, ..p })
    }
}

/// # Errors
///
/// Propagates surface failures.
pub fn draw<S: Surface>(surface: &mut S, primitive: &Primitive) -> Result<(), S::Error> {
    let paint = Paint::fill(primitive.color);
    match primitive.shape {
        Shape::Circle { radius } => surface.draw_circle(primitive.position, radius, &paint),
        Shape::Square { .. } | Shape::Rectangle { .. } => surface.draw_rect(primitive.bounds(), &paint),
    }
}
