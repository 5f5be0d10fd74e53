//! Gender picker: two vector symbols side by side. Tapping one floods it with
//! a radial gradient that grows from the tap point while the other drains.
//!
//! DESIGN
//! ======
//! Each symbol keeps its path in its own (unscaled) coordinates and a
//! [`Transform`] that maps the path's bounds onto its slot on the surface.
//! Taps are tested against the mapped bounds; the gradient center is the tap
//! mapped back into path space, so the fill grows from under the finger at
//! any scale.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use crate::anim::{Animation, Tween};
use crate::consts::{PICKER_DURATION_MS, PICKER_GAP, PICKER_SCALE, PICKER_SELECTED_RADIUS};
use crate::geom::{Point, Rect, Size, Transform};
use crate::path::VectorPath;
use crate::surface::{Brush, Color, Paint, Surface};
use crate::svg::{PathParseError, parse_path};

/// Circle with an arrow pointing up and to the right.
pub const MALE_PATH: &str = "M16 15 C16 18.866 12.866 22 9 22 S2 18.866 2 15 S5.134 8 9 8 S16 11.134 16 15 Z \
     M13 9.5 L19 3.5 L15 3.5 V1.5 H22 V8.5 H20 V4.9 L14.4 10.9 Z";

/// Circle above a cross.
pub const FEMALE_PATH: &str = "M19 9 C19 12.866 15.866 16 12 16 S5 12.866 5 9 S8.134 2 12 2 S19 5.134 19 9 Z \
     M11 15 h2 v3 h3 v2 h-3 v3 h-2 v-3 h-3 v-2 h3 z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    path: VectorPath,
    bounds: Rect,
    gradient: Vec<Color>,
    transform: Transform,
    radius: Tween<f64>,
}

impl Symbol {
    fn new(path: VectorPath, gradient: Vec<Color>, selected: bool) -> Self {
        let bounds = path.bounds().unwrap_or_default();
        let initial = if selected { PICKER_SELECTED_RADIUS } else { 0.0 };
        Self {
            path,
            bounds,
            gradient,
            transform: Transform::default(),
            radius: Tween::new(initial, Animation::new(PICKER_DURATION_MS)),
        }
    }

    /// Path bounds in path space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Tap target on the surface.
    #[must_use]
    pub fn surface_rect(&self) -> Rect {
        self.transform.rect_to_surface(&self.bounds)
    }

    /// Place the path so its bounds' top-left lands on `top_left`.
    fn place(&mut self, top_left: Point, scale: f64) {
        let offset = top_left - self.bounds.origin() * scale;
        self.transform = Transform::new(offset, scale);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderPicker {
    male: Symbol,
    female: Symbol,
    selected: Gender,
    /// Surface point of the last accepted tap.
    tap: Option<Point>,
    scale: f64,
    gap: f64,
}

impl GenderPicker {
    /// Picker with the built-in symbols, female preselected.
    ///
    /// # Errors
    ///
    /// Propagates parse failures of the symbol data.
    pub fn new() -> Result<Self, PathParseError> {
        Self::from_path_data(MALE_PATH, FEMALE_PATH)
    }

    /// # Errors
    ///
    /// Returns [`PathParseError`] when either path fails to parse.
    pub fn from_path_data(male: &str, female: &str) -> Result<Self, PathParseError> {
        let male = Symbol::new(parse_path(male)?, vec![Color::from_argb(0xFF6D_6DFF), Color::BLUE], false);
        let female = Symbol::new(parse_path(female)?, vec![Color::from_argb(0xFFEA_76FF), Color::MAGENTA], true);
        Ok(Self { male, female, selected: Gender::Female, tap: None, scale: PICKER_SCALE, gap: PICKER_GAP })
    }

    /// Lay both symbols out around the center of a surface of `size`.
    pub fn set_size(&mut self, size: Size) {
        let center = size.center();
        let (scale, gap) = (self.scale, self.gap);
        let male = self.male.bounds;
        self.male.place(
            Point::new(center.x - male.width * scale - gap / 2.0, center.y - male.height * scale / 2.0),
            scale,
        );
        let female = self.female.bounds;
        self.female.place(Point::new(center.x + gap / 2.0, center.y - female.height * scale / 2.0), scale);
    }

    #[must_use]
    pub fn selected(&self) -> Gender {
        self.selected
    }

    #[must_use]
    pub fn symbol(&self, gender: Gender) -> &Symbol {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    fn symbol_mut(&mut self, gender: Gender) -> &mut Symbol {
        match gender {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
        }
    }

    /// Select the symbol under `p` if it is not already selected.
    pub fn on_tap(&mut self, p: Point, now_ms: f64) -> Option<Gender> {
        let hit = [Gender::Male, Gender::Female]
            .into_iter()
            .find(|g| *g != self.selected && self.symbol(*g).surface_rect().contains(p))?;
        self.tap = Some(p);
        self.symbol_mut(self.selected).radius.retarget(0.0, now_ms);
        self.symbol_mut(hit).radius.retarget(PICKER_SELECTED_RADIUS, now_ms);
        self.selected = hit;
        Some(hit)
    }

    /// Fill radius of `gender`, in path units.
    #[must_use]
    pub fn radius(&self, gender: Gender, now_ms: f64) -> f64 {
        self.symbol(gender).radius.value(now_ms)
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.male.radius.is_running(now_ms) || self.female.radius.is_running(now_ms)
    }

    /// Where the gradient of `gender` is centered, in path space.
    #[must_use]
    pub fn gradient_center(&self, gender: Gender) -> Point {
        let symbol = self.symbol(gender);
        match self.tap {
            Some(p) => symbol.transform.to_local(p),
            None => symbol.bounds.center(),
        }
    }
}

/// # Errors
///
/// Propagates surface failures.
pub fn draw<S: Surface>(surface: &mut S, picker: &GenderPicker, now_ms: f64) -> Result<(), S::Error> {
    for gender in [Gender::Male, Gender::Female] {
        let symbol = picker.symbol(gender);
        let t = symbol.transform;
        let outline = symbol.path.transformed(&t);
        surface.draw_path(&outline, &Paint::fill(Color::LIGHT_GRAY))?;

        let radius = picker.radius(gender, now_ms);
        if radius <= 0.0 {
            continue;
        }
        let center = t.to_surface(picker.gradient_center(gender));
        // A zero-radius gradient is invalid on some backends.
        let brush = Brush::RadialGradient { center, radius: (radius + 1.0) * t.scale, colors: symbol.gradient.clone() };
        surface.save();
        surface.clip_path(&outline)?;
        surface.draw_circle(center, radius * t.scale, &Paint::fill(Color::WHITE).with_brush(brush))?;
        surface.restore();
    }
    Ok(())
}
