//! The render-surface boundary.
//!
//! Screens never talk to a concrete canvas. They draw through [`Surface`],
//! which the browser adapter ([`crate::render::WebSurface`]) and the
//! recording [`DisplayList`] both implement. Fallibility is the surface's
//! business: each implementation picks its own error type.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::consts::GLYPH_ADVANCE_RATIO;
use crate::geom::{Point, Rect, Size};
use crate::path::VectorPath;

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(0x88, 0x88, 0x88);
    pub const LIGHT_GRAY: Self = Self::rgb(0xCC, 0xCC, 0xCC);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `0xAARRGGBB`.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self { a: (argb >> 24) as u8, r: (argb >> 16) as u8, g: (argb >> 8) as u8, b: argb as u8 }
    }

    /// The same color with its alpha multiplied by `alpha` in [0,1].
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (f64::from(self.a) * alpha.clamp(0.0, 1.0)).round();
        Self { a: a as u8, ..self }
    }

    /// CSS `rgba(...)` string.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, f64::from(self.a) / 255.0)
    }
}

/// Line end shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// What fills a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Brush {
    Solid(Color),
    /// Colors spread evenly from `center` (first stop) to `radius` (last stop).
    RadialGradient { center: Point, radius: f64, colors: Vec<Color> },
}

/// Fill or stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaintStyle {
    Fill,
    Stroke { width: f64, cap: StrokeCap },
}

/// How to paint a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub brush: Brush,
    pub style: PaintStyle,
    /// Extra opacity multiplied over the brush, in [0,1].
    pub alpha: f64,
}

impl Paint {
    #[must_use]
    pub fn fill(color: Color) -> Self {
        Self { brush: Brush::Solid(color), style: PaintStyle::Fill, alpha: 1.0 }
    }

    #[must_use]
    pub fn stroke(color: Color, width: f64) -> Self {
        Self { brush: Brush::Solid(color), style: PaintStyle::Stroke { width, cap: StrokeCap::Butt }, alpha: 1.0 }
    }

    #[must_use]
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        if let PaintStyle::Stroke { width, .. } = self.style {
            self.style = PaintStyle::Stroke { width, cap };
        }
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_brush(mut self, brush: Brush) -> Self {
        self.brush = brush;
        self
    }
}

/// Horizontal text anchor relative to the draw point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Font size, color and anchor. The draw point is on the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f64,
    pub color: Color,
    pub align: TextAlign,
    pub bold: bool,
}

impl TextStyle {
    #[must_use]
    pub fn new(size: f64, color: Color) -> Self {
        Self { size, color, align: TextAlign::Center, bold: false }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// A 2D drawing target of known pixel size.
///
/// Transform and clip calls apply to everything drawn until the matching
/// [`Surface::restore`].
pub trait Surface {
    type Error;

    fn size(&self) -> Size;

    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), Self::Error>;
    /// Rotate by `degrees` (clockwise on screen) around `pivot`.
    fn rotate(&mut self, degrees: f64, pivot: Point) -> Result<(), Self::Error>;
    /// Uniform scale around `pivot`.
    fn scale(&mut self, factor: f64, pivot: Point) -> Result<(), Self::Error>;
    fn clip_path(&mut self, path: &VectorPath) -> Result<(), Self::Error>;

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) -> Result<(), Self::Error>;
    fn draw_path(&mut self, path: &VectorPath, paint: &Paint) -> Result<(), Self::Error>;
    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint) -> Result<(), Self::Error>;
    fn draw_rect(&mut self, rect: Rect, paint: &Paint) -> Result<(), Self::Error>;
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) -> Result<(), Self::Error>;

    /// Rendered width and cap height of `text`.
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Result<Size, Self::Error>;
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Rotate { degrees: f64, pivot: Point },
    Scale { factor: f64, pivot: Point },
    Clip { path: VectorPath },
    Line { from: Point, to: Point, paint: Paint },
    Path { path: VectorPath, paint: Paint },
    Circle { center: Point, radius: f64, paint: Paint },
    Rect { rect: Rect, paint: Paint },
    Text { text: String, at: Point, style: TextStyle },
}

/// A surface that records commands instead of rasterizing them.
///
/// Text is measured with a fixed average glyph advance, which is what the
/// headless host and tests need: stable, platform-independent layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self { size, commands: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Texts drawn, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded commands for which `pred` holds.
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    fn record(&mut self, command: DrawCommand) -> Result<(), Infallible> {
        self.commands.push(command);
        Ok(())
    }
}

impl Surface for DisplayList {
    type Error = Infallible;

    fn size(&self) -> Size {
        self.size
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), Infallible> {
        self.record(DrawCommand::Translate { dx, dy })
    }

    fn rotate(&mut self, degrees: f64, pivot: Point) -> Result<(), Infallible> {
        self.record(DrawCommand::Rotate { degrees, pivot })
    }

    fn scale(&mut self, factor: f64, pivot: Point) -> Result<(), Infallible> {
        self.record(DrawCommand::Scale { factor, pivot })
    }

    fn clip_path(&mut self, path: &VectorPath) -> Result<(), Infallible> {
        self.record(DrawCommand::Clip { path: path.clone() })
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) -> Result<(), Infallible> {
        self.record(DrawCommand::Line { from, to, paint: paint.clone() })
    }

    fn draw_path(&mut self, path: &VectorPath, paint: &Paint) -> Result<(), Infallible> {
        self.record(DrawCommand::Path { path: path.clone(), paint: paint.clone() })
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint) -> Result<(), Infallible> {
        self.record(DrawCommand::Circle { center, radius, paint: paint.clone() })
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) -> Result<(), Infallible> {
        self.record(DrawCommand::Rect { rect, paint: paint.clone() })
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) -> Result<(), Infallible> {
        self.record(DrawCommand::Text { text: text.to_owned(), at, style: *style })
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Result<Size, Infallible> {
        let glyphs = text.chars().count() as f64;
        Ok(Size::new(glyphs * style.size * GLYPH_ADVANCE_RATIO, style.size * 0.7))
    }
}
