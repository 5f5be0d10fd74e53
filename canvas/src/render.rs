//! Rendering: the [`Surface`] implementation backed by a browser 2D context.
//!
//! This module is the only place that draws through
//! [`web_sys::CanvasRenderingContext2d`]; the engine only obtains it. Screens
//! draw through the [`Surface`] trait and never see the context, so the same
//! drawing code records into a [`crate::surface::DisplayList`] in tests.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, Path2d};

use crate::geom::{Point, Rect, Size};
use crate::path::{Segment, VectorPath};
use crate::surface::{Brush, Color, Paint, PaintStyle, StrokeCap, Surface, TextStyle};

pub struct WebSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    size: Size,
}

impl<'a> WebSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, size: Size) -> Self {
        Self { ctx, size }
    }

    fn apply_paint(&self, paint: &Paint) -> Result<(), JsValue> {
        self.ctx.set_global_alpha(paint.alpha);
        match &paint.brush {
            Brush::Solid(color) => match paint.style {
                PaintStyle::Fill => self.ctx.set_fill_style_str(&color.to_css()),
                PaintStyle::Stroke { .. } => self.ctx.set_stroke_style_str(&color.to_css()),
            },
            Brush::RadialGradient { center, radius, colors } => {
                let gradient = radial_gradient(self.ctx, *center, *radius, colors)?;
                match paint.style {
                    PaintStyle::Fill => self.ctx.set_fill_style_canvas_gradient(&gradient),
                    PaintStyle::Stroke { .. } => self.ctx.set_stroke_style_canvas_gradient(&gradient),
                }
            }
        }
        if let PaintStyle::Stroke { width, cap } = paint.style {
            self.ctx.set_line_width(width);
            self.ctx.set_line_cap(cap.as_css());
        }
        Ok(())
    }

    fn paint_path(&self, path: &Path2d, paint: &Paint) -> Result<(), JsValue> {
        self.ctx.save();
        let applied = self.apply_paint(paint);
        if applied.is_ok() {
            match paint.style {
                PaintStyle::Fill => self.ctx.fill_with_path_2d(path),
                PaintStyle::Stroke { .. } => self.ctx.stroke_with_path(path),
            }
        }
        self.ctx.restore();
        applied
    }
}

fn to_path2d(path: &VectorPath) -> Result<Path2d, JsValue> {
    let out = Path2d::new()?;
    for segment in path.segments() {
        match *segment {
            Segment::MoveTo(p) => out.move_to(p.x, p.y),
            Segment::LineTo(p) => out.line_to(p.x, p.y),
            Segment::QuadTo { ctrl, to } => out.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y),
            Segment::CubicTo { ctrl1, ctrl2, to } => {
                out.bezier_curve_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y);
            }
            Segment::Close => out.close_path(),
        }
    }
    Ok(out)
}

/// Stops spread evenly from the center (first color) to the rim (last).
fn radial_gradient(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    colors: &[Color],
) -> Result<CanvasGradient, JsValue> {
    let gradient = ctx.create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius.max(f64::EPSILON))?;
    let last = colors.len().saturating_sub(1).max(1) as f32;
    for (i, color) in colors.iter().enumerate() {
        gradient.add_color_stop(i as f32 / last, &color.to_css())?;
    }
    Ok(gradient)
}

fn font(style: &TextStyle) -> String {
    let weight = if style.bold { "bold " } else { "" };
    format!("{weight}{:.0}px sans-serif", style.size)
}

impl Surface for WebSurface<'_> {
    type Error = JsValue;

    fn size(&self) -> Size {
        self.size
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        self.ctx.translate(dx, dy)
    }

    fn rotate(&mut self, degrees: f64, pivot: Point) -> Result<(), JsValue> {
        self.ctx.translate(pivot.x, pivot.y)?;
        self.ctx.rotate(degrees.to_radians())?;
        self.ctx.translate(-pivot.x, -pivot.y)
    }

    fn scale(&mut self, factor: f64, pivot: Point) -> Result<(), JsValue> {
        self.ctx.translate(pivot.x, pivot.y)?;
        self.ctx.scale(factor, factor)?;
        self.ctx.translate(-pivot.x, -pivot.y)
    }

    fn clip_path(&mut self, path: &VectorPath) -> Result<(), JsValue> {
        self.ctx.clip_with_path_2d(&to_path2d(path)?);
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) -> Result<(), JsValue> {
        let path = Path2d::new()?;
        path.move_to(from.x, from.y);
        path.line_to(to.x, to.y);
        // Lines are always stroked, whatever the paint says.
        let style = match paint.style {
            stroke @ PaintStyle::Stroke { .. } => stroke,
            PaintStyle::Fill => PaintStyle::Stroke { width: 1.0, cap: StrokeCap::Butt },
        };
        let stroke = Paint { style, ..paint.clone() };
        self.paint_path(&path, &stroke)
    }

    fn draw_path(&mut self, path: &VectorPath, paint: &Paint) -> Result<(), JsValue> {
        self.paint_path(&to_path2d(path)?, paint)
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint) -> Result<(), JsValue> {
        let path = Path2d::new()?;
        path.arc(center.x, center.y, radius.max(0.0), 0.0, 2.0 * PI)?;
        self.paint_path(&path, paint)
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) -> Result<(), JsValue> {
        let path = Path2d::new()?;
        path.rect(rect.x, rect.y, rect.width, rect.height);
        self.paint_path(&path, paint)
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) -> Result<(), JsValue> {
        self.ctx.save();
        self.ctx.set_font(&font(style));
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.set_text_baseline("alphabetic");
        self.ctx.set_fill_style_str(&style.color.to_css());
        let drawn = self.ctx.fill_text(text, at.x, at.y);
        self.ctx.restore();
        drawn
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Result<Size, JsValue> {
        self.ctx.save();
        self.ctx.set_font(&font(style));
        let metrics = self.ctx.measure_text(text);
        self.ctx.restore();
        let metrics = metrics?;
        Ok(Size::new(metrics.width(), metrics.actual_bounding_box_ascent()))
    }
}
