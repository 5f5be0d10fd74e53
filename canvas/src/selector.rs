//! Segmented selector: a strip of equally wide labelled cells with a ring that
//! sweeps open around the chosen cell and closed around the one it replaced.
//!
//! Coordinates are local to the strip; `(0, 0)` is its top-left corner.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use crate::anim::Animation;
use crate::consts::{SELECTOR_DURATION_MS, SELECTOR_SPACING, SELECTOR_STROKE_WIDTH, SELECTOR_TEXT_SIZE};
use crate::geom::{Point, Rect, Size};
use crate::path::{PathMeasure, VectorPath};
use crate::surface::{Color, Paint, StrokeCap, Surface, TextStyle};

/// Cell rects for `count` items across a strip of `size`, `spacing` apart.
///
/// Empty when there are no items or the cells would have no width.
#[must_use]
pub fn layout(count: usize, size: Size, spacing: f64) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    let cell_width = (size.width - spacing * (n - 1.0)) / n;
    if cell_width <= 0.0 {
        return Vec::new();
    }
    (0..count).map(|i| Rect::new(i as f64 * (cell_width + spacing), 0.0, cell_width, size.height)).collect()
}

/// How a cell's ring looks at a given moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ring {
    None,
    /// Newly selected: the ring has swept `progress` of its circumference.
    Opening(f64),
    /// Previously selected: `1 − progress` of the ring is left.
    Closing(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedSelector {
    labels: Vec<String>,
    spacing: f64,
    size: Size,
    rects: Vec<Rect>,
    selected: Option<usize>,
    previous: Option<usize>,
    animation: Animation,
}

impl SegmentedSelector {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            spacing: SELECTOR_SPACING,
            size: Size::default(),
            rects: Vec::new(),
            selected: None,
            previous: None,
            animation: Animation::new(SELECTOR_DURATION_MS),
        }
    }

    /// The grade ladder shown in the gallery.
    #[must_use]
    pub fn academic_grades() -> Self {
        Self::new(["A", "A-", "B+", "B", "C+", "C", "D", "F"].into_iter().map(String::from).collect())
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self.rects = layout(self.labels.len(), self.size, spacing);
        self
    }

    /// Re-layout for a new strip size. A no-op when the size is unchanged.
    pub fn set_size(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.rects = layout(self.labels.len(), size, self.spacing);
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Index of the first cell containing `p`. Gaps resolve to `None`.
    #[must_use]
    pub fn resolve_tap(&self, p: Point) -> Option<usize> {
        self.rects.iter().position(|r| r.contains(p))
    }

    /// Select `index`, remembering the old selection and restarting the sweep.
    ///
    /// Returns `false` (and changes nothing) when `index` is already selected
    /// or out of range.
    pub fn select(&mut self, index: usize, now_ms: f64) -> bool {
        if index >= self.labels.len() || self.selected == Some(index) {
            return false;
        }
        self.previous = self.selected;
        self.selected = Some(index);
        self.animation.restart(now_ms);
        true
    }

    /// Resolve and select in one step.
    pub fn on_tap(&mut self, p: Point, now_ms: f64) -> bool {
        self.resolve_tap(p).is_some_and(|i| self.select(i, now_ms))
    }

    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        self.animation.progress(now_ms)
    }

    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.animation.is_running(now_ms)
    }

    #[must_use]
    pub fn ring(&self, index: usize, now_ms: f64) -> Ring {
        let progress = self.progress(now_ms);
        if self.selected == Some(index) {
            Ring::Opening(progress)
        } else if self.previous == Some(index) && progress < 1.0 {
            Ring::Closing(progress)
        } else {
            Ring::None
        }
    }
}

/// # Errors
///
/// Propagates surface failures.
pub fn draw<S: Surface>(surface: &mut S, selector: &SegmentedSelector, now_ms: f64) -> Result<(), S::Error> {
    let text = TextStyle::new(SELECTOR_TEXT_SIZE, Color::BLACK);
    let stroke = Paint::stroke(Color::BLUE, SELECTOR_STROKE_WIDTH).with_cap(StrokeCap::Round);

    for (i, (rect, label)) in selector.rects.iter().zip(&selector.labels).enumerate() {
        let center = rect.center();
        let metrics = surface.measure_text(label, &text)?;
        surface.draw_text(label, Point::new(center.x, center.y + metrics.height / 2.0), &text)?;

        let radius = rect.width / 2.0;
        let ring = selector.ring(i, now_ms);
        let portion = match ring {
            Ring::None => continue,
            Ring::Opening(p) => p,
            Ring::Closing(p) => 1.0 - p,
        };
        let measure = PathMeasure::new(&VectorPath::circle(center, radius));
        surface.draw_path(&measure.segment(0.0, measure.length() * portion), &stroke)?;

        if let Ring::Opening(p) = ring {
            surface.draw_circle(center, radius * p, &Paint::fill(Color::BLUE).with_alpha(1.0 - p))?;
        }
    }
    Ok(())
}
