//! Vector paths and arc-length measurement.
//!
//! A [`VectorPath`] is an immutable list of drawing segments. [`PathMeasure`]
//! flattens the first non-empty contour into a polyline and keeps the
//! cumulative distance at every vertex, which is what lets an animation move
//! at constant speed along curves instead of constant parameter speed.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CIRCLE_KAPPA, FLATTEN_STEPS};
use crate::geom::{Point, Rect, Transform};

/// One drawing instruction of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

/// An ordered sequence of segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorPath {
    segments: Vec<Segment>,
}

impl VectorPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.segments.push(Segment::MoveTo(Point::new(x, y)));
        self
    }

    #[must_use]
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.segments.push(Segment::LineTo(Point::new(x, y)));
        self
    }

    #[must_use]
    pub fn quad_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.segments.push(Segment::QuadTo { ctrl: Point::new(cx, cy), to: Point::new(x, y) });
        self
    }

    #[must_use]
    pub fn cubic_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.segments.push(Segment::CubicTo {
            ctrl1: Point::new(c1x, c1y),
            ctrl2: Point::new(c2x, c2y),
            to: Point::new(x, y),
        });
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.segments.push(Segment::Close);
        self
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Closed polygon through `points`.
    #[must_use]
    pub fn polygon(points: &[Point]) -> Self {
        let mut path = Self::new();
        for (i, p) in points.iter().enumerate() {
            path.push(if i == 0 { Segment::MoveTo(*p) } else { Segment::LineTo(*p) });
        }
        if !points.is_empty() {
            path.push(Segment::Close);
        }
        path
    }

    /// Full circle as four cubic arcs, starting at angle 0 and running
    /// clockwise on screen.
    #[must_use]
    pub fn circle(center: Point, radius: f64) -> Self {
        let k = radius * CIRCLE_KAPPA;
        let (cx, cy, r) = (center.x, center.y, radius);
        Self::new()
            .move_to(cx + r, cy)
            .cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r)
            .cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy)
            .cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r)
            .cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy)
            .close()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first point the path visits, if any.
    #[must_use]
    pub fn first_point(&self) -> Option<Point> {
        self.segments.iter().find_map(|s| match s {
            Segment::MoveTo(p) | Segment::LineTo(p) => Some(*p),
            Segment::QuadTo { to, .. } | Segment::CubicTo { to, .. } => Some(*to),
            Segment::Close => None,
        })
    }

    /// Tight bounds of the flattened outline.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.flatten().into_iter().flatten();
        let first = points.next()?;
        let (mut min, mut max) = (first, first);
        for p in points {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    /// The same path with every point mapped through `transform`.
    #[must_use]
    pub fn transformed(&self, transform: &Transform) -> Self {
        let map = |p: Point| transform.to_surface(p);
        let segments = self
            .segments
            .iter()
            .map(|s| match *s {
                Segment::MoveTo(p) => Segment::MoveTo(map(p)),
                Segment::LineTo(p) => Segment::LineTo(map(p)),
                Segment::QuadTo { ctrl, to } => Segment::QuadTo { ctrl: map(ctrl), to: map(to) },
                Segment::CubicTo { ctrl1, ctrl2, to } => {
                    Segment::CubicTo { ctrl1: map(ctrl1), ctrl2: map(ctrl2), to: map(to) }
                }
                Segment::Close => Segment::Close,
            })
            .collect();
        Self { segments }
    }

    /// Flatten every contour into a polyline. Consecutive duplicate points
    /// are dropped so no polyline edge has zero length.
    #[must_use]
    pub fn flatten(&self) -> Vec<Vec<Point>> {
        let mut contours: Vec<Vec<Point>> = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut start = Point::ZERO;
        let mut pen = Point::ZERO;

        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(p) => {
                    if !current.is_empty() {
                        contours.push(std::mem::take(&mut current));
                    }
                    start = p;
                    pen = p;
                    current.push(p);
                }
                Segment::LineTo(p) => {
                    begin_if_empty(&mut current, pen);
                    push_distinct(&mut current, p);
                    pen = p;
                }
                Segment::QuadTo { ctrl, to } => {
                    begin_if_empty(&mut current, pen);
                    for step in 1..=FLATTEN_STEPS {
                        let t = f64::from(step) / f64::from(FLATTEN_STEPS);
                        push_distinct(&mut current, quad_point(pen, ctrl, to, t));
                    }
                    pen = to;
                }
                Segment::CubicTo { ctrl1, ctrl2, to } => {
                    begin_if_empty(&mut current, pen);
                    for step in 1..=FLATTEN_STEPS {
                        let t = f64::from(step) / f64::from(FLATTEN_STEPS);
                        push_distinct(&mut current, cubic_point(pen, ctrl1, ctrl2, to, t));
                    }
                    pen = to;
                }
                Segment::Close => {
                    if !current.is_empty() {
                        push_distinct(&mut current, start);
                        contours.push(std::mem::take(&mut current));
                    }
                    pen = start;
                }
            }
        }
        if !current.is_empty() {
            contours.push(current);
        }
        contours
    }
}

fn begin_if_empty(contour: &mut Vec<Point>, pen: Point) {
    if contour.is_empty() {
        contour.push(pen);
    }
}

fn push_distinct(contour: &mut Vec<Point>, p: Point) {
    if contour.last() != Some(&p) {
        contour.push(p);
    }
}

fn quad_point(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + p1 * (3.0 * mt * mt * t) + p2 * (3.0 * mt * t * t) + p3 * (t * t * t)
}

/// Arc-length table over the first contour of a path that has any length.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMeasure {
    points: Vec<Point>,
    cumulative: Vec<f64>,
}

impl PathMeasure {
    #[must_use]
    pub fn new(path: &VectorPath) -> Self {
        let contours = path.flatten();
        let points = contours
            .iter()
            .find(|c| c.len() >= 2)
            .or_else(|| contours.first())
            .cloned()
            .unwrap_or_default();

        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                total += points[i - 1].distance(*p);
            }
            cumulative.push(total);
        }
        Self { points, cumulative }
    }

    /// Total arc length of the measured contour.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Start point of the measured contour (origin for an empty path).
    #[must_use]
    pub fn start(&self) -> Point {
        self.points.first().copied().unwrap_or(Point::ZERO)
    }

    /// Position and unit tangent at `distance`, clamped to `[0, length]`.
    ///
    /// A zero-length contour reports its single point and a +x tangent.
    #[must_use]
    pub fn pos_tan(&self, distance: f64) -> (Point, Point) {
        let total = self.length();
        if self.points.len() < 2 || total <= 0.0 {
            return (self.start(), Point::new(1.0, 0.0));
        }
        let d = distance.clamp(0.0, total);
        let i = self.edge_index(d);
        let (a, b) = (self.points[i - 1], self.points[i]);
        let span = self.cumulative[i] - self.cumulative[i - 1];
        let t = (d - self.cumulative[i - 1]) / span;
        let dir = b - a;
        (a.lerp(b, t), dir / dir.length())
    }

    /// Polyline from `start_d` to `end_d`, beginning with a move to the start.
    ///
    /// An empty range yields a lone move to the start position.
    #[must_use]
    pub fn segment(&self, start_d: f64, end_d: f64) -> VectorPath {
        let total = self.length();
        let start_d = start_d.clamp(0.0, total);
        let end_d = end_d.clamp(0.0, total);
        let (start_pt, _) = self.pos_tan(start_d);
        let mut out = VectorPath::new();
        out.push(Segment::MoveTo(start_pt));
        if end_d <= start_d || self.points.len() < 2 {
            return out;
        }
        for (p, c) in self.points.iter().zip(&self.cumulative) {
            if *c > start_d && *c < end_d {
                out.push(Segment::LineTo(*p));
            }
        }
        let (end_pt, _) = self.pos_tan(end_d);
        out.push(Segment::LineTo(end_pt));
        out
    }

    /// Index of the polyline vertex that ends the edge containing `d`.
    fn edge_index(&self, d: f64) -> usize {
        self.cumulative.partition_point(|&c| c < d).clamp(1, self.points.len() - 1)
    }
}
