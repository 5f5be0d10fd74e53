//! Animated arrow: an arrowhead travelling along a fixed path, trailing the
//! part of the path already covered.

#[cfg(test)]
#[path = "arrow_test.rs"]
mod arrow_test;

use crate::consts::{ARROW_STROKE_WIDTH, ARROWHEAD_BASE, ARROWHEAD_HEIGHT, ARROWHEAD_TIP_OFFSET};
use crate::geom::Point;
use crate::path::{PathMeasure, VectorPath};
use crate::surface::{Color, Paint, StrokeCap, Surface};

/// Geometry for one frame of the arrow animation.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFrame {
    /// Path covered so far, from the start to the head.
    pub sub_path: VectorPath,
    /// Where the arrow is.
    pub head: Point,
    /// Unit direction of travel at the head.
    pub tangent: Point,
    /// Direction of travel in degrees, 0 = +x.
    pub tangent_angle_deg: f64,
    /// Rotation applied to the upright arrowhead so it points along the tangent.
    pub heading_deg: f64,
    /// Arrowhead triangle (tip first), already rotated.
    pub arrowhead: [Point; 3],
}

/// Owns a path and its cached arc-length table.
#[derive(Debug, Clone)]
pub struct ArrowAnimator {
    path: VectorPath,
    measure: PathMeasure,
}

impl ArrowAnimator {
    #[must_use]
    pub fn new(path: VectorPath) -> Self {
        let measure = PathMeasure::new(&path);
        Self { path, measure }
    }

    /// The bezier course drawn by the gallery screen.
    #[must_use]
    pub fn demo_path() -> VectorPath {
        VectorPath::new()
            .move_to(100.0, 100.0)
            .quad_to(100.0, 400.0, 400.0, 400.0)
            .quad_to(900.0, 200.0, 900.0, 700.0)
            .line_to(100.0, 2000.0)
            .cubic_to(1700.0, 2000.0, 1000.0, 700.0, 200.0, 700.0)
    }

    #[must_use]
    pub fn path(&self) -> &VectorPath {
        &self.path
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.measure.length()
    }

    /// Geometry at `progress` in [0,1]; values outside are clamped.
    #[must_use]
    pub fn compute_frame(&self, progress: f64) -> ArrowFrame {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        let target = progress * self.measure.length();
        let sub_path = self.measure.segment(0.0, target);
        let (head, tangent) = self.measure.pos_tan(target);
        let heading_deg = heading_degrees(tangent);
        ArrowFrame {
            sub_path,
            head,
            tangent,
            tangent_angle_deg: tangent.y.atan2(tangent.x).to_degrees(),
            heading_deg,
            arrowhead: arrowhead(head, heading_deg),
        }
    }
}

impl Default for ArrowAnimator {
    fn default() -> Self {
        Self::new(Self::demo_path())
    }
}

/// Rotation for an arrowhead drawn pointing up (-y) so it follows `tangent`.
#[must_use]
pub fn heading_degrees(tangent: Point) -> f64 {
    (-tangent.x.atan2(tangent.y)).to_degrees() - 180.0
}

fn arrowhead(head: Point, heading_deg: f64) -> [Point; 3] {
    let half = ARROWHEAD_BASE / 2.0;
    let base_y = head.y - ARROWHEAD_TIP_OFFSET + ARROWHEAD_HEIGHT;
    [
        Point::new(head.x, head.y - ARROWHEAD_TIP_OFFSET),
        Point::new(head.x - half, base_y),
        Point::new(head.x + half, base_y),
    ]
    .map(|p| p.rotate_around(head, heading_deg))
}

/// Draw the covered path and the arrowhead.
///
/// # Errors
///
/// Propagates surface failures.
pub fn draw<S: Surface>(surface: &mut S, frame: &ArrowFrame) -> Result<(), S::Error> {
    let trail = Paint::stroke(Color::RED, ARROW_STROKE_WIDTH).with_cap(StrokeCap::Round);
    surface.draw_path(&frame.sub_path, &trail)?;
    surface.draw_path(&VectorPath::polygon(&frame.arrowhead), &Paint::fill(Color::RED))
}
