//! SVG path-data (`d` attribute) parsing into [`VectorPath`].
//!
//! Tokenizing is left to `svgtypes`; this module resolves relative
//! coordinates, horizontal/vertical lines and smooth curves into the absolute
//! segments the rest of the crate works with. Arcs are not supported.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use svgtypes::{PathParser, PathSegment};

use crate::geom::Point;
use crate::path::{Segment, VectorPath};

#[derive(Debug, thiserror::Error)]
pub enum PathParseError {
    #[error("malformed path data: {0}")]
    Syntax(#[from] svgtypes::Error),
    #[error("unsupported path command '{0}'")]
    Unsupported(char),
    #[error("path data must start with a move command")]
    MissingMoveTo,
}

/// Last control point, for reflecting into a following smooth curve.
#[derive(Clone, Copy)]
enum LastControl {
    None,
    Cubic(Point),
    Quad(Point),
}

struct Cursor {
    current: Point,
    subpath_start: Point,
    last: LastControl,
}

impl Cursor {
    fn resolve(&self, abs: bool, x: f64, y: f64) -> Point {
        if abs { Point::new(x, y) } else { Point::new(self.current.x + x, self.current.y + y) }
    }

    fn reflected(&self, ctrl: Option<Point>) -> Point {
        ctrl.map_or(self.current, |c| self.current * 2.0 - c)
    }
}

/// Parse SVG path data into an absolute-coordinate path.
///
/// # Errors
///
/// Returns [`PathParseError`] for malformed data, arcs, or data that does not
/// begin with a move.
pub fn parse_path(data: &str) -> Result<VectorPath, PathParseError> {
    let mut path = VectorPath::new();
    let mut cursor = Cursor { current: Point::ZERO, subpath_start: Point::ZERO, last: LastControl::None };

    for segment in PathParser::from(data) {
        let segment = segment?;
        if path.is_empty() && !matches!(segment, PathSegment::MoveTo { .. }) {
            return Err(PathParseError::MissingMoveTo);
        }
        let mut last = LastControl::None;
        match segment {
            PathSegment::MoveTo { abs, x, y } => {
                let to = cursor.resolve(abs, x, y);
                path.push(Segment::MoveTo(to));
                cursor.subpath_start = to;
                cursor.current = to;
            }
            PathSegment::LineTo { abs, x, y } => {
                cursor.current = cursor.resolve(abs, x, y);
                path.push(Segment::LineTo(cursor.current));
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                cursor.current.x = if abs { x } else { cursor.current.x + x };
                path.push(Segment::LineTo(cursor.current));
            }
            PathSegment::VerticalLineTo { abs, y } => {
                cursor.current.y = if abs { y } else { cursor.current.y + y };
                path.push(Segment::LineTo(cursor.current));
            }
            PathSegment::CurveTo { abs, x1, y1, x2, y2, x, y } => {
                let ctrl1 = cursor.resolve(abs, x1, y1);
                let ctrl2 = cursor.resolve(abs, x2, y2);
                cursor.current = cursor.resolve(abs, x, y);
                path.push(Segment::CubicTo { ctrl1, ctrl2, to: cursor.current });
                last = LastControl::Cubic(ctrl2);
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let prev = match cursor.last {
                    LastControl::Cubic(c) => Some(c),
                    _ => None,
                };
                let ctrl1 = cursor.reflected(prev);
                let ctrl2 = cursor.resolve(abs, x2, y2);
                cursor.current = cursor.resolve(abs, x, y);
                path.push(Segment::CubicTo { ctrl1, ctrl2, to: cursor.current });
                last = LastControl::Cubic(ctrl2);
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let ctrl = cursor.resolve(abs, x1, y1);
                cursor.current = cursor.resolve(abs, x, y);
                path.push(Segment::QuadTo { ctrl, to: cursor.current });
                last = LastControl::Quad(ctrl);
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let prev = match cursor.last {
                    LastControl::Quad(c) => Some(c),
                    _ => None,
                };
                let ctrl = cursor.reflected(prev);
                cursor.current = cursor.resolve(abs, x, y);
                path.push(Segment::QuadTo { ctrl, to: cursor.current });
                last = LastControl::Quad(ctrl);
            }
            PathSegment::EllipticalArc { abs, .. } => {
                return Err(PathParseError::Unsupported(if abs { 'A' } else { 'a' }));
            }
            PathSegment::ClosePath { .. } => {
                path.push(Segment::Close);
                cursor.current = cursor.subpath_start;
            }
        }
        cursor.last = last;
    }
    Ok(path)
}
