//! Grid overlay for lining up drawings: major and minor lines on every whole
//! unit that is a multiple of their step, with numbered major lines.
//!
//! A unit that is a multiple of both steps is drawn once, as a major line.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::geom::{Point, Rect, Size};
use crate::surface::{Color, Paint, Surface, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub stroke: f64,
    pub color: Color,
    /// Distance between lines. Zero disables this class.
    pub step: u32,
    pub display_numbers: bool,
}

impl LineStyle {
    #[must_use]
    pub fn major() -> Self {
        Self { stroke: 5.0, color: Color::BLACK, step: 100, display_numbers: true }
    }

    #[must_use]
    pub fn minor() -> Self {
        Self { stroke: 2.0, color: Color::GRAY, step: 50, display_numbers: false }
    }

    fn hits(&self, i: u32) -> bool {
        self.step != 0 && i % self.step == 0
    }
}

/// Axis numbers drawn on a background box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumbersStyle {
    pub color: Color,
    pub background: Color,
    pub text_size: f64,
    /// Distance of the numbers from the axis they label.
    pub offset: f64,
    pub padding: f64,
}

impl Default for NumbersStyle {
    fn default() -> Self {
        Self { color: Color::BLACK, background: Color::WHITE, text_size: 10.0, offset: 15.0, padding: 5.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub major_x: LineStyle,
    pub major_y: LineStyle,
    pub minor_x: LineStyle,
    pub minor_y: LineStyle,
    pub x_numbers: NumbersStyle,
    pub y_numbers: NumbersStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            major_x: LineStyle::major(),
            major_y: LineStyle::major(),
            minor_x: LineStyle::minor(),
            minor_y: LineStyle::minor(),
            x_numbers: NumbersStyle::default(),
            y_numbers: NumbersStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Major,
    Minor,
}

/// Which way a line runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Constant x, spans the height.
    Vertical,
    /// Constant y, spans the width.
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    pub class: LineClass,
    /// Coordinate along the crossing axis.
    pub at: u32,
    pub from: Point,
    pub to: Point,
    pub stroke: f64,
    pub color: Color,
    pub labelled: bool,
}

fn classify(i: u32, major: &LineStyle, minor: &LineStyle) -> Option<(LineClass, LineStyle)> {
    if major.hits(i) {
        Some((LineClass::Major, *major))
    } else if minor.hits(i) {
        Some((LineClass::Minor, *minor))
    } else {
        None
    }
}

/// Every grid line for a surface of `size`: vertical lines first, left to
/// right, then horizontal lines top to bottom.
#[must_use]
pub fn grid_lines(size: Size, style: &GridStyle) -> Vec<GridLine> {
    let width = size.width.max(0.0);
    let height = size.height.max(0.0);

    let vertical = (0..=width as u32).filter_map(|i| {
        let (class, line) = classify(i, &style.major_x, &style.minor_x)?;
        let x = f64::from(i);
        Some(GridLine {
            orientation: Orientation::Vertical,
            class,
            at: i,
            from: Point::new(x, 0.0),
            to: Point::new(x, height),
            stroke: line.stroke,
            color: line.color,
            labelled: line.display_numbers,
        })
    });
    let horizontal = (0..=height as u32).filter_map(|i| {
        let (class, line) = classify(i, &style.major_y, &style.minor_y)?;
        let y = f64::from(i);
        Some(GridLine {
            orientation: Orientation::Horizontal,
            class,
            at: i,
            from: Point::new(0.0, y),
            to: Point::new(width, y),
            stroke: line.stroke,
            color: line.color,
            labelled: line.display_numbers,
        })
    });
    vertical.chain(horizontal).collect()
}

/// Background box and text baseline anchor for a line's number whose
/// rendered extent is `text`.
#[must_use]
pub fn label_placement(line: &GridLine, text: Size, numbers: &NumbersStyle) -> (Rect, Point) {
    let pad = numbers.padding;
    let at = f64::from(line.at);
    let (box_x, box_y, anchor) = match line.orientation {
        Orientation::Vertical => {
            (at - text.width / 2.0, numbers.offset - text.height, Point::new(at, numbers.offset))
        }
        Orientation::Horizontal => (
            numbers.offset - text.width / 2.0,
            at - text.height / 2.0,
            Point::new(numbers.offset, at + pad / 2.0),
        ),
    };
    let background = Rect::new(box_x - pad / 2.0, box_y - pad / 2.0, text.width + pad, text.height + pad);
    (background, anchor)
}

/// # Errors
///
/// Propagates surface failures.
pub fn draw<S: Surface>(surface: &mut S, style: &GridStyle) -> Result<(), S::Error> {
    for line in grid_lines(surface.size(), style) {
        surface.draw_line(line.from, line.to, &Paint::stroke(line.color, line.stroke))?;
        if !line.labelled {
            continue;
        }
        let numbers = match line.orientation {
            Orientation::Vertical => &style.x_numbers,
            Orientation::Horizontal => &style.y_numbers,
        };
        let text = line.at.to_string();
        let text_style = TextStyle::new(numbers.text_size, numbers.color).bold();
        let extent = surface.measure_text(&text, &text_style)?;
        let (background, anchor) = label_placement(&line, extent, numbers);
        surface.draw_rect(background, &Paint::fill(numbers.background))?;
        surface.draw_text(&text, anchor, &text_style)?;
    }
    Ok(())
}
