//! Core types shared across the `PenLine` system.
//!
//! These types describe what ends up on a canvas: colors, the primitive
//! shapes a pen can paint, and the stroked or filled objects built from
//! them.

use kurbo::Shape as _;

pub use kurbo::{Ellipse, Line, Point, Rect};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Canvas coordinates are stored as `f64` to match `kurbo`; command
/// arguments are integers and convert losslessly.
pub type Scalar = f64;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: Scalar,
    pub g: Scalar,
    pub b: Scalar,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 0.5, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: Scalar, g: Scalar, b: Scalar) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// A primitive shape that can be stroked or filled.
///
/// Rectangles and ellipses are always stored normalized (`x0 <= x1`,
/// `y0 <= y1`), so a negative width or height extends to the left or up.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A straight segment. Filling a line paints nothing.
    Line(Line),
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// An axis-aligned ellipse.
    Ellipse(Ellipse),
    /// A closed polygon through the given vertices.
    Polygon(Vec<Point>),
}

impl Shape {
    /// An ellipse inscribed in the given box.
    pub fn ellipse_in(rect: Rect) -> Self {
        Self::Ellipse(Ellipse::from_rect(rect.abs()))
    }

    /// The axis-aligned bounding box of the shape.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Line(line) => line.bounding_box(),
            Self::Rect(rect) => rect.abs(),
            Self::Ellipse(ellipse) => ellipse.bounding_box(),
            Self::Polygon(points) => polygon_bbox(points),
        }
    }

    /// Whether this shape encloses an area that a fill can paint.
    pub const fn is_closed(&self) -> bool {
        !matches!(self, Self::Line(_))
    }
}

fn polygon_bbox(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |bb, p| {
            bb.union_pt(*p)
        })
}

// ---------------------------------------------------------------------------
// GraphicsObject
// ---------------------------------------------------------------------------

/// A single painted object on a canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsObject {
    /// A solid interior.
    Fill(FillObject),
    /// An outline.
    Stroke(StrokeObject),
}

impl GraphicsObject {
    /// The shape this object paints.
    pub const fn shape(&self) -> &Shape {
        match self {
            Self::Fill(fill) => &fill.shape,
            Self::Stroke(stroke) => &stroke.shape,
        }
    }

    /// The color this object paints with.
    pub const fn color(&self) -> Color {
        match self {
            Self::Fill(fill) => fill.color,
            Self::Stroke(stroke) => stroke.color,
        }
    }

    pub const fn is_filled(&self) -> bool {
        matches!(self, Self::Fill(_))
    }
}

/// A filled region.
#[derive(Debug, Clone, PartialEq)]
pub struct FillObject {
    pub shape: Shape,
    pub color: Color,
}

/// A stroked outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeObject {
    pub shape: Shape,
    pub color: Color,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_defaults() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::WHITE, Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn rect_bbox_is_normalized() {
        let shape = Shape::Rect(Rect::new(10.0, 10.0, -5.0, 4.0));
        let bb = shape.bounding_box();
        assert_eq!(bb, Rect::new(-5.0, 4.0, 10.0, 10.0));
    }

    #[test]
    fn ellipse_in_box() {
        let shape = Shape::ellipse_in(Rect::new(0.0, 0.0, 20.0, 10.0));
        let bb = shape.bounding_box();
        assert!((bb.width() - 20.0).abs() < 1e-6, "bb = {bb:?}");
        assert!((bb.height() - 10.0).abs() < 1e-6, "bb = {bb:?}");
    }

    #[test]
    fn polygon_bbox_spans_all_vertices() {
        let shape = Shape::Polygon(vec![
            Point::new(10.0, 20.0),
            Point::new(50.0, 20.0),
            Point::new(30.0, -10.0),
        ]);
        assert_eq!(shape.bounding_box(), Rect::new(10.0, -10.0, 50.0, 20.0));
    }

    #[test]
    fn empty_polygon_bbox() {
        assert_eq!(Shape::Polygon(Vec::new()).bounding_box(), Rect::ZERO);
    }

    #[test]
    fn only_lines_are_open() {
        let line = Shape::Line(Line::new((0.0, 0.0), (1.0, 1.0)));
        assert!(!line.is_closed());
        assert!(Shape::Rect(Rect::ZERO).is_closed());
        assert!(Shape::Polygon(Vec::new()).is_closed());
    }
}
