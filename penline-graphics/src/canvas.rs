//! The persistent drawing canvas.
//!
//! A [`Canvas`] accumulates painted objects across commands, the way a
//! raster keeps its pixels between paint calls. It is a display list rather
//! than a pixel buffer: renderers replay the objects in order on top of the
//! background color.
//!
//! Coordinates follow screen conventions: the origin is the top-left
//! corner and Y grows downward. Nothing is rejected for lying outside the
//! canvas; such objects are kept and clipped when rendered.

use crate::types::{
    Color, FillObject, GraphicsObject, Line, Point, Rect, Shape, StrokeObject,
};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 640;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 480;
/// Color a canvas is painted with on creation and on [`Canvas::clear`].
pub const BACKGROUND: Color = Color::WHITE;

/// A persistent surface of painted objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Color,
    objects: Vec<GraphicsObject>,
}

impl Canvas {
    /// Create an empty canvas of the given size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: BACKGROUND,
            objects: Vec::new(),
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn background(&self) -> Color {
        self.background
    }

    /// Every object painted since the last clear, oldest first.
    pub fn objects(&self) -> &[GraphicsObject] {
        &self.objects
    }

    /// The visible area of the canvas.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Objects that overlap the visible area, oldest first.
    ///
    /// Everything else would be clipped away entirely.
    pub fn visible_objects(&self) -> impl Iterator<Item = &GraphicsObject> {
        let bounds = self.bounds();
        self.objects
            .iter()
            .filter(move |obj| overlaps(obj.shape().bounding_box(), bounds))
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    // -- painting primitives --

    /// Stroke a straight segment.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.stroke(Shape::Line(Line::new(from, to)), color);
    }

    /// Stroke the outline of a rectangle.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.stroke(Shape::Rect(rect.abs()), color);
    }

    /// Paint a solid rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill(Shape::Rect(rect.abs()), color);
    }

    /// Stroke the outline of the ellipse inscribed in `bounds`.
    pub fn draw_ellipse(&mut self, bounds: Rect, color: Color) {
        self.stroke(Shape::ellipse_in(bounds), color);
    }

    /// Paint the solid ellipse inscribed in `bounds`.
    pub fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        self.fill(Shape::ellipse_in(bounds), color);
    }

    /// Stroke a closed polygon.
    pub fn draw_polygon(&mut self, points: &[Point], color: Color) {
        self.stroke(Shape::Polygon(points.to_vec()), color);
    }

    /// Paint a solid polygon.
    pub fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.fill(Shape::Polygon(points.to_vec()), color);
    }

    /// Wipe everything and repaint the canvas with `background`.
    pub fn clear(&mut self, background: Color) {
        self.objects.clear();
        self.background = background;
    }

    fn stroke(&mut self, shape: Shape, color: Color) {
        self.objects
            .push(GraphicsObject::Stroke(StrokeObject { shape, color }));
    }

    fn fill(&mut self, shape: Shape, color: Color) {
        debug_assert!(shape.is_closed(), "fill requires a closed shape");
        self.objects.push(GraphicsObject::Fill(FillObject { shape, color }));
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Closed-interval overlap, so zero-area shapes on the edge still count.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
