//! Surface abstraction.
//!
//! The interpreter paints through this trait and never owns pixels
//! itself. Hosts hand in whatever surface they display:
//! - [`Canvas`] from `penline-graphics` (a persistent display list that the
//!   SVG renderer and the WASM binding read back)
//! - anything else that can stroke and fill basic shapes

use penline_graphics::canvas::BACKGROUND;
use penline_graphics::types::{Color, Point, Rect};
use penline_graphics::Canvas;

use crate::geometry::{triangle_vertices, SurfaceOp};
use crate::state::Position;

/// Primitive paint operations a drawing surface provides.
///
/// Surfaces clip out-of-bounds geometry themselves; the interpreter passes
/// coordinates through unchecked.
pub trait Surface {
    fn draw_line(&mut self, from: Point, to: Point, color: Color);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Stroke the ellipse inscribed in `bounds`.
    fn draw_ellipse(&mut self, bounds: Rect, color: Color);
    /// Fill the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Rect, color: Color);
    fn draw_polygon(&mut self, points: &[Point], color: Color);
    fn fill_polygon(&mut self, points: &[Point], color: Color);
    /// Repaint the whole surface with `background`.
    fn clear(&mut self, background: Color);
}

impl Surface for Canvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        Self::draw_line(self, from, to, color);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        Self::draw_rect(self, rect, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        Self::fill_rect(self, rect, color);
    }

    fn draw_ellipse(&mut self, bounds: Rect, color: Color) {
        Self::draw_ellipse(self, bounds, color);
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        Self::fill_ellipse(self, bounds, color);
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color) {
        Self::draw_polygon(self, points, color);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        Self::fill_polygon(self, points, color);
    }

    fn clear(&mut self, background: Color) {
        Self::clear(self, background);
    }
}

impl SurfaceOp {
    /// Perform this operation on `surface`.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        tracing::trace!(op = ?self, "paint");
        match *self {
            Self::Line { from, to, pen } => {
                surface.draw_line(from.into(), to.into(), pen.color());
            }
            Self::Rect {
                origin,
                width,
                height,
                pen,
                filled,
            } => {
                let rect = box_at(origin, width, height);
                if filled {
                    surface.fill_rect(rect, pen.color());
                } else {
                    surface.draw_rect(rect, pen.color());
                }
            }
            Self::Circle {
                center,
                radius,
                pen,
                filled,
            } => {
                let bounds = circle_box(center, radius);
                if filled {
                    surface.fill_ellipse(bounds, pen.color());
                } else {
                    surface.draw_ellipse(bounds, pen.color());
                }
            }
            Self::Triangle {
                at,
                base,
                side1,
                pen,
                filled,
            } => {
                let points = triangle_vertices(at, base, side1);
                if filled {
                    surface.fill_polygon(&points, pen.color());
                } else {
                    surface.draw_polygon(&points, pen.color());
                }
            }
            Self::Clear => surface.clear(BACKGROUND),
        }
    }
}

/// Box from a corner and a signed size, computed in `f64` so it cannot
/// overflow.
fn box_at(origin: Position, width: i32, height: i32) -> Rect {
    let p = Point::from(origin);
    Rect::new(p.x, p.y, p.x + f64::from(width), p.y + f64::from(height))
}

/// `[x - r, y - r, 2r, 2r]`, inverted for a negative radius.
fn circle_box(center: Position, radius: i32) -> Rect {
    let c = Point::from(center);
    let r = f64::from(radius);
    Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
