//! SVG renderer for `PenLine` canvases.
//!
//! Converts a [`Canvas`] into an SVG [`Document`] using the `svg` crate.
//!
//! Key design points:
//! - Canvas coordinates are screen coordinates (Y down), same as SVG, so
//!   points are written as they are.
//! - The document is exactly the canvas size. Objects are drawn inside a
//!   group clipped to the canvas rectangle, and objects lying entirely
//!   outside it are skipped.
//! - Every object keeps its own element type (`line`, `rect`, `ellipse`,
//!   `polygon`); strokes have `fill="none"`, fills have `stroke="none"`.

use svg::node::element::{
    ClipPath, Definitions, Ellipse as SvgEllipse, Group, Line as SvgLine, Polygon, Rectangle,
};
use svg::node::Node;
use svg::Document;

use penline_graphics::types::{Color, GraphicsObject, Point, Rect, Scalar, Shape};
use penline_graphics::Canvas;

const CLIP_ID: &str = "canvas";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a [`Canvas`] to an SVG [`Document`].
#[must_use]
pub fn render(canvas: &Canvas) -> Document {
    render_with_options(canvas, &RenderOptions::default())
}

/// Render a [`Canvas`] to an SVG string.
#[must_use]
pub fn render_to_string(canvas: &Canvas) -> String {
    render(canvas).to_string()
}

/// Options controlling SVG output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Number of decimal places for coordinates. Default: 2.
    pub precision: usize,
    /// Width of stroked outlines, in canvas units. Default: 1.0.
    pub stroke_width: Scalar,
    /// Paint the canvas background as a full-size rectangle. Default: true.
    pub show_background: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            stroke_width: 1.0,
            show_background: true,
        }
    }
}

/// Render a [`Canvas`] to an SVG [`Document`] with custom options.
#[must_use]
pub fn render_with_options(canvas: &Canvas, opts: &RenderOptions) -> Document {
    let bounds = canvas.bounds();

    let mut content = Group::new().set("clip-path", format!("url(#{CLIP_ID})"));
    for obj in canvas.visible_objects() {
        content.append(render_object(obj, opts));
    }

    let clip = ClipPath::new()
        .set("id", CLIP_ID)
        .add(rect_element(bounds, opts.precision));

    let mut doc = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set(
            "viewBox",
            format!(
                "0 0 {} {}",
                fmt_scalar(bounds.width(), opts.precision),
                fmt_scalar(bounds.height(), opts.precision)
            ),
        )
        .set("width", canvas.width())
        .set("height", canvas.height())
        .add(Definitions::new().add(clip));

    if opts.show_background {
        doc = doc.add(
            rect_element(bounds, opts.precision)
                .set("fill", color_to_svg(canvas.background()))
                .set("stroke", "none"),
        );
    }

    doc.add(content)
}

// ---------------------------------------------------------------------------
// Individual object renderers
// ---------------------------------------------------------------------------

/// Render one painted object, styled as a fill or a stroke.
fn render_object(obj: &GraphicsObject, opts: &RenderOptions) -> Box<dyn Node> {
    let color = color_to_svg(obj.color());
    let (fill, stroke) = if obj.is_filled() {
        (color, "none".to_owned())
    } else {
        ("none".to_owned(), color)
    };
    let width = fmt_scalar(opts.stroke_width, opts.precision);
    let p = opts.precision;

    macro_rules! styled {
        ($el:expr) => {{
            let el = $el.set("fill", fill).set("stroke", stroke);
            if obj.is_filled() {
                Box::new(el) as Box<dyn Node>
            } else {
                Box::new(el.set("stroke-width", width)) as Box<dyn Node>
            }
        }};
    }

    match obj.shape() {
        Shape::Line(line) => styled!(SvgLine::new()
            .set("x1", fmt_scalar(line.p0.x, p))
            .set("y1", fmt_scalar(line.p0.y, p))
            .set("x2", fmt_scalar(line.p1.x, p))
            .set("y2", fmt_scalar(line.p1.y, p))
            .set("stroke-linecap", "round")),
        Shape::Rect(rect) => styled!(rect_element(*rect, p)),
        Shape::Ellipse(ellipse) => {
            let center = ellipse.center();
            let radii = ellipse.radii();
            styled!(SvgEllipse::new()
                .set("cx", fmt_scalar(center.x, p))
                .set("cy", fmt_scalar(center.y, p))
                .set("rx", fmt_scalar(radii.x, p))
                .set("ry", fmt_scalar(radii.y, p)))
        }
        Shape::Polygon(points) => styled!(Polygon::new()
            .set("points", points_to_svg(points, p))
            .set("stroke-linejoin", "miter")),
    }
}

fn rect_element(rect: Rect, precision: usize) -> Rectangle {
    let rect = rect.abs();
    Rectangle::new()
        .set("x", fmt_scalar(rect.x0, precision))
        .set("y", fmt_scalar(rect.y0, precision))
        .set("width", fmt_scalar(rect.width(), precision))
        .set("height", fmt_scalar(rect.height(), precision))
}

/// Convert polygon vertices to an SVG `points` attribute.
fn points_to_svg(points: &[Point], precision: usize) -> String {
    points
        .iter()
        .map(|pt| {
            format!(
                "{},{}",
                fmt_scalar(pt.x, precision),
                fmt_scalar(pt.y, precision)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Attribute helpers
// ---------------------------------------------------------------------------

/// Convert a [`Color`] to an SVG color string.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "color components are clamped to [0, 255]"
)]
fn color_to_svg(c: Color) -> String {
    let r = (c.r.clamp(0.0, 1.0) * 255.0).round() as u8;
    let g = (c.g.clamp(0.0, 1.0) * 255.0).round() as u8;
    let b = (c.b.clamp(0.0, 1.0) * 255.0).round() as u8;
    if r == 0 && g == 0 && b == 0 {
        "black".to_owned()
    } else if r == 255 && g == 255 && b == 255 {
        "white".to_owned()
    } else {
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Format a scalar to the given precision, stripping trailing zeros.
///
/// Negative zero is written as `0`.
fn fmt_scalar(v: Scalar, precision: usize) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    let s = format!("{v:.precision$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed == "-0" {
            "0".to_owned()
        } else {
            trimmed.to_owned()
        }
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use penline_core::Interpreter;
    use penline_graphics::types::FillObject;

    fn drawn(lines: &[&str]) -> Canvas {
        let mut interp = Interpreter::new(Canvas::new(200, 100));
        for line in lines {
            interp.execute(line).expect(line);
        }
        interp.into_surface()
    }

    // -- color tests --

    #[test]
    fn test_color_to_svg_named() {
        assert_eq!(color_to_svg(Color::BLACK), "black");
        assert_eq!(color_to_svg(Color::WHITE), "white");
    }

    #[test]
    fn test_color_to_svg_hex() {
        assert_eq!(color_to_svg(Color::RED), "#ff0000");
        assert_eq!(color_to_svg(Color::GREEN), "#008000");
        assert_eq!(color_to_svg(Color::BLUE), "#0000ff");
    }

    // -- fmt_scalar tests --

    #[test]
    fn test_fmt_scalar_trailing_zeros() {
        assert_eq!(fmt_scalar(1.0, 4), "1");
        assert_eq!(fmt_scalar(1.5, 4), "1.5");
        assert_eq!(fmt_scalar(1.25, 4), "1.25");
        assert_eq!(fmt_scalar(-0.0, 2), "0");
        assert_eq!(fmt_scalar(-0.001, 2), "0");
    }

    #[test]
    fn test_points_to_svg() {
        let pts = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, -3.5)];
        assert_eq!(points_to_svg(&pts, 2), "0,0 4,0 2,-3.5");
    }

    // -- object renderers --

    #[test]
    fn test_render_fill_rect() {
        let obj = GraphicsObject::Fill(FillObject {
            shape: Shape::Rect(Rect::new(10.0, 20.0, 60.0, 45.0)),
            color: Color::RED,
        });
        let s = render_object(&obj, &RenderOptions::default()).to_string();
        assert!(s.starts_with("<rect"), "{s}");
        assert!(s.contains("fill=\"#ff0000\""), "missing fill: {s}");
        assert!(s.contains("stroke=\"none\""), "missing stroke=none: {s}");
        assert!(s.contains("width=\"50\""), "wrong width: {s}");
        assert!(!s.contains("stroke-width"), "fill has stroke width: {s}");
    }

    #[test]
    fn test_render_stroke_line() {
        let canvas = drawn(&["drawto 30 20"]);
        let s = render_object(&canvas.objects()[0], &RenderOptions::default()).to_string();
        assert!(s.starts_with("<line"), "{s}");
        assert!(s.contains("fill=\"none\""), "missing fill=none: {s}");
        assert!(s.contains("stroke=\"black\""), "missing stroke: {s}");
        assert!(s.contains("stroke-width=\"1\""), "missing stroke-width: {s}");
        assert!(s.contains("x2=\"30\""), "wrong end point: {s}");
    }

    #[test]
    fn test_render_circle() {
        let canvas = drawn(&["moveto 50 50", "pen blue", "circle 10"]);
        let s = render_object(&canvas.objects()[1], &RenderOptions::default()).to_string();
        assert!(s.starts_with("<ellipse"), "{s}");
        assert!(s.contains("cx=\"50\""), "wrong center: {s}");
        assert!(s.contains("rx=\"10\""), "wrong radius: {s}");
        assert!(s.contains("stroke=\"#0000ff\""), "wrong color: {s}");
    }

    #[test]
    fn test_render_filled_triangle() {
        let canvas = drawn(&["moveto 10 60", "fill on", "triangle 40 30 7"]);
        let s = render_object(&canvas.objects()[1], &RenderOptions::default()).to_string();
        assert!(s.starts_with("<polygon"), "{s}");
        assert!(s.contains("points=\"10,60 50,60 30,30\""), "wrong points: {s}");
        assert!(s.contains("fill=\"black\""), "{s}");
    }

    // -- full render tests --

    #[test]
    fn test_render_empty_canvas() {
        let svg = render_to_string(&Canvas::new(200, 100));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("viewBox=\"0 0 200 100\""), "{svg}");
        assert!(svg.contains("width=\"200\""), "{svg}");
        assert!(svg.contains("fill=\"white\""), "missing background: {svg}");
    }

    #[test]
    fn test_render_without_background() {
        let opts = RenderOptions {
            show_background: false,
            ..RenderOptions::default()
        };
        let svg = render_with_options(&Canvas::new(10, 10), &opts).to_string();
        assert!(!svg.contains("fill=\"white\""), "{svg}");
    }

    #[test]
    fn test_render_clips_to_canvas() {
        let svg = render_to_string(&drawn(&["moveto 10 10", "circle 5"]));
        assert!(svg.contains("<clipPath"), "missing clipPath def: {svg}");
        assert!(
            svg.contains("clip-path=\"url(#canvas)\""),
            "missing clip ref: {svg}"
        );
    }

    #[test]
    fn test_offscreen_objects_are_skipped() {
        let svg = render_to_string(&drawn(&["moveto -100 -100", "circle 5"]));
        assert!(!svg.contains("<ellipse"), "offscreen shapes rendered: {svg}");
    }

    #[test]
    fn test_clear_renders_blank() {
        let svg = render_to_string(&drawn(&["moveto 10 10", "rectangle 5 5", "clear"]));
        assert!(!svg.contains("<ellipse"), "{svg}");
        // background + clip rect only
        assert_eq!(svg.matches("<rect").count(), 2, "{svg}");
    }

    #[test]
    fn test_stroke_width_option() {
        let opts = RenderOptions {
            stroke_width: 2.5,
            ..RenderOptions::default()
        };
        let svg = render_with_options(&drawn(&["drawto 5 5"]), &opts).to_string();
        assert!(svg.contains("stroke-width=\"2.5\""), "{svg}");
    }
}
