//! Geometry of each command.
//!
//! [`plan`] turns a validated command and the current state into the
//! surface operations to perform, the next state, and a description of
//! what changed. It touches nothing, so the interpreter can apply the
//! result in one step and tests can inspect it without a surface.

use std::fmt;

use penline_graphics::types::Point;

use crate::command::{Command, Verb};
use crate::state::{DrawingState, PenColor, Position};

/// Radius of the dot painted at the pen position by `moveto`.
pub const MARKER_RADIUS: i32 = 1;

// ---------------------------------------------------------------------------
// Surface operations
// ---------------------------------------------------------------------------

/// One paint call against a surface, in integer canvas coordinates.
///
/// Operations carry the command's own arguments; corners and vertices are
/// derived in `f64` when the operation is applied, so they never wrap or
/// saturate. Sizes may be negative; surfaces normalize them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    /// Stroke a segment.
    Line {
        from: Position,
        to: Position,
        pen: PenColor,
    },
    /// Stroke or fill a rectangle with top-left corner `origin`.
    Rect {
        origin: Position,
        width: i32,
        height: i32,
        pen: PenColor,
        filled: bool,
    },
    /// Stroke or fill a circle.
    Circle {
        center: Position,
        radius: i32,
        pen: PenColor,
        filled: bool,
    },
    /// Stroke or fill the triangle given by [`triangle_vertices`].
    Triangle {
        at: Position,
        base: i32,
        side1: i32,
        pen: PenColor,
        filled: bool,
    },
    /// Repaint everything with the background color.
    Clear,
}

// ---------------------------------------------------------------------------
// Change
// ---------------------------------------------------------------------------

/// What a successful command did, for hosts to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Moved { to: Position },
    LineDrawn { from: Position, to: Position },
    ShapeDrawn { verb: Verb, at: Position, filled: bool },
    PenColor(PenColor),
    FillMode(bool),
    Cleared,
    Reset,
}

impl Change {
    /// Whether this change only affects pen settings, not the surface or
    /// the position.
    #[must_use]
    pub const fn is_mode_change(&self) -> bool {
        matches!(self, Self::PenColor(_) | Self::FillMode(_))
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moved { to } => write!(f, "moved to {to}"),
            Self::LineDrawn { from, to } => write!(f, "line drawn from {from} to {to}"),
            Self::ShapeDrawn { verb, at, filled } => {
                let style = if *filled { "filled" } else { "outlined" };
                write!(f, "{style} {verb} drawn at {at}")
            }
            Self::PenColor(color) => write!(f, "pen color {color}"),
            Self::FillMode(on) => write!(f, "fill mode {}", if *on { "on" } else { "off" }),
            Self::Cleared => write!(f, "canvas cleared"),
            Self::Reset => write!(f, "position reset to {}", Position::ORIGIN),
        }
    }
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

/// The effect of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Paint calls, in order.
    pub ops: Vec<SurfaceOp>,
    /// State after the command.
    pub next: DrawingState,
    pub change: Change,
}

/// Compute the effect of `command` starting from `state`.
#[must_use]
pub fn plan(command: Command, state: DrawingState) -> Plan {
    let at = state.position;
    let pen = state.pen;
    let filled = state.fill;
    let mut next = state;

    let (ops, change) = match command {
        Command::MoveTo { x, y } => {
            let to = Position::new(x, y);
            next.position = to;
            (vec![marker(to, pen)], Change::Moved { to })
        }
        Command::DrawTo { x, y } => {
            let to = Position::new(x, y);
            next.position = to;
            (
                vec![SurfaceOp::Line { from: at, to, pen }],
                Change::LineDrawn { from: at, to },
            )
        }
        Command::Rectangle { width, height } => (
            vec![SurfaceOp::Rect {
                origin: at,
                width,
                height,
                pen,
                filled,
            }],
            shape_drawn(Verb::Rectangle, at, filled),
        ),
        Command::Circle { radius } => (
            vec![SurfaceOp::Circle {
                center: at,
                radius,
                pen,
                filled,
            }],
            shape_drawn(Verb::Circle, at, filled),
        ),
        Command::Triangle { base, side1, .. } => (
            vec![SurfaceOp::Triangle {
                at,
                base,
                side1,
                pen,
                filled,
            }],
            shape_drawn(Verb::Triangle, at, filled),
        ),
        Command::Pen(color) => {
            next.pen = color;
            (Vec::new(), Change::PenColor(color))
        }
        Command::Fill(on) => {
            next.fill = on;
            (Vec::new(), Change::FillMode(on))
        }
        Command::Clear => (vec![SurfaceOp::Clear], Change::Cleared),
        Command::Reset => {
            next.position = Position::ORIGIN;
            (Vec::new(), Change::Reset)
        }
    };

    Plan { ops, next, change }
}

/// Vertices of the triangle drawn by `triangle <base> <side1> <side2>`.
///
/// The apex sits above the midpoint of the base (integer division
/// truncates toward zero) at height `side1`. Every `i32` sum is exact in
/// `f64`.
#[must_use]
pub fn triangle_vertices(at: Position, base: i32, side1: i32) -> [Point; 3] {
    let p = Point::from(at);
    [
        p,
        Point::new(p.x + f64::from(base), p.y),
        Point::new(p.x + f64::from(base / 2), p.y - f64::from(side1)),
    ]
}

const fn marker(center: Position, pen: PenColor) -> SurfaceOp {
    SurfaceOp::Circle {
        center,
        radius: MARKER_RADIUS,
        pen,
        filled: true,
    }
}

const fn shape_drawn(verb: Verb, at: Position, filled: bool) -> Change {
    Change::ShapeDrawn { verb, at, filled }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
