//! Pen and drawing state threaded between commands.

use std::fmt;

use penline_graphics::types::{Color, Point};

// ---------------------------------------------------------------------------
// PenColor
// ---------------------------------------------------------------------------

/// The colors a pen can hold.
///
/// `Black` is only the starting color: `pen` accepts just the names in
/// [`PenColor::SELECTABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PenColor {
    #[default]
    Black,
    Red,
    Green,
    Blue,
}

impl PenColor {
    /// Colors that `pen <name>` can select.
    pub const SELECTABLE: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Resolve a color name (case-insensitive) against the selectable set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::SELECTABLE
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// The paint color used on the canvas.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Black => Color::BLACK,
            Self::Red => Color::RED,
            Self::Green => Color::GREEN,
            Self::Blue => Color::BLUE,
        }
    }
}

impl fmt::Display for PenColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// An integer pen position. Unbounded: it may lie off the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// DrawingState
// ---------------------------------------------------------------------------

/// Pen color, fill mode, and pen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DrawingState {
    /// Current pen color.
    pub pen: PenColor,
    /// Whether shapes are painted solid instead of outlined.
    pub fill: bool,
    /// Current pen position.
    pub position: Position,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = DrawingState::default();
        assert_eq!(state.pen, PenColor::Black);
        assert!(!state.fill);
        assert_eq!(state.position, Position::ORIGIN);
    }

    #[test]
    fn color_names_are_case_insensitive() {
        assert_eq!(PenColor::from_name("red"), Some(PenColor::Red));
        assert_eq!(PenColor::from_name("GREEN"), Some(PenColor::Green));
        assert_eq!(PenColor::from_name("Blue"), Some(PenColor::Blue));
    }

    #[test]
    fn only_selectable_colors_resolve() {
        assert_eq!(PenColor::from_name("black"), None);
        assert_eq!(PenColor::from_name("yellow"), None);
        assert_eq!(PenColor::from_name(""), None);
    }

    #[test]
    fn position_to_point() {
        let p: Point = Position::new(-3, 7).into();
        assert_eq!(p, Point::new(-3.0, 7.0));
    }
}
