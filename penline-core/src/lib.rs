//! Command grammar, drawing state, and interpreter for `PenLine`.
//!
//! One line of text is one drawing command:
//!
//! ```text
//! moveto <x> <y>        drawto <x> <y>
//! rectangle <w> <h>     circle <radius>
//! triangle <base> <side1> <side2>
//! pen <red|green|blue>  fill <on|off>
//! clear                 reset
//! ```

pub mod command;
pub mod error;
pub mod geometry;
pub mod interpreter;
pub mod script;
pub mod state;
pub mod surface;
pub mod token;

pub use command::Command;
pub use error::{ErrorKind, InterpResult, InterpreterError};
pub use interpreter::{check, Interpreter, Outcome};
pub use state::{DrawingState, PenColor, Position};
pub use surface::Surface;
