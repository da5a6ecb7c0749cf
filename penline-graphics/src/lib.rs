//! Colors, shapes, and the persistent canvas that `PenLine` commands paint
//! onto.

pub mod canvas;
pub mod types;

pub use canvas::Canvas;
