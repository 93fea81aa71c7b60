mod color;
mod edges;
mod offset;

pub use color::{Color, ColorError, Rgb};
pub use edges::Edges;
pub use offset::Offset;
