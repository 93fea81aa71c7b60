/// A 2D translation in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same distance along both axes (a diagonal shift).
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }
}
