//! Keyframe interpolation.
//!
//! Every derived visual property is a pure function of one progress value:
//! `Keyframes::at(progress)`. Nothing is cached, so properties read from the
//! same progress snapshot always agree with each other.

use crate::types::{Color, Offset};

/// A value that can be linearly interpolated.
pub trait Interpolate: Copy {
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Interpolate for Color {
    /// Per channel, alpha included, in gamma-encoded sRGB.
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Color::rgba(
            f32::lerp(from.r, to.r, t),
            f32::lerp(from.g, to.g, t),
            f32::lerp(from.b, to.b, t),
            f32::lerp(from.a, to.a, t),
        )
    }
}

impl Interpolate for Offset {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Offset::new(f32::lerp(from.x, to.x, t), f32::lerp(from.y, to.y, t))
    }
}

impl<const N: usize> Interpolate for [f32; N] {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        std::array::from_fn(|i| f32::lerp(from[i], to[i], t))
    }
}

/// Clamp a raw progress value into 0.0..=1.0. NaN maps to 0.0.
pub fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// The values a property takes at progress 0.0 and 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes<T> {
    pub from: T,
    pub to: T,
}

impl<T: Interpolate> Keyframes<T> {
    pub const fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    /// Value at `progress`. Spring overshoot is clamped away first.
    pub fn at(&self, progress: f32) -> T {
        T::lerp(self.from, self.to, clamp_progress(progress))
    }
}
