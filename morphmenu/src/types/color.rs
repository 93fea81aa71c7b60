use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Straight (non-premultiplied) sRGB color with alpha, channels in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// 8-bit opaque color, what a terminal or framebuffer cell ends up holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 6 or 8 hex digits, got {0}")]
    Length(usize),
    #[error("invalid hex digits in '{0}'")]
    Digit(String),
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Build an opaque color from OKLCH coordinates, clipped to the sRGB gamut.
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        use palette::{IntoColor, Oklch, Srgb};

        let srgb: Srgb = Oklch::new(l, c, h).into_color();
        let (r, g, b) = srgb.into_components();
        Self::rgba(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0), 1.0)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(text: &str) -> Result<Self, ColorError> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::Length(digits.len()));
        }
        if !digits.is_ascii() {
            return Err(ColorError::Digit(text.to_string()));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::Digit(text.to_string()))
        };
        let alpha = if digits.len() == 8 { byte(6)? } else { 255 };

        Ok(Self::rgba8(byte(0)?, byte(2)?, byte(4)?, alpha))
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Drop alpha and quantize to 8 bits per channel.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Composite this color over an opaque backdrop.
    pub fn over(&self, backdrop: Rgb) -> Rgb {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: f32, bg: u8| to_u8(fg * a + (bg as f32 / 255.0) * (1.0 - a));
        Rgb::new(mix(self.r, backdrop.r), mix(self.g, backdrop.g), mix(self.b, backdrop.b))
    }

    pub fn to_hex(&self) -> String {
        let Rgb { r, g, b } = self.to_rgb();
        format!("#{r:02X}{g:02X}{b:02X}{:02X}", to_u8(self.a))
    }
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_without_alpha_is_opaque() {
        let color = Color::from_hex("#533557").unwrap();
        assert_eq!(color.to_rgb(), Rgb::new(0x53, 0x35, 0x57));
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn hex_round_trips_alpha() {
        assert_eq!(Color::from_hex("ec726300").unwrap().to_hex(), "#EC726300");
        assert_eq!(Color::from_hex("#0000004D").unwrap().to_hex(), "#0000004D");
    }

    #[test]
    fn hex_rejects_garbage() {
        assert_eq!(Color::from_hex("#12345"), Err(ColorError::Length(5)));
        assert!(matches!(Color::from_hex("#GG0000"), Err(ColorError::Digit(_))));
    }

    #[test]
    fn over_respects_alpha() {
        let backdrop = Rgb::new(200, 100, 0);
        assert_eq!(Color::TRANSPARENT.over(backdrop), backdrop);
        assert_eq!(Color::BLACK.over(backdrop), Rgb::new(0, 0, 0));
        assert_eq!(Color::BLACK.with_alpha(0.5).over(backdrop), Rgb::new(100, 50, 0));
    }

    #[test]
    fn oklch_stays_in_gamut() {
        let color = Color::oklch(0.7, 0.4, 30.0);
        for channel in [color.r, color.g, color.b] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}
