use serde::Deserialize;
use std::fmt;

/// An 8-bit-per-channel RGBA colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 { 255 }

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const PINK: Color = Color::rgb(255, 45, 85);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

/// Formats as `#rrggbb`; alpha is carried separately as an opacity.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
