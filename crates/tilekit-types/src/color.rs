//! RGBA colors and four-corner gradients.

use serde::{Deserialize, Serialize};

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build an opaque color from a `0xRRGGBB` value.
    pub const fn hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Raise every color channel by `amount`, saturating at 255.
    pub fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
            a: self.a,
        }
    }

    /// Lower every color channel by `amount`, saturating at 0.
    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
            a: self.a,
        }
    }

    /// Blend towards `other`. `percent` is how much of `other` ends up in
    /// the result (clamped to 0-100).
    pub fn mix(self, other: Color, percent: u8) -> Self {
        let p = u16::from(percent.min(100));
        let blend = |a: u8, b: u8| ((u16::from(a) * (100 - p) + u16::from(b) * p) / 100) as u8;
        Self {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
            a: blend(self.a, other.a),
        }
    }

    pub const BLACK: Self = Self::hex(0x000000);
    pub const WHITE: Self = Self::hex(0xFFFFFF);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const SEABROOK: Self = Self::hex(0x487EB0);
    pub const PICO_VOID: Self = Self::hex(0x192A56);
    pub const LYNX_WHITE: Self = Self::hex(0xF5F6FA);
    pub const NASTURCIAN_FLOWER: Self = Self::hex(0xE84118);
    pub const SKIRRET_GREEN: Self = Self::hex(0x44BD32);
}

/// A four-corner color gradient.
///
/// Corners run anti-clockwise from the bottom-left: bottom-left,
/// top-left, top-right, bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gradient {
    pub corners: [Color; 4],
}

impl Gradient {
    pub const fn new(corners: [Color; 4]) -> Self {
        Self { corners }
    }

    /// A single color over the whole tile.
    pub const fn solid(color: Color) -> Self {
        Self::new([color; 4])
    }

    pub const fn horizontal(left: Color, right: Color) -> Self {
        Self::new([left, left, right, right])
    }

    pub const fn vertical(top: Color, bottom: Color) -> Self {
        Self::new([bottom, top, top, bottom])
    }

    /// Diagonal running bottom-left to top-right; the other two corners
    /// take the midpoint color.
    pub fn positive_diagonal(top_right: Color, bottom_left: Color) -> Self {
        let mid = top_right.mix(bottom_left, 50);
        Self::new([bottom_left, mid, top_right, mid])
    }

    /// Diagonal running bottom-right to top-left.
    pub fn negative_diagonal(bottom_right: Color, top_left: Color) -> Self {
        let mid = bottom_right.mix(top_left, 50);
        Self::new([mid, top_left, mid, bottom_right])
    }

    pub fn lighten(self, amount: u8) -> Self {
        Self::new(self.corners.map(|c| c.lighten(amount)))
    }

    pub fn darken(self, amount: u8) -> Self {
        Self::new(self.corners.map(|c| c.darken(amount)))
    }

    /// Blend each corner towards the matching corner of `other`.
    pub fn mix(self, other: Gradient, percent: u8) -> Self {
        let mut corners = self.corners;
        for (c, o) in corners.iter_mut().zip(other.corners) {
            *c = c.mix(o, percent);
        }
        Self::new(corners)
    }

    /// Whether all four corners share one color.
    pub fn is_solid(&self) -> bool {
        self.corners.iter().all(|c| *c == self.corners[0])
    }
}

impl From<Color> for Gradient {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}
