//! Hex RGB parsing, darkening and captured node styles.

use crate::error::Error;

/// Fallback fill used when no original color was ever recorded for a node,
/// or when the recorded one fails to parse.
pub const FALLBACK_FILL: Rgb = Rgb {
    r: 0x97,
    g: 0xc2,
    b: 0xfc,
};

/// Border paired with [`FALLBACK_FILL`].
pub const FALLBACK_BORDER: Rgb = Rgb {
    r: 0x2b,
    g: 0x7c,
    b: 0xe9,
};

/// An 8 bit per channel RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses a `#rrggbb` string.
    pub fn parse(hex: &str) -> Result<Self, Error> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(hex.to_string()))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap();
        Ok(Self {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        })
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Scales every channel towards black. `amount` is clamped to `0..=1`;
    /// `0.0` is a no-op and `1.0` is black.
    pub fn darken(self, amount: f32) -> Self {
        let factor = 1.0 - amount.clamp(0.0, 1.0);
        let scale = |c: u8| (f32::from(c) * factor).round() as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

/// A node's captured original coloring, resolved once at capture time.
///
/// The renderer side may know only a fill or a border and fill pair. Reverts
/// always restore the fill and derive the border by darkening it, so the
/// border component is informational.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Only a fill color was recorded.
    Solid(Rgb),
    /// Border and fill were both recorded.
    BorderFill { border: Rgb, fill: Rgb },
}

impl Color {
    /// The fill component of the captured color.
    pub fn fill(self) -> Rgb {
        match self {
            Color::Solid(fill) => fill,
            Color::BorderFill { fill, .. } => fill,
        }
    }
}
