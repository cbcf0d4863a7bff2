//! Colors and the built-in palette.
//!
//! Colors are linear RGBA in `0..=1`. Config files spell them as hex strings
//! (`"#RRGGBB"` or `"#RRGGBBAA"`).

use serde::{Deserialize, Serialize};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Accent blue.
    pub const BLUE: Self = Self::hex(0x007A_FFFF);
    /// Purple.
    pub const PURPLE: Self = Self::hex(0xAF52_DEFF);
    /// Pink.
    pub const PINK: Self = Self::hex(0xFF2D_55FF);
    /// Orange.
    pub const ORANGE: Self = Self::hex(0xFF95_00FF);
    /// Teal.
    pub const TEAL: Self = Self::hex(0x30B0_C7FF);
    /// Neutral gray used for disabled controls.
    pub const GRAY: Self = Self::hex(0x8E8E_93FF);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    #[must_use]
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.trim().trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::hex((value << 8) | 0xFF)),
            8 => Some(Self::hex(value)),
            _ => None,
        }
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Multiplies the alpha channel, keeping the hue.
    #[must_use]
    pub fn fade(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value).ok_or_else(|| format!("invalid color `{value}`"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            channel(color.r),
            channel(color.g),
            channel(color.b),
            channel(color.a)
        )
    }
}

/// The handful of colors every variant draws from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Accent fill for solid controls, stroke for outlined ones.
    pub primary: Color,
    /// Label color on top of filled controls.
    pub on_primary: Color,
    /// Desaturated tone that replaces every fill while disabled.
    pub neutral: Color,
    /// Label color while disabled.
    pub neutral_label: Color,
    /// Frosted-glass tint.
    pub glass_tint: Color,
    /// Frosted-glass rim.
    pub glass_border: Color,
    /// Drop shadow base color.
    pub shadow: Color,
}

impl Palette {
    /// Built-in light palette.
    pub const DEFAULT: Self = Self {
        primary: Color::BLUE,
        on_primary: Color::WHITE,
        neutral: Color::GRAY,
        neutral_label: Color::rgba(0.92, 0.92, 0.94, 1.0),
        glass_tint: Color::rgba(1.0, 1.0, 1.0, 0.15),
        glass_border: Color::rgba(1.0, 1.0, 1.0, 0.3),
        shadow: Color::BLACK.with_alpha(0.15),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
