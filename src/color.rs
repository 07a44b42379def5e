//! Hex color parsing.
//!
//! Accepts `RGB`, `RRGGBB`, and `AARRGGBB` digit strings with any surrounding
//! punctuation (`#fff`, `"006AF9"`). Parsing never fails: inputs with any other
//! digit count resolve to opaque black.

use crossterm::style::Color;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An ARGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Opaque black, returned for any input that is not 3, 6, or 8 digits long.
    pub const FALLBACK: Self = Self {
        a: 255,
        r: 0,
        g: 0,
        b: 0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// All non-alphanumeric characters are removed first. The digit count of
    /// what remains selects the layout; the value comes from the leading run
    /// of hex digits (an optional `0x` prefix is skipped).
    pub fn parse(input: &str) -> Self {
        let stripped: String = input.chars().filter(|c| c.is_alphanumeric()).collect();
        let value = scan_hex(&stripped);
        match stripped.chars().count() {
            3 => Self {
                a: 255,
                r: (((value >> 8) & 0xF) * 17) as u8,
                g: (((value >> 4) & 0xF) * 17) as u8,
                b: ((value & 0xF) * 17) as u8,
            },
            6 => Self {
                a: 255,
                r: byte(value >> 16),
                g: byte(value >> 8),
                b: byte(value),
            },
            8 => Self {
                a: byte(value >> 24),
                r: byte(value >> 16),
                g: byte(value >> 8),
                b: byte(value),
            },
            _ => Self::FALLBACK,
        }
    }

    /// Alpha as a unit-interval opacity.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Terminal color for this value. Terminals have no alpha, so it is dropped.
    pub fn to_terminal(self) -> Color {
        Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl FromStr for HexColor {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.a, self.r, self.g, self.b
        )
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        color.to_terminal()
    }
}

fn byte(value: u64) -> u8 {
    (value & 0xFF) as u8
}

/// Read the leading hex digits of `text` as an integer. Stops at the first
/// non-hex character; saturates instead of overflowing.
fn scan_hex(text: &str) -> u64 {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let mut value: u64 = 0;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(16) else {
            break;
        };
        value = match value.checked_mul(16) {
            Some(shifted) => shifted | u64::from(digit),
            None => return u64::MAX,
        };
    }
    value
}
