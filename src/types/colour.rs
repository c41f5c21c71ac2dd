//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ArtError, Result};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Lit window yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Unlit window gray.
    pub const GRAY: Self = Self::rgb(100, 100, 100);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let digits = hex
                    .chars()
                    .map(parse_hex_digit)
                    .collect::<Result<Vec<u8>>>()?;
                let [r, g, b] = [digits[0], digits[1], digits[2]];
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to an RGB triple.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Add another colour channel-wise, saturating at 255.
    pub fn saturating_add(self, other: Colour) -> Colour {
        Colour::rgb(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }

    /// Shift every channel by `delta`, clamped to [0, 255].
    pub fn offset(self, delta: i32) -> Colour {
        let shift = |c: u8| (i32::from(c) + delta).clamp(0, 255) as u8;
        Colour::rgb(shift(self.r), shift(self.g), shift(self.b))
    }

    /// Scale every channel by `factor`, truncating toward zero.
    pub fn scale(self, factor: f64) -> Colour {
        let scale = |c: u8| (f64::from(c) * factor).clamp(0.0, 255.0) as u8;
        Colour::rgb(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Blend with `other`: `self * t + other * (1 - t)`, truncated.
    pub fn blend(self, other: Colour, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        let mix = |a: u8, b: u8| (f64::from(a) * t + f64::from(b) * inv).clamp(0.0, 255.0) as u8;
        Colour::rgb(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl FromStr for Colour {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn invalid_hex(s: &str) -> ArtError {
    ArtError::Config {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ArtError::Config {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| ArtError::Config {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
