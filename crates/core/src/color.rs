//! Opaque 8-bit RGB colors and `#RRGGBB` parsing.
//!
//! Every color the renderer paints with is fully opaque. Parsing is strict
//! (exactly seven characters, leading `#`); callers that must never fail use
//! [`Rgb::parse_or`] and get a default back instead of an error.

use crate::error::StyleError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque sRGB color with 8-bit components.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color string of the exact form `#RRGGBB` (case insensitive).
    ///
    /// Returns `StyleError::InvalidColor` for anything else, including
    /// shorthand `#rgb` and strings without the leading `#`.
    pub fn from_hex(hex: &str) -> Result<Rgb, StyleError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| StyleError::InvalidColor(format!("missing '#' in {hex:?}")))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StyleError::InvalidColor(format!(
                "expected #RRGGBB, got {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| StyleError::InvalidColor(format!("{hex:?}: {e}")))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Parses `hex`, returning `None` when it is malformed.
    ///
    /// An empty string counts as "not supplied" and yields `None` silently;
    /// any other rejected input is logged at `warn`.
    pub fn parse_lenient(hex: &str) -> Option<Rgb> {
        if hex.is_empty() {
            return None;
        }
        match Rgb::from_hex(hex) {
            Ok(color) => Some(color),
            Err(e) => {
                tracing::warn!(input = hex, "{e}");
                None
            }
        }
    }

    /// Parses `hex`, falling back to `default` when it is malformed.
    pub fn parse_or(hex: &str, default: Rgb) -> Rgb {
        Rgb::parse_lenient(hex).unwrap_or(default)
    }

    /// Formats the color as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// RGBA bytes with full opacity.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_mixed_case() {
        assert_eq!(Rgb::from_hex("#FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("#0a0B0c").unwrap(), Rgb::new(10, 11, 12));
    }

    #[test]
    fn from_hex_requires_leading_hash() {
        assert!(matches!(
            Rgb::from_hex("ff00aa"),
            Err(StyleError::InvalidColor(_))
        ));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        for input in ["#fff", "#ff00aa0", "#", ""] {
            assert!(Rgb::from_hex(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("#+10000").is_err());
    }

    #[test]
    fn from_hex_rejects_multibyte_input_without_panicking() {
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn parse_or_falls_back_on_malformed_input() {
        assert_eq!(Rgb::parse_or("red", Rgb::WHITE), Rgb::WHITE);
        assert_eq!(Rgb::parse_or("", Rgb::BLACK), Rgb::BLACK);
        assert_eq!(Rgb::parse_or("#123456", Rgb::BLACK), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn to_hex_is_lowercase() {
        assert_eq!(Rgb::new(171, 205, 239).to_hex(), "#abcdef");
    }

    #[test]
    fn to_rgba_is_opaque() {
        assert_eq!(Rgb::new(1, 2, 3).to_rgba(), [1, 2, 3, 255]);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 16)).unwrap();
        assert_eq!(json, "\"#ff0010\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(255, 0, 16));
        assert!(serde_json::from_str::<Rgb>("\"blue\"").is_err());
    }
}
