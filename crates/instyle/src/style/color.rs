//! Colour values for rich style objects.
//!
//! Supports:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors)
//! - Bright variants: `light-red` or `bright_red`
//! - The terminal default: `default`
//! - 256-color palette: `0` through `255`
//! - RGB hex: `"#ff6b35"` or `"#fff"` (3 or 6 digit)
//! - RGB tuple (stylesheets only): `[255, 107, 53]`
//!
//! # Example
//!
//! ```rust
//! use instyle::Color;
//!
//! assert_eq!(Color::parse("red").unwrap(), Color::Red);
//! assert_eq!(Color::parse("light-red").unwrap(), Color::BrightRed);
//! assert_eq!(Color::parse("208").unwrap(), Color::Ansi256(208));
//! assert_eq!(Color::parse("#ff6b35").unwrap(), Color::Rgb(255, 107, 53));
//!
//! assert_eq!(Color::Red.fragment(false), "31");
//! assert_eq!(Color::Ansi256(208).fragment(true), "48;5;208");
//! ```

use std::str::FromStr;

use crate::error::ColorError;

/// A terminal colour, usable as foreground or background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// The terminal's own default colour.
    Default,
    /// 256-color palette index.
    Ansi256(u8),
    /// True color RGB.
    Rgb(u8, u8, u8),
}

const NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

const NORMAL: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

const BRIGHT: [Color; 8] = [
    Color::BrightBlack,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
];

impl Color {
    /// Parses a color from a string value.
    ///
    /// Names are case-insensitive. Bright variants accept both the
    /// `light-` prefix used by the built-in tags and a `bright_` prefix.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            let index: u64 = s
                .parse()
                .map_err(|_| ColorError::PaletteOutOfRange(u64::MAX))?;
            return Self::from_palette_index(index);
        }

        Self::parse_named(s)
    }

    /// Converts a numeric palette index into [`Color::Ansi256`].
    pub fn from_palette_index(index: u64) -> Result<Self, ColorError> {
        u8::try_from(index)
            .map(Color::Ansi256)
            .map_err(|_| ColorError::PaletteOutOfRange(index))
    }

    /// Parses a color from a stylesheet YAML value.
    ///
    /// Strings go through [`Color::parse`], numbers are palette indices and
    /// three-element sequences are RGB tuples.
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, ColorError> {
        match value {
            serde_yaml::Value::String(s) => Self::parse(s),
            serde_yaml::Value::Number(n) => {
                let index = n
                    .as_u64()
                    .ok_or_else(|| ColorError::InvalidValue(n.to_string()))?;
                Self::from_palette_index(index)
            }
            serde_yaml::Value::Sequence(seq) => Self::parse_rgb_tuple(seq),
            other => Err(ColorError::InvalidValue(format!("{:?}", other))),
        }
    }

    fn parse_rgb_tuple(seq: &[serde_yaml::Value]) -> Result<Self, ColorError> {
        if seq.len() != 3 {
            return Err(ColorError::InvalidValue(format!(
                "RGB tuple must have exactly 3 values, got {}",
                seq.len()
            )));
        }

        let mut components = [0u8; 3];
        for (i, val) in seq.iter().enumerate() {
            components[i] = val
                .as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| {
                    ColorError::InvalidValue(format!("RGB component {} must be 0-255", i))
                })?;
        }

        Ok(Color::Rgb(components[0], components[1], components[2]))
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            // #rgb -> #rrggbb
            3 => {
                let digit = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|d| d * 17)
                        .map_err(|_| invalid())
                };
                Ok(Color::Rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let pair =
                    |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(Color::Rgb(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => Err(invalid()),
        }
    }

    fn parse_named(name: &str) -> Result<Self, ColorError> {
        let lower = name.to_ascii_lowercase();

        if lower == "default" {
            return Ok(Color::Default);
        }

        let (table, base) = match lower
            .strip_prefix("light-")
            .or_else(|| lower.strip_prefix("bright_"))
            .or_else(|| lower.strip_prefix("bright-"))
        {
            Some(base) => (&BRIGHT, base),
            None => (&NORMAL, lower.as_str()),
        };

        NAMES
            .iter()
            .position(|n| *n == base)
            .map(|i| table[i])
            .ok_or_else(|| ColorError::UnknownName(name.to_string()))
    }

    /// Returns the SGR parameter fragment selecting this colour.
    ///
    /// `background` selects the background form (`4x`, `10x`, `48;...`)
    /// instead of the foreground form (`3x`, `9x`, `38;...`).
    pub fn fragment(&self, background: bool) -> String {
        let (base, bright_base, extended) = if background {
            (40, 100, 48)
        } else {
            (30, 90, 38)
        };

        if let Some(i) = NORMAL.iter().position(|c| c == self) {
            return (base + i).to_string();
        }
        if let Some(i) = BRIGHT.iter().position(|c| c == self) {
            return (bright_base + i).to_string();
        }

        match self {
            Color::Ansi256(n) => format!("{};5;{}", extended, n),
            Color::Rgb(r, g, b) => format!("{};2;{};{};{}", extended, r, g, b),
            // Default
            _ => (base + 9).to_string(),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Color::parse("black").unwrap(), Color::Black);
        assert_eq!(Color::parse("red").unwrap(), Color::Red);
        assert_eq!(Color::parse("cyan").unwrap(), Color::Cyan);
        assert_eq!(Color::parse("white").unwrap(), Color::White);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Color::parse("RED").unwrap(), Color::Red);
        assert_eq!(Color::parse("Light-Blue").unwrap(), Color::BrightBlue);
    }

    #[test]
    fn test_parse_bright_prefixes() {
        assert_eq!(Color::parse("light-red").unwrap(), Color::BrightRed);
        assert_eq!(Color::parse("bright_green").unwrap(), Color::BrightGreen);
        assert_eq!(Color::parse("bright-black").unwrap(), Color::BrightBlack);
    }

    #[test]
    fn test_parse_default() {
        assert_eq!(Color::parse("default").unwrap(), Color::Default);
    }

    #[test]
    fn test_parse_palette_index() {
        assert_eq!(Color::parse("0").unwrap(), Color::Ansi256(0));
        assert_eq!(Color::parse("255").unwrap(), Color::Ansi256(255));
        assert_eq!(
            Color::parse("256").unwrap_err(),
            ColorError::PaletteOutOfRange(256)
        );
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse("#ff6b35").unwrap(), Color::Rgb(255, 107, 53));
        assert_eq!(Color::parse("#FFF").unwrap(), Color::Rgb(255, 255, 255));
        assert_eq!(Color::parse("#f80").unwrap(), Color::Rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(Color::parse("#ff").is_err());
        assert!(Color::parse("#ffff").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("#éé").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Color::parse("purple").unwrap_err(),
            ColorError::UnknownName("purple".to_string())
        );
        assert!(Color::parse("light-default").is_err());
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn test_from_str() {
        let c: Color = "magenta".parse().unwrap();
        assert_eq!(c, Color::Magenta);
    }

    #[test]
    fn test_parse_value_shapes() {
        assert_eq!(
            Color::parse_value(&Value::String("blue".into())).unwrap(),
            Color::Blue
        );
        assert_eq!(
            Color::parse_value(&Value::Number(208.into())).unwrap(),
            Color::Ansi256(208)
        );
        let rgb = Value::Sequence(vec![
            Value::Number(1.into()),
            Value::Number(2.into()),
            Value::Number(3.into()),
        ]);
        assert_eq!(Color::parse_value(&rgb).unwrap(), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_parse_value_rejects_bad_shapes() {
        assert!(Color::parse_value(&Value::Bool(true)).is_err());
        assert!(Color::parse_value(&Value::Number(999.into())).is_err());
        let short = Value::Sequence(vec![Value::Number(1.into())]);
        assert!(Color::parse_value(&short).is_err());
        let big = Value::Sequence(vec![
            Value::Number(1.into()),
            Value::Number(2.into()),
            Value::Number(300.into()),
        ]);
        assert!(Color::parse_value(&big).is_err());
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    #[test]
    fn test_fragment_named() {
        assert_eq!(Color::Black.fragment(false), "30");
        assert_eq!(Color::White.fragment(false), "37");
        assert_eq!(Color::Red.fragment(true), "41");
    }

    #[test]
    fn test_fragment_bright() {
        assert_eq!(Color::BrightBlack.fragment(false), "90");
        assert_eq!(Color::BrightWhite.fragment(true), "107");
    }

    #[test]
    fn test_fragment_default() {
        assert_eq!(Color::Default.fragment(false), "39");
        assert_eq!(Color::Default.fragment(true), "49");
    }

    #[test]
    fn test_fragment_extended() {
        assert_eq!(Color::Ansi256(208).fragment(false), "38;5;208");
        assert_eq!(Color::Rgb(1, 2, 3).fragment(false), "38;2;1;2;3");
        assert_eq!(Color::Rgb(1, 2, 3).fragment(true), "48;2;1;2;3");
    }
}
