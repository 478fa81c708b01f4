//! CSS color values for cell styles.
//!
//! Supports two formats:
//!
//! - Named colors: `white`, `black`, `gray`/`grey`, `red`, `green`, `blue`, `yellow`
//! - RGB hex: `"#72BF78"` or `"#fff"` (3 or 6 digit, case-insensitive)
//!
//! Colors format back to their CSS form, which is what the host grid's
//! rendering layer receives. Hex colors always format as upper-case
//! `#RRGGBB`.
//!
//! # Example
//!
//! ```rust
//! use cellstyle::Color;
//!
//! let green: Color = "#72bf78".parse().unwrap();
//! assert_eq!(green.to_string(), "#72BF78");
//!
//! let white = Color::parse("White").unwrap();
//! assert_eq!(white.to_string(), "white");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StyleError;

/// CSS color keywords understood by [`Color::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    White,
    Gray,
    Red,
    Green,
    Blue,
    Yellow,
}

impl NamedColor {
    /// The CSS keyword for this color.
    pub fn keyword(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::White => "white",
            NamedColor::Gray => "gray",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Yellow => "yellow",
        }
    }

    /// RGB value as defined by CSS for this keyword.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0, 0, 0),
            NamedColor::White => (255, 255, 255),
            NamedColor::Gray => (128, 128, 128),
            NamedColor::Red => (255, 0, 0),
            NamedColor::Green => (0, 128, 0),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Yellow => (255, 255, 0),
        }
    }

    fn to_console_color(self) -> console::Color {
        match self {
            NamedColor::Black => console::Color::Black,
            // console has no gray in its base palette
            NamedColor::White | NamedColor::Gray => console::Color::White,
            NamedColor::Red => console::Color::Red,
            NamedColor::Green => console::Color::Green,
            NamedColor::Blue => console::Color::Blue,
            NamedColor::Yellow => console::Color::Yellow,
        }
    }
}

/// A color usable as a cell's text or background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// CSS color keyword.
    Named(NamedColor),
    /// True color RGB, formatted as `#RRGGBB`.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const WHITE: Color = Color::Named(NamedColor::White);

    /// Parses a color from a string value.
    ///
    /// Supports:
    /// - Named colors: `white`, `black`, `gray`, etc.
    /// - Hex codes: `#72BF78` or `#fff`
    pub fn parse(s: &str) -> Result<Self, StyleError> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| StyleError::InvalidColor {
                value: s.to_string(),
                reason: "hex colors must be 3 or 6 hex digits".to_string(),
            });
        }

        Self::parse_named(s)
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let digit = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Some(Color::Rgb(
                digit(0..1)? * 17,
                digit(1..2)? * 17,
                digit(2..3)? * 17,
            )),
            6 => Some(Color::Rgb(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
            _ => None,
        }
    }

    fn parse_named(name: &str) -> Result<Self, StyleError> {
        let named = match name.to_lowercase().as_str() {
            "black" => NamedColor::Black,
            "white" => NamedColor::White,
            "gray" | "grey" => NamedColor::Gray,
            "red" => NamedColor::Red,
            "green" => NamedColor::Green,
            "blue" => NamedColor::Blue,
            "yellow" => NamedColor::Yellow,
            _ => {
                return Err(StyleError::InvalidColor {
                    value: name.to_string(),
                    reason: "unknown color name".to_string(),
                })
            }
        };
        Ok(Color::Named(named))
    }

    /// The RGB triplet for this color.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Named(named) => named.rgb(),
            Color::Rgb(r, g, b) => (*r, *g, *b),
        }
    }

    /// Converts this color to a `console::Color` for terminal previews.
    ///
    /// Named colors map to the matching ANSI color. RGB colors are mapped
    /// to the nearest entry in the 256-color palette.
    pub fn to_console_color(&self) -> console::Color {
        match self {
            Color::Named(named) => named.to_console_color(),
            Color::Rgb(r, g, b) => console::Color::Color256(rgb_to_ansi256((*r, *g, *b))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.keyword()),
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use cellstyle::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
