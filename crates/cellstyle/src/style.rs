//! Cell style values.
//!
//! A [`CellStyle`] is a small record of optional visual attributes. The host
//! grid receives it as a mapping from style-property name to value:
//!
//! ```rust
//! use cellstyle::{CellStyle, Color};
//!
//! let style = CellStyle::new()
//!     .fg(Color::WHITE)
//!     .bg(Color::Rgb(0x72, 0xBF, 0x78))
//!     .bold();
//!
//! let json = serde_json::to_value(&style).unwrap();
//! assert_eq!(
//!     json,
//!     serde_json::json!({
//!         "color": "white",
//!         "backgroundColor": "#72BF78",
//!         "fontWeight": "bold"
//!     })
//! );
//! ```
//!
//! Unset attributes are omitted, so [`CellStyle::default`] serializes to `{}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::color::Color;

/// Font emphasis for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    /// The CSS keyword for this weight.
    pub fn keyword(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Visual attributes applied to a rendered grid cell.
///
/// All fields are optional; a style with no fields set means
/// "no special styling".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    /// Text color, serialized as `color`.
    #[serde(rename = "color", default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
}

impl CellStyle {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text color.
    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Sets the background color.
    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the font weight to bold.
    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.text_color.is_none() && self.background_color.is_none() && self.font_weight.is_none()
    }

    /// Returns the style as CSS property name/value pairs.
    ///
    /// Keys match the serialized form: `color`, `backgroundColor`, `fontWeight`.
    pub fn to_properties(&self) -> BTreeMap<&'static str, String> {
        let mut props = BTreeMap::new();
        if let Some(color) = self.text_color {
            props.insert("color", color.to_string());
        }
        if let Some(color) = self.background_color {
            props.insert("backgroundColor", color.to_string());
        }
        if let Some(weight) = self.font_weight {
            props.insert("fontWeight", weight.keyword().to_string());
        }
        props
    }

    /// Converts to a `console::Style` for previewing cells in a terminal.
    pub fn to_console_style(&self) -> console::Style {
        let mut style = console::Style::new();
        if let Some(color) = self.text_color {
            style = style.fg(color.to_console_color());
        }
        if let Some(color) = self.background_color {
            style = style.bg(color.to_console_color());
        }
        if self.font_weight == Some(FontWeight::Bold) {
            style = style.bold();
        }
        style
    }

    /// Renders `text` as a terminal cell of the given display width.
    ///
    /// The text is right-aligned, and padding is part of the styled span so
    /// the background fills the whole cell. Text wider than `width` is
    /// left as is.
    pub fn paint_cell(&self, text: &str, width: usize) -> String {
        let pad = width.saturating_sub(text.width());
        let padded = format!("{}{}", " ".repeat(pad), text);
        self.to_console_style().apply_to(padded).to_string()
    }
}
