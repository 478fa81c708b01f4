//! Score tiers and the palette that styles them.
//!
//! Scores fall into five mutually exclusive tiers. Thresholds are inclusive
//! lower bounds checked from the highest tier down, so a score sitting exactly
//! on a boundary belongs to the higher tier:
//!
//! | Score        | Tier        | Default style                                |
//! |--------------|-------------|----------------------------------------------|
//! | `>= 95`      | `Excellent` | white text on `#72BF78`, bold                |
//! | `[80, 95)`   | `Strong`    | background `#A0D683`                         |
//! | `[65, 80)`   | `Good`      | background `#D3EE98`                         |
//! | `[50, 65)`   | `Fair`      | background `#FEFF9F`                         |
//! | `< 50`       | `Weak`      | no styling                                   |
//!
//! No rounding or clamping is applied. NaN fails every comparison and lands
//! in `Weak`.
//!
//! ## Custom Palettes
//!
//! The thresholds are fixed, but the style of each tier can be replaced,
//! either programmatically or from YAML:
//!
//! ```rust
//! use cellstyle::{MatchTier, Palette};
//!
//! let palette = Palette::from_yaml(r##"
//! fair:
//!   bg: "#FFE8A3"
//! weak:
//!   fg: gray
//! "##).unwrap();
//!
//! assert_eq!(palette.style_for(55.0).to_properties()["backgroundColor"], "#FFE8A3");
//! assert_eq!(palette.style(MatchTier::Strong), &MatchTier::Strong.default_style());
//! ```
//!
//! Hex colors must be quoted in YAML, since `#` otherwise starts a comment.

use std::path::Path;

use tracing::debug;

use crate::color::Color;
use crate::error::{Result, StyleError};
use crate::style::CellStyle;

pub const STRONG_GREEN: Color = Color::Rgb(0x72, 0xBF, 0x78);
pub const MEDIUM_GREEN: Color = Color::Rgb(0xA0, 0xD6, 0x83);
pub const LIGHT_GREEN: Color = Color::Rgb(0xD3, 0xEE, 0x98);
pub const PALE_YELLOW: Color = Color::Rgb(0xFE, 0xFF, 0x9F);

/// One of the five score ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchTier {
    Excellent,
    Strong,
    Good,
    Fair,
    Weak,
}

impl MatchTier {
    /// All tiers, from highest to lowest.
    pub const ALL: [MatchTier; 5] = [
        MatchTier::Excellent,
        MatchTier::Strong,
        MatchTier::Good,
        MatchTier::Fair,
        MatchTier::Weak,
    ];

    /// Classifies a score. First match wins, comparisons are `>=`.
    pub fn for_score(score: f64) -> MatchTier {
        if score >= 95.0 {
            MatchTier::Excellent
        } else if score >= 80.0 {
            MatchTier::Strong
        } else if score >= 65.0 {
            MatchTier::Good
        } else if score >= 50.0 {
            MatchTier::Fair
        } else {
            MatchTier::Weak
        }
    }

    /// Inclusive lower bound of this tier. `Weak` has none.
    pub fn threshold(self) -> Option<f64> {
        match self {
            MatchTier::Excellent => Some(95.0),
            MatchTier::Strong => Some(80.0),
            MatchTier::Good => Some(65.0),
            MatchTier::Fair => Some(50.0),
            MatchTier::Weak => None,
        }
    }

    /// Lower-case name used in palette files.
    pub fn name(self) -> &'static str {
        match self {
            MatchTier::Excellent => "excellent",
            MatchTier::Strong => "strong",
            MatchTier::Good => "good",
            MatchTier::Fair => "fair",
            MatchTier::Weak => "weak",
        }
    }

    /// Looks a tier up by its palette name (case-insensitive).
    pub fn from_name(name: &str) -> Option<MatchTier> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|tier| tier.name() == name)
    }

    /// The built-in style for this tier.
    pub fn default_style(self) -> CellStyle {
        match self {
            MatchTier::Excellent => CellStyle::new().fg(Color::WHITE).bg(STRONG_GREEN).bold(),
            MatchTier::Strong => CellStyle::new().bg(MEDIUM_GREEN),
            MatchTier::Good => CellStyle::new().bg(LIGHT_GREEN),
            MatchTier::Fair => CellStyle::new().bg(PALE_YELLOW),
            MatchTier::Weak => CellStyle::new(),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Maps a match score to the style of its cell.
///
/// Total over `f64`: negative scores give the empty style, scores far above
/// 100 give the top tier.
///
/// ```rust
/// use cellstyle::{style_for, CellStyle};
///
/// assert!(style_for(95.0).font_weight.is_some());
/// assert_eq!(style_for(49.9), CellStyle::default());
/// ```
pub fn style_for(score: f64) -> CellStyle {
    MatchTier::for_score(score).default_style()
}

/// A style for every tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: [CellStyle; 5],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            styles: MatchTier::ALL.map(MatchTier::default_style),
        }
    }
}

impl Palette {
    /// Creates the built-in palette.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self, tier: MatchTier) -> &CellStyle {
        &self.styles[tier.index()]
    }

    /// Replaces the style of a tier in place.
    pub fn set(&mut self, tier: MatchTier, style: CellStyle) {
        self.styles[tier.index()] = style;
    }

    /// Replaces the style of a tier, returning `self` for chaining.
    pub fn with(mut self, tier: MatchTier, style: CellStyle) -> Self {
        self.set(tier, style);
        self
    }

    /// Styles a score with this palette.
    pub fn style_for(&self, score: f64) -> CellStyle {
        *self.style(MatchTier::for_score(score))
    }

    /// Loads a palette from YAML, starting from the built-in styles.
    ///
    /// The document is a mapping from tier name to a style definition with
    /// optional `fg`, `bg` and `bold` keys. A listed tier replaces the
    /// built-in style for that tier entirely; an empty entry (`weak:`)
    /// means no styling. Tiers not listed keep the built-in style.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Parse`] for malformed YAML,
    /// [`StyleError::UnknownTier`] / [`StyleError::UnknownAttribute`] for
    /// unexpected keys, and [`StyleError::InvalidColor`] for bad colors.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_palette(yaml, None)
    }

    /// Loads a palette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`from_yaml`](Palette::from_yaml) with the path attached
    /// to parse errors.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        parse_palette(&content, Some(path))
    }
}

fn parse_palette(yaml: &str, path: Option<&Path>) -> Result<Palette> {
    let root: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| StyleError::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })?;

    let mut palette = Palette::default();

    let mapping = match root {
        // An empty document keeps every built-in style.
        serde_yaml::Value::Null => return Ok(palette),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => {
            return Err(StyleError::Parse {
                path: path.map(Path::to_path_buf),
                message: "expected a mapping of tier names to styles".to_string(),
            })
        }
    };

    for (key, value) in &mapping {
        let name = key.as_str().ok_or_else(|| StyleError::Parse {
            path: path.map(Path::to_path_buf),
            message: format!("tier names must be strings, got {:?}", key),
        })?;
        let tier =
            MatchTier::from_name(name).ok_or_else(|| StyleError::UnknownTier(name.to_string()))?;
        palette.set(tier, parse_tier_style(tier, value)?);
    }

    debug!(
        overrides = mapping.len(),
        path = ?path,
        "loaded cell style palette"
    );
    Ok(palette)
}

fn parse_tier_style(tier: MatchTier, value: &serde_yaml::Value) -> Result<CellStyle> {
    let mapping = match value {
        serde_yaml::Value::Null => return Ok(CellStyle::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        other => {
            return Err(StyleError::InvalidDefinition {
                tier: tier.name().to_string(),
                message: format!("expected a mapping, got {:?}", other),
            })
        }
    };

    let mut style = CellStyle::new();
    for (key, value) in mapping {
        match key.as_str() {
            Some("fg") => style.text_color = Some(parse_color(tier, value)?),
            Some("bg") => style.background_color = Some(parse_color(tier, value)?),
            Some("bold") => {
                let bold = value.as_bool().ok_or_else(|| StyleError::InvalidDefinition {
                    tier: tier.name().to_string(),
                    message: "'bold' must be true or false".to_string(),
                })?;
                if bold {
                    style = style.bold();
                }
            }
            other => {
                return Err(StyleError::UnknownAttribute {
                    tier: tier.name().to_string(),
                    attribute: other.map_or_else(|| format!("{:?}", key), str::to_string),
                })
            }
        }
    }
    Ok(style)
}

fn parse_color(tier: MatchTier, value: &serde_yaml::Value) -> Result<Color> {
    let s = value.as_str().ok_or_else(|| StyleError::InvalidDefinition {
        tier: tier.name().to_string(),
        message: format!("colors must be strings, got {:?}", value),
    })?;
    Color::parse(s)
}
