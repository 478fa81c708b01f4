//! # cellstyle - Score-Driven Cell Styles
//!
//! `cellstyle` maps a numeric match score to the visual style of a data-grid
//! cell: text color, background color and font weight. The mapping is a pure
//! function with five fixed tiers; everything else in the crate exists to hand
//! that function to a grid cleanly.
//!
//! ## Core Concepts
//!
//! - [`style_for`]: the score-to-style function
//! - [`CellStyle`]: the output record, serialized as `color` /
//!   `backgroundColor` / `fontWeight`
//! - [`MatchTier`]: the five score ranges and their thresholds
//! - [`Palette`]: tier-to-style table, replaceable from YAML
//! - [`StyleFunctions`]: named callback map passed to a grid integration
//!
//! ## Quick Start
//!
//! ```rust
//! use cellstyle::{style_for, CellStyle, Color};
//!
//! let top = style_for(97.0);
//! assert_eq!(
//!     top,
//!     CellStyle::new()
//!         .fg(Color::WHITE)
//!         .bg(Color::Rgb(0x72, 0xBF, 0x78))
//!         .bold()
//! );
//!
//! // Boundaries belong to the higher tier.
//! assert_eq!(style_for(80.0), CellStyle::new().bg(Color::Rgb(0xA0, 0xD6, 0x83)));
//!
//! // Below 50 there is no styling at all.
//! assert!(style_for(12.0).is_empty());
//! ```
//!
//! ## Wiring a Grid
//!
//! The grid integration receives the functions it may call, instead of
//! discovering them in a global namespace:
//!
//! ```rust
//! use cellstyle::{StyleFunctions, RECOMMENDATION_MATCH_STYLE};
//!
//! let functions = StyleFunctions::with_defaults();
//!
//! let column = serde_json::json!({
//!     "headerName": "Recommendation Match",
//!     "field": "similarity_percent",
//!     "cellStyle": functions.binding(RECOMMENDATION_MATCH_STYLE).unwrap(),
//! });
//!
//! let cell = functions
//!     .apply_value(RECOMMENDATION_MATCH_STYLE, &serde_json::json!(88))
//!     .unwrap();
//! assert_eq!(
//!     serde_json::to_value(cell).unwrap(),
//!     serde_json::json!({ "backgroundColor": "#A0D683" })
//! );
//! # let _ = column;
//! ```
//!
//! ## Terminal Preview
//!
//! [`CellStyle::paint_cell`] renders a styled cell with ANSI codes, which is
//! handy for checking a palette without a browser:
//!
//! ```rust
//! use cellstyle::{format_percent, style_for};
//!
//! let cell = style_for(55.0).paint_cell(&format_percent(55.0), 6);
//! assert_eq!(console::strip_ansi_codes(&cell), "   55%");
//! ```

mod color;
mod error;
mod registry;
mod score;
mod style;
mod tier;

// Error type
pub use error::{Result, StyleError};

// Colors
pub use color::{rgb_to_ansi256, Color, NamedColor};

// Styles
pub use style::{CellStyle, FontWeight};

// Tiers and palettes
pub use tier::{
    style_for, MatchTier, Palette, LIGHT_GREEN, MEDIUM_GREEN, PALE_YELLOW, STRONG_GREEN,
};

// Score helpers
pub use score::{format_percent, score_from_value, similarity_percent, style_for_value};

// Style function map
pub use registry::{StyleFn, StyleFunctions, RECOMMENDATION_MATCH_STYLE};
