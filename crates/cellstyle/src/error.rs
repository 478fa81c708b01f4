//! Error types for the cellstyle crate.
//!
//! [`style_for`](crate::style_for) itself never fails. These errors come from
//! the surrounding API: color parsing, palette loading and style-function
//! lookup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when building palettes or resolving style functions.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A color string could not be parsed.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// No style function is registered under the requested name.
    #[error("no cell style function named '{0}'")]
    UnknownFunction(String),

    /// A palette document names a tier that does not exist.
    #[error("unknown tier '{0}' (expected one of: excellent, strong, good, fair, weak)")]
    UnknownTier(String),

    /// A palette entry uses an attribute other than `fg`, `bg` or `bold`.
    #[error("unknown attribute '{attribute}' in tier '{tier}'")]
    UnknownAttribute { tier: String, attribute: String },

    /// A palette entry has the wrong structure.
    #[error("invalid definition for tier '{tier}': {message}")]
    InvalidDefinition { tier: String, message: String },

    /// YAML parse error.
    #[error("failed to parse palette{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// I/O error while reading a palette file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result type for cellstyle operations.
pub type Result<T> = std::result::Result<T, StyleError>;
