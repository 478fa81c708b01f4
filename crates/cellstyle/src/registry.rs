//! Named cell-style functions handed to a grid integration.
//!
//! A grid that styles cells through callbacks needs to find them by name.
//! Rather than attaching functions to a shared global namespace, the
//! application builds a [`StyleFunctions`] map and passes it to the
//! integration layer when configuring the grid.
//!
//! ```rust
//! use cellstyle::{CellStyle, Color, StyleFunctions, RECOMMENDATION_MATCH_STYLE};
//!
//! let functions = StyleFunctions::with_defaults()
//!     .add("negativeRed", |value: f64| {
//!         if value < 0.0 {
//!             CellStyle::new().fg(Color::parse("red").unwrap())
//!         } else {
//!             CellStyle::new()
//!         }
//!     });
//!
//! let style = functions.apply(RECOMMENDATION_MATCH_STYLE, 96.0).unwrap();
//! assert!(style.font_weight.is_some());
//!
//! assert_eq!(
//!     functions.binding("negativeRed").unwrap(),
//!     serde_json::json!({ "function": "negativeRed(params.value)" })
//! );
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Result, StyleError};
use crate::score::score_from_value;
use crate::style::CellStyle;
use crate::tier::style_for;

/// Well-known name under which [`style_for`] is registered by
/// [`StyleFunctions::with_defaults`].
pub const RECOMMENDATION_MATCH_STYLE: &str = "recommendationMatchStyle";

/// A shareable cell-style callback.
pub type StyleFn = Arc<dyn Fn(f64) -> CellStyle + Send + Sync>;

/// A map from function name to cell-style callback.
///
/// Cloning is cheap: callbacks are reference counted.
#[derive(Clone, Default)]
pub struct StyleFunctions {
    functions: HashMap<String, StyleFn>,
}

impl StyleFunctions {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map holding [`style_for`] under [`RECOMMENDATION_MATCH_STYLE`].
    pub fn with_defaults() -> Self {
        Self::new().add(RECOMMENDATION_MATCH_STYLE, style_for)
    }

    /// Registers a function, returning `self` for chaining.
    ///
    /// A function already registered under `name` is replaced.
    pub fn add<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(f64) -> CellStyle + Send + Sync + 'static,
    {
        self.insert(name, f);
        self
    }

    /// Registers a function in place. Returns `true` if it replaced one.
    pub fn insert<F>(&mut self, name: impl Into<String>, f: F) -> bool
    where
        F: Fn(f64) -> CellStyle + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(name = %name, "registering cell style function");
        self.functions.insert(name, Arc::new(f)).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&StyleFn> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    fn lookup(&self, name: &str) -> Result<&StyleFn> {
        self.functions.get(name).ok_or_else(|| {
            debug!(name, "cell style function not found");
            StyleError::UnknownFunction(name.to_string())
        })
    }

    /// Calls the function registered under `name` with a score.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownFunction`] if nothing is registered
    /// under `name`.
    pub fn apply(&self, name: &str, score: f64) -> Result<CellStyle> {
        let f = self.lookup(name)?;
        trace!(name, score, "applying cell style function");
        Ok(f(score))
    }

    /// Calls the function registered under `name` with a raw cell value.
    ///
    /// Values that carry no score (see [`score_from_value`]) get the empty
    /// style without calling the function.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownFunction`] if nothing is registered
    /// under `name`, whatever the value.
    pub fn apply_value(&self, name: &str, value: &Value) -> Result<CellStyle> {
        let f = self.lookup(name)?;
        Ok(score_from_value(value).map(|score| f(score)).unwrap_or_default())
    }

    /// Builds the column-definition fragment that binds a column's cell
    /// style to the function registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::UnknownFunction`] if nothing is registered
    /// under `name`.
    pub fn binding(&self, name: &str) -> Result<Value> {
        self.lookup(name)?;
        Ok(serde_json::json!({ "function": format!("{}(params.value)", name) }))
    }
}

impl fmt::Debug for StyleFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleFunctions")
            .field("names", &self.names())
            .finish()
    }
}
