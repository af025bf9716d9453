//! Named style themes.
//!
//! A [`Theme`] maps style names (`"info"`, `"danger"`, ...) to
//! [`console::Style`] values. The block helpers in [`crate::show`] look up
//! styles by name so embedders can restyle output without touching the
//! formatting code.
//!
//! # Example
//!
//! ```rust
//! use console::Style;
//! use crier_render::Theme;
//!
//! let theme = Theme::new()
//!     .add("info", Style::new().green())
//!     .add("shout", Style::new().red().bold());
//! assert!(theme.has("shout"));
//! ```

use std::collections::HashMap;

use console::Style;
use once_cell::sync::Lazy;

/// Style names every default theme provides.
pub const DEFAULT_BLOCK_STYLES: &[&str] = &[
    "primary", "info", "notice", "success", "warning", "danger", "error", "comment",
];

static DEFAULT_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    let mut styles = HashMap::new();
    styles.insert("primary", Style::new().blue().bold());
    styles.insert("info", Style::new().green());
    styles.insert("notice", Style::new().cyan().bold());
    styles.insert("success", Style::new().green().bold());
    styles.insert("warning", Style::new().yellow());
    styles.insert("danger", Style::new().red());
    styles.insert("error", Style::new().white().on_red());
    styles.insert("comment", Style::new().yellow());
    styles
});

/// A named collection of terminal styles.
#[derive(Debug, Clone)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Creates an empty theme with no styles registered.
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Adds or replaces a named style, builder style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Looks up a style by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Returns `true` if the theme defines the named style.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns the registered style names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}

impl Default for Theme {
    /// The standard theme covering every name in [`DEFAULT_BLOCK_STYLES`].
    fn default() -> Self {
        Self {
            styles: DEFAULT_STYLES
                .iter()
                .map(|(name, style)| (name.to_string(), style.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_theme_is_empty() {
        let theme = Theme::new();
        assert_eq!(theme.names().count(), 0);
        assert!(!theme.has("info"));
    }

    #[test]
    fn test_default_theme_covers_block_styles() {
        let theme = Theme::default();
        for name in DEFAULT_BLOCK_STYLES {
            assert!(theme.has(name), "missing default style {name}");
        }
    }

    #[test]
    fn test_add_replaces_existing() {
        let theme = Theme::default().add("info", Style::new().magenta());
        assert!(theme.has("info"));
        // still exactly one "info" entry
        assert_eq!(theme.names().filter(|n| *n == "info").count(), 1);
    }

    #[test]
    fn test_get_unknown_returns_none() {
        let theme = Theme::default();
        assert!(theme.get("no-such-style").is_none());
    }
}
