//! # crier-render - terminal text formatting
//!
//! The rendering collaborator of the `crier` console toolkit. Everything in
//! this crate is deterministic string formatting: structured data goes in,
//! terminal text comes out. Dispatching, argument handling, and deciding
//! *where* the text is written all live elsewhere.
//!
//! # Overview
//!
//! - [`Theme`]: named [`console::Style`] map with a standard default set
//! - [`show`]: message blocks, titles, sections, lists, panels, and tables
//! - [`pad`] / [`fit_to_width`]: display-width aware layout helpers
//! - [`term_width`]: terminal width with an 80-column fallback
//!
//! # Example
//!
//! ```rust
//! use crier_render::{show, Theme};
//!
//! let theme = Theme::default();
//! let text = show::success("deployed 3 services", &theme);
//! assert!(text.contains("[SUCCESS]"));
//! ```
//!
//! Styles are applied directly through [`console::Style`]; whether escape
//! codes actually reach the stream is the `console` crate's decision.

mod style;
mod util;

pub mod show;

pub use style::{Theme, DEFAULT_BLOCK_STYLES};
pub use util::{display_width, fit_to_width, pad, ucwords, Align};

// Re-exported so embedders can build themes without a direct console dep.
pub use console::Style;

/// Returns the terminal width in columns, or 80 when it cannot be detected.
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(show::DEFAULT_WIDTH)
}
