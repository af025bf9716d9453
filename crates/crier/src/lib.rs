//! # crier - a console application toolkit
//!
//! Crier routes console invocations: register named commands and grouped
//! "controller" commands once at startup, then hand the raw invocation name
//! to the dispatcher and get a process-style exit status back. Structured
//! terminal output (blocks, panels, tables, listings) goes through the
//! write-only [`Output`] collaborator backed by the `crier-render` crate.
//!
//! # Core Concepts
//!
//! - [`Application`]: owns the registry, the invocation context, and dispatch
//! - [`Command`] / [`Controller`]: capabilities for type-backed handlers
//! - [`HandlerRef`] / [`ControllerRef`]: registered handler references,
//!   resolved to a closed variant at registration time
//! - [`DispatchTarget`]: what a raw name resolved to
//! - [`Input`] / [`Output`]: the opaque invocation context handed to handlers
//!
//! # Quick Start
//!
//! ```rust
//! use crier::{AppMeta, Application, STATUS_OK};
//!
//! let mut app = Application::new(AppMeta::new("shipit", "1.2.0"));
//!
//! // an independent command backed by a closure
//! app.command_fn("status", Some("show ship status"), |_input, output| {
//!     output.success("all systems go")?;
//!     Ok(STATUS_OK)
//! })?;
//!
//! let status = app.dispatch("status")?;
//! assert_eq!(status, STATUS_OK);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Dispatch Rules
//!
//! Given a raw name like `site/about` and the configured delimiter:
//!
//! 1. A registered command matching the *whole* raw name wins outright.
//! 2. Otherwise the name splits into `group/action` (a delimiter at
//!    position 0 is ignored) and the group is looked up as a controller.
//! 3. A miss is reported through [`Output`] - with "maybe you mean"
//!    suggestions at ≥ 45% character overlap, or the full listing - and
//!    dispatch returns [`STATUS_NOT_FOUND`].
//!
//! Registration happens once on the main thread before any dispatch; the
//! registry is read-only afterwards. A handler may itself exit the process.

mod app;
mod command;
mod context;
mod error;
mod name;
mod registry;
mod resolve;
mod similar;

pub use app::Application;
pub use command::{
    Command, Controller, ControllerRef, ExitStatus, HandlerRef, STATUS_NOT_FOUND, STATUS_OK,
};
pub use context::{AppMeta, Input, Output};
pub use error::Error;
pub use name::validate_name;
pub use registry::Registry;
pub use resolve::{classify, split_group_action, DispatchTarget};
pub use similar::{similar_chars, similar_percent};

// Theming lives in crier-render; re-exported so most embedders only need
// this crate.
pub use crier_render::{Style, Theme};
