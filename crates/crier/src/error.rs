//! Error types for registration and direct invocation.
//!
//! Registration failures signal programmer or configuration mistakes and are
//! raised synchronously from the registration call; nothing is retried or
//! deferred. A missed dispatch is deliberately *not* represented here - the
//! dispatcher reports it through the output collaborator and returns
//! [`crate::STATUS_NOT_FOUND`].
//!
//! The original console toolkits this models also failed at runtime when a
//! registered handler turned out not to implement the command capability.
//! Those cases (`InvalidHandlerType` and friends) have no variants: handler
//! and controller references are closed enums built through trait-bound
//! constructors, so an ill-typed registration does not compile.

use thiserror::Error;

/// Failures from registration and the direct `run_command`/`run_action` API.
#[derive(Debug, Error)]
pub enum Error {
    /// The name is empty or does not match the allowed grammar.
    ///
    /// `is_group` records which grammar variant rejected it.
    #[error("invalid name '{name}': {reason}")]
    InvalidName {
        name: String,
        is_group: bool,
        reason: String,
    },

    /// An independent command was registered twice under the same name.
    #[error("command '{0}' has already been registered")]
    DuplicateCommand(String),

    /// Direct invocation of a command name that was never registered.
    #[error("the independent command '{0}' does not exist")]
    UnknownCommand(String),

    /// Direct invocation of a controller group that was never registered.
    #[error("the controller group '{0}' does not exist")]
    UnknownController(String),
}
