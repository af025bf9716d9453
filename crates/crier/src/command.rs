//! Command and controller capabilities.
//!
//! Two kinds of dispatch target exist: *independent commands* (a name bound
//! directly to a handler) and *controller groups* (a name owning several
//! actions, invoked as `group/action`).
//!
//! A handler is either a type implementing [`Command`] or a plain callable
//! taking the input/output pair. The distinction is resolved once at
//! registration into the closed [`HandlerRef`] variant - dispatch never
//! inspects types.
//!
//! # Construction
//!
//! Instances are built fresh for every dispatch through a stored factory;
//! `Default` is the construction capability required at registration. Before
//! `run`, the dispatcher calls the setters (`set_name`, `set_app`, and for
//! controllers `set_delimiter`/`set_stand_alone`); the default
//! implementations discard the values, so only types that care need to
//! override them.
//!
//! # Example
//!
//! ```rust
//! use crier::{Command, ExitStatus, Input, Output, STATUS_OK};
//!
//! #[derive(Default)]
//! struct Hello;
//!
//! impl Command for Hello {
//!     fn declared_name() -> &'static str {
//!         "hello"
//!     }
//!
//!     fn run(&mut self, _input: &mut Input, output: &mut Output) -> anyhow::Result<ExitStatus> {
//!         output.success("hello from crier")?;
//!         Ok(STATUS_OK)
//!     }
//! }
//! ```

use std::fmt;

use anyhow::Result;

use crate::context::{AppMeta, Input, Output};

/// Status code a handler hands back to the embedding process.
pub type ExitStatus = i32;

/// Successful dispatch.
pub const STATUS_OK: ExitStatus = 0;

/// Dispatch found no matching command or controller.
pub const STATUS_NOT_FOUND: ExitStatus = 404;

/// Capability for type-backed independent commands.
pub trait Command: 'static {
    /// The name used when registering through the self-naming shortcut.
    fn declared_name() -> &'static str
    where
        Self: Sized;

    /// One-line description shown in command listings.
    fn declared_description() -> &'static str
    where
        Self: Sized,
    {
        ""
    }

    /// Receives the name the command was dispatched under, before `run`.
    fn set_name(&mut self, _name: &str) {}

    /// Receives the owning application's metadata, before `run`.
    fn set_app(&mut self, _app: AppMeta) {}

    /// Executes the command.
    fn run(&mut self, input: &mut Input, output: &mut Output) -> Result<ExitStatus>;
}

/// Capability for controller groups.
pub trait Controller: 'static {
    /// The group name used when registering through the self-naming shortcut.
    fn declared_name() -> &'static str
    where
        Self: Sized;

    /// One-line description shown in command listings.
    fn declared_description() -> &'static str
    where
        Self: Sized,
    {
        ""
    }

    /// Receives the group name the controller was dispatched under.
    fn set_name(&mut self, _name: &str) {}

    /// Receives the owning application's metadata, before `run`.
    fn set_app(&mut self, _app: AppMeta) {}

    /// Receives the group/action delimiter in effect for this dispatch.
    fn set_delimiter(&mut self, _delimiter: char) {}

    /// Set when the controller is invoked directly rather than via dispatch.
    fn set_stand_alone(&mut self, _stand_alone: bool) {}

    /// Executes one action; the empty string selects the default action.
    fn run(&mut self, action: &str, input: &mut Input, output: &mut Output)
        -> Result<ExitStatus>;
}

type CommandFactory = Box<dyn Fn() -> Box<dyn Command>>;
type CommandCallback = Box<dyn FnMut(&mut Input, &mut Output) -> Result<ExitStatus>>;

/// A registered handler: either a command type or a callable.
///
/// The variant is fixed at registration time; dispatch only matches on it.
pub enum HandlerRef {
    /// Builds a fresh [`Command`] instance per dispatch.
    Command(CommandFactory),
    /// A callable invoked with the input/output pair.
    Callback(CommandCallback),
}

impl HandlerRef {
    /// A handler backed by a command type; one instance per dispatch.
    pub fn of<C: Command + Default>() -> Self {
        HandlerRef::Command(Box::new(|| Box::new(C::default())))
    }

    /// A handler from a callable taking `(&mut Input, &mut Output)`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(&mut Input, &mut Output) -> Result<ExitStatus> + 'static,
    {
        HandlerRef::Callback(Box::new(f))
    }

    /// A handler from a callable taking no arguments.
    pub fn from_simple_fn<F>(mut f: F) -> Self
    where
        F: FnMut() -> Result<ExitStatus> + 'static,
    {
        HandlerRef::Callback(Box::new(move |_input, _output| f()))
    }
}

impl fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerRef::Command(_) => f.write_str("HandlerRef::Command(..)"),
            HandlerRef::Callback(_) => f.write_str("HandlerRef::Callback(..)"),
        }
    }
}

/// A registered controller group: builds one instance per dispatch.
pub struct ControllerRef {
    factory: Box<dyn Fn() -> Box<dyn Controller>>,
}

impl ControllerRef {
    /// A controller reference backed by a controller type.
    pub fn of<C: Controller + Default>() -> Self {
        Self {
            factory: Box::new(|| Box::new(C::default())),
        }
    }

    pub(crate) fn build(&self) -> Box<dyn Controller> {
        (self.factory)()
    }
}

impl fmt::Debug for ControllerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ControllerRef(..)")
    }
}
