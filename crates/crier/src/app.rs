//! The console application: registration surface and dispatch.
//!
//! An [`Application`] owns the [`Registry`], the invocation context, and the
//! dispatch logic. The life of an app has two phases: a registration phase
//! during startup (any registration error is a programmer mistake and fails
//! the call immediately), then a dispatch phase where the registry is only
//! read.
//!
//! # Example
//!
//! ```rust
//! use crier::{AppMeta, Application, STATUS_OK};
//!
//! let mut app = Application::new(AppMeta::new("greeter", "1.0.0"));
//! app.command_simple_fn("hello", Some("say hello"), || {
//!     println!("hello!");
//!     Ok(STATUS_OK)
//! })?;
//!
//! let status = app.dispatch("hello")?;
//! assert_eq!(status, STATUS_OK);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Dispatch resolution order: the raw name is first checked against the
//! registered commands; only then is it split into a `group/action` pair
//! and checked against the controller groups. A miss is not an error - it
//! is reported through the output collaborator (with "maybe you mean"
//! suggestions or the full listing) and surfaces as
//! [`STATUS_NOT_FOUND`](crate::STATUS_NOT_FOUND).

use std::io;

use anyhow::Result;

use crate::command::{
    Command, Controller, ControllerRef, ExitStatus, HandlerRef, STATUS_NOT_FOUND, STATUS_OK,
};
use crate::context::{AppMeta, Input, Output};
use crate::error::Error;
use crate::registry::Registry;
use crate::resolve::{classify, DispatchTarget};
use crate::similar::similar_percent;

/// Names at or above this character-overlap percentage are suggested.
const SUGGEST_THRESHOLD: u32 = 45;

type NotFoundHook = Box<dyn FnMut(&str, &mut Output) -> bool>;

/// A console application: registry, context, and dispatcher in one place.
///
/// There is no global instance; embedders construct one and thread it
/// through explicitly.
pub struct Application {
    meta: AppMeta,
    registry: Registry,
    input: Input,
    output: Output,
    not_found_hook: Option<NotFoundHook>,
}

impl Application {
    /// An application reading the process arguments and writing to stdout.
    pub fn new(meta: AppMeta) -> Self {
        Self::with_context(meta, Input::from_env(), Output::stdout())
    }

    /// An application with an explicit invocation context.
    pub fn with_context(meta: AppMeta, input: Input, output: Output) -> Self {
        Self {
            meta,
            registry: Registry::new(),
            input,
            output,
            not_found_hook: None,
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a type-backed command under an explicit name.
    ///
    /// With no explicit description, the type's declared description is used
    /// when it has one.
    pub fn command<C: Command + Default>(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<&mut Self, Error> {
        let declared = C::declared_description();
        let description = description.or(if declared.is_empty() {
            None
        } else {
            Some(declared)
        });
        self.registry
            .register_command(name, HandlerRef::of::<C>(), description)?;
        Ok(self)
    }

    /// Registers a type-backed command under its own declared name.
    pub fn add_command<C: Command + Default>(&mut self) -> Result<&mut Self, Error> {
        self.command::<C>(C::declared_name(), None)
    }

    /// Registers a callback command invoked with the input/output pair.
    pub fn command_fn<F>(
        &mut self,
        name: &str,
        description: Option<&str>,
        handler: F,
    ) -> Result<&mut Self, Error>
    where
        F: FnMut(&mut Input, &mut Output) -> Result<ExitStatus> + 'static,
    {
        self.registry
            .register_command(name, HandlerRef::from_fn(handler), description)?;
        Ok(self)
    }

    /// Registers a callback command that takes no arguments.
    pub fn command_simple_fn<F>(
        &mut self,
        name: &str,
        description: Option<&str>,
        handler: F,
    ) -> Result<&mut Self, Error>
    where
        F: FnMut() -> Result<ExitStatus> + 'static,
    {
        self.registry
            .register_command(name, HandlerRef::from_simple_fn(handler), description)?;
        Ok(self)
    }

    /// Bulk-registers commands from `(name, handler)` pairs.
    pub fn commands<I>(&mut self, pairs: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = (String, HandlerRef)>,
    {
        for (name, handler) in pairs {
            self.registry.register_command(&name, handler, None)?;
        }
        Ok(self)
    }

    /// Registers a controller group under an explicit name.
    pub fn controller<C: Controller + Default>(&mut self, name: &str) -> Result<&mut Self, Error> {
        let declared = C::declared_description();
        let description = if declared.is_empty() {
            None
        } else {
            Some(declared)
        };
        self.registry
            .register_controller(name, ControllerRef::of::<C>(), description)?;
        Ok(self)
    }

    /// Registers a controller group under its own declared name.
    pub fn add_group<C: Controller + Default>(&mut self) -> Result<&mut Self, Error> {
        self.controller::<C>(C::declared_name())
    }

    /// Bulk-registers controller groups from `(name, ref)` pairs.
    pub fn controllers<I>(&mut self, pairs: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = (String, ControllerRef)>,
    {
        for (name, controller) in pairs {
            self.registry.register_controller(&name, controller, None)?;
        }
        Ok(self)
    }

    /// Installs the not-found hook.
    ///
    /// On a missed dispatch the hook runs first with the probed name; when
    /// it returns `true` the miss counts as handled and nothing further is
    /// reported.
    pub fn on_not_found<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(&str, &mut Output) -> bool + 'static,
    {
        self.not_found_hook = Some(Box::new(hook));
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The application metadata.
    pub fn meta(&self) -> &AppMeta {
        &self.meta
    }

    /// The command/controller registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The raw invocation input.
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// The output collaborator, for direct writes outside a handler.
    pub fn output_mut(&mut self) -> &mut Output {
        &mut self.output
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatches the command word found in the input.
    ///
    /// An empty command word renders the command listing and succeeds.
    pub fn run(&mut self) -> Result<ExitStatus> {
        let command = self.input.command().to_string();
        if command.is_empty() {
            self.show_command_list()?;
            return Ok(STATUS_OK);
        }
        self.dispatch(&command)
    }

    /// Resolves a raw invocation name and invokes the matching handler.
    ///
    /// Returns the handler's status, or [`STATUS_NOT_FOUND`] after reporting
    /// a miss. Handler errors propagate unchanged.
    pub fn dispatch(&mut self, raw: &str) -> Result<ExitStatus> {
        match classify(&self.registry, raw, self.meta.delimiter) {
            DispatchTarget::Command(name) => self.run_command(&name),
            DispatchTarget::ControllerAction { group, action } => {
                self.run_action(&group, &action, false)
            }
            DispatchTarget::NotFound { probed } => self.report_not_found(&probed),
        }
    }

    /// Invokes an independent command by name.
    ///
    /// Fails with [`Error::UnknownCommand`] when the name is not registered.
    pub fn run_command(&mut self, name: &str) -> Result<ExitStatus> {
        match self.registry.command_mut(name) {
            None => Err(Error::UnknownCommand(name.to_string()).into()),
            Some(HandlerRef::Callback(callback)) => callback(&mut self.input, &mut self.output),
            Some(HandlerRef::Command(factory)) => {
                let mut command = factory();
                command.set_name(name);
                command.set_app(self.meta.clone());
                command.run(&mut self.input, &mut self.output)
            }
        }
    }

    /// Invokes a controller action directly.
    ///
    /// Fails with [`Error::UnknownController`] when the group is not
    /// registered. `stand_alone` marks invocations that bypassed dispatch.
    pub fn run_action(
        &mut self,
        group: &str,
        action: &str,
        stand_alone: bool,
    ) -> Result<ExitStatus> {
        let controller_ref = self
            .registry
            .controller(group)
            .ok_or_else(|| Error::UnknownController(group.to_string()))?;
        let mut controller = controller_ref.build();
        controller.set_name(group);
        controller.set_app(self.meta.clone());
        controller.set_delimiter(self.meta.delimiter);
        controller.set_stand_alone(stand_alone);
        controller.run(action, &mut self.input, &mut self.output)
    }

    fn report_not_found(&mut self, probed: &str) -> Result<ExitStatus> {
        if let Some(hook) = self.not_found_hook.as_mut() {
            if hook(probed, &mut self.output) {
                return Ok(STATUS_NOT_FOUND);
            }
        }

        self.output
            .lite_error(&format!("The console command '{probed}' does not exist!"))?;

        let similar: Vec<String> = self
            .registry
            .controller_names()
            .chain(self.registry.command_names())
            .filter(|name| similar_percent(probed, name) as u32 >= SUGGEST_THRESHOLD)
            .map(str::to_string)
            .collect();

        if similar.is_empty() {
            self.show_command_list()?;
        } else {
            self.output.write("Maybe what you mean is: ")?;
            self.output.styled_line(&similar.join(", "), "info")?;
        }
        Ok(STATUS_NOT_FOUND)
    }

    /// Renders the full command/controller listing with descriptions.
    pub fn show_command_list(&mut self) -> io::Result<()> {
        let header = if self.meta.description.is_empty() {
            format!("{} (version {})", self.meta.name, self.meta.version)
        } else {
            format!(
                "{} (version {}) - {}",
                self.meta.name, self.meta.version, self.meta.description
            )
        };
        let groups: Vec<(String, String)> = self
            .registry
            .controller_names()
            .map(|name| {
                (
                    name.to_string(),
                    self.registry.description(name).unwrap_or("").to_string(),
                )
            })
            .collect();
        let commands: Vec<(String, String)> = self
            .registry
            .command_names()
            .map(|name| {
                (
                    name.to_string(),
                    self.registry.description(name).unwrap_or("").to_string(),
                )
            })
            .collect();
        let script = if self.input.script().is_empty() {
            self.meta.name.clone()
        } else {
            self.input.script().to_string()
        };

        self.output.writeln(&header)?;
        self.output.writeln("")?;
        let mut sections: Vec<(&str, Vec<(String, String)>)> = Vec::new();
        if !groups.is_empty() {
            sections.push(("Group Commands:", groups));
        }
        if !commands.is_empty() {
            sections.push(("Independent Commands:", commands));
        }
        if sections.is_empty() {
            self.output.writeln("No commands have been registered.")?;
        } else {
            self.output.multi_list(&sections)?;
        }
        self.output.writeln(&format!(
            "\nUsage: {script} <command>  or  {script} <group>{}<action>",
            self.meta.delimiter
        ))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support::{capture_output, Buffer};

    fn capture_app() -> (Application, Buffer) {
        let (output, buffer) = capture_output();
        let app = Application::with_context(
            AppMeta::new("crier-test", "0.0.0"),
            Input::new("crier-test", "", vec![]),
            output,
        );
        (app, buffer)
    }

    #[derive(Default)]
    struct VersionCommand;

    impl Command for VersionCommand {
        fn declared_name() -> &'static str {
            "version"
        }

        fn declared_description() -> &'static str {
            "print the version"
        }

        fn run(&mut self, _input: &mut Input, output: &mut Output) -> Result<ExitStatus> {
            output.writeln("0.0.0")?;
            Ok(STATUS_OK)
        }
    }

    #[test]
    fn test_add_command_uses_declared_name_and_description() {
        let (mut app, _buffer) = capture_app();
        app.add_command::<VersionCommand>().unwrap();

        assert!(app.registry().is_command("version"));
        assert_eq!(
            app.registry().description("version"),
            Some("print the version")
        );
    }

    #[test]
    fn test_explicit_description_wins_over_declared() {
        let (mut app, _buffer) = capture_app();
        app.command::<VersionCommand>("ver", Some("short alias"))
            .unwrap();
        assert_eq!(app.registry().description("ver"), Some("short alias"));
    }

    #[test]
    fn test_registration_chains() {
        let (mut app, _buffer) = capture_app();
        app.command_simple_fn("one", None, || Ok(STATUS_OK))
            .unwrap()
            .command_simple_fn("two", None, || Ok(STATUS_OK))
            .unwrap();
        assert!(app.registry().is_command("one"));
        assert!(app.registry().is_command("two"));
    }

    #[test]
    fn test_bulk_registration() {
        let (mut app, _buffer) = capture_app();
        app.commands(vec![
            ("alpha".to_string(), HandlerRef::from_simple_fn(|| Ok(0))),
            ("beta".to_string(), HandlerRef::from_simple_fn(|| Ok(0))),
        ])
        .unwrap();
        let names: Vec<&str> = app.registry().command_names().collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_run_with_empty_command_lists_and_succeeds() {
        let (mut app, buffer) = capture_app();
        app.command_simple_fn("solo", Some("the only one"), || Ok(STATUS_OK))
            .unwrap();

        let status = app.run().unwrap();
        assert_eq!(status, STATUS_OK);
        let text = buffer.contents();
        assert!(text.contains("crier-test (version 0.0.0)"));
        assert!(text.contains("Independent Commands:"));
        assert!(text.contains("solo"));
        assert!(text.contains("the only one"));
    }

    #[test]
    fn test_run_dispatches_input_command() {
        let (output, buffer) = capture_output();
        let mut app = Application::with_context(
            AppMeta::new("crier-test", "0.0.0"),
            Input::from_args(["crier-test", "ping"]),
            output,
        );
        app.command_fn("ping", None, |_input, output| {
            output.writeln("pong")?;
            Ok(STATUS_OK)
        })
        .unwrap();

        assert_eq!(app.run().unwrap(), STATUS_OK);
        assert!(buffer.contents().contains("pong"));
    }

    #[test]
    fn test_listing_without_registrations() {
        let (mut app, buffer) = capture_app();
        app.show_command_list().unwrap();
        assert!(buffer
            .contents()
            .contains("No commands have been registered."));
    }

    #[test]
    fn test_run_command_unknown_is_an_error() {
        let (mut app, _buffer) = capture_app();
        let err = app.run_command("ghost").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnknownCommand(name)) if name == "ghost"
        ));
    }

    #[test]
    fn test_run_action_unknown_is_an_error() {
        let (mut app, _buffer) = capture_app();
        let err = app.run_action("ghost", "act", true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnknownController(name)) if name == "ghost"
        ));
    }

    #[test]
    fn test_handler_error_propagates() {
        let (mut app, _buffer) = capture_app();
        app.command_simple_fn("boom", None, || Err(anyhow::anyhow!("kaput")))
            .unwrap();
        let err = app.dispatch("boom").unwrap_err();
        assert!(err.to_string().contains("kaput"));
    }

    #[test]
    fn test_callback_state_survives_dispatches() {
        let (mut app, _buffer) = capture_app();
        let mut count = 0;
        app.command_simple_fn("tick", None, move || {
            count += 1;
            Ok(count)
        })
        .unwrap();

        assert_eq!(app.dispatch("tick").unwrap(), 1);
        assert_eq!(app.dispatch("tick").unwrap(), 2);
    }
}
