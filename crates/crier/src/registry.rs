//! Registration bookkeeping for commands and controller groups.
//!
//! The two name spaces are independent: a command and a controller group may
//! share a name (commands win at dispatch time). Command names are unique -
//! re-registering one is an error. Controller registration deliberately
//! keeps the historical last-wins behavior: re-registering a group silently
//! replaces its controller while keeping its original position in the
//! listing order.
//!
//! The registry is filled once at startup and only read during dispatch.

use std::collections::HashMap;

use crate::command::{ControllerRef, HandlerRef};
use crate::error::Error;
use crate::name::validate_name;

/// Holds every registered command and controller group.
#[derive(Debug, Default)]
pub struct Registry {
    commands: HashMap<String, HandlerRef>,
    controllers: HashMap<String, ControllerRef>,
    command_order: Vec<String>,
    controller_order: Vec<String>,
    descriptions: HashMap<String, String>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an independent command.
    ///
    /// Fails on an invalid name or when `name` is already taken by another
    /// command. The optional description feeds help rendering only.
    pub fn register_command(
        &mut self,
        name: &str,
        handler: HandlerRef,
        description: Option<&str>,
    ) -> Result<(), Error> {
        validate_name(name, false)?;
        if self.commands.contains_key(name) {
            return Err(Error::DuplicateCommand(name.to_string()));
        }
        self.command_order.push(name.to_string());
        self.commands.insert(name.to_string(), handler);
        if let Some(description) = description {
            self.descriptions
                .insert(name.to_string(), description.to_string());
        }
        Ok(())
    }

    /// Registers a controller group. Re-registration replaces the previous
    /// controller for that name.
    pub fn register_controller(
        &mut self,
        name: &str,
        controller: ControllerRef,
        description: Option<&str>,
    ) -> Result<(), Error> {
        validate_name(name, true)?;
        if !self.controllers.contains_key(name) {
            self.controller_order.push(name.to_string());
        }
        self.controllers.insert(name.to_string(), controller);
        if let Some(description) = description {
            self.descriptions
                .insert(name.to_string(), description.to_string());
        }
        Ok(())
    }

    /// Whether `name` is a registered independent command.
    pub fn is_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Whether `name` is a registered controller group.
    pub fn is_controller(&self, name: &str) -> bool {
        self.controllers.contains_key(name)
    }

    /// Registered command names in registration order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.command_order.iter().map(String::as_str)
    }

    /// Registered controller names in first-registration order.
    pub fn controller_names(&self) -> impl Iterator<Item = &str> {
        self.controller_order.iter().map(String::as_str)
    }

    /// The description registered for a command, if any.
    pub fn description(&self, name: &str) -> Option<&str> {
        self.descriptions.get(name).map(String::as_str)
    }

    /// Total number of registered commands and groups.
    pub fn len(&self) -> usize {
        self.commands.len() + self.controllers.len()
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.controllers.is_empty()
    }

    pub(crate) fn command_mut(&mut self, name: &str) -> Option<&mut HandlerRef> {
        self.commands.get_mut(name)
    }

    pub(crate) fn controller(&self, name: &str) -> Option<&ControllerRef> {
        self.controllers.get(name)
    }
}
