//! # Command Registry
//!
//! Ordered registry of top-level commands with first-match routing.

use tracing::{debug, warn};

use crate::command::{Command, CommandData};
use crate::error::{Error, Result};
use crate::help;

/// Callback invoked when the host reports an unmatched command name
pub type NotFoundFn = Box<dyn Fn(&str)>;

/// Registry of top-level commands
///
/// Commands are kept in registration order and lookup is first-match, so a
/// duplicate name shadows later registrations rather than replacing earlier
/// ones. Registration is expected to finish before dispatch begins; the
/// registry is not synchronized.
pub struct CommandRegistry {
    name: String,
    commands: Vec<Command>,
    not_found: NotFoundFn,
}

impl CommandRegistry {
    /// Create a registry named after the host application
    ///
    /// Installs a default not-found callback that prints a diagnostic to
    /// stderr, and registers the built-in `help` command.
    pub fn new(app_name: impl Into<String>) -> Self {
        let mut registry = Self {
            name: app_name.into(),
            commands: Vec::new(),
            not_found: Box::new(default_not_found),
        };
        registry.add_command(help::builtin());
        registry
    }

    /// Application name used in help output
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered commands in registration order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Rename the registry
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the not-found callback
    pub fn set_not_found(&mut self, f: impl Fn(&str) + 'static) {
        self.not_found = Box::new(f);
    }

    /// Append a command
    ///
    /// No duplicate-name validation; lookup is first-match, so a clashing
    /// later registration is unreachable.
    pub fn add_command(&mut self, command: Command) -> &mut Self {
        debug!("registering command '{}'", command.name);
        self.commands.push(command);
        self
    }

    /// Find a command by name or alias (ASCII case-insensitive, first match)
    ///
    /// On a match invokes `f` and returns its result. On a miss returns
    /// [`Error::CommandNotFound`] without touching the not-found callback;
    /// hosts that want the callback fired call [`notify_not_found`]
    /// explicitly.
    ///
    /// [`notify_not_found`]: CommandRegistry::notify_not_found
    pub fn find_command<T>(&self, name: &str, f: impl FnOnce(&Command) -> Result<T>) -> Result<T> {
        match self.commands.iter().find(|command| command.matches(name)) {
            Some(command) => f(command),
            None => {
                debug!("command '{}' not found", name);
                Err(Error::CommandNotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Route one invocation to the matching command's callback
    ///
    /// The built-in `help` command is resolved here so its rendering takes
    /// the registry as an explicit input rather than a captured one.
    pub fn dispatch(&self, name: &str, data: &CommandData) -> Result<()> {
        debug!("dispatching '{}'", name);
        if help::is_help(name) {
            return help::run(self, data);
        }
        self.find_command(name, |command| command.run(data))
    }

    /// Invoke the configured not-found callback for an unmatched name
    pub fn notify_not_found(&self, name: &str) {
        (self.not_found)(name);
    }
}

fn default_not_found(name: &str) {
    use colored::*;

    warn!("unknown command: {}", name);
    eprintln!(
        "{} Command '{}' not found! Run 'help' to list all commands.",
        "Error:".red().bold(),
        name
    );
}
