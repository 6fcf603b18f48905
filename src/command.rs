//! # Command Data Model
//!
//! Commands, sub-commands, options, and the per-invocation data handed to
//! execute callbacks.

use std::fmt;

use crate::error::{Error, Result};

/// Execute callback attached to a command
pub type ExecuteFn = Box<dyn Fn(&Command, &CommandData) -> Result<()>>;

/// A named option (flag) declared on a command
///
/// Options carry presence and description metadata only; no value type is
/// enforced.
#[derive(Debug, Clone, Default)]
pub struct CommandOption {
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
}

impl CommandOption {
    /// Create a new option
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            aliases: Vec::new(),
        }
    }

    /// Add an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Whether `name` matches this option's name or any alias (ASCII
    /// case-insensitive)
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// Arguments and options supplied for one invocation
///
/// Built by the host per dispatch and passed to the execute callback; not an
/// independent lifecycle entity.
#[derive(Debug, Clone, Default)]
pub struct CommandData {
    pub arguments: Vec<String>,
    pub options: Vec<CommandOption>,
}

impl CommandData {
    /// Create empty invocation data
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Add a supplied option
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Invoke `f` for every supplied option matching `name` (name or alias,
    /// case-insensitive)
    ///
    /// Zero invocations when nothing matches; used by callbacks to check
    /// whether the caller supplied a given flag.
    pub fn find_option(&self, name: &str, mut f: impl FnMut(&CommandOption)) {
        for option in &self.options {
            if option.matches(name) {
                f(option);
            }
        }
    }
}

/// A nested command reachable only through its parent
///
/// Matched by exact case-insensitive name; aliases declared here are not
/// consulted during lookup, unlike top-level commands.
#[derive(Debug, Clone, Default)]
pub struct SubCommand {
    pub name: String,
    pub description: String,
    pub usages: Vec<String>,
    pub options: Vec<CommandOption>,
    pub aliases: Vec<String>,
}

impl SubCommand {
    /// Create a new sub-command
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usages: Vec::new(),
            options: Vec::new(),
            aliases: Vec::new(),
        }
    }

    /// Add a usage line
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usages.push(usage.into());
        self
    }

    /// Add an option
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add an alias (kept as metadata; lookup matches names only)
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

/// A named unit of behavior with options, usage strings, sub-commands,
/// aliases, and an execute callback
pub struct Command {
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOption>,
    pub usages: Vec<String>,
    pub subcommands: Vec<SubCommand>,
    pub aliases: Vec<String>,
    pub execute: Option<ExecuteFn>,
}

impl Command {
    /// Create a new command with no callback
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            usages: Vec::new(),
            subcommands: Vec::new(),
            aliases: Vec::new(),
            execute: None,
        }
    }

    /// Add a usage line
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usages.push(usage.into());
        self
    }

    /// Add an option
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add a sub-command
    pub fn with_subcommand(mut self, subcommand: SubCommand) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Add an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the execute callback
    pub fn with_execute(
        mut self,
        f: impl Fn(&Command, &CommandData) -> Result<()> + 'static,
    ) -> Self {
        self.execute = Some(Box::new(f));
        self
    }

    /// Whether `name` matches this command's name or any alias (ASCII
    /// case-insensitive)
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Invoke `f` for every declared option matching `name` (name or alias,
    /// case-insensitive)
    ///
    /// Zero invocations when nothing matches.
    pub fn find_option(&self, name: &str, mut f: impl FnMut(&CommandOption)) {
        for option in &self.options {
            if option.matches(name) {
                f(option);
            }
        }
    }

    /// Find a sub-command by exact case-insensitive name
    ///
    /// First match invokes `f`; aliases are never consulted here.
    pub fn find_subcommand(&self, name: &str, f: impl FnOnce(&SubCommand)) -> Result<()> {
        match self
            .subcommands
            .iter()
            .find(|sub| sub.name.eq_ignore_ascii_case(name))
        {
            Some(subcommand) => {
                f(subcommand);
                Ok(())
            }
            None => Err(Error::SubcommandNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Run the execute callback with the given invocation data
    ///
    /// Commands without a callback succeed as a no-op.
    pub fn run(&self, data: &CommandData) -> Result<()> {
        match &self.execute {
            Some(execute) => execute(self, data),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("options", &self.options)
            .field("usages", &self.usages)
            .field("subcommands", &self.subcommands)
            .field("aliases", &self.aliases)
            .field("execute", &self.execute.as_ref().map(|_| "<callback>"))
            .finish()
    }
}
