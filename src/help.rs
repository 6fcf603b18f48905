//! # Help Generation
//!
//! Renders help text from a registry's command metadata. All functions take
//! the registry as an explicit parameter; nothing here captures handler
//! state.

use crate::command::{Command, CommandData};
use crate::error::Result;
use crate::registry::CommandRegistry;

const HELP_NAME: &str = "help";

/// Build the built-in `help` command registered by every registry
///
/// Metadata only; the execute path lives in [`run`] so it can receive the
/// registry explicitly.
pub fn builtin() -> Command {
    Command::new(HELP_NAME, "Built-in help command for application.")
        .with_usage("help")
        .with_usage("help <command name>")
}

/// Whether `name` names the built-in help command
pub fn is_help(name: &str) -> bool {
    name.eq_ignore_ascii_case(HELP_NAME)
}

/// Render the command overview: a header naming the app, then one line per
/// registered command in registration order
pub fn render_overview(registry: &CommandRegistry) -> String {
    let mut out = format!(
        "List of all commands. For more information: {} help <command>\n",
        registry.name()
    );
    for command in registry.commands() {
        out.push_str(&format!("  {} | {}\n", command.name, command.description));
    }
    out
}

/// Render detailed help for one command: description, usage list, and any
/// options and sub-commands
///
/// Unknown names propagate [`CommandNotFound`] to the caller.
///
/// [`CommandNotFound`]: crate::Error::CommandNotFound
pub fn render_command(registry: &CommandRegistry, name: &str) -> Result<String> {
    registry.find_command(name, |command| {
        let mut out = format!(
            "Command {}:\n  Description: {}\n  Usages:\n    {}\n",
            command.name,
            command.description,
            command.usages.join("\n    ")
        );

        if !command.options.is_empty() {
            out.push_str("  Options:\n");
            for option in &command.options {
                out.push_str(&format!("    {} | {}\n", option.name, option.description));
            }
        }

        if !command.subcommands.is_empty() {
            out.push_str("  Sub-Commands:\n");
            for sub in &command.subcommands {
                out.push_str(&format!(
                    "    Name: {}\n    Description: {}\n    Usages:\n      {}\n\n",
                    sub.name,
                    sub.description,
                    sub.usages.join("\n      ")
                ));
            }
        }

        Ok(out)
    })
}

/// Execute path for the built-in help command
///
/// No arguments prints the overview; one argument prints that command's
/// detail or returns the lookup error for the host to handle.
pub fn run(registry: &CommandRegistry, data: &CommandData) -> Result<()> {
    match data.arguments.first() {
        None => {
            print!("{}", render_overview(registry));
            Ok(())
        }
        Some(name) => {
            print!("{}", render_command(registry, name)?);
            Ok(())
        }
    }
}
