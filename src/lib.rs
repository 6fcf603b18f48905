//! # cmdkit
//!
//! Declarative command registration and dispatch for interactive CLIs:
//! - Register named commands with descriptions, usage strings, options,
//!   sub-commands, and aliases
//! - Route user input to the matching command's callback, first match wins
//! - Generate help text from the registered metadata
//! - Prompt for a line of input with [`Question`]
//!
//! No flag-syntax parsing, no shell completion; the host tokenizes input and
//! decides what happens on errors.

pub mod command;
pub mod error;
pub mod help;
pub mod prompt;
pub mod registry;

pub use command::{Command, CommandData, CommandOption, ExecuteFn, SubCommand};
pub use error::{Error, Result};
pub use prompt::Question;
pub use registry::{CommandRegistry, NotFoundFn};
