//! # Error Handling
//!
//! Error types for command lookup and prompting, plus terminal formatting
//! helpers for hosts that print failures before deciding how to exit.

use thiserror::Error;

/// Errors produced by command lookup and the line prompt
#[derive(Error, Debug)]
pub enum Error {
    /// No registered command matched the given name or any alias
    #[error("command '{name}' not found")]
    CommandNotFound { name: String },

    /// No sub-command of the parent matched the given name
    #[error("sub-command '{name}' not found")]
    SubcommandNotFound { name: String },

    /// Reading or writing the terminal failed
    #[error("prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Format an error for terminal display
pub fn format_error(error: &Error) -> String {
    use colored::*;

    match error {
        Error::CommandNotFound { .. } => format!(
            "{} {}\n  Run 'help' to list all commands.",
            "Error:".red().bold(),
            error
        ),
        _ => format!("{} {}", "Error:".red().bold(), error),
    }
}

/// Print an error to stderr
pub fn print_error(error: &Error) {
    eprintln!("{}", format_error(error));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_not_found_display() {
        let error = Error::CommandNotFound {
            name: "deploy".into(),
        };
        assert_eq!(error.to_string(), "command 'deploy' not found");
    }

    #[test]
    fn test_subcommand_not_found_display() {
        let error = Error::SubcommandNotFound {
            name: "push".into(),
        };
        assert_eq!(error.to_string(), "sub-command 'push' not found");
    }

    #[test]
    fn test_format_error_suggests_help() {
        let error = Error::CommandNotFound {
            name: "deploy".into(),
        };
        let formatted = format_error(&error);
        assert!(formatted.contains("command 'deploy' not found"));
        assert!(formatted.contains("Run 'help'"));
    }

    #[test]
    fn test_io_error_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "end of input");
        let error = Error::from(io);
        assert!(error.to_string().contains("end of input"));
    }
}
