//! # Line Prompt
//!
//! Minimal labelled prompt reading one line from standard input. Unrelated
//! to dispatch; the only blocking operation in the crate.

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// A one-shot question: prompt written, one line read, trimmed answer kept
#[derive(Debug, Clone, Default)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
}

impl Question {
    /// Create a question with the given prompt text
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: String::new(),
        }
    }

    /// Ask on the process terminal: prompt to stdout, answer from stdin
    ///
    /// Blocks until a line is available or the input stream closes.
    pub fn ask(&mut self) -> Result<&str> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut writer = io::stdout();
        self.ask_from(&mut reader, &mut writer)
    }

    /// Ask over the given reader and writer
    ///
    /// The prompt is written as-is with no trailing newline and flushed.
    /// The answer is the next line with surrounding whitespace trimmed.
    /// Input closing before any byte arrives is an error.
    pub fn ask_from(&mut self, reader: &mut impl BufRead, writer: &mut impl Write) -> Result<&str> {
        write!(writer, "{}", self.prompt)?;
        writer.flush()?;

        let mut line = String::new();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a line was read",
            )
            .into());
        }

        self.answer = line.trim().to_string();
        Ok(&self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_ask_trims_whitespace() {
        let mut question = Question::new("Name: ");
        let mut input = "  Alice\n".as_bytes();
        let mut output = Vec::new();

        let answer = question.ask_from(&mut input, &mut output).unwrap();
        assert_eq!(answer, "Alice");
        assert_eq!(question.answer, "Alice");
    }

    #[test]
    fn test_ask_writes_prompt_without_newline() {
        let mut question = Question::new("Name: ");
        let mut input = "Bob\n".as_bytes();
        let mut output = Vec::new();

        question.ask_from(&mut input, &mut output).unwrap();
        assert_eq!(output, b"Name: ");
    }

    #[test]
    fn test_ask_accepts_final_line_without_newline() {
        let mut question = Question::new("> ");
        let mut input = "Carol".as_bytes();
        let mut output = Vec::new();

        let answer = question.ask_from(&mut input, &mut output).unwrap();
        assert_eq!(answer, "Carol");
    }

    #[test]
    fn test_ask_fails_on_closed_input() {
        let mut question = Question::new("> ");
        let mut input = "".as_bytes();
        let mut output = Vec::new();

        let result = question.ask_from(&mut input, &mut output);
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(question.answer, "");
    }
}
