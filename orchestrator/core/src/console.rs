//! Echo Console
//!
//! Command-line capture for the booted terminal. Submitted text is echoed and
//! acknowledged; no command is ever interpreted.

use serde::{Deserialize, Serialize};

/// Prompt shown in front of the command line
pub const PROMPT: &str = "sokkaverse$>";

/// Prefix of an echoed submission
pub const ECHO_PREFIX: &str = ">> ";

/// A single keystroke aimed at the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKey {
    /// A printable character
    Char(char),
    /// Delete the last character
    Backspace,
    /// Submit the line
    Enter,
}

/// Mutable command-line buffer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandLine {
    buffer: String,
}

impl CommandLine {
    /// Empty command line
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Take the raw text, leaving the line empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// Current text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Whether the line is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Append-only log of console output lines
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputLog {
    lines: Vec<String>,
}

impl OutputLog {
    /// Empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, returning its index
    pub fn push(&mut self, line: String) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    /// All lines in insertion order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The two lines a submission produces: the raw echo and the acknowledgement
#[must_use]
pub fn echo_lines(raw: &str) -> [String; 2] {
    [
        format!("{ECHO_PREFIX}{raw}"),
        format!(
            "Command '{}' received. Processing...",
            raw.trim().to_lowercase()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_echo_preserves_raw_and_normalizes_ack() {
        let [echo, ack] = echo_lines("  Hello  ");
        assert_eq!(echo, ">>   Hello  ");
        assert_eq!(ack, "Command 'hello' received. Processing...");
    }

    #[test]
    fn test_echo_of_empty_submission() {
        let [echo, ack] = echo_lines("");
        assert_eq!(echo, ">> ");
        assert_eq!(ack, "Command '' received. Processing...");
    }

    #[test]
    fn test_command_line_editing() {
        let mut line = CommandLine::new();
        for c in "helo".chars() {
            line.push(c);
        }
        line.backspace();
        line.push('l');
        line.push('o');
        assert_eq!(line.as_str(), "hello");
        assert_eq!(line.take(), "hello");
        assert!(line.is_empty());

        line.backspace();
        assert!(line.is_empty());
    }

    #[test]
    fn test_output_log_is_append_only() {
        let mut log = OutputLog::new();
        assert_eq!(log.push("a".into()), 0);
        assert_eq!(log.push("b".into()), 1);
        assert_eq!(log.lines(), &["a".to_string(), "b".to_string()]);
    }
}
