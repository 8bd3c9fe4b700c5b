//! Stdin-based roster source for piped input.

use crate::model::error::InputError;
use std::fmt;
use std::io::{IsTerminal, Read};

/// Piped stdin, read to EOF once.
///
/// Refuses an interactive terminal so the TUI never blocks waiting for the
/// operator to type JSON.
pub struct StdinSource {
    reader: Box<dyn Read + Send>,
}

impl fmt::Debug for StdinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdinSource").finish_non_exhaustive()
    }
}

impl StdinSource {
    /// Wrap process stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY (interactive terminal).
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self {
            reader: Box::new(stdin),
        })
    }

    /// Wrap any reader. Bypasses the TTY check.
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Read everything until EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures, including invalid UTF-8.
    pub fn read_to_string(mut self) -> Result<String, InputError> {
        let mut payload = String::new();
        self.reader.read_to_string(&mut payload)?;
        Ok(payload)
    }
}
