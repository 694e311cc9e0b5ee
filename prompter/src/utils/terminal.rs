//! # Terminal Input
//!
//! The interactive [`PromptReader`]: clear text comes from standard input,
//! secure text is captured without echo through the terminal.
//!
//! Masked capture runs on stderr's terminal, or stdout's when stderr is
//! redirected, so redirecting one output stream keeps secure entries hidden.
//! When standard input is not a terminal (piped sessions) there is nothing to
//! mask, and secure reads fall back to reading a clear line from stdin.
//!
//! ## Example
//! ```rust,no_run
//! use prompter::utils::Terminal;
//! use prompter::PromptReader;
//!
//! let mut terminal = Terminal::new();
//! let password = terminal.read_secure_text().unwrap();
//! println!("{} characters", password.trim_end().len());
//! ```
use std::io::{self, IsTerminal};

use dialoguer::console::Term;

use crate::reader::{PromptReader, ReadError, read_line_from};

/// Stream whose terminal performs masked capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaskTarget {
    Stderr,
    Stdout,
}

/// Masking needs keystrokes coming from a terminal and a terminal to drive.
/// Stderr wins so that stdout can be redirected without losing masking.
fn mask_target(stdin_tty: bool, stderr_tty: bool, stdout_tty: bool) -> Option<MaskTarget> {
    if !stdin_tty {
        return None;
    }
    if stderr_tty {
        Some(MaskTarget::Stderr)
    } else if stdout_tty {
        Some(MaskTarget::Stdout)
    } else {
        None
    }
}

/// Reads prompt entries from the process terminal.
#[derive(Debug)]
pub struct Terminal {
    stdin: io::Stdin,
    mask: Option<Term>,
}

impl Terminal {
    pub fn new() -> Self {
        let stdin = io::stdin();
        let target = mask_target(
            stdin.is_terminal(),
            Term::stderr().is_term(),
            Term::stdout().is_term(),
        );
        let mask = target.map(|target| match target {
            MaskTarget::Stderr => Term::stderr(),
            MaskTarget::Stdout => Term::stdout(),
        });
        Self { stdin, mask }
    }

    /// Whether secure reads are captured without echo.
    pub fn masks_secure_entry(&self) -> bool {
        self.mask.is_some()
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptReader for Terminal {
    fn read_clear_text(&mut self) -> Result<String, ReadError> {
        read_line_from(&mut self.stdin.lock())
    }

    fn read_secure_text(&mut self) -> Result<String, ReadError> {
        let Some(term) = &self.mask else {
            return self.read_clear_text();
        };
        let mut line = term.read_secure_line()?;
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_target_redirected_stdout_uses_stderr() {
        // `prompter --json > answers.json` typed at a terminal
        assert_eq!(mask_target(true, true, false), Some(MaskTarget::Stderr));
    }

    #[test]
    fn test_mask_target_redirected_stderr_uses_stdout() {
        assert_eq!(mask_target(true, false, true), Some(MaskTarget::Stdout));
        assert_eq!(mask_target(true, true, true), Some(MaskTarget::Stderr));
    }

    #[test]
    fn test_mask_target_piped_stdin_reads_clear_text() {
        assert_eq!(mask_target(false, true, true), None);
        assert_eq!(mask_target(true, false, false), None);
    }
}
