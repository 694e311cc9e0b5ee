//! # Prompt Engine
//!
//! [`Prompter`] turns one raw line of input into a typed, validated and
//! stored value. For every [`Prompt`] it:
//!
//! 1. renders the question and writes it to the display stream
//! 2. reads one line (masked when the prompt is secure)
//! 3. substitutes the default for a bare newline on optional prompts
//! 4. trims the entry (or only strips the line terminator)
//! 5. re-asks when a required prompt gets an empty entry
//! 6. runs the validator, re-asking on `Invalid` when the prompt retries
//! 7. runs the converter and stores the result
//!
//! A read failure ends the evaluation with the prompt's default value and
//! [`Validity::Invalid`]. Retries are unbounded unless
//! [`PrompterOptions::max_attempts`] is set.
//!
//! ## Example
//! ```rust
//! use prompter::recipes::{simple_prompt, yes_no_prompt};
//! use prompter::{LineReader, Optionality, Prompter, PromptValue, Validity};
//!
//! let reader = LineReader::scripted("Ada\nturnip\nyes\n");
//! let mut prompter = Prompter::with_reader(reader, Vec::new());
//!
//! let results = prompter.run(&[
//!     simple_prompt("Name", Optionality::Required, ""),
//!     yes_no_prompt("Continue?", "[y/n]", Optionality::Required, false),
//! ]);
//!
//! assert_eq!(results[0].value, PromptValue::from("Ada"));
//! assert_eq!(results[1].value, PromptValue::Bool(true));
//! assert_eq!(results[1].validity, Validity::Valid);
//! assert_eq!(prompter.value("Name"), Some(&PromptValue::from("Ada")));
//! ```
use std::collections::HashMap;
use std::io::{self, Write};

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, warn};

use crate::prompt::{Optionality, Prompt, PromptValue, Validity};
use crate::reader::PromptReader;

const REQUIRED_ERROR: &str = "ERROR: You must provide a value.\n\n";
const INVALID_ERROR: &str = "ERROR: Not a valid response.\n\n";

/// Session-level settings for a [`Prompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrompterOptions {
    /// Strip leading and trailing whitespace from entries. When off, only the
    /// line terminator is removed.
    pub trim_space: bool,
    /// Appended to every rendered question, before the two trailing spaces.
    pub prompt_suffix: String,
    /// Upper bound on how many times one prompt is displayed. `None` retries
    /// forever.
    pub max_attempts: Option<usize>,
}

impl Default for PrompterOptions {
    fn default() -> Self {
        Self {
            trim_space: true,
            prompt_suffix: ":".to_string(),
            max_attempts: None,
        }
    }
}

impl PrompterOptions {
    pub fn trim_space(mut self, trim_space: bool) -> Self {
        self.trim_space = trim_space;
        self
    }

    pub fn prompt_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.prompt_suffix = suffix.into();
        self
    }

    pub fn max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Outcome of one prompt in a batch run by [`Prompter::run`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PromptResult {
    pub value: PromptValue,
    pub validity: Validity,
}

/// The prompt controller.
///
/// Owns the display stream and a line reader (pass `&mut reader` to keep
/// ownership elsewhere) and records every completed answer.
pub struct Prompter<R, W = io::Stdout> {
    reader: R,
    output: W,
    options: PrompterOptions,
    values: HashMap<String, PromptValue>,
    indexed_values: Vec<PromptValue>,
}

#[cfg(feature = "std")]
impl Prompter<crate::utils::Terminal, io::Stdout> {
    /// A prompter reading from the terminal and writing to stdout.
    pub fn new() -> Self {
        Self::with_reader(crate::utils::Terminal::new(), io::stdout())
    }
}

#[cfg(feature = "std")]
impl Default for Prompter<crate::utils::Terminal, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PromptReader, W: Write> Prompter<R, W> {
    pub fn with_reader(reader: R, output: W) -> Self {
        Self::with_options(reader, output, PrompterOptions::default())
    }

    pub fn with_options(reader: R, output: W, options: PrompterOptions) -> Self {
        Self {
            reader,
            output,
            options,
            values: HashMap::new(),
            indexed_values: Vec::new(),
        }
    }

    pub fn options(&self) -> &PrompterOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut PrompterOptions {
        &mut self.options
    }

    /// Completed values keyed on the prompt message. Last write wins.
    pub fn values(&self) -> &HashMap<String, PromptValue> {
        &self.values
    }

    /// Completed values in the order they were entered.
    pub fn indexed_values(&self) -> &[PromptValue] {
        &self.indexed_values
    }

    pub fn value(&self, message: &str) -> Option<&PromptValue> {
        self.values.get(message)
    }

    /// Forgets every recorded value.
    pub fn clear_values(&mut self) {
        self.values.clear();
        self.indexed_values.clear();
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.output)
    }

    /// Asks a single question and returns the final value with its validity.
    pub fn prompt(&mut self, prompt: &Prompt) -> (PromptValue, Validity) {
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!(prompt = %prompt.message, attempt = attempts, "prompting");
            let question = self.formatted_prompt_message(prompt);
            self.display(&question);

            let read = if prompt.secure_entry {
                self.reader.read_secure_text()
            } else {
                self.reader.read_clear_text()
            };
            let raw = match read {
                Ok(line) => line,
                Err(e) => {
                    warn!(prompt = %prompt.message, "{}", e);
                    return self.store(prompt, prompt.default_value.clone(), Validity::Invalid);
                }
            };

            if is_bare_newline(&raw) && prompt.required == Optionality::NotRequired {
                debug!(prompt = %prompt.message, "empty entry, using default");
                return self.store(prompt, prompt.default_value.clone(), Validity::Valid);
            }

            let entry = if self.options.trim_space {
                raw.trim()
            } else {
                strip_line_terminator(&raw)
            };

            if entry.is_empty() && prompt.required == Optionality::Required {
                self.display(REQUIRED_ERROR);
                if self.attempts_exhausted(prompt, attempts) {
                    return self.store(prompt, prompt.default_value.clone(), Validity::Invalid);
                }
                continue;
            }

            let (validated, validity) = match &prompt.validator {
                Some(validator) => validator(prompt, entry),
                None => (entry.to_string(), Validity::Valid),
            };

            if validity == Validity::Invalid {
                if !prompt.retry_if_no_match {
                    debug!(prompt = %prompt.message, "invalid entry, retry disabled, using default");
                    return self.store(prompt, prompt.default_value.clone(), Validity::Invalid);
                }
                self.display(INVALID_ERROR);
                if self.attempts_exhausted(prompt, attempts) {
                    return self.store(prompt, prompt.default_value.clone(), Validity::Invalid);
                }
                continue;
            }

            let value = match &prompt.converter {
                Some(converter) => converter(prompt, &validated),
                None => PromptValue::Text(validated),
            };
            return self.store(prompt, value, Validity::Valid);
        }
    }

    /// Asks every prompt in order. Returns one result per prompt, even for
    /// prompts that ended up invalid.
    pub fn run(&mut self, prompts: &[Prompt]) -> Vec<PromptResult> {
        prompts
            .iter()
            .map(|prompt| {
                let (value, validity) = self.prompt(prompt);
                PromptResult { value, validity }
            })
            .collect()
    }

    fn store(
        &mut self,
        prompt: &Prompt,
        value: PromptValue,
        validity: Validity,
    ) -> (PromptValue, Validity) {
        self.indexed_values.push(value.clone());
        self.values.insert(prompt.message.clone(), value.clone());
        (value, validity)
    }

    fn attempts_exhausted(&self, prompt: &Prompt, attempts: usize) -> bool {
        match self.options.max_attempts {
            Some(max) if attempts >= max => {
                warn!(prompt = %prompt.message, attempts, "giving up after max attempts");
                true
            }
            _ => false,
        }
    }

    fn display(&mut self, text: &str) {
        let written = self
            .output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush());
        if let Err(e) = written {
            warn!("couldn't write prompt: {}", e);
        }
    }

    fn formatted_prompt_message(&self, prompt: &Prompt) -> String {
        let hint = if prompt.value_hint.is_empty() {
            String::new()
        } else {
            format!(" {}", prompt.value_hint)
        };
        format!("{}{}{}  ", prompt.message, hint, self.options.prompt_suffix)
    }
}

fn is_bare_newline(raw: &str) -> bool {
    raw == "\n" || raw == "\r\n"
}

fn strip_line_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}
