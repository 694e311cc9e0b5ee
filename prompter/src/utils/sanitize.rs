//! # Input Sanitization & Validation
//!
//! Composable validation filters (`Sanitize`) for prompt entries. Filters run
//! in order and short-circuit on the first failure, returning a friendly error
//! describing what went wrong. Matching filters rewrite the entry to the
//! option's own casing, so `"PURPLE"` matched against `"puRple"` comes back as
//! `"puRple"`.
//!
//! ## Features
//! - Type validation via [`DesiredType`]
//! - Exact string matching with [`Sanitize::MatchString`]
//! - Multiple-option matching with [`Sanitize::MatchStrings`]
//! - Inclusive range validation with [`Sanitize::IsBetween`]
//! - Case-insensitive matching unless the prompt asks otherwise
//!
//! ## Examples
//!
//! ```rust,no_run
//! use prompter::recipes::sanitized_prompt;
//! use prompter::utils::{DesiredType, Sanitize};
//! use prompter::{Optionality, Prompter};
//!
//! let mut prompter = Prompter::new();
//! let (scan, _) = prompter.prompt(&sanitized_prompt(
//!     "Scan type",
//!     "(quick/deep/custom)",
//!     vec![
//!         Sanitize::IsType(DesiredType::Text),
//!         Sanitize::MatchStrings(vec![
//!             "quick".to_string(),
//!             "deep".to_string(),
//!             "custom".to_string(),
//!         ]),
//!     ],
//!     Optionality::NotRequired,
//!     "quick",
//! ));
//! println!("Scan: {}", scan);
//! ```
use std::fmt::Display;

use thiserror::Error;

use crate::prompt::PromptValue;

/// A validation filter applied to a prompt entry.
///
/// - `MatchString`: the entry must match a specific string.
/// - `MatchStrings`: the entry must match one of the given options.
/// - `IsType`: the entry must parse into a certain [`DesiredType`].
/// - `IsBetween`: the entry must be an integer within `[min, max]`.
#[derive(Debug, Clone)]
pub enum Sanitize {
    MatchString(String),
    MatchStrings(Vec<String>),
    IsType(DesiredType),
    IsBetween(i64, i64),
}

/// Why an entry was rejected by a [`Sanitize`] filter.
#[derive(Debug, Error)]
pub enum FilterErrorNot {
    #[error("The value is not a {0}, try again!")]
    Number(DesiredType),
    #[error("The value is not a {0}, try again!")]
    Bool(DesiredType),
    #[error("The value doesn't match with {0}, try again!")]
    MatchString(String),
    #[error("The value doesn't match with the options: {}, try again!", .0.join(", "))]
    MatchStrings(Vec<String>),
    #[error("The value is not between {0} and {1}, try again!")]
    Between(i64, i64),
}

fn same_text(input: &str, candidate: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        input == candidate
    } else {
        input.to_lowercase() == candidate.to_lowercase()
    }
}

impl Sanitize {
    /// Runs every filter against `answer` in order.
    ///
    /// - Stops and returns the first error encountered.
    /// - Returns the entry as rewritten by the last matching filter.
    pub fn execute(
        answer: &str,
        filters: &[Sanitize],
        case_sensitive: bool,
    ) -> Result<String, FilterErrorNot> {
        let mut clean_answer = answer.to_string();

        for filter in filters {
            clean_answer = filter.validate(&clean_answer, case_sensitive)?;
        }
        Ok(clean_answer)
    }

    /// Validates a single entry, returning its canonical form.
    pub fn validate(&self, input: &str, case_sensitive: bool) -> Result<String, FilterErrorNot> {
        match self {
            Sanitize::IsType(ty) => ty.parse(input).map(|_| input.to_string()),
            Sanitize::MatchString(s) => {
                if same_text(input, s, case_sensitive) {
                    Ok(s.clone())
                } else {
                    Err(FilterErrorNot::MatchString(s.clone()))
                }
            }
            Sanitize::MatchStrings(options) => options
                .iter()
                .find(|option| same_text(input, option, case_sensitive))
                .cloned()
                .ok_or_else(|| FilterErrorNot::MatchStrings(options.clone())),
            Sanitize::IsBetween(min, max) => match DesiredType::Integer.parse(input)? {
                PromptValue::Integer(n) if n >= *min && n <= *max => Ok(input.to_string()),
                _ => Err(FilterErrorNot::Between(*min, *max)),
            },
        }
    }
}

/// The type an entry should parse into.
///
/// Used with [`Sanitize::IsType`] and by converters that turn an entry into a
/// typed [`PromptValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesiredType {
    Text,
    Bool,
    Integer,
    Float,
}

impl DesiredType {
    /// Parses `input` into the [`PromptValue`] variant matching this type.
    pub fn parse(&self, input: &str) -> Result<PromptValue, FilterErrorNot> {
        match self {
            DesiredType::Text => Ok(PromptValue::Text(input.to_string())),
            DesiredType::Bool => input
                .parse::<bool>()
                .map(PromptValue::Bool)
                .map_err(|_| FilterErrorNot::Bool(*self)),
            DesiredType::Integer => input
                .parse::<i64>()
                .map(PromptValue::Integer)
                .map_err(|_| FilterErrorNot::Number(*self)),
            DesiredType::Float => input
                .parse::<f64>()
                .map(PromptValue::Float)
                .map_err(|_| FilterErrorNot::Number(*self)),
        }
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
        }
    }
}
