//! # Prompt Model
//!
//! A [`Prompt`] describes one question: what to display, what to fall back to,
//! whether an answer is mandatory and how the raw entry is validated and
//! converted. The engine ([`crate::Prompter`]) only reads it.
//!
//! Behaviour is attached as optional capabilities rather than through a trait
//! hierarchy:
//! - a [`Validator`] decides whether the trimmed entry is acceptable and may
//!   rewrite it (e.g. to the canonical casing of an option)
//! - a [`Converter`] turns the validated entry into its final [`PromptValue`]
//!
//! ## Example
//! ```rust
//! use prompter::{Optionality, Prompt, PromptValue, Validity};
//!
//! let prompt = Prompt::new("Favourite number")
//!     .with_hint("(odd)")
//!     .with_default(7_i64)
//!     .required(Optionality::NotRequired)
//!     .with_validator(|_, entry| {
//!         let odd = entry.parse::<i64>().map(|n| n % 2 != 0).unwrap_or(false);
//!         let validity = if odd { Validity::Valid } else { Validity::Invalid };
//!         (entry.to_string(), validity)
//!     })
//!     .with_converter(|_, entry| entry.parse::<i64>().map(PromptValue::from).unwrap_or_default());
//!
//! assert_eq!(prompt.default_value, PromptValue::Integer(7));
//! ```
use std::{fmt, fmt::Display, sync::Arc};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Outcome of validating an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

/// Whether an empty submission is rejected (`Required`) or replaced by the
/// prompt's default value (`NotRequired`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Optionality {
    #[default]
    Required,
    NotRequired,
}

/// Final, typed value produced by a prompt.
///
/// `Empty` is what a prompt without a default falls back to.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PromptValue {
    #[default]
    Empty,
    Text(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl PromptValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Display for PromptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => write!(f, "{}", s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for PromptValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PromptValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for PromptValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PromptValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PromptValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Checks a trimmed entry and returns the (possibly rewritten) entry with its validity.
pub type Validator = Arc<dyn Fn(&Prompt, &str) -> (String, Validity) + Send + Sync>;

/// Maps a validated entry to the prompt's final value. Must be total.
pub type Converter = Arc<dyn Fn(&Prompt, &str) -> PromptValue + Send + Sync>;

/// One question to ask the user.
///
/// Build it with a struct literal, with [`Prompt::new`] and the `with_*`
/// methods, or through one of the [`crate::recipes`].
#[derive(Clone)]
pub struct Prompt {
    /// Text shown to the user. Also the key the answer is stored under.
    pub message: String,
    /// Short annotation appended to the message, e.g. `[y/n]`.
    pub value_hint: String,
    /// Read the entry without echoing it.
    pub secure_entry: bool,
    pub default_value: PromptValue,
    pub required: Optionality,
    /// Ask again when validation fails instead of returning `Invalid`.
    pub retry_if_no_match: bool,
    /// Lets validators that tolerate unmatched entries report them as `Invalid`.
    pub fail_if_no_match: bool,
    pub case_sensitive_match: bool,
    pub validator: Option<Validator>,
    pub converter: Option<Converter>,
}

impl Prompt {
    /// A required, free-text prompt with no default that retries on invalid entries.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            value_hint: String::new(),
            secure_entry: false,
            default_value: PromptValue::Empty,
            required: Optionality::Required,
            retry_if_no_match: true,
            fail_if_no_match: false,
            case_sensitive_match: false,
            validator: None,
            converter: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.value_hint = hint.into();
        self
    }

    pub fn secure(mut self, secure_entry: bool) -> Self {
        self.secure_entry = secure_entry;
        self
    }

    pub fn with_default(mut self, value: impl Into<PromptValue>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn required(mut self, required: Optionality) -> Self {
        self.required = required;
        self
    }

    pub fn retry_if_no_match(mut self, retry: bool) -> Self {
        self.retry_if_no_match = retry;
        self
    }

    pub fn fail_if_no_match(mut self, fail: bool) -> Self {
        self.fail_if_no_match = fail;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive_match = case_sensitive;
        self
    }

    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Prompt, &str) -> (String, Validity) + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn with_converter<F>(mut self, converter: F) -> Self
    where
        F: Fn(&Prompt, &str) -> PromptValue + Send + Sync + 'static,
    {
        self.converter = Some(Arc::new(converter));
        self
    }
}

impl fmt::Debug for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prompt")
            .field("message", &self.message)
            .field("value_hint", &self.value_hint)
            .field("secure_entry", &self.secure_entry)
            .field("default_value", &self.default_value)
            .field("required", &self.required)
            .field("retry_if_no_match", &self.retry_if_no_match)
            .field("fail_if_no_match", &self.fail_if_no_match)
            .field("case_sensitive_match", &self.case_sensitive_match)
            .field("validator", &self.validator.is_some())
            .field("converter", &self.converter.is_some())
            .finish()
    }
}
