//! # Prompter
//!
//! A small Rust library for collecting answers from a user on the terminal:
//! ask a question, read a line, validate it, convert it, and ask again when the
//! answer is no good.
//!
//! ## Features
//!
//! - **Prompt Engine** - One evaluation pipeline for every question: default
//!   substitution, whitespace policy, required-field checks, validation,
//!   retry and conversion
//! - **Recipes** - Ready-made prompts for free text, secure text, yes/no,
//!   one-of-N choices and integers
//! - **Input Sanitization** - Composable filters (exact match, one-of match,
//!   type checks, integer ranges) usable as prompt validators
//! - **Pluggable Input** - The engine reads through the [`PromptReader`] trait,
//!   so scripted or piped input works the same as a terminal
//!
//! ## Feature Flags
//!
//! - **`std`** (default) - The interactive [`utils::Terminal`] reader (masked
//!   capture for secure prompts) and [`Prompter::new`]
//! - **`serde`** - `Serialize` for values, validity and batch results
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! prompter = { version = "0.1", features = ["serde"] }
//! ```
//!
//! ### Asking questions on the terminal
//!
//! ```rust,no_run
//! use prompter::recipes::{secure_prompt, single_value_prompt, yes_no_prompt};
//! use prompter::{Optionality, Prompter};
//!
//! let mut prompter = Prompter::new();
//!
//! let (color, _) = prompter.prompt(&single_value_prompt(
//!     "Favourite color",
//!     "[red, Green, puRple]",
//!     &["red", "Green", "puRple"],
//!     Optionality::NotRequired,
//!     "red",
//! ));
//! let (token, _) = prompter.prompt(&secure_prompt("API token", Optionality::Required, ""));
//! let (proceed, _) = prompter.prompt(&yes_no_prompt("Continue?", "[y/n]", Optionality::Required, false));
//!
//! println!("{} {} {}", color, token.as_str().map(str::len).unwrap_or(0), proceed);
//! ```
//!
//! ### Scripted input
//!
//! ```rust
//! use prompter::recipes::single_value_prompt;
//! use prompter::{LineReader, Optionality, Prompter, PromptValue};
//!
//! let mut prompter = Prompter::with_reader(LineReader::scripted("PURPLE\n"), std::io::sink());
//! let (color, _) = prompter.prompt(&single_value_prompt(
//!     "Color",
//!     "",
//!     &["red", "puRple"],
//!     Optionality::Required,
//!     "",
//! ));
//! assert_eq!(color, PromptValue::from("puRple"));
//! ```
//!
//! ## Architecture
//!
//! - **`prompt`** - The [`Prompt`] description and the [`PromptValue`] it produces
//! - **`recipes`** - Constructors for common prompts
//! - **`engine`** - [`Prompter`], the evaluation pipeline and result store
//! - **`reader`** - The [`PromptReader`] contract and [`LineReader`]
//! - **`utils`** - Sanitize filters and the terminal reader
//!
//! ## Logging
//!
//! The engine emits `tracing` events (`debug` per attempt, `warn` on read
//! failures). Install a subscriber in the host application to see them.

pub mod engine;
pub mod prompt;
pub mod reader;
pub mod recipes;
pub mod utils;

pub use engine::{PromptResult, Prompter, PrompterOptions};
pub use prompt::{Converter, Optionality, Prompt, PromptValue, Validator, Validity};
pub use reader::{LineReader, PromptReader, ReadError};

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        pub use utils::Terminal;
    }
}
