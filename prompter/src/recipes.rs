//! # Recipes
//!
//! Ready-made [`Prompt`]s for the common question shapes. Every recipe is a
//! pure constructor; nothing here reads or writes the terminal. The returned
//! prompt can still be tweaked with the builder methods, e.g.
//! `yes_no_prompt(..).case_sensitive(true)`.
use tracing::debug;

use crate::prompt::{Optionality, Prompt, PromptValue, Validity};
use crate::utils::sanitize::{DesiredType, Sanitize};

/// Tokens accepted as "yes".
pub const AFFIRMATIVE_ANSWERS: &[&str] = &["yes", "y", "yo", "si", "yup", "ya", "yep"];

/// Tokens accepted as "no".
pub const NEGATIVE_ANSWERS: &[&str] = &["no", "n", "nope", "no way", "nuh uh", "nah"];

/// A free-text prompt with no restrictions. Allows for a default.
pub fn simple_prompt(message: &str, required: Optionality, default_value: &str) -> Prompt {
    Prompt::new(message)
        .with_default(default_value)
        .required(required)
}

/// Like [`simple_prompt`], but the entry is not echoed.
pub fn secure_prompt(message: &str, required: Optionality, default_value: &str) -> Prompt {
    simple_prompt(message, required, default_value).secure(true)
}

/// Asks a yes or no question. The final value is a [`PromptValue::Bool`].
///
/// Unrecognised answers are invalid and cause the question to be asked again.
pub fn yes_no_prompt(
    message: &str,
    hint: &str,
    required: Optionality,
    default_value: bool,
) -> Prompt {
    Prompt::new(message)
        .with_hint(hint)
        .with_default(default_value)
        .required(required)
        .fail_if_no_match(true)
        .with_validator(|prompt, value| {
            let validity = match yes_or_no(value, prompt.case_sensitive_match) {
                Some(_) => Validity::Valid,
                None => Validity::Invalid,
            };
            (value.to_string(), validity)
        })
        .with_converter(|prompt, value| {
            PromptValue::Bool(is_positive(value, false, prompt.case_sensitive_match))
        })
}

/// Asks for one answer out of `values`.
///
/// A match returns the option as written in `values`, not as typed. An entry
/// outside `values` yields `default_value`, which counts as valid unless the
/// prompt has `fail_if_no_match` set.
pub fn single_value_prompt(
    message: &str,
    hint: &str,
    values: &[&str],
    required: Optionality,
    default_value: &str,
) -> Prompt {
    let options = Sanitize::MatchStrings(values.iter().map(|v| v.to_string()).collect());
    let fallback = default_value.to_string();

    Prompt::new(message)
        .with_hint(hint)
        .with_default(default_value)
        .required(required)
        .with_validator(move |prompt, value| {
            match options.validate(value, prompt.case_sensitive_match) {
                Ok(option) => (option, Validity::Valid),
                Err(e) => {
                    debug!(prompt = %prompt.message, "{}", e);
                    let validity = if prompt.fail_if_no_match {
                        Validity::Invalid
                    } else {
                        Validity::Valid
                    };
                    (fallback.clone(), validity)
                }
            }
        })
}

/// Asks for an entry that must pass every filter in `filters`.
///
/// The final value is the entry as rewritten by the filters.
pub fn sanitized_prompt(
    message: &str,
    hint: &str,
    filters: Vec<Sanitize>,
    required: Optionality,
    default_value: impl Into<PromptValue>,
) -> Prompt {
    Prompt::new(message)
        .with_hint(hint)
        .with_default(default_value)
        .required(required)
        .with_validator(move |prompt, value| {
            match Sanitize::execute(value, &filters, prompt.case_sensitive_match) {
                Ok(clean) => (clean, Validity::Valid),
                Err(e) => {
                    debug!(prompt = %prompt.message, "{}", e);
                    (value.to_string(), Validity::Invalid)
                }
            }
        })
}

/// Asks for an integer, optionally within an inclusive `range`.
/// The final value is a [`PromptValue::Integer`].
pub fn number_prompt(
    message: &str,
    hint: &str,
    range: Option<(i64, i64)>,
    required: Optionality,
    default_value: i64,
) -> Prompt {
    let filters = match range {
        Some((min, max)) => vec![Sanitize::IsBetween(min, max)],
        None => vec![Sanitize::IsType(DesiredType::Integer)],
    };

    sanitized_prompt(message, hint, filters, required, default_value).with_converter(
        move |_, value| {
            DesiredType::Integer
                .parse(value)
                .unwrap_or(PromptValue::Integer(default_value))
        },
    )
}

/// Looks `value` up in the yes/no vocabulary.
pub fn yes_or_no(value: &str, case_sensitive: bool) -> Option<bool> {
    let value = if case_sensitive {
        value.to_string()
    } else {
        value.to_lowercase()
    };
    if AFFIRMATIVE_ANSWERS.contains(&value.as_str()) {
        Some(true)
    } else if NEGATIVE_ANSWERS.contains(&value.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// `true` for an affirmative token, `false` for a negative one, and
/// `no_match` for anything else (including the empty string).
fn is_positive(value: &str, no_match: bool, case_sensitive: bool) -> bool {
    if value.is_empty() {
        return no_match;
    }
    yes_or_no(value, case_sensitive).unwrap_or(no_match)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(prompt: &Prompt, value: &str) -> (String, Validity) {
        let validator = prompt.validator.clone().expect("recipe has a validator");
        validator(prompt, value)
    }

    fn convert(prompt: &Prompt, value: &str) -> PromptValue {
        let converter = prompt.converter.clone().expect("recipe has a converter");
        converter(prompt, value)
    }

    #[test]
    fn test_simple_prompt_has_no_capabilities() {
        let prompt = simple_prompt("Enter a value", Optionality::NotRequired, "test 1234");
        assert!(prompt.validator.is_none());
        assert!(prompt.converter.is_none());
        assert!(prompt.retry_if_no_match);
        assert!(!prompt.secure_entry);
        assert_eq!(prompt.default_value, PromptValue::from("test 1234"));
    }

    #[test]
    fn test_secure_prompt_is_secure() {
        let prompt = secure_prompt("Password", Optionality::Required, "");
        assert!(prompt.secure_entry);
        assert_eq!(prompt.message, "Password");
    }

    #[test]
    fn test_yes_no_vocabulary() {
        let prompt = yes_no_prompt("Continue?", "[y/n]", Optionality::Required, false);
        for token in AFFIRMATIVE_ANSWERS {
            assert_eq!(validate(&prompt, token).1, Validity::Valid);
            assert_eq!(convert(&prompt, token), PromptValue::Bool(true));
        }
        for token in NEGATIVE_ANSWERS {
            assert_eq!(validate(&prompt, token).1, Validity::Valid);
            assert_eq!(convert(&prompt, token), PromptValue::Bool(false));
        }
        assert_eq!(validate(&prompt, "turnip").1, Validity::Invalid);
    }

    #[test]
    fn test_yes_no_case_folding() {
        let prompt = yes_no_prompt("Continue?", "", Optionality::Required, false);
        assert_eq!(convert(&prompt, "YeP"), PromptValue::Bool(true));
        assert_eq!(convert(&prompt, "No Way"), PromptValue::Bool(false));

        let strict = prompt.case_sensitive(true);
        assert_eq!(validate(&strict, "YeP").1, Validity::Invalid);
        assert_eq!(validate(&strict, "yep").1, Validity::Valid);
    }

    #[test]
    fn test_yes_no_empty_converts_to_false() {
        let prompt = yes_no_prompt("Continue?", "", Optionality::NotRequired, true);
        assert_eq!(convert(&prompt, ""), PromptValue::Bool(false));
    }

    #[test]
    fn test_single_value_returns_original_casing() {
        let values = ["red", "Green", "YELLOW", "puRple"];
        let prompt = single_value_prompt("Color", "", &values, Optionality::Required, "");
        assert_eq!(
            validate(&prompt, "PURPLE"),
            ("puRple".to_string(), Validity::Valid)
        );
        assert_eq!(
            validate(&prompt, "green"),
            ("Green".to_string(), Validity::Valid)
        );
    }

    #[test]
    fn test_single_value_no_match_uses_default() {
        let values = ["red", "Green", "YELLOW", "puRple"];
        let prompt = single_value_prompt("Color", "", &values, Optionality::Required, "red");
        assert_eq!(
            validate(&prompt, "blue"),
            ("red".to_string(), Validity::Valid)
        );

        let failing = prompt.fail_if_no_match(true);
        assert_eq!(
            validate(&failing, "blue"),
            ("red".to_string(), Validity::Invalid)
        );
    }

    #[test]
    fn test_single_value_case_sensitive() {
        let prompt = single_value_prompt("Color", "", &["puRple"], Optionality::Required, "none")
            .case_sensitive(true);
        assert_eq!(validate(&prompt, "purple").0, "none");
        assert_eq!(validate(&prompt, "puRple").0, "puRple");
    }

    #[test]
    fn test_number_prompt_range() {
        let prompt = number_prompt("Threads", "(1-16)", Some((1, 16)), Optionality::Required, 4);
        assert_eq!(validate(&prompt, "8").1, Validity::Valid);
        assert_eq!(validate(&prompt, "17").1, Validity::Invalid);
        assert_eq!(validate(&prompt, "eight").1, Validity::Invalid);
        assert_eq!(convert(&prompt, "8"), PromptValue::Integer(8));
        assert_eq!(prompt.default_value, PromptValue::Integer(4));
    }

    #[test]
    fn test_sanitized_prompt_rewrites_entry() {
        let prompt = sanitized_prompt(
            "Scan type",
            "",
            vec![Sanitize::MatchStrings(vec!["Quick".to_string(), "Deep".to_string()])],
            Optionality::Required,
            "Quick",
        );
        assert_eq!(
            validate(&prompt, "deep"),
            ("Deep".to_string(), Validity::Valid)
        );
        assert_eq!(validate(&prompt, "custom").1, Validity::Invalid);
    }
}
