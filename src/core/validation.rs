//! Input validation for AI requests
//!
//! Pure checks over the text a caller asked us to send upstream. The order is
//! fixed: presence, type, emptiness, then length on the untrimmed text.

use serde_json::Value;
use std::fmt;

/// Default maximum input length in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Raw input as it arrived in the JSON body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputText<'a> {
    /// Field absent or `null`
    Missing,
    /// A JSON string
    Text(&'a str),
    /// Any other JSON value
    NotText,
}

impl<'a> InputText<'a> {
    pub fn from_json(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => InputText::Missing,
            Some(Value::String(s)) => InputText::Text(s),
            Some(_) => InputText::NotText,
        }
    }
}

impl<'a> From<&'a str> for InputText<'a> {
    fn from(s: &'a str) -> Self {
        InputText::Text(s)
    }
}

/// Why an input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    Required,
    WrongType,
    Empty,
    TooLong { max: usize },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::Required => f.write_str("Input is required"),
            ValidationFailure::WrongType => f.write_str("Input must be text"),
            ValidationFailure::Empty => f.write_str("Input cannot be empty"),
            ValidationFailure::TooLong { max } => {
                write!(f, "Too long. Max {} characters allowed.", max)
            }
        }
    }
}

impl std::error::Error for ValidationFailure {}

/// Outcome of a validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Trimmed input
    Valid(String),
    Invalid(ValidationFailure),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn into_result(self) -> Result<String, ValidationFailure> {
        match self {
            ValidationResult::Valid(text) => Ok(text),
            ValidationResult::Invalid(reason) => Err(reason),
        }
    }
}

/// Validator with a configurable length limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputValidator {
    max_chars: usize,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(MAX_DESCRIPTION_LENGTH)
    }
}

impl InputValidator {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn validate(&self, input: InputText<'_>) -> ValidationResult {
        let text = match input {
            InputText::Missing => return ValidationResult::Invalid(ValidationFailure::Required),
            InputText::NotText => return ValidationResult::Invalid(ValidationFailure::WrongType),
            InputText::Text(text) => text,
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ValidationResult::Invalid(ValidationFailure::Empty);
        }

        // Length is measured before trimming
        if text.chars().count() > self.max_chars {
            return ValidationResult::Invalid(ValidationFailure::TooLong {
                max: self.max_chars,
            });
        }

        ValidationResult::Valid(trimmed.to_string())
    }
}

/// Validate with the default limit
pub fn validate(input: InputText<'_>) -> ValidationResult {
    InputValidator::default().validate(input)
}
