//! Pure interfaces the input prompt consumes
//!
//! These traits describe what the prompt needs from its surroundings: a line
//! editor that owns the typed text, a validator for submissions and an optional
//! display transformer. None of them depend on a terminal.

use crate::error::Result;

/// Classification of a keystroke as seen by the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Enter,
    Backspace,
    /// Any key that may have edited the line (characters, cursor movement, delete).
    Other,
}

/// The line-editing buffer owned by the host.
///
/// The buffer is the source of truth for the typed text; the prompt copies it on
/// every non-Enter keystroke and overwrites it after a rejected submission.
pub trait LineEditor {
    /// Full current content of the line.
    fn line(&self) -> &str;

    /// Replace the whole content of the line.
    fn write(&mut self, text: &str);
}

/// Result of validating a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// Rejected, with an optional reason shown to the user.
    Invalid(Option<String>),
}

impl ValidationOutcome {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(Some(message.into()))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for ValidationOutcome {
    fn from(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid(None)
        }
    }
}

/// Acceptance check for a submitted answer.
///
/// Returning `Err` is not a validation failure: it aborts the prompt and is
/// handed to whoever drives it.
pub trait Validator {
    fn validate(&self, value: &str) -> Result<ValidationOutcome>;
}

impl<F> Validator for F
where
    F: Fn(&str) -> Result<ValidationOutcome>,
{
    fn validate(&self, value: &str) -> Result<ValidationOutcome> {
        self(value)
    }
}

/// Extra information passed to a [`Transformer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformContext {
    /// `true` only once the prompt has resolved.
    pub is_final: bool,
}

/// Custom display formatting for the typed value.
pub trait Transformer {
    fn transform(&self, value: &str, context: TransformContext) -> String;
}

impl<F> Transformer for F
where
    F: Fn(&str, TransformContext) -> String,
{
    fn transform(&self, value: &str, context: TransformContext) -> String {
        self(value, context)
    }
}
