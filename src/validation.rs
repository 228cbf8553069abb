//! Built-in answer validators

use crate::{
    constants::validation,
    error::Result,
    filters::*,
    prompt::{ValidationOutcome, Validator},
};
use log::debug;
use minijinja::{context, Environment};
use regex::Regex;

/// Accepts every answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Validator for AcceptAll {
    fn validate(&self, _value: &str) -> Result<ValidationOutcome> {
        Ok(ValidationOutcome::Valid)
    }
}

/// Rejects answers that are empty once trimmed.
#[derive(Debug, Clone)]
pub struct NotBlank {
    pub message: String,
}

impl Default for NotBlank {
    fn default() -> Self {
        Self { message: validation::NOT_BLANK.to_string() }
    }
}

impl Validator for NotBlank {
    fn validate(&self, value: &str) -> Result<ValidationOutcome> {
        if value.trim().is_empty() {
            Ok(ValidationOutcome::invalid(&self.message))
        } else {
            Ok(ValidationOutcome::Valid)
        }
    }
}

/// Requires the answer to match a regular expression.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    regex: Regex,
    message: Option<String>,
}

impl PatternValidator {
    pub fn new(pattern: &str, message: Option<String>) -> Result<Self> {
        Ok(Self { regex: Regex::new(pattern)?, message })
    }
}

impl Validator for PatternValidator {
    fn validate(&self, value: &str) -> Result<ValidationOutcome> {
        if self.regex.is_match(value) {
            Ok(ValidationOutcome::Valid)
        } else {
            Ok(ValidationOutcome::Invalid(self.message.clone()))
        }
    }
}

/// Runs several validators in order; the first rejection wins.
#[derive(Default)]
pub struct AllOf(pub Vec<Box<dyn Validator>>);

impl AllOf {
    pub fn push(&mut self, validator: impl Validator + 'static) {
        self.0.push(Box::new(validator));
    }
}

impl Validator for AllOf {
    fn validate(&self, value: &str) -> Result<ValidationOutcome> {
        for validator in &self.0 {
            let outcome = validator.validate(value)?;
            if !outcome.is_valid() {
                return Ok(outcome);
            }
        }
        Ok(ValidationOutcome::Valid)
    }
}

/// Evaluates a MiniJinja condition with the answer bound to `value`.
///
/// When the condition is falsy the error message, itself a template, is
/// rendered with the same context.
pub struct ExpressionValidator {
    env: Environment<'static>,
    condition: String,
    error_message: String,
}

impl ExpressionValidator {
    pub fn new(condition: impl Into<String>, error_message: impl Into<String>) -> Self {
        let mut env = Environment::new();

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("train_case", to_train_case);
        env.add_filter("regex", regex_filter);

        Self { env, condition: condition.into(), error_message: error_message.into() }
    }

    fn execute_expression(&self, value: &str) -> Result<bool> {
        // Only compile the expression if it's not empty
        if self.condition.is_empty() {
            return Ok(true);
        }
        let expr = self.env.compile_expression_owned(self.condition.clone())?;
        Ok(expr.eval(context! { value })?.is_true())
    }
}

impl Validator for ExpressionValidator {
    fn validate(&self, value: &str) -> Result<ValidationOutcome> {
        if self.execute_expression(value)? {
            return Ok(ValidationOutcome::Valid);
        }
        debug!("Condition '{}' rejected {value:?}", self.condition);
        let message = self.env.render_str(&self.error_message, context! { value })?;
        Ok(ValidationOutcome::invalid(message))
    }
}

impl std::fmt::Debug for ExpressionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpressionValidator")
            .field("condition", &self.condition)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}
