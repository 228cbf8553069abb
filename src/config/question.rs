//! Question definition and conversion into a prompt configuration

use crate::{
    config::types::{get_default_prompt_type, Validation},
    constants::demo,
    error::{Error, Result},
    prompt::{InputConfig, ThemeOverrides},
    transform::{CaseKind, CaseTransformer, MaskTransformer},
    validation::{AllOf, ExpressionValidator, NotBlank, PatternValidator},
};
use serde::Deserialize;

/// Represents a single question in a question file
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionSpec {
    /// Registered prompt type used to ask the question
    #[serde(rename = "type", default = "get_default_prompt_type")]
    pub r#type: String,
    /// Label shown before the input
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub default: Option<String>,
    /// Reject empty submissions
    #[serde(default)]
    pub required: bool,
    /// Grey hint shown under the input while it is empty
    #[serde(default)]
    pub hint: Option<String>,
    /// Display the value in another case
    #[serde(default)]
    pub transform: Option<CaseKind>,
    /// Display every typed char as this one
    #[serde(default)]
    pub mask: Option<char>,
    /// Reject answers that are empty once trimmed
    #[serde(default)]
    pub not_blank: bool,
    /// Regular expression the answer must match
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub pattern_error: Option<String>,
    #[serde(default)]
    pub validation: Option<Validation>,
    #[serde(default)]
    pub theme: ThemeOverrides,
}

impl QuestionSpec {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            r#type: get_default_prompt_type(),
            message: message.into(),
            default: None,
            required: false,
            hint: None,
            transform: None,
            mask: None,
            not_blank: false,
            pattern: None,
            pattern_error: None,
            validation: None,
            theme: ThemeOverrides::default(),
        }
    }

    /// The question asked when nothing else is configured.
    pub fn demo() -> Self {
        Self {
            hint: Some(demo::HINT.to_string()),
            required: true,
            not_blank: true,
            ..Self::new(demo::MESSAGE)
        }
    }

    pub fn validate(&self, name: &str) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(Error::ConfigValidation(format!(
                "question '{name}' must have a non-empty message"
            )));
        }
        if self.transform.is_some() && self.mask.is_some() {
            return Err(Error::ConfigValidation(format!(
                "question '{name}' cannot set both 'transform' and 'mask'"
            )));
        }
        if let Some(pattern) = &self.pattern {
            regex::Regex::new(pattern).map_err(|e| {
                Error::ConfigValidation(format!("question '{name}' has an invalid pattern: {e}"))
            })?;
        }
        Ok(())
    }

    /// Builds the prompt configuration, chaining validators in the order
    /// `not_blank`, `pattern`, `validation`.
    pub fn to_input_config(&self) -> Result<InputConfig> {
        let mut config = InputConfig::new(&self.message)
            .with_required(self.required)
            .with_theme(self.theme.clone());
        config.default = self.default.clone();
        config.hint = self.hint.clone();

        if let Some(kind) = self.transform {
            config = config.with_transformer(CaseTransformer(kind));
        }
        if let Some(mask) = self.mask {
            config = config.with_transformer(MaskTransformer { mask });
        }

        let mut validators = AllOf::default();
        if self.not_blank {
            validators.push(NotBlank::default());
        }
        if let Some(pattern) = &self.pattern {
            validators.push(PatternValidator::new(pattern, self.pattern_error.clone())?);
        }
        if let Some(validation) = &self.validation {
            validators.push(ExpressionValidator::new(
                &validation.condition,
                &validation.error_message,
            ));
        }
        Ok(config.with_validator(validators))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{ValidationOutcome, Validator};

    #[test]
    fn test_demo_question() {
        let question = QuestionSpec::demo();
        assert_eq!(question.r#type, "custom-input");
        assert_eq!(question.message, "Enter input:");
        assert_eq!(question.hint.as_deref(), Some("<Enter> Show Menu"));
        assert!(question.required);

        let config = question.to_input_config().unwrap();
        assert_eq!(
            config.validator.validate("  ").unwrap(),
            ValidationOutcome::invalid("Input cannot be empty")
        );
    }

    #[test]
    fn test_rejects_empty_message() {
        let err = QuestionSpec::new(" ").validate("name").unwrap_err();
        assert!(matches!(err, Error::ConfigValidation(_)));
    }

    #[test]
    fn test_rejects_transform_with_mask() {
        let question = QuestionSpec {
            transform: Some(CaseKind::Upper),
            mask: Some('*'),
            ..QuestionSpec::new("Secret:")
        };
        assert!(question.validate("secret").is_err());
    }

    #[test]
    fn test_rejects_invalid_pattern() {
        let question =
            QuestionSpec { pattern: Some("([".into()), ..QuestionSpec::new("Name:") };
        assert!(matches!(question.validate("name"), Err(Error::ConfigValidation(_))));
    }

    #[test]
    fn test_validators_run_in_order() {
        let question = QuestionSpec {
            not_blank: true,
            pattern: Some("^[a-z_]+$".into()),
            pattern_error: Some("letters only".into()),
            validation: Some(Validation {
                condition: "value | length <= 5".into(),
                error_message: "'{{ value }}' is too long".into(),
            }),
            ..QuestionSpec::new("Name:")
        };
        let validator = question.to_input_config().unwrap().validator;
        assert_eq!(validator.validate("").unwrap(), ValidationOutcome::invalid("Input cannot be empty"));
        assert_eq!(validator.validate("a1").unwrap(), ValidationOutcome::invalid("letters only"));
        assert_eq!(
            validator.validate("abcdefg").unwrap(),
            ValidationOutcome::invalid("'abcdefg' is too long")
        );
        assert!(validator.validate("abc").unwrap().is_valid());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let yaml = r#"
message: "Project name:"
default: demo
transform: kebab
theme:
  validation_failure_mode: clear
"#;
        let question: QuestionSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(question.r#type, "custom-input");
        assert_eq!(question.default.as_deref(), Some("demo"));
        assert_eq!(question.transform, Some(CaseKind::Kebab));
        assert!(!question.required);
        assert!(question.validate("project").is_ok());
    }
}
