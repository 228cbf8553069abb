//! The custom input prompt: configuration plus the keystroke and render cycle

use super::{
    interface::{KeyKind, LineEditor, Transformer, ValidationOutcome, Validator},
    render::{render, Frame, RenderContext},
    state::{Effect, PromptState, Status},
    theme::{Theme, ThemeOverrides},
};
use crate::{constants::validation, error::Result, validation::AcceptAll};

/// Per-invocation configuration of an [`InputPrompt`].
pub struct InputConfig {
    pub message: String,
    pub default: Option<String>,
    pub required: bool,
    pub transformer: Option<Box<dyn Transformer>>,
    pub validator: Box<dyn Validator>,
    pub hint: Option<String>,
    pub theme: ThemeOverrides,
}

impl InputConfig {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
            required: false,
            transformer: None,
            validator: Box::new(AcceptAll),
            hint: None,
            theme: ThemeOverrides::default(),
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_transformer(mut self, transformer: impl Transformer + 'static) -> Self {
        self.transformer = Some(Box::new(transformer));
        self
    }

    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_theme(mut self, theme: ThemeOverrides) -> Self {
        self.theme = theme;
        self
    }
}

impl std::fmt::Debug for InputConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputConfig")
            .field("message", &self.message)
            .field("default", &self.default)
            .field("required", &self.required)
            .field("transformer", &self.transformer.is_some())
            .field("hint", &self.hint)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

/// A single text question with default, validation, transformer and hint.
#[derive(Debug)]
pub struct InputPrompt {
    config: InputConfig,
    theme: Theme,
    state: PromptState,
}

impl InputPrompt {
    pub fn new(config: InputConfig) -> Self {
        Self::with_base_theme(config, Theme::default())
    }

    /// Builds the prompt on top of `base`, with the config's overrides applied.
    pub fn with_base_theme(config: InputConfig, base: Theme) -> Self {
        let theme = base.merged(&config.theme);
        let state = PromptState::new(config.default.clone());
        Self { config, theme, state }
    }

    pub fn message(&self) -> &str {
        &self.config.message
    }

    pub fn state(&self) -> &PromptState {
        &self.state
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Runs the required check and the validator on `answer`.
    pub fn check(&self, answer: &str) -> Result<ValidationOutcome> {
        if self.config.required && answer.is_empty() {
            return Ok(ValidationOutcome::invalid(validation::REQUIRED));
        }
        self.config.validator.validate(answer)
    }

    /// Applies one keystroke to the state; `editor` must already contain the key's edit.
    ///
    /// An [`Effect::Validate`] leaves the prompt in [`Status::Loading`] until
    /// [`InputPrompt::complete`] is called with the carried answer.
    pub fn handle_key(&mut self, key: KeyKind, editor: &dyn LineEditor) -> Effect {
        self.state.handle_key(key, editor)
    }

    /// Validates a submitted answer and applies the outcome.
    ///
    /// Returns the answer once the prompt resolves. Errors raised by the validator
    /// are returned as-is and leave the prompt in [`Status::Loading`].
    pub fn complete(
        &mut self,
        answer: String,
        editor: &mut dyn LineEditor,
    ) -> Result<Option<String>> {
        let outcome = self.check(&answer)?;
        let mode = self.theme.validation_failure_mode;
        Ok(self.state.finish_validation(answer, outcome, mode, editor))
    }

    /// [`InputPrompt::handle_key`] and, on submission, [`InputPrompt::complete`].
    pub fn on_key(
        &mut self,
        key: KeyKind,
        editor: &mut dyn LineEditor,
    ) -> Result<Option<String>> {
        match self.handle_key(key, &*editor) {
            Effect::None => Ok(None),
            Effect::Validate(answer) => self.complete(answer, editor),
        }
    }

    pub fn is_done(&self) -> bool {
        self.state.status == Status::Done
    }

    pub fn render(&self) -> Frame {
        let context = RenderContext {
            message: &self.config.message,
            hint: self.config.hint.as_deref(),
            transformer: self.config.transformer.as_deref(),
            theme: &self.theme,
        };
        render(&self.state, &context)
    }
}
