//! Prompt types available to question files, looked up by name

use crate::{
    config::QuestionSpec,
    constants::CUSTOM_INPUT_TYPE,
    error::{Error, Result},
    prompt::{InputPrompt, Theme},
};
use indexmap::IndexMap;
use log::debug;

/// Builds a ready-to-run prompt for a question on top of a base theme.
pub type PromptFactory = fn(&QuestionSpec, &Theme) -> Result<InputPrompt>;

#[derive(Debug, Clone)]
pub struct PromptRegistry {
    factories: IndexMap<String, PromptFactory>,
    base_theme: Theme,
}

impl PromptRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self { factories: IndexMap::new(), base_theme: Theme::default() }
    }

    /// A registry with the built-in `custom-input` prompt.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(CUSTOM_INPUT_TYPE, custom_input);
        registry
    }

    pub fn with_base_theme(mut self, theme: Theme) -> Self {
        self.base_theme = theme;
        self
    }

    /// Registers `factory` under `name`, replacing any previous registration.
    pub fn register(&mut self, name: impl Into<String>, factory: PromptFactory) {
        let name = name.into();
        debug!("Registering prompt type '{name}'");
        self.factories.insert(name, factory);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn create(&self, question: &QuestionSpec) -> Result<InputPrompt> {
        let factory = self
            .factories
            .get(&question.r#type)
            .ok_or_else(|| Error::UnknownPromptType(question.r#type.clone()))?;
        factory(question, &self.base_theme)
    }
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn custom_input(question: &QuestionSpec, theme: &Theme) -> Result<InputPrompt> {
    Ok(InputPrompt::with_base_theme(question.to_input_config()?, theme.clone()))
}
