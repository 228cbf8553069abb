//! Asks an ordered set of questions, one prompt after the other

use crate::{
    config::QuestionSpec,
    constants::validation,
    error::{Error, Result},
    host::PromptHost,
    ioutils::answer_to_string,
    prompt::{InputPrompt, ValidationOutcome},
    registry::PromptRegistry,
};
use indexmap::IndexMap;
use log::{debug, info};
use serde_json::{Map, Value};

pub struct Questionnaire<'a> {
    registry: &'a PromptRegistry,
    questions: IndexMap<String, QuestionSpec>,
    non_interactive: bool,
}

impl<'a> Questionnaire<'a> {
    pub fn new(registry: &'a PromptRegistry, questions: IndexMap<String, QuestionSpec>) -> Self {
        Self { registry, questions, non_interactive: false }
    }

    /// Never start a prompt; every answer must come from `prefilled` or a default.
    pub fn non_interactive(mut self, non_interactive: bool) -> Self {
        self.non_interactive = non_interactive;
        self
    }

    pub fn questions(&self) -> &IndexMap<String, QuestionSpec> {
        &self.questions
    }

    /// Collects one answer per question, in declaration order.
    ///
    /// Prefilled answers skip their prompt but still go through the question's
    /// required check and validators.
    pub fn ask(
        &self,
        host: &mut dyn PromptHost,
        prefilled: &Map<String, Value>,
    ) -> Result<IndexMap<String, String>> {
        let mut answers = IndexMap::with_capacity(self.questions.len());

        for (name, question) in &self.questions {
            let mut prompt = self.registry.create(question)?;

            let answer = if let Some(value) = prefilled.get(name) {
                debug!("Using prefilled answer for '{name}'");
                accept(name, &prompt, answer_to_string(value))?
            } else if self.non_interactive {
                match question.default.as_deref().filter(|d| !d.is_empty()) {
                    Some(default) => {
                        debug!("Using default answer for '{name}'");
                        accept(name, &prompt, default.to_string())?
                    }
                    None => {
                        return Err(Error::ConfigValidation(format!(
                            "question '{name}' has no prefilled answer or default in non-interactive mode"
                        )))
                    }
                }
            } else {
                host.run(&mut prompt)?
            };

            info!("Answered '{name}'");
            answers.insert(name.clone(), answer);
        }

        Ok(answers)
    }
}

fn accept(name: &str, prompt: &InputPrompt, answer: String) -> Result<String> {
    match prompt.check(&answer)? {
        ValidationOutcome::Valid => Ok(answer),
        ValidationOutcome::Invalid(reason) => Err(Error::Validation {
            question: name.to_string(),
            message: reason.unwrap_or_else(|| validation::INVALID_ANSWER.to_string()),
        }),
    }
}
