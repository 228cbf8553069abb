use crate::{
    cli::Args,
    config::{QuestionFile, QuestionSpec},
    constants::demo,
    error::Result,
    host::{PromptHost, TerminalHost},
    ioutils::read_answers,
    prompt::Theme,
    questionnaire::Questionnaire,
    registry::PromptRegistry,
};
use indexmap::IndexMap;
use log::debug;

/// Main CLI runner: builds the questions, asks them and prints the answers
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        self.run_with(&mut TerminalHost::new())
    }

    /// Same as [`Runner::run`] with a caller-supplied host.
    pub fn run_with(self, host: &mut dyn PromptHost) -> Result<()> {
        let questions = self.load_questions()?;
        let prefilled = read_answers(self.args.answers.as_deref())?;
        let registry = PromptRegistry::with_defaults().with_base_theme(self.base_theme());

        let answers = Questionnaire::new(&registry, questions)
            .non_interactive(self.args.non_interactive)
            .ask(host, &prefilled)?;

        println!("{}", self.format_answers(&answers)?);
        Ok(())
    }

    /// Questions from `--config`, from the single-question flags, or the demo question.
    fn load_questions(&self) -> Result<IndexMap<String, QuestionSpec>> {
        if let Some(path) = &self.args.config {
            let file = QuestionFile::load(path)?;
            file.validate()?;
            return Ok(file.into_questions());
        }

        let question = match &self.args.message {
            Some(message) => QuestionSpec {
                default: self.args.default.clone(),
                hint: self.args.hint.clone(),
                required: self.args.required,
                pattern: self.args.pattern.clone(),
                transform: self.args.transform,
                ..QuestionSpec::new(message)
            },
            None => {
                debug!("No question configured, asking the demo question");
                QuestionSpec::demo()
            }
        };
        question.validate(demo::NAME)?;

        Ok(IndexMap::from([(demo::NAME.to_string(), question)]))
    }

    fn base_theme(&self) -> Theme {
        let mut theme = Theme::default();
        if let Some(mode) = self.args.failure_mode {
            theme.validation_failure_mode = mode;
        }
        theme
    }

    fn format_answers(&self, answers: &IndexMap<String, String>) -> Result<String> {
        if self.args.json {
            return Ok(serde_json::to_string_pretty(answers)?);
        }
        if answers.len() == 1 {
            if let Some(answer) = answers.values().next() {
                return Ok(format!("Your input: {answer}"));
            }
        }
        Ok(answers.iter().map(|(name, answer)| format!("{name}: {answer}")).collect::<Vec<_>>().join("\n"))
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}
