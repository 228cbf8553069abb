//! Session state of the input prompt and its transition function

use super::{
    interface::{KeyKind, LineEditor, ValidationOutcome},
    theme::FailureMode,
};
use crate::constants::validation;
use log::{debug, trace};

/// Interaction phase of the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Awaiting input.
    #[default]
    Idle,
    /// A submission is being validated.
    Loading,
    /// Resolved. Terminal.
    Done,
}

/// What the driver has to do after a keystroke was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Validate `answer` and report back through [`PromptState::finish_validation`].
    Validate(String),
}

/// Mutable state of one prompt invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptState {
    pub status: Status,
    pub value: String,
    pub default_value: Option<String>,
    pub error_msg: Option<String>,
}

impl PromptState {
    pub fn new(default_value: Option<String>) -> Self {
        Self {
            default_value: default_value.filter(|d| !d.is_empty()),
            ..Self::default()
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == Status::Idle
    }

    /// The answer an Enter press would submit right now.
    pub fn answer(&self) -> String {
        if self.value.is_empty() {
            self.default_value.clone().unwrap_or_default()
        } else {
            self.value.clone()
        }
    }

    /// Applies a keystroke.
    ///
    /// `editor` must already reflect the key's edit. On Enter the state moves to
    /// [`Status::Loading`] and the returned effect carries the answer to validate.
    pub fn handle_key(&mut self, key: KeyKind, editor: &dyn LineEditor) -> Effect {
        if !self.is_idle() {
            trace!("Ignoring {key:?} while {:?}", self.status);
            return Effect::None;
        }

        match key {
            KeyKind::Enter => {
                let answer = self.answer();
                debug!("Submitting answer {answer:?}");
                self.status = Status::Loading;
                Effect::Validate(answer)
            }
            KeyKind::Backspace if self.value.is_empty() => {
                if self.default_value.take().is_some() {
                    debug!("Default value cleared");
                }
                Effect::None
            }
            KeyKind::Backspace | KeyKind::Other => {
                self.value = editor.line().to_string();
                self.error_msg = None;
                Effect::None
            }
        }
    }

    /// Applies the outcome of validating `answer`.
    ///
    /// Returns the resolved answer when it was accepted. Has no effect unless a
    /// submission is in flight.
    pub fn finish_validation(
        &mut self,
        answer: String,
        outcome: ValidationOutcome,
        mode: FailureMode,
        editor: &mut dyn LineEditor,
    ) -> Option<String> {
        if self.status != Status::Loading {
            return None;
        }

        match outcome {
            ValidationOutcome::Valid => {
                debug!("Answer accepted");
                self.value = answer.clone();
                self.status = Status::Done;
                Some(answer)
            }
            ValidationOutcome::Invalid(message) => {
                debug!("Answer rejected: {message:?}");
                match mode {
                    FailureMode::Clear => {
                        self.value.clear();
                        editor.write("");
                    }
                    FailureMode::Keep => editor.write(&self.value),
                }
                self.error_msg = Some(
                    message.unwrap_or_else(|| validation::INVALID_ANSWER.to_string()),
                );
                self.status = Status::Idle;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Line(String);

    impl LineEditor for Line {
        fn line(&self) -> &str {
            &self.0
        }

        fn write(&mut self, text: &str) {
            self.0 = text.to_string();
        }
    }

    fn typed(state: &mut PromptState, editor: &mut Line, text: &str) {
        for c in text.chars() {
            editor.0.push(c);
            state.handle_key(KeyKind::Other, &*editor);
        }
    }

    #[test]
    fn test_enter_submits_typed_value() {
        let mut state = PromptState::new(Some("fallback".into()));
        let mut editor = Line::default();
        typed(&mut state, &mut editor, "abc");

        let effect = state.handle_key(KeyKind::Enter, &editor);
        assert_eq!(effect, Effect::Validate("abc".into()));
        assert_eq!(state.status, Status::Loading);

        let resolved = state.finish_validation(
            "abc".into(),
            ValidationOutcome::Valid,
            FailureMode::Keep,
            &mut editor,
        );
        assert_eq!(resolved.as_deref(), Some("abc"));
        assert_eq!(state.status, Status::Done);
    }

    #[test]
    fn test_enter_on_empty_value_submits_default() {
        let mut state = PromptState::new(Some("fallback".into()));
        let editor = Line::default();
        assert_eq!(state.handle_key(KeyKind::Enter, &editor), Effect::Validate("fallback".into()));
    }

    #[test]
    fn test_empty_default_is_treated_as_absent() {
        let state = PromptState::new(Some(String::new()));
        assert_eq!(state.default_value, None);
        assert_eq!(state.answer(), "");
    }

    #[test]
    fn test_backspace_on_empty_value_clears_default_for_good() {
        let mut state = PromptState::new(Some("fallback".into()));
        let mut editor = Line::default();
        state.handle_key(KeyKind::Backspace, &editor);
        assert_eq!(state.default_value, None);

        typed(&mut state, &mut editor, "x");
        editor.0.clear();
        state.handle_key(KeyKind::Backspace, &editor);
        assert_eq!(state.value, "");
        assert_eq!(state.default_value, None);
        assert_eq!(state.handle_key(KeyKind::Enter, &editor), Effect::Validate(String::new()));
    }

    #[test]
    fn test_backspace_with_text_copies_editor_line() {
        let mut state = PromptState::new(Some("fallback".into()));
        let mut editor = Line::default();
        typed(&mut state, &mut editor, "ab");
        editor.0.pop();
        state.handle_key(KeyKind::Backspace, &editor);
        assert_eq!(state.value, "a");
        assert_eq!(state.default_value.as_deref(), Some("fallback"));
    }

    #[test]
    fn test_keys_are_ignored_while_loading() {
        let mut state = PromptState::new(None);
        let mut editor = Line::default();
        typed(&mut state, &mut editor, "abc");
        state.handle_key(KeyKind::Enter, &editor);
        let snapshot = state.clone();

        editor.0.push('z');
        for key in [KeyKind::Other, KeyKind::Backspace, KeyKind::Enter] {
            assert_eq!(state.handle_key(key, &editor), Effect::None);
            assert_eq!(state, snapshot);
        }
    }

    #[test]
    fn test_keys_are_ignored_when_done() {
        let mut state = PromptState::new(None);
        let mut editor = Line::default();
        typed(&mut state, &mut editor, "abc");
        state.handle_key(KeyKind::Enter, &editor);
        state.finish_validation(
            "abc".into(),
            ValidationOutcome::Valid,
            FailureMode::Keep,
            &mut editor,
        );
        let snapshot = state.clone();
        editor.0.clear();
        state.handle_key(KeyKind::Backspace, &editor);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_rejection_in_keep_mode_restores_editor() {
        let mut state = PromptState::new(Some("fallback".into()));
        let mut editor = Line::default();
        typed(&mut state, &mut editor, "bad");
        state.handle_key(KeyKind::Enter, &editor);
        editor.0.clear();

        let resolved = state.finish_validation(
            "bad".into(),
            ValidationOutcome::invalid("nope"),
            FailureMode::Keep,
            &mut editor,
        );
        assert_eq!(resolved, None);
        assert_eq!(editor.0, "bad");
        assert_eq!(state.value, "bad");
        assert_eq!(state.error_msg.as_deref(), Some("nope"));
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn test_rejection_in_clear_mode_empties_value() {
        let mut state = PromptState::new(None);
        let mut editor = Line::default();
        typed(&mut state, &mut editor, "bad");
        state.handle_key(KeyKind::Enter, &editor);

        state.finish_validation(
            "bad".into(),
            ValidationOutcome::Invalid(None),
            FailureMode::Clear,
            &mut editor,
        );
        assert_eq!(state.value, "");
        assert_eq!(editor.0, "");
        assert_eq!(state.error_msg.as_deref(), Some(validation::INVALID_ANSWER));
    }

    #[test]
    fn test_next_keystroke_clears_error() {
        let mut state = PromptState::new(None);
        let mut editor = Line::default();
        state.handle_key(KeyKind::Enter, &editor);
        state.finish_validation(
            String::new(),
            ValidationOutcome::invalid(validation::REQUIRED),
            FailureMode::Keep,
            &mut editor,
        );
        assert!(state.error_msg.is_some());

        typed(&mut state, &mut editor, "a");
        assert_eq!(state.error_msg, None);
    }

    #[test]
    fn test_finish_without_submission_is_ignored() {
        let mut state = PromptState::new(None);
        let mut editor = Line::default();
        let resolved = state.finish_validation(
            "x".into(),
            ValidationOutcome::Valid,
            FailureMode::Keep,
            &mut editor,
        );
        assert_eq!(resolved, None);
        assert_eq!(state.status, Status::Idle);
    }
}
