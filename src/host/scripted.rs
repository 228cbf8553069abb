use super::{drive, Keypress, LineBuffer, PromptHost};
use crate::{
    error::{Error, Result},
    prompt::{Frame, InputPrompt},
};
use std::collections::VecDeque;

/// Host that replays a fixed key sequence and records every frame.
///
/// Useful for automation, testing, or CI/CD environments.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    keys: VecDeque<Keypress>,
    frames: Vec<Frame>,
}

impl ScriptedHost {
    pub fn new(keys: impl IntoIterator<Item = Keypress>) -> Self {
        Self { keys: keys.into_iter().collect(), frames: Vec::new() }
    }

    /// Queues the chars of `text` as typed keys.
    pub fn typing(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(Keypress::Char));
        self
    }

    /// Queues a single key.
    pub fn then(mut self, key: Keypress) -> Self {
        self.keys.push_back(key);
        self
    }

    /// Frames drawn so far, the initial one included.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Keys that were not consumed.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl PromptHost for ScriptedHost {
    fn run(&mut self, prompt: &mut InputPrompt) -> Result<String> {
        let mut line = LineBuffer::default();
        self.frames.push(prompt.render());

        while let Some(key) = self.keys.pop_front() {
            let frames = &mut self.frames;
            let resolved = drive(prompt, &mut line, key, |prompt, _| {
                frames.push(prompt.render());
                Ok(())
            })?;
            if let Some(answer) = resolved {
                return Ok(answer);
            }
        }

        Err(Error::InputExhausted)
    }
}
