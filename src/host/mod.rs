//! Runtimes that drive an [`InputPrompt`]
//!
//! A host owns the line buffer, classifies raw keys, applies edits and redraws
//! the prompt after every change:
//! - `terminal`: interactive host on top of crossterm
//! - `scripted`: replays a fixed key sequence and records the frames, for automation and tests

use crate::{
    error::{Error, Result},
    prompt::{Effect, InputPrompt, KeyKind},
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;

pub mod line;
pub mod scripted;
pub mod terminal;

pub use line::LineBuffer;
pub use scripted::ScriptedHost;
pub use terminal::TerminalHost;

/// Something that can run a prompt to completion.
pub trait PromptHost {
    fn run(&mut self, prompt: &mut InputPrompt) -> Result<String>;
}

/// A key after host-side classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keypress {
    Enter,
    Backspace,
    /// Ctrl-C or Ctrl-D.
    Interrupt,
    Char(char),
    Delete,
    Left,
    Right,
    Home,
    End,
    /// A key with no editing meaning.
    Other,
}

impl Keypress {
    /// Maps a crossterm key event; releases are dropped.
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let key = match event.code {
            KeyCode::Char('c' | 'd') if ctrl => Self::Interrupt,
            KeyCode::Char('a') if ctrl => Self::Home,
            KeyCode::Char('e') if ctrl => Self::End,
            KeyCode::Char(_) if ctrl => Self::Other,
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Enter => Self::Enter,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            _ => Self::Other,
        };
        Some(key)
    }

    /// The class the prompt sees, `None` for an interrupt.
    pub fn kind(self) -> Option<KeyKind> {
        match self {
            Self::Interrupt => None,
            Self::Enter => Some(KeyKind::Enter),
            Self::Backspace => Some(KeyKind::Backspace),
            _ => Some(KeyKind::Other),
        }
    }
}

/// Feeds one keypress through `prompt`, calling `draw` after every visible change.
///
/// Edits only reach the buffer while the prompt accepts input. On submission the
/// loading frame is drawn before the validator runs.
pub fn drive<F>(
    prompt: &mut InputPrompt,
    line: &mut LineBuffer,
    key: Keypress,
    mut draw: F,
) -> Result<Option<String>>
where
    F: FnMut(&InputPrompt, &LineBuffer) -> Result<()>,
{
    let kind = key.kind().ok_or(Error::Interrupted)?;
    trace!("Key {key:?} classified as {kind:?}");

    if prompt.state().is_idle() {
        line.apply(key);
    }

    match prompt.handle_key(kind, &*line) {
        Effect::None => {
            draw(&*prompt, &*line)?;
            Ok(None)
        }
        Effect::Validate(answer) => {
            draw(&*prompt, &*line)?;
            let resolved = prompt.complete(answer, line)?;
            draw(&*prompt, &*line)?;
            Ok(resolved)
        }
    }
}
