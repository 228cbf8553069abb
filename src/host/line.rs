use super::Keypress;
use crate::prompt::LineEditor;

/// Single-line edit buffer with a cursor counted in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text right of the cursor.
    pub fn tail(&self) -> &str {
        &self.text[self.byte_offset(self.cursor)..]
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.text.char_indices().nth(index).map_or(self.text.len(), |(offset, _)| offset)
    }

    /// Applies the edit a keypress stands for; non-editing keys are no-ops.
    pub fn apply(&mut self, key: Keypress) {
        match key {
            Keypress::Char(c) => {
                let offset = self.byte_offset(self.cursor);
                self.text.insert(offset, c);
                self.cursor += 1;
            }
            Keypress::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let offset = self.byte_offset(self.cursor);
                self.text.remove(offset);
            }
            Keypress::Delete if self.cursor < self.len() => {
                let offset = self.byte_offset(self.cursor);
                self.text.remove(offset);
            }
            Keypress::Left => self.cursor = self.cursor.saturating_sub(1),
            Keypress::Right => self.cursor = (self.cursor + 1).min(self.len()),
            Keypress::Home => self.cursor = 0,
            Keypress::End => self.cursor = self.len(),
            _ => {}
        }
    }
}

impl LineEditor for LineBuffer {
    fn line(&self) -> &str {
        &self.text
    }

    fn write(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len();
    }
}
