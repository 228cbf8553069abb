//! Interactive host on top of crossterm
//!
//! The prompt is drawn on stderr so stdout stays free for the answers.

use super::{drive, Keypress, LineBuffer, PromptHost};
use crate::{
    error::Result,
    prompt::{Frame, InputPrompt},
};
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::QueueableCommand;
use log::debug;
use std::io::{self, Write};
use std::sync::Once;
use unicode_width::UnicodeWidthStr;

static PANIC_HOOK_SET: Once = Once::new();

/// Keeps the terminal in raw mode for as long as it lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        set_panic_hook();
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            previous(panic_info);
        }));
    });
}

/// Runs prompts against the real terminal.
#[derive(Debug, Default)]
pub struct TerminalHost;

impl TerminalHost {
    pub fn new() -> Self {
        Self
    }
}

impl PromptHost for TerminalHost {
    fn run(&mut self, prompt: &mut InputPrompt) -> Result<String> {
        let _guard = TerminalGuard::new()?;
        let mut stderr = io::stderr();
        let mut line = LineBuffer::default();

        draw(&mut stderr, &prompt.render(), &line)?;

        loop {
            let key = match event::read()? {
                Event::Key(key_event) => match Keypress::from_key_event(key_event) {
                    Some(key) => key,
                    None => continue,
                },
                Event::Resize(..) => {
                    draw(&mut stderr, &prompt.render(), &line)?;
                    continue;
                }
                _ => continue,
            };

            let result = drive(prompt, &mut line, key, |prompt, line| {
                Ok(draw(&mut stderr, &prompt.render(), line)?)
            });

            match result {
                Ok(None) => {}
                Ok(Some(answer)) => {
                    settle(&mut stderr, &prompt.render())?;
                    return Ok(answer);
                }
                Err(err) => {
                    debug!("Prompt '{}' aborted: {err}", prompt.message());
                    settle(&mut stderr, &prompt.render())?;
                    return Err(err);
                }
            }
        }
    }
}

/// Redraws both lines in place and leaves the cursor on the editable line.
fn draw(out: &mut impl Write, frame: &Frame, line: &LineBuffer) -> io::Result<()> {
    out.queue(MoveToColumn(0))?;
    out.queue(Clear(ClearType::FromCursorDown))?;
    out.queue(Print(&frame.line))?;
    out.queue(Print("\r\n"))?;
    out.queue(Print(&frame.bottom))?;
    out.queue(MoveUp(1))?;
    out.queue(MoveToColumn(cursor_column(frame, line)))?;
    out.flush()
}

/// Replaces the frame with its editable line alone and moves below it.
fn settle(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    out.queue(MoveToColumn(0))?;
    out.queue(Clear(ClearType::FromCursorDown))?;
    out.queue(Print(&frame.line))?;
    out.queue(Print("\r\n"))?;
    out.flush()
}

/// Terminal column of the cursor: the end of the line minus the text right of it.
fn cursor_column(frame: &Frame, line: &LineBuffer) -> u16 {
    let end = visible_width(&frame.line);
    let column = end.saturating_sub(line.tail().width());
    u16::try_from(column).unwrap_or(u16::MAX)
}

/// Display width of `text` with ANSI escape sequences skipped.
pub fn visible_width(text: &str) -> usize {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI sequences end with a byte in '@'..='~'
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        plain.push(c);
    }
    plain.width()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::LineEditor;

    #[test]
    fn test_visible_width_skips_escape_sequences() {
        assert_eq!(visible_width("\u{1b}[1mName:\u{1b}[0m ab"), 8);
        assert_eq!(visible_width("plain"), 5);
    }

    #[test]
    fn test_cursor_column_accounts_for_tail() {
        let frame = Frame { line: "? Name: abc".into(), bottom: String::new() };
        let mut line = LineBuffer::default();
        line.write("abc");
        assert_eq!(cursor_column(&frame, &line), 11);
        line.apply(Keypress::Left);
        assert_eq!(cursor_column(&frame, &line), 10);
    }

    #[test]
    fn test_draw_emits_both_lines() {
        let frame = Frame { line: "? Name:".into(), bottom: "hint".into() };
        let mut out = Vec::new();
        draw(&mut out, &frame, &LineBuffer::default()).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("? Name:\r\nhint"));
    }
}
