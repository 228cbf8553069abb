//! Styling of the input prompt
//!
//! A [`Theme`] resolves every styled segment of the rendered frame. Callers
//! customise it through [`ThemeOverrides`], which only name what they change.

use super::state::Status;
use crate::constants::prefix;
use clap::ValueEnum;
use crossterm::style::Stylize;
use serde::Deserialize;

/// What happens to the typed text after a rejected submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum FailureMode {
    /// Restore the line to the text that was submitted.
    #[default]
    Keep,
    /// Empty the line.
    Clear,
}

/// Glyphs shown before the message, one per status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix {
    pub idle: String,
    pub loading: String,
    pub done: String,
}

impl Default for Prefix {
    fn default() -> Self {
        Self {
            idle: prefix::IDLE.blue().to_string(),
            loading: prefix::LOADING.yellow().to_string(),
            done: prefix::DONE.green().to_string(),
        }
    }
}

impl Prefix {
    pub fn for_status(&self, status: Status) -> &str {
        match status {
            Status::Idle => &self.idle,
            Status::Loading => &self.loading,
            Status::Done => &self.done,
        }
    }
}

/// Style functions for the individual segments of a frame.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub message: fn(&str, Status) -> String,
    pub answer: fn(&str) -> String,
    pub default_answer: fn(&str) -> String,
    pub error: fn(&str) -> String,
    pub hint: fn(&str) -> String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            message: |text, status| match status {
                Status::Done => text.to_string(),
                Status::Idle | Status::Loading => text.bold().to_string(),
            },
            answer: |text| text.cyan().to_string(),
            default_answer: |text| format!("({text})").dim().to_string(),
            error: |text| format!("> {text}").red().to_string(),
            hint: |text| text.dark_grey().to_string(),
        }
    }
}

impl Style {
    /// Style set that emits no escape sequences.
    pub fn plain() -> Self {
        Self {
            message: |text, _| text.to_string(),
            answer: str::to_string,
            default_answer: |text| format!("({text})"),
            error: |text| format!("> {text}"),
            hint: str::to_string,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub prefix: Prefix,
    pub style: Style,
    pub validation_failure_mode: FailureMode,
}

impl Theme {
    /// Theme without colors, used for non-terminal output and tests.
    pub fn plain() -> Self {
        Self {
            prefix: Prefix {
                idle: prefix::IDLE.to_string(),
                loading: prefix::LOADING.to_string(),
                done: prefix::DONE.to_string(),
            },
            style: Style::plain(),
            validation_failure_mode: FailureMode::default(),
        }
    }

    /// Applies `overrides` on top of this theme.
    pub fn merged(mut self, overrides: &ThemeOverrides) -> Self {
        if let Some(mode) = overrides.validation_failure_mode {
            self.validation_failure_mode = mode;
        }
        if let Some(prefix) = &overrides.prefix {
            if let Some(idle) = &prefix.idle {
                self.prefix.idle = idle.clone();
            }
            if let Some(loading) = &prefix.loading {
                self.prefix.loading = loading.clone();
            }
            if let Some(done) = &prefix.done {
                self.prefix.done = done.clone();
            }
        }
        self
    }
}

/// Partial theme supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeOverrides {
    #[serde(default)]
    pub validation_failure_mode: Option<FailureMode>,
    #[serde(default)]
    pub prefix: Option<PrefixOverrides>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PrefixOverrides {
    #[serde(default)]
    pub idle: Option<String>,
    #[serde(default)]
    pub loading: Option<String>,
    #[serde(default)]
    pub done: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_failure_mode_is_keep() {
        assert_eq!(Theme::default().validation_failure_mode, FailureMode::Keep);
    }

    #[test]
    fn test_overrides_only_touch_named_fields() {
        let overrides = ThemeOverrides {
            validation_failure_mode: Some(FailureMode::Clear),
            prefix: Some(PrefixOverrides { done: Some("OK".into()), ..Default::default() }),
        };
        let theme = Theme::plain().merged(&overrides);
        assert_eq!(theme.validation_failure_mode, FailureMode::Clear);
        assert_eq!(theme.prefix.done, "OK");
        assert_eq!(theme.prefix.idle, prefix::IDLE);
        assert_eq!(theme.prefix.loading, prefix::LOADING);
    }

    #[test]
    fn test_overrides_deserialize_from_yaml() {
        let yaml = "validation_failure_mode: clear\nprefix:\n  idle: '>'\n";
        let overrides: ThemeOverrides = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(overrides.validation_failure_mode, Some(FailureMode::Clear));
        assert_eq!(overrides.prefix.unwrap().idle.as_deref(), Some(">"));
    }

    #[test]
    fn test_plain_style_decorates_without_escapes() {
        let style = Style::plain();
        assert_eq!((style.default_answer)("x"), "(x)");
        assert_eq!((style.error)("bad"), "> bad");
        assert_eq!((style.message)("Name:", Status::Done), "Name:");
    }

    #[test]
    fn test_prefix_for_status() {
        let prefix = Theme::plain().prefix;
        assert_eq!(prefix.for_status(Status::Idle), "?");
        assert_eq!(prefix.for_status(Status::Done), "✔");
    }
}
