//! Built-in display transformers for the typed value

use crate::{
    filters::*,
    prompt::{TransformContext, Transformer},
};
use clap::ValueEnum;
use serde::Deserialize;

/// Case conversions a question can display its value in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum CaseKind {
    Snake,
    Kebab,
    Camel,
    Pascal,
    ScreamingSnake,
    Train,
    Upper,
    Lower,
}

/// Shows the value converted to another case.
///
/// Only the display changes; the resolved answer is still the typed text.
#[derive(Debug, Clone, Copy)]
pub struct CaseTransformer(pub CaseKind);

impl Transformer for CaseTransformer {
    fn transform(&self, value: &str, _context: TransformContext) -> String {
        match self.0 {
            CaseKind::Snake => to_snake_case(value),
            CaseKind::Kebab => to_kebab_case(value),
            CaseKind::Camel => to_camel_case(value),
            CaseKind::Pascal => to_pascal_case(value),
            CaseKind::ScreamingSnake => to_screaming_snake_case(value),
            CaseKind::Train => to_train_case(value),
            CaseKind::Upper => value.to_uppercase(),
            CaseKind::Lower => value.to_lowercase(),
        }
    }
}

/// Hides the typed characters behind a mask character.
#[derive(Debug, Clone, Copy)]
pub struct MaskTransformer {
    pub mask: char,
}

impl Default for MaskTransformer {
    fn default() -> Self {
        Self { mask: '*' }
    }
}

impl Transformer for MaskTransformer {
    fn transform(&self, value: &str, _context: TransformContext) -> String {
        value.chars().map(|_| self.mask).collect()
    }
}
