//! Basic types and defaults for question configuration

use crate::constants::{validation, CUSTOM_INPUT_TYPE};
use serde::Deserialize;

/// MiniJinja condition checked against the answer, bound as `value`.
#[derive(Debug, Clone, Deserialize)]
pub struct Validation {
    #[serde(default = "get_default_condition")]
    pub condition: String,
    #[serde(default = "get_default_error_message")]
    pub error_message: String,
}

fn get_default_error_message() -> String {
    validation::INVALID_ANSWER.to_string()
}

pub fn get_default_condition() -> String {
    validation::DEFAULT_CONDITION.to_string()
}

impl Default for Validation {
    fn default() -> Self {
        Self { condition: get_default_condition(), error_message: get_default_error_message() }
    }
}

pub fn get_default_prompt_type() -> String {
    CUSTOM_INPUT_TYPE.to_string()
}
