/// Handles argument parsing and the command runner.
pub mod cli;

/// Question files and question definitions.
pub mod config;

/// Shared constants: messages, glyphs and verbosity levels.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Case conversion and regex helpers shared by transformers and validation expressions.
pub mod filters;

/// Runtimes that feed keys to a prompt and draw it.
pub mod host;

/// Helpers for reading prefilled answers.
pub mod ioutils;

/// The custom text input prompt.
pub mod prompt;

/// Asks an ordered set of questions.
pub mod questionnaire;

/// Prompt types looked up by name.
pub mod registry;

/// Built-in display transformers.
pub mod transform;

/// Answer validators
pub mod validation;
