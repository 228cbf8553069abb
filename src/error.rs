use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[error("Failed to evaluate expression. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Invalid pattern. Original error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Configuration file '{path}' has an unsupported extension. Expected one of: {expected}.")]
    UnsupportedConfigFormat { path: String, expected: String },

    #[error("Configuration validation failed: {0}")]
    ConfigValidation(String),

    #[error("No prompt registered for type '{0}'.")]
    UnknownPromptType(String),

    /// A prefilled answer did not pass the question's validation.
    #[error("Validation error for '{question}': {message}.")]
    Validation { question: String, message: String },

    /// The user aborted the prompt (Ctrl-C / Ctrl-D).
    #[error("Prompt interrupted.")]
    Interrupted,

    /// A scripted key sequence ended before the prompt resolved.
    #[error("Input ended before the prompt was answered.")]
    InputExhausted,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
