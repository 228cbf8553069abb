//! Constants used throughout hinted-input

/// Type name the input prompt is registered under
pub const CUSTOM_INPUT_TYPE: &str = "custom-input";

/// Question file extensions that can be loaded
pub const CONFIG_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Validation messages
pub mod validation {
    pub const REQUIRED: &str = "You must provide a value";
    pub const INVALID_ANSWER: &str = "You must provide a valid value";
    pub const NOT_BLANK: &str = "Input cannot be empty";
    pub const DEFAULT_CONDITION: &str = "true";
}

/// Prefix glyphs shown before the prompt message
pub mod prefix {
    pub const IDLE: &str = "?";
    pub const LOADING: &str = "…";
    pub const DONE: &str = "✔";
}

/// Values used by the built-in demo question
pub mod demo {
    pub const NAME: &str = "userInput";
    pub const MESSAGE: &str = "Enter input:";
    pub const HINT: &str = "<Enter> Show Menu";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
