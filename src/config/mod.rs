//! Question configuration
//!
//! This module contains the configuration system components:
//! - `types`: Basic types and defaults used by question definitions
//! - `question`: Question definition and conversion into a prompt configuration
//! - `loader`: Question file loading and parsing

pub mod loader;
pub mod question;
pub mod types;


// Re-export commonly used types for convenience
pub use loader::{QuestionFile, QuestionFileV1};
pub use question::QuestionSpec;
pub use types::Validation;
