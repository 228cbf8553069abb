//! The custom text input prompt
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces the prompt consumes (line editor, validator, transformer)
//! - `state`: The session state and its keystroke transition function
//! - `render`: Pure rendering of the state into the two displayed lines
//! - `theme`: Prefix glyphs, segment styles and the validation failure mode
//! - `input`: The prompt itself, tying configuration, state and rendering together
//!
//! Nothing in here touches the terminal; see [`crate::host`] for the runtimes that drive it.

pub mod input;
pub mod interface;
pub mod render;
pub mod state;
pub mod theme;

pub use input::{InputConfig, InputPrompt};
pub use interface::*;
pub use render::Frame;
pub use state::{Effect, PromptState, Status};
pub use theme::{FailureMode, Theme, ThemeOverrides};
