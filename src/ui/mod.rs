//! UI utilities for terminal output
//!
//! Progress spinners and interactive prompts.

mod prompt;
mod spinner;

pub use prompt::prompt_api_key;
pub use spinner::{create_spinner, finish_spinner, finish_spinner_with_status};
