//! Profile management module
//!
//! Named profiles bundle an API key and base URL so several TikHub accounts
//! can be used side by side.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::run_config_command;
pub use models::{Profile, ProfileConfig};
pub use resolve::{resolve_active_profile, resolve_active_profile_name};
pub use store::ProfileStore;
