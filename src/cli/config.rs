//! Profile management CLI arguments (kubectl-style)

use clap::{Parser, Subcommand};

/// Config subcommands for managing stored profiles
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create or update a profile
    #[command(name = "set-profile")]
    SetProfile(SetProfileArgs),

    /// Set the current profile
    #[command(name = "use-profile")]
    UseProfile(ProfileNameArgs),

    /// List stored profiles
    #[command(name = "get-profiles")]
    GetProfiles,

    /// Display the current profile
    #[command(name = "current-profile")]
    CurrentProfile,

    /// Delete a profile
    #[command(name = "delete-profile")]
    DeleteProfile(ProfileNameArgs),

    /// Display the profile file with API keys masked
    View,
}

/// Arguments for 'config set-profile'
///
/// The key and URL come from the global `--api-key` and `--base-url` flags.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        tikhubctl config set-profile main --api-key <KEY>\n  \
        tikhubctl config set-profile cn --api-key <KEY> --base-url https://api.tikhub.dev\n  \
        tikhubctl config set-profile main --base-url https://api.tikhub.io   # update existing")]
pub struct SetProfileArgs {
    /// Profile name
    pub name: String,
}

/// Arguments naming a single profile
#[derive(Parser, Debug)]
pub struct ProfileNameArgs {
    /// Profile name
    pub name: String,
}
