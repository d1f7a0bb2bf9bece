//! CLI argument parsing

mod common;
mod config;
mod run;

use clap::{Parser, Subcommand};

use crate::config::defaults;
use crate::tikhub::Resource;

pub use common::OutputFormat;
pub use config::{ConfigAction, ProfileNameArgs, SetProfileArgs};
pub use run::RunArgs;

/// Query the TikHub social-media data API
#[derive(Parser, Debug)]
#[command(name = "tikhubctl")]
#[command(version)]
#[command(about = "Query TikTok, Instagram, YouTube and Twitter data through the TikHub API", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
        tikhubctl check\n  \
        tikhubctl ops tiktok\n  \
        tikhubctl run twitter get-user-profile -p screen_name=jack -o table\n  \
        tikhubctl config set-profile main --api-key <KEY>")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TikHub API key (overrides TIKHUB_API_KEY and stored profiles)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// API origin (overrides TIKHUB_BASE_URL and stored profiles)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Stored profile to use (overrides TIKHUB_PROFILE and current-profile)
    #[arg(short = 'P', long, global = true)]
    pub profile: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, env = "TIKHUB_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner, no interactive prompts
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify the API key against the health-check endpoint
    Check,

    /// List supported operations and their parameters
    Ops {
        /// Only show operations for this platform
        #[arg(value_enum)]
        resource: Option<Resource>,
    },

    /// Run an operation for one or more items
    Run(RunArgs),

    /// Manage stored profiles
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}
