//! tikhubctl - Query social-media data through the TikHub API
//!
//! A CLI and library for TikTok, Instagram, YouTube and Twitter lookups
//! served by TikHub.
//!
//! # Features
//!
//! - 28 operations across four platforms, described by static tables
//! - Batch execution over JSON / JSON Lines item input
//! - Per-item fault isolation with `--continue-on-fail`
//! - Cursor-following page aggregation with `--all`
//! - kubectl-style stored profiles
//! - JSON, YAML and table output
//!
//! # Example
//!
//! ```bash
//! # Check the API key
//! tikhubctl check
//!
//! # List operations for one platform
//! tikhubctl ops youtube
//!
//! # Fetch one TikTok video
//! tikhubctl run tiktok get-video -p aweme_id=7350810998023949599
//!
//! # Every comment page for a YouTube video
//! tikhubctl run youtube get-video-comments -p video_id=dQw4w9WgXcQ --all
//!
//! # Many users at once, keeping going past failures
//! tikhubctl run instagram get-user-by-username -i users.jsonl --continue-on-fail
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod profile;
pub mod tikhub;
pub mod ui;

pub use cli::{Cli, Command, ConfigAction, OutputFormat, RunArgs};
pub use error::{Result, TikHubError};
pub use profile::run_config_command;
pub use tikhub::{
    run_check_command, run_ops_command, run_run_command, BatchOptions, CredentialResolver,
    FailureMode, ItemParams, ItemResult, Resource, TikHubClient,
};
