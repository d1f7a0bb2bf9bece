//! Arguments for the `run` command

use clap::Parser;

use crate::config::api;
use crate::tikhub::{BatchOptions, FailureMode, Resource};

use super::common::OutputFormat;

/// Run one operation for every input item
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        tikhubctl run tiktok get-video -p aweme_id=7350810998023949599\n  \
        tikhubctl run youtube get-video-comments -p video_id=dQw4w9WgXcQ --all\n  \
        tikhubctl run instagram get-user-by-username -i users.jsonl --continue-on-fail\n  \
        tikhubctl run tiktok get-user-profile -p identifier_type=sec_user_id -p sec_user_id=MS4w...")]
pub struct RunArgs {
    /// Platform
    #[arg(value_enum)]
    pub resource: Resource,

    /// Operation name (see 'tikhubctl ops')
    pub operation: String,

    /// Item parameter; with --input these are defaults for every item
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Items as a JSON array, a JSON object or JSON Lines ('-' reads stdin)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<String>,

    /// Record failed items as {"error": ...} and keep going
    #[arg(long, default_value_t = false)]
    pub continue_on_fail: bool,

    /// Follow pagination cursors and return every page's items
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Page cap per item with --all (0 = unlimited)
    #[arg(long, value_name = "N", default_value_t = api::DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

impl RunArgs {
    pub fn failure_mode(&self) -> FailureMode {
        if self.continue_on_fail {
            FailureMode::ContinueOnFail
        } else {
            FailureMode::Strict
        }
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            failure_mode: self.failure_mode(),
            fetch_all: self.all,
            max_pages: (self.max_pages > 0).then_some(self.max_pages),
        }
    }
}
