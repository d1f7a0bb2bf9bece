//! Output formatting for item results and the operation table

mod json;
mod table;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::tikhub::ItemResult;

pub use json::{render_json, render_yaml};
pub use table::{operations_table, results_table, summarize};

/// Print item results in the requested format
pub fn output_results(results: &[ItemResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render_json(results)?),
        OutputFormat::Yaml => print!("{}", render_yaml(results)?),
        OutputFormat::Table => println!("{}", results_table(results)),
    }
    Ok(())
}
