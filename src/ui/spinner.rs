//! Progress spinner utilities

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner with the given message
///
/// Returns `None` in batch mode.
pub fn create_spinner(message: &str, batch: bool) -> Option<ProgressBar> {
    if batch {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Clear the spinner so output can follow
pub fn finish_spinner(spinner: Option<ProgressBar>) {
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
}

/// Finish the spinner with a summary of how many items failed
pub fn finish_spinner_with_status(spinner: Option<ProgressBar>, total: usize, failed: usize) {
    if let Some(s) = spinner {
        if failed == 0 {
            s.finish_with_message(format!("Done ({} item(s))", total));
        } else {
            s.finish_with_message(format!(
                "Completed with errors ({} of {} item(s) failed)",
                failed, total
            ));
        }
    }
}
