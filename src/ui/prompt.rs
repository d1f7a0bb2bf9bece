//! Interactive prompts

use dialoguer::{theme::ColorfulTheme, Password};
use std::io::IsTerminal;

use crate::error::{Result, TikHubError};

/// Ask for an API key without echoing it
///
/// Fails when stdin is not a terminal.
pub fn prompt_api_key(prompt: &str) -> Result<String> {
    if !std::io::stdin().is_terminal() {
        return Err(TikHubError::Credentials(
            "Cannot prompt for an API key: stdin is not a terminal".to_string(),
        ));
    }

    let key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact()
        .map_err(|e| TikHubError::Credentials(format!("Failed to read API key: {}", e)))?;

    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(TikHubError::Credentials("API key must not be empty".to_string()));
    }
    Ok(key)
}
