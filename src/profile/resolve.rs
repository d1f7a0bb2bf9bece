//! Active profile resolution

use log::debug;

use crate::config::profile as profile_config;

use super::models::Profile;
use super::store::ProfileStore;

/// Resolve the active profile name:
/// 1. --profile CLI flag
/// 2. TIKHUB_PROFILE env var
/// 3. current-profile from the profile file
pub fn resolve_active_profile_name(cli_profile: Option<&str>, store: &ProfileStore) -> Option<String> {
    if let Some(name) = cli_profile {
        debug!("Using profile from CLI flag: {}", name);
        return Some(name.to_string());
    }

    if let Ok(name) = std::env::var(profile_config::ENV_VAR) {
        if !name.is_empty() {
            debug!("Using profile from {} env var: {}", profile_config::ENV_VAR, name);
            return Some(name);
        }
    }

    match store.load() {
        Ok(config) => config.current_profile,
        Err(e) => {
            debug!("Failed to load profile file: {}", e);
            None
        }
    }
}

/// Resolve the full active profile, if any
pub fn resolve_active_profile(cli_profile: Option<&str>, store: &ProfileStore) -> Option<Profile> {
    let name = resolve_active_profile_name(cli_profile, store)?;
    let config = store.load().ok()?;

    match config.profiles.get(&name) {
        Some(profile) => {
            debug!("Resolved profile '{}'", name);
            Some(profile.clone())
        }
        None => {
            debug!("Profile '{}' not found in {}", name, store.path().display());
            None
        }
    }
}
