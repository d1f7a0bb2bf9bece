//! Profile command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::cli::ConfigAction;
use crate::config::api;
use crate::error::TikHubError;
use crate::ui::prompt_api_key;

use super::models::{Profile, ProfileConfig};
use super::store::ProfileStore;

/// Dispatch `config` subcommands
///
/// `set-profile` takes its values from the global `--api-key` and
/// `--base-url` flags.
pub fn run_config_command(
    action: &ConfigAction,
    api_key: Option<&str>,
    base_url: Option<&str>,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = ProfileStore::new();
    match action {
        ConfigAction::GetProfiles => run_profile_list(&store),
        ConfigAction::SetProfile(args) => {
            let values = ProfileValues { api_key, base_url };
            run_profile_set(&store, &args.name, values, batch)
        }
        ConfigAction::UseProfile(args) => run_profile_use(&store, &args.name),
        ConfigAction::DeleteProfile(args) => run_profile_delete(&store, &args.name),
        ConfigAction::CurrentProfile => run_profile_show(&store),
        ConfigAction::View => run_config_view(&store),
    }
}

fn run_profile_list(store: &ProfileStore) -> Result<(), Box<dyn std::error::Error>> {
    let config = store.load()?;

    if config.profiles.is_empty() {
        println!("No profiles configured.");
        println!("\nUse 'tikhubctl config set-profile <name> --api-key <KEY>' to create one.");
        return Ok(());
    }

    println!("{}", profiles_table(&config));
    Ok(())
}

fn profiles_table(config: &ProfileConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("BASE URL"),
            Cell::new("API KEY"),
        ]);

    for (name, profile) in &config.profiles {
        let is_current = config.current_profile.as_deref() == Some(name.as_str());
        table.add_row(vec![
            Cell::new(if is_current { "*" } else { "" }),
            Cell::new(name),
            Cell::new(profile.base_url.as_deref().unwrap_or(api::DEFAULT_BASE_URL)),
            Cell::new(mask_key(profile.api_key.as_deref())),
        ]);
    }
    table
}

fn run_profile_show(store: &ProfileStore) -> Result<(), Box<dyn std::error::Error>> {
    let config = store.load()?;

    let name = config.current_profile.as_deref().ok_or_else(|| {
        TikHubError::Config(
            "No current profile set. Use 'tikhubctl config use-profile <name>' to set one."
                .to_string(),
        )
    })?;
    let (_, profile) = config.current().ok_or_else(|| {
        TikHubError::Config(format!(
            "Current profile '{}' not found. Available: {}",
            name,
            config.available()
        ))
    })?;

    println!("Current profile: {}", name);
    println!(
        "  Base URL: {}",
        profile.base_url.as_deref().unwrap_or(api::DEFAULT_BASE_URL)
    );
    println!("  API key:  {}", mask_key(profile.api_key.as_deref()));
    Ok(())
}

/// Values given to `set-profile`
#[derive(Debug, Clone, Copy, Default)]
struct ProfileValues<'a> {
    api_key: Option<&'a str>,
    base_url: Option<&'a str>,
}

/// Create or update a profile
///
/// A new profile needs an API key; outside batch mode it is prompted for
/// when not given on the command line.
fn run_profile_set(
    store: &ProfileStore,
    name: &str,
    values: ProfileValues<'_>,
    batch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;

    if let Some(existing) = config.profiles.get_mut(name) {
        if let Some(key) = values.api_key {
            existing.api_key = Some(key.to_string());
        }
        if let Some(url) = values.base_url {
            existing.base_url = Some(url.to_string());
        }
        store.save(&config)?;
        println!("✓ Updated profile '{}'", name);
        return Ok(());
    }

    let api_key = match values.api_key {
        Some(key) => key.to_string(),
        None if !batch => prompt_api_key(&format!("API key for profile '{}'", name))?,
        None => {
            return Err(TikHubError::Config(format!(
                "--api-key is required when creating a new profile. Usage:\n  \
                 tikhubctl config set-profile {} --api-key <KEY> [--base-url <URL>]",
                name
            ))
            .into())
        }
    };

    config.profiles.insert(
        name.to_string(),
        Profile {
            api_key: Some(api_key),
            base_url: values.base_url.map(String::from),
        },
    );
    if config.profiles.len() == 1 {
        config.current_profile = Some(name.to_string());
    }

    store.save(&config)?;
    println!("✓ Created profile '{}'", name);
    Ok(())
}

fn run_profile_use(store: &ProfileStore, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;

    if !config.profiles.contains_key(name) {
        return Err(TikHubError::Config(format!(
            "Profile '{}' not found. Available profiles: {}",
            name,
            config.available()
        ))
        .into());
    }

    config.current_profile = Some(name.to_string());
    store.save(&config)?;
    println!("✓ Switched to profile '{}'", name);
    Ok(())
}

fn run_profile_delete(store: &ProfileStore, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;

    if config.profiles.remove(name).is_none() {
        return Err(TikHubError::Config(format!(
            "Profile '{}' not found. Available profiles: {}",
            name,
            config.available()
        ))
        .into());
    }

    if config.current_profile.as_deref() == Some(name) {
        config.current_profile = None;
    }

    store.save(&config)?;
    println!("✓ Deleted profile '{}'", name);
    Ok(())
}

/// Print the profile file with API keys masked
fn run_config_view(store: &ProfileStore) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;
    for profile in config.profiles.values_mut() {
        if profile.api_key.is_some() {
            profile.api_key = Some(mask_key(profile.api_key.as_deref()));
        }
    }
    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| TikHubError::Config(format!("Failed to serialize profiles: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Show the last 4 characters of a key
fn mask_key(key: Option<&str>) -> String {
    match key {
        Some(k) if k.chars().count() >= 8 => {
            let tail: String = k.chars().skip(k.chars().count() - 4).collect();
            format!("****{}", tail)
        }
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}
