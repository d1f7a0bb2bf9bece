//! API key and base URL resolution from multiple sources

use log::{debug, warn};

use crate::config::{api, credentials};
use crate::error::{Result, TikHubError};
use crate::profile::{resolve_active_profile, Profile, ProfileStore};
use crate::ui::prompt_api_key;

use super::client::Credential;

/// Credential resolution with fallback logic
pub struct CredentialResolver {
    batch: bool,
}

impl CredentialResolver {
    /// In batch mode the resolver never prompts
    pub fn new(batch: bool) -> Self {
        Self { batch }
    }

    /// Resolve the API key:
    /// 1. CLI argument
    /// 2. TIKHUB_API_KEY environment variable
    /// 3. Active profile
    /// 4. Interactive prompt (not in batch mode)
    pub fn resolve_api_key(
        &self,
        cli_key: Option<&str>,
        profile: Option<&Profile>,
    ) -> Result<String> {
        let env_key = std::env::var(credentials::API_KEY_ENV_VAR).ok();
        if let Some(key) = Self::pick_api_key(cli_key, env_key.as_deref(), profile) {
            return Ok(key);
        }

        if self.batch {
            return Err(TikHubError::ApiKeyNotFound(Self::api_key_not_found_message()));
        }

        debug!("No API key configured, prompting");
        prompt_api_key("TikHub API key").map_err(|e| {
            TikHubError::ApiKeyNotFound(format!(
                "{}\n\n{}",
                e,
                Self::api_key_not_found_message()
            ))
        })
    }

    fn pick_api_key(
        cli_key: Option<&str>,
        env_key: Option<&str>,
        profile: Option<&Profile>,
    ) -> Option<String> {
        if let Some(key) = non_empty(cli_key) {
            debug!("Using API key from CLI argument");
            return Some(key);
        }
        if let Some(key) = non_empty(env_key) {
            debug!(
                "Using API key from {} environment variable",
                credentials::API_KEY_ENV_VAR
            );
            return Some(key);
        }
        if let Some(key) = non_empty(profile.and_then(|p| p.api_key.as_deref())) {
            debug!("Using API key from active profile");
            return Some(key);
        }
        None
    }

    /// Resolve the base URL: CLI, TIKHUB_BASE_URL, active profile, default
    pub fn resolve_base_url(&self, cli_url: Option<&str>, profile: Option<&Profile>) -> String {
        let env_url = std::env::var(credentials::BASE_URL_ENV_VAR).ok();
        Self::pick_base_url(cli_url, env_url.as_deref(), profile)
    }

    fn pick_base_url(
        cli_url: Option<&str>,
        env_url: Option<&str>,
        profile: Option<&Profile>,
    ) -> String {
        non_empty(cli_url)
            .or_else(|| non_empty(env_url))
            .or_else(|| non_empty(profile.and_then(|p| p.base_url.as_deref())))
            .unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string())
    }

    /// Resolve a complete credential, consulting the active profile
    pub fn resolve(
        &self,
        cli_key: Option<&str>,
        cli_url: Option<&str>,
        cli_profile: Option<&str>,
    ) -> Result<Credential> {
        let store = ProfileStore::new();
        let profile = resolve_active_profile(cli_profile, &store);
        if let (Some(name), None) = (cli_profile, &profile) {
            warn!("Profile '{}' not found in {}", name, store.path().display());
        }

        let api_key = self.resolve_api_key(cli_key, profile.as_ref())?;
        let base_url = self.resolve_base_url(cli_url, profile.as_ref());
        debug!("Using base URL {}", base_url);
        Ok(Credential::new(api_key, base_url))
    }

    fn api_key_not_found_message() -> String {
        format!(
            "No TikHub API key found. Please provide one using one of:\n\
             \n\
             1. CLI argument:      tikhubctl --api-key <KEY>\n\
             2. Environment var:   export {}=<KEY>\n\
             3. Stored profile:    tikhubctl config set-profile <NAME> --api-key <KEY>\n\
             \n\
             Get a key at https://user.tikhub.io",
            credentials::API_KEY_ENV_VAR
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(key: Option<&str>, url: Option<&str>) -> Profile {
        Profile {
            api_key: key.map(String::from),
            base_url: url.map(String::from),
        }
    }

    #[test]
    fn test_api_key_precedence() {
        let p = profile(Some("profile-key"), None);
        assert_eq!(
            CredentialResolver::pick_api_key(Some("cli-key"), Some("env-key"), Some(&p)),
            Some("cli-key".to_string())
        );
        assert_eq!(
            CredentialResolver::pick_api_key(None, Some("env-key"), Some(&p)),
            Some("env-key".to_string())
        );
        assert_eq!(
            CredentialResolver::pick_api_key(None, None, Some(&p)),
            Some("profile-key".to_string())
        );
        assert_eq!(CredentialResolver::pick_api_key(None, None, None), None);
    }

    #[test]
    fn test_empty_sources_are_skipped() {
        let p = profile(Some("profile-key"), None);
        assert_eq!(
            CredentialResolver::pick_api_key(Some(""), Some("  "), Some(&p)),
            Some("profile-key".to_string())
        );
        assert_eq!(
            CredentialResolver::pick_api_key(None, None, Some(&profile(Some(""), None))),
            None
        );
    }

    #[test]
    fn test_cli_key_wins_without_env_lookup() {
        let resolver = CredentialResolver::new(true);
        assert_eq!(
            resolver.resolve_api_key(Some("cli-key"), None).unwrap(),
            "cli-key"
        );
    }

    #[test]
    fn test_base_url_precedence() {
        let p = profile(None, Some("https://profile.example"));
        assert_eq!(
            CredentialResolver::pick_base_url(
                Some("https://cli.example"),
                Some("https://env.example"),
                Some(&p)
            ),
            "https://cli.example"
        );
        assert_eq!(
            CredentialResolver::pick_base_url(None, Some("https://env.example"), Some(&p)),
            "https://env.example"
        );
        assert_eq!(
            CredentialResolver::pick_base_url(None, None, Some(&p)),
            "https://profile.example"
        );
        assert_eq!(
            CredentialResolver::pick_base_url(None, None, None),
            api::DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_not_found_message() {
        let msg = CredentialResolver::api_key_not_found_message();
        assert!(msg.contains("tikhubctl --api-key"));
        assert!(msg.contains(credentials::API_KEY_ENV_VAR));
        assert!(msg.contains("set-profile"));
    }
}
