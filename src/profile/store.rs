//! Profile file I/O

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::profile as profile_config;
use crate::error::{Result, TikHubError};

use super::models::ProfileConfig;

/// Reads and writes the profile file
pub struct ProfileStore {
    config_path: PathBuf,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// Store at the default path (~/.tikhub/config.json)
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(profile_config::DIR_NAME)
            .join(profile_config::FILE_NAME)
    }

    /// Load the profile file. A missing file is an empty configuration.
    pub fn load(&self) -> Result<ProfileConfig> {
        if !self.config_path.exists() {
            return Ok(ProfileConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            TikHubError::Config(format!(
                "Failed to read profile file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            TikHubError::Config(format!(
                "Failed to parse profile file {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// Write the profile file via a temp file and rename, mode 0600 on Unix
    pub fn save(&self, config: &ProfileConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TikHubError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(config).map_err(|e| {
            TikHubError::Config(format!("Failed to serialize profiles: {}", e))
        })?;

        let tmp_path = self.config_path.with_extension("json.tmp");
        write_private(&tmp_path, json.as_bytes()).map_err(|e| {
            TikHubError::Config(format!(
                "Failed to write temp file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        fs::rename(&tmp_path, &self.config_path).map_err(|e| {
            TikHubError::Config(format!(
                "Failed to replace profile file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

/// Create `path` fresh and write `contents`, readable only by the owner on Unix
///
/// A leftover file is removed first so its mode never carries over.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
