//! Profile document configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where profiles are loaded from and how failures are handled
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilesConfig {
    /// Path of the YAML profile document
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Skip profiles that fail to resolve instead of aborting the load
    #[serde(default = "default_skip_invalid")]
    pub skip_invalid: bool,
}

impl ProfilesConfig {
    /// Validate profile configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("profiles.path"));
        }
        Ok(())
    }
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            skip_invalid: default_skip_invalid(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("profiles.yml")
}

fn default_skip_invalid() -> bool {
    true
}
