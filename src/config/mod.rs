//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RTP_PROFILES` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use rtp_profiles::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Loading profiles from {}", config.profiles.path.display());
//! ```

mod economy;
mod error;
mod logging;
mod profiles;

pub use economy::EconomyConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use profiles::ProfilesConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Profile document location and failure policy
    #[serde(default)]
    pub profiles: ProfilesConfig,

    /// Economy integration
    #[serde(default)]
    pub economy: EconomyConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RTP_PROFILES` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RTP_PROFILES__PROFILES__PATH=/srv/rtp.yml` -> `profiles.path = /srv/rtp.yml`
    /// - `RTP_PROFILES__ECONOMY__ENABLED=true` -> `economy.enabled = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RTP_PROFILES")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.profiles.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
