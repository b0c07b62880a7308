//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `METABOLIC_CALCULATOR` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use metabolic_calculator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}:{}", config.server.host, config.server.port);
//! ```

mod analytics;
mod dialog;
mod display;
mod error;
mod server;
mod skill;

pub use analytics::AnalyticsConfig;
pub use dialog::DialogSettings;
pub use display::DisplayConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use skill::SkillConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Voice skill configuration (application id)
    #[serde(default)]
    pub skill: SkillConfig,

    /// Analytics collector configuration
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Assets for screen-equipped devices
    #[serde(default)]
    pub display: DisplayConfig,

    /// Dialog behavior
    #[serde(default)]
    pub dialog: DialogSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `METABOLIC_CALCULATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `METABOLIC_CALCULATOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `METABOLIC_CALCULATOR__DIALOG__LIGHT_EXERCISE_FORMULA=sedentary`
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
                    .prefix("METABOLIC_CALCULATOR")
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
        self.server.validate()?;
        self.skill.validate(&self.server.environment)?;
        self.analytics.validate()?;
        self.display.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
