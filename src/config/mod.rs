//! Widget configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `SOMMELIER_` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use sommelier_widget::config::WidgetConfig;
//!
//! let config = WidgetConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Assistant persona: {}", config.persona.name);
//! ```

mod completion;
mod error;
mod persona;

pub use completion::CompletionConfig;
pub use error::{ConfigError, ValidationError};
pub use persona::{PersonaConfig, VoiceTone};

use serde::Deserialize;

/// Root widget configuration
///
/// Contains all configuration sections for the sommelier widget.
/// Load using [`WidgetConfig::load()`] which reads from environment
/// variables.
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    /// Persona configuration (assistant name, voice tone)
    #[serde(default)]
    pub persona: PersonaConfig,

    /// Completion endpoint configuration (API key, model, timeout)
    pub completion: CompletionConfig,
}

impl WidgetConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SOMMELIER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SOMMELIER__COMPLETION__API_KEY=sk-...` -> `completion.api_key`
    /// - `SOMMELIER__PERSONA__NAME=Vinobot` -> `persona.name`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SOMMELIER")
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
        self.persona.validate()?;
        self.completion.validate()?;
        Ok(())
    }
}
