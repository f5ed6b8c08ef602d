//! Configuration management for the `EcoRoute` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::EcoRouteError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `EcoRoute` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EcoRouteConfig {
    /// Model service configuration
    #[serde(default)]
    pub model: ModelConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Model service configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// API key for the generative model service
    pub api_key: Option<String>,
    /// Base URL for the model API
    #[serde(default = "default_model_base_url")]
    pub base_url: String,
    /// Model identifier used for route planning
    #[serde(default = "default_model_name")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_model_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Vehicle profile used when none is given on the command line
    #[serde(default = "default_vehicle_profile")]
    pub vehicle_profile: String,
}

// Default value functions
fn default_model_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model_name() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_model_timeout() -> u32 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_vehicle_profile() -> String {
    "electric".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_model_base_url(),
            model: default_model_name(),
            timeout_seconds: default_model_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            vehicle_profile: default_vehicle_profile(),
        }
    }
}

impl EcoRouteConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with ECOROUTE_ prefix
        builder = builder.add_source(
            Environment::with_prefix("ECOROUTE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: EcoRouteConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Conventional fallback for the model API key
        if config.model.api_key.is_none() {
            if let Ok(key) = std::env::var("GEMINI_API_KEY") {
                if !key.is_empty() {
                    config.model.api_key = Some(key);
                }
            }
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ecoroute").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.model.base_url.is_empty() {
            self.model.base_url = default_model_base_url();
        }
        if self.model.model.is_empty() {
            self.model.model = default_model_name();
        }
        if self.model.timeout_seconds == 0 {
            self.model.timeout_seconds = default_model_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.vehicle_profile.is_empty() {
            self.defaults.vehicle_profile = default_vehicle_profile();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the model API key, if provided
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.model.api_key {
            if api_key.is_empty() {
                return Err(EcoRouteError::config(
                    "Model API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(EcoRouteError::config(
                    "Model API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }

            if api_key.len() > 200 {
                return Err(EcoRouteError::config(
                    "Model API key appears to be invalid (too long). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.model.timeout_seconds > 300 {
            return Err(
                EcoRouteError::config("Model request timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(EcoRouteError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(EcoRouteError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.model.base_url.starts_with("http://")
            && !self.model.base_url.starts_with("https://")
        {
            return Err(
                EcoRouteError::config("Model base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        Ok(())
    }
}
