//! Configuration management for the Wayfarer application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings. The two service
//! credentials (weather key, generation key) are optional at load time;
//! a missing key disables only the feature that needs it.

use crate::WayfarerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the Wayfarer application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WayfarerConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Itinerary-generation API configuration
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Report export configuration
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key. Required for weather lookups only.
    pub api_key: Option<String>,
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Itinerary-generation API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Generation service API key. Required for itinerary generation only.
    pub api_key: Option<String>,
    /// Base URL for the generation API
    #[serde(default = "default_generation_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_generation_model")]
    pub model: String,
    /// Upper bound on generated length, in tokens
    #[serde(default = "default_generation_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_generation_timeout")]
    pub timeout_seconds: u32,
}

/// Report export configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path to a TTF font with Hangul coverage, used for all report text
    #[serde(default = "default_font_path")]
    pub font_path: String,
    /// Directory exported reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_generation_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_generation_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_generation_max_tokens() -> u32 {
    1200
}

fn default_generation_timeout() -> u32 {
    60
}

fn default_font_path() -> String {
    "assets/MalgunGothic.ttf".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_generation_base_url(),
            model: default_generation_model(),
            max_tokens: default_generation_max_tokens(),
            timeout_seconds: default_generation_timeout(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            font_path: default_font_path(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl WayfarerConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from the specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

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

        // Environment variable overrides with WAYFARER_ prefix, e.g.
        // WAYFARER_WEATHER__API_KEY, WAYFARER_GENERATION__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("WAYFARER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: WayfarerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wayfarer").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        for (name, key) in [
            ("Weather", &self.weather.api_key),
            ("Generation", &self.generation.api_key),
        ] {
            if let Some(api_key) = key {
                if api_key.is_empty() {
                    return Err(WayfarerError::config(format!(
                        "{name} API key cannot be empty if provided. Either remove it or provide a valid key."
                    ))
                    .into());
                }

                if api_key.len() < 8 {
                    return Err(WayfarerError::config(format!(
                        "{name} API key appears to be invalid (too short). Please check your API key."
                    ))
                    .into());
                }

                if api_key.len() > 256 {
                    return Err(WayfarerError::config(format!(
                        "{name} API key appears to be invalid (too long). Please check your API key."
                    ))
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 300 {
            return Err(
                WayfarerError::config("Weather API timeout must be between 1 and 300 seconds")
                    .into(),
            );
        }

        if self.generation.timeout_seconds == 0 || self.generation.timeout_seconds > 600 {
            return Err(WayfarerError::config(
                "Generation API timeout must be between 1 and 600 seconds",
            )
            .into());
        }

        if self.generation.max_tokens == 0 || self.generation.max_tokens > 16384 {
            return Err(WayfarerError::config(
                "Generation max tokens must be between 1 and 16384",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WayfarerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Weather", &self.weather.base_url),
            ("Generation", &self.generation.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WayfarerError::config(format!(
                    "{name} API base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        if self.report.font_path.is_empty() {
            return Err(WayfarerError::config("Report font path cannot be empty").into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WayfarerConfig::default();
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.weather.timeout_seconds, 30);
        assert_eq!(config.generation.model, "gpt-3.5-turbo");
        assert_eq!(config.generation.max_tokens, 1200);
        assert_eq!(config.logging.level, "info");
        assert!(config.weather.api_key.is_none());
        assert!(config.generation.api_key.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        // Missing keys are allowed at load time; only the dependent feature fails.
        assert!(WayfarerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_short_api_key() {
        let mut config = WayfarerConfig::default();
        config.weather.api_key = Some("abc".to_string());
        let result = config.validate_api_keys();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too short"));
    }

    #[test]
    fn test_config_validation_valid_api_keys() {
        let mut config = WayfarerConfig::default();
        config.weather.api_key = Some("valid_weather_key_123".to_string());
        config.generation.api_key = Some("sk-valid_generation_key".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = WayfarerConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = WayfarerConfig::default();
        config.generation.max_tokens = 0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max tokens"));
    }

    #[test]
    fn test_config_validation_bad_base_url() {
        let mut config = WayfarerConfig::default();
        config.weather.base_url = "ftp://weather.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = WayfarerConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("wayfarer"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
