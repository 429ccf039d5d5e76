//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::location::{FixedLocator, PermissionState};
use crate::model::Coordinates;
use crate::weather::{WeatherEndpoint, DEFAULT_WEATHER_BASE, METRIC_UNITS};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub location: LocationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_units")]
    pub units: String,
}

fn default_weather_url() -> String {
    DEFAULT_WEATHER_BASE.to_string()
}

fn default_units() -> String {
    METRIC_UNITS.to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            api_key: String::new(),
            units: default_units(),
        }
    }
}

impl WeatherConfig {
    pub fn endpoint(&self) -> WeatherEndpoint {
        WeatherEndpoint {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            units: self.units.clone(),
        }
    }
}

/// Where the farm is, standing in for the browser's geolocation
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    pub latitude: Option<f64>,

    pub longitude: Option<f64>,

    #[serde(default = "default_permission")]
    pub permission: PermissionState,
}

fn default_permission() -> PermissionState {
    PermissionState::Prompt
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: None,
            longitude: None,
            permission: default_permission(),
        }
    }
}

impl LocationConfig {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// Locator answering with the configured permission and position
    pub fn locator(&self) -> FixedLocator {
        FixedLocator::new(self.permission, self.coordinates())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("karoo").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Weather overrides
        if let Some(key) = var("KAROO_WEATHER_API_KEY") {
            self.weather.api_key = key;
        }
        if let Some(url) = var("KAROO_WEATHER_URL") {
            self.weather.base_url = url;
        }

        // Location overrides
        if let Some(lat) = var("KAROO_LATITUDE").and_then(|v| v.parse().ok()) {
            self.location.latitude = Some(lat);
        }
        if let Some(lon) = var("KAROO_LONGITUDE").and_then(|v| v.parse().ok()) {
            self.location.longitude = Some(lon);
        }
        if let Some(permission) = var("KAROO_LOCATION_PERMISSION") {
            match permission.parse() {
                Ok(p) => self.location.permission = p,
                Err(e) => tracing::warn!("Ignoring KAROO_LOCATION_PERMISSION: {}", e),
            }
        }

        // Logging overrides
        if let Some(level) = var("KAROO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("KAROO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# KarooFarmer Configuration
#
# Environment variables override these settings:
# - KAROO_WEATHER_API_KEY
# - KAROO_WEATHER_URL
# - KAROO_LATITUDE
# - KAROO_LONGITUDE
# - KAROO_LOCATION_PERMISSION
# - KAROO_LOG_LEVEL
# - KAROO_LOG_FORMAT

[weather]
# OpenWeatherMap API base URL
base_url = "https://api.openweathermap.org/data/2.5"

# OpenWeatherMap API key (get one at openweathermap.org)
api_key = ""

# Units requested from the provider
units = "metric"

[location]
# Farm position. Leave unset to have no position available.
# latitude = -33.59
# longitude = 22.20

# Location permission: granted, prompt, denied or unsupported.
# "prompt" asks before the position is used.
permission = "prompt"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.weather.units, "metric");
        assert_eq!(config.location.permission, PermissionState::Prompt);
        assert_eq!(config.location.coordinates(), None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.weather.api_key.is_empty());
        assert_eq!(config.location.permission, PermissionState::Prompt);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[weather]
api_key = "secret"

[location]
latitude = -33.59
longitude = 22.2
permission = "granted"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.weather.api_key, "secret");
        assert_eq!(config.weather.units, "metric");
        assert_eq!(
            config.location.coordinates(),
            Some(Coordinates::new(-33.59, 22.2))
        );
        assert_eq!(config.location.permission, PermissionState::Granted);
        assert_eq!(
            config.location.locator(),
            FixedLocator::at(Coordinates::new(-33.59, 22.2))
        );

        let endpoint = config.weather.endpoint();
        assert_eq!(endpoint.api_key, "secret");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[location]\npermission = \"sometimes\"\n").unwrap();
        let bad = Config::load(file.path()).unwrap_err();
        assert!(matches!(bad, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("KAROO_WEATHER_API_KEY", "from-env"),
            ("KAROO_LATITUDE", "1.5"),
            ("KAROO_LONGITUDE", "not-a-number"),
            ("KAROO_LOCATION_PERMISSION", "denied"),
            ("KAROO_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.weather.api_key, "from-env");
        assert_eq!(config.location.latitude, Some(1.5));
        assert_eq!(config.location.longitude, None);
        assert_eq!(config.location.permission, PermissionState::Denied);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
