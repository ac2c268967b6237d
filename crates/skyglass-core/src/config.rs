use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "SKYGLASS_CONFIG_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";
const SAVED_LOCATION_FILE_NAME: &str = "saved_location.json";

/// One problem found in `config.toml`, tied to its dotted field path
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors make the config unusable; warnings are only logged
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// All errors on one line, `field: message; field: message`
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Temperature unit used for display. Weather data always arrives in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Celsius reading into this unit (not rounded).
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }
}

/// Wind speed unit used for display. Weather data always arrives in m/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    #[default]
    Mph,
    Kmh,
    Ms,
}

impl SpeedUnit {
    /// Convert a meters-per-second reading into this unit (not rounded).
    pub fn from_meters_per_second(&self, mps: f64) -> f64 {
        match self {
            Self::Mph => mps * 2.237,
            Self::Kmh => mps * 3.6,
            Self::Ms => mps,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mph => "mph",
            Self::Kmh => "km/h",
            Self::Ms => "m/s",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the config file and the saved location.
    #[serde(skip, default = "default_config_dir")]
    pub config_dir: PathBuf,

    /// Weather settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Place-name lookup settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Platform location service settings
    #[serde(default)]
    pub location: LocationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Current-conditions endpoint, queried with `?lat=..&lon=..`
    #[serde(default = "default_weather_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    #[serde(default)]
    pub speed_unit: SpeedUnit,
}

fn default_weather_api_url() -> String {
    "https://weather-proxy.freecodecamp.rocks/api/current".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: default_weather_api_url(),
            temperature_unit: TemperatureUnit::default(),
            speed_unit: SpeedUnit::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Nominatim-compatible search endpoint
    #[serde(default = "default_geocoding_api_url")]
    pub api_url: String,

    /// Client identifier sent as the User-Agent header (required by Nominatim)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocoding_api_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_user_agent() -> String {
    format!("Skyglass/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            api_url: default_geocoding_api_url(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_high_accuracy")]
    pub high_accuracy: bool,

    /// How long to wait for a position fix
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How old a previously obtained fix may be and still be reused
    #[serde(default = "default_maximum_age_secs")]
    pub maximum_age_secs: u64,
}

fn default_high_accuracy() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_maximum_age_secs() -> u64 {
    60
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            high_accuracy: default_high_accuracy(),
            timeout_secs: default_timeout_secs(),
            maximum_age_secs: default_maximum_age_secs(),
        }
    }
}

impl LocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn maximum_age(&self) -> Duration {
        Duration::from_secs(self.maximum_age_secs)
    }
}

fn default_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("skyglass")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            weather: WeatherConfig::default(),
            geocoding: GeocodingConfig::default(),
            location: LocationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist.
    ///
    /// The directory containing `path` becomes the config directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if !path.exists() {
            let config = Self {
                config_dir,
                ..Self::default()
            };
            config.save_to(path)?;
            tracing::info!("Wrote default configuration to {}", path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;

        let mut config: Config =
            toml::from_str(&contents).context("Failed to parse config file")?;
        config.config_dir = config_dir;

        Ok(config)
    }

    /// Load (from `path` or the default location) and reject configs with errors.
    /// Warnings are logged.
    pub fn load_validated(path: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let loaded = match path {
            Some(p) => Self::load_from(p),
            None => Self::load(),
        };
        let config = loaded.map_err(|e| {
            let detail = format!("{:#}", e);
            if e.chain().any(|cause| cause.is::<std::io::Error>()) {
                ConfigError::Io(detail)
            } else {
                ConfigError::ParseError(detail)
            }
        })?;

        let validation = config.validate();
        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("config.toml: {}", warning);
        }

        Ok(config)
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        self.validate_url(&self.weather.api_url, "weather.api_url", &mut result);
        self.validate_url(&self.geocoding.api_url, "geocoding.api_url", &mut result);

        if self.geocoding.user_agent.trim().is_empty() {
            result.add_error(
                "geocoding.user_agent",
                "A client identifier is required by the geocoding service",
            );
        }

        if self.location.timeout_secs == 0 {
            result.add_error("location.timeout_secs", "Timeout must be greater than 0");
        } else if self.location.timeout_secs > 60 {
            result.add_warning(
                "location.timeout_secs",
                "Location timeout is more than a minute",
            );
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Save configuration to `config_dir/config.toml`
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.config_path())
    }

    /// Save configuration to `path`, creating its directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Where the manually entered location preference is persisted
    pub fn saved_location_path(&self) -> PathBuf {
        self.config_dir.join(SAVED_LOCATION_FILE_NAME)
    }
}
