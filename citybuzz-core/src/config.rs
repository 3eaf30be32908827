//! Global City Buzz configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_CITY, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, FEED_DELAY, FEED_TIMEOUT,
};
use crate::error::{CityBuzzError, CityBuzzResult};
use crate::event::Coordinate;

static DEFAULT_DATA_DIR: &str = "~/.local/share/citybuzz";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

fn default_feed_delay_ms() -> u64 {
    FEED_DELAY.as_millis() as u64
}

fn default_feed_timeout_secs() -> u64 {
    FEED_TIMEOUT.as_secs()
}

/// Configuration at ~/.config/citybuzz/config.toml
///
/// Every key can be overridden from the environment with a `CITYBUZZ_`
/// prefix, e.g. `CITYBUZZ_DATA_DIR=/tmp/citybuzz`.
#[derive(Debug, Deserialize, Clone)]
pub struct CityBuzzConfig {
    /// Where events and preferences are stored
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// City given to posted events
    #[serde(default = "default_city")]
    pub default_city: String,

    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    #[serde(default = "default_longitude")]
    pub default_longitude: f64,

    /// Simulated latency of the remote feed
    #[serde(default = "default_feed_delay_ms")]
    pub feed_delay_ms: u64,

    #[serde(default = "default_feed_timeout_secs")]
    pub feed_timeout_secs: u64,

    /// Log filter directive, e.g. "citybuzz_core=debug"
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Default for CityBuzzConfig {
    fn default() -> Self {
        CityBuzzConfig {
            data_dir: default_data_dir(),
            default_city: default_city(),
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            feed_delay_ms: default_feed_delay_ms(),
            feed_timeout_secs: default_feed_timeout_secs(),
            log_filter: None,
        }
    }
}

impl CityBuzzConfig {
    /// Load the user's config, creating a commented default file on first run.
    pub fn load() -> CityBuzzResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (optional) layered with `CITYBUZZ_*` environment overrides.
    pub fn load_from(path: &Path) -> CityBuzzResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("CITYBUZZ").try_parsing(true))
            .build()
            .map_err(|e| CityBuzzError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CityBuzzError::Config(e.to_string()))
    }

    pub fn config_path() -> CityBuzzResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CityBuzzError::Config("Could not determine config directory".into()))?
            .join("citybuzz");

        Ok(config_dir.join("config.toml"))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn default_coordinate(&self) -> Coordinate {
        Coordinate::new(self.default_latitude, self.default_longitude)
    }

    pub fn feed_delay(&self) -> Duration {
        Duration::from_millis(self.feed_delay_ms)
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_secs)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CityBuzzResult<()> {
        let contents = format!(
            "\
# City Buzz configuration

# Where events and saved filters live:
# data_dir = \"{DEFAULT_DATA_DIR}\"

# City and coordinates given to events you post:
# default_city = \"{DEFAULT_CITY}\"
# default_latitude = {DEFAULT_LATITUDE}
# default_longitude = {DEFAULT_LONGITUDE}

# Remote feed latency and timeout:
# feed_delay_ms = {}
# feed_timeout_secs = {}

# Log filter (overridden by CITYBUZZ_LOG):
# log_filter = \"info\"
",
            default_feed_delay_ms(),
            default_feed_timeout_secs(),
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CityBuzzError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CityBuzzError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
