//! Configuration schema definitions

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration for Petrichor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetrichorConfig {
    /// Weather API access
    pub weather: WeatherConfig,

    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

impl PetrichorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.weather.api_key.is_empty() {
            bail!("weather.api_key must be set");
        }
        if self.weather.location.is_empty() {
            bail!("weather.location must not be empty");
        }
        if self.weather.interval_secs == 0 {
            bail!("weather.interval_secs must be at least 1");
        }
        Ok(())
    }
}

/// Weather API access.
///
/// This is the only place the API key lives; it is handed to the
/// weather source at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,

    /// Location query (city name, "lat,lon", or city ID)
    #[serde(default = "default_location")]
    pub location: String,

    /// Poll interval in seconds for watch mode (default: 300)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_location() -> String {
    "Austin,TX,US".to_string()
}
fn default_interval_secs() -> u64 {
    300
}

impl WeatherConfig {
    /// Poll interval as a Duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Output formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON parameter sets (default: true)
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}
