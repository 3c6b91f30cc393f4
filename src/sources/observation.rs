//! Weather observation record and its wire format
//!
//! `WeatherResponse` mirrors the OpenWeatherMap current-conditions
//! payload with every field optional; `WeatherObservation` is the
//! fully-resolved record the mapper consumes, each field independently
//! defaulted when the upstream left it out.

use serde::Deserialize;

/// OpenWeatherMap API response, every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherResponse {
    pub main: Option<MainData>,
    pub wind: Option<WindData>,
    pub clouds: Option<CloudData>,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
    pub name: Option<String>,
    pub sys: Option<SysData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainData {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindData {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloudData {
    pub all: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionData {
    pub id: Option<u32>,
    pub main: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysData {
    pub country: Option<String>,
}

/// A weather observation with every field resolved
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Cloud coverage in percent
    pub clouds: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    /// Condition code (hundreds digit is the condition family)
    pub condition_code: u32,
    /// Short condition label, e.g. "Clouds"
    pub condition: String,
    /// Longer condition text, e.g. "scattered clouds"
    pub description: String,
    pub city: String,
    pub country: String,
}

impl Default for WeatherObservation {
    /// A mild, unremarkable day: the reading used for any field the
    /// upstream payload is missing.
    fn default() -> Self {
        Self {
            temperature: 20.0,
            humidity: 50.0,
            wind_speed: 5.0,
            clouds: 50.0,
            pressure: 1013.0,
            condition_code: 800,
            condition: "Clear".to_string(),
            description: "clear sky".to_string(),
            city: "Unknown".to_string(),
            country: String::new(),
        }
    }
}

impl From<WeatherResponse> for WeatherObservation {
    fn from(response: WeatherResponse) -> Self {
        let defaults = Self::default();
        let main = response.main.unwrap_or_default();
        let condition = response.weather.into_iter().next().unwrap_or_default();

        Self {
            temperature: main.temp.unwrap_or(defaults.temperature),
            humidity: main.humidity.unwrap_or(defaults.humidity),
            pressure: main.pressure.unwrap_or(defaults.pressure),
            wind_speed: response
                .wind
                .and_then(|w| w.speed)
                .unwrap_or(defaults.wind_speed),
            clouds: response
                .clouds
                .and_then(|c| c.all)
                .unwrap_or(defaults.clouds),
            condition_code: condition.id.unwrap_or(defaults.condition_code),
            condition: condition.main.unwrap_or(defaults.condition),
            description: condition.description.unwrap_or(defaults.description),
            city: response.name.unwrap_or(defaults.city),
            country: response
                .sys
                .and_then(|s| s.country)
                .unwrap_or(defaults.country),
        }
    }
}

impl WeatherObservation {
    /// "City, CC" label; the country part may be empty.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}
