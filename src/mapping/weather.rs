//! Weather observation to sound parameter mapping

use serde::Serialize;

use super::normalize::normalize;
use super::scale::Scale;
use super::MapError;
use crate::sources::WeatherObservation;

/// Soundscape controls derived from one weather observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundParams {
    /// MIDI note at the center of the melodic range (C2..C6)
    pub pitch_base: i32,
    /// Beats per minute
    pub tempo: i32,
    /// Reverb mix, 0..0.9
    pub reverb: f64,
    /// Low-pass cutoff in Hz
    pub filter_freq: f64,
    /// Chance of a note sounding on each step, 0.1..0.9
    pub note_density: f64,
    /// Pitch-class offsets of the active scale
    pub scale: Vec<u8>,
    pub scale_name: String,
    pub raw_temperature: f64,
    pub raw_humidity: f64,
    pub raw_wind: f64,
    pub raw_clouds: f64,
    pub raw_pressure: f64,
    pub weather_code: u32,
    pub weather_main: String,
    pub weather_description: String,
    pub location: String,
}

/// Fixed parameter set served when mapping cannot proceed.
///
/// Carries only the control values and the error description; no raw
/// readings are fabricated for a failed observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackParams {
    pub pitch_base: i32,
    pub tempo: i32,
    pub reverb: f64,
    pub filter_freq: f64,
    pub note_density: f64,
    pub scale: Vec<u8>,
    pub error: String,
}

impl FallbackParams {
    /// The default parameter set, annotated with what went wrong
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            pitch_base: 60,
            tempo: 120,
            reverb: 0.3,
            filter_freq: 2000.0,
            note_density: 0.5,
            scale: Scale::major().intervals().to_vec(),
            error: error.into(),
        }
    }
}

/// Outcome of a weather mapping call.
///
/// Mapping never fails outward: bad input degrades to the fixed
/// fallback set with the error attached, so a caller on a live request
/// path always gets something playable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WeatherMapping {
    Computed(SoundParams),
    Degraded(FallbackParams),
}

impl WeatherMapping {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }

    /// Error description when degraded
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Computed(_) => None,
            Self::Degraded(fallback) => Some(&fallback.error),
        }
    }
}

/// Map a weather observation to soundscape parameters.
///
/// Pure and deterministic: the same observation always yields the same
/// parameter set. Readings beyond the expected physical ranges
/// extrapolate linearly rather than clamp.
pub fn map_weather(obs: &WeatherObservation) -> WeatherMapping {
    if let Err(e) = check_readings(obs) {
        return WeatherMapping::Degraded(FallbackParams::new(e.to_string()));
    }

    // Cold = low pitch, hot = high pitch (C2..C6 in MIDI notes)
    let pitch_base = normalize(obs.temperature, -20.0, 40.0, 36.0, 84.0) as i32;
    let reverb = normalize(obs.humidity, 0.0, 100.0, 0.0, 0.9);
    let tempo = normalize(obs.wind_speed, 0.0, 30.0, 60.0, 180.0) as i32;
    // Overcast skies close the filter down
    let filter_freq = normalize(obs.clouds, 0.0, 100.0, 200.0, 10_000.0);
    let note_density = normalize(obs.pressure, 970.0, 1050.0, 0.1, 0.9);

    let scale = Scale::for_condition_code(obs.condition_code);

    WeatherMapping::Computed(SoundParams {
        pitch_base,
        tempo,
        reverb,
        filter_freq,
        note_density,
        scale: scale.intervals().to_vec(),
        scale_name: scale.name().to_string(),
        raw_temperature: obs.temperature,
        raw_humidity: obs.humidity,
        raw_wind: obs.wind_speed,
        raw_clouds: obs.clouds,
        raw_pressure: obs.pressure,
        weather_code: obs.condition_code,
        weather_main: obs.condition.clone(),
        weather_description: obs.description.clone(),
        location: obs.location(),
    })
}

fn check_readings(obs: &WeatherObservation) -> Result<(), MapError> {
    let readings = [
        ("temperature", obs.temperature),
        ("humidity", obs.humidity),
        ("wind speed", obs.wind_speed),
        ("cloud coverage", obs.clouds),
        ("pressure", obs.pressure),
    ];
    for (field, value) in readings {
        if !value.is_finite() {
            return Err(MapError::NonFinite { field, value });
        }
    }
    Ok(())
}
