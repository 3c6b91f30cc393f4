//! Mapping system for transforming observations to sound parameters
//!
//! Pure, stateless transforms: a weather observation or a microphone
//! frame goes in, a bounded set of musical control values comes out.
//! Mapping never fails outward; bad input degrades to a fixed fallback
//! parameter set with the error description attached.

mod mic;
mod normalize;
mod scale;
mod weather;

pub use mic::{map_mic_input, MicFallback, MicMapping, MicParams};
pub use normalize::{normalize, normalize_unit};
pub use scale::Scale;
pub use weather::{map_weather, FallbackParams, SoundParams, WeatherMapping};

use thiserror::Error;

/// Faults that degrade a mapping call to its fallback parameter set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("non-finite {field} reading ({value})")]
    NonFinite { field: &'static str, value: f64 },

    #[error("empty audio frame")]
    EmptyFrame,
}
