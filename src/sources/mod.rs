//! Data inputs for Petrichor
//!
//! Weather observations come from the OpenWeatherMap API, microphone
//! frames from WAV files. Both feed the mapping system.

mod mic;
mod observation;
mod weather;

pub use mic::load_wav_frame;
pub use observation::{
    CloudData, ConditionData, MainData, SysData, WeatherObservation, WeatherResponse, WindData,
};
pub use weather::WeatherSource;
