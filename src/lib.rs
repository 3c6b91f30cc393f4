//! Petrichor - Weather-driven soundscape parameters
//!
//! Maps weather observations onto musical control values. Temperature
//! sets the pitch center, wind drives the tempo, humidity becomes
//! reverb, and the sky condition picks the scale.

pub mod config;
pub mod demo;
pub mod mapping;
pub mod sources;

pub use config::PetrichorConfig;
pub use mapping::{map_mic_input, map_weather};
