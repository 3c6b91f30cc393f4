//! Microphone frame to sound parameter mapping

use serde::Serialize;

use super::normalize::normalize;
use super::MapError;

/// Parameters derived from one microphone frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicParams {
    /// Playback volume, 0.1..1.0
    pub volume: f64,
    /// Pitch shift in semitones, -12..12
    pub pitch_shift: f64,
    /// Mean absolute sample value
    pub raw_amplitude: f64,
    /// Index-weighted mean of absolute sample values
    pub raw_spectral_centroid: f64,
}

/// Fixed parameter set served when a frame cannot be mapped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MicFallback {
    pub volume: f64,
    pub pitch_shift: f64,
    pub error: String,
}

impl MicFallback {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            volume: 0.5,
            pitch_shift: 0.0,
            error: error.into(),
        }
    }
}

/// Outcome of a mic mapping call; same never-fail contract as the
/// weather mapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MicMapping {
    Computed(MicParams),
    Degraded(MicFallback),
}

impl MicMapping {
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

/// Map a frame of audio samples to volume and pitch-shift controls.
///
/// The centroid here is an index-weighted mean of absolute sample
/// values, a crude stand-in for a spectral centroid but enough to
/// steer pitch up or down. A silent frame has no centroid; it reads
/// as 0 rather than failing, and `pitch_shift` is always computed
/// from that guarded value so neither output can go non-finite.
pub fn map_mic_input(samples: &[f64]) -> MicMapping {
    if samples.is_empty() {
        return MicMapping::Degraded(MicFallback::new(MapError::EmptyFrame.to_string()));
    }

    let abs_sum: f64 = samples.iter().map(|s| s.abs()).sum();
    let amplitude = abs_sum / samples.len() as f64;
    if !amplitude.is_finite() {
        let e = MapError::NonFinite {
            field: "amplitude",
            value: amplitude,
        };
        return MicMapping::Degraded(MicFallback::new(e.to_string()));
    }

    let weighted: f64 = samples
        .iter()
        .enumerate()
        .map(|(i, s)| s.abs() * i as f64)
        .sum();
    let centroid = if abs_sum > 0.0 { weighted / abs_sum } else { 0.0 };
    if !centroid.is_finite() {
        let e = MapError::NonFinite {
            field: "spectral centroid",
            value: centroid,
        };
        return MicMapping::Degraded(MicFallback::new(e.to_string()));
    }

    let volume = normalize(amplitude, 0.0, 1.0, 0.1, 1.0);
    let pitch_shift = normalize(centroid, 0.0, samples.len() as f64 / 2.0, -12.0, 12.0);

    MicMapping::Computed(MicParams {
        volume,
        pitch_shift,
        raw_amplitude: amplitude,
        raw_spectral_centroid: centroid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(mapping: MicMapping) -> MicParams {
        match mapping {
            MicMapping::Computed(p) => p,
            MicMapping::Degraded(f) => panic!("unexpected degraded mapping: {}", f.error),
        }
    }

    #[test]
    fn test_empty_frame_degrades_to_fallback() {
        let mapping = map_mic_input(&[]);
        assert!(mapping.is_degraded());
        match mapping {
            MicMapping::Degraded(f) => {
                assert_eq!(f.volume, 0.5);
                assert_eq!(f.pitch_shift, 0.0);
            }
            MicMapping::Computed(_) => unreachable!(),
        }
    }

    #[test]
    fn test_silent_frame_is_guarded_not_a_fault() {
        let p = params(map_mic_input(&[0.0; 8]));

        assert_eq!(p.raw_amplitude, 0.0);
        assert_eq!(p.raw_spectral_centroid, 0.0);
        assert_eq!(p.volume, normalize(0.0, 0.0, 1.0, 0.1, 1.0));
        assert_eq!(p.volume, 0.1);
        // Centroid 0 over a source range of 0..len/2 pins pitch low
        assert_eq!(p.pitch_shift, normalize(0.0, 0.0, 4.0, -12.0, 12.0));
        assert_eq!(p.pitch_shift, -12.0);
    }

    #[test]
    fn test_single_sample_frame() {
        let p = params(map_mic_input(&[0.5]));

        assert_eq!(p.raw_amplitude, 0.5);
        assert_eq!(p.raw_spectral_centroid, 0.0);
        assert_eq!(p.volume, 0.55);
        assert_eq!(p.pitch_shift, -12.0);
    }

    #[test]
    fn test_energy_at_the_end_raises_pitch() {
        // All weight on the last index: centroid 1 over range 0..1
        let p = params(map_mic_input(&[0.0, 1.0]));

        assert_eq!(p.raw_amplitude, 0.5);
        assert_eq!(p.raw_spectral_centroid, 1.0);
        assert_eq!(p.pitch_shift, 12.0);
    }

    #[test]
    fn test_uniform_frame_centroid() {
        // Equal weight everywhere: centroid (0+1+2+3)/4 = 1.5 over 0..2
        let p = params(map_mic_input(&[1.0; 4]));

        assert_eq!(p.raw_amplitude, 1.0);
        assert_eq!(p.raw_spectral_centroid, 1.5);
        assert_eq!(p.volume, 1.0);
        assert_eq!(p.pitch_shift, 6.0);
    }

    #[test]
    fn test_negative_samples_count_by_magnitude() {
        let p = params(map_mic_input(&[-1.0, 1.0]));

        assert_eq!(p.raw_amplitude, 1.0);
        assert_eq!(p.raw_spectral_centroid, 0.5);
        assert_eq!(p.pitch_shift, 0.0);
    }

    #[test]
    fn test_non_finite_sample_degrades() {
        let mapping = map_mic_input(&[0.1, f64::NAN, 0.2]);
        assert!(mapping.is_degraded());
        assert!(mapping.error().unwrap().contains("amplitude"));
    }

    #[test]
    fn test_serialized_shapes() {
        let computed = serde_json::to_value(map_mic_input(&[0.25, 0.5])).unwrap();
        assert!(computed.get("volume").is_some());
        assert!(computed.get("raw_amplitude").is_some());
        assert!(computed.get("error").is_none());

        let degraded = serde_json::to_value(map_mic_input(&[])).unwrap();
        assert!(degraded.get("error").is_some());
        assert!(degraded.get("raw_amplitude").is_none());
    }
}
