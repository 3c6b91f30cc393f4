//! Microphone frame input
//!
//! Loads WAV files into the plain `f64` sample frames the mic mapper
//! consumes. Multi-channel audio is averaged down to mono and integer
//! formats are scaled to [-1, 1].

use anyhow::{Context, Result};
use hound::SampleFormat;
use std::path::Path;

/// Load a WAV file as a mono sample frame
pub fn load_wav_frame(path: &Path) -> Result<Vec<f64>> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("failed to open WAV file: {:?}", path))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let samples: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()
            .context("failed to read samples")?,
        SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<_, _>>()
                .context("failed to read samples")?
        }
    };

    if channels <= 1 {
        return Ok(samples);
    }

    // Average interleaved channels down to mono
    Ok(samples
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};
    use tempfile::NamedTempFile;

    fn float_spec(channels: u16) -> WavSpec {
        WavSpec {
            channels,
            sample_rate: 44100,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        }
    }

    #[test]
    fn test_load_float_mono() {
        let file = NamedTempFile::new().unwrap();
        {
            let mut writer = WavWriter::create(file.path(), float_spec(1)).unwrap();
            for sample in [0.25f32, -0.25, 0.5, 0.0] {
                writer.write_sample(sample).unwrap();
            }
            writer.finalize().unwrap();
        }

        let frame = load_wav_frame(file.path()).unwrap();
        assert_eq!(frame, vec![0.25, -0.25, 0.5, 0.0]);
    }

    #[test]
    fn test_load_int16_scales_to_unit_range() {
        let file = NamedTempFile::new().unwrap();
        {
            let spec = WavSpec {
                channels: 1,
                sample_rate: 44100,
                bits_per_sample: 16,
                sample_format: SampleFormat::Int,
            };
            let mut writer = WavWriter::create(file.path(), spec).unwrap();
            for sample in [16384i16, -16384, 0] {
                writer.write_sample(sample).unwrap();
            }
            writer.finalize().unwrap();
        }

        let frame = load_wav_frame(file.path()).unwrap();
        assert_eq!(frame, vec![0.5, -0.5, 0.0]);
    }

    #[test]
    fn test_load_stereo_downmixes_to_mono() {
        let file = NamedTempFile::new().unwrap();
        {
            let mut writer = WavWriter::create(file.path(), float_spec(2)).unwrap();
            // Two interleaved frames: (1.0, 0.0) and (0.5, 0.5)
            for sample in [1.0f32, 0.0, 0.5, 0.5] {
                writer.write_sample(sample).unwrap();
            }
            writer.finalize().unwrap();
        }

        let frame = load_wav_frame(file.path()).unwrap();
        assert_eq!(frame, vec![0.5, 0.5]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_wav_frame(Path::new("/nonexistent/frame.wav"));
        assert!(result.is_err());
    }
}
