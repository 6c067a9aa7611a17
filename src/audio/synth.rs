//! Closed-form ambient drone used as the narrative's looping soundtrack.
//!
//! The signal is a slow sub-audio pulse, a vibrato'd 110 Hz shimmer and a phase-drifting
//! 220 Hz overtone, all shaped by a 20 s "breath" envelope. Output is a pure function of
//! [`AmbientSpec`]: no randomness, no global state.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::{
    audio::wav::{WAV_HEADER_LEN, encode_pcm16_mono},
    foundation::error::{LunaError, LunaResult},
    foundation::math::ensure_positive,
};

pub const DEFAULT_DURATION_SECS: f64 = 10.0;
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

const MASTER_GAIN: f64 = 0.45;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Length and rate of the generated loop.
pub struct AmbientSpec {
    pub duration_secs: f64,
    pub sample_rate: u32, // Hz
}

impl Default for AmbientSpec {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl AmbientSpec {
    pub fn new(duration_secs: f64, sample_rate: u32) -> LunaResult<Self> {
        let spec = Self {
            duration_secs,
            sample_rate,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> LunaResult<()> {
        ensure_positive("ambient duration_secs", self.duration_secs)?;
        if self.sample_rate == 0 {
            return Err(LunaError::validation("ambient sample_rate must be > 0"));
        }
        let data_bytes = (self.sample_count() as u64) * 2;
        if data_bytes + (WAV_HEADER_LEN as u64) - 8 > u64::from(u32::MAX) {
            return Err(LunaError::validation(format!(
                "ambient loop of {}s at {} Hz does not fit a RIFF container",
                self.duration_secs, self.sample_rate
            )));
        }
        Ok(())
    }

    /// Number of mono samples, rounded to the nearest whole frame.
    ///
    /// Durations like 0.7 s land a hair under an integer once multiplied by the rate.
    pub fn sample_count(&self) -> usize {
        (self.duration_secs * f64::from(self.sample_rate)).round() as usize
    }
}

/// Amplitude of the drone at time `t` (seconds), before clamping and quantization.
pub fn ambient_sample(t: f64) -> f64 {
    let low_pulse = (TAU * 0.12 * t).sin() * 0.3;
    let shimmer = (TAU * (110.0 + (0.27 * t).sin() * 6.0) * t).sin() * 0.35;
    let overtone = (TAU * (220.0 + (0.15 * t).sin() * 12.0) * t + (0.1 * t).sin()).sin() * 0.14;
    let breath = (TAU * 0.05 * t).sin() * 0.2 + 0.4;
    (low_pulse + shimmer + overtone) * breath * MASTER_GAIN
}

/// Generate the mono waveform for `spec`.
#[tracing::instrument]
pub fn synthesize_ambient(spec: &AmbientSpec) -> LunaResult<Vec<f32>> {
    spec.validate()?;

    let rate = f64::from(spec.sample_rate);
    let samples: Vec<f32> = (0..spec.sample_count())
        .map(|i| ambient_sample(i as f64 / rate) as f32)
        .collect();

    tracing::debug!(samples = samples.len(), "synthesized ambient loop");
    Ok(samples)
}

/// Generate the waveform and wrap it in a mono 16-bit PCM WAV container.
pub fn render_ambient_wav(spec: &AmbientSpec) -> LunaResult<Vec<u8>> {
    let samples = synthesize_ambient(spec)?;
    encode_pcm16_mono(&samples, spec.sample_rate)
}

#[cfg(test)]
#[path = "../../tests/unit/audio/synth.rs"]
mod tests;
