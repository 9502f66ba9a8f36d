//! Sine tone synthesis.
//!
//! Pure function of `(frequency, sample_rate, duration)` plus the output
//! layout: no phase is carried between calls, so two calls with the same
//! arguments return identical buffers.

use super::pcm::{full_scale, PcmBuffer, HEADROOM};
use crate::config::AudioConfig;
use crate::error::{MorseError, Result};

/// Sine tone generator for one output layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSynth {
    frequency_hz: f64,
    sample_rate: u32,
    channels: u16,
    bit_depth: u16,
}

impl ToneSynth {
    /// Create a synthesizer for a validated configuration.
    ///
    /// # Arguments
    /// * `config` - Frequency, sample rate, channel count and bit depth
    pub fn new(config: &AudioConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            frequency_hz: config.frequency_hz,
            sample_rate: config.sample_rate,
            channels: config.channels,
            bit_depth: config.bit_depth,
        })
    }

    pub fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Peak sample value: full scale of the bit depth minus headroom.
    #[inline]
    pub fn amplitude(&self) -> f64 {
        full_scale(self.bit_depth) as f64 * HEADROOM
    }

    /// Frame count for a duration: `round(sample_rate × duration)`.
    #[inline]
    pub fn frames_for(&self, duration_s: f64) -> f64 {
        (self.sample_rate as f64 * duration_s).round()
    }

    /// Generate a tone of `duration_s` seconds.
    ///
    /// Sample `n` is `amplitude × sin(2π × frequency × n / sample_rate)`,
    /// copied to every channel.
    ///
    /// # Errors
    /// * Type mismatch if the duration is not a finite number
    /// * Input error if the duration is zero or negative
    /// * Audio error if the buffer cannot be allocated
    pub fn synthesize_tone(&self, duration_s: f64) -> Result<PcmBuffer> {
        if !duration_s.is_finite() {
            return Err(MorseError::type_mismatch(format!(
                "tone duration must be a finite number, got {duration_s}"
            )));
        }
        if duration_s <= 0.0 {
            return Err(MorseError::input(format!(
                "tone duration must be positive, got {duration_s} s"
            )));
        }

        let frames = self.frames_for(duration_s);
        let channels = self.channels as usize;
        let total = frames_to_len(frames, channels).ok_or_else(|| {
            MorseError::audio(format!("tone of {duration_s} s does not fit in memory"))
        })?;

        let mut samples: Vec<i32> = Vec::new();
        samples.try_reserve_exact(total).map_err(|e| {
            MorseError::audio(format!("cannot allocate {total} samples: {e}"))
        })?;

        let amplitude = self.amplitude();
        let step = core::f64::consts::TAU * self.frequency_hz / self.sample_rate as f64;
        for n in 0..total / channels {
            let value = (amplitude * (step * n as f64).sin()).round() as i32;
            samples.extend(core::iter::repeat(value).take(channels));
        }

        Ok(PcmBuffer::from_parts(
            samples,
            self.channels,
            self.bit_depth,
            self.sample_rate,
        ))
    }
}

fn frames_to_len(frames: f64, channels: usize) -> Option<usize> {
    if frames > (usize::MAX / channels.max(1)) as f64 {
        return None;
    }
    (frames as usize).checked_mul(channels)
}
