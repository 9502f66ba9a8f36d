//! Default output device via cpal.
//!
//! The sink owns the `cpal::Stream` for its whole lifetime; dropping the
//! sink stops the stream and releases the device. Samples travel to the
//! device callback through a [`SampleRing`]; writers block while the ring
//! is full, so playback time is set by the device clock.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use super::buffer::SampleRing;
use super::pcm::PcmBuffer;
use super::sink::AudioSink;
use crate::config::AudioConfig;
use crate::error::{MorseError, Result};

/// Ring length in seconds of audio.
const RING_SECONDS: f64 = 0.25;

/// Producer back-off while the ring is full or draining.
const POLL_INTERVAL: Duration = Duration::from_millis(2);

/// Silence queued behind the last segment so it clears the device buffer
/// before the stream is dropped.
const TAIL_PAD: Duration = Duration::from_millis(150);

/// Default output device session.
pub struct CpalSink {
    _stream: cpal::Stream,
    ring: Arc<SampleRing>,
    sample_rate: u32,
    channels: u16,
    device_name: String,
}

impl CpalSink {
    /// Open the host's default output device with the configured layout.
    pub fn open(config: &AudioConfig) -> Result<Self> {
        config.validate()?;

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| MorseError::audio("no default output device"))?;
        let device_name = device
            .name()
            .unwrap_or_else(|_| "Unknown CPAL Device".to_string());

        let stream_config = cpal::StreamConfig {
            channels: config.channels,
            sample_rate: cpal::SampleRate(config.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let capacity =
            (config.sample_rate as f64 * RING_SECONDS) as usize * config.channels as usize;
        let ring = Arc::new(SampleRing::with_capacity(capacity));
        let reader = Arc::clone(&ring);

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    reader.read_into(data);
                },
                |err| tracing::error!(%err, "output stream error"),
                None,
            )
            .map_err(|e| MorseError::audio(format!("failed to build output stream: {e}")))?;

        stream
            .play()
            .map_err(|e| MorseError::audio(format!("failed to play output stream: {e}")))?;

        tracing::debug!(
            device = %device_name,
            sample_rate = config.sample_rate,
            channels = config.channels,
            "audio output opened"
        );

        Ok(Self {
            _stream: stream,
            ring,
            sample_rate: config.sample_rate,
            channels: config.channels,
            device_name,
        })
    }

    fn push_blocking(&self, sample: f32) {
        while !self.ring.push(sample) {
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl AudioSink for CpalSink {
    fn name(&self) -> &str {
        &self.device_name
    }

    fn write_tone(&mut self, buffer: &PcmBuffer) -> Result<()> {
        if buffer.sample_rate() != self.sample_rate || buffer.channels() != self.channels {
            return Err(MorseError::audio(format!(
                "buffer layout {} Hz × {} does not match device {} Hz × {}",
                buffer.sample_rate(),
                buffer.channels(),
                self.sample_rate,
                self.channels
            )));
        }
        for sample in buffer.to_f32() {
            self.push_blocking(sample);
        }
        Ok(())
    }

    fn write_silence(&mut self, duration: Duration) -> Result<()> {
        for _ in 0..silence_len(duration, self.sample_rate, self.channels) {
            self.push_blocking(0.0);
        }
        Ok(())
    }

    /// Waits until the tail pad has been taken by the callback; by then the
    /// last real sample has left the device buffer.
    fn finish(&mut self) -> Result<()> {
        self.write_silence(TAIL_PAD)?;
        while !self.ring.is_empty() {
            thread::sleep(POLL_INTERVAL);
        }
        Ok(())
    }
}

/// Interleaved sample count for `duration` of silence.
fn silence_len(duration: Duration, sample_rate: u32, channels: u16) -> usize {
    let frames = (duration.as_secs_f64() * sample_rate as f64).round() as usize;
    frames * channels as usize
}

impl Drop for CpalSink {
    fn drop(&mut self) {
        tracing::debug!(device = %self.device_name, "audio output closed");
    }
}
