//! Morse string → audible tone sequence.
//!
//! A sequencer owns its sink exclusively; `play` is blocking and calls are
//! serialized by `&mut self`. Playback is lenient: any character other than
//! `.`, `-` and space becomes one extra unit of silence.

use std::collections::HashMap;
use std::time::Instant;

use super::pcm::PcmBuffer;
use super::segment::{plan_segments, total_units, ToneSegment};
use super::sink::AudioSink;
use super::tone::ToneSynth;
use crate::config::AudioConfig;
use crate::error::{MorseError, Result};
use crate::timing::Timing;

/// Playback position reported after each segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed_segments: usize,
    pub total_segments: usize,
    pub elapsed_units: u64,
    pub total_units: u64,
}

impl Progress {
    /// Completed share of the sequence, by time.
    pub fn fraction(&self) -> f64 {
        if self.total_units == 0 {
            return 1.0;
        }
        self.elapsed_units as f64 / self.total_units as f64
    }

    pub fn is_done(&self) -> bool {
        self.completed_segments == self.total_segments
    }
}

/// Plays Morse strings through an [`AudioSink`].
pub struct ToneSequencer<S: AudioSink> {
    config: AudioConfig,
    timing: Timing,
    synth: ToneSynth,
    sink: S,
}

impl<S: AudioSink> ToneSequencer<S> {
    /// Build a sequencer from a complete configuration.
    ///
    /// # Errors
    /// Type mismatch or configuration error if `config` is invalid.
    pub fn new(config: AudioConfig, sink: S) -> Result<Self> {
        let timing = config.timing()?;
        let synth = ToneSynth::new(&config)?;

        tracing::debug!(
            sink = sink.name(),
            frequency_hz = config.frequency_hz,
            unit_ms = config.unit_ms,
            sample_rate = config.sample_rate,
            "tone sequencer ready"
        );

        Ok(Self {
            config,
            timing,
            synth,
            sink,
        })
    }

    /// Build with per-instance frequency / unit overrides on top of `config`.
    pub fn with_overrides(
        config: &AudioConfig,
        frequency_hz: Option<f64>,
        unit_ms: Option<f64>,
        sink: S,
    ) -> Result<Self> {
        let config = config.with_overrides(frequency_hz, unit_ms)?;
        Self::new(config, sink)
    }

    /// Validate overrides first, then open the sink with the final config.
    ///
    /// The opener is never called when validation fails, so a bad parameter
    /// cannot touch the audio device.
    pub fn open<F>(
        config: &AudioConfig,
        frequency_hz: Option<f64>,
        unit_ms: Option<f64>,
        open_sink: F,
    ) -> Result<Self>
    where
        F: FnOnce(&AudioConfig) -> Result<S>,
    {
        let config = config.with_overrides(frequency_hz, unit_ms)?;
        let sink = open_sink(&config)?;
        Self::new(config, sink)
    }

    pub fn config(&self) -> &AudioConfig {
        &self.config
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Release the sequencer, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Sine tone at the configured frequency and layout.
    pub fn synthesize_tone(&self, duration_s: f64) -> Result<PcmBuffer> {
        self.synth.synthesize_tone(duration_s)
    }

    /// Segments `morse` would play, without playing them.
    ///
    /// # Errors
    /// Input error if `morse` is empty.
    pub fn plan(&self, morse: &str) -> Result<Vec<ToneSegment>> {
        if morse.is_empty() {
            return Err(MorseError::input("morse_string cannot be empty"));
        }
        Ok(plan_segments(morse, self.config.frequency_hz))
    }

    /// Play `morse`, blocking until the last tone has been heard.
    pub fn play(&mut self, morse: &str) -> Result<()> {
        self.play_with_progress(morse, |_| {})
    }

    /// Play `morse`, calling `on_progress` after every segment.
    ///
    /// The first failing segment aborts the rest; nothing is retried.
    pub fn play_with_progress<F>(&mut self, morse: &str, mut on_progress: F) -> Result<()>
    where
        F: FnMut(Progress),
    {
        let segments = self.plan(morse)?;
        let total = total_units(&segments);
        tracing::debug!(segments = segments.len(), units = total, "playing");

        // Tones of one length are identical; synthesize each length once.
        let mut tones: HashMap<u32, PcmBuffer> = HashMap::new();
        let mut progress = Progress {
            completed_segments: 0,
            total_segments: segments.len(),
            elapsed_units: 0,
            total_units: total,
        };
        let started = Instant::now();

        for segment in &segments {
            match *segment {
                ToneSegment::Tone { units, .. } => {
                    if !tones.contains_key(&units) {
                        let duration = self.timing.units(units).as_secs_f64();
                        let buffer = self.synth.synthesize_tone(duration)?;
                        tones.insert(units, buffer);
                    }
                    if let Some(buffer) = tones.get(&units) {
                        self.sink.write_tone(buffer)?;
                    }
                }
                ToneSegment::Silence { .. } => {
                    self.sink.write_silence(segment.duration(&self.timing))?;
                }
            }

            progress.completed_segments += 1;
            progress.elapsed_units += segment.units() as u64;
            on_progress(progress);
        }

        self.sink.finish()?;
        tracing::info!(
            units = total,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "playback finished"
        );
        Ok(())
    }
}
