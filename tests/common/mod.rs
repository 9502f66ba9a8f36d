//! Shared test doubles

use std::time::Duration;

use rust_morse_player::audio::{AudioSink, PcmBuffer};
use rust_morse_player::error::{MorseError, Result};

/// What a sink was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Emitted {
    Tone(PcmBuffer),
    Silence(Duration),
}

/// Sink that records every call and plays nothing
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub emitted: Vec<Emitted>,
    pub finished: usize,
    /// Fail the n-th write (0-based) with an audio error
    pub fail_at: Option<usize>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    pub fn tones(&self) -> Vec<&PcmBuffer> {
        self.emitted
            .iter()
            .filter_map(|e| match e {
                Emitted::Tone(b) => Some(b),
                Emitted::Silence(_) => None,
            })
            .collect()
    }

    pub fn silences(&self) -> Vec<Duration> {
        self.emitted
            .iter()
            .filter_map(|e| match e {
                Emitted::Silence(d) => Some(*d),
                Emitted::Tone(_) => None,
            })
            .collect()
    }

    /// Sum of everything emitted.
    pub fn total_duration(&self) -> Duration {
        self.emitted
            .iter()
            .map(|e| match e {
                Emitted::Tone(b) => b.duration(),
                Emitted::Silence(d) => *d,
            })
            .sum()
    }

    fn check(&self) -> Result<()> {
        if self.fail_at == Some(self.emitted.len()) {
            return Err(MorseError::audio("device lost"));
        }
        Ok(())
    }
}

impl AudioSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    fn write_tone(&mut self, buffer: &PcmBuffer) -> Result<()> {
        self.check()?;
        self.emitted.push(Emitted::Tone(buffer.clone()));
        Ok(())
    }

    fn write_silence(&mut self, duration: Duration) -> Result<()> {
        self.check()?;
        self.emitted.push(Emitted::Silence(duration));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished += 1;
        Ok(())
    }
}
