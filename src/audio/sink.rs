//! Audio output sinks.
//!
//! A sink owns one output session. Calls are blocking: `write_tone` and
//! `write_silence` return once the audio has been played (or scheduled far
//! enough that the remaining time is accounted for by [`AudioSink::finish`]).

use std::thread;
use std::time::Duration;

use super::pcm::PcmBuffer;
use crate::config::AudioConfig;
use crate::error::Result;

/// Destination for synthesized segments.
pub trait AudioSink {
    /// Backend name for logs.
    fn name(&self) -> &str;

    /// Play a tone buffer.
    fn write_tone(&mut self, buffer: &PcmBuffer) -> Result<()>;

    /// Play silence of the given length.
    fn write_silence(&mut self, duration: Duration) -> Result<()>;

    /// Block until everything written so far has been heard.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn write_tone(&mut self, buffer: &PcmBuffer) -> Result<()> {
        (**self).write_tone(buffer)
    }

    fn write_silence(&mut self, duration: Duration) -> Result<()> {
        (**self).write_silence(duration)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Sink without a device: every segment becomes a delay of its length.
///
/// Used when no audio backend is compiled in, and (with
/// [`NullSink::instant`]) wherever timing should not cost wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink {
    instant: bool,
}

impl NullSink {
    /// Sleeps for each segment so playback keeps its real length.
    pub fn new() -> Self {
        Self { instant: false }
    }

    /// Returns immediately.
    pub fn instant() -> Self {
        Self { instant: true }
    }

    fn wait(&self, duration: Duration) {
        if !self.instant {
            thread::sleep(duration);
        }
    }
}

impl AudioSink for NullSink {
    fn name(&self) -> &str {
        "null"
    }

    fn write_tone(&mut self, buffer: &PcmBuffer) -> Result<()> {
        self.wait(buffer.duration());
        Ok(())
    }

    fn write_silence(&mut self, duration: Duration) -> Result<()> {
        self.wait(duration);
        Ok(())
    }
}

/// Open the best available output for `config`.
///
/// With the `audio-cpal` feature this is the default output device; device
/// failures are returned, not papered over. Without it, a [`NullSink`].
pub fn open_default_sink(config: &AudioConfig) -> Result<Box<dyn AudioSink>> {
    #[cfg(feature = "audio-cpal")]
    {
        let sink = super::cpal_sink::CpalSink::open(config)?;
        Ok(Box::new(sink))
    }

    #[cfg(not(feature = "audio-cpal"))]
    {
        let _ = config;
        tracing::warn!("built without an audio backend, playback will be silent");
        Ok(Box::new(NullSink::new()))
    }
}
