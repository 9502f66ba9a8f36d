//! Tone synthesis and playback.
//!
//! Pipeline for one `play` call:
//! - [`segment`] turns the Morse string into unit-counted tones and pauses
//! - [`tone`] renders each tone length to PCM
//! - [`sink`] receives tones and pauses; the cpal backend feeds the device
//!   callback through the lock-free [`buffer::SampleRing`]

pub mod buffer;
pub mod pcm;
pub mod segment;
pub mod sequencer;
pub mod sink;
pub mod tone;

#[cfg(feature = "audio-cpal")]
pub mod cpal_sink;

pub use buffer::SampleRing;
pub use pcm::PcmBuffer;
pub use segment::{plan_segments, total_duration, total_units, ToneSegment};
pub use sequencer::{Progress, ToneSequencer};
pub use sink::{open_default_sink, AudioSink, NullSink};
pub use tone::ToneSynth;

#[cfg(feature = "audio-cpal")]
pub use cpal_sink::CpalSink;
