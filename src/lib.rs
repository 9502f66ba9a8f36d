//! # RustMorsePlayer
//!
//! Text ↔ International Morse code conversion and audible playback with
//! standard timing ratios.
//!
//! ## Architecture
//!
//! ```text
//! text ──▶ SymbolCodec::encode ──▶ morse ──▶ ToneSequencer::play ──▶ AudioSink
//! morse ─▶ SymbolCodec::decode ──▶ text
//! ```
//!
//! - [`SymbolCodec`] maps characters to dot/dash symbols through an
//!   immutable [`SymbolTable`] looked up by name in a [`TableRegistry`]
//! - [`ToneSequencer`] turns a Morse string into tone and silence segments
//!   whose lengths are whole multiples of one [`Timing`] unit
//! - Configuration is an immutable [`AppConfig`] passed in explicitly
//!
//! Every fallible operation returns [`MorseError`], one of four kinds:
//! type mismatch, input, audio, configuration.

pub mod audio;
pub mod codec;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod registry;
pub mod table;
pub mod timing;

pub use audio::{AudioSink, NullSink, PcmBuffer, Progress, ToneSegment, ToneSequencer};
pub use codec::SymbolCodec;
pub use config::{AppConfig, AudioConfig};
pub use error::{ErrorKind, MorseError, Result};
pub use registry::TableRegistry;
pub use table::SymbolTable;
pub use timing::{Element, Timing};
