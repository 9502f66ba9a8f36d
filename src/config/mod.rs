//! Module: config
//!
//! Purpose: Audio and timing configuration for the player.
//!
//! Architecture:
//! - `AudioConfig`: tone and device parameters, validated once
//! - `AppConfig`: symbol table variant + audio section, as stored on disk
//! - `file`: TOML loading with schema version check
//!
//! Configuration is immutable after startup and passed explicitly to the
//! codec and the sequencer; there is no global instance.

use serde::{Deserialize, Serialize};

use crate::error::{MorseError, Result};
use crate::table::INTERNATIONAL_NAME;
use crate::timing::Timing;

pub mod file;

pub use file::{LoadOutcome, CURRENT_SCHEMA_VERSION};

/// Default tone frequency in Hz.
pub const DEFAULT_FREQUENCY_HZ: f64 = 600.0;
/// Default unit duration in milliseconds.
pub const DEFAULT_UNIT_MS: f64 = 100.0;
/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
/// Mono.
pub const DEFAULT_CHANNELS: u16 = 1;
/// Signed 16-bit.
pub const DEFAULT_BIT_DEPTH: u16 = 16;

/// Channel counts the PCM path supports.
pub const SUPPORTED_CHANNELS: &[u16] = &[1, 2];
/// Signed integer sample widths the PCM path supports.
pub const SUPPORTED_BIT_DEPTHS: &[u16] = &[8, 16, 32];

/// Tone and output parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    /// Tone frequency in Hz.
    #[serde(alias = "frequency")]
    pub frequency_hz: f64,
    /// Length of one Morse unit in milliseconds.
    #[serde(alias = "unit_duration_ms", alias = "unitDurationMs")]
    pub unit_ms: f64,
    /// Output sample rate in Hz.
    #[serde(alias = "sampleRate")]
    pub sample_rate: u32,
    /// Interleaved channel count.
    pub channels: u16,
    /// Signed sample width in bits.
    #[serde(alias = "bitDepth")]
    pub bit_depth: u16,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            unit_ms: DEFAULT_UNIT_MS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: DEFAULT_CHANNELS,
            bit_depth: DEFAULT_BIT_DEPTH,
        }
    }
}

impl AudioConfig {
    /// Check every parameter before any audio code sees it.
    pub fn validate(&self) -> Result<()> {
        validate_frequency(self.frequency_hz)?;
        // Unit bounds live with the timing type.
        Timing::from_unit_ms(self.unit_ms)?;

        if self.sample_rate == 0 {
            return Err(MorseError::configuration("sample rate must be positive"));
        }
        if !SUPPORTED_CHANNELS.contains(&self.channels) {
            return Err(MorseError::configuration(format!(
                "unsupported channel count {}, expected one of {:?}",
                self.channels, SUPPORTED_CHANNELS
            )));
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&self.bit_depth) {
            return Err(MorseError::configuration(format!(
                "unsupported bit depth {}, expected one of {:?}",
                self.bit_depth, SUPPORTED_BIT_DEPTHS
            )));
        }
        let nyquist = self.sample_rate as f64 / 2.0;
        if self.frequency_hz >= nyquist {
            return Err(MorseError::configuration(format!(
                "frequency {} Hz is not below the Nyquist limit {} Hz",
                self.frequency_hz, nyquist
            )));
        }
        Ok(())
    }

    /// Timing derived from the unit length.
    pub fn timing(&self) -> Result<Timing> {
        Timing::from_unit_ms(self.unit_ms)
    }

    /// Copy with optional frequency / unit overrides, validated.
    pub fn with_overrides(&self, frequency_hz: Option<f64>, unit_ms: Option<f64>) -> Result<Self> {
        let mut config = *self;
        if let Some(f) = frequency_hz {
            config.frequency_hz = f;
        }
        if let Some(u) = unit_ms {
            config.unit_ms = u;
        }
        config.validate()?;
        Ok(config)
    }
}

fn validate_frequency(frequency_hz: f64) -> Result<()> {
    if !frequency_hz.is_finite() {
        return Err(MorseError::type_mismatch(format!(
            "frequency must be a finite number, got {frequency_hz}"
        )));
    }
    if frequency_hz <= 0.0 {
        return Err(MorseError::configuration(format!(
            "frequency must be positive, got {frequency_hz} Hz"
        )));
    }
    Ok(())
}

/// Complete application configuration, as read from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// File format version.
    pub schema_version: u32,
    /// Symbol table variant name.
    pub variant: String,
    pub audio: AudioConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            variant: INTERNATIONAL_NAME.to_string(),
            audio: AudioConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.variant.trim().is_empty() {
            return Err(MorseError::configuration("variant name cannot be empty"));
        }
        self.audio.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults_are_valid() {
        let config = AudioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frequency_hz, 600.0);
        assert_eq!(config.unit_ms, 100.0);
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.channels, 1);
        assert_eq!(config.bit_depth, 16);
    }

    #[test]
    fn test_rejects_non_positive() {
        let base = AudioConfig::default();
        for config in [
            AudioConfig { frequency_hz: 0.0, ..base },
            AudioConfig { frequency_hz: -440.0, ..base },
            AudioConfig { unit_ms: 0.0, ..base },
            AudioConfig { sample_rate: 0, ..base },
        ] {
            assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Configuration);
        }
    }

    #[test]
    fn test_rejects_non_finite_as_type_mismatch() {
        let base = AudioConfig::default();
        let config = AudioConfig { frequency_hz: f64::INFINITY, ..base };
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::TypeMismatch);
        let config = AudioConfig { unit_ms: f64::NAN, ..base };
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_rejects_unsupported_layout() {
        let base = AudioConfig::default();
        assert!(AudioConfig { channels: 0, ..base }.validate().is_err());
        assert!(AudioConfig { channels: 6, ..base }.validate().is_err());
        assert!(AudioConfig { bit_depth: 24, ..base }.validate().is_err());
        assert!(AudioConfig { channels: 2, bit_depth: 8, ..base }.validate().is_ok());
    }

    #[test]
    fn test_rejects_frequency_above_nyquist() {
        let config = AudioConfig {
            frequency_hz: 5000.0,
            sample_rate: 8000,
            ..AudioConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = AudioConfig::default()
            .with_overrides(Some(800.0), Some(60.0))
            .unwrap();
        assert_eq!(config.frequency_hz, 800.0);
        assert_eq!(config.unit_ms, 60.0);

        let config = AudioConfig::default().with_overrides(None, None).unwrap();
        assert_eq!(config, AudioConfig::default());

        assert!(AudioConfig::default().with_overrides(Some(-1.0), None).is_err());
    }
}
