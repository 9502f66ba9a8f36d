//! TOML configuration file with schema versioning.
//!
//! # Version History
//!
//! - **v1** (current): `variant` plus an `[audio]` table with
//!   `frequency_hz`, `unit_ms`, `sample_rate`, `channels`, `bit_depth`
//!
//! A missing `schema_version` is read as the current version. Files written
//! by a newer version are refused rather than half-understood.
//!
//! ```toml
//! schema_version = 1
//! variant = "international"
//!
//! [audio]
//! frequency_hz = 700
//! unit_ms = 60
//! ```

use std::path::Path;

use super::AppConfig;
use crate::error::{MorseError, Result};

/// Current configuration file schema version
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file given, built-in defaults
    Defaults,
    /// Parsed from the given file
    Loaded { path: String },
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content).map_err(map_toml_error)?;

        if config.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(MorseError::configuration(format!(
                "config schema version {} is newer than supported version {}",
                config.schema_version, CURRENT_SCHEMA_VERSION
            )));
        }

        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MorseError::configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), variant = %config.variant, "configuration loaded");
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<(Self, LoadOutcome)> {
        match path {
            Some(p) => Ok((
                Self::load(p)?,
                LoadOutcome::Loaded {
                    path: p.display().to_string(),
                },
            )),
            None => Ok((Self::default(), LoadOutcome::Defaults)),
        }
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| MorseError::configuration(format!("cannot serialize config: {e}")))
    }
}

/// Wrong value types are shape errors; everything else is configuration.
fn map_toml_error(e: toml::de::Error) -> MorseError {
    let message = e.message().to_string();
    if message.contains("invalid type") {
        MorseError::type_mismatch(format!("config: {message}"))
    } else {
        MorseError::configuration(format!("config: {message}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_schema_version_constant() {
        assert_eq!(CURRENT_SCHEMA_VERSION, 1);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_audio_section() {
        let config = AppConfig::from_toml_str("[audio]\nfrequency_hz = 700\nunit_ms = 60\n").unwrap();
        assert_eq!(config.audio.frequency_hz, 700.0);
        assert_eq!(config.audio.unit_ms, 60.0);
        assert_eq!(config.audio.sample_rate, 44_100);
    }

    #[test]
    fn test_interface_aliases() {
        let config =
            AppConfig::from_toml_str("[audio]\nfrequency = 500\nunitDurationMs = 80\nsampleRate = 48000\n")
                .unwrap();
        assert_eq!(config.audio.frequency_hz, 500.0);
        assert_eq!(config.audio.unit_ms, 80.0);
        assert_eq!(config.audio.sample_rate, 48_000);
    }

    #[test]
    fn test_wrong_type_is_type_mismatch() {
        let err = AppConfig::from_toml_str("[audio]\nfrequency_hz = \"loud\"\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = AppConfig::from_toml_str("volume = 3\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_newer_schema_rejected() {
        let err = AppConfig::from_toml_str("schema_version = 99\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AppConfig::from_toml_str("[audio]\nunit_ms = -1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AppConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }
}
