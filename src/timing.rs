//! Morse timing derived from a single unit.
//!
//! Every duration is an integer multiple of the unit. Only the unit is
//! stored, so the ratios cannot drift apart:
//!
//! | Element         | Units |
//! |-----------------|-------|
//! | dot             | 1     |
//! | dash            | 3     |
//! | element gap     | 1     |
//! | character gap   | 3     |
//! | word gap        | 7     |

use std::time::Duration;

use crate::error::{MorseError, Result};

/// Dot length in units.
pub const DOT_UNITS: u32 = 1;
/// Dash length in units.
pub const DASH_UNITS: u32 = 3;
/// Silence between elements of one character.
pub const ELEMENT_GAP_UNITS: u32 = 1;
/// Silence between characters.
pub const CHAR_GAP_UNITS: u32 = 3;
/// Silence between words.
pub const WORD_GAP_UNITS: u32 = 7;

/// Longest accepted unit (one minute).
pub const MAX_UNIT_MS: f64 = 60_000.0;

/// Keyed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Dot,
    Dash,
}

impl Element {
    /// Parse a symbol character.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Element::Dot),
            '-' => Some(Element::Dash),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Element::Dot => '.',
            Element::Dash => '-',
        }
    }

    /// Key-down length in units.
    #[inline]
    pub fn units(self) -> u32 {
        match self {
            Element::Dot => DOT_UNITS,
            Element::Dash => DASH_UNITS,
        }
    }
}

/// Unit-based timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    unit: Duration,
}

impl Timing {
    /// Create timing from a unit length in milliseconds.
    pub fn from_unit_ms(unit_ms: f64) -> Result<Self> {
        if !unit_ms.is_finite() {
            return Err(MorseError::type_mismatch(format!(
                "unit duration must be a finite number, got {unit_ms}"
            )));
        }
        if unit_ms <= 0.0 {
            return Err(MorseError::configuration(format!(
                "unit duration must be positive, got {unit_ms} ms"
            )));
        }
        if unit_ms > MAX_UNIT_MS {
            return Err(MorseError::configuration(format!(
                "unit duration must not exceed {MAX_UNIT_MS} ms, got {unit_ms} ms"
            )));
        }
        let nanos = (unit_ms * 1_000_000.0).round() as u64;
        if nanos == 0 {
            return Err(MorseError::configuration(format!(
                "unit duration {unit_ms} ms is below timer resolution"
            )));
        }
        Ok(Self {
            unit: Duration::from_nanos(nanos),
        })
    }

    /// Create timing for a speed in words per minute.
    ///
    /// PARIS timing: unit = 1.2 / WPM seconds
    pub fn from_wpm(wpm: u32) -> Result<Self> {
        if wpm == 0 {
            return Err(MorseError::configuration("speed must be at least 1 WPM"));
        }
        let micros = 1_200_000 / wpm as u64;
        if micros == 0 {
            return Err(MorseError::configuration(format!(
                "speed {wpm} WPM is below timer resolution"
            )));
        }
        Ok(Self {
            unit: Duration::from_micros(micros),
        })
    }

    #[inline]
    pub fn unit(&self) -> Duration {
        self.unit
    }

    /// Unit length in milliseconds.
    #[inline]
    pub fn unit_ms(&self) -> f64 {
        self.unit.as_secs_f64() * 1000.0
    }

    /// Duration of `n` units.
    #[inline]
    pub fn units(&self, n: u32) -> Duration {
        self.unit * n
    }

    #[inline]
    pub fn dot(&self) -> Duration {
        self.units(DOT_UNITS)
    }

    #[inline]
    pub fn dash(&self) -> Duration {
        self.units(DASH_UNITS)
    }

    #[inline]
    pub fn element_gap(&self) -> Duration {
        self.units(ELEMENT_GAP_UNITS)
    }

    #[inline]
    pub fn char_gap(&self) -> Duration {
        self.units(CHAR_GAP_UNITS)
    }

    #[inline]
    pub fn word_gap(&self) -> Duration {
        self.units(WORD_GAP_UNITS)
    }
}
