//! Tone/silence segments derived from a Morse string.
//!
//! Segments carry unit multiples only; durations come from [`Timing`] at
//! playback, so a plan can never disagree with the configured ratios.

use std::time::Duration;

use crate::timing::{Element, Timing, CHAR_GAP_UNITS, ELEMENT_GAP_UNITS, WORD_GAP_UNITS};

/// Spaces in a run at or above this length mark a word boundary.
const WORD_RUN: usize = 3;

/// One audible burst or one pause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneSegment {
    Tone { units: u32, frequency_hz: f64 },
    Silence { units: u32 },
}

impl ToneSegment {
    #[inline]
    pub fn units(&self) -> u32 {
        match *self {
            ToneSegment::Tone { units, .. } | ToneSegment::Silence { units } => units,
        }
    }

    #[inline]
    pub fn is_audible(&self) -> bool {
        matches!(self, ToneSegment::Tone { .. })
    }

    #[inline]
    pub fn duration(&self, timing: &Timing) -> Duration {
        timing.units(self.units())
    }
}

/// Walk a Morse string and produce its segments.
///
/// - `.` / `-`: tone of 1 / 3 units
/// - between two tones: 1 unit, or 3 after a 1–2 space run, or 7 after a
///   run of 3 or more spaces; the largest boundary wins and replaces the
///   element gap
/// - any other character adds 1 silent unit to the next pause
///
/// Space runs before the first tone or after the last one are dropped;
/// stray characters there still become silence of 1 unit each.
pub fn plan_segments(morse: &str, frequency_hz: f64) -> Vec<ToneSegment> {
    let mut segments = Vec::with_capacity(morse.len() * 2);
    let mut chars = morse.chars().peekable();

    let mut started = false;
    let mut boundary = 0u32;
    let mut extra = 0u32;

    while let Some(c) = chars.next() {
        if let Some(element) = Element::from_char(c) {
            if started {
                segments.push(ToneSegment::Silence {
                    units: boundary.max(ELEMENT_GAP_UNITS) + extra,
                });
            } else if extra > 0 {
                segments.push(ToneSegment::Silence { units: extra });
            }
            segments.push(ToneSegment::Tone {
                units: element.units(),
                frequency_hz,
            });
            started = true;
            boundary = 0;
            extra = 0;
        } else if c == ' ' {
            let mut run = 1;
            while chars.next_if_eq(&' ').is_some() {
                run += 1;
            }
            let gap = if run >= WORD_RUN {
                WORD_GAP_UNITS
            } else {
                CHAR_GAP_UNITS
            };
            boundary = boundary.max(gap);
        } else {
            extra += 1;
        }
    }

    if extra > 0 {
        segments.push(ToneSegment::Silence { units: extra });
    }

    segments
}

/// Sum of segment lengths in units.
pub fn total_units(segments: &[ToneSegment]) -> u64 {
    segments.iter().map(|s| s.units() as u64).sum()
}

/// Sum of segment durations.
pub fn total_duration(segments: &[ToneSegment], timing: &Timing) -> Duration {
    segments.iter().map(|s| s.duration(timing)).sum()
}
