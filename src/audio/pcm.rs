//! Interleaved signed-integer sample buffers.

use std::time::Duration;

/// Fraction of full scale used for tones (6 dB headroom).
pub const HEADROOM: f64 = 0.5;

/// Largest positive sample value for a signed width.
#[inline]
pub fn full_scale(bit_depth: u16) -> i32 {
    ((1i64 << (bit_depth.clamp(2, 32) - 1)) - 1) as i32
}

/// PCM samples plus the layout needed to interpret them.
///
/// Samples are stored widened to `i32` and interleaved by channel; every
/// value fits the configured bit depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    samples: Vec<i32>,
    channels: u16,
    bit_depth: u16,
    sample_rate: u32,
}

impl PcmBuffer {
    pub(crate) fn from_parts(samples: Vec<i32>, channels: u16, bit_depth: u16, sample_rate: u32) -> Self {
        debug_assert!(channels > 0 && samples.len() % channels as usize == 0);
        Self {
            samples,
            channels,
            bit_depth,
            sample_rate,
        }
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn bit_depth(&self) -> u16 {
        self.bit_depth
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback length at the buffer's sample rate.
    pub fn duration(&self) -> Duration {
        let nanos = self.frames() as u128 * 1_000_000_000 / self.sample_rate.max(1) as u128;
        Duration::from_nanos(nanos as u64)
    }

    /// Peak absolute sample value.
    pub fn peak(&self) -> i32 {
        self.samples.iter().map(|s| s.saturating_abs()).max().unwrap_or(0)
    }

    /// Samples scaled to `[-1.0, 1.0]` for float output devices.
    pub fn to_f32(&self) -> Vec<f32> {
        let scale = full_scale(self.bit_depth) as f32;
        self.samples.iter().map(|&s| s as f32 / scale).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scale() {
        assert_eq!(full_scale(8), 127);
        assert_eq!(full_scale(16), 32_767);
        assert_eq!(full_scale(32), i32::MAX);
    }

    #[test]
    fn test_stereo_layout() {
        let buf = PcmBuffer::from_parts(vec![0; 200], 2, 16, 8000);
        assert_eq!(buf.samples().len(), 200);
        assert_eq!(buf.frames(), 100);
        assert_eq!(buf.peak(), 0);
        assert_eq!(buf.duration(), Duration::from_micros(12_500));
    }

    #[test]
    fn test_to_f32_range() {
        let buf = PcmBuffer::from_parts(vec![32_767, -32_767, 0], 1, 16, 8000);
        assert_eq!(buf.to_f32(), vec![1.0, -1.0, 0.0]);
    }
}
