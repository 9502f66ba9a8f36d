//! Lock-free sample ring buffer
//!
//! SPSC (single producer, single consumer) between the sequencer thread and
//! the output device callback. Uses atomic indices; samples are stored as
//! `f32` bit patterns so each slot is a plain atomic.

use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

/// Sample ring with power-of-two capacity
pub struct SampleRing {
    buffer: Box<[AtomicU32]>,
    mask: usize,
    write_idx: AtomicUsize,
    read_idx: AtomicUsize,
}

impl SampleRing {
    /// Create new empty ring holding at least `capacity` samples
    ///
    /// Capacity is rounded up to a power of 2 for cheap index masking.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2).next_power_of_two();
        let buffer = (0..capacity).map(|_| AtomicU32::new(0)).collect();

        Self {
            buffer,
            mask: capacity - 1,
            write_idx: AtomicUsize::new(0),
            read_idx: AtomicUsize::new(0),
        }
    }

    /// Push a sample (producer side)
    ///
    /// Returns false if the ring is full; the sample is not written.
    #[inline]
    pub fn push(&self, sample: f32) -> bool {
        let write = self.write_idx.load(Ordering::Relaxed);
        let read = self.read_idx.load(Ordering::Acquire);

        if write.wrapping_sub(read) > self.mask {
            return false; // Full
        }

        self.buffer[write & self.mask].store(sample.to_bits(), Ordering::Relaxed);
        self.write_idx.store(write.wrapping_add(1), Ordering::Release);
        true
    }

    /// Pop a sample (consumer side)
    ///
    /// Returns None if buffer is empty.
    #[inline]
    pub fn pop(&self) -> Option<f32> {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);

        if write == read {
            return None; // Empty
        }

        let sample = f32::from_bits(self.buffer[read & self.mask].load(Ordering::Relaxed));
        self.read_idx.store(read.wrapping_add(1), Ordering::Release);
        Some(sample)
    }

    /// Read multiple samples into a slice (consumer side)
    ///
    /// Fills as many samples as available, zeros the rest.
    /// Returns number of samples actually read.
    #[inline]
    pub fn read_into(&self, output: &mut [f32]) -> usize {
        let mut count = 0;

        for sample in output.iter_mut() {
            match self.pop() {
                Some(s) => {
                    *sample = s;
                    count += 1;
                }
                None => {
                    *sample = 0.0; // Underrun: fill with silence
                }
            }
        }

        count
    }

    /// Get number of samples in buffer
    #[inline]
    pub fn len(&self) -> usize {
        let write = self.write_idx.load(Ordering::Acquire);
        let read = self.read_idx.load(Ordering::Acquire);
        write.wrapping_sub(read).min(self.capacity())
    }

    /// Check if buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.mask + 1
    }

    /// Get available space in buffer
    #[inline]
    pub fn available(&self) -> usize {
        self.capacity() - self.len()
    }
}
