//! Fixed-capacity display history.
//!
//! A rolling window of the most recent samples, stored as a ring buffer so
//! that pushing a sample never shifts or reallocates.

use crate::error::ConfigError;
use crate::reconstruction::TickFrame;

/// Ring buffer of the most recent `capacity` samples.
///
/// The buffer starts full of zeros, so a plot of it has a flat lead-in until
/// enough ticks have been pushed.
///
/// # Examples
///
/// ```
/// use holdramp::History;
///
/// let mut history = History::new(3).unwrap();
/// history.push(1.0);
/// history.push(2.0);
/// assert_eq!(history.to_vec(), vec![0.0, 1.0, 2.0]);
///
/// history.push(3.0);
/// history.push(4.0);
/// assert_eq!(history.to_vec(), vec![2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    buffer: Vec<f64>,
    /// Slot that the next push overwrites; also the oldest sample.
    write_pos: usize,
}

impl History {
    /// Creates a history holding `capacity` samples, all zero.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroHistoryCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        Ok(Self {
            buffer: vec![0.0; capacity],
            write_pos: 0,
        })
    }

    /// Appends a sample, dropping the oldest one.
    pub fn push(&mut self, value: f64) {
        self.buffer[self.write_pos] = value;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Most recently pushed sample (0.0 before any push).
    pub fn latest(&self) -> f64 {
        let len = self.buffer.len();
        self.buffer[(self.write_pos + len - 1) % len]
    }

    /// Number of samples held; always equal to the capacity.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false: a history is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + '_ {
        let (newer, older) = self.buffer.split_at(self.write_pos);
        older.iter().chain(newer.iter()).copied()
    }

    /// Samples from oldest to newest, copied into a new vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Smallest and largest sample.
    pub fn range(&self) -> (f64, f64) {
        self.iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Resets every sample to zero.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}

/// The three traces of a reconstruction run, kept for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameHistory {
    pub signal: History,
    pub held: History,
    pub smoothed: History,
}

impl FrameHistory {
    /// Creates three zero-filled histories of the same capacity.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            signal: History::new(capacity)?,
            held: History::new(capacity)?,
            smoothed: History::new(capacity)?,
        })
    }

    /// Records one tick of every trace.
    pub fn push(&mut self, frame: &TickFrame) {
        self.signal.push(frame.signal);
        self.held.push(frame.held);
        self.smoothed.push(frame.smoothed);
    }

    /// Smallest and largest sample over all three traces.
    pub fn range(&self) -> (f64, f64) {
        [&self.signal, &self.held, &self.smoothed]
            .iter()
            .map(|history| history.range())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (l, h)| {
                (lo.min(l), hi.max(h))
            })
    }

    pub fn capacity(&self) -> usize {
        self.signal.capacity()
    }
}
