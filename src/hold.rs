//! Zero-order hold: a sampler that only refreshes every N ticks.

use crate::error::ConfigError;
use crate::signals::Signal;
use std::num::NonZeroUsize;
use tracing::{debug, trace};

/// Samples its source on every tick but only publishes a fresh reading every
/// `interval` ticks, repeating the last published reading in between.
///
/// The source is advanced on every tick whether or not the reading is
/// latched, so the held signal stays aligned with the source's timeline. The
/// first tick always latches.
///
/// # Examples
///
/// ```
/// use holdramp::{SampleAndHold, Signal};
///
/// let mut ramp = 0.0;
/// let source = holdramp::combinators::FromFn(move || {
///     ramp += 1.0;
///     ramp
/// });
/// let mut held = SampleAndHold::new(source, 3).unwrap();
///
/// let mut out = [0.0; 7];
/// held.process(&mut out);
/// assert_eq!(out, [1.0, 1.0, 1.0, 4.0, 4.0, 4.0, 7.0]);
/// ```
pub struct SampleAndHold<S: Signal> {
    source: S,
    interval: NonZeroUsize,
    /// Position inside the current hold interval.
    phase: usize,
    held: f64,
    /// Raw source value read on the most recent tick.
    last_input: f64,
    latched: bool,
}

impl<S: Signal> SampleAndHold<S> {
    /// Creates a new sample-and-hold stage.
    ///
    /// # Arguments
    ///
    /// * `source` - Signal read on every tick
    /// * `interval` - Number of ticks each latched reading is held for
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroHoldInterval`] when `interval` is zero.
    pub fn new(source: S, interval: usize) -> Result<Self, ConfigError> {
        let interval = NonZeroUsize::new(interval).ok_or(ConfigError::ZeroHoldInterval)?;
        debug!(interval = interval.get(), "creating sample-and-hold");
        Ok(Self {
            source,
            interval,
            phase: 0,
            held: 0.0,
            last_input: 0.0,
            latched: false,
        })
    }

    /// Ticks each reading is held for.
    pub fn interval(&self) -> usize {
        self.interval.get()
    }

    /// Value currently held (0.0 before the first tick).
    pub fn held(&self) -> f64 {
        self.held
    }

    /// Raw source value read on the most recent tick.
    pub fn last_input(&self) -> f64 {
        self.last_input
    }

    /// Whether the most recent tick published a fresh reading.
    pub fn latched(&self) -> bool {
        self.latched
    }

    /// Restarts the hold cycle so the next tick latches. The source is left
    /// as it is.
    pub fn reset(&mut self) {
        self.phase = 0;
        self.held = 0.0;
        self.last_input = 0.0;
        self.latched = false;
    }

    /// Gives back the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: Signal> Signal for SampleAndHold<S> {
    fn next_sample(&mut self) -> f64 {
        let input = self.source.next_sample();
        self.last_input = input;
        self.latched = self.phase == 0;
        if self.latched {
            trace!(value = input, "latching new reading");
            self.held = input;
        }
        self.phase = (self.phase + 1) % self.interval.get();
        self.held
    }
}
