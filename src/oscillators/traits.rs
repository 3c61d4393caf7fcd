//! Core trait definitions for oscillators.

use crate::Signal;

/// Common interface for periodic sources driven one tick at a time.
///
/// Frequencies are expressed as the phase advance per tick, in radians, since
/// a reconstruction pipeline has no notion of wall-clock time.
pub trait Oscillator: Signal {
    /// Sets the phase advance per tick, in radians.
    fn set_angular_step(&mut self, step: f64);

    /// Gets the phase advance per tick, in radians.
    fn angular_step(&self) -> f64;

    /// Resets the oscillator to its initial phase.
    fn reset(&mut self);
}
