//! Sine wave oscillator implementation.

use super::Oscillator;
use crate::Signal;
use crate::error::{ConfigError, non_negative};
use std::f64::consts::TAU;

/// Phase advance per tick used by [`SineOscillator::default`].
pub const DEFAULT_ANGULAR_STEP: f64 = 0.01;

/// A sine wave advancing by a fixed angle every tick.
///
/// Starts at phase zero, so the first sample is always 0.0. Phase continuity
/// is kept across calls to `next_sample()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SineOscillator {
    /// Current phase in radians, kept in [0, TAU)
    phase: f64,
    /// Phase increment per tick in radians
    angular_step: f64,
    amplitude: f64,
}

impl SineOscillator {
    /// Creates a unit-amplitude sine advancing `angular_step` radians per
    /// tick.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdramp::{Signal, SineOscillator};
    ///
    /// let mut osc = SineOscillator::new(std::f64::consts::FRAC_PI_2);
    /// assert_eq!(osc.next_sample(), 0.0);
    /// assert!((osc.next_sample() - 1.0).abs() < 1e-12);
    /// ```
    pub fn new(angular_step: f64) -> Self {
        Self {
            phase: 0.0,
            angular_step,
            amplitude: 1.0,
        }
    }

    /// Creates a sine of `frequency` Hz for a pipeline ticking at
    /// `tick_rate` Hz.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when either rate is negative, or the resulting step is
    /// not finite (a zero tick rate).
    pub fn from_frequency(frequency: f64, tick_rate: f64) -> Result<Self, ConfigError> {
        let frequency = non_negative("frequency", frequency)?;
        let tick_rate = non_negative("tick rate", tick_rate)?;
        let step = non_negative("angular step", TAU * frequency / tick_rate)?;
        Ok(Self::new(step))
    }

    /// Sets the peak amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Ticks per full cycle, or `None` for a stopped oscillator.
    pub fn period_ticks(&self) -> Option<f64> {
        (self.angular_step != 0.0).then(|| TAU / self.angular_step.abs())
    }
}

impl Default for SineOscillator {
    fn default() -> Self {
        Self::new(DEFAULT_ANGULAR_STEP)
    }
}

impl Signal for SineOscillator {
    fn next_sample(&mut self) -> f64 {
        let sample = self.amplitude * self.phase.sin();
        self.phase = (self.phase + self.angular_step).rem_euclid(TAU);
        sample
    }
}

impl Oscillator for SineOscillator {
    fn set_angular_step(&mut self, step: f64) {
        self.angular_step = step;
    }

    fn angular_step(&self) -> f64 {
        self.angular_step
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_default_step() {
        let osc = SineOscillator::default();
        assert_eq!(osc.angular_step(), DEFAULT_ANGULAR_STEP);
        assert_eq!(osc.amplitude(), 1.0);
    }

    #[test]
    fn test_first_sample_is_zero() {
        let mut osc = SineOscillator::default().with_amplitude(3.0);
        assert_eq!(osc.next_sample(), 0.0);
    }

    #[test]
    fn test_sample_range() {
        let mut osc = SineOscillator::default().with_amplitude(2.0);
        for _ in 0..2000 {
            let sample = osc.next_sample();
            assert!((-2.0..=2.0).contains(&sample));
        }
    }

    #[test]
    fn test_matches_unwrapped_sine() {
        let mut osc = SineOscillator::default();
        for n in 0..1000 {
            let expected = (n as f64 * DEFAULT_ANGULAR_STEP).sin();
            assert!((osc.next_sample() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_phase_wrapping() {
        let mut osc = SineOscillator::new(1.0);
        for _ in 0..100_000 {
            osc.next_sample();
        }
        assert!(osc.phase >= 0.0 && osc.phase < TAU);
    }

    #[test]
    fn test_from_frequency() {
        let osc = SineOscillator::from_frequency(1.0, 100.0).unwrap();
        assert!((osc.period_ticks().unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_frequency_rejects_bad_rates() {
        assert!(matches!(
            SineOscillator::from_frequency(-1.0, 100.0),
            Err(ConfigError::NegativeParameter {
                name: "frequency",
                ..
            })
        ));
        assert!(matches!(
            SineOscillator::from_frequency(1.0, 0.0),
            Err(ConfigError::NonFiniteParameter {
                name: "angular step",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_step_is_stopped() {
        let mut osc = SineOscillator::new(0.0);
        assert_eq!(osc.period_ticks(), None);
        assert_eq!(osc.next_sample(), osc.next_sample());
    }

    #[test]
    fn test_set_angular_step_keeps_phase() {
        let mut osc = SineOscillator::new(FRAC_PI_2);
        osc.next_sample();
        osc.set_angular_step(PI);
        assert_eq!(osc.angular_step(), PI);
        // Phase is already at pi/2; the new step applies from here on.
        assert!((osc.next_sample() - 1.0).abs() < 1e-12);
        assert!((osc.next_sample() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut osc = SineOscillator::default();
        for _ in 0..100 {
            osc.next_sample();
        }
        osc.reset();
        assert_eq!(osc.next_sample(), 0.0);
    }
}
