//! White noise generator implementation.

use crate::Signal;
use crate::error::{ConfigError, non_negative};
use rand::Rng;

/// Uniform white noise in `[-amplitude, amplitude]`.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    amplitude: f64,
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a white noise generator with the default ThreadRng.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdramp::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new(0.1).unwrap();
    /// assert!(noise.next_sample().abs() <= 0.1);
    /// ```
    pub fn new(amplitude: f64) -> Result<Self, ConfigError> {
        Self::with_rng(amplitude, rand::thread_rng())
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a white noise generator with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdramp::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(1.0, rng).unwrap();
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(amplitude: f64, rng: R) -> Result<Self, ConfigError> {
        let amplitude = non_negative("noise amplitude", amplitude)?;
        Ok(Self { amplitude, rng })
    }

    /// Peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}
