//! Bounded random walk.

use crate::Signal;
use crate::error::{ConfigError, non_negative};
use rand::Rng;

/// A random walk that moves by at most `max_step` per tick and reflects off
/// `[-bound, bound]`.
///
/// Useful as a stand-in for readings whose shape is not known in advance,
/// such as a load or usage figure.
pub struct RandomWalk<R: Rng = rand::rngs::ThreadRng> {
    value: f64,
    max_step: f64,
    bound: f64,
    rng: R,
}

impl RandomWalk<rand::rngs::ThreadRng> {
    /// Creates a random walk starting at zero with the default ThreadRng.
    pub fn new(max_step: f64, bound: f64) -> Result<Self, ConfigError> {
        Self::with_rng(max_step, bound, rand::thread_rng())
    }
}

impl<R: Rng> RandomWalk<R> {
    /// Creates a random walk starting at zero with a custom RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdramp::{RandomWalk, Signal};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(1);
    /// let mut walk = RandomWalk::with_rng(0.05, 1.0, rng).unwrap();
    /// for _ in 0..1000 {
    ///     assert!(walk.next_sample().abs() <= 1.0);
    /// }
    /// ```
    pub fn with_rng(max_step: f64, bound: f64, rng: R) -> Result<Self, ConfigError> {
        Ok(Self {
            value: 0.0,
            max_step: non_negative("walk step", max_step)?,
            bound: non_negative("walk bound", bound)?,
            rng,
        })
    }

    /// Current position of the walk.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl<R: Rng> Signal for RandomWalk<R> {
    fn next_sample(&mut self) -> f64 {
        let current = self.value;
        if self.max_step > 0.0 {
            let mut next = current + self.rng.gen_range(-self.max_step..=self.max_step);
            // Reflect once; a step never exceeds the width of the band unless
            // the band is narrower than the step, hence the final clamp.
            if next > self.bound {
                next = 2.0 * self.bound - next;
            } else if next < -self.bound {
                next = -2.0 * self.bound - next;
            }
            self.value = next.clamp(-self.bound, self.bound);
        }
        current
    }
}
