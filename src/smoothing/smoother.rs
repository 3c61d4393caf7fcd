//! The smoother: validated per-tick updates over a [`SmootherState`].

use super::state::{SmootherState, StepOutcome};
use crate::error::InvalidInputError;
use crate::signals::Signal;
use tracing::{debug, trace, warn};

/// How the smoother treats the very first held value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartupPolicy {
    /// Start from the all-zero state. A first held value other than zero is
    /// treated as a change from zero, which produces a one-off ramp from 0
    /// toward that value.
    #[default]
    ZeroSeeded,
    /// Adopt the first held value as the starting point and emit it unchanged.
    /// Ramping begins at the next change.
    SeedFromFirst,
}

/// Linear reconstruction of a zero-order-hold signal.
///
/// Feed one held value per tick through [`update`](Self::update); each call
/// returns the interpolated value for that tick. The output ramps toward each
/// new held value with the slope implied by how long the previous value was
/// held, so it lags the held signal by one hold interval.
///
/// Each `Smoother` owns its state, so independent streams need independent
/// smoothers and nothing is shared between them.
///
/// # Examples
///
/// ```
/// use holdramp::Smoother;
///
/// let mut smoother = Smoother::new();
/// let held = [0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 10.0];
/// let out: Vec<f64> = held
///     .iter()
///     .map(|&h| smoother.update(h))
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(out, vec![0.0, 0.0, 0.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Smoother {
    state: SmootherState,
    startup: StartupPolicy,
    /// Ticks consumed so far, rejected ones excluded.
    tick: u64,
}

impl Smoother {
    /// Creates a smoother with the zero-seeded startup policy.
    pub fn new() -> Self {
        Self::with_startup(StartupPolicy::default())
    }

    /// Creates a smoother with an explicit startup policy.
    pub fn with_startup(startup: StartupPolicy) -> Self {
        debug!(?startup, "creating smoother");
        Self {
            state: SmootherState::new(),
            startup,
            tick: 0,
        }
    }

    /// Consumes the held value for the next tick and returns the
    /// interpolated value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::NonFinite`] for NaN or infinite input.
    /// A rejected value does not count as a tick and leaves the state as it
    /// was.
    pub fn update(&mut self, held: f64) -> Result<f64, InvalidInputError> {
        if !held.is_finite() {
            warn!(value = held, tick = self.tick, "rejecting non-finite held value");
            return Err(InvalidInputError::NonFinite {
                value: held,
                tick: self.tick,
            });
        }
        Ok(self.advance(held))
    }

    /// Consumes the held value for the next tick without validating it.
    ///
    /// NaN or infinite input propagates through the arithmetic: once
    /// consumed, the gradient and every later output are non-finite until the
    /// smoother is [`reset`](Self::reset).
    pub fn advance(&mut self, held: f64) -> f64 {
        let tick = self.tick;
        self.tick += 1;

        if tick == 0 && self.startup == StartupPolicy::SeedFromFirst {
            trace!(tick, held, "seeding from first held value");
            self.state = SmootherState::seeded(held);
            return held;
        }

        let StepOutcome {
            output,
            changed_after,
        } = self.state.step(held);
        if let Some(interval) = changed_after {
            trace!(
                tick,
                held,
                interval = interval.get(),
                gradient = self.state.gradient(),
                "held value changed"
            );
        }
        output
    }

    /// Returns to the state before the first tick, keeping the startup
    /// policy.
    pub fn reset(&mut self) {
        self.state = SmootherState::new();
        self.tick = 0;
    }

    /// Current state.
    pub fn state(&self) -> &SmootherState {
        &self.state
    }

    /// Startup policy this smoother was built with.
    pub fn startup(&self) -> StartupPolicy {
        self.startup
    }

    /// Number of ticks consumed.
    pub fn ticks(&self) -> u64 {
        self.tick
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new()
    }
}

/// Signal adapter that smooths a held-value signal.
///
/// Uses [`Smoother::advance`], so a non-finite held value propagates into
/// the output rather than being dropped.
///
/// # Examples
///
/// ```
/// use holdramp::{Signal, SignalExt};
///
/// let mut smoothed = 4.0_f64.smooth();
/// assert_eq!(smoothed.next_sample(), 4.0);
/// assert_eq!(smoothed.next_sample(), 8.0);
/// ```
pub struct Smooth<S: Signal> {
    pub source: S,
    pub smoother: Smoother,
}

impl<S: Signal> Smooth<S> {
    /// Wraps `source` in a smoother with the given startup policy.
    pub fn new(source: S, startup: StartupPolicy) -> Self {
        Self {
            source,
            smoother: Smoother::with_startup(startup),
        }
    }
}

impl<S: Signal> Signal for Smooth<S> {
    fn next_sample(&mut self) -> f64 {
        let held = self.source.next_sample();
        self.smoother.advance(held)
    }
}
