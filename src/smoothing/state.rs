//! Smoother state and the gradient arithmetic behind it.

use std::num::NonZeroU64;

/// Per-tick increment that spreads `to - from` evenly over `ticks`.
///
/// The tick count is a [`NonZeroU64`], so the division is always defined.
/// Non-finite endpoints propagate into the result.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroU64;
/// use holdramp::smoothing::interval_gradient;
///
/// let ticks = NonZeroU64::new(5).unwrap();
/// assert_eq!(interval_gradient(0.0, 10.0, ticks), 2.0);
/// ```
pub fn interval_gradient(from: f64, to: f64, ticks: NonZeroU64) -> f64 {
    (to - from) / ticks.get() as f64
}

/// What happened to the state during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Interpolated value emitted for this tick.
    pub output: f64,
    /// Set when the held value differed from the last change point. Carries
    /// the length of the interval that just ended.
    pub changed_after: Option<NonZeroU64>,
}

/// The smoother's entire persistent state.
///
/// A fresh state has every field at zero. It is advanced exactly once per
/// tick by [`SmootherState::step`]; nothing else mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SmootherState {
    /// Held value at the most recent detected change.
    previous_held: f64,
    /// Ticks observed since `previous_held` was last updated.
    ticks_since_change: u64,
    /// Increment applied on every tick of the current interval.
    gradient: f64,
    /// Running accumulator; the value emitted on the last tick.
    output: f64,
}

impl SmootherState {
    /// Creates the zero-valued state used before the first tick.
    pub const fn new() -> Self {
        Self {
            previous_held: 0.0,
            ticks_since_change: 0,
            gradient: 0.0,
            output: 0.0,
        }
    }

    /// State after a first tick that adopted `held` as both the change point
    /// and the output, with no ramp in progress.
    pub const fn seeded(held: f64) -> Self {
        Self {
            previous_held: held,
            ticks_since_change: 1,
            gradient: 0.0,
            output: held,
        }
    }

    /// Consumes one held value and advances the state by one tick.
    ///
    /// 1. The tick counter is incremented.
    /// 2. If `held` differs from the last change point (exact comparison), the
    ///    gradient is recomputed over the counted interval, the counter
    ///    restarts at 1 and `held` becomes the new change point.
    /// 3. The output advances by the gradient, change or not.
    ///
    /// Non-finite input is not checked here and propagates through the
    /// arithmetic.
    pub fn step(&mut self, held: f64) -> StepOutcome {
        let interval = NonZeroU64::MIN.saturating_add(self.ticks_since_change);
        self.ticks_since_change = interval.get();

        let changed_after = if held != self.previous_held {
            self.gradient = interval_gradient(self.previous_held, held, interval);
            self.ticks_since_change = 1;
            self.previous_held = held;
            Some(interval)
        } else {
            None
        };

        self.output += self.gradient;
        StepOutcome {
            output: self.output,
            changed_after,
        }
    }

    /// Held value at the most recent detected change.
    pub fn previous_held(&self) -> f64 {
        self.previous_held
    }

    /// Ticks observed since the most recent detected change.
    pub fn ticks_since_change(&self) -> u64 {
        self.ticks_since_change
    }

    /// Increment currently applied on each tick.
    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    /// Most recently emitted value.
    pub fn output(&self) -> f64 {
        self.output
    }
}
