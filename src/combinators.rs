//! Signal combinators for building reconstruction pipelines.
//!
//! Besides the pipeline stages themselves ([`SampleAndHold`] and
//! [`Smooth`]), this module has a few small adapters for composing test and
//! demo sources: closures as signals, sums and fixed gains.

use crate::error::ConfigError;
use crate::hold::SampleAndHold;
use crate::signals::Signal;
use crate::smoothing::{Smooth, StartupPolicy};

/// Turns a closure into a signal; the closure is called once per tick.
///
/// # Examples
///
/// ```
/// use holdramp::{Signal, combinators::FromFn};
///
/// let mut tick = 0.0;
/// let mut ramp = FromFn(move || {
///     tick += 0.5;
///     tick
/// });
/// assert_eq!(ramp.next_sample(), 0.5);
/// assert_eq!(ramp.next_sample(), 1.0);
/// ```
pub struct FromFn<F>(pub F)
where
    F: FnMut() -> f64;

impl<F> Signal for FromFn<F>
where
    F: FnMut() -> f64,
{
    fn next_sample(&mut self) -> f64 {
        (self.0)()
    }
}

/// Adds two signals sample by sample.
///
/// # Examples
///
/// ```
/// use holdramp::{Signal, combinators::Add};
///
/// let mut sum = Add::new(1.0, 0.25);
/// assert_eq!(sum.next_sample(), 1.25);
/// ```
pub struct Add<A: Signal, B: Signal> {
    a: A,
    b: B,
}

impl<A: Signal, B: Signal> Add<A, B> {
    /// Creates a new Add combinator.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A: Signal, B: Signal> Signal for Add<A, B> {
    fn next_sample(&mut self) -> f64 {
        self.a.next_sample() + self.b.next_sample()
    }
}

/// Scales a signal by a fixed factor.
pub struct Gain<S: Signal> {
    pub source: S,
    pub gain: f64,
}

impl<S: Signal> Gain<S> {
    /// Creates a new Gain combinator.
    pub fn new(source: S, gain: f64) -> Self {
        Self { source, gain }
    }
}

impl<S: Signal> Signal for Gain<S> {
    fn next_sample(&mut self) -> f64 {
        self.source.next_sample() * self.gain
    }
}

/// Applies a function to each sample.
pub struct Map<S: Signal, F>
where
    F: FnMut(f64) -> f64,
{
    pub source: S,
    pub func: F,
}

impl<S: Signal, F> Map<S, F>
where
    F: FnMut(f64) -> f64,
{
    /// Creates a new Map combinator.
    pub fn new(source: S, func: F) -> Self {
        Self { source, func }
    }
}

impl<S: Signal, F> Signal for Map<S, F>
where
    F: FnMut(f64) -> f64,
{
    fn next_sample(&mut self) -> f64 {
        (self.func)(self.source.next_sample())
    }
}

/// Fluent construction of pipelines on any [`Signal`].
///
/// # Examples
///
/// ```
/// use holdramp::{Signal, SignalExt, SineOscillator};
///
/// // Ground truth, held for 40 ticks at a time, then smoothed.
/// let mut smoothed = SineOscillator::default().sample_and_hold(40)?.smooth();
/// let first = smoothed.next_sample();
/// assert_eq!(first, 0.0);
/// # Ok::<(), holdramp::ConfigError>(())
/// ```
pub trait SignalExt: Signal + Sized {
    /// Adds this signal to another signal.
    fn add<S: Signal>(self, other: S) -> Add<Self, S> {
        Add::new(self, other)
    }

    /// Scales this signal by a fixed factor.
    fn gain(self, gain: f64) -> Gain<Self> {
        Gain::new(self, gain)
    }

    /// Applies a function to each sample of this signal.
    fn map<F>(self, func: F) -> Map<Self, F>
    where
        F: FnMut(f64) -> f64,
    {
        Map::new(self, func)
    }

    /// Holds this signal, refreshing the held value every `interval` ticks.
    fn sample_and_hold(self, interval: usize) -> Result<SampleAndHold<Self>, ConfigError> {
        SampleAndHold::new(self, interval)
    }

    /// Smooths this held signal with the default startup policy.
    fn smooth(self) -> Smooth<Self> {
        Smooth::new(self, StartupPolicy::default())
    }

    /// Smooths this held signal with an explicit startup policy.
    fn smooth_with(self, startup: StartupPolicy) -> Smooth<Self> {
        Smooth::new(self, startup)
    }
}

// Blanket implementation for all Signal types
impl<T: Signal> SignalExt for T {}
