//! The per-tick signal trait.
//!
//! Every stage of the pipeline (sources, the sample-and-hold stage and the
//! smoother adapter) is a `Signal`: it is polled exactly once per tick and
//! yields exactly one sample.

/// Common interface for all tick-driven signal sources and processors.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
///
/// Each call to `next_sample()` is one tick. Stages never look ahead, so a
/// chain of signals is causal by construction.
pub trait Signal {
    /// Generates the sample for the next tick.
    fn next_sample(&mut self) -> f64;

    /// Generates one sample per element of `buffer`, in tick order.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// A bare `f64` is a signal that never changes.
///
/// # Examples
///
/// ```
/// use holdramp::Signal;
///
/// let mut level = 0.5_f64;
/// assert_eq!(level.next_sample(), 0.5);
///
/// let mut buffer = vec![0.0; 4];
/// level.process(&mut buffer);
/// assert_eq!(buffer, vec![0.5, 0.5, 0.5, 0.5]);
/// ```
impl Signal for f64 {
    fn next_sample(&mut self) -> f64 {
        *self
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(*self);
    }
}

/// Blanket implementation so a `&mut` borrow can stand in for the stage.
impl<S: Signal + ?Sized> Signal for &mut S {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }

    fn process(&mut self, buffer: &mut [f64]) {
        (**self).process(buffer)
    }
}

/// Boxed signals, for heterogeneous sources chosen at runtime.
impl<S: Signal + ?Sized> Signal for Box<S> {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }

    fn process(&mut self, buffer: &mut [f64]) {
        (**self).process(buffer)
    }
}

/// A signal that always returns the same value.
///
/// # Examples
///
/// ```
/// use holdramp::{ConstantSignal, Signal};
///
/// let mut held = ConstantSignal(3.0);
/// assert_eq!(held.next_sample(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConstantSignal(pub f64);

impl Signal for ConstantSignal {
    fn next_sample(&mut self) -> f64 {
        self.0
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(self.0);
    }
}

impl From<f64> for ConstantSignal {
    fn from(value: f64) -> Self {
        ConstantSignal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_to_constant_signal() {
        let constant: ConstantSignal = 0.5.into();
        assert_eq!(constant.0, 0.5);
    }

    #[test]
    fn test_constant_process_fills_buffer() {
        let mut constant = ConstantSignal(-1.25);
        let mut buffer = [0.0; 8];
        constant.process(&mut buffer);
        assert!(buffer.iter().all(|&s| s == -1.25));
    }

    #[test]
    fn test_mut_ref_advances_underlying_signal() {
        struct Counter(f64);
        impl Signal for Counter {
            fn next_sample(&mut self) -> f64 {
                self.0 += 1.0;
                self.0
            }
        }

        fn pull_two(mut signal: impl Signal) -> f64 {
            signal.next_sample();
            signal.next_sample()
        }

        let mut counter = Counter(0.0);
        assert_eq!(pull_two(&mut counter), 2.0);
        assert_eq!(counter.next_sample(), 3.0);
    }

    #[test]
    fn test_boxed_signal() {
        let mut boxed: Box<dyn Signal> = Box::new(ConstantSignal(2.0));
        assert_eq!(boxed.next_sample(), 2.0);
    }
}
