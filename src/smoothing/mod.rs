//! Piecewise-linear reconstruction of held signals.
//!
//! The smoother watches a zero-order-hold signal for changes. Each time the
//! held value moves, it divides the step by the number of ticks counted since
//! the previous change and applies that slope on every tick until the next
//! change. The result trails the true signal by one hold interval but has no
//! staircase edges.

mod smoother;
mod state;

pub use smoother::{Smooth, Smoother, StartupPolicy};
pub use state::{SmootherState, StepOutcome, interval_gradient};
