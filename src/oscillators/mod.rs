//! Deterministic ground-truth sources.

mod sine;
mod traits;

pub use sine::{DEFAULT_ANGULAR_STEP, SineOscillator};
pub use traits::Oscillator;
