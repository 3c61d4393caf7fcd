//! Holdramp - linear reconstruction of zero-order-hold sampled signals
//!
//! A signal that is only refreshed every N ticks looks like a staircase. The
//! [`Smoother`] turns that staircase back into a piecewise-linear estimate of
//! the original signal, at the cost of lagging it by one hold interval.
//!
//! The crate also provides the pieces around the smoother: ground-truth
//! sources, a sample-and-hold stage, a ring-buffer display history and an
//! end-to-end [`Reconstruction`] pipeline.

pub mod combinators;
pub mod error;
#[cfg(feature = "wav-export")]
pub mod export;
pub mod history;
pub mod hold;
pub mod noise;
pub mod oscillators;
pub mod reconstruction;
pub mod signals;
pub mod smoothing;

// Re-export commonly used types at the crate root
pub use combinators::{Add, FromFn, Gain, Map, SignalExt};
pub use error::{ConfigError, InvalidInputError};
pub use history::{FrameHistory, History};
pub use hold::SampleAndHold;
pub use noise::{RandomWalk, WhiteNoise};
pub use oscillators::{Oscillator, SineOscillator};
pub use reconstruction::{Reconstruction, ReconstructionConfig, TickFrame};
pub use signals::{ConstantSignal, Signal};
pub use smoothing::{Smooth, Smoother, SmootherState, StartupPolicy};

#[cfg(feature = "wav-export")]
pub use export::ExportError;
