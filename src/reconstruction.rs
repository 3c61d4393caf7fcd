//! End-to-end pipeline: ground truth, zero-order hold, smoother.

use crate::error::{ConfigError, InvalidInputError};
use crate::hold::SampleAndHold;
use crate::oscillators::{DEFAULT_ANGULAR_STEP, SineOscillator};
use crate::signals::Signal;
use crate::smoothing::{Smoother, StartupPolicy};
use tracing::debug;

/// Everything observed on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickFrame {
    /// Zero-based tick index.
    pub tick: u64,
    /// Ground-truth sample.
    pub signal: f64,
    /// Value published by the sample-and-hold stage.
    pub held: f64,
    /// Smoother output.
    pub smoothed: f64,
}

/// Parameters of a reconstruction run.
///
/// The defaults reproduce the classic demonstration: a sine advancing 0.01
/// radians per tick, sampled every 40 ticks, with a 1000-tick display window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconstructionConfig {
    /// Ticks between fresh readings of the source.
    pub hold_interval: usize,
    /// How the smoother treats the first held value.
    pub startup: StartupPolicy,
    /// Ticks kept for display.
    pub history_capacity: usize,
    /// Phase advance per tick of the default sine source, in radians.
    pub sine_step: f64,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            hold_interval: 40,
            startup: StartupPolicy::ZeroSeeded,
            history_capacity: 1000,
            sine_step: DEFAULT_ANGULAR_STEP,
        }
    }
}

impl ReconstructionConfig {
    pub fn with_hold_interval(mut self, hold_interval: usize) -> Self {
        self.hold_interval = hold_interval;
        self
    }

    pub fn with_startup(mut self, startup: StartupPolicy) -> Self {
        self.startup = startup;
        self
    }

    pub fn with_history_capacity(mut self, history_capacity: usize) -> Self {
        self.history_capacity = history_capacity;
        self
    }

    pub fn with_sine_step(mut self, sine_step: f64) -> Self {
        self.sine_step = sine_step;
        self
    }

    /// Checks every parameter without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hold_interval == 0 {
            return Err(ConfigError::ZeroHoldInterval);
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        if !self.sine_step.is_finite() {
            return Err(ConfigError::NonFiniteParameter {
                name: "sine step",
                value: self.sine_step,
            });
        }
        Ok(())
    }
}

/// Drives a source through a sample-and-hold stage and a smoother, one tick
/// at a time.
///
/// # Examples
///
/// ```
/// use holdramp::{Reconstruction, ReconstructionConfig};
///
/// let config = ReconstructionConfig::default().with_hold_interval(10);
/// let mut run = Reconstruction::sine(&config)?;
/// let frames = run.run(100)?;
///
/// assert_eq!(frames.len(), 100);
/// assert_eq!(frames[10].held, frames[10].signal);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Reconstruction<S: Signal> {
    hold: SampleAndHold<S>,
    smoother: Smoother,
    tick: u64,
}

impl<S: Signal> Reconstruction<S> {
    /// Builds a pipeline around `source` using the hold interval and startup
    /// policy from `config`.
    pub fn new(source: S, config: &ReconstructionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            hold_interval = config.hold_interval,
            startup = ?config.startup,
            "building reconstruction pipeline"
        );
        Ok(Self {
            hold: SampleAndHold::new(source, config.hold_interval)?,
            smoother: Smoother::with_startup(config.startup),
            tick: 0,
        })
    }

    /// Advances every stage by one tick.
    ///
    /// # Errors
    ///
    /// [`InvalidInputError`] when the held value is not finite, carrying this
    /// pipeline's tick index. The source and the hold stage have still
    /// advanced; the smoother has not, so the stream can continue on the next
    /// tick. Rejected ticks do not count toward the smoother's interval: the
    /// next gradient is measured over accepted ticks only.
    pub fn tick(&mut self) -> Result<TickFrame, InvalidInputError> {
        let tick = self.tick;
        self.tick += 1;

        let held = self.hold.next_sample();
        let smoothed = self
            .smoother
            .update(held)
            .map_err(|err| err.at_tick(tick))?;
        Ok(TickFrame {
            tick,
            signal: self.hold.last_input(),
            held,
            smoothed,
        })
    }

    /// Runs `ticks` ticks and collects the frames, stopping at the first
    /// rejected value.
    pub fn run(&mut self, ticks: usize) -> Result<Vec<TickFrame>, InvalidInputError> {
        (0..ticks).map(|_| self.tick()).collect()
    }

    /// Ticks performed so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn smoother(&self) -> &Smoother {
        &self.smoother
    }

    pub fn hold(&self) -> &SampleAndHold<S> {
        &self.hold
    }
}

impl Reconstruction<SineOscillator> {
    /// Builds the sine pipeline described by `config`.
    pub fn sine(config: &ReconstructionConfig) -> Result<Self, ConfigError> {
        Self::new(SineOscillator::new(config.sine_step), config)
    }
}

/// Endless stream of frames.
impl<S: Signal> Iterator for Reconstruction<S> {
    type Item = Result<TickFrame, InvalidInputError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.tick())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::FromFn;

    #[test]
    fn test_default_config() {
        let config = ReconstructionConfig::default();
        assert_eq!(config.hold_interval, 40);
        assert_eq!(config.history_capacity, 1000);
        assert_eq!(config.sine_step, 0.01);
        assert_eq!(config.startup, StartupPolicy::ZeroSeeded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = ReconstructionConfig::default();
        assert_eq!(
            base.with_hold_interval(0).validate(),
            Err(ConfigError::ZeroHoldInterval)
        );
        assert_eq!(
            base.with_history_capacity(0).validate(),
            Err(ConfigError::ZeroHistoryCapacity)
        );
        assert!(base.with_sine_step(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_frames_are_tick_aligned() {
        let mut n = 0.0;
        let source = FromFn(move || {
            n += 1.0;
            n
        });
        let config = ReconstructionConfig::default().with_hold_interval(2);
        let mut pipeline = Reconstruction::new(source, &config).unwrap();
        let frames = pipeline.run(4).unwrap();

        let ticks: Vec<u64> = frames.iter().map(|f| f.tick).collect();
        assert_eq!(ticks, vec![0, 1, 2, 3]);
        let signal: Vec<f64> = frames.iter().map(|f| f.signal).collect();
        assert_eq!(signal, vec![1.0, 2.0, 3.0, 4.0]);
        let held: Vec<f64> = frames.iter().map(|f| f.held).collect();
        assert_eq!(held, vec![1.0, 1.0, 3.0, 3.0]);
        assert_eq!(pipeline.ticks(), 4);
    }

    #[test]
    fn test_non_finite_source_is_local_to_tick() {
        let mut n = 0;
        let source = FromFn(move || {
            n += 1;
            if n == 2 { f64::NAN } else { n as f64 }
        });
        let config = ReconstructionConfig::default().with_hold_interval(1);
        let mut pipeline = Reconstruction::new(source, &config).unwrap();

        assert!(pipeline.tick().is_ok());
        assert!(matches!(
            pipeline.tick(),
            Err(InvalidInputError::NonFinite { tick: 1, .. })
        ));
        let frame = pipeline.tick().unwrap();
        assert_eq!(frame.tick, 2);
        assert_eq!(frame.held, 3.0);
        assert!(frame.smoothed.is_finite());
    }

    #[test]
    fn test_consecutive_rejections_report_pipeline_ticks() {
        let values = [1.0, f64::NAN, f64::NAN, 4.0];
        let mut index = 0;
        let source = FromFn(move || {
            let value = values[index];
            index += 1;
            value
        });
        let config = ReconstructionConfig::default().with_hold_interval(1);
        let mut pipeline = Reconstruction::new(source, &config).unwrap();

        assert_eq!(pipeline.tick().unwrap().smoothed, 1.0);
        assert_eq!(pipeline.tick().unwrap_err().tick(), 1);
        assert_eq!(pipeline.tick().unwrap_err().tick(), 2);

        let frame = pipeline.tick().unwrap();
        assert_eq!(frame.tick, 3);
        assert_eq!(pipeline.ticks(), 4);
        // Only the two accepted ticks reached the smoother, so the step from
        // 1.0 to 4.0 spreads over two ticks.
        assert_eq!(pipeline.smoother().ticks(), 2);
        assert_eq!(pipeline.smoother().state().gradient(), 1.5);
        assert_eq!(frame.smoothed, 2.5);
    }

    #[test]
    fn test_iterator_yields_frames() {
        let config = ReconstructionConfig::default();
        let pipeline = Reconstruction::new(0.25, &config).unwrap();
        let frames: Vec<TickFrame> = pipeline.take(3).collect::<Result<_, _>>().unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|f| f.held == 0.25));
    }
}
