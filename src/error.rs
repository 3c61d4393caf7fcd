//! Error types for construction and per-tick updates.

use thiserror::Error;

/// A held value the smoother refused to consume.
///
/// Returned by [`Smoother::update`](crate::Smoother::update). The smoother's
/// state is left exactly as it was before the rejected call, so the caller can
/// skip the tick, substitute a value, or stop the stream.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("held value {value} at tick {tick} is not finite")]
    NonFinite { value: f64, tick: u64 },
}

impl InvalidInputError {
    /// Tick index the rejected value arrived on.
    pub fn tick(&self) -> u64 {
        match self {
            Self::NonFinite { tick, .. } => *tick,
        }
    }

    /// Same error, reported against another tick index.
    pub fn at_tick(self, tick: u64) -> Self {
        match self {
            Self::NonFinite { value, .. } => Self::NonFinite { value, tick },
        }
    }
}

/// Invalid parameters passed when building a pipeline stage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("hold interval must be at least one tick")]
    ZeroHoldInterval,
    #[error("history capacity must be at least one sample")]
    ZeroHistoryCapacity,
    #[error("{name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    NegativeParameter { name: &'static str, value: f64 },
}

/// Checks that a generator parameter is finite and non-negative.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() {
        Err(ConfigError::NonFiniteParameter { name, value })
    } else if value < 0.0 {
        Err(ConfigError::NegativeParameter { name, value })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(non_negative("amplitude", 0.0), Ok(0.0));
    }

    #[test]
    fn test_non_negative_rejects_nan() {
        assert!(matches!(
            non_negative("amplitude", f64::NAN),
            Err(ConfigError::NonFiniteParameter {
                name: "amplitude",
                ..
            })
        ));
    }

    #[test]
    fn test_non_negative_rejects_negative() {
        assert_eq!(
            non_negative("step", -0.5),
            Err(ConfigError::NegativeParameter {
                name: "step",
                value: -0.5
            })
        );
    }

    #[test]
    fn test_at_tick_keeps_value() {
        let err = InvalidInputError::NonFinite {
            value: f64::INFINITY,
            tick: 3,
        };
        let moved = err.at_tick(9);
        assert_eq!(moved.tick(), 9);
        assert!(matches!(
            moved,
            InvalidInputError::NonFinite { value, .. } if value == f64::INFINITY
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = InvalidInputError::NonFinite {
            value: f64::INFINITY,
            tick: 7,
        };
        assert_eq!(err.to_string(), "held value inf at tick 7 is not finite");
        assert_eq!(
            ConfigError::ZeroHoldInterval.to_string(),
            "hold interval must be at least one tick"
        );
    }
}
