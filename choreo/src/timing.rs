//! Timing configuration for every timed piece of the page.
//!
//! All structs deserialize from TOML tables and default to the shipped
//! page constants, so an empty document is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ChoreoError;
use crate::viewport::ReplayPolicy;

/// Splash loader pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderTiming {
    /// Interval between progress ticks.
    pub tick_ms: u64,
    /// Percentage points added per tick.
    pub step: u8,
    /// Pause at 100% before completion is signalled.
    pub hold_ms: u64,
    /// Length of the exit wipe after completion.
    pub exit_ms: u64,
}

impl Default for LoaderTiming {
    fn default() -> Self {
        Self {
            tick_ms: 30,
            step: 2,
            hold_ms: 800,
            exit_ms: 1000,
        }
    }
}

impl LoaderTiming {
    /// Interval between progress ticks.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Pause at 100% before completion.
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    /// Length of the exit wipe.
    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    /// Ticks needed to go from 0 to 100.
    pub fn ticks_to_full(&self) -> u32 {
        100u32.div_ceil(u32::from(self.step.max(1)))
    }

    /// Time from mount until the completion callback fires.
    pub fn until_complete(&self) -> Duration {
        self.tick() * self.ticks_to_full() + self.hold()
    }

    /// Reject settings that would stall or spin the loader.
    pub fn validate(&self) -> Result<(), ChoreoError> {
        if self.tick_ms == 0 {
            return Err(ChoreoError::ZeroDuration {
                what: "loader.tick_ms",
            });
        }
        if self.step == 0 || self.step > 100 {
            return Err(ChoreoError::InvalidStep(self.step));
        }
        Ok(())
    }
}

/// Auto-advance period of a rotating panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotationTiming {
    /// Time between automatic advances.
    pub period_ms: u64,
}

impl RotationTiming {
    /// Feature tabs advance every four seconds.
    pub fn tabs() -> Self {
        Self { period_ms: 4000 }
    }

    /// Showcase slides advance every six seconds.
    pub fn carousel() -> Self {
        Self { period_ms: 6000 }
    }

    /// Time between automatic advances.
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }

    /// A zero period would spin the UI thread.
    pub fn validate(&self, what: &'static str) -> Result<(), ChoreoError> {
        if self.period_ms == 0 {
            return Err(ChoreoError::ZeroDuration { what });
        }
        Ok(())
    }
}

/// Count-up animation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterTiming {
    /// Time to count from zero to the target.
    pub duration_ms: u64,
    /// Whether the count replays on every viewport entry.
    pub replay: ReplayPolicy,
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            replay: ReplayPolicy::Once,
        }
    }
}

impl CounterTiming {
    /// Time to count from zero to the target.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// A zero duration has no frames to animate across.
    pub fn validate(&self) -> Result<(), ChoreoError> {
        if self.duration_ms == 0 {
            return Err(ChoreoError::ZeroDuration {
                what: "counter.duration_ms",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_loader_completes_after_2300ms() {
        let timing = LoaderTiming::default();
        assert_eq!(timing.ticks_to_full(), 50);
        assert_eq!(timing.until_complete(), Duration::from_millis(2300));
    }

    #[test]
    fn uneven_step_still_reaches_full() {
        let timing = LoaderTiming {
            step: 3,
            ..LoaderTiming::default()
        };
        assert_eq!(timing.ticks_to_full(), 34);
    }

    #[test]
    fn loader_rejects_stalling_settings() {
        let zero_step = LoaderTiming {
            step: 0,
            ..LoaderTiming::default()
        };
        assert_eq!(zero_step.validate(), Err(ChoreoError::InvalidStep(0)));

        let zero_tick = LoaderTiming {
            tick_ms: 0,
            ..LoaderTiming::default()
        };
        assert!(zero_tick.validate().is_err());
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let timing: CounterTiming = toml::from_str("replay = \"every-entry\"").unwrap();
        assert_eq!(
            timing,
            CounterTiming {
                duration_ms: 2000,
                replay: ReplayPolicy::EveryEntry,
            }
        );
    }

    #[test]
    fn rotation_period_must_be_positive() {
        let timing = RotationTiming { period_ms: 0 };
        assert_eq!(
            timing.validate("tabs.period_ms"),
            Err(ChoreoError::ZeroDuration {
                what: "tabs.period_ms"
            })
        );
        assert!(RotationTiming::carousel().validate("carousel.period_ms").is_ok());
    }
}
