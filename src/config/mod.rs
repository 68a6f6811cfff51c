//! Configuration module for corgi-coin
//!
//! All timing and feel constants for the flip live in one validated
//! structure. There is no configuration file; the defaults are the product,
//! and validation exists so tuning experiments fail loudly instead of
//! producing a broken animation.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors produced by tuning validation.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("fraction `{name}` must be inside (0, 1), got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },

    #[error("duration `{name}` must be positive")]
    ZeroDuration { name: &'static str },

    #[error("flip needs at least one full spin")]
    NoSpins,
}

/// Timing and feel constants for the coin flip.
#[derive(Debug, Clone)]
pub struct FlipTuning {
    /// Period of one full idle rotation.
    pub idle_rotate: Duration,
    /// Total duration of a flip animation.
    pub flip_total: Duration,
    /// Fraction of total time spent in the fast segment.
    pub fast_phase: f64,
    /// Fraction of the angular distance covered by the fast segment.
    pub fast_distance: f64,
    /// Whole extra rotations per flip.
    pub spins: u32,
    /// Playback start offset skipping the ping's leading silence.
    pub ping_offset: Duration,
    /// Window in which a fallback input event is treated as a duplicate of
    /// a primary one.
    pub debounce_window: Duration,
    /// Fixed path of the ping sound asset.
    pub ping_path: PathBuf,
}

impl FlipTuning {
    /// Validates the tuning values.
    ///
    /// # Returns
    /// `Ok(())` if every value is usable, otherwise the first violation.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("fast_phase", self.fast_phase),
            ("fast_distance", self.fast_distance),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(TuningError::FractionOutOfRange { name, value });
            }
        }

        for (name, duration) in [
            ("idle_rotate", self.idle_rotate),
            ("flip_total", self.flip_total),
        ] {
            if duration.is_zero() {
                return Err(TuningError::ZeroDuration { name });
            }
        }

        if self.spins == 0 {
            return Err(TuningError::NoSpins);
        }

        Ok(())
    }
}

impl Default for FlipTuning {
    fn default() -> Self {
        Self {
            idle_rotate: Duration::from_millis(4200),
            flip_total: Duration::from_millis(1000),
            fast_phase: 0.28,
            fast_distance: 0.78,
            spins: 22,
            // The shipped WAV has ~87ms of leading silence; starting
            // slightly in makes playback feel instantaneous.
            ping_offset: Duration::from_millis(90),
            debounce_window: Duration::from_millis(450),
            ping_path: PathBuf::from("assets/sounds/coin-ping.wav"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(FlipTuning::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        let mut tuning = FlipTuning::default();
        tuning.fast_phase = 0.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::FractionOutOfRange { name: "fast_phase", .. })
        ));

        let mut tuning = FlipTuning::default();
        tuning.fast_distance = 1.0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn rejects_zero_durations_and_spins() {
        let mut tuning = FlipTuning::default();
        tuning.flip_total = Duration::ZERO;
        assert!(matches!(tuning.validate(), Err(TuningError::ZeroDuration { .. })));

        let mut tuning = FlipTuning::default();
        tuning.spins = 0;
        assert!(matches!(tuning.validate(), Err(TuningError::NoSpins)));
    }
}
