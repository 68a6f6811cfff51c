//! Random outcome sources
//!
//! The flip outcome is a single random bit of parity. The primary source is
//! OS entropy; if that ever fails we fall back to a time-seeded PRNG so the
//! draw itself can never fail. Fairness beyond "uniform enough for a toy"
//! is an explicit non-goal.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of raw 32-bit draws for flip outcomes.
///
/// Kept as a trait so the controller and animator can be tested with a
/// predetermined sequence of draws.
pub trait OutcomeSource {
    /// Draws the next raw value. Must always succeed.
    fn draw(&mut self) -> u32;
}

/// Production outcome source: OS entropy with a guaranteed PRNG fallback.
pub struct EntropyOutcomeSource {
    /// Lazily created only if OS entropy fails once; reused afterwards.
    fallback: Option<SmallRng>,
}

impl EntropyOutcomeSource {
    pub fn new() -> Self {
        Self { fallback: None }
    }

    fn fallback_rng(&mut self) -> &mut SmallRng {
        self.fallback.get_or_insert_with(|| {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0x5eed_c01d);
            SmallRng::seed_from_u64(nanos)
        })
    }
}

impl Default for EntropyOutcomeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeSource for EntropyOutcomeSource {
    fn draw(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => u32::from_le_bytes(buf),
            Err(err) => {
                tracing::debug!(%err, "OS entropy unavailable, using PRNG fallback");
                self.fallback_rng().gen()
            }
        }
    }
}

/// Test source that replays a fixed sequence of draws, then repeats the
/// last one.
#[cfg(test)]
pub struct FixedOutcomeSource {
    draws: Vec<u32>,
    next: usize,
}

#[cfg(test)]
impl FixedOutcomeSource {
    pub fn new(draws: Vec<u32>) -> Self {
        assert!(!draws.is_empty(), "need at least one draw");
        Self { draws, next: 0 }
    }
}

#[cfg(test)]
impl OutcomeSource for FixedOutcomeSource {
    fn draw(&mut self) -> u32 {
        let value = self.draws[self.next.min(self.draws.len() - 1)];
        self.next += 1;
        value
    }
}
