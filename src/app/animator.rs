//! Coin rotation animator
//!
//! Owns the rotation state machine: the slow idle loop, the planned flip
//! rotation, and the settled rest state. The animator is driven by frame
//! ticks and continuously records its current angle, which is the single
//! source of truth for where the coin is. On reset the controller discards
//! the whole animator and builds a fresh one so the idle loop always
//! restarts at its natural slow speed.

use std::time::{Duration, Instant};

use crate::config::FlipTuning;
use crate::domain::angle::{normalize_deg, FULL_TURN_DEG};
use crate::domain::face::Face;
use crate::domain::outcome::OutcomeSource;
use crate::domain::timeline::FlipTimeline;

/// Internal animation mode.
#[derive(Debug, Clone)]
enum Mode {
    /// Continuous linear 360° loop.
    Idle { started: Instant },
    /// Running a planned flip.
    Flipping { timeline: FlipTimeline, started: Instant },
    /// Static at the landing angle after a completed flip.
    Settled,
}

/// Rotation state machine for the coin.
#[derive(Debug)]
pub struct CoinAnimator {
    idle_rotate: Duration,
    flip_total: Duration,
    fast_phase: f64,
    fast_distance: f64,
    spins: u32,
    mode: Mode,
    /// Running angle in degrees, spins included. Updated on every tick.
    current_angle_deg: f64,
    animating: bool,
    has_ever_flipped: bool,
}

impl CoinAnimator {
    /// Creates a fresh animator in the idle loop, starting at angle 0.
    pub fn new(tuning: &FlipTuning, now: Instant) -> Self {
        Self {
            idle_rotate: tuning.idle_rotate,
            flip_total: tuning.flip_total,
            fast_phase: tuning.fast_phase,
            fast_distance: tuning.fast_distance,
            spins: tuning.spins,
            mode: Mode::Idle { started: now },
            current_angle_deg: 0.0,
            animating: false,
            has_ever_flipped: false,
        }
    }

    /// Current rotation angle in degrees, spins included.
    pub fn current_angle_deg(&self) -> f64 {
        self.current_angle_deg
    }

    /// Current rotation normalized into `[0, 360)` for rendering.
    pub fn display_angle_deg(&self) -> f64 {
        normalize_deg(self.current_angle_deg)
    }

    /// True between flip start and its completion tick.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// True once a flip has completed; the idle loop never restarts on its
    /// own after that.
    pub fn has_ever_flipped(&self) -> bool {
        self.has_ever_flipped
    }

    /// Starts a flip from the current angle.
    ///
    /// Draws the outcome, plans the rotation, and enters the flipping mode.
    /// A request arriving while a flip is already running is ignored: no
    /// queueing, no interruption.
    ///
    /// # Returns
    /// The predetermined landing face, or `None` if the request was ignored.
    pub fn begin_flip(&mut self, source: &mut dyn OutcomeSource, now: Instant) -> Option<Face> {
        if self.animating {
            return None;
        }

        let face = Face::from_draw(source.draw());
        let timeline = FlipTimeline::plan(
            self.current_angle_deg,
            face,
            self.spins,
            self.fast_distance,
            self.fast_phase,
            self.flip_total,
        );

        tracing::debug!(%face, start_deg = self.current_angle_deg, "flip started");

        self.animating = true;
        self.mode = Mode::Flipping { timeline, started: now };
        Some(face)
    }

    /// Advances the animation to `now`.
    ///
    /// In the idle loop this rotates linearly; during a flip it samples the
    /// timeline and, once the planned duration has elapsed, snaps to the
    /// exact landing angle so interpolation rounding can never leave the
    /// coin visibly off-face.
    ///
    /// # Returns
    /// The resolved face on the tick that completes a flip, `None` otherwise.
    pub fn tick(&mut self, now: Instant) -> Option<Face> {
        match &self.mode {
            Mode::Idle { started } => {
                let elapsed = now.saturating_duration_since(*started).as_secs_f64();
                let period = self.idle_rotate.as_secs_f64();
                self.current_angle_deg = normalize_deg(elapsed / period * FULL_TURN_DEG);
                None
            }
            Mode::Flipping { timeline, started } => {
                let elapsed = now.saturating_duration_since(*started);
                if timeline.is_complete(elapsed) {
                    let face = timeline.face();
                    self.current_angle_deg = timeline.end_deg();
                    self.animating = false;
                    self.has_ever_flipped = true;
                    self.mode = Mode::Settled;
                    tracing::debug!(%face, "flip completed");
                    Some(face)
                } else {
                    self.current_angle_deg = timeline.angle_at(elapsed);
                    None
                }
            }
            Mode::Settled => None,
        }
    }
}
