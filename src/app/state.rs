//! Flip session state management
//!
//! Defines the session-level coin state machine and its transitions. The
//! session holds only the user-facing flip state; animation progress lives
//! in the animator and stable tuning lives in the controller.

use crate::domain::face::Face;

/// Phase of the coin within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinPhase {
    /// Slow continuous rotation, waiting for the first flip.
    Idle,
    /// A flip animation is running; further flip requests are ignored.
    Flipping,
    /// A flip has completed; the coin holds its landing angle until the
    /// next flip or an explicit reset.
    Settled,
}

impl Default for CoinPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Session events fed to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A flip commit passed the gate and is starting.
    FlipStarted,
    /// The animator finished and resolved a face.
    FlipCompleted(Face),
    /// User asked to return to the idle rotation.
    ResetRequested,
}

/// State machine for session phase transitions.
pub struct PhaseMachine;

impl PhaseMachine {
    /// Processes an event and returns the new phase.
    ///
    /// Invalid transitions leave the phase unchanged; in particular a flip
    /// request or a reset during `Flipping` is a no-op, which is what makes
    /// every started flip run to completion.
    pub fn process_event(current: CoinPhase, event: SessionEvent) -> CoinPhase {
        match (current, event) {
            (CoinPhase::Idle, SessionEvent::FlipStarted) => CoinPhase::Flipping,
            (CoinPhase::Settled, SessionEvent::FlipStarted) => CoinPhase::Flipping,
            (CoinPhase::Flipping, SessionEvent::FlipCompleted(_)) => CoinPhase::Settled,
            (CoinPhase::Settled, SessionEvent::ResetRequested) => CoinPhase::Idle,
            (CoinPhase::Idle, SessionEvent::ResetRequested) => CoinPhase::Idle,
            // Everything else (flip while flipping, reset while flipping,
            // stray completions) is ignored.
            (phase, _) => phase,
        }
    }
}

/// User-facing flip state owned by the controller.
///
/// Invariants:
/// * while `flipping` is true no new flip may start;
/// * `flip_request_id` only increases, except in [`FlipSession::reset`]
///   where it returns to 0 together with a `reset_epoch` bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipSession {
    /// Currently displayed face.
    pub face: Face,
    /// True between a committed flip and its completion.
    pub flipping: bool,
    /// Monotonic flip counter; 0 means the idle/reset state.
    pub flip_request_id: u64,
    /// Bumped on reset to force the animator to be recreated.
    pub reset_epoch: u64,
    phase: CoinPhase,
}

impl FlipSession {
    pub fn new() -> Self {
        Self {
            face: Face::default(),
            flipping: false,
            flip_request_id: 0,
            reset_epoch: 0,
            phase: CoinPhase::Idle,
        }
    }

    pub fn phase(&self) -> CoinPhase {
        self.phase
    }

    /// Atomically takes the flipping lock and issues a new request id.
    ///
    /// # Returns
    /// The new request id, or `None` if a flip is already in progress.
    pub fn begin_flip(&mut self) -> Option<u64> {
        if self.flipping {
            return None;
        }
        self.flipping = true;
        self.flip_request_id += 1;
        self.phase = PhaseMachine::process_event(self.phase, SessionEvent::FlipStarted);
        Some(self.flip_request_id)
    }

    /// Records a finished flip and clears the flipping lock.
    pub fn complete_flip(&mut self, face: Face) {
        self.face = face;
        self.flipping = false;
        self.phase = PhaseMachine::process_event(self.phase, SessionEvent::FlipCompleted(face));
    }

    /// Returns to the pre-flip idle state.
    ///
    /// No-op while flipping. Otherwise the request counter goes back to 0
    /// and the epoch bumps so the animator is rebuilt from scratch.
    ///
    /// # Returns
    /// true if the reset was applied.
    pub fn reset(&mut self) -> bool {
        if self.flipping {
            return false;
        }
        self.face = Face::default();
        self.flip_request_id = 0;
        self.reset_epoch += 1;
        self.phase = PhaseMachine::process_event(self.phase, SessionEvent::ResetRequested);
        true
    }
}

impl Default for FlipSession {
    fn default() -> Self {
        Self::new()
    }
}
