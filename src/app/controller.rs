//! Flip orchestration
//!
//! The controller owns the user-facing session state, the audio pipeline,
//! the debounce guard, and the animator, and wires them together:
//!
//! * a trigger plays sound first, then commits the flip on the next frame
//!   boundary behind an atomic not-already-flipping check;
//! * the animator reports completion, which updates the displayed face and
//!   clears the flipping lock;
//! * reset discards the animator entirely so the idle loop restarts clean.

use std::time::Instant;

use crate::app::animator::CoinAnimator;
use crate::app::state::FlipSession;
use crate::audio::AudioPipeline;
use crate::config::FlipTuning;
use crate::domain::outcome::{EntropyOutcomeSource, OutcomeSource};
use crate::input::{Control, DebounceGuard, KeyAction, NavAction};
use crate::ui::{SceneSnapshot, ThemeKind};

/// Page-level controller for the coin flip.
pub struct FlipController {
    tuning: FlipTuning,
    session: FlipSession,
    theme: ThemeKind,
    info_open: bool,
    animator: CoinAnimator,
    outcome: Box<dyn OutcomeSource>,
    audio: AudioPipeline,
    debounce: DebounceGuard,
    /// Trigger accepted; the actual lock-and-start happens on the next
    /// frame tick so overlapping input events cannot double-commit.
    flip_commit_queued: bool,
    /// One-shot audio priming on the first interaction of the session.
    primed: bool,
}

impl FlipController {
    pub fn new(tuning: FlipTuning, now: Instant) -> Self {
        let animator = CoinAnimator::new(&tuning, now);
        let audio = AudioPipeline::new(&tuning);
        let debounce = DebounceGuard::new(tuning.debounce_window);
        Self {
            tuning,
            session: FlipSession::new(),
            theme: ThemeKind::default(),
            info_open: false,
            animator,
            outcome: Box::new(EntropyOutcomeSource::new()),
            audio,
            debounce,
            flip_commit_queued: false,
            primed: false,
        }
    }

    #[cfg(test)]
    fn with_outcome(tuning: FlipTuning, now: Instant, outcome: Box<dyn OutcomeSource>) -> Self {
        let mut controller = Self::new(tuning, now);
        controller.outcome = outcome;
        controller
    }

    pub fn session(&self) -> &FlipSession {
        &self.session
    }

    pub fn info_open(&self) -> bool {
        self.info_open
    }

    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    /// First-interaction hook: claims the audio device and starts the
    /// decode so the first flip's sound is instant. Detaches itself after
    /// one use.
    pub fn note_interaction(&mut self) {
        if self.primed {
            return;
        }
        self.primed = true;
        self.audio.prime();
    }

    /// Early preload, called once at startup. Does not touch the device.
    pub fn preload_audio(&mut self) {
        self.audio.ensure_loaded();
    }

    /// The single entry point for starting a flip.
    ///
    /// No-op if a flip is in progress. Otherwise sound is kicked first
    /// (audio-first contract) and the state commit is deferred to the next
    /// frame tick.
    pub fn trigger_flip(&mut self) {
        if self.session.flipping {
            return;
        }

        self.audio.kick();
        self.flip_commit_queued = true;
    }

    /// Primary input path (pointer-down). Records the timestamp used to
    /// suppress the synthesized fallback event for the same action.
    pub fn trigger_flip_pointer(&mut self, now: Instant) {
        self.debounce.note_primary(now);
        self.trigger_flip();
    }

    /// Fallback input path (click synthesis, keyboard activation). Skipped
    /// entirely when it duplicates a recent primary trigger.
    pub fn trigger_flip_click(&mut self, now: Instant) {
        if !self.debounce.allow_fallback(now) {
            return;
        }
        self.trigger_flip();
    }

    /// Returns to the pre-flip idle state. No-op while flipping.
    ///
    /// The animator is replaced outright, not rewound, so the idle loop
    /// restarts at its natural slow speed from angle 0.
    pub fn reset_to_idle(&mut self, now: Instant) {
        if !self.session.reset() {
            return;
        }
        self.info_open = false;
        self.animator = CoinAnimator::new(&self.tuning, now);
        tracing::debug!(epoch = self.session.reset_epoch, "reset to idle");
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn open_info(&mut self) {
        self.info_open = true;
    }

    pub fn close_info(&mut self) {
        self.info_open = false;
    }

    /// Dispatches a nav-row action.
    pub fn handle_nav(&mut self, action: NavAction, now: Instant) {
        match action {
            NavAction::Flip => self.trigger_flip(),
            NavAction::Reset => self.reset_to_idle(now),
            NavAction::Theme => self.toggle_theme(),
            NavAction::Info => self.open_info(),
        }
    }

    /// Dispatches a pointer-down that hit `control`.
    pub fn handle_pointer_down(&mut self, control: Control, now: Instant) {
        match control {
            Control::Coin | Control::FlipButton => self.trigger_flip_pointer(now),
            Control::Title => self.reset_to_idle(now),
            Control::Nav(action) => self.handle_nav(action, now),
            Control::Dialog => self.close_info(),
        }
    }

    /// Dispatches a keyboard action.
    pub fn handle_key(&mut self, action: KeyAction, now: Instant) {
        match action {
            KeyAction::FlipFallback => self.trigger_flip_click(now),
            KeyAction::Nav(action) => self.handle_nav(action, now),
            KeyAction::CloseDialog => self.close_info(),
        }
    }

    /// Per-frame tick, called once before rendering each frame.
    ///
    /// Commits a queued flip behind the atomic flipping check, advances the
    /// animation, applies a completed flip's result, and polls the audio
    /// pipeline.
    pub fn on_frame(&mut self, now: Instant) {
        self.audio.poll();

        if std::mem::take(&mut self.flip_commit_queued) {
            if self.session.begin_flip().is_some() {
                // Session lock and animator gate agree by construction: the
                // lock is only released by the completion tick below.
                self.animator.begin_flip(self.outcome.as_mut(), now);
            }
        }

        if let Some(face) = self.animator.tick(now) {
            self.session.complete_flip(face);
        }
    }

    /// Snapshot of everything the renderer needs for this frame.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            angle_deg: self.animator.display_angle_deg(),
            face: self.session.face,
            flipping: self.session.flipping,
            has_ever_flipped: self.animator.has_ever_flipped(),
            theme: self.theme,
            info_open: self.info_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::CoinPhase;
    use crate::domain::face::Face;
    use crate::domain::outcome::FixedOutcomeSource;
    use std::time::Duration;

    fn controller_with_draws(draws: Vec<u32>, now: Instant) -> FlipController {
        FlipController::with_outcome(
            FlipTuning::default(),
            now,
            Box::new(FixedOutcomeSource::new(draws)),
        )
    }

    fn flip_total() -> Duration {
        FlipTuning::default().flip_total
    }

    #[test]
    fn starts_idle_heads_with_zero_request_id() {
        let t0 = Instant::now();
        let controller = controller_with_draws(vec![0], t0);
        let session = controller.session();
        assert_eq!(session.face, Face::Heads);
        assert_eq!(session.flip_request_id, 0);
        assert!(!session.flipping);
        assert_eq!(session.phase(), CoinPhase::Idle);
    }

    #[test]
    fn even_draw_flip_end_to_end() {
        let t0 = Instant::now();
        let mut controller = controller_with_draws(vec![8], t0);

        controller.trigger_flip();
        // Nothing committed until the frame boundary.
        assert_eq!(controller.session().flip_request_id, 0);
        assert!(!controller.session().flipping);

        controller.on_frame(t0);
        assert_eq!(controller.session().flip_request_id, 1);
        assert!(controller.session().flipping);

        controller.on_frame(t0 + flip_total());
        let session = controller.session();
        assert!(!session.flipping);
        assert_eq!(session.face, Face::Heads);
        assert_eq!(session.phase(), CoinPhase::Settled);
        assert!(controller.snapshot().has_ever_flipped);
        assert!((controller.snapshot().angle_deg - 0.0).abs() < 1e-6);
    }

    #[test]
    fn odd_draw_lands_tails() {
        let t0 = Instant::now();
        let mut controller = controller_with_draws(vec![3], t0);

        controller.trigger_flip();
        controller.on_frame(t0);
        controller.on_frame(t0 + flip_total());

        assert_eq!(controller.session().face, Face::Tails);
        assert!((controller.snapshot().angle_deg - 180.0).abs() < 1e-6);
    }

    #[test]
    fn triggers_while_flipping_are_ignored() {
        let t0 = Instant::now();
        let mut controller = controller_with_draws(vec![0, 1, 1, 1], t0);

        controller.trigger_flip();
        controller.on_frame(t0);
        assert_eq!(controller.session().flip_request_id, 1);

        // Hammer the trigger mid-flip through every path.
        let mid = t0 + Duration::from_millis(500);
        controller.trigger_flip();
        controller.trigger_flip_pointer(mid);
        controller.handle_nav(NavAction::Flip, mid);
        controller.on_frame(mid);

        assert_eq!(controller.session().flip_request_id, 1);
        assert!(controller.session().flipping);

        // The original flip still completes with its own draw.
        controller.on_frame(t0 + flip_total());
        assert_eq!(controller.session().face, Face::Heads);
    }

    #[test]
    fn overlapping_commit_and_frame_is_single_flip() {
        let t0 = Instant::now();
        let mut controller = controller_with_draws(vec![0], t0);

        // Pointer-down and its synthesized click both queue before the
        // next frame; only one commit happens.
        controller.trigger_flip_pointer(t0);
        controller.trigger_flip_click(t0 + Duration::from_millis(10));
        controller.on_frame(t0 + Duration::from_millis(16));

        assert_eq!(controller.session().flip_request_id, 1);
    }

    #[test]
    fn debounce_suppresses_fallback_within_window() {
        let t0 = Instant::now();
        let mut controller = controller_with_draws(vec![0, 1], t0);

        controller.trigger_flip_pointer(t0);
        controller.on_frame(t0);
        controller.on_frame(t0 + flip_total());
        assert_eq!(controller.session().flip_request_id, 1);

        // Fallback event 200ms after the pointer event: same action.
        controller.trigger_flip_click(t0 + Duration::from_millis(200));
        controller.on_frame(t0 + Duration::from_millis(200) + flip_total());
        assert_eq!(controller.session().flip_request_id, 1);

        // An independent fallback past the window triggers normally.
        let later = t0 + Duration::from_secs(3);
        controller.trigger_flip_click(later);
        controller.on_frame(later);
        assert_eq!(controller.session().flip_request_id, 2);
    }

    #[test]
    fn reset_after_flip_restarts_clean_idle() {
        let t0 = Instant::now();
        let mut controller = controller_with_draws(vec![1], t0);

        controller.trigger_flip();
        controller.on_frame(t0);
        controller.on_frame(t0 + flip_total());
        controller.open_info();

        let reset_at = t0 + Duration::from_secs(2);
        controller.reset_to_idle(reset_at);

        let session = controller.session();
        assert_eq!(session.face, Face::Heads);
        assert_eq!(session.flip_request_id, 0);
        assert_eq!(session.reset_epoch, 1);
        assert!(!controller.info_open());
        assert_eq!(session.phase(), CoinPhase::Idle);

        // Fresh idle loop: angle 0 at the reset instant, nominal speed after.
        controller.on_frame(reset_at);
        assert_eq!(controller.snapshot().angle_deg, 0.0);
        assert!(!controller.snapshot().has_ever_flipped);

        let quarter = FlipTuning::default().idle_rotate / 4;
        controller.on_frame(reset_at + quarter);
        assert!((controller.snapshot().angle_deg - 90.0).abs() < 1e-6);
    }

    #[test]
    fn reset_is_refused_mid_flip() {
        let t0 = Instant::now();
        let mut controller = controller_with_draws(vec![0], t0);

        controller.trigger_flip();
        controller.on_frame(t0);
        controller.reset_to_idle(t0 + Duration::from_millis(300));

        assert!(controller.session().flipping);
        assert_eq!(controller.session().reset_epoch, 0);
    }

    #[test]
    fn nav_actions_dispatch() {
        let t0 = Instant::now();
        let mut controller = controller_with_draws(vec![0], t0);

        controller.handle_nav(NavAction::Theme, t0);
        assert_eq!(controller.theme(), ThemeKind::Warm);

        controller.handle_nav(NavAction::Info, t0);
        assert!(controller.info_open());

        controller.handle_pointer_down(Control::Dialog, t0);
        assert!(!controller.info_open());
    }

    #[test]
    fn keyboard_flip_uses_fallback_path() {
        let t0 = Instant::now();
        let mut controller = controller_with_draws(vec![0, 1], t0);

        // A pointer flip just happened; Space right after must not double.
        controller.trigger_flip_pointer(t0);
        controller.handle_key(KeyAction::FlipFallback, t0 + Duration::from_millis(100));
        controller.on_frame(t0);

        assert_eq!(controller.session().flip_request_id, 1);
    }

    #[test]
    fn priming_is_one_shot() {
        let t0 = Instant::now();
        let mut controller = controller_with_draws(vec![0], t0);
        assert!(!controller.primed);
        // Cannot touch a real device in tests; just verify the latch.
        controller.primed = true;
        controller.note_interaction();
        assert!(controller.primed);
    }
}
