//! Primary/fallback input debounce
//!
//! Pointer-down is the primary flip trigger because it fires before the
//! platform's synthesized click. The click/keyboard path stays as an
//! accessibility fallback, but when it fires right after a pointer-down it
//! is the same physical action and must not dispatch a second trigger.

use std::time::{Duration, Instant};

/// Suppresses the fallback input path within a fixed window after the
/// primary path handled the same interaction.
#[derive(Debug)]
pub struct DebounceGuard {
    window: Duration,
    last_primary: Option<Instant>,
}

impl DebounceGuard {
    pub fn new(window: Duration) -> Self {
        Self { window, last_primary: None }
    }

    /// Records that the primary path handled an interaction at `now`.
    pub fn note_primary(&mut self, now: Instant) {
        self.last_primary = Some(now);
    }

    /// Whether a fallback event at `now` is an independent interaction.
    ///
    /// Returns false while `now` is within the window of the last primary
    /// event; such events are duplicates of an already-handled action.
    pub fn allow_fallback(&self, now: Instant) -> bool {
        match self.last_primary {
            Some(primary) => now.saturating_duration_since(primary) >= self.window,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(450);

    #[test]
    fn fallback_allowed_without_primary() {
        let guard = DebounceGuard::new(WINDOW);
        assert!(guard.allow_fallback(Instant::now()));
    }

    #[test]
    fn duplicate_within_window_is_suppressed() {
        let t0 = Instant::now();
        let mut guard = DebounceGuard::new(WINDOW);
        guard.note_primary(t0);

        assert!(!guard.allow_fallback(t0));
        assert!(!guard.allow_fallback(t0 + Duration::from_millis(449)));
    }

    #[test]
    fn independent_trigger_after_window() {
        let t0 = Instant::now();
        let mut guard = DebounceGuard::new(WINDOW);
        guard.note_primary(t0);

        assert!(guard.allow_fallback(t0 + WINDOW));
        assert!(guard.allow_fallback(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn window_restarts_on_each_primary() {
        let t0 = Instant::now();
        let mut guard = DebounceGuard::new(WINDOW);
        guard.note_primary(t0);
        guard.note_primary(t0 + Duration::from_millis(400));

        // Measured from the latest primary, not the first.
        assert!(!guard.allow_fallback(t0 + Duration::from_millis(800)));
        assert!(guard.allow_fallback(t0 + Duration::from_millis(850)));
    }
}
