//! Flip rotation timeline
//!
//! A flip is planned up front as a fixed-duration rotation from wherever the
//! coin currently is to an exact landing angle for the drawn face. The
//! rotation runs in two decelerating segments: a fast segment that covers
//! most of the angular distance in a small fraction of the time, then a
//! glide that settles precisely on the landing angle.

use std::time::Duration;

use crate::domain::angle::{forward_delta_deg, FULL_TURN_DEG};
use crate::domain::face::Face;

/// Cubic ease-out: fast start, decelerating finish.
fn ease_out(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Immutable plan for one flip animation.
#[derive(Debug, Clone)]
pub struct FlipTimeline {
    face: Face,
    start_deg: f64,
    mid_deg: f64,
    end_deg: f64,
    total: Duration,
    fast_phase: f64,
}

impl FlipTimeline {
    /// Plans a flip starting at `start_deg` (the animator's running angle,
    /// spins included) that lands exactly on `face`.
    ///
    /// # Arguments
    /// * `spins` - whole extra rotations added for the sense of motion
    /// * `fast_distance` - fraction of the angular distance covered by the
    ///   fast segment (0..1)
    /// * `fast_phase` - fraction of total time spent in the fast segment
    ///   (0..1)
    pub fn plan(
        start_deg: f64,
        face: Face,
        spins: u32,
        fast_distance: f64,
        fast_phase: f64,
        total: Duration,
    ) -> Self {
        let landing_delta = forward_delta_deg(start_deg, face.landing_angle_deg());
        let total_delta = f64::from(spins) * FULL_TURN_DEG + landing_delta;

        Self {
            face,
            start_deg,
            mid_deg: start_deg + total_delta * fast_distance,
            end_deg: start_deg + total_delta,
            total,
            fast_phase,
        }
    }

    /// The face this flip resolves to.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Exact final angle, spins included. Congruent to the face's landing
    /// angle modulo 360.
    pub fn end_deg(&self) -> f64 {
        self.end_deg
    }

    /// Samples the rotation at `elapsed` since the flip began.
    ///
    /// Both segments ease out: the first snaps into speed and decelerates,
    /// the second decelerates further into the landing angle. Elapsed times
    /// past the total clamp to the exact end angle.
    pub fn angle_at(&self, elapsed: Duration) -> f64 {
        let total_secs = self.total.as_secs_f64();
        if total_secs <= 0.0 {
            return self.end_deg;
        }

        let progress = (elapsed.as_secs_f64() / total_secs).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return self.end_deg;
        }

        if progress <= self.fast_phase {
            let t = if self.fast_phase > 0.0 { progress / self.fast_phase } else { 1.0 };
            self.start_deg + (self.mid_deg - self.start_deg) * ease_out(t)
        } else {
            let t = (progress - self.fast_phase) / (1.0 - self.fast_phase);
            self.mid_deg + (self.end_deg - self.mid_deg) * ease_out(t)
        }
    }

    /// True once `elapsed` has reached the planned duration.
    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::angle::congruent_deg;

    fn plan(start: f64, face: Face) -> FlipTimeline {
        FlipTimeline::plan(start, face, 22, 0.78, 0.28, Duration::from_secs(1))
    }

    #[test]
    fn lands_exactly_on_face_angle() {
        for start in [0.0, 37.5, 359.9, -45.0, 22.0 * 360.0 + 123.0] {
            for face in [Face::Heads, Face::Tails] {
                let timeline = plan(start, face);
                assert!(
                    congruent_deg(timeline.end_deg(), face.landing_angle_deg(), 1e-9),
                    "start {start} face {face} ended at {}",
                    timeline.end_deg()
                );
            }
        }
    }

    #[test]
    fn always_rotates_forward_with_all_spins() {
        let timeline = plan(90.0, Face::Heads);
        let delta = timeline.end_deg() - 90.0;
        assert!(delta >= 22.0 * 360.0);
        assert!(delta < 23.0 * 360.0);
    }

    #[test]
    fn sampling_is_monotonic() {
        let timeline = plan(10.0, Face::Tails);
        let mut last = timeline.angle_at(Duration::ZERO);
        for ms in (0..=1000).step_by(10) {
            let angle = timeline.angle_at(Duration::from_millis(ms));
            assert!(angle >= last - 1e-9, "rotation went backwards at {ms}ms");
            last = angle;
        }
    }

    #[test]
    fn fast_segment_covers_most_of_the_distance() {
        let timeline = plan(0.0, Face::Heads);
        let at_fast_end = timeline.angle_at(Duration::from_millis(280));
        let covered = (at_fast_end - 0.0) / (timeline.end_deg() - 0.0);
        // Ease-out reaches the segment target exactly at the boundary.
        assert!((covered - 0.78).abs() < 1e-6, "covered {covered}");
    }

    #[test]
    fn clamps_past_the_end() {
        let timeline = plan(5.0, Face::Tails);
        assert_eq!(timeline.angle_at(Duration::from_secs(2)), timeline.end_deg());
        assert!(timeline.is_complete(Duration::from_secs(1)));
        assert!(!timeline.is_complete(Duration::from_millis(999)));
    }

    #[test]
    fn starts_where_the_coin_was() {
        let timeline = plan(123.0, Face::Heads);
        assert!((timeline.angle_at(Duration::ZERO) - 123.0).abs() < 1e-9);
    }
}
