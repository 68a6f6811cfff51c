//! Modular angle arithmetic
//!
//! Pure helpers for working with rotation angles in degrees. Everything here
//! operates on plain floats and has no knowledge of timing or rendering.

/// Full turn in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Normalizes an angle into the `[0, 360)` range.
///
/// Works for negative inputs and inputs beyond a full turn, which happens
/// constantly while the flip accumulates whole spins.
pub fn normalize_deg(angle: f64) -> f64 {
    let m = angle % FULL_TURN_DEG;
    if m < 0.0 { m + FULL_TURN_DEG } else { m }
}

/// Minimal forward (counter-clockwise positive) rotation needed to move from
/// `from` to `to`, both taken modulo 360.
///
/// The result is always in `[0, 360)`: the coin only ever spins forward.
pub fn forward_delta_deg(from: f64, to: f64) -> f64 {
    normalize_deg(to - normalize_deg(from))
}

/// Returns true if two angles land on the same position modulo 360, within
/// `tolerance` degrees.
pub fn congruent_deg(a: f64, b: f64, tolerance: f64) -> bool {
    let d = forward_delta_deg(a, b);
    d <= tolerance || FULL_TURN_DEG - d <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_plain_angles() {
        assert_eq!(normalize_deg(0.0), 0.0);
        assert_eq!(normalize_deg(180.0), 180.0);
        assert_eq!(normalize_deg(359.5), 359.5);
    }

    #[test]
    fn normalize_wraps_past_full_turn() {
        assert_eq!(normalize_deg(360.0), 0.0);
        assert_eq!(normalize_deg(720.0 + 45.0), 45.0);
    }

    #[test]
    fn normalize_handles_negative_angles() {
        assert_eq!(normalize_deg(-90.0), 270.0);
        assert_eq!(normalize_deg(-360.0), 0.0);
        assert_eq!(normalize_deg(-450.0), 270.0);
    }

    #[test]
    fn forward_delta_is_forward_only() {
        assert_eq!(forward_delta_deg(0.0, 180.0), 180.0);
        assert_eq!(forward_delta_deg(180.0, 0.0), 180.0);
        assert_eq!(forward_delta_deg(350.0, 10.0), 20.0);
        assert_eq!(forward_delta_deg(10.0, 350.0), 340.0);
    }

    #[test]
    fn forward_delta_from_accumulated_spin() {
        // A coin that has already spun many turns still computes the short
        // way home.
        assert_eq!(forward_delta_deg(22.0 * 360.0 + 90.0, 180.0), 90.0);
    }

    #[test]
    fn congruence_tolerates_float_drift() {
        assert!(congruent_deg(360.0 * 23.0, 0.0, 1e-6));
        assert!(congruent_deg(179.9999999, 180.0, 1e-6));
        assert!(!congruent_deg(90.0, 180.0, 1.0));
    }
}
