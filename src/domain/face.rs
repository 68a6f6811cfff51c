//! Coin face type and outcome mapping
//!
//! The face is the single user-visible result of a flip. The parity rule and
//! the landing angles are fixed: an even random draw lands heads (0°), an
//! odd draw lands tails (180°).

use std::fmt;

/// The two faces of the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Heads,
    Tails,
}

impl Face {
    /// Maps a raw random draw to a face. Even → heads, odd → tails.
    pub fn from_draw(raw: u32) -> Self {
        if raw % 2 == 0 { Face::Heads } else { Face::Tails }
    }

    /// Rotation angle (mod 360) at which this face shows to the viewer.
    pub fn landing_angle_deg(self) -> f64 {
        match self {
            Face::Heads => 0.0,
            Face::Tails => 180.0,
        }
    }

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Face::Heads => "Heads",
            Face::Tails => "Tails",
        }
    }
}

impl Default for Face {
    /// The coin rests heads-up before the first flip and after a reset.
    fn default() -> Self {
        Face::Heads
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
