//! Presentation layer
//!
//! Theme palettes, the fixed scene layout with pointer hit testing, and the
//! tiny-skia painter. Everything here is stateless with respect to the flip:
//! the renderer consumes a per-frame snapshot produced by the controller.

pub mod renderer;
pub mod scene;
pub mod theme;

pub use renderer::{CoinRenderer, RenderError};
pub use scene::SceneLayout;
pub use theme::ThemeKind;

use crate::domain::face::Face;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneSnapshot {
    /// Rotation of the coin, normalized to `[0, 360)`.
    pub angle_deg: f64,
    /// Last resolved (or default) face, shown in the result line.
    pub face: Face,
    /// True while a flip animation is running; dims the controls.
    pub flipping: bool,
    /// False until the first flip completes; hides the result line during
    /// the initial idle spin.
    pub has_ever_flipped: bool,
    pub theme: ThemeKind,
    pub info_open: bool,
}
