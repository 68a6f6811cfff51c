//! Scene layout and hit testing
//!
//! Computes the fixed positions of every interactive element once, then
//! answers pointer hit tests against them. Layout is separate from
//! rendering so hit testing stays pure and testable.

use crate::domain::geometry::Rect;
use crate::input::{Control, NavAction};

/// Window dimensions the scene is designed for.
pub const SCENE_WIDTH: u32 = 640;
pub const SCENE_HEIGHT: u32 = 760;

const NAV_ACTIONS: [NavAction; 4] =
    [NavAction::Flip, NavAction::Reset, NavAction::Theme, NavAction::Info];

/// Fixed positions of every element in the window.
#[derive(Debug, Clone)]
pub struct SceneLayout {
    pub width: f32,
    pub height: f32,
    /// Title plaque at the top; clicking it resets to idle.
    pub title: Rect,
    /// Bounding box of the coin; hit tests use the inscribed circle.
    pub coin: Rect,
    /// Result line under the coin.
    pub result: Rect,
    /// "Flip again" pill button.
    pub flip_button: Rect,
    /// Nav icon cells, left to right.
    pub nav: [(NavAction, Rect); 4],
    /// Info dialog panel (when open).
    pub dialog: Rect,
}

impl SceneLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let cx = width / 2.0;

        let title = Rect::new(cx - 150.0, 36.0, 300.0, 72.0);

        let coin_size = 300.0;
        let coin = Rect::new(cx - coin_size / 2.0, 150.0, coin_size, coin_size);

        let result = Rect::new(cx - 110.0, coin.bottom() + 22.0, 220.0, 28.0);

        let flip_button = Rect::new(cx - 110.0, result.bottom() + 26.0, 220.0, 56.0);

        let icon = 44.0;
        let gap = 18.0;
        let row_w = 4.0 * icon + 3.0 * gap;
        let row_y = flip_button.bottom() + 34.0;
        let mut nav = [(NavAction::Flip, Rect::new(0.0, 0.0, icon, icon)); 4];
        for (i, action) in NAV_ACTIONS.into_iter().enumerate() {
            let x = cx - row_w / 2.0 + (icon + gap) * i as f32;
            nav[i] = (action, Rect::new(x, row_y, icon, icon));
        }

        let dialog = Rect::new(cx - 210.0, height / 2.0 - 150.0, 420.0, 300.0);

        Self { width, height, title, coin, result, flip_button, nav, dialog }
    }

    /// Finds the control under the pointer.
    ///
    /// With the info dialog open every click lands on the dialog (it is
    /// modal and any click closes it). The coin hit test uses the inscribed
    /// circle, not the bounding box.
    pub fn hit_test(&self, px: f32, py: f32, dialog_open: bool) -> Option<Control> {
        if dialog_open {
            return Some(Control::Dialog);
        }

        let (cx, cy) = self.coin.center();
        let radius = self.coin.w / 2.0;
        let (dx, dy) = (px - cx, py - cy);
        if dx * dx + dy * dy <= radius * radius {
            return Some(Control::Coin);
        }

        if self.flip_button.contains_point(px, py) {
            return Some(Control::FlipButton);
        }
        if self.title.contains_point(px, py) {
            return Some(Control::Title);
        }
        for (action, rect) in &self.nav {
            if rect.contains_point(px, py) {
                return Some(Control::Nav(*action));
            }
        }
        None
    }
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::new(SCENE_WIDTH as f32, SCENE_HEIGHT as f32)
    }
}
