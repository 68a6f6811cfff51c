//! Input mapping layer
//!
//! Translates raw window events into the application's abstract controls.
//! Pointer events are hit-tested by the scene; keyboard events map to the
//! same actions here. Keyboard activation counts as the fallback "click"
//! path and is subject to the debounce guard.

pub mod debounce;

pub use debounce::DebounceGuard;

use winit::event::VirtualKeyCode;

/// Actions exposed by the icon navigation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Flip,
    Reset,
    Theme,
    Info,
}

/// Interactive controls a pointer can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The coin itself (primary flip trigger).
    Coin,
    /// The "flip again" button below the coin.
    FlipButton,
    /// The title plaque (resets to idle).
    Title,
    /// One of the nav icons.
    Nav(NavAction),
    /// Anywhere on an open info dialog (closes it).
    Dialog,
}

/// Maps a pressed key to an action, if any.
///
/// Space/Enter activate the flip (fallback path), `R` resets, `T` toggles
/// the theme, `I` opens the info dialog, Escape closes it.
pub fn action_for_key(key: VirtualKeyCode) -> Option<KeyAction> {
    match key {
        VirtualKeyCode::Space | VirtualKeyCode::Return => Some(KeyAction::FlipFallback),
        VirtualKeyCode::R => Some(KeyAction::Nav(NavAction::Reset)),
        VirtualKeyCode::T => Some(KeyAction::Nav(NavAction::Theme)),
        VirtualKeyCode::I => Some(KeyAction::Nav(NavAction::Info)),
        VirtualKeyCode::Escape => Some(KeyAction::CloseDialog),
        _ => None,
    }
}

/// Keyboard-originated actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Flip via keyboard activation; goes through the debounce guard.
    FlipFallback,
    Nav(NavAction),
    CloseDialog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_keys_flip() {
        assert_eq!(action_for_key(VirtualKeyCode::Space), Some(KeyAction::FlipFallback));
        assert_eq!(action_for_key(VirtualKeyCode::Return), Some(KeyAction::FlipFallback));
    }

    #[test]
    fn nav_keys_map_to_actions() {
        assert_eq!(action_for_key(VirtualKeyCode::R), Some(KeyAction::Nav(NavAction::Reset)));
        assert_eq!(action_for_key(VirtualKeyCode::T), Some(KeyAction::Nav(NavAction::Theme)));
        assert_eq!(action_for_key(VirtualKeyCode::I), Some(KeyAction::Nav(NavAction::Info)));
        assert_eq!(action_for_key(VirtualKeyCode::Escape), Some(KeyAction::CloseDialog));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(action_for_key(VirtualKeyCode::Q), None);
        assert_eq!(action_for_key(VirtualKeyCode::F12), None);
    }
}
