//! Theme presets
//!
//! Two presets, light and warm, toggled from the nav row. Not persisted.

use tiny_skia::Color;

/// Which of the two presets is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Warm,
}

impl ThemeKind {
    /// The other preset.
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Warm,
            ThemeKind::Warm => ThemeKind::Light,
        }
    }
}

impl Default for ThemeKind {
    fn default() -> Self {
        ThemeKind::Light
    }
}

/// Resolved colors for a theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub glow: Color,
    pub gold: Color,
    pub cream: Color,
    pub ink: Color,
    pub ink_soft: Color,
    pub panel: Color,
}

impl Palette {
    pub fn for_theme(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self {
                background: Color::from_rgba8(0xfb, 0xfa, 0xf6, 0xff),
                glow: Color::from_rgba8(0xff, 0xf4, 0xd6, 0xf2),
                gold: Color::from_rgba8(0xd4, 0xaf, 0x37, 0xff),
                cream: Color::from_rgba8(0xff, 0xf8, 0xe3, 0xff),
                ink: Color::from_rgba8(0x2b, 0x24, 0x18, 0xff),
                ink_soft: Color::from_rgba8(0x3b, 0x33, 0x24, 0xb3),
                panel: Color::from_rgba8(0xff, 0xff, 0xff, 0xf0),
            },
            ThemeKind::Warm => Self {
                background: Color::from_rgba8(0xf8, 0xf1, 0xdf, 0xff),
                glow: Color::from_rgba8(0xff, 0xee, 0xc4, 0xeb),
                gold: Color::from_rgba8(0xd4, 0xaf, 0x37, 0xff),
                cream: Color::from_rgba8(0xff, 0xf4, 0xd6, 0xff),
                ink: Color::from_rgba8(0x2b, 0x24, 0x18, 0xff),
                ink_soft: Color::from_rgba8(0x3b, 0x33, 0x24, 0xb3),
                panel: Color::from_rgba8(0xff, 0xfb, 0xef, 0xf0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates() {
        assert_eq!(ThemeKind::Light.toggled(), ThemeKind::Warm);
        assert_eq!(ThemeKind::Warm.toggled(), ThemeKind::Light);
        assert_eq!(ThemeKind::Light.toggled().toggled(), ThemeKind::Light);
    }

    #[test]
    fn default_theme_is_light() {
        assert_eq!(ThemeKind::default(), ThemeKind::Light);
    }
}
