//! Scene painter
//!
//! Draws the whole window with tiny-skia: background wash, title plaque,
//! the coin (an ellipse whose apparent width follows the cosine of the
//! rotation angle, so a half turn reads as a 3-D flip), result line, flip
//! button, nav icons, and the info dialog. Invalid geometry is skipped
//! rather than treated as an error, matching how little can actually go
//! wrong here.

use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, Rect as SkiaRect, Stroke, Transform,
};

use crate::domain::face::Face;
use crate::domain::geometry::Rect;
use crate::input::NavAction;
use crate::ui::scene::SceneLayout;
use crate::ui::theme::Palette;
use crate::ui::SceneSnapshot;

/// Rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create pixmap for rendering")]
    PixmapCreationFailed,

    #[error("output frame is {actual} bytes, expected {expected}")]
    FrameSizeMismatch { expected: usize, actual: usize },
}

/// Coin edge threshold: below this apparent width the coin reads edge-on.
const EDGE_ON: f32 = 0.05;

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::from_rgba(color.red(), color.green(), color.blue(), alpha).unwrap_or(color)
}

/// Transform that scales around (`cx`, `cy`) instead of the origin.
fn squash_about(cx: f32, cy: f32, sx: f32, sy: f32) -> Transform {
    Transform::from_translate(cx, cy)
        .pre_scale(sx, sy)
        .pre_translate(-cx, -cy)
}

/// Scene painter with a persistent backing pixmap.
pub struct CoinRenderer {
    pixmap: Pixmap,
}

impl CoinRenderer {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapCreationFailed)?;
        Ok(Self { pixmap })
    }

    /// Paints one frame of the scene.
    pub fn render(&mut self, scene: &SceneLayout, snap: &SceneSnapshot) {
        let palette = Palette::for_theme(snap.theme);

        self.pixmap.fill(palette.background);
        self.draw_background_wash(scene, &palette);
        self.draw_title(scene, &palette, snap.flipping);
        self.draw_coin(scene, &palette, snap);
        if snap.has_ever_flipped {
            self.draw_result_line(scene, &palette, snap.face);
        }
        self.draw_flip_button(scene, &palette, snap.flipping);
        self.draw_nav_row(scene, &palette, snap.flipping);
        if snap.info_open {
            self.draw_dialog(scene, &palette);
        }
    }

    /// Raw RGBA bytes of the last rendered frame.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Copies the last frame into an output buffer of the same size.
    pub fn copy_to(&self, frame: &mut [u8]) -> Result<(), RenderError> {
        let data = self.pixmap.data();
        if frame.len() != data.len() {
            return Err(RenderError::FrameSizeMismatch {
                expected: data.len(),
                actual: frame.len(),
            });
        }
        frame.copy_from_slice(data);
        Ok(())
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color, transform: Transform) {
        let mut pb = PathBuilder::new();
        pb.push_circle(cx, cy, r);
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color(color);
            paint.anti_alias = true;
            self.pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
    }

    fn stroke_circle(&mut self, cx: f32, cy: f32, r: f32, width: f32, color: Color, transform: Transform) {
        let mut pb = PathBuilder::new();
        pb.push_circle(cx, cy, r);
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color(color);
            paint.anti_alias = true;
            let stroke = Stroke { width, ..Stroke::default() };
            self.pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(r) = SkiaRect::from_xywh(rect.x, rect.y, rect.w, rect.h) {
            let mut pb = PathBuilder::new();
            pb.push_rect(r);
            if let Some(path) = pb.finish() {
                let mut paint = Paint::default();
                paint.set_color(color);
                paint.anti_alias = true;
                self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        if let Some(r) = SkiaRect::from_xywh(rect.x, rect.y, rect.w, rect.h) {
            let mut pb = PathBuilder::new();
            pb.push_rect(r);
            if let Some(path) = pb.finish() {
                let mut paint = Paint::default();
                paint.set_color(color);
                paint.anti_alias = true;
                let stroke = Stroke { width, ..Stroke::default() };
                self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    /// Pill: a rect with circular ends.
    fn fill_pill(&mut self, rect: Rect, color: Color) {
        let r = rect.h / 2.0;
        self.fill_rect(Rect::new(rect.x + r, rect.y, rect.w - 2.0 * r, rect.h), color);
        self.fill_circle(rect.x + r, rect.y + r, r, color, Transform::identity());
        self.fill_circle(rect.right() - r, rect.y + r, r, color, Transform::identity());
    }

    fn draw_background_wash(&mut self, scene: &SceneLayout, palette: &Palette) {
        // Soft radial-ish accents in opposite corners, like the page wash.
        self.fill_circle(
            scene.width * 0.2,
            scene.height * 0.1,
            scene.width * 0.55,
            with_alpha(palette.glow, 0.45),
            Transform::identity(),
        );
        self.fill_circle(
            scene.width * 0.8,
            scene.height * 0.85,
            scene.width * 0.5,
            with_alpha(palette.gold, 0.10),
            Transform::identity(),
        );
    }

    fn draw_title(&mut self, scene: &SceneLayout, palette: &Palette, flipping: bool) {
        let alpha = if flipping { 0.7 } else { 1.0 };
        self.fill_rect(scene.title, with_alpha(palette.cream, alpha));
        self.stroke_rect(scene.title, 2.0, with_alpha(palette.gold, alpha));

        // Decorative medallions on the plaque.
        let (cx, cy) = scene.title.center();
        for dx in [-60.0, 0.0, 60.0] {
            self.fill_circle(cx + dx, cy, 10.0, with_alpha(palette.gold, alpha), Transform::identity());
        }
    }

    fn draw_coin(&mut self, scene: &SceneLayout, palette: &Palette, snap: &SceneSnapshot) {
        let (cx, cy) = scene.coin.center();
        let radius = scene.coin.w / 2.0;

        let theta = snap.angle_deg.to_radians();
        let cos = theta.cos();
        let apparent = (cos.abs() as f32).max(0.0);

        // Ground shadow, slightly narrower while the coin is edge-on.
        let shadow_w = radius * (0.55 + 0.35 * apparent);
        let shadow_y = scene.coin.bottom() + 16.0;
        self.fill_circle(
            cx,
            shadow_y,
            shadow_w,
            with_alpha(palette.ink, 0.12),
            squash_about(cx, shadow_y, 1.0, 0.12),
        );

        if apparent <= EDGE_ON {
            // Edge-on: just the rim as a thin gold lens.
            let squash = squash_about(cx, cy, EDGE_ON, 1.0);
            self.fill_circle(cx, cy, radius, palette.gold, squash);
            return;
        }

        let squash = squash_about(cx, cy, apparent, 1.0);

        // Rim, then face disc inset into it.
        self.fill_circle(cx, cy, radius, palette.gold, squash);
        let face_color = if cos >= 0.0 { palette.cream } else { palette.glow };
        self.fill_circle(cx, cy, radius - 7.0, face_color, squash);
        self.stroke_circle(cx, cy, radius - 16.0, 3.0, with_alpha(palette.gold, 0.8), squash);

        // The side showing to the viewer: front is heads, back is tails.
        if cos >= 0.0 {
            self.draw_heads_motif(cx, cy, radius, palette, squash);
        } else {
            self.draw_tails_motif(cx, cy, radius, palette, squash);
        }
    }

    /// Heads: a paw — center pad plus three toes.
    fn draw_heads_motif(&mut self, cx: f32, cy: f32, radius: f32, palette: &Palette, squash: Transform) {
        let pad = radius * 0.30;
        self.fill_circle(cx, cy + pad * 0.5, pad, palette.gold, squash);
        for (dx, dy) in [(-0.42, -0.30), (0.0, -0.45), (0.42, -0.30)] {
            self.fill_circle(
                cx + dx * radius,
                cy + dy * radius,
                radius * 0.14,
                palette.gold,
                squash,
            );
        }
    }

    /// Tails: two horizontal bars inside a ring.
    fn draw_tails_motif(&mut self, cx: f32, cy: f32, radius: f32, palette: &Palette, squash: Transform) {
        self.stroke_circle(cx, cy, radius * 0.55, 4.0, palette.gold, squash);
        for dy in [-0.12, 0.12] {
            let bar = Rect::new(cx - radius * 0.34, cy + dy * radius - 5.0, radius * 0.68, 10.0);
            if let Some(r) = SkiaRect::from_xywh(bar.x, bar.y, bar.w, bar.h) {
                let mut pb = PathBuilder::new();
                pb.push_rect(r);
                if let Some(path) = pb.finish() {
                    let mut paint = Paint::default();
                    paint.set_color(palette.gold);
                    paint.anti_alias = true;
                    self.pixmap.fill_path(&path, &paint, FillRule::Winding, squash, None);
                }
            }
        }
    }

    fn draw_result_line(&mut self, scene: &SceneLayout, palette: &Palette, face: Face) {
        let (_, cy) = scene.result.center();

        // Face dot: gold for heads, ink for tails.
        let dot = match face {
            Face::Heads => palette.gold,
            Face::Tails => palette.ink,
        };
        self.fill_circle(scene.result.x + 14.0, cy, 9.0, dot, Transform::identity());

        let bar = Rect::new(scene.result.x + 34.0, cy - 5.0, scene.result.w - 48.0, 10.0);
        self.fill_pill(bar, with_alpha(palette.ink_soft, 0.5));
    }

    fn draw_flip_button(&mut self, scene: &SceneLayout, palette: &Palette, flipping: bool) {
        let alpha = if flipping { 0.5 } else { 1.0 };
        self.fill_pill(scene.flip_button, with_alpha(palette.cream, alpha));

        let r = scene.flip_button.h / 2.0;
        self.stroke_circle(
            scene.flip_button.x + r,
            scene.flip_button.y + r,
            r - 1.0,
            2.0,
            with_alpha(palette.gold, 0.55 * alpha),
            Transform::identity(),
        );
        self.stroke_circle(
            scene.flip_button.right() - r,
            scene.flip_button.y + r,
            r - 1.0,
            2.0,
            with_alpha(palette.gold, 0.55 * alpha),
            Transform::identity(),
        );

        // Label placeholder bar.
        let (bx, by) = scene.flip_button.center();
        let label = Rect::new(bx - 56.0, by - 5.0, 112.0, 10.0);
        self.fill_pill(label, with_alpha(palette.ink, 0.75 * alpha));
    }

    fn draw_nav_row(&mut self, scene: &SceneLayout, palette: &Palette, flipping: bool) {
        for (action, cell) in scene.nav {
            // The flip icon dims while a flip is running; it is a no-op then.
            let alpha = if flipping && action == NavAction::Flip { 0.4 } else { 1.0 };
            self.fill_rect(cell, with_alpha(palette.cream, alpha));
            self.stroke_rect(cell, 1.5, with_alpha(palette.gold, alpha));

            let (cx, cy) = cell.center();
            let ink = with_alpha(palette.ink, alpha);
            match action {
                NavAction::Flip => {
                    self.stroke_circle(cx, cy, 11.0, 2.5, ink, Transform::identity());
                    self.fill_circle(cx + 9.0, cy - 9.0, 3.5, ink, Transform::identity());
                }
                NavAction::Reset => {
                    self.stroke_rect(Rect::new(cx - 9.0, cy - 9.0, 18.0, 18.0), 2.5, ink);
                }
                NavAction::Theme => {
                    self.stroke_circle(cx, cy, 11.0, 2.0, ink, Transform::identity());
                    self.fill_circle(cx - 4.0, cy, 7.0, ink, Transform::identity());
                }
                NavAction::Info => {
                    self.fill_circle(cx, cy - 8.0, 3.0, ink, Transform::identity());
                    self.fill_rect(Rect::new(cx - 2.5, cy - 2.0, 5.0, 12.0), ink);
                }
            }
        }
    }

    fn draw_dialog(&mut self, scene: &SceneLayout, palette: &Palette) {
        self.fill_rect(
            Rect::new(0.0, 0.0, scene.width, scene.height),
            with_alpha(palette.ink, 0.45),
        );
        self.fill_rect(scene.dialog, palette.panel);
        self.stroke_rect(scene.dialog, 2.0, palette.gold);

        // Title bar plus three text lines, wireframe style.
        let inner_x = scene.dialog.x + 28.0;
        let inner_w = scene.dialog.w - 56.0;
        self.fill_pill(Rect::new(inner_x, scene.dialog.y + 30.0, inner_w * 0.5, 14.0), palette.ink);
        for i in 0..3 {
            let y = scene.dialog.y + 86.0 + 40.0 * i as f32;
            self.fill_circle(inner_x + 5.0, y + 5.0, 4.0, palette.gold, Transform::identity());
            self.fill_pill(
                Rect::new(inner_x + 22.0, y, inner_w - 22.0 - 18.0 * i as f32, 10.0),
                with_alpha(palette.ink_soft, 0.6),
            );
        }
    }
}
