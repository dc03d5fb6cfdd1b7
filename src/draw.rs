//! Scaled immediate-mode drawing.
//!
//! [`Renderer`] converts logical coordinates into device pixels using the
//! shared camera offset and the integer display scale, then issues primitive
//! calls against a [`DrawSurface`]. The surface trait is the seam between
//! the transform math and the actual backend, so the math is unit-testable
//! with a recording surface and the real backend stays a thin adapter.
//!
//! Per-call failures are reported as `false` and logged by the caller side;
//! a failed draw never aborts the frame.

use raylib::prelude::Color;

use crate::glyph;
use crate::resources::camera::Camera;

/// Integer rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Backend drawing primitives, in device pixels.
///
/// Every call returns whether the backend accepted it. `texture` draws the
/// `source` section (unscaled texture pixels, full texture when `None`)
/// stretched to the destination rectangle.
pub trait DrawSurface {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> bool;
    fn outline_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> bool;
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> bool;
    fn point(&mut self, x: f32, y: f32, color: Color) -> bool;
    fn texture(&mut self, key: &str, source: Option<Rect>, x: i32, y: i32, w: i32, h: i32)
    -> bool;
    /// Unscaled pixel size of a stored texture, `None` when missing.
    fn texture_size(&mut self, key: &str) -> Option<(f32, f32)>;
}

/// Camera- and scale-aware drawing over a [`DrawSurface`].
///
/// The camera offset is captured at construction; a renderer is built per
/// frame after the follow system has run.
pub struct Renderer<'a, S: DrawSurface> {
    surface: &'a mut S,
    camera: Camera,
    scale: i32,
}

impl<'a, S: DrawSurface> Renderer<'a, S> {
    pub fn new(surface: &'a mut S, camera: &Camera, scale: i32) -> Self {
        Self {
            surface,
            camera: *camera,
            scale,
        }
    }

    /// Draw a texture (or a section of it) with its top-left at logical
    /// `(x, y)`. `speed` scales the camera offset for parallax layers;
    /// `1.0` is camera-locked.
    pub fn draw_texture(
        &mut self,
        key: &str,
        x: i32,
        y: i32,
        section: Option<Rect>,
        speed: f32,
    ) -> bool {
        let dx = (self.camera.x as f32 * speed) as i32 + x * self.scale;
        let dy = (self.camera.y as f32 * speed) as i32 + y * self.scale;

        let (w, h) = match section {
            Some(s) => (s.w * self.scale, s.h * self.scale),
            None => match self.surface.texture_size(key) {
                Some((tw, th)) => (
                    (tw * self.scale as f32) as i32,
                    (th * self.scale as f32) as i32,
                ),
                None => {
                    log::warn!("Texture size query failed for '{key}'");
                    return false;
                }
            },
        };

        self.surface.texture(key, section, dx, dy, w, h)
    }

    /// Draw a rectangle, filled or outlined. `use_camera = false` keeps the
    /// rectangle screen-anchored (HUD); scaling applies either way.
    pub fn draw_rect(&mut self, rect: Rect, color: Color, filled: bool, use_camera: bool) -> bool {
        let (cx, cy) = if use_camera {
            (self.camera.x, self.camera.y)
        } else {
            (0, 0)
        };
        let x = cx + rect.x * self.scale;
        let y = cy + rect.y * self.scale;
        let w = rect.w * self.scale;
        let h = rect.h * self.scale;
        if filled {
            self.surface.fill_rect(x, y, w, h, color)
        } else {
            self.surface.outline_rect(x, y, w, h, color)
        }
    }

    pub fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        use_camera: bool,
    ) -> bool {
        let (cx, cy) = if use_camera {
            (self.camera.x, self.camera.y)
        } else {
            (0, 0)
        };
        self.surface.line(
            cx + x1 * self.scale,
            cy + y1 * self.scale,
            cx + x2 * self.scale,
            cy + y2 * self.scale,
            color,
        )
    }

    /// Plot a circle as 360 one-degree points. The center is transformed
    /// like any logical point; the radius is used as-is in device pixels.
    pub fn draw_circle(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        color: Color,
        use_camera: bool,
    ) -> bool {
        let (cx, cy) = if use_camera {
            (self.camera.x, self.camera.y)
        } else {
            (0, 0)
        };
        let center_x = (cx + x * self.scale) as f32;
        let center_y = (cy + y * self.scale) as f32;

        let mut ok = true;
        let factor = std::f32::consts::PI / 180.0;
        for i in 0..360 {
            let angle = i as f32 * factor;
            let px = center_x + radius as f32 * angle.cos();
            let py = center_y + radius as f32 * angle.sin();
            if !self.surface.point(px, py, color) {
                ok = false;
            }
        }
        ok
    }

    /// Draw one glyph with its cell origin at logical `(x, y)`.
    /// `glyph_scale` sizes the glyph pixels in logical units; the display
    /// scale applies on top of it.
    pub fn draw_glyph(
        &mut self,
        c: char,
        x: i32,
        y: i32,
        glyph_scale: i32,
        color: Color,
        use_camera: bool,
    ) -> bool {
        let mut ok = true;
        for (i, j) in glyph::lit_pixels(c) {
            let cell = Rect::new(
                x + i * glyph_scale,
                y + j * glyph_scale,
                glyph_scale,
                glyph_scale,
            );
            if !self.draw_rect(cell, color, true, use_camera) {
                ok = false;
            }
        }
        ok
    }

    /// Draw a text run with the built-in glyph font. A failing glyph is
    /// reported in the return value but does not stop the rest of the run.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        glyph_scale: i32,
        color: Color,
        use_camera: bool,
    ) -> bool {
        let mut ok = true;
        for (c, gx, gy) in glyph::layout(text, x, y, glyph_scale) {
            if !self.draw_glyph(c, gx, gy, glyph_scale, color, use_camera) {
                ok = false;
            }
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        FillRect { x: i32, y: i32, w: i32, h: i32 },
        OutlineRect { x: i32, y: i32, w: i32, h: i32 },
        Line { x1: i32, y1: i32, x2: i32, y2: i32 },
        Point { x: f32, y: f32 },
        Texture { key: String, source: Option<Rect>, x: i32, y: i32, w: i32, h: i32 },
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
        texture_sizes: std::collections::HashMap<String, (f32, f32)>,
        fail_texture: bool,
        fail_fill: bool,
    }

    impl DrawSurface for RecordingSurface {
        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, _color: Color) -> bool {
            self.calls.push(Call::FillRect { x, y, w, h });
            !self.fail_fill
        }

        fn outline_rect(&mut self, x: i32, y: i32, w: i32, h: i32, _color: Color) -> bool {
            self.calls.push(Call::OutlineRect { x, y, w, h });
            true
        }

        fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, _color: Color) -> bool {
            self.calls.push(Call::Line { x1, y1, x2, y2 });
            true
        }

        fn point(&mut self, x: f32, y: f32, _color: Color) -> bool {
            self.calls.push(Call::Point { x, y });
            true
        }

        fn texture(
            &mut self,
            key: &str,
            source: Option<Rect>,
            x: i32,
            y: i32,
            w: i32,
            h: i32,
        ) -> bool {
            self.calls.push(Call::Texture {
                key: key.to_string(),
                source,
                x,
                y,
                w,
                h,
            });
            !self.fail_texture
        }

        fn texture_size(&mut self, key: &str) -> Option<(f32, f32)> {
            self.texture_sizes.get(key).copied()
        }
    }

    fn camera(x: i32, y: i32) -> Camera {
        let mut cam = Camera::new(800, 480);
        cam.x = x;
        cam.y = y;
        cam
    }

    #[test]
    fn test_texture_camera_and_scale_transform() {
        let mut surface = RecordingSurface::default();
        let cam = camera(-300, -50);
        let mut renderer = Renderer::new(&mut surface, &cam, 2);

        let section = Rect::new(32, 0, 32, 32);
        assert!(renderer.draw_texture("player", 10, 20, Some(section), 1.0));

        assert_eq!(
            surface.calls,
            vec![Call::Texture {
                key: "player".into(),
                source: Some(section),
                x: -300 + 20,
                y: -50 + 40,
                w: 64,
                h: 64,
            }]
        );
    }

    #[test]
    fn test_texture_parallax_halves_camera_offset() {
        let mut surface = RecordingSurface::default();
        let cam = camera(-300, -100);
        let mut renderer = Renderer::new(&mut surface, &cam, 1);

        renderer.draw_texture("bg", 0, 0, Some(Rect::new(0, 0, 64, 64)), 0.5);

        match &surface.calls[0] {
            Call::Texture { x, y, .. } => {
                assert_eq!(*x, -150);
                assert_eq!(*y, -50);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn test_texture_full_extent_uses_size_query() {
        let mut surface = RecordingSurface::default();
        surface.texture_sizes.insert("bg".into(), (128.0, 64.0));
        let cam = camera(0, 0);
        let mut renderer = Renderer::new(&mut surface, &cam, 2);

        assert!(renderer.draw_texture("bg", 0, 0, None, 1.0));
        match &surface.calls[0] {
            Call::Texture { source, w, h, .. } => {
                assert_eq!(*source, None);
                assert_eq!(*w, 256);
                assert_eq!(*h, 128);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn test_texture_size_query_failure_returns_false() {
        let mut surface = RecordingSurface::default();
        let cam = camera(0, 0);
        let mut renderer = Renderer::new(&mut surface, &cam, 1);

        assert!(!renderer.draw_texture("missing", 0, 0, None, 1.0));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_texture_backend_failure_is_reported_not_fatal() {
        let mut surface = RecordingSurface {
            fail_texture: true,
            ..Default::default()
        };
        let cam = camera(0, 0);
        let mut renderer = Renderer::new(&mut surface, &cam, 1);

        assert!(!renderer.draw_texture("player", 0, 0, Some(Rect::new(0, 0, 8, 8)), 1.0));
        // The call still reached the surface.
        assert_eq!(surface.calls.len(), 1);
    }

    #[test]
    fn test_rect_filled_and_outline_variants() {
        let mut surface = RecordingSurface::default();
        let cam = camera(-10, -20);
        let mut renderer = Renderer::new(&mut surface, &cam, 2);

        renderer.draw_rect(Rect::new(5, 5, 10, 10), Color::RED, true, true);
        renderer.draw_rect(Rect::new(5, 5, 10, 10), Color::RED, false, false);

        assert_eq!(
            surface.calls,
            vec![
                Call::FillRect { x: 0, y: -10, w: 20, h: 20 },
                Call::OutlineRect { x: 10, y: 10, w: 20, h: 20 },
            ]
        );
    }

    #[test]
    fn test_line_transform() {
        let mut surface = RecordingSurface::default();
        let cam = camera(-100, 0);
        let mut renderer = Renderer::new(&mut surface, &cam, 2);

        renderer.draw_line(0, 0, 10, 5, Color::WHITE, true);
        assert_eq!(
            surface.calls,
            vec![Call::Line { x1: -100, y1: 0, x2: -80, y2: 10 }]
        );
    }

    #[test]
    fn test_circle_plots_360_points_radius_unscaled() {
        let mut surface = RecordingSurface::default();
        let cam = camera(0, 0);
        let mut renderer = Renderer::new(&mut surface, &cam, 2);

        renderer.draw_circle(50, 50, 30, Color::GREEN, true);
        assert_eq!(surface.calls.len(), 360);

        // First point is at angle zero: center + (radius, 0), center scaled,
        // radius not.
        match &surface.calls[0] {
            Call::Point { x, y } => {
                assert!((x - 130.0).abs() < 1e-3);
                assert!((y - 100.0).abs() < 1e-3);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn test_text_lays_out_glyph_cells() {
        let mut surface = RecordingSurface::default();
        let cam = camera(0, 0);
        let mut renderer = Renderer::new(&mut surface, &cam, 1);

        // 'I' column positions differ per glyph cell; check cell origins via
        // the minimum x of each glyph's fills.
        renderer.draw_text("II", 0, 0, 1, Color::WHITE, false);

        let i_pixels = crate::glyph::lit_pixels('I').len();
        assert_eq!(surface.calls.len(), i_pixels * 2);

        let min_x_second = surface.calls[i_pixels..]
            .iter()
            .map(|c| match c {
                Call::FillRect { x, .. } => *x,
                other => panic!("unexpected call {other:?}"),
            })
            .min()
            .unwrap();
        // Second glyph cell starts at the 6-unit advance.
        assert_eq!(min_x_second, 6 + 1);
    }

    #[test]
    fn test_unsupported_char_draws_nothing_but_advances() {
        let mut surface = RecordingSurface::default();
        let cam = camera(0, 0);
        let mut renderer = Renderer::new(&mut surface, &cam, 1);

        assert!(renderer.draw_text("@", 0, 0, 1, Color::WHITE, false));
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_glyph_cells_scale_with_display_scale() {
        let mut surface = RecordingSurface::default();
        let cam = camera(0, 0);
        let mut renderer = Renderer::new(&mut surface, &cam, 3);

        renderer.draw_glyph('.', 0, 0, 2, Color::WHITE, false);

        // '.' lights a 2x2 block at rows 5-6, cols 2-3. Each cell is
        // glyph_scale logical units, multiplied by the display scale.
        assert!(surface.calls.contains(&Call::FillRect {
            x: 2 * 2 * 3,
            y: 5 * 2 * 3,
            w: 6,
            h: 6
        }));
        assert_eq!(surface.calls.len(), 4);
    }

    #[test]
    fn test_glyph_failure_does_not_stop_text_run() {
        let mut surface = RecordingSurface {
            fail_fill: true,
            ..Default::default()
        };
        let cam = camera(0, 0);
        let mut renderer = Renderer::new(&mut surface, &cam, 1);

        assert!(!renderer.draw_text("AB", 0, 0, 1, Color::WHITE, false));
        let expected =
            crate::glyph::lit_pixels('A').len() + crate::glyph::lit_pixels('B').len();
        assert_eq!(surface.calls.len(), expected);
    }
}
