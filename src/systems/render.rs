//! Frame rendering.
//!
//! Exclusive system: takes the raylib handle, thread and texture store out
//! of the world for the duration of the frame, draws the world pass inside a
//! scissor clipped to the camera viewport, then the screen-anchored overlay
//! pass, and puts everything back. All drawing goes through
//! [`Renderer`] so the camera/scale transform lives in one place.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::draw::{DrawSurface, Rect, Renderer};
use crate::resources::backgroundcolor::BackgroundColor;
use crate::resources::camera::Camera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::helpoverlay::HelpOverlay;
use crate::resources::texturestore::TextureStore;

/// [`DrawSurface`] over any raylib draw scope plus the texture store.
pub struct RaylibSurface<'a, T: RaylibDraw> {
    pub d: &'a mut T,
    pub textures: &'a TextureStore,
}

impl<'a, T: RaylibDraw> DrawSurface for RaylibSurface<'a, T> {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> bool {
        self.d.draw_rectangle(x, y, w, h, color);
        true
    }

    fn outline_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> bool {
        self.d.draw_rectangle_lines(x, y, w, h, color);
        true
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> bool {
        self.d.draw_line(x1, y1, x2, y2, color);
        true
    }

    fn point(&mut self, x: f32, y: f32, color: Color) -> bool {
        self.d.draw_pixel_v(Vector2 { x, y }, color);
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
        let Some(tex) = self.textures.get(key) else {
            log::warn!("Texture '{key}' not loaded");
            return false;
        };
        let src = match source {
            Some(s) => Rectangle {
                x: s.x as f32,
                y: s.y as f32,
                width: s.w as f32,
                height: s.h as f32,
            },
            None => Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width() as f32,
                height: tex.height() as f32,
            },
        };
        let dest = Rectangle {
            x: x as f32,
            y: y as f32,
            width: w as f32,
            height: h as f32,
        };
        self.d
            .draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        true
    }

    fn texture_size(&mut self, key: &str) -> Option<(f32, f32)> {
        self.textures
            .get(key)
            .map(|t| (t.width() as f32, t.height() as f32))
    }
}

pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };
    let Some(textures) = world.remove_non_send_resource::<TextureStore>() else {
        world.insert_non_send_resource(rl);
        world.insert_non_send_resource(thread);
        return;
    };

    let camera = *world.resource::<Camera>();
    let scale = world.resource::<GameConfig>().scale as i32;
    let background = world.resource::<BackgroundColor>().0;
    let show_help = world.contains_resource::<HelpOverlay>();

    let mut sprites: Vec<(Sprite, MapPosition)> = {
        let mut query = world.query::<(&Sprite, &MapPosition)>();
        query
            .iter(world)
            .map(|(sprite, pos)| (sprite.clone(), *pos))
            .collect()
    };
    // Parallax layers draw back to front.
    sprites.sort_by(|a, b| a.0.parallax.total_cmp(&b.0.parallax));

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(background);

        {
            // World pass, clipped to the camera viewport.
            let mut d2 = d.begin_scissor_mode(0, 0, camera.w, camera.h);
            let mut surface = RaylibSurface {
                d: &mut d2,
                textures: &textures,
            };
            let mut renderer = Renderer::new(&mut surface, &camera, scale);
            for (sprite, pos) in &sprites {
                let x = pos.pos.x as i32 - sprite.pivot_x;
                let y = pos.pos.y as i32 - sprite.pivot_y;
                if !renderer.draw_texture(&sprite.tex_key, x, y, sprite.section, sprite.parallax) {
                    log::warn!("Failed to draw sprite '{}'", sprite.tex_key);
                }
            }
        }

        if show_help {
            let mut surface = RaylibSurface {
                d: &mut d,
                textures: &textures,
            };
            let mut renderer = Renderer::new(&mut surface, &camera, scale);
            draw_help_overlay(&mut renderer, camera.w / scale);
        }
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(textures);
}

/// Screen-anchored control legend, drawn with the built-in glyph font.
fn draw_help_overlay<S: DrawSurface>(renderer: &mut Renderer<'_, S>, logical_width: i32) {
    let panel = Rect::new(8, 8, logical_width - 16, 110);
    renderer.draw_rect(panel, Color::new(0, 0, 0, 180), true, false);
    renderer.draw_rect(panel, Color::new(255, 255, 255, 120), false, false);

    let legend = "CONTROLS:\n\
                  - A / D : MOVE\n\
                  - SPACE : JUMP\n\
                  - T : TELEPORT (TEST)\n\
                  - ESC : EXIT GAME\n\
                  DEBUG:\n\
                  - H : SHOW / HIDE HELP\n\
                  - F10 : TOGGLE GOD MODE\n\
                  - W / S : FLY UP / DOWN (GOD MODE)";
    renderer.draw_text(legend, 16, 16, 1, Color::RAYWHITE, false);
}
