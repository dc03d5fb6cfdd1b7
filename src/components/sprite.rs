//! Sprite rendering component.

use bevy_ecs::prelude::Component;

use crate::draw::Rect;

/// Sprite identified by a texture key, with an optional spritesheet section.
///
/// `section` selects a frame from the sheet in unscaled texture pixels; when
/// `None` the full texture is drawn and its size is queried at draw time.
/// `parallax` is the camera-offset factor: `1.0` is camera-locked, lower
/// values scroll slower (background layers).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub section: Option<Rect>,
    pub parallax: f32,
    /// Pivot in logical pixels, subtracted from the entity position so the
    /// sprite is drawn centered on it.
    pub pivot_x: i32,
    pub pivot_y: i32,
}

impl Sprite {
    /// Camera-locked sprite drawing the full texture.
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
            section: None,
            parallax: 1.0,
            pivot_x: 0,
            pivot_y: 0,
        }
    }

    pub fn with_section(mut self, section: Rect) -> Self {
        self.section = Some(section);
        self
    }

    pub fn with_parallax(mut self, parallax: f32) -> Self {
        self.parallax = parallax;
        self
    }

    pub fn with_pivot(mut self, x: i32, y: i32) -> Self {
        self.pivot_x = x;
        self.pivot_y = y;
        self
    }
}
