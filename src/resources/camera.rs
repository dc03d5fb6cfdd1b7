use bevy_ecs::prelude::Resource;

/// Shared camera for the frame.
///
/// `x`/`y` are signed offsets in device pixels, added to scaled world
/// coordinates when drawing (so they are zero or negative while following a
/// player into the level). `w`/`h` are the viewport extent in device pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Camera {
    /// Camera at the world origin with the given viewport extent.
    pub fn new(w: i32, h: i32) -> Self {
        Self { x: 0, y: 0, w, h }
    }
}
