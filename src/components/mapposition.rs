//! World-space position component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (pivot) of an entity, in world pixels.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
