//! Background clear color.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

/// Color the render system clears the frame with.
#[derive(Resource, Debug, Clone, Copy)]
pub struct BackgroundColor(pub Color);

impl Default for BackgroundColor {
    fn default() -> Self {
        Self(Color::BLACK)
    }
}
