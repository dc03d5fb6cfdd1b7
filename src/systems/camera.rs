//! Camera follow and clamp.
//!
//! Computes the camera offset each frame from the tracked player's position,
//! keeping the actor at a fixed on-screen anchor while never revealing area
//! outside the world. The horizontal anchor is a quarter of the viewport
//! width; the vertical anchor is half the height. The asymmetry is
//! intentional: side-scrolling wants look-ahead, vertical does not.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera::Camera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::map::WorldMap;

/// Clamp one axis of the camera offset.
///
/// All arguments are device pixels. `desired = -actor + anchor`, clamped to
/// never exceed 0 (world left/top edge). The lower clamp at
/// `-(world - viewport)` applies only when the world exceeds the viewport on
/// this axis; otherwise the axis is always fully visible and the camera
/// rests at the upper clamp.
pub fn clamp_axis(actor: f32, anchor: f32, viewport: i32, world: f32) -> i32 {
    let mut desired = (-actor + anchor) as i32;
    if desired > 0 {
        desired = 0;
    }
    if world > viewport as f32 {
        let max_offset = world as i32 - viewport;
        if desired < -max_offset {
            desired = -max_offset;
        }
    }
    desired
}

/// Write the clamped follow offset into the shared [`Camera`] for this frame.
pub fn camera_follow(
    mut camera: ResMut<Camera>,
    map: Res<WorldMap>,
    config: Res<GameConfig>,
    query: Query<&MapPosition, With<Player>>,
) {
    let Ok(position) = query.single() else {
        return;
    };
    let scale = config.scale as f32;
    let world = map.world_size_in_pixels();

    camera.x = clamp_axis(
        position.pos.x * scale,
        camera.w as f32 / 4.0,
        camera.w,
        world.x * scale,
    );
    camera.y = clamp_axis(
        position.pos.y * scale,
        camera.h as f32 / 2.0,
        camera.h,
        world.y * scale,
    );
}
