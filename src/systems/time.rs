//! Frame-time bookkeeping.

use bevy_ecs::world::World;

use crate::resources::worldtime::WorldTime;

/// Feed the raylib frame time into the [`WorldTime`] resource. Called from
/// the main loop before the schedule runs so every system sees the same
/// scaled delta.
pub fn update_world_time(world: &mut World, frame_time: f32) {
    let mut time = world.resource_mut::<WorldTime>();
    let delta = frame_time * time.time_scale;
    time.delta = delta;
    time.elapsed += delta;
}
