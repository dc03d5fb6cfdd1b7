//! Event and observer toggling the player's god mode.
//!
//! God mode replaces physics-driven movement with direct WASD flight and
//! suppresses item/hazard effects. Entering it zeroes the body's velocity so
//! no residual inertia carries over.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::physicsbody::PhysicsBody;
use crate::components::player::Player;
use crate::resources::physics::Physics;

/// Event used to flip god mode on/off.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchGodModeEvent {}

/// Observer that toggles god mode on every player.
pub fn switch_god_mode_observer(
    _trigger: On<SwitchGodModeEvent>,
    mut physics: ResMut<Physics>,
    mut players: Query<(&mut Player, &PhysicsBody)>,
) {
    for (mut player, body) in players.iter_mut() {
        player.god_mode = !player.god_mode;
        log::info!(
            "God mode: {}",
            if player.god_mode { "ON" } else { "OFF" }
        );

        // Cancel residual inertia on entry.
        if player.god_mode {
            physics.set_linear_velocity(body.handle, Vector2 { x: 0.0, y: 0.0 });
        }
    }
}
