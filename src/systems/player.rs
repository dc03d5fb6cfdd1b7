//! Player controller system.
//!
//! Runs once per frame after the physics step and drives the actor's
//! velocity, jump impulse, teleport and god-mode override. The per-frame
//! order is fixed: read resolved velocity → normal move/jump logic →
//! teleport → god-mode override (supersedes the normal result) → commit the
//! final velocity → read back the resolved position for camera and drawing.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::components::player::{AnimState, Player};
use crate::resources::input::InputState;
use crate::resources::physics::Physics;

/// Teleport target used for testing traversal, independent of mode.
const TELEPORT_X: f32 = 96.0;
const TELEPORT_Y: f32 = 96.0;

pub fn player_controller(
    mut physics: ResMut<Physics>,
    input: Res<InputState>,
    mut query: Query<(&mut Player, &PhysicsBody, &mut MapPosition)>,
) {
    for (mut player, body, mut position) in query.iter_mut() {
        let handle = body.handle;

        // Horizontal velocity resets every frame so releasing input stops the
        // actor instantly; vertical velocity starts from the resolved value.
        let resolved = physics.linear_velocity(handle);
        let mut velocity = Vector2 {
            x: 0.0,
            y: resolved.y,
        };

        // Left is evaluated before right, so right wins when both are held.
        let mut moving = false;
        if input.move_left.active {
            velocity.x = -player.speed;
            moving = true;
        }
        if input.move_right.active {
            velocity.x = player.speed;
            moving = true;
        }

        // Jump only on the key-down edge and only while grounded. The
        // impulse is applied once; afterwards the physics engine's resolved
        // vertical velocity is authoritative until landing.
        if input.jump.just_pressed && !player.is_jumping {
            physics.apply_impulse_to_center(handle, 0.0, -player.jump_impulse);
            player.is_jumping = true;
        }
        if player.is_jumping {
            velocity.y = physics.linear_velocity(handle).y;
        }

        // Teleport relocates the body in any mode and keeps velocity.
        if input.teleport.just_pressed {
            physics.set_position(handle, TELEPORT_X, TELEPORT_Y);
        }

        // God mode replaces the velocity wholesale with the WASD mapping;
        // whatever the normal logic computed above is discarded.
        if player.god_mode {
            velocity = Vector2 { x: 0.0, y: 0.0 };
            if input.move_left.active {
                velocity.x -= player.god_speed;
            }
            if input.move_right.active {
                velocity.x += player.god_speed;
            }
            if input.fly_up.active {
                velocity.y -= player.god_speed;
            }
            if input.fly_down.active {
                velocity.y += player.god_speed;
            }
        }

        physics.set_linear_velocity(handle, velocity);

        // Animation is re-derived every frame from the motion decisions.
        player.anim = if player.is_jumping {
            AnimState::Jump
        } else if moving {
            AnimState::Move
        } else {
            AnimState::Idle
        };

        position.pos = physics.position(handle);
    }
}
