//! Physics stepping and contact event fan-out.
//!
//! Advances the [`Physics`] resource by the frame delta, then fans the
//! drained contact pairs out as [`ContactBeginEvent`]/[`ContactEndEvent`]
//! addressed to each body's listener entity. Runs before the player
//! controller so the controller reads resolved velocities and observers see
//! landings in the same frame.

use bevy_ecs::prelude::*;

use crate::events::collision::{ContactBeginEvent, ContactEndEvent};
use crate::resources::physics::Physics;
use crate::resources::worldtime::WorldTime;

pub fn physics_step(mut physics: ResMut<Physics>, time: Res<WorldTime>, mut commands: Commands) {
    physics.step(time.delta);

    for (a, b) in physics.drain_contacts_began() {
        for (this, other) in [(a, b), (b, a)] {
            if let Some(listener) = physics.listener(this) {
                commands.trigger(ContactBeginEvent {
                    this: listener,
                    this_body: this,
                    other: physics.listener(other),
                    other_body: other,
                    other_type: physics.collider_type(other),
                });
            }
        }
    }

    for (a, b) in physics.drain_contacts_ended() {
        for (this, other) in [(a, b), (b, a)] {
            if let Some(listener) = physics.listener(this) {
                commands.trigger(ContactEndEvent {
                    this: listener,
                    this_body: this,
                    other: physics.listener(other),
                    other_body: other,
                    other_type: physics.collider_type(other),
                });
            }
        }
    }
}
