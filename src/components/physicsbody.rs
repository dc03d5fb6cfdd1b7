//! Link between an entity and its physics body.

use bevy_ecs::prelude::Component;

use crate::resources::physics::BodyHandle;

/// Handle to the entity's body inside the [`Physics`] resource.
///
/// The body is exclusively owned by its entity for the entity's lifetime; all
/// mutation goes through the physics command surface, never around it.
///
/// [`Physics`]: crate::resources::physics::Physics
#[derive(Component, Clone, Copy, Debug)]
pub struct PhysicsBody {
    pub handle: BodyHandle,
}

impl PhysicsBody {
    pub fn new(handle: BodyHandle) -> Self {
        Self { handle }
    }
}
