//! Player actor component.
//!
//! Holds the motion-state flags the controller system mutates each frame and
//! the tuning constants for movement, jump and god-mode flight. The animation
//! state is re-derived every frame by the controller; it is never a store of
//! truth on its own.

use bevy_ecs::prelude::Component;

/// Animation track selected for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimState {
    #[default]
    Idle,
    Move,
    Jump,
}

/// Tracked player actor.
///
/// Invariant: while `god_mode` is set, velocity is written exclusively by the
/// god-mode input mapping; the move/jump logic still runs but its result is
/// replaced before commit. `is_jumping` is set on the jump impulse and
/// cleared by the next platform contact begin.
#[derive(Component, Debug, Clone)]
pub struct Player {
    /// Horizontal run speed in world pixels per second.
    pub speed: f32,
    /// Upward impulse applied on a jump, in world pixels per second.
    pub jump_impulse: f32,
    /// Flight speed on each axis while god mode is active.
    pub god_speed: f32,
    pub is_jumping: bool,
    pub god_mode: bool,
    pub anim: AnimState,
    /// Audio fx key played on item pickup.
    pub pickup_fx: String,
}

impl Player {
    pub fn new() -> Self {
        Self {
            speed: 150.0,
            jump_impulse: 400.0,
            god_speed: 240.0,
            is_jumping: false,
            god_mode: false,
            anim: AnimState::Idle,
            pickup_fx: String::new(),
        }
    }

    pub fn with_pickup_fx(mut self, fx: impl Into<String>) -> Self {
        self.pickup_fx = fx.into();
        self
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_grounded_and_mortal() {
        let player = Player::new();
        assert!(!player.is_jumping);
        assert!(!player.god_mode);
        assert_eq!(player.anim, AnimState::Idle);
    }

    #[test]
    fn test_with_pickup_fx() {
        let player = Player::new().with_pickup_fx("coin");
        assert_eq!(player.pickup_fx, "coin");
    }
}
