//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Movement uses A/D, god-mode
//! flight adds W/S, SPACE jumps, T teleports, F10 toggles god mode, H toggles
//! the help overlay and ESC quits.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub fly_up: BoolState,
    pub fly_down: BoolState,
    pub jump: BoolState,
    pub teleport: BoolState,
    pub god_toggle: BoolState,
    pub help_toggle: BoolState,
    pub quit: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound(KeyboardKey::KEY_A),
            move_right: BoolState::bound(KeyboardKey::KEY_D),
            fly_up: BoolState::bound(KeyboardKey::KEY_W),
            fly_down: BoolState::bound(KeyboardKey::KEY_S),
            jump: BoolState::bound(KeyboardKey::KEY_SPACE),
            teleport: BoolState::bound(KeyboardKey::KEY_T),
            god_toggle: BoolState::bound(KeyboardKey::KEY_F10),
            help_toggle: BoolState::bound(KeyboardKey::KEY_H),
            quit: BoolState::bound(KeyboardKey::KEY_ESCAPE),
        }
    }
}
