//! Keyboard polling.
//!
//! Reads the raylib keyboard once per frame into the [`InputState`]
//! resource and fires the toggle events on their key-down edges. Gameplay
//! systems only ever look at [`InputState`], never at raylib directly.

use bevy_ecs::prelude::*;
use raylib::prelude::RaylibHandle;

use crate::events::godmode::SwitchGodModeEvent;
use crate::events::helpoverlay::SwitchHelpEvent;
use crate::resources::input::{BoolState, InputState};

fn poll(state: &mut BoolState, rl: &RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
}

pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    poll(&mut input.move_left, &rl);
    poll(&mut input.move_right, &rl);
    poll(&mut input.fly_up, &rl);
    poll(&mut input.fly_down, &rl);
    poll(&mut input.jump, &rl);
    poll(&mut input.teleport, &rl);
    poll(&mut input.god_toggle, &rl);
    poll(&mut input.help_toggle, &rl);
    poll(&mut input.quit, &rl);

    if input.god_toggle.just_pressed {
        commands.trigger(SwitchGodModeEvent {});
    }
    if input.help_toggle.just_pressed {
        commands.trigger(SwitchHelpEvent {});
    }
}
