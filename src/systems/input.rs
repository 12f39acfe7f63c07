//! Input polling system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`InputState`]. The F11 key triggers
//! [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, ButtonState, InputState};

fn poll_key(state: &mut BoolState, rl: &RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
}

fn poll_button(state: &mut ButtonState, rl: &RaylibHandle) {
    state.active = rl.is_mouse_button_down(state.button_binding);
    state.just_pressed = rl.is_mouse_button_pressed(state.button_binding);
    state.just_released = rl.is_mouse_button_released(state.button_binding);
}

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    let input = &mut *input;
    poll_key(&mut input.modifier, &rl);
    poll_key(&mut input.rotate_right, &rl);
    poll_key(&mut input.rotate_left, &rl);
    poll_key(&mut input.mode_debug, &rl);
    poll_key(&mut input.remove_token, &rl);
    poll_key(&mut input.restore_tokens, &rl);
    poll_button(&mut input.pan_button, &rl);
    input.pointer = rl.get_mouse_position();
    input.scroll = rl.get_mouse_wheel_move();

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
