//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. The F11
//! binding toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

use crate::resources::debugmode::DebugMode;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut debug: ResMut<DebugMode>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);
    let is_key_released = |key: KeyboardKey| rl.is_key_released(key);

    // Directions (WASD)
    input.direction_up.active = is_key_down(input.direction_up.key_binding);
    input.direction_down.active = is_key_down(input.direction_down.key_binding);
    input.direction_left.active = is_key_down(input.direction_left.key_binding);
    input.direction_right.active = is_key_down(input.direction_right.key_binding);

    input.direction_up.just_pressed = is_key_pressed(input.direction_up.key_binding);
    input.direction_down.just_pressed = is_key_pressed(input.direction_down.key_binding);
    input.direction_left.just_pressed = is_key_pressed(input.direction_left.key_binding);
    input.direction_right.just_pressed = is_key_pressed(input.direction_right.key_binding);

    input.direction_up.just_released = is_key_released(input.direction_up.key_binding);
    input.direction_down.just_released = is_key_released(input.direction_down.key_binding);
    input.direction_left.just_released = is_key_released(input.direction_left.key_binding);
    input.direction_right.just_released = is_key_released(input.direction_right.key_binding);

    // Debug overlay toggle
    input.mode_debug.active = is_key_down(input.mode_debug.key_binding);
    input.mode_debug.just_pressed = is_key_pressed(input.mode_debug.key_binding);
    input.mode_debug.just_released = is_key_released(input.mode_debug.key_binding);

    if input.mode_debug.just_pressed {
        debug.enabled = !debug.enabled;
        log::debug!("Debug overlay enabled: {}", debug.enabled);
    }
}
