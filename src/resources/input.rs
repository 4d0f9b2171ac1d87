//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Defaults use WASD for the four
//! movement directions and F11 for the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
///
/// The four directional keys drive the
/// [`DirectionalMover`](crate::components::directionalmover::DirectionalMover);
/// `mode_debug` toggles the debug overlay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_to(KeyboardKey::KEY_W),
            direction_down: BoolState::bound_to(KeyboardKey::KEY_S),
            direction_left: BoolState::bound_to(KeyboardKey::KEY_A),
            direction_right: BoolState::bound_to(KeyboardKey::KEY_D),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.direction_up.active);
        assert!(!input.direction_down.active);
        assert!(!input.direction_left.active);
        assert!(!input.direction_right.active);
        assert!(!input.mode_debug.active);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.direction_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.direction_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.direction_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.direction_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_inputstate_no_just_pressed_on_default() {
        let input = InputState::default();
        assert!(!input.direction_up.just_pressed);
        assert!(!input.direction_right.just_released);
        assert!(!input.mode_debug.just_pressed);
    }
}
