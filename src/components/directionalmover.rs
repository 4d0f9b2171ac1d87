//! Keyboard-driven fixed-step movement component.
//!
//! [`DirectionalMover`] describes how an entity responds to the four
//! directional keys: the distance moved each tick and the clip played for
//! each direction. The
//! [`directional_mover`](crate::systems::directionalmover::directional_mover)
//! system reads the current input state and applies the movement and clip
//! selection.

use bevy_ecs::prelude::Component;

/// Movement intent derived from player keyboard input.
///
/// The step is applied once per tick while a direction is held. It is a flat
/// distance, not a speed: elapsed frame time does not factor in.
#[derive(Component, Clone, Debug)]
pub struct DirectionalMover {
    /// Distance in world units applied per tick per held direction.
    pub step: f32,
    /// Clip played while moving up.
    pub up_clip: String,
    /// Clip played while moving down.
    pub down_clip: String,
    /// Clip played while moving left.
    pub left_clip: String,
    /// Clip played while moving right.
    pub right_clip: String,
}

impl DirectionalMover {
    /// Default per-tick step distance in world units.
    pub const DEFAULT_STEP: f32 = 5.0;

    /// Create a mover with the given step and the standard directional clips.
    pub fn new(step: f32) -> Self {
        Self {
            step,
            up_clip: "up".to_string(),
            down_clip: "down".to_string(),
            left_clip: "left".to_string(),
            right_clip: "right".to_string(),
        }
    }

    /// Override the four directional clip keys.
    #[allow(dead_code)]
    pub fn with_clips(
        mut self,
        up: impl Into<String>,
        down: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        self.up_clip = up.into();
        self.down_clip = down.into();
        self.left_clip = left.into();
        self.right_clip = right.into();
        self
    }
}

impl Default for DirectionalMover {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_step_and_clips() {
        let mover = DirectionalMover::default();
        assert_eq!(mover.step, 5.0);
        assert_eq!(mover.up_clip, "up");
        assert_eq!(mover.down_clip, "down");
        assert_eq!(mover.left_clip, "left");
        assert_eq!(mover.right_clip, "right");
    }

    #[test]
    fn test_with_clips_overrides_names() {
        let mover = DirectionalMover::new(2.0).with_clips("n", "s", "w", "e");
        assert_eq!(mover.step, 2.0);
        assert_eq!(mover.up_clip, "n");
        assert_eq!(mover.down_clip, "s");
        assert_eq!(mover.left_clip, "w");
        assert_eq!(mover.right_clip, "e");
    }
}
