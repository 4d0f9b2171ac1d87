//! Directional step movement.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and,
//! for each entity with a
//! [`DirectionalMover`](crate::components::directionalmover::DirectionalMover),
//! applies a fixed step to its position and selects the matching clip on its
//! [`AnimationPlayer`](crate::components::animationplayer::AnimationPlayer).
//!
//! The step is applied per tick, not per second: this system never reads the
//! frame delta, so movement speed follows the frame rate.
use bevy_ecs::prelude::*;

use crate::components::animationplayer::AnimationPlayer;
use crate::components::directionalmover::DirectionalMover;
use crate::components::mapposition::MapPosition;
use crate::resources::input::InputState;

/// Move each controlled entity and pick its clip based on held keys.
///
/// The four directions are independent, non-exclusive checks evaluated in the
/// fixed order up, down, left, right. Later clip selections overwrite earlier
/// ones made in the same tick.
pub fn directional_mover(
    mut query: Query<(&DirectionalMover, &mut MapPosition, &mut AnimationPlayer)>,
    input: Res<InputState>,
) {
    for (mover, mut position, mut player) in query.iter_mut() {
        if input.direction_up.active {
            position.y -= mover.step;
            player.play(&mover.up_clip);
        }
        if input.direction_down.active {
            position.y += mover.step;
            player.play(&mover.down_clip);
        }
        if input.direction_left.active {
            position.x -= mover.step;
            player.play(&mover.left_clip);
        }
        if input.direction_right.active {
            position.x += mover.step;
            player.play(&mover.right_clip);
        } else {
            // Stop hangs off the right-key check alone, so a tick holding
            // only up/down/left starts a clip and then stops it again.
            // TODO: decide whether stop should wait for all four keys up.
            player.stop();
        }
    }
}
