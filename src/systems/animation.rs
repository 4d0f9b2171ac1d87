//! Clip playback system.
//!
//! Advances playing [`AnimationPlayer`]s based on elapsed time and updates
//! the visible sprite frame.
//!
//! # Playback Flow
//!
//! 1. Clip data is defined in [`ClipStore`](crate::resources::clipstore::ClipStore)
//! 2. Entities have an [`AnimationPlayer`](crate::components::animationplayer::AnimationPlayer)
//!    pointing at a clip key
//! 3. Gameplay systems call `play`/`stop` on the player
//! 4. This system advances frames based on the clip `fps` and writes the
//!    frame's spritesheet offset into [`Sprite`](crate::components::sprite::Sprite)
//!
//! A stopped player holds its current frame; its offset is still written so
//! the sprite shows the frame it stopped on.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animationplayer::AnimationPlayer;
use crate::components::sprite::Sprite;
use crate::resources::clipstore::ClipStore;
use crate::resources::worldtime::WorldTime;

/// Advance clip playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Looks up clip data from [`ClipStore`]; unknown keys are skipped.
/// - Mutates [`AnimationPlayer`] state and the [`Sprite`] offset.
/// - Non-looping clips stop the player on their last frame.
pub fn animation(
    mut query: Query<(&mut AnimationPlayer, &mut Sprite)>,
    clip_store: Res<ClipStore>,
    time: Res<WorldTime>,
) {
    for (mut player, mut sprite) in query.iter_mut() {
        let Some(clip) = clip_store.get(&player.clip_key) else {
            continue;
        };

        if player.playing {
            player.elapsed_time += time.delta;

            let frame_duration = 1.0 / clip.fps;
            if player.elapsed_time >= frame_duration {
                player.frame_index += 1;
                player.elapsed_time -= frame_duration;

                if player.frame_index >= clip.frame_count {
                    if clip.looped {
                        player.frame_index = 0;
                    } else {
                        player.frame_index = clip.frame_count - 1; // stay on last frame
                        player.playing = false;
                    }
                }
            }
        }

        // Update sprite offset to display the current frame
        sprite.offset = Vector2 {
            x: clip.x + (player.frame_index as f32 * clip.frame_width),
            y: clip.y,
        };
    }
}
