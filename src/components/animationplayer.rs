//! Clip playback component.
//!
//! [`AnimationPlayer`] holds the per-entity playback state for named sprite
//! clips and exposes the `play`/`stop` command surface used by gameplay
//! systems. Clip definitions live in
//! [`ClipStore`](crate::resources::clipstore::ClipStore); the
//! [`animation`](crate::systems::animation::animation) system advances frames
//! for players that are currently playing.

use bevy_ecs::prelude::Component;

/// Playback state for a named clip on a sprite entity.
///
/// `clip_key` survives a `stop`: a stopped player keeps pointing at the last
/// clip and holds its current frame until `play` is called again.
#[derive(Debug, Clone, Component)]
pub struct AnimationPlayer {
    /// Key of the current clip in the clip store.
    pub clip_key: String,
    /// Whether playback is advancing.
    pub playing: bool,
    /// Index of the frame currently shown.
    pub frame_index: usize,
    /// Seconds accumulated toward the next frame step.
    pub elapsed_time: f32,
}

impl AnimationPlayer {
    /// Create a stopped player pointing at the given clip.
    pub fn new(clip_key: impl Into<String>) -> Self {
        Self {
            clip_key: clip_key.into(),
            playing: false,
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Start (or continue) playing the named clip.
    ///
    /// Switching to a different clip restarts playback from the first frame.
    /// Re-playing the current clip keeps the frame position.
    pub fn play(&mut self, clip_key: &str) {
        if self.clip_key != clip_key {
            self.clip_key = clip_key.to_string();
            self.frame_index = 0;
            self.elapsed_time = 0.0;
        }
        self.playing = true;
    }

    /// Halt playback on the current frame. The clip key is retained.
    pub fn stop(&mut self) {
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_stopped_at_frame_zero() {
        let player = AnimationPlayer::new("down");
        assert_eq!(player.clip_key, "down");
        assert!(!player.playing);
        assert_eq!(player.frame_index, 0);
        assert_eq!(player.elapsed_time, 0.0);
    }

    #[test]
    fn test_play_switches_clip_and_resets_frame() {
        let mut player = AnimationPlayer::new("down");
        player.frame_index = 3;
        player.elapsed_time = 0.07;
        player.play("left");
        assert_eq!(player.clip_key, "left");
        assert!(player.playing);
        assert_eq!(player.frame_index, 0);
        assert_eq!(player.elapsed_time, 0.0);
    }

    #[test]
    fn test_play_same_clip_keeps_frame() {
        let mut player = AnimationPlayer::new("right");
        player.play("right");
        player.frame_index = 2;
        player.elapsed_time = 0.05;
        player.play("right");
        assert!(player.playing);
        assert_eq!(player.frame_index, 2);
        assert_eq!(player.elapsed_time, 0.05);
    }

    #[test]
    fn test_stop_retains_clip_and_frame() {
        let mut player = AnimationPlayer::new("up");
        player.play("up");
        player.frame_index = 1;
        player.stop();
        assert!(!player.playing);
        assert_eq!(player.clip_key, "up");
        assert_eq!(player.frame_index, 1);
    }

    #[test]
    fn test_play_after_stop_resumes_same_clip() {
        let mut player = AnimationPlayer::new("up");
        player.play("up");
        player.frame_index = 2;
        player.stop();
        player.play("up");
        assert!(player.playing);
        assert_eq!(player.frame_index, 2);
    }
}
