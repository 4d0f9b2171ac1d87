//! Clip definition registry.
//!
//! This module provides a minimal store for sprite clip definitions that can
//! be reused by multiple entities. Systems look up a clip by a string key and
//! drive playback based on the immutable parameters stored here. Definitions
//! can be loaded from a JSON manifest mapping clip keys to [`ClipResource`]
//! entries.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Central registry of reusable clip definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct ClipStore {
    pub clips: FxHashMap<String, ClipResource>,
}

/// Immutable data describing one row of frames in a spritesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipResource {
    /// X position of the first frame in the spritesheet, in pixels.
    pub x: f32,
    /// Y position of the frame row in the spritesheet, in pixels.
    pub y: f32,
    /// Width of each frame in the spritesheet, in pixels.
    pub frame_width: f32,
    /// Number of frames in the clip.
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the clip restarts after the last frame.
    pub looped: bool,
}

impl ClipStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn insert(&mut self, key: impl Into<String>, clip: ClipResource) {
        self.clips.insert(key.into(), clip);
    }

    pub fn get(&self, key: &str) -> Option<&ClipResource> {
        self.clips.get(key)
    }

    /// Parse a store from a JSON object mapping clip keys to definitions.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let clips: FxHashMap<String, ClipResource> =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse clips JSON: {}", e))?;
        Ok(Self { clips })
    }

    /// Load a store from a JSON manifest file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read clips manifest {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_clip() -> ClipResource {
        ClipResource {
            x: 0.0,
            y: 64.0,
            frame_width: 64.0,
            frame_count: 4,
            fps: 8.0,
            looped: true,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = ClipStore::new();
        store.insert("left", walk_clip());
        assert_eq!(store.get("left"), Some(&walk_clip()));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_from_json_parses_manifest() {
        let json = r#"
        {
            "up":   { "x": 0.0, "y": 192.0, "frame_width": 64.0, "frame_count": 4, "fps": 8.0, "looped": true },
            "down": { "x": 0.0, "y": 0.0,   "frame_width": 64.0, "frame_count": 6, "fps": 10.0, "looped": false }
        }
        "#;
        let store = ClipStore::from_json(json).expect("manifest should parse");
        assert_eq!(store.clips.len(), 2);
        let down = store.get("down").unwrap();
        assert_eq!(down.frame_count, 6);
        assert_eq!(down.fps, 10.0);
        assert!(!down.looped);
    }

    #[test]
    fn test_from_json_rejects_invalid_input() {
        assert!(ClipStore::from_json("not json").is_err());
        assert!(ClipStore::from_json(r#"{ "up": { "x": 0.0 } }"#).is_err());
    }

    #[test]
    fn test_load_from_file_missing_path_errors() {
        let result = ClipStore::load_from_file("./no/such/clips.json");
        assert!(result.is_err());
    }
}
