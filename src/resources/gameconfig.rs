//! Game configuration resource.
//!
//! Manages window settings loaded from an INI configuration file. Provides
//! defaults for safe startup when the file is missing or incomplete.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! fullscreen = false
//! vsync = true
//! target_fps = 120
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings. `main` loads this before creating the window and
/// inserts it into the ECS world for systems that need the dimensions.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, fullscreen={}",
            self.window_width, self.window_height, self.target_fps, self.vsync, self.fullscreen
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.target_fps, 120);
        assert!(config.vsync);
        assert!(!config.fullscreen);
        assert_eq!(config.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn test_with_path() {
        let config = GameConfig::with_path("/tmp/custom.ini");
        assert_eq!(config.config_path, PathBuf::from("/tmp/custom.ini"));
        assert_eq!(config.window_width, 1280);
    }

    #[test]
    fn test_load_missing_file_errors_and_keeps_defaults() {
        let mut config = GameConfig::with_path("./no/such/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_load_applies_ini_values() {
        let path = std::env::temp_dir().join("spritewalk_test_config.ini");
        std::fs::write(
            &path,
            "[window]\nwidth = 800\nheight = 600\ntarget_fps = 60\nvsync = false\nfullscreen = true\n",
        )
        .expect("write temp config");

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().expect("config should load");
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.target_fps, 60);
        assert!(!config.vsync);
        assert!(config.fullscreen);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_partial_ini_keeps_defaults_for_missing_keys() {
        let path = std::env::temp_dir().join("spritewalk_test_partial.ini");
        std::fs::write(&path, "[window]\nwidth = 640\n").expect("write temp config");

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().expect("config should load");
        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.target_fps, 120);

        std::fs::remove_file(&path).ok();
    }
}
