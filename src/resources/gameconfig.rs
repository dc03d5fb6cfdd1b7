//! Game configuration resource.
//!
//! Settings loaded from an INI file, with safe defaults when the file or a
//! key is missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 480
//! scale = 2
//! vsync = true
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_SCALE: u32 = 2;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window and scaling configuration.
///
/// `window_width`/`window_height` are logical pixels; the actual window and
/// the camera extent are both multiplied by the integer display `scale`.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Logical window width in pixels.
    pub window_width: u32,
    /// Logical window height in pixels.
    pub window_height: u32,
    /// Integer display scale factor (logical -> device pixels).
    pub scale: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
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
            scale: DEFAULT_SCALE,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
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
    /// Missing values retain their current (default) values. Returns an error
    /// if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(scale) = config.getuint("window", "scale").ok().flatten() {
            self.scale = (scale as u32).max(1);
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getboolcoerce("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        info!(
            "Config loaded: {}x{} scale {} fps {} vsync {}",
            self.window_width, self.window_height, self.scale, self.target_fps, self.vsync
        );
        Ok(())
    }

    /// Device-pixel width of the window/camera.
    pub fn device_width(&self) -> i32 {
        (self.window_width * self.scale) as i32
    }

    /// Device-pixel height of the window/camera.
    pub fn device_height(&self) -> i32 {
        (self.window_height * self.scale) as i32
    }
}
