//! Game configuration resource.
//!
//! Manages window and camera settings loaded from an INI configuration file.
//! Provides defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [camera]
//! rotation_speed = 10.0
//! rotation_mode = lerp
//! zoom_amount = 1.0
//! min_cam_size = 2.0
//! max_cam_size = 20.0
//! initial_cam_size = 8.0
//! pitch = 30.0
//! distance = 50.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::camerasettings::{CameraSettings, RotationMode};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings and the camera tunables. The
/// [`sync_camera_settings`] system copies the camera part into the
/// [`CameraSettings`] resource whenever this resource changes.
///
/// [`sync_camera_settings`]: crate::systems::gameconfig::sync_camera_settings
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Camera controller tunables.
    pub camera: CameraSettings,
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
            camera: CameraSettings::default(),
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
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
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

        // [camera] section
        let cam = &mut self.camera;
        let float = |key: &str| {
            let value = config.getfloat("camera", key).ok().flatten()?;
            if !value.is_finite() {
                warn!("Ignoring non-finite camera.{} = {}", key, value);
                return None;
            }
            Some(value as f32)
        };
        if let Some(v) = float("rotation_speed") {
            cam.rotation_speed = v;
        }
        if let Some(v) = float("zoom_amount") {
            cam.zoom_amount = v;
        }
        if let Some(v) = float("min_cam_size") {
            cam.min_cam_size = v;
        }
        if let Some(v) = float("max_cam_size") {
            cam.max_cam_size = v;
        }
        if let Some(v) = float("initial_cam_size") {
            cam.initial_cam_size = v;
        }
        if let Some(v) = float("pitch") {
            cam.pitch = v;
        }
        if let Some(v) = float("distance") {
            cam.distance = v;
        }
        if let Some(mode) = config.get("camera", "rotation_mode") {
            match RotationMode::parse(&mode) {
                Some(m) => cam.rotation_mode = m,
                None => warn!("Unknown rotation_mode '{}', keeping {}", mode, cam.rotation_mode.as_str()),
            }
        }
        cam.sanitize();

        info!(
            "Loaded config: {}x{} window, fps={}, zoom [{}, {}] step {}, rotation {} {}",
            self.window_width,
            self.window_height,
            self.target_fps,
            cam.min_cam_size,
            cam.max_cam_size,
            cam.zoom_amount,
            cam.rotation_mode.as_str(),
            cam.rotation_speed
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [camera] section
        let cam = &self.camera;
        config.set("camera", "rotation_speed", Some(cam.rotation_speed.to_string()));
        config.set("camera", "rotation_mode", Some(cam.rotation_mode.as_str().to_string()));
        config.set("camera", "zoom_amount", Some(cam.zoom_amount.to_string()));
        config.set("camera", "min_cam_size", Some(cam.min_cam_size.to_string()));
        config.set("camera", "max_cam_size", Some(cam.max_cam_size.to_string()));
        config.set("camera", "initial_cam_size", Some(cam.initial_cam_size.to_string()));
        config.set("camera", "pitch", Some(cam.pitch.to_string()));
        config.set("camera", "distance", Some(cam.distance.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
