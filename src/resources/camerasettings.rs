//! Camera tunables resource.
//!
//! Numeric knobs of the camera controller, built from defaults or from the
//! `[camera]` section of the configuration file (see
//! [`GameConfig`](super::gameconfig::GameConfig)).

use bevy_ecs::prelude::*;

/// How the rig yaw moves toward a snap target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Each tick covers `rotation_speed * dt` of the remaining angle
    /// (clamped to the whole of it). Eases out.
    #[default]
    Lerp,
    /// Each tick covers at most `rotation_speed * dt` degrees.
    Constant,
}

impl RotationMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lerp" => Some(RotationMode::Lerp),
            "constant" => Some(RotationMode::Constant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RotationMode::Lerp => "lerp",
            RotationMode::Constant => "constant",
        }
    }
}

pub const DEFAULT_ROTATION_SPEED: f32 = 10.0;
pub const DEFAULT_ZOOM_AMOUNT: f32 = 1.0;
pub const DEFAULT_MIN_CAM_SIZE: f32 = 2.0;
pub const DEFAULT_MAX_CAM_SIZE: f32 = 20.0;
pub const DEFAULT_INITIAL_CAM_SIZE: f32 = 8.0;
pub const DEFAULT_PITCH: f32 = 30.0;
pub const DEFAULT_DISTANCE: f32 = 50.0;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Rotation rate; its unit depends on `rotation_mode`.
    pub rotation_speed: f32,
    pub rotation_mode: RotationMode,
    /// Half-height change per scroll tick.
    pub zoom_amount: f32,
    pub min_cam_size: f32,
    pub max_cam_size: f32,
    /// Half-height the lens starts with.
    pub initial_cam_size: f32,
    /// Lens tilt below the horizon, degrees.
    pub pitch: f32,
    /// Lens distance from the rig pivot.
    pub distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            rotation_mode: RotationMode::Lerp,
            zoom_amount: DEFAULT_ZOOM_AMOUNT,
            min_cam_size: DEFAULT_MIN_CAM_SIZE,
            max_cam_size: DEFAULT_MAX_CAM_SIZE,
            initial_cam_size: DEFAULT_INITIAL_CAM_SIZE,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
        }
    }
}

impl CameraSettings {
    /// Clamp a half-height into `[min_cam_size, max_cam_size]`.
    ///
    /// Never panics: with inverted bounds the result is `max_cam_size`, and a
    /// NaN bound is ignored.
    pub fn clamp_size(&self, size: f32) -> f32 {
        size.max(self.min_cam_size).min(self.max_cam_size)
    }

    /// Repair inconsistent values so the clamp bounds are usable.
    ///
    /// Returns `true` if anything had to change.
    pub fn sanitize(&mut self) -> bool {
        let mut changed = false;
        if self.min_cam_size > self.max_cam_size {
            log::warn!(
                "min_cam_size {} > max_cam_size {}, swapping",
                self.min_cam_size,
                self.max_cam_size
            );
            std::mem::swap(&mut self.min_cam_size, &mut self.max_cam_size);
            changed = true;
        }
        let clamped = self.clamp_size(self.initial_cam_size);
        if clamped != self.initial_cam_size {
            log::warn!(
                "initial_cam_size {} outside [{}, {}], using {}",
                self.initial_cam_size,
                self.min_cam_size,
                self.max_cam_size,
                clamped
            );
            self.initial_cam_size = clamped;
            changed = true;
        }
        if self.rotation_speed < 0.0 {
            log::warn!("negative rotation_speed {}, using its magnitude", self.rotation_speed);
            self.rotation_speed = -self.rotation_speed;
            changed = true;
        }
        changed
    }
}
