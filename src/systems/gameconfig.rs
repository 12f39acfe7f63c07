//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and pushes its camera section into the
//! [`CameraSettings`] resource read by the camera systems.

use crate::components::camerarig::CameraRig;
use crate::components::ortholens::OrthoLens;
use crate::resources::camerasettings::CameraSettings;
use crate::resources::gameconfig::GameConfig;
use bevy_ecs::prelude::*;
use log::info;

/// Copy changed camera configuration into [`CameraSettings`].
///
/// Rig lenses pick up the new pitch and distance, and their half-height is
/// pulled back inside the (possibly narrower) zoom bounds.
pub fn sync_camera_settings(
    maybe_config: Option<Res<GameConfig>>,
    mut settings: ResMut<CameraSettings>,
    mut lenses: Query<&mut OrthoLens, With<CameraRig>>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !config.is_changed() {
        return;
    }
    let mut camera = config.camera;
    camera.sanitize();
    if *settings == camera {
        return;
    }
    *settings = camera;
    for mut lens in lenses.iter_mut() {
        lens.pitch = camera.pitch;
        lens.distance = camera.distance;
        lens.half_height = camera.clamp_size(lens.half_height);
    }
    info!("Camera settings applied: {:?}", camera);
}
