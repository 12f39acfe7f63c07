//! Scene setup and the per-frame schedule.
//!
//! [`build_update_schedule`] is the single tick entry point: the owning loop
//! runs it once per frame after updating [`WorldTime`] and [`InputState`].
//! All camera and token logic lives in [`FrameLogic`], so hosts can order
//! their own input and render systems around it.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::camerarig::CameraRig;
use crate::components::ortholens::OrthoLens;
use crate::components::tokenlayout::TokenLayout;
use crate::events::camera::camera_rotated_observer;
use crate::events::resource::{resource_removed_observer, resource_restored_observer};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::camerasettings::CameraSettings;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::{camera_pan_system, camera_rotate_system, camera_zoom_system};
use crate::systems::gameconfig::sync_camera_settings;
use crate::systems::resourcetoken::{resource_visibility_system, token_hotkeys_system};
use crate::systems::tokenlayout::tokenlayout_spawn_system;

/// System set holding every simulation system of a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameLogic;

/// Insert the resources the frame systems need, keeping any already present.
pub fn insert_default_resources(world: &mut World, screen_w: i32, screen_h: i32) {
    if !world.contains_resource::<WorldTime>() {
        world.insert_resource(WorldTime::default());
    }
    if !world.contains_resource::<InputState>() {
        world.insert_resource(InputState::default());
    }
    if !world.contains_resource::<CameraSettings>() {
        world.insert_resource(CameraSettings::default());
    }
    world.insert_resource(ScreenSize {
        w: screen_w,
        h: screen_h,
    });
}

/// Register the event observers.
pub fn register_observers(world: &mut World) {
    world.add_observer(switch_debug_observer);
    world.add_observer(resource_removed_observer);
    world.add_observer(resource_restored_observer);
    world.add_observer(camera_rotated_observer);
    world.flush();
}

/// Spawn a camera rig at `pos` with a lens built from `settings`.
pub fn spawn_camera_rig(world: &mut World, pos: Vector3, settings: &CameraSettings) -> Entity {
    world
        .spawn((
            CameraRig::new(pos),
            OrthoLens::new(
                settings.clamp_size(settings.initial_cam_size),
                settings.pitch,
                settings.distance,
            ),
        ))
        .id()
}

/// Populate a fresh world: observers, camera rig, optional token layout.
pub fn setup_scene(world: &mut World, layout_path: Option<&str>) -> Entity {
    register_observers(world);
    let settings = *world.resource::<CameraSettings>();
    let rig = spawn_camera_rig(
        world,
        Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        &settings,
    );
    if let Some(path) = layout_path {
        world.spawn(TokenLayout::new(path));
    }
    log::info!("Scene ready, camera rig {:?}", rig);
    rig
}

/// The per-frame schedule: config sync, layout spawning, camera pan → zoom →
/// rotate, then token hotkeys → token visibility.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            sync_camera_settings,
            tokenlayout_spawn_system,
            (camera_pan_system, camera_zoom_system, camera_rotate_system)
                .chain()
                .after(sync_camera_settings),
            (token_hotkeys_system, resource_visibility_system)
                .chain()
                .after(tokenlayout_spawn_system),
        )
            .in_set(FrameLogic),
    );
    update
}
