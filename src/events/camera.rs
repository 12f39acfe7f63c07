//! Camera rig notifications.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::facing::FacingDirection;

/// Triggered when a snap rotation converges and the rig yaw is snapped.
#[derive(Event, Debug, Clone, Copy)]
pub struct CameraRotatedEvent {
    pub rig: Entity,
    /// Final yaw, degrees in [0, 360).
    pub yaw: f32,
    pub facing: FacingDirection,
}

/// Logs finished rotations.
pub fn camera_rotated_observer(trigger: On<CameraRotatedEvent>) {
    let ev = trigger.event();
    debug!(
        "Camera rig {:?} now at yaw {} facing {:?}",
        ev.rig, ev.yaw, ev.facing
    );
}
