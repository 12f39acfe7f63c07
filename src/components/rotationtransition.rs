//! In-flight snap rotation of a camera rig.
//!
//! Present on a rig entity only while a 45° snap is being animated. The
//! rotate system inserts it when a rotate chord is pressed and removes it
//! once the yaw has converged, so its presence doubles as the "rotating" flag.

use bevy_ecs::prelude::Component;

/// Yaw closer than this (degrees) to the target counts as converged.
pub const SNAP_TOLERANCE: f32 = 0.1;

#[derive(Component, Clone, Debug, Copy)]
pub struct RotationTransition {
    /// Yaw in degrees the rig is heading to. Multiple of 45.
    pub target_yaw: f32,
}

impl RotationTransition {
    pub fn new(target_yaw: f32) -> Self {
        Self { target_yaw }
    }
}
