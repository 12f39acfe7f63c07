//! Camera rig component.
//!
//! The rig is the movable pivot the orthographic lens hangs from. It owns the
//! ground position, the yaw (degrees around the world up axis) and the compass
//! facing used to remap pan gestures. The lens itself lives in
//! [`OrthoLens`](super::ortholens::OrthoLens) on the same entity.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

use super::facing::FacingDirection;

/// Movable camera mount.
#[derive(Component, Clone, Copy, Debug)]
pub struct CameraRig {
    /// Pivot position in world space.
    pub pos: Vector3,
    /// Yaw in degrees. Exact multiple of 45 whenever no rotation is running.
    pub yaw: f32,
    /// Compass bucket the rig is facing.
    pub facing: FacingDirection,
    /// World point grabbed when the current drag started.
    pub drag_origin: Option<Vector3>,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        })
    }
}

impl CameraRig {
    /// Rig at `pos`, facing North.
    pub fn new(pos: Vector3) -> Self {
        Self {
            pos,
            yaw: 0.0,
            facing: FacingDirection::North,
            drag_origin: None,
        }
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn with_facing(mut self, facing: FacingDirection) -> Self {
        self.facing = facing;
        self
    }

    /// Yaw rounded to the nearest 45° step (ties to even, like the rest of
    /// the snapping code).
    pub fn snapped_yaw(&self) -> f32 {
        (self.yaw / 45.0).round_ties_even() * 45.0
    }

    /// Translate the pivot by a ground-plane delta.
    pub fn translate(&mut self, delta: Vector3) {
        self.pos.x += delta.x;
        self.pos.y += delta.y;
        self.pos.z += delta.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rig_faces_north_with_no_drag() {
        let rig = CameraRig::default();
        assert_eq!(rig.facing, FacingDirection::North);
        assert_eq!(rig.yaw, 0.0);
        assert!(rig.drag_origin.is_none());
    }

    #[test]
    fn snapped_yaw_rounds_to_45() {
        assert_eq!(CameraRig::default().with_yaw(10.0).snapped_yaw(), 0.0);
        assert_eq!(CameraRig::default().with_yaw(30.0).snapped_yaw(), 45.0);
        assert_eq!(CameraRig::default().with_yaw(-50.0).snapped_yaw(), -45.0);
        // 22.5 / 45 = 0.5 ties to even
        assert_eq!(CameraRig::default().with_yaw(22.5).snapped_yaw(), 0.0);
        assert_eq!(CameraRig::default().with_yaw(67.5).snapped_yaw(), 90.0);
    }

    #[test]
    fn translate_adds_componentwise() {
        let mut rig = CameraRig::new(Vector3 {
            x: 1.0,
            y: 0.0,
            z: 2.0,
        });
        rig.translate(Vector3 {
            x: 0.5,
            y: 0.0,
            z: -1.0,
        });
        assert_eq!((rig.pos.x, rig.pos.y, rig.pos.z), (1.5, 0.0, 1.0));
    }
}
