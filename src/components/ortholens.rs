//! Orthographic lens component.
//!
//! Sits on the same entity as [`CameraRig`]. The lens looks at the rig pivot
//! from `distance` units away, tilted `pitch` degrees below the horizon and
//! turned by the rig yaw. Zoom is the orthographic half-height: half of the
//! world-space height visible on screen.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Camera3D, Vector2, Vector3};

use super::camerarig::CameraRig;

/// Orthographic projection parameters of a rig's camera.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrthoLens {
    /// Half of the visible world height.
    pub half_height: f32,
    /// Tilt below the horizon, in degrees.
    pub pitch: f32,
    /// Distance from the lens to the rig pivot.
    pub distance: f32,
}

impl OrthoLens {
    pub fn new(half_height: f32, pitch: f32, distance: f32) -> Self {
        Self {
            half_height,
            pitch,
            distance,
        }
    }

    /// Unit view direction for a rig yaw (degrees).
    ///
    /// Yaw 0 looks along +z (North). Positive yaw turns clockwise seen from
    /// above, so 90° looks along -x, which is screen-right at yaw 0 (East).
    pub fn forward(&self, yaw: f32) -> Vector3 {
        let (sy, cy) = yaw.to_radians().sin_cos();
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        Vector3 {
            x: -sy * cp,
            y: -sp,
            z: cy * cp,
        }
    }

    /// Unit screen-right direction for a rig yaw. Always horizontal.
    pub fn right(&self, yaw: f32) -> Vector3 {
        let (sy, cy) = yaw.to_radians().sin_cos();
        Vector3 {
            x: -cy,
            y: 0.0,
            z: -sy,
        }
    }

    /// Unit screen-up direction for a rig yaw.
    pub fn up(&self, yaw: f32) -> Vector3 {
        let (sy, cy) = yaw.to_radians().sin_cos();
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        Vector3 {
            x: -sy * sp,
            y: cp,
            z: cy * sp,
        }
    }

    /// Lens position in world space.
    pub fn eye(&self, rig: &CameraRig) -> Vector3 {
        let f = self.forward(rig.yaw);
        Vector3 {
            x: rig.pos.x - f.x * self.distance,
            y: rig.pos.y - f.y * self.distance,
            z: rig.pos.z - f.z * self.distance,
        }
    }

    /// Project a screen position (pixels, origin top-left) onto the lens
    /// plane in world space.
    ///
    /// Degenerate screens (zero width or height) map everything to the eye.
    pub fn screen_to_world(
        &self,
        rig: &CameraRig,
        screen: Vector2,
        screen_w: f32,
        screen_h: f32,
    ) -> Vector3 {
        let eye = self.eye(rig);
        if screen_w <= 0.0 || screen_h <= 0.0 {
            return eye;
        }
        let aspect = screen_w / screen_h;
        let sx = (2.0 * screen.x / screen_w - 1.0) * self.half_height * aspect;
        let sy = (1.0 - 2.0 * screen.y / screen_h) * self.half_height;
        let r = self.right(rig.yaw);
        let u = self.up(rig.yaw);
        Vector3 {
            x: eye.x + r.x * sx + u.x * sy,
            y: eye.y + r.y * sx + u.y * sy,
            z: eye.z + r.z * sx + u.z * sy,
        }
    }

    /// Raylib camera looking at the rig pivot through this lens.
    ///
    /// Raylib's orthographic `fovy` is the full visible height.
    pub fn camera3d(&self, rig: &CameraRig) -> Camera3D {
        Camera3D::orthographic(
            self.eye(rig),
            rig.pos,
            self.up(rig.yaw),
            self.half_height * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::facing::FacingDirection;

    const EPSILON: f32 = 1e-4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn dot(a: Vector3, b: Vector3) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    #[test]
    fn basis_is_orthonormal() {
        let lens = OrthoLens::new(5.0, 30.0, 40.0);
        for yaw in [0.0, 45.0, 90.0, 135.0, 270.0] {
            let f = lens.forward(yaw);
            let r = lens.right(yaw);
            let u = lens.up(yaw);
            assert!(approx(dot(f, f), 1.0));
            assert!(approx(dot(r, r), 1.0));
            assert!(approx(dot(u, u), 1.0));
            assert!(approx(dot(f, r), 0.0));
            assert!(approx(dot(f, u), 0.0));
            assert!(approx(dot(r, u), 0.0));
        }
    }

    #[test]
    fn screen_center_projects_to_eye() {
        let lens = OrthoLens::new(5.0, 30.0, 40.0);
        let rig = CameraRig::default();
        let p = lens.screen_to_world(&rig, Vector2 { x: 400.0, y: 300.0 }, 800.0, 600.0);
        let eye = lens.eye(&rig);
        assert!(approx(p.x, eye.x) && approx(p.y, eye.y) && approx(p.z, eye.z));
    }

    #[test]
    fn top_edge_is_half_height_up() {
        let lens = OrthoLens::new(5.0, 0.0, 10.0);
        let rig = CameraRig::default();
        let p = lens.screen_to_world(&rig, Vector2 { x: 400.0, y: 0.0 }, 800.0, 600.0);
        let eye = lens.eye(&rig);
        assert!(approx(p.y - eye.y, 5.0));
        assert!(approx(p.x, eye.x));
    }

    #[test]
    fn quarter_turn_faces_previous_screen_right() {
        let lens = OrthoLens::new(5.0, 30.0, 40.0);
        let right_at_north = lens.right(0.0);
        let f = lens.forward(90.0);
        let flat = (f.x * f.x + f.z * f.z).sqrt();
        assert!(approx(f.x / flat, right_at_north.x));
        assert!(approx(f.z / flat, right_at_north.z));
    }

    #[test]
    fn downward_drag_pans_along_view_for_mapped_facings() {
        let lens = OrthoLens::new(5.0, 30.0, 40.0);
        for facing in FacingDirection::ALL.into_iter().filter(|f| !f.is_diagonal()) {
            let yaw = facing.yaw();
            // Pointer moving down the screen yields delta = +up
            let moved = facing.redirect_pan(lens.up(yaw));
            let along = dot(moved, lens.forward(yaw));
            assert!(along > 0.5, "{:?}: moved {:?}, along view {}", facing, moved, along);
        }
    }

    #[test]
    fn degenerate_screen_maps_to_eye() {
        let lens = OrthoLens::new(5.0, 30.0, 40.0);
        let rig = CameraRig::default();
        let p = lens.screen_to_world(&rig, Vector2 { x: 10.0, y: 10.0 }, 0.0, 0.0);
        let eye = lens.eye(&rig);
        assert!(approx(p.x, eye.x) && approx(p.y, eye.y) && approx(p.z, eye.z));
    }
}
