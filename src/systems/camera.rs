//! Camera rig controller systems.
//!
//! One frame of camera control is three systems, run in this order:
//! - [`camera_pan_system`] – modifier + pointer drag translates the rig
//! - [`camera_zoom_system`] – modifier + wheel changes the lens half-height
//! - [`camera_rotate_system`] – modifier + rotate key snaps the yaw by 45°
//!
//! All of them read the [`InputState`] snapshot and silently ignore anything
//! that does not match their gate. Nothing here can fail: zoom is clamped,
//! stray input is dropped.

use bevy_ecs::prelude::*;
use log::{debug, trace};
use raylib::prelude::Vector3;

use crate::components::camerarig::CameraRig;
use crate::components::facing::FacingDirection;
use crate::components::ortholens::OrthoLens;
use crate::components::rotationtransition::{RotationTransition, SNAP_TOLERANCE};
use crate::events::camera::CameraRotatedEvent;
use crate::resources::camerasettings::{CameraSettings, RotationMode};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Yaw change of one snap, degrees.
pub const SNAP_STEP: f32 = 45.0;

/// Signed shortest angular distance from `from` to `to`, in (-180, 180].
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Unsigned angular distance between two yaws.
pub fn angle_between(a: f32, b: f32) -> f32 {
    shortest_delta(a, b).abs()
}

/// Move `yaw` one tick toward `target`.
pub fn step_yaw(yaw: f32, target: f32, speed: f32, dt: f32, mode: RotationMode) -> f32 {
    let delta = shortest_delta(yaw, target);
    match mode {
        RotationMode::Lerp => yaw + delta * (speed * dt).clamp(0.0, 1.0),
        RotationMode::Constant => {
            let max = (speed * dt).max(0.0);
            if delta.abs() <= max {
                yaw + delta
            } else {
                yaw + max * delta.signum()
            }
        }
    }
}

/// Snap target for a rotate request: current yaw rounded to 45° plus `step`.
pub fn snap_target(rig: &CameraRig, step: f32) -> f32 {
    rig.snapped_yaw() + step
}

/// Lens half-height after one wheel event.
///
/// Wheel toward the user (negative) widens the view, away narrows it. The
/// result always lies within the configured bounds.
pub fn zoom_step(half_height: f32, scroll: f32, settings: &CameraSettings) -> f32 {
    let next = if scroll < 0.0 {
        half_height + settings.zoom_amount
    } else if scroll > 0.0 {
        half_height - settings.zoom_amount
    } else {
        return half_height;
    };
    settings.clamp_size(next)
}

/// Drag the rig across the ground plane.
///
/// On the frame the pan button goes down (with the modifier held) the pointer
/// is projected onto the lens plane and remembered. While both stay held the
/// rig moves by `origin - current`, with the vertical part redirected per
/// [`FacingDirection::redirect_pan`]. Releasing the button forgets the origin.
pub fn camera_pan_system(
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    mut rigs: Query<(&mut CameraRig, &OrthoLens)>,
) {
    let (w, h) = (screen.w as f32, screen.h as f32);
    for (mut rig, lens) in rigs.iter_mut() {
        if !input.pan_button.active {
            if rig.drag_origin.is_some() {
                rig.drag_origin = None;
            }
            continue;
        }
        if !input.modifier.active {
            continue;
        }

        if input.pan_button.just_pressed {
            let origin = lens.screen_to_world(&rig, input.pointer, w, h);
            rig.drag_origin = Some(origin);
        }

        let Some(origin) = rig.drag_origin else {
            continue;
        };
        let current = lens.screen_to_world(&rig, input.pointer, w, h);
        let raw = Vector3 {
            x: origin.x - current.x,
            y: origin.y - current.y,
            z: origin.z - current.z,
        };
        if rig.facing.is_diagonal() {
            trace!("No pan mapping for {:?}, dropping vertical drag", rig.facing);
        }
        let delta = rig.facing.redirect_pan(raw);
        rig.translate(delta);
    }
}

/// Zoom every rig lens with the mouse wheel while the modifier is held.
pub fn camera_zoom_system(
    input: Res<InputState>,
    settings: Res<CameraSettings>,
    mut lenses: Query<&mut OrthoLens, With<CameraRig>>,
) {
    if !input.modifier.active || input.scroll == 0.0 {
        return;
    }
    for mut lens in lenses.iter_mut() {
        lens.half_height = zoom_step(lens.half_height, input.scroll, &settings);
    }
}

/// Start and advance 45° snap rotations.
///
/// Idle rigs look for a rotate chord and get a [`RotationTransition`]. Rigs
/// already rotating ignore input and move toward the target; once within
/// [`SNAP_TOLERANCE`] the yaw is set exactly, the facing is updated, the
/// transition is removed and a [`CameraRotatedEvent`] is triggered.
pub fn camera_rotate_system(
    mut commands: Commands,
    input: Res<InputState>,
    time: Res<WorldTime>,
    settings: Res<CameraSettings>,
    mut rigs: Query<(Entity, &mut CameraRig, Option<&RotationTransition>)>,
) {
    for (entity, mut rig, transition) in rigs.iter_mut() {
        match transition {
            Some(transition) => {
                let target = transition.target_yaw;
                let next = step_yaw(
                    rig.yaw,
                    target,
                    settings.rotation_speed,
                    time.delta,
                    settings.rotation_mode,
                );
                if angle_between(next, target) < SNAP_TOLERANCE {
                    let facing = FacingDirection::from_yaw(target);
                    let yaw = facing.yaw();
                    rig.yaw = yaw;
                    rig.facing = facing;
                    commands.entity(entity).remove::<RotationTransition>();
                    commands.trigger(CameraRotatedEvent {
                        rig: entity,
                        yaw,
                        facing,
                    });
                } else {
                    rig.yaw = next;
                }
            }
            None => {
                let step = if input.rotate_right_chord() {
                    SNAP_STEP
                } else if input.rotate_left_chord() {
                    -SNAP_STEP
                } else {
                    continue;
                };
                let target = snap_target(&rig, step);
                debug!("Rig {:?} rotating from {} to {}", entity, rig.yaw, target);
                commands
                    .entity(entity)
                    .insert(RotationTransition::new(target));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn shortest_delta_wraps() {
        assert!(approx_eq(shortest_delta(350.0, 10.0), 20.0));
        assert!(approx_eq(shortest_delta(10.0, 350.0), -20.0));
        assert!(approx_eq(shortest_delta(0.0, -45.0), -45.0));
        assert!(approx_eq(shortest_delta(315.0, 360.0), 45.0));
        assert!(approx_eq(angle_between(0.0, 360.0), 0.0));
    }

    #[test]
    fn lerp_step_covers_fraction_of_remaining() {
        let yaw = step_yaw(0.0, 45.0, 10.0, 0.01, RotationMode::Lerp);
        assert!(approx_eq(yaw, 4.5));
        // factor clamps at the whole remaining angle
        let yaw = step_yaw(0.0, 45.0, 10.0, 1.0, RotationMode::Lerp);
        assert!(approx_eq(yaw, 45.0));
    }

    #[test]
    fn constant_step_is_capped_by_speed() {
        let yaw = step_yaw(0.0, 45.0, 90.0, 0.1, RotationMode::Constant);
        assert!(approx_eq(yaw, 9.0));
        let yaw = step_yaw(40.0, 45.0, 90.0, 0.1, RotationMode::Constant);
        assert!(approx_eq(yaw, 45.0));
        let yaw = step_yaw(0.0, -45.0, 90.0, 0.1, RotationMode::Constant);
        assert!(approx_eq(yaw, -9.0));
    }

    #[test]
    fn snap_target_rounds_then_steps() {
        let rig = CameraRig::default().with_yaw(10.0);
        assert_eq!(snap_target(&rig, SNAP_STEP), 45.0);
        assert_eq!(snap_target(&rig, -SNAP_STEP), -45.0);
        let rig = CameraRig::default().with_yaw(100.0);
        assert_eq!(snap_target(&rig, SNAP_STEP), 135.0);
    }

    #[test]
    fn zoom_step_direction_and_clamp() {
        let s = CameraSettings {
            zoom_amount: 1.0,
            min_cam_size: 2.0,
            max_cam_size: 5.0,
            ..CameraSettings::default()
        };
        assert_eq!(zoom_step(3.0, -1.0, &s), 4.0);
        assert_eq!(zoom_step(3.0, 1.0, &s), 2.0);
        assert_eq!(zoom_step(5.0, -1.0, &s), 5.0);
        assert_eq!(zoom_step(2.0, 1.0, &s), 2.0);
        assert_eq!(zoom_step(3.0, 0.0, &s), 3.0);
    }

    #[test]
    fn zoom_step_with_inverted_bounds_does_not_panic() {
        let s = CameraSettings {
            min_cam_size: 8.0,
            max_cam_size: 2.0,
            ..CameraSettings::default()
        };
        assert_eq!(zoom_step(5.0, -1.0, &s), 2.0);
        assert_eq!(zoom_step(5.0, 1.0, &s), 2.0);
    }
}
