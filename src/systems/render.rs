//! Rendering through Raylib.
//!
//! [`render_system`] is an exclusive system: it borrows the Raylib handle and
//! thread out of the world for the duration of the frame, draws the ground
//! grid and visible token displays through the first camera rig's lens, then
//! hands them back.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::camerarig::CameraRig;
use crate::components::ortholens::OrthoLens;
use crate::components::resourcetoken::ResourceToken;
use crate::components::rotationtransition::RotationTransition;
use crate::components::tokenshape::TokenShape;
use crate::components::visibility::Visibility;
use crate::components::worldposition::WorldPosition;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;

const GRID_SLICES: i32 = 32;

pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    let camera = {
        let mut rigs = world.query::<(&CameraRig, &OrthoLens)>();
        rigs.iter(world).next().map(|(rig, lens)| lens.camera3d(rig))
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);

        if let Some(camera) = camera {
            let mut d3 = d.begin_mode3D(camera);
            d3.draw_grid(GRID_SLICES, 1.0);
            render_tokens(world, &mut d3);
        }

        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

fn render_tokens(world: &mut World, d3: &mut RaylibMode3D<RaylibDrawHandle>) {
    let mut displays = world.query::<(&WorldPosition, &TokenShape, &Visibility)>();
    for (position, shape, visibility) in displays.iter(world) {
        if !visibility.visible {
            continue;
        }
        let center = Vector3 {
            x: position.pos.x,
            y: position.pos.y + shape.height * 0.5,
            z: position.pos.z,
        };
        d3.draw_cube(center, shape.size, shape.height, shape.size, shape.color);
        d3.draw_cube_wires(center, shape.size, shape.height, shape.size, Color::DARKGRAY);
    }

    let mut rigs = world.query::<&CameraRig>();
    for rig in rigs.iter(world) {
        d3.draw_sphere(rig.pos, 0.1, Color::RED);
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();

    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, Color::BLACK);

    let mut rigs = world.query::<(&CameraRig, &OrthoLens, Option<&RotationTransition>)>();
    let mut y = 30;
    for (rig, lens, transition) in rigs.iter(world) {
        let rotating = match transition {
            Some(t) => format!(" -> {:.1}", t.target_yaw),
            None => String::new(),
        };
        let text = format!(
            "Rig pos: ({:.2}, {:.2}, {:.2}) yaw: {:.1}{} facing: {:?} size: {:.2}",
            rig.pos.x, rig.pos.y, rig.pos.z, rig.yaw, rotating, rig.facing, lens.half_height
        );
        d.draw_text(&text, 10, y, 10, Color::BLACK);
        y += 20;
    }

    let mut tokens = world.query::<&ResourceToken>();
    let (total, removed) = tokens
        .iter(world)
        .fold((0, 0), |(t, r), tok| (t + 1, r + usize::from(tok.is_removed())));
    let text = format!("Tokens: {} ({} removed) | R remove, T restore", total, removed);
    d.draw_text(&text, 10, screen.h - 30, 10, Color::BLACK);
}
