//! orthorig demo entry point.
//!
//! Opens a Raylib window showing a grid of resource tiles through an
//! orthographic camera rig:
//! - **Ctrl + left drag** pans the rig
//! - **Ctrl + mouse wheel** zooms
//! - **Ctrl + D / Ctrl + A** snaps the view 45° right / left
//! - **R** removes a random resource token, **T** restores them all
//! - **F11** toggles the debug overlay
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults if missing) and open the window
//! 2. Build the ECS world, observers, camera rig and token layout
//! 3. Each frame: advance time, poll input, run the frame logic, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --layout assets/layouts/resources.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use orthorig::game::{self, FrameLogic};
use orthorig::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use orthorig::resources::screensize::ScreenSize;
use orthorig::systems::input::update_input_state;
use orthorig::systems::render::render_system;
use orthorig::systems::time::update_world_time;

const DEFAULT_LAYOUT_PATH: &str = "./assets/layouts/resources.json";

/// Orthographic camera rig demo
#[derive(Parser)]
#[command(version, about = "Pan, zoom and snap-rotate an orthographic camera over resource tiles.")]
struct Cli {
    /// Configuration file to read.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// JSON token layout to spawn.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LAYOUT_PATH)]
    layout: String,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.write_config {
        let config = GameConfig::with_path(&cli.config);
        if let Err(e) = config.save_to_file() {
            log::error!("{e}");
            std::process::exit(1);
        }
        return;
    }

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{e}, using defaults");
    }

    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("orthorig")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(config.camera);
    game::insert_default_resources(&mut world, rl.get_screen_width(), rl.get_screen_height());
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::setup_scene(&mut world, Some(&cli.layout));

    let mut update = game::build_update_schedule();
    update.add_systems(update_input_state.before(FrameLogic));
    update.add_systems(render_system.after(FrameLogic));

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        // Window may have been resized since the last frame
        let (w, h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut screen = world.resource_mut::<ScreenSize>();
            screen.w = w;
            screen.h = h;
        }

        update.run(&mut world);

        world.clear_trackers();
    }
    log::info!("Bye");
}
