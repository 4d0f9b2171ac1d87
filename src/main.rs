//! Spritewalk main entry point.
//!
//! A small keyboard-driven sprite walker built with:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Each frame the player entity samples the four directional keys, moves by a
//! fixed step per held direction, and plays the matching directional clip.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (position, sprite, clip playback, mover)
//! - [`game`] – world setup: asset loading and entity spawning
//! - [`resources`] – ECS resources (input state, time, config, asset stores)
//! - [`systems`] – ECS systems (input, movement, animation, rendering)
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window and the ECS world with its resources
//! 2. Load the spritesheet and clip manifest, spawn the player
//! 3. Run the update schedule once per frame: input, mover, animation, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod game;
mod resources;
mod systems;

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::directionalmover::directional_mover;
use crate::systems::input::update_input_state;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// Spritewalk
#[derive(Parser)]
#[command(version, about = "A keyboard-driven sprite walker")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("Config file not loaded, using defaults: {}", e);
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Spritewalk")
        .build();
    rl.set_target_fps(config.target_fps);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }
    unsafe {
        if config.vsync {
            raylib::ffi::SetWindowState(raylib::ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            raylib::ffi::ClearWindowState(raylib::ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(DebugMode::default());
    world.insert_resource(config);

    game::setup(&mut world, &mut rl, &thread);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(directional_mover.after(update_input_state));
    update.add_systems(animation.after(directional_mover));
    update.add_systems(render_system.after(animation));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    log::info!("Spritewalk up: {}x{} window", window_width, window_height);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);
    }
}
