//! Binary entry point.
//!
//! Wires together the raylib window, the ECS world and the per-frame
//! schedule, then runs the main loop until the window closes or ESC quits.

#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;

use cliffrunner::events::collision::{contact_begin_observer, contact_end_observer};
use cliffrunner::events::godmode::switch_god_mode_observer;
use cliffrunner::events::helpoverlay::switch_help_observer;
use cliffrunner::game;
use cliffrunner::resources::audio::{setup_audio, shutdown_audio};
use cliffrunner::resources::camera::Camera;
use cliffrunner::resources::gameconfig::GameConfig;
use cliffrunner::resources::helpoverlay::HelpOverlay;
use cliffrunner::resources::input::InputState;
use cliffrunner::resources::physics::Physics;
use cliffrunner::resources::worldtime::WorldTime;
use cliffrunner::systems::animation::animate_sprites;
use cliffrunner::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use cliffrunner::systems::camera::camera_follow;
use cliffrunner::systems::input::update_input_state;
use cliffrunner::systems::physics::physics_step;
use cliffrunner::systems::player::player_controller;
use cliffrunner::systems::render::render_system;
use cliffrunner::systems::time::update_world_time;

const GRAVITY_Y: f32 = 900.0;

#[derive(Parser, Debug)]
#[command(name = "cliffrunner", about = "Side-scrolling platformer")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, default_value = "config.ini")]
    config: String,

    /// Start with the help overlay visible.
    #[arg(long)]
    help_overlay: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("Using default configuration: {e}");
    }

    let mut builder = raylib::init();
    builder
        .size(config.device_width(), config.device_height())
        .title("Cliffrunner");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // ESC is handled through InputState, not raylib's implicit exit key.
    rl.set_exit_key(None);

    let mut world = World::new();
    world.insert_resource(Camera::new(config.device_width(), config.device_height()));
    world.insert_resource(Physics::new(GRAVITY_Y));
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    if cli.help_overlay {
        world.insert_resource(HelpOverlay);
    }
    world.insert_resource(config);

    setup_audio(&mut world);
    game::setup(&mut world, &mut rl, &thread);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(contact_begin_observer));
    world.spawn(Observer::new(contact_end_observer));
    world.spawn(Observer::new(switch_god_mode_observer));
    world.spawn(Observer::new(switch_help_observer));

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(physics_step.after(update_input_state));
    update.add_systems(player_controller.after(physics_step));
    update.add_systems(camera_follow.after(player_controller));
    update.add_systems(animate_sprites.after(player_controller));
    update.add_systems(poll_audio_messages);
    update.add_systems(update_bevy_audio_messages.after(poll_audio_messages));
    update.add_systems(forward_audio_cmds.after(player_controller));
    update.add_systems(update_bevy_audio_cmds.after(forward_audio_cmds));
    update.add_systems(render_system.after(camera_follow).after(animate_sprites));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    loop {
        let (closing, dt) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.window_should_close(), rl.get_frame_time())
        };
        if closing || world.resource::<InputState>().quit.just_pressed {
            break;
        }

        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
    }

    shutdown_audio(&mut world);
}
