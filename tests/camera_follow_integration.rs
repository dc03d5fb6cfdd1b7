//! Integration tests for camera follow over a headless ECS world.

use bevy_ecs::prelude::*;

use cliffrunner::components::mapposition::MapPosition;
use cliffrunner::components::player::Player;
use cliffrunner::resources::camera::Camera;
use cliffrunner::resources::gameconfig::GameConfig;
use cliffrunner::resources::map::WorldMap;
use cliffrunner::systems::camera::camera_follow;

/// Viewport and world sized in device pixels directly (scale 1).
fn make_world(viewport: (i32, i32), world_px: (u32, u32), scale: u32) -> (World, Schedule) {
    let mut world = World::new();

    let mut config = GameConfig::new();
    config.window_width = (viewport.0 as u32) / scale;
    config.window_height = (viewport.1 as u32) / scale;
    config.scale = scale;
    world.insert_resource(config);

    world.insert_resource(Camera::new(viewport.0, viewport.1));
    world.insert_resource(WorldMap {
        tile_size: 1,
        map_width: world_px.0 / scale,
        map_height: world_px.1 / scale,
        solids: vec![],
        items: vec![],
    });

    let mut schedule = Schedule::default();
    schedule.add_systems(camera_follow);
    (world, schedule)
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((MapPosition::new(x, y), Player::new()))
        .id()
}

fn camera(world: &World) -> Camera {
    *world.resource::<Camera>()
}

#[test]
fn test_follow_keeps_player_at_anchor() {
    // 800x480 viewport over a 2000x480 world, player at (500, 100):
    // horizontal anchor 200 gives offset -300, vertical axis is fully
    // visible and pins to 0.
    let (mut world, mut schedule) = make_world((800, 480), (2000, 480), 1);
    spawn_player(&mut world, 500.0, 100.0);

    schedule.run(&mut world);

    let cam = camera(&world);
    assert_eq!(cam.x, -300);
    assert_eq!(cam.y, 0);
}

#[test]
fn test_clamp_at_world_start() {
    let (mut world, mut schedule) = make_world((800, 480), (2000, 480), 1);
    spawn_player(&mut world, 50.0, 50.0);

    schedule.run(&mut world);

    let cam = camera(&world);
    assert_eq!(cam.x, 0);
    assert_eq!(cam.y, 0);
}

#[test]
fn test_clamp_at_world_far_edge() {
    let (mut world, mut schedule) = make_world((800, 480), (2000, 480), 1);
    spawn_player(&mut world, 1990.0, 470.0);

    schedule.run(&mut world);

    // Never shows area beyond the world: offset pinned at -(world - viewport).
    assert_eq!(camera(&world).x, -1200);
}

#[test]
fn test_vertical_follow_in_tall_world() {
    let (mut world, mut schedule) = make_world((800, 480), (800, 960), 1);
    spawn_player(&mut world, 100.0, 500.0);

    schedule.run(&mut world);

    let cam = camera(&world);
    // Horizontal axis equals the viewport: pinned. Vertical anchor is
    // h/2 = 240, so offset is -500 + 240 = -260.
    assert_eq!(cam.x, 0);
    assert_eq!(cam.y, -260);
}

#[test]
fn test_follow_accounts_for_display_scale() {
    // Logical 400x240 world content at scale 2 behaves like the scale-1
    // 800x480 scenario: logical player 250 is device 500, offset -300.
    let (mut world, mut schedule) = make_world((800, 480), (2000, 480), 2);
    spawn_player(&mut world, 250.0, 50.0);

    schedule.run(&mut world);

    let cam = camera(&world);
    assert_eq!(cam.x, -300);
    assert_eq!(cam.y, 0);
}

#[test]
fn test_follow_is_stable_for_stationary_player() {
    let (mut world, mut schedule) = make_world((800, 480), (2000, 480), 1);
    spawn_player(&mut world, 987.0, 100.0);

    schedule.run(&mut world);
    let first = camera(&world);
    schedule.run(&mut world);
    let second = camera(&world);

    assert_eq!(first, second);
}

#[test]
fn test_no_player_leaves_camera_untouched() {
    let (mut world, mut schedule) = make_world((800, 480), (2000, 480), 1);

    world.resource_mut::<Camera>().x = -42;
    schedule.run(&mut world);

    assert_eq!(camera(&world).x, -42);
}
