//! Level setup: map geometry, physics bodies, entities and assets.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::spriteanimation::SpriteAnimation;
use crate::draw::Rect;
use crate::events::audio::AudioCmd;
use crate::resources::backgroundcolor::BackgroundColor;
use crate::resources::map::WorldMap;
use crate::resources::physics::{BodyKind, ColliderType, Physics};
use crate::resources::texturestore::TextureStore;

const PLAYER_SPAWN_X: f32 = 100.0;
const PLAYER_SPAWN_Y: f32 = 200.0;
const PLAYER_RADIUS: f32 = 14.0;
const ITEM_RADIUS: f32 = 8.0;

/// Player spritesheet layout: three rows (idle/move/jump) of 32x32 cells.
const FRAME_SIZE: i32 = 32;
const IDLE_FRAMES: usize = 4;
const MOVE_FRAMES: usize = 6;
const JUMP_FRAMES: usize = 2;

fn load_texture_into_store(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    store: &mut TextureStore,
    key: &str,
    path: &str,
) {
    match rl.load_texture(thread, path) {
        Ok(texture) => store.add(key, texture),
        // Sprites with this key will fail per-draw and the frame continues.
        Err(e) => log::warn!("Failed to load texture '{key}' from {path}: {e}"),
    }
}

/// Load assets and build the level. Called once before the main loop, while
/// the raylib handle is still outside the world.
pub fn setup(world: &mut World, rl: &mut RaylibHandle, thread: &RaylibThread) {
    let mut textures = TextureStore::new();
    load_texture_into_store(rl, thread, &mut textures, "player", "assets/textures/player.png");
    load_texture_into_store(rl, thread, &mut textures, "items", "assets/textures/items.png");
    load_texture_into_store(rl, thread, &mut textures, "bg", "assets/textures/bg.png");
    world.insert_non_send_resource(textures);

    build_scene(world);
}

/// Create the static world geometry and spawn the background, items and
/// player. Headless: needs only the [`Physics`] resource and the audio
/// command queue.
pub fn build_scene(world: &mut World) {
    // Distant backdrop scrolling at half the camera speed.
    world.spawn((
        MapPosition::new(0.0, 0.0),
        Sprite::new("bg").with_parallax(0.5),
    ));

    let map = match WorldMap::load_from_file("assets/maps/level1.json") {
        Ok(map) => map,
        Err(e) => {
            log::warn!("Could not load level map, using built-in layout: {e}");
            WorldMap::fallback()
        }
    };

    // Static geometry only exists in the physics world; nothing to draw yet.
    let solids: Vec<_> = map.solid_rects_in_pixels().collect();
    let items: Vec<_> = map.item_centers_in_pixels().collect();
    world.insert_resource(map);

    {
        let mut physics = world.resource_mut::<Physics>();
        for (cx, cy, w, h) in &solids {
            let handle = physics.create_rect(*cx, *cy, *w, *h, BodyKind::Static);
            physics.set_collider_type(handle, ColliderType::Platform);
        }
    }

    for (cx, cy) in items {
        let handle = {
            let mut physics = world.resource_mut::<Physics>();
            let handle = physics.create_circle(cx, cy, ITEM_RADIUS, BodyKind::Static);
            physics.set_collider_type(handle, ColliderType::Item);
            handle
        };
        let entity = world
            .spawn((
                MapPosition::new(cx, cy),
                Sprite::new("items")
                    .with_section(Rect::new(0, 0, 16, 16))
                    .with_pivot(8, 8),
                PhysicsBody::new(handle),
            ))
            .id();
        world
            .resource_mut::<Physics>()
            .set_listener(handle, entity);
    }

    let player_handle = {
        let mut physics = world.resource_mut::<Physics>();
        let handle = physics.create_circle(
            PLAYER_SPAWN_X,
            PLAYER_SPAWN_Y,
            PLAYER_RADIUS,
            BodyKind::Dynamic,
        );
        physics.set_collider_type(handle, ColliderType::Player);
        handle
    };
    let player = world
        .spawn((
            MapPosition::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            Sprite::new("player")
                .with_section(Rect::new(0, 0, FRAME_SIZE, FRAME_SIZE))
                .with_pivot(FRAME_SIZE / 2, FRAME_SIZE / 2),
            SpriteAnimation::new(FRAME_SIZE, FRAME_SIZE, 0.12).with_tracks(
                IDLE_FRAMES,
                MOVE_FRAMES,
                JUMP_FRAMES,
            ),
            Player::new().with_pickup_fx("coin"),
            PhysicsBody::new(player_handle),
        ))
        .id();
    world
        .resource_mut::<Physics>()
        .set_listener(player_handle, player);

    world
        .resource_mut::<Messages<AudioCmd>>()
        .write(AudioCmd::LoadFx {
            id: "coin".into(),
            path: "assets/audio/coin.wav".into(),
        });

    world.insert_resource(BackgroundColor(Color::new(24, 28, 40, 255)));
}
