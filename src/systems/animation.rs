//! Sprite animation advance.
//!
//! Moves each animated sprite along the track selected by the player
//! controller. Switching tracks resets the frame counter so a landing shows
//! the first idle frame instead of a mid-run cell. The current frame is
//! published as the sprite's source section for the render pass.

use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::spriteanimation::SpriteAnimation;
use crate::draw::Rect;
use crate::resources::worldtime::WorldTime;

pub fn animate_sprites(
    time: Res<WorldTime>,
    mut query: Query<(&Player, &mut SpriteAnimation, &mut Sprite)>,
) {
    for (player, mut anim, mut sprite) in query.iter_mut() {
        if anim.track != player.anim {
            anim.track = player.anim;
            anim.frame = 0;
            anim.elapsed = 0.0;
        }

        let (row, count) = anim.track_info(anim.track);

        if anim.frame_time > 0.0 {
            anim.elapsed += time.delta;
            while anim.elapsed >= anim.frame_time {
                anim.elapsed -= anim.frame_time;
                anim.frame = (anim.frame + 1) % count;
            }
        }

        sprite.section = Some(Rect::new(
            anim.frame as i32 * anim.frame_width,
            row * anim.frame_height,
            anim.frame_width,
            anim.frame_height,
        ));
    }
}
