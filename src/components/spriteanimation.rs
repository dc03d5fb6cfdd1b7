//! Frame-stepped spritesheet animation for the player sheet.

use bevy_ecs::prelude::Component;

use crate::components::player::AnimState;

/// Playback state over a three-track spritesheet (idle/move/jump rows).
///
/// The active track follows [`Player::anim`](crate::components::player::Player);
/// switching tracks restarts playback at frame zero.
#[derive(Component, Clone, Debug)]
pub struct SpriteAnimation {
    /// Frame cell size in unscaled texture pixels.
    pub frame_width: i32,
    pub frame_height: i32,
    /// Frames per track, indexed by sheet row: idle, move, jump.
    pub idle_frames: usize,
    pub move_frames: usize,
    pub jump_frames: usize,
    /// Seconds each frame is held.
    pub frame_time: f32,
    pub track: AnimState,
    pub frame: usize,
    pub elapsed: f32,
}

impl SpriteAnimation {
    pub fn new(frame_width: i32, frame_height: i32, frame_time: f32) -> Self {
        Self {
            frame_width,
            frame_height,
            idle_frames: 1,
            move_frames: 1,
            jump_frames: 1,
            frame_time,
            track: AnimState::Idle,
            frame: 0,
            elapsed: 0.0,
        }
    }

    pub fn with_tracks(mut self, idle: usize, mov: usize, jump: usize) -> Self {
        self.idle_frames = idle;
        self.move_frames = mov;
        self.jump_frames = jump;
        self
    }

    /// Sheet row and frame count for a track.
    pub fn track_info(&self, track: AnimState) -> (i32, usize) {
        match track {
            AnimState::Idle => (0, self.idle_frames.max(1)),
            AnimState::Move => (1, self.move_frames.max(1)),
            AnimState::Jump => (2, self.jump_frames.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_info_rows() {
        let anim = SpriteAnimation::new(32, 32, 0.1).with_tracks(4, 6, 2);
        assert_eq!(anim.track_info(AnimState::Idle), (0, 4));
        assert_eq!(anim.track_info(AnimState::Move), (1, 6));
        assert_eq!(anim.track_info(AnimState::Jump), (2, 2));
    }

    #[test]
    fn test_track_info_never_returns_zero_frames() {
        let anim = SpriteAnimation::new(32, 32, 0.1).with_tracks(0, 0, 0);
        assert_eq!(anim.track_info(AnimState::Idle).1, 1);
    }
}
