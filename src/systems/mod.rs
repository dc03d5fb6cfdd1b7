//! ECS systems, one module per concern.
//!
//! Frame order: input → physics step (and contact fan-out) → player
//! controller → camera follow → animation → render. Audio message pumps run
//! around the frame to bridge the background audio thread.

pub mod animation;
pub mod audio;
pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod render;
pub mod time;
