//! Shared ECS resources.

pub mod audio;
pub mod backgroundcolor;
pub mod camera;
pub mod gameconfig;
pub mod helpoverlay;
pub mod input;
pub mod map;
pub mod physics;
pub mod texturestore;
pub mod worldtime;
