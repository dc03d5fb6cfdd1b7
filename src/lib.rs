//! Side-scrolling platformer engine core.
//!
//! A bevy_ecs world over a raylib window: camera follow with world clamping,
//! scaled immediate-mode drawing with a built-in 5x7 glyph font, a
//! physics-driven player controller with a god-mode override, and a
//! background audio thread bridged over channels.

pub mod components;
pub mod draw;
pub mod events;
pub mod game;
pub mod glyph;
pub mod resources;
pub mod systems;
