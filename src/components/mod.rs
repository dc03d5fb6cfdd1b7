//! ECS components for entities.
//!
//! Submodules overview:
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`physicsbody`] – handle linking an entity to its physics body
//! - [`player`] – tracked actor state machine flags and tuning
//! - [`sprite`] – 2D sprite rendering component
//! - [`spriteanimation`] – frame playback over the player spritesheet

pub mod mapposition;
pub mod physicsbody;
pub mod player;
pub mod sprite;
pub mod spriteanimation;
