//! Event types and observers used by the engine.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`collision`] – contact begin/end notifications and the player response
//! - [`godmode`] – toggle direct-flight invincible mode
//! - [`helpoverlay`] – toggle the control legend overlay

pub mod audio;
pub mod collision;
pub mod godmode;
pub mod helpoverlay;
