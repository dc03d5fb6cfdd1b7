//! Help overlay flag.
//!
//! Presence of this resource makes the render system draw the fixed control
//! legend panel. Toggled by
//! [`switch_help_observer`](crate::events::helpoverlay::switch_help_observer).

use bevy_ecs::prelude::Resource;

/// Marker resource: present = help overlay visible.
#[derive(Resource, Debug, Default)]
pub struct HelpOverlay;
