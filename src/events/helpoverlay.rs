//! Event and observer toggling the help overlay.
//!
//! Emitting a [`SwitchHelpEvent`] flips the presence of the
//! [`HelpOverlay`](crate::resources::helpoverlay::HelpOverlay) resource. The
//! render system draws the control legend while the resource exists.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::helpoverlay::HelpOverlay;

/// Event used to toggle the help overlay on/off. Carries no data; the
/// observer switches the presence of the resource.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchHelpEvent {}

/// Observer that toggles the [`HelpOverlay`] resource.
pub fn switch_help_observer(
    _trigger: On<SwitchHelpEvent>,
    mut commands: Commands,
    help: Option<Res<HelpOverlay>>,
) {
    if help.is_some() {
        commands.remove_resource::<HelpOverlay>();
        log::info!("Help overlay hidden");
    } else {
        commands.insert_resource(HelpOverlay);
        log::info!("Help overlay shown");
    }
}
