//! Contact events and the player's collision response.
//!
//! The physics step system fans drained contact pairs out as
//! [`ContactBeginEvent`]/[`ContactEndEvent`] addressed to the listener entity
//! of each body. The observers here dispatch on the closed
//! [`ColliderType`] classification: a finite tag set, so an enum match — not
//! open-ended dynamic dispatch — is the contract.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::player::{AnimState, Player};
use crate::events::audio::AudioCmd;
use crate::resources::physics::{BodyHandle, ColliderType, Physics};

/// A contact involving `this` entity's body started this frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct ContactBeginEvent {
    /// Listener entity whose body participated.
    pub this: Entity,
    pub this_body: BodyHandle,
    /// The other body's listener entity, when it has one.
    pub other: Option<Entity>,
    pub other_body: BodyHandle,
    pub other_type: ColliderType,
}

/// A contact involving `this` entity's body ended this frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct ContactEndEvent {
    pub this: Entity,
    pub this_body: BodyHandle,
    pub other: Option<Entity>,
    pub other_body: BodyHandle,
    pub other_type: ColliderType,
}

/// Player response to contact begin.
///
/// - `Platform`: landing — clears the jump flag and forces `Idle`, even when
///   the contact is sideways or horizontal velocity is nonzero. Runs in god
///   mode too; only pickups and hazard effects are god-mode-suppressed.
/// - `Item`: one-shot pickup — fire-and-forget fx, destroy the item's body
///   and despawn its entity. Suppressed entirely in god mode.
/// - `Unknown`: logged, no state change.
pub fn contact_begin_observer(
    trigger: On<ContactBeginEvent>,
    mut commands: Commands,
    mut physics: ResMut<Physics>,
    mut players: Query<&mut Player>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    let Ok(mut player) = players.get_mut(event.this) else {
        return;
    };

    match event.other_type {
        ColliderType::Platform => {
            log::debug!("contact begin: PLATFORM");
            player.is_jumping = false;
            player.anim = AnimState::Idle;
        }
        ColliderType::Item => {
            if player.god_mode {
                return;
            }
            log::debug!("contact begin: ITEM");
            if !player.pickup_fx.is_empty() {
                audio.write(AudioCmd::PlayFx {
                    id: player.pickup_fx.clone(),
                });
            }
            physics.destroy(event.other_body);
            if let Some(item_entity) = event.other {
                commands.entity(item_entity).despawn();
            }
        }
        ColliderType::Unknown => {
            log::debug!("contact begin: UNKNOWN");
        }
        ColliderType::Player => {}
    }
}

/// Contact-end bookkeeping is log-only, mirroring begin's classification.
pub fn contact_end_observer(trigger: On<ContactEndEvent>, players: Query<&Player>) {
    let event = trigger.event();
    if players.get(event.this).is_err() {
        return;
    }
    match event.other_type {
        ColliderType::Platform => log::debug!("contact end: PLATFORM"),
        ColliderType::Item => log::debug!("contact end: ITEM"),
        ColliderType::Unknown => log::debug!("contact end: UNKNOWN"),
        ColliderType::Player => {}
    }
}
