//! Audio system backed by a dedicated thread and Raylib.
//!
//! [`audio_thread`] runs on its own OS thread, owns the Raylib audio device
//! and every loaded `Sound`, and processes [`AudioCmd`] messages. The main
//! thread never touches raylib audio directly; it communicates over
//! crossbeam channels:
//! - [`forward_audio_cmds`] pushes ECS `AudioCmd` messages to the thread.
//! - [`poll_audio_messages`] drains thread responses into the ECS mailbox.
//! - the two `update_*` systems advance the ECS message queues each frame.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Res};
use bevy_ecs::system::ResMut;
use crossbeam_channel::{Receiver, Sender};
use raylib::core::audio::{RaylibAudio, Sound};
use rustc_hash::FxHashMap;

/// Drain pending messages from the audio thread into the ECS mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors during shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}

/// Entry point of the dedicated audio thread.
///
/// Initializes the raylib audio device, owns all `Sound` handles, reacts to
/// [`AudioCmd`] inputs and reports [`AudioMessage`] outputs. Blocks until
/// [`AudioCmd::Shutdown`] arrives, then unloads everything and exits.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            log::error!("Failed to initialize audio device: {e}");
            return;
        }
    };

    log::info!(
        "audio thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        log::info!("audio: loaded fx '{id}' from '{path}'");
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        log::warn!("audio: load failed fx '{id}' path '{path}': {e}");
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => match sounds.get(&id) {
                    Some(sound) => sound.play(),
                    None => log::warn!("audio: play requested for unknown fx '{id}'"),
                },
                AudioCmd::UnloadFx { id } => {
                    if sounds.remove(&id).is_some() {
                        let _ = tx_msg.send(AudioMessage::FxUnloaded { id });
                    }
                }
                AudioCmd::UnloadAllFx => {
                    sounds.clear();
                    let _ = tx_msg.send(AudioMessage::FxUnloadedAll);
                }
                AudioCmd::Shutdown => {
                    log::info!("audio thread shutting down");
                    sounds.clear();
                    break 'run;
                }
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
}
