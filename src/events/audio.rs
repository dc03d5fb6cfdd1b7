//! Commands and messages exchanged with the audio thread.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread. Playback is fire-and-forget.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    UnloadFx { id: String },
    UnloadAllFx,
    Shutdown,
}

/// Messages sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxUnloaded { id: String },
    FxUnloadedAll,
}
