//! Texture store.
//!
//! A non-send store of loaded textures keyed by string IDs. Raylib textures
//! must stay on the main thread, so insert this with
//! `insert_non_send_resource` and access it via `NonSend`/`NonSendMut`.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Add a texture with the given key.
    pub fn add(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.textures.insert(id.into(), texture);
    }

    /// Get a texture by its key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(id.as_ref())
    }

    /// Drop all loaded textures.
    pub fn clear(&mut self) {
        self.textures.clear();
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
