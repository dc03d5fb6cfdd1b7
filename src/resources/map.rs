//! World map resource.
//!
//! A JSON-described tile map: tile size, extent in tiles, solid rectangles
//! and item spawn points (all in tile coordinates). The engine core only
//! reads the pixel extent for camera clamping and the solid/item lists at
//! setup; it never mutates the map.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

/// Axis-aligned solid region in tile coordinates.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct SolidRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Item spawn point in tile coordinates.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ItemSpawn {
    pub x: u32,
    pub y: u32,
}

/// World map: extent, solids and item spawns.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct WorldMap {
    pub tile_size: u32,
    pub map_width: u32,
    pub map_height: u32,
    #[serde(default)]
    pub solids: Vec<SolidRect>,
    #[serde(default)]
    pub items: Vec<ItemSpawn>,
}

impl WorldMap {
    /// Load a map from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read map file '{path}': {e}"))?;
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse map file '{path}': {e}"))
    }

    /// World extent in pixels.
    pub fn world_size_in_pixels(&self) -> Vector2 {
        Vector2 {
            x: (self.map_width * self.tile_size) as f32,
            y: (self.map_height * self.tile_size) as f32,
        }
    }

    /// Solid rectangles as pixel-space `(center_x, center_y, w, h)` tuples,
    /// ready for static body creation.
    pub fn solid_rects_in_pixels(&self) -> impl Iterator<Item = (f32, f32, f32, f32)> + '_ {
        let ts = self.tile_size as f32;
        self.solids.iter().map(move |s| {
            let w = s.w as f32 * ts;
            let h = s.h as f32 * ts;
            let cx = s.x as f32 * ts + w / 2.0;
            let cy = s.y as f32 * ts + h / 2.0;
            (cx, cy, w, h)
        })
    }

    /// Item spawn centers in pixel space.
    pub fn item_centers_in_pixels(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        let ts = self.tile_size as f32;
        self.items
            .iter()
            .map(move |i| (i.x as f32 * ts + ts / 2.0, i.y as f32 * ts + ts / 2.0))
    }

    /// Built-in fallback level used when no map file is available: a long
    /// ground strip, two floating platforms and one item.
    pub fn fallback() -> Self {
        Self {
            tile_size: 32,
            map_width: 63,
            map_height: 15,
            solids: vec![
                SolidRect {
                    x: 0,
                    y: 13,
                    w: 63,
                    h: 2,
                },
                SolidRect {
                    x: 10,
                    y: 9,
                    w: 4,
                    h: 1,
                },
                SolidRect {
                    x: 20,
                    y: 6,
                    w: 4,
                    h: 1,
                },
            ],
            items: vec![ItemSpawn { x: 12, y: 8 }],
        }
    }
}
