//! Token layout component for data-driven resource placement.
//!
//! The [`TokenLayout`] component references a JSON file describing a grid of
//! tiles on the ground plane. When the component is added, the
//! [`tokenlayout_spawn_system`](crate::systems::tokenlayout::tokenlayout_spawn_system)
//! reads the file and spawns, for each non-empty cell, a display entity and a
//! [`ResourceToken`](super::resourcetoken::ResourceToken) linked to it.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Spawns resource tokens from a JSON layout when added to an entity.
#[derive(Component, Debug, Clone)]
pub struct TokenLayout {
    /// Path to the JSON file defining the layout.
    pub path: String,
    /// whether this layout has been spawned
    pub spawned: bool,
}

impl TokenLayout {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            spawned: false,
        }
    }
}

/// Layout data loaded from JSON.
///
/// Rows of `grid` run along +z, characters along +x. Each character is looked
/// up in `legend`; missing characters and `null` entries are empty tiles.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenLayoutData {
    pub offset_x: f32,
    pub offset_z: f32,
    pub cell_size: f32,
    pub grid: Vec<String>,
    pub legend: FxHashMap<char, Option<TokenCell>>,
}

/// A single kind of resource tile.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenCell {
    /// RGB colour of the display box.
    pub color: [u8; 3],
    #[serde(default = "default_height")]
    pub height: f32,
    /// Start with the resource already removed.
    #[serde(default)]
    pub removed: bool,
}

fn default_height() -> f32 {
    0.5
}

impl TokenCell {
    pub fn raylib_color(&self) -> Color {
        Color::new(self.color[0], self.color[1], self.color[2], 255)
    }
}

impl TokenLayoutData {
    /// Loads layout data from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        Self::from_json(&file_content)
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let layout_data: TokenLayoutData = serde_json::from_str(json)?;
        if layout_data.cell_size <= 0.0 {
            return Err(format!("cell_size must be positive, got {}", layout_data.cell_size).into());
        }
        Ok(layout_data)
    }

    /// Iterate over all defined cells with the (x, z) center of their tile.
    pub fn iter_cells(&self) -> impl Iterator<Item = (f32, f32, &TokenCell)> {
        self.grid.iter().enumerate().flat_map(move |(row, line)| {
            line.chars().enumerate().filter_map(move |(col, ch)| {
                if let Some(Some(cell)) = self.legend.get(&ch) {
                    let x = self.offset_x + (col as f32 * self.cell_size) + (self.cell_size * 0.5);
                    let z = self.offset_z + (row as f32 * self.cell_size) + (self.cell_size * 0.5);
                    Some((x, z, cell))
                } else {
                    None
                }
            })
        })
    }
}
