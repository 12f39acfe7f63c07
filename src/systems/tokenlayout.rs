//! Token layout spawning system.
//!
//! The [`tokenlayout_spawn_system`] processes newly added [`TokenLayout`]
//! components, loads their JSON data, and spawns two entities per cell: a
//! display ([`WorldPosition`], [`TokenShape`], [`Visibility`]) and the
//! [`ResourceToken`] that drives it.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "offset_x": -4.0,
//!   "offset_z": -4.0,
//!   "cell_size": 1.0,
//!   "grid": ["WW..", ".SS."],
//!   "legend": {
//!     "W": { "color": [60, 140, 60], "height": 0.8 },
//!     "S": { "color": [130, 130, 140], "height": 0.4, "removed": true },
//!     ".": null
//!   }
//! }
//! ```

use bevy_ecs::prelude::*;
use log::{error, info};

use crate::components::resourcetoken::ResourceToken;
use crate::components::tokenlayout::{TokenLayout, TokenLayoutData};
use crate::components::tokenshape::TokenShape;
use crate::components::visibility::Visibility;
use crate::components::worldposition::WorldPosition;

/// Share of the cell a token box covers.
const TOKEN_FOOTPRINT: f32 = 0.8;

/// Spawn tokens for every data cell of a layout.
pub fn spawn_layout(commands: &mut Commands, layout_data: &TokenLayoutData) -> usize {
    let mut count = 0;
    for (x, z, cell) in layout_data.iter_cells() {
        let display = commands
            .spawn((
                WorldPosition::new(x, 0.0, z),
                TokenShape::new(
                    layout_data.cell_size * TOKEN_FOOTPRINT,
                    cell.height,
                    cell.raylib_color(),
                ),
                Visibility::new(!cell.removed),
            ))
            .id();
        commands.spawn(ResourceToken::new(display).with_removed(cell.removed));
        count += 1;
    }
    count
}

/// System that processes TokenLayout components and spawns tokens accordingly.
pub fn tokenlayout_spawn_system(
    mut commands: Commands,
    mut query: Query<&mut TokenLayout, Added<TokenLayout>>,
) {
    for mut layout in query.iter_mut() {
        if layout.spawned {
            continue;
        }

        let layout_data = match TokenLayoutData::load_from_file(&layout.path) {
            Ok(data) => data,
            Err(err) => {
                error!("Failed to load token layout from {}: {}", layout.path, err);
                layout.spawned = true; // Prevent retrying
                continue;
            }
        };

        let count = spawn_layout(&mut commands, &layout_data);
        layout.spawned = true;

        info!("Spawned {} resource tokens from {}", count, layout.path);
    }
}
