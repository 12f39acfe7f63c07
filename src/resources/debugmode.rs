//! Debug toggle resource.
//!
//! The mere presence of this resource tells the renderer to draw the camera
//! state overlay. Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the debug overlay is drawn.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
