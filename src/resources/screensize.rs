//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The pan system needs
//! them to project the pointer onto the lens plane.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
