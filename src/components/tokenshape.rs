//! Box shape used to draw a resource token display.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Copy, Debug)]
pub struct TokenShape {
    /// Footprint edge length (square).
    pub size: f32,
    /// Box height.
    pub height: f32,
    pub color: Color,
}

impl TokenShape {
    pub fn new(size: f32, height: f32, color: Color) -> Self {
        Self {
            size,
            height,
            color,
        }
    }
}
