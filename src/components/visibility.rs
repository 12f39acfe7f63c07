use bevy_ecs::prelude::Component;

/// Whether an entity is drawn. Hidden entities stay in the world.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub visible: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl Visibility {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }
}
