//! Resource token component.
//!
//! A token tracks whether the resource on a tile has been removed and points
//! at the entity that displays it. The
//! [`resource_visibility_system`](crate::systems::resourcetoken::resource_visibility_system)
//! recomputes the display's [`Visibility`](super::visibility::Visibility)
//! from the flag every frame. Nothing inside the token logic flips the flag;
//! callers do, either directly through [`ResourceToken::set_removed`] or by
//! triggering [`ResourceRemovedEvent`](crate::events::resource::ResourceRemovedEvent).

use bevy_ecs::prelude::*;

#[derive(Component, Clone, Copy, Debug)]
pub struct ResourceToken {
    removed: bool,
    /// Entity whose visibility mirrors this token.
    pub display: Entity,
}

impl ResourceToken {
    /// A present (not removed) token shown by `display`.
    pub fn new(display: Entity) -> Self {
        Self {
            removed: false,
            display,
        }
    }

    pub fn with_removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn set_removed(&mut self, removed: bool) {
        self.removed = removed;
    }

    /// Visibility the display object should have.
    pub fn display_visible(&self) -> bool {
        !self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_token_is_present_and_visible() {
        let token = ResourceToken::new(Entity::PLACEHOLDER);
        assert!(!token.is_removed());
        assert!(token.display_visible());
    }

    #[test]
    fn removed_token_hides_display() {
        let mut token = ResourceToken::new(Entity::PLACEHOLDER);
        token.set_removed(true);
        assert!(!token.display_visible());
        token.set_removed(false);
        assert!(token.display_visible());
    }

    #[test]
    fn builder_sets_initial_flag() {
        let token = ResourceToken::new(Entity::PLACEHOLDER).with_removed(true);
        assert!(token.is_removed());
    }
}
