//! Resource token systems.
//!
//! - [`resource_visibility_system`] mirrors each token's flag onto its display
//! - [`token_hotkeys_system`] lets the demo keys remove/restore tokens

use bevy_ecs::prelude::*;
use log::{info, trace};

use crate::components::resourcetoken::ResourceToken;
use crate::components::visibility::Visibility;
use crate::events::resource::{ResourceRemovedEvent, ResourceRestoredEvent};
use crate::resources::input::InputState;

/// Set every display's visibility from its token: hidden when removed.
///
/// Runs every frame and never touches the tokens themselves, so calling it
/// any number of times gives the same result. Tokens whose display entity is
/// gone are skipped.
pub fn resource_visibility_system(
    tokens: Query<&ResourceToken>,
    mut displays: Query<&mut Visibility>,
) {
    for token in tokens.iter() {
        let Ok(mut visibility) = displays.get_mut(token.display) else {
            trace!("Display {:?} has no Visibility, skipping", token.display);
            continue;
        };
        visibility.set_if_neq(Visibility::new(token.display_visible()));
    }
}

/// Remove a random present token or restore them all from the demo keys.
pub fn token_hotkeys_system(
    input: Res<InputState>,
    tokens: Query<(Entity, &ResourceToken)>,
    mut commands: Commands,
) {
    if input.remove_token.just_pressed {
        let present: Vec<Entity> = tokens
            .iter()
            .filter(|(_, t)| !t.is_removed())
            .map(|(e, _)| e)
            .collect();
        if let Some(token) = fastrand::choice(present) {
            commands.trigger(ResourceRemovedEvent { token });
        } else {
            info!("No resource tokens left to remove");
        }
    }
    if input.restore_tokens.just_pressed {
        commands.trigger(ResourceRestoredEvent { token: None });
    }
}
