//! Events that flip resource token flags from outside the token logic.
//!
//! The visibility system only reads [`ResourceToken::is_removed`]; gameplay
//! code (harvesting, scripted events, the demo keys) changes it by triggering
//! these events.
//!
//! ```ignore
//! commands.trigger(ResourceRemovedEvent { token });
//! ```
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::resourcetoken::ResourceToken;

/// Mark one token as removed.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResourceRemovedEvent {
    pub token: Entity,
}

/// Mark a token as present again. `None` restores every token.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResourceRestoredEvent {
    pub token: Option<Entity>,
}

pub fn resource_removed_observer(
    trigger: On<ResourceRemovedEvent>,
    mut tokens: Query<&mut ResourceToken>,
) {
    let token = trigger.event().token;
    match tokens.get_mut(token) {
        Ok(mut t) => {
            t.set_removed(true);
            debug!("Resource token {:?} removed", token);
        }
        Err(_) => warn!("ResourceRemovedEvent for {:?}, which is not a token", token),
    }
}

pub fn resource_restored_observer(
    trigger: On<ResourceRestoredEvent>,
    mut tokens: Query<&mut ResourceToken>,
) {
    match trigger.event().token {
        Some(token) => match tokens.get_mut(token) {
            Ok(mut t) => {
                t.set_removed(false);
                debug!("Resource token {:?} restored", token);
            }
            Err(_) => warn!("ResourceRestoredEvent for {:?}, which is not a token", token),
        },
        None => {
            let mut count = 0;
            for mut t in tokens.iter_mut() {
                if t.is_removed() {
                    t.set_removed(false);
                    count += 1;
                }
            }
            debug!("Restored {} resource tokens", count);
        }
    }
}
