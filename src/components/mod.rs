//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the world: the camera rig and its lens, the transient rotation state, and
//! the resource tokens with their display objects.
//!
//! Submodules overview:
//! - [`camerarig`] – movable camera pivot: position, yaw, facing, drag origin
//! - [`facing`] – compass facing and the pan remapping table
//! - [`ortholens`] – orthographic zoom and screen/world projection
//! - [`resourcetoken`] – removed flag linked to a display entity
//! - [`rotationtransition`] – in-flight 45° snap rotation
//! - [`tokenlayout`] – JSON-driven spawning of resource tiles
//! - [`tokenshape`] – box drawn for a token display
//! - [`visibility`] – whether an entity is drawn
//! - [`worldposition`] – world-space position of tiles

pub mod camerarig;
pub mod facing;
pub mod ortholens;
pub mod resourcetoken;
pub mod rotationtransition;
pub mod tokenlayout;
pub mod tokenshape;
pub mod visibility;
pub mod worldposition;
