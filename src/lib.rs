//! orthorig library.
//!
//! An orthographic camera rig controller (drag to pan, wheel to zoom, 45°
//! snap rotation) and resource-token visibility toggling, as `bevy_ecs`
//! components, resources, systems and events. Exposed as a library for
//! integration tests and for hosts other than the bundled Raylib demo.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
