//! Event types and observers.
//!
//! Events let gameplay code and the demo shell talk to the camera and token
//! systems without direct dependencies.
//!
//! Submodules:
//! - [`camera`] – notification when a snap rotation finishes
//! - [`resource`] – set or clear resource token "removed" flags
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod camera;
pub mod resource;
pub mod switchdebug;
