//! Engine systems.
//!
//! This module groups all ECS systems that advance input, camera control,
//! resource tokens and rendering.
//!
//! Submodules overview
//! - [`camera`] – pan, zoom and snap-rotate the camera rig
//! - [`gameconfig`] – push configuration changes into the camera settings
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – draw the grid, tokens and debug overlay using Raylib
//! - [`resourcetoken`] – token visibility and demo hotkeys
//! - [`time`] – update simulation time and delta
//! - [`tokenlayout`] – spawn resource tokens from JSON layouts

pub mod camera;
pub mod gameconfig;
pub mod input;
pub mod render;
pub mod resourcetoken;
pub mod time;
pub mod tokenlayout;
