//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input snapshot, timing, camera
//! tunables and configuration. Each submodule documents the semantics and
//! intended usage of its resource(s).
//!
//! Overview
//! - `camerasettings` – zoom bounds, zoom step, rotation speed and mode
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed window and camera configuration
//! - `input` – per-frame keyboard/mouse snapshot relevant to the camera
//! - `screensize` – current framebuffer dimensions in pixels
//! - `worldtime` – simulation time and delta
pub mod camerasettings;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod worldtime;
