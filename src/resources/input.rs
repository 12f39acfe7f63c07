//! Per-frame input snapshot resource.
//!
//! Captures the subset of keyboard and mouse state the camera and token
//! systems care about and exposes it via the [`InputState`] resource. The
//! snapshot is written once per frame by
//! [`update_input_state`](crate::systems::input::update_input_state); tests
//! and other hosts can fill it by hand instead.
//!
//! Level (`active`) and edge (`just_pressed`) are kept apart: drag start and
//! snap rotation react to edges, while drag continuation, zoom and the
//! modifier gate read levels.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// Released state bound to `key`.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// Boolean mouse button state with an associated button binding.
pub struct ButtonState {
    /// Whether the button is held down this frame.
    pub active: bool,
    /// Whether the button went down this frame.
    pub just_pressed: bool,
    /// Whether the button came up this frame.
    pub just_released: bool,

    /// The mouse button bound to this action.
    pub button_binding: MouseButton,
}

impl ButtonState {
    /// Released state bound to `button`.
    pub fn bound(button: MouseButton) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            button_binding: button,
        }
    }
}

/// Resource capturing the per-frame input relevant to the camera rig and the
/// resource tokens.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Gate for every camera gesture (left control).
    pub modifier: BoolState,
    /// Snap 45° clockwise (D).
    pub rotate_right: BoolState,
    /// Snap 45° counterclockwise (A).
    pub rotate_left: BoolState,
    /// Pointer button that drags the rig (left mouse).
    pub pan_button: ButtonState,
    /// Pointer position in screen pixels, origin top-left.
    pub pointer: Vector2,
    /// Mouse wheel movement this frame. Positive is away from the user.
    pub scroll: f32,
    // Demo / debug keys
    pub mode_debug: BoolState,
    pub remove_token: BoolState,
    pub restore_tokens: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            modifier: BoolState::bound(KeyboardKey::KEY_LEFT_CONTROL),
            rotate_right: BoolState::bound(KeyboardKey::KEY_D),
            rotate_left: BoolState::bound(KeyboardKey::KEY_A),
            pan_button: ButtonState::bound(MouseButton::MOUSE_BUTTON_LEFT),
            pointer: Vector2 { x: 0.0, y: 0.0 },
            scroll: 0.0,
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
            remove_token: BoolState::bound(KeyboardKey::KEY_R),
            restore_tokens: BoolState::bound(KeyboardKey::KEY_T),
        }
    }
}

impl InputState {
    /// Modifier held and rotate-right pressed this frame.
    pub fn rotate_right_chord(&self) -> bool {
        self.modifier.active && self.rotate_right.just_pressed
    }

    /// Modifier held and rotate-left pressed this frame.
    pub fn rotate_left_chord(&self) -> bool {
        self.modifier.active && self.rotate_left.just_pressed
    }
}
