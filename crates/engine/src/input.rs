use crate::prelude::*;

use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Radians of camera rotation per pixel of mouse travel.
pub const DEFAULT_LOOK_SENSITIVITY: f32 = 0.002;

/// Resource that tracks keyboard and mouse input state
#[derive(Resource)]
pub struct InputState {
    /// Currently pressed keys
    pub keys_pressed: HashSet<KeyCode>,
    /// Mouse delta since last frame (x, y)
    pub mouse_delta: (f32, f32),
    /// Mouse position in window coordinates
    pub mouse_position: (f32, f32),
    /// Whether the mouse is captured for camera control
    pub mouse_captured: bool,
    pub look_sensitivity: f32,
    /// Rotation about world up since last frame, in radians
    pub cursor_delta_yaw: f32,
    /// Rotation about the camera's left axis since last frame, in radians
    pub cursor_delta_pitch: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys_pressed: HashSet::new(),
            mouse_delta: (0.0, 0.0),
            mouse_position: (0.0, 0.0),
            mouse_captured: false,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            cursor_delta_yaw: 0.0,
            cursor_delta_pitch: 0.0,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_look_sensitivity(mut self, look_sensitivity: f32) -> Self {
        self.look_sensitivity = look_sensitivity;
        self
    }

    /// Check if a key is currently pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Reset per-frame state (call at start of each frame)
    pub fn reset_frame(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.cursor_delta_yaw = 0.0;
        self.cursor_delta_pitch = 0.0;
    }

    /// Handle key press
    pub fn press_key(&mut self, key: KeyCode) {
        self.keys_pressed.insert(key);
    }

    /// Handle key release
    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_pressed.remove(&key);
    }

    /// Add mouse delta movement
    ///
    /// Moving right turns clockwise seen from above, moving down pitches
    /// the view down.
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        if self.mouse_captured {
            self.mouse_delta.0 += dx;
            self.mouse_delta.1 += dy;
            self.cursor_delta_yaw -= dx * self.look_sensitivity;
            self.cursor_delta_pitch += dy * self.look_sensitivity;
        }
    }

    /// Update mouse position
    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_position = (x, y);
    }

    /// Toggle mouse capture
    pub fn toggle_mouse_capture(&mut self) {
        self.mouse_captured = !self.mouse_captured;
    }
}
