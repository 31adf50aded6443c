use crate::prelude::*;

/// Walks the entity along its own heading with WASD
#[derive(Component, Clone)]
pub struct Player {
    /// Movement speed in units per second
    pub move_speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self { move_speed: 4.0 }
    }
}

impl Player {
    pub fn new(move_speed: f32) -> Self {
        Self { move_speed }
    }
}
