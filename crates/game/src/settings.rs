use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFY_APP_NAME: &str = "gaze";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Radians of camera rotation per pixel of mouse travel
    pub look_sensitivity: f32,
    /// Units per second
    pub move_speed: f32,
    /// Camera resource to attach to the player. The bundled third person camera when unset.
    pub camera_resource: Option<PathBuf>,
    pub start_in_editor_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            look_sensitivity: gaze_engine::input::DEFAULT_LOOK_SENSITIVITY,
            move_speed: 4.0,
            camera_resource: None,
            start_in_editor_mode: false,
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "settings").unwrap_or_else(|e| {
            log::warn!("Falling back to default settings: {}", e);
            Self::default()
        })
    }
}
