use gaze_engine::{ApplicationBuilder, Result, layers::CameraLayer, prelude::*};
use winit::event_loop::EventLoop;

mod components;
mod prelude;
mod sandbox_layer;
mod settings;
mod systems;

use crate::settings::Settings;

const DEFAULT_CAMERA: &str = include_str!("../assets/player.camera.json");

fn load_camera(settings: &Settings) -> Result<CameraComponentRes> {
    // A path on the command line wins over the configured one
    let path = std::env::args()
        .nth(1)
        .map(std::path::PathBuf::from)
        .or_else(|| settings.camera_resource.clone());

    let res = match path {
        Some(path) => CameraComponentRes::load(&path)?,
        None => CameraComponentRes::from_json(DEFAULT_CAMERA)?,
    };
    Ok(res)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("gaze", log::LevelFilter::Debug)
        .filter_module("bevy_ecs", log::LevelFilter::Debug)
        .init();

    let settings = Settings::load();
    log::debug!("{:?}", settings);

    let event_loop = EventLoop::with_user_event().build()?;

    let mut app = ApplicationBuilder::new()
        .with_title("Gaze")
        .with_input(InputState::new().with_look_sensitivity(settings.look_sensitivity))
        .add_layer(|context| Box::new(CameraLayer::new(context)))
        .add_layer(|context| Box::new(sandbox_layer::SandboxLayer::new(context)))
        .build();

    app.insert_resource(EditorMode(settings.start_in_editor_mode))?;

    app.spawn(
        "Player",
        (
            Transform::default(),
            load_camera(&settings)?,
            crate::components::Player::new(settings.move_speed),
        ),
    )?;

    event_loop.run_app(&mut app)?;

    Ok(())
}
