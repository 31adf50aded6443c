use crate::prelude::*;
use winit::keyboard::KeyCode;

/// WASD movement in the horizontal plane, relative to where the body faces.
/// The camera component owns the heading; this only translates.
pub fn move_players(
    mut query: Query<(&mut Transform, &Player)>,
    input: Res<InputState>,
    editor_mode: Res<EditorMode>,
    time: Res<Time>,
) {
    if editor_mode.0 {
        return;
    }

    let dt = time.0.as_secs_f32();

    for (mut transform, player) in query.iter_mut() {
        let forward = transform.facing();
        let right = forward.cross(&Vector3::z());

        let mut movement = Vector3::zeros();

        if input.is_key_pressed(KeyCode::KeyW) {
            movement += forward;
        }
        if input.is_key_pressed(KeyCode::KeyS) {
            movement -= forward;
        }
        if input.is_key_pressed(KeyCode::KeyA) {
            movement -= right;
        }
        if input.is_key_pressed(KeyCode::KeyD) {
            movement += right;
        }

        if movement.magnitude() > 0.0 {
            transform.position += movement.normalize() * player.move_speed * dt;
        }
    }
}
