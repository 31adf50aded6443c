use crate::prelude::*;

/// Builds a camera component for every entity that carries a camera resource but no camera yet
pub fn initialize_camera_components(
    mut commands: Commands,
    mut scene: ResMut<SceneView>,
    query: Query<(Entity, &CameraComponentRes), Without<CameraComponent>>,
) {
    for (entity, res) in query.iter() {
        let camera = CameraComponent::from_resource(res, &mut scene);
        commands.entity(entity).insert(camera);
    }
}

pub fn tick_camera_components(
    time: Res<Time>,
    editor_mode: Res<EditorMode>,
    input: Res<InputState>,
    mut scene: ResMut<SceneView>,
    mut query: Query<(&mut CameraComponent, &mut Transform)>,
) {
    let context = TickContext {
        delta_time: time.0.as_secs_f32(),
        editor_mode: editor_mode.0,
        input: &*input,
    };

    for (mut camera, mut transform) in query.iter_mut() {
        camera.tick(&context, &mut *transform, &mut *scene);
    }
}
