use gaze_engine::prelude::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn world_with_input(yaw: f32, pitch: f32) -> World {
    let mut world = World::new();
    world.insert_resource(InputState {
        cursor_delta_yaw: yaw,
        cursor_delta_pitch: pitch,
        ..Default::default()
    });
    world
}

#[test]
fn test_camera_resource_becomes_component() {
    let mut world = world_with_input(0.0, 0.0);
    let mut layer = CameraLayer::with_world(&mut world);

    let player = world
        .spawn((
            Transform::default(),
            CameraComponentRes::new("FirstPersonCameraParameter")
                .with_field("fov", 75.0)
                .with_field("vertical_offset", 1.0),
        ))
        .id();

    layer.run(&mut world, FRAME);
    layer.run(&mut world, FRAME);

    let camera = world.get::<CameraComponent>(player).unwrap();
    assert_eq!(camera.mode(), CameraMode::FirstPerson);

    let scene = world.resource::<SceneView>();
    assert_eq!(scene.fov(), 75.0);
    assert_eq!(scene.camera_type(), Some(CameraType::Motor));

    // Default basis looks down -Y from one unit above the origin.
    let eye = Point3::new(0.0, 0.0, 1.0);
    let expected = Matrix4::look_at_rh(&eye, &Point3::new(0.0, -1.0, 1.0), &Vector3::z());
    assert!((scene.main_view_matrix() - expected).abs().max() < 1e-5);
}

#[test]
fn test_component_built_once() {
    let mut world = world_with_input(0.0, 0.0);
    let mut layer = CameraLayer::with_world(&mut world);

    let player = world
        .spawn((
            Transform::default(),
            CameraComponentRes::new("ThirdPersonCameraParameter"),
        ))
        .id();

    layer.run(&mut world, FRAME);
    layer.run(&mut world, FRAME);

    world.resource_mut::<InputState>().cursor_delta_pitch = 0.2;
    layer.run(&mut world, FRAME);
    layer.run(&mut world, FRAME);

    // Rebuilding the component would have discarded the accumulated pitch.
    let camera = world.get::<CameraComponent>(player).unwrap();
    let Some(CameraParameter::ThirdPerson(parameter)) = camera.parameter() else {
        panic!("expected a third person parameter");
    };
    assert!((parameter.cursor_pitch.angle() - 0.4).abs() < 1e-4);
}

#[test]
fn test_unknown_camera_resource_never_publishes() {
    let mut world = world_with_input(0.3, 0.1);
    let mut layer = CameraLayer::with_world(&mut world);

    let player = world
        .spawn((
            Transform::default(),
            CameraComponentRes::new("CinematicCameraParameter"),
        ))
        .id();

    for _ in 0..3 {
        layer.run(&mut world, FRAME);
    }

    let camera = world.get::<CameraComponent>(player).unwrap();
    assert_eq!(camera.mode(), CameraMode::Invalid);
    assert_eq!(world.resource::<SceneView>().camera_type(), None);
    assert_eq!(*world.get::<Transform>(player).unwrap(), Transform::default());
}

#[test]
fn test_editor_mode_holds_pose() {
    let mut world = world_with_input(0.5, 0.0);
    world.insert_resource(EditorMode(true));
    let mut layer = CameraLayer::with_world(&mut world);

    let player = world
        .spawn((
            Transform::default(),
            CameraComponentRes::new("ThirdPersonCameraParameter"),
        ))
        .id();

    layer.run(&mut world, FRAME);
    layer.run(&mut world, FRAME);

    assert_eq!(world.resource::<SceneView>().camera_type(), None);
    assert_eq!(*world.get::<Transform>(player).unwrap(), Transform::default());

    world.resource_mut::<EditorMode>().0 = false;
    layer.run(&mut world, FRAME);

    assert_eq!(
        world.resource::<SceneView>().camera_type(),
        Some(CameraType::Motor)
    );
    let yaw = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.5);
    let rotation = world.get::<Transform>(player).unwrap().rotation;
    assert!(rotation.angle_to(&yaw) < 1e-4);
}

#[test]
fn test_time_follows_frames() {
    let mut world = World::new();
    let mut layer = CameraLayer::with_world(&mut world);

    layer.run(&mut world, Duration::from_millis(33));

    assert_eq!(world.resource::<Time>().0, Duration::from_millis(33));
}
