use crate::prelude::*;

use serde::{Deserialize, Serialize};

/// Field of view in degrees used when a resource does not name one.
pub const DEFAULT_FOV: f32 = 50.0;

/// Every component of the third-person look-at center is pulled back by
/// this amount so the camera aims slightly below its offset point.
/// Tuning value with no derivation behind it.
pub const THIRD_PERSON_LOOK_AT_BIAS: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstPersonCameraParameter {
    pub fov: f32,
    /// Eye height above the parent position.
    pub vertical_offset: f32,
}

impl FirstPersonCameraParameter {
    pub const TYPE_NAME: &'static str = "FirstPersonCameraParameter";
}

impl Default for FirstPersonCameraParameter {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            vertical_offset: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThirdPersonCameraParameter {
    pub fov: f32,
    /// Distance behind the parent, along its local +Y.
    pub horizontal_offset: f32,
    pub vertical_offset: f32,
    /// Orbit pitch accumulated across ticks.
    pub cursor_pitch: UnitQuaternion<f32>,
    pub cursor_yaw: UnitQuaternion<f32>,
}

impl ThirdPersonCameraParameter {
    pub const TYPE_NAME: &'static str = "ThirdPersonCameraParameter";
}

impl Default for ThirdPersonCameraParameter {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            horizontal_offset: 3.0,
            vertical_offset: 2.5,
            cursor_pitch: UnitQuaternion::identity(),
            cursor_yaw: UnitQuaternion::identity(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeCameraParameter {
    pub fov: f32,
    pub speed: f32,
}

impl FreeCameraParameter {
    pub const TYPE_NAME: &'static str = "FreeCameraParameter";
}

impl Default for FreeCameraParameter {
    fn default() -> Self {
        Self {
            fov: DEFAULT_FOV,
            speed: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CameraParameter {
    FirstPerson(FirstPersonCameraParameter),
    ThirdPerson(ThirdPersonCameraParameter),
    Free(FreeCameraParameter),
}

impl CameraParameter {
    pub fn fov(&self) -> f32 {
        match self {
            Self::FirstPerson(parameter) => parameter.fov,
            Self::ThirdPerson(parameter) => parameter.fov,
            Self::Free(parameter) => parameter.fov,
        }
    }

    pub fn mode(&self) -> CameraMode {
        match self {
            Self::FirstPerson(_) => CameraMode::FirstPerson,
            Self::ThirdPerson(_) => CameraMode::ThirdPerson,
            Self::Free(_) => CameraMode::Free,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::FirstPerson(_) => FirstPersonCameraParameter::TYPE_NAME,
            Self::ThirdPerson(_) => ThirdPersonCameraParameter::TYPE_NAME,
            Self::Free(_) => FreeCameraParameter::TYPE_NAME,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    FirstPerson,
    ThirdPerson,
    /// Pose is left to whoever else drives the view.
    Free,
    /// Construction failed; ticks do nothing.
    #[default]
    Invalid,
}

/// Per-frame inputs a camera needs besides its parent transform.
pub struct TickContext<'a> {
    /// Seconds since the previous frame. No mode integrates over time yet.
    pub delta_time: f32,
    pub editor_mode: bool,
    pub input: &'a InputState,
}

/// Drives the main view from the parent entity's transform and the cursor.
///
/// Mode is chosen once from the parameter kind. Rebuild the component to
/// switch modes.
#[derive(Component, Debug, Clone)]
pub struct CameraComponent {
    mode: CameraMode,
    parameter: Option<CameraParameter>,
    forward: Vector3<f32>,
    left: Vector3<f32>,
    up: Vector3<f32>,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            mode: CameraMode::Invalid,
            parameter: None,
            forward: -Vector3::y(),
            left: Vector3::x(),
            up: Vector3::z(),
        }
    }
}

impl CameraComponent {
    pub fn new(parameter: &CameraParameter, scene: &mut SceneView) -> Self {
        scene.set_fov(parameter.fov());

        Self {
            mode: parameter.mode(),
            parameter: Some(parameter.clone()),
            ..Default::default()
        }
    }

    /// Builds the component from an undecoded resource. A resource that
    /// does not decode is logged and leaves the component [`CameraMode::Invalid`].
    pub fn from_resource(res: &CameraComponentRes, scene: &mut SceneView) -> Self {
        match res.decode() {
            Ok(parameter) => {
                log::info!("Created {} camera", parameter.type_name());
                Self::new(&parameter, scene)
            }
            Err(e) => {
                log::error!("{}", e);
                scene.set_fov(res.fov());
                Self::default()
            }
        }
    }

    /// Replaces the orientation basis. `up` is derived from the other two.
    pub fn with_basis(mut self, forward: Vector3<f32>, left: Vector3<f32>) -> Self {
        self.forward = forward.normalize();
        self.left = left.normalize();
        self.up = self.forward.cross(&self.left);
        self
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn parameter(&self) -> Option<&CameraParameter> {
        self.parameter.as_ref()
    }

    pub fn forward(&self) -> &Vector3<f32> {
        &self.forward
    }

    pub fn left(&self) -> &Vector3<f32> {
        &self.left
    }

    pub fn up(&self) -> &Vector3<f32> {
        &self.up
    }

    pub fn tick(&mut self, context: &TickContext, parent: &mut Transform, scene: &mut SceneView) {
        if context.editor_mode {
            return;
        }

        match self.mode {
            CameraMode::FirstPerson => self.tick_first_person(context, parent, scene),
            CameraMode::ThirdPerson => self.tick_third_person(context, parent, scene),
            CameraMode::Free | CameraMode::Invalid => {}
        }
    }

    fn cursor_rotations(&self, input: &InputState) -> (UnitQuaternion<f32>, UnitQuaternion<f32>) {
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), input.cursor_delta_yaw);
        let pitch = UnitQuaternion::from_axis_angle(
            &Unit::new_normalize(self.left),
            input.cursor_delta_pitch,
        );
        (yaw, pitch)
    }

    fn tick_first_person(
        &mut self,
        context: &TickContext,
        parent: &mut Transform,
        scene: &mut SceneView,
    ) {
        let Some(CameraParameter::FirstPerson(parameter)) = &self.parameter else {
            return;
        };
        let vertical_offset = parameter.vertical_offset;

        let (yaw, pitch) = self.cursor_rotations(context.input);
        let rotation = yaw * pitch;

        self.forward = rotation * self.forward;
        self.left = rotation * self.left;
        self.up = self.forward.cross(&self.left);

        let eye = parent.position + Vector3::z() * vertical_offset;
        scene.set_main_view_matrix(look_at(&eye, &self.forward, &self.up), CameraType::Motor);

        // The body follows the horizontal heading only.
        let facing = self.forward - Vector3::z() * self.forward.dot(&Vector3::z());
        let Some(facing) = facing.try_normalize(f32::EPSILON) else {
            return;
        };
        let object_left = Vector3::z().cross(&facing);
        parent.rotation = rotation_from_axes(&object_left, &-facing, &Vector3::z());
    }

    fn tick_third_person(
        &mut self,
        context: &TickContext,
        parent: &mut Transform,
        scene: &mut SceneView,
    ) {
        let (yaw, pitch) = self.cursor_rotations(context.input);

        let Some(CameraParameter::ThirdPerson(parameter)) = &mut self.parameter else {
            return;
        };
        parameter.cursor_pitch *= pitch;

        let offset = Vector3::new(0.0, parameter.horizontal_offset, parameter.vertical_offset);

        parent.rotation = yaw * parent.rotation;

        let orbit = parent.rotation * parameter.cursor_pitch;
        let center = parent.position + Vector3::z() * parameter.vertical_offset
            - Vector3::repeat(THIRD_PERSON_LOOK_AT_BIAS);
        let camera_position = parent.position + orbit * offset;
        let camera_forward = center - camera_position;
        let camera_up = orbit * Vector3::z();

        scene.set_main_view_matrix(
            look_at(&camera_position, &camera_forward, &camera_up),
            CameraType::Motor,
        );
    }
}

/// Right-handed view matrix for an eye looking along `forward`.
pub fn look_at(eye: &Point3<f32>, forward: &Vector3<f32>, up: &Vector3<f32>) -> Matrix4<f32> {
    Matrix4::look_at_rh(eye, &(*eye + *forward), up)
}

/// Rotation whose local x, y and z axes land on the given world axes.
pub fn rotation_from_axes(
    x: &Vector3<f32>,
    y: &Vector3<f32>,
    z: &Vector3<f32>,
) -> UnitQuaternion<f32> {
    let matrix = Matrix3::from_columns(&[*x, *y, *z]);
    UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(matrix))
}
