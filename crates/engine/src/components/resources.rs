use crate::prelude::*;

use std::time::Duration;

#[derive(Resource, Default)]
pub struct Time(pub Duration);

/// While set, cameras are driven by editor tooling and camera components stay idle.
#[derive(Resource, Default, Clone, Copy, PartialEq, Eq)]
pub struct EditorMode(pub bool);

/// Source of the view matrix currently held by the [`SceneView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraType {
    /// Driven directly by editor tooling.
    Editor,
    /// Computed programmatically by a camera component.
    Motor,
}

/// Process-wide register for the main view matrix and field of view.
#[derive(Resource, Debug, Clone)]
pub struct SceneView {
    view_matrix: Matrix4<f32>,
    camera_type: Option<CameraType>,
    fov: f32,
    revision: u64,
}

impl SceneView {
    pub fn new() -> Self {
        Self {
            view_matrix: Matrix4::identity(),
            camera_type: None,
            fov: DEFAULT_FOV,
            revision: 0,
        }
    }

    pub fn set_main_view_matrix(&mut self, view_matrix: Matrix4<f32>, camera_type: CameraType) {
        self.view_matrix = view_matrix;
        self.camera_type = Some(camera_type);
        self.revision += 1;
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
        self.revision += 1;
    }

    pub fn main_view_matrix(&self) -> &Matrix4<f32> {
        &self.view_matrix
    }

    /// `None` until some camera has published a view matrix.
    pub fn camera_type(&self) -> Option<CameraType> {
        self.camera_type
    }

    /// Field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Bumped on every write, so callers can tell whether anything was published.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn uniform(&self) -> ViewUniform {
        ViewUniform {
            view: self.view_matrix,
            fov: self.fov.to_radians(),
            _padding: [0.0; 3],
        }
    }
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    view: Matrix4<f32>,
    fov: f32,
    _padding: [f32; 3],
}

impl ViewUniform {
    pub fn view(&self) -> &Matrix4<f32> {
        &self.view
    }

    /// Field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }
}
