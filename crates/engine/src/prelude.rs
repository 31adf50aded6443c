pub use crate::asset::*;
pub use crate::components::*;
pub use crate::input::InputState;
pub use crate::layers::*;
pub use crate::{Layer, LayerContext, LayerEvent, Result};

pub use bevy_ecs::prelude::*;
pub use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Unit, UnitQuaternion, Vector3};
