pub use crate::components::*;
pub use gaze_engine::prelude::*;
