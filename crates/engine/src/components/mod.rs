mod camera;
mod resources;
mod tag;
mod transform;

pub use camera::*;
pub use resources::*;
pub use tag::*;
pub use transform::*;
