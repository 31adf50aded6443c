use crate::layers::camera::systems::{initialize_camera_components, tick_camera_components};
use crate::prelude::*;

use std::time::Duration;

/// Layer that turns camera resources into camera components and ticks them every frame.
pub struct CameraLayer {
    schedule: Schedule,
}

impl CameraLayer {
    pub fn new(context: &LayerContext) -> Self {
        match context.world.lock() {
            Ok(mut world) => Self::with_world(&mut world),
            Err(poisoned) => Self::with_world(&mut poisoned.into_inner()),
        }
    }

    /// Registers the resources the camera systems read, keeping any the host already inserted.
    pub fn with_world(world: &mut World) -> Self {
        world.init_resource::<InputState>();
        world.init_resource::<EditorMode>();
        world.init_resource::<SceneView>();
        world.init_resource::<Time>();

        let mut schedule = Schedule::default();
        schedule.add_systems((initialize_camera_components, tick_camera_components).chain());

        Self { schedule }
    }

    pub fn run(&mut self, world: &mut World, delta_time: Duration) {
        world.insert_resource(Time(delta_time));
        self.schedule.run(world);

        let scene = world.resource::<SceneView>();
        log::trace!(
            "View {:?} (revision {}): {:?}",
            scene.camera_type(),
            scene.revision(),
            scene.main_view_matrix()
        );
    }
}

impl Layer for CameraLayer {
    fn frame(&mut self, context: &LayerContext) -> Result<()> {
        let mut world = context
            .world
            .lock()
            .map_err(|_| anyhow::anyhow!("World lock poisoned"))?;
        self.run(&mut world, context.delta_time);
        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}
}
