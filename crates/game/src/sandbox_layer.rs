use crate::prelude::*;

use bevy_ecs::schedule::Schedule;
use gaze_engine::{Layer, LayerContext, LayerEvent};
use std::time::Duration;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

pub struct SandboxLayer {
    schedule: Schedule,
    since_report: Duration,
}

impl SandboxLayer {
    pub fn new(_context: &LayerContext) -> Self {
        let mut schedule = Schedule::default();
        schedule.add_systems(crate::systems::move_players);
        Self {
            schedule,
            since_report: Duration::ZERO,
        }
    }

    fn report(world: &mut World) {
        let mut query = world.query::<(&Tag, &Transform, &CameraComponent)>();
        for (tag, transform, camera) in query.iter(world) {
            log::debug!(
                "{} ({:?} camera) at {:?} facing {:?}",
                tag.label,
                camera.mode(),
                transform.position,
                transform.facing()
            );
        }
    }

    fn toggle_editor_mode(context: &LayerContext) {
        let Ok(mut world) = context.world.lock() else {
            return;
        };
        let mut editor_mode = world.get_resource_or_insert_with(EditorMode::default);
        editor_mode.0 = !editor_mode.0;
        log::info!(
            "Editor mode {}",
            if editor_mode.0 { "enabled" } else { "disabled" }
        );
    }
}

impl Layer for SandboxLayer {
    fn frame(&mut self, context: &LayerContext) -> Result<()> {
        let mut world = context
            .world
            .lock()
            .map_err(|_| anyhow::anyhow!("World lock poisoned"))?;
        self.schedule.run(&mut world);

        self.since_report += context.delta_time;
        if self.since_report >= REPORT_INTERVAL {
            self.since_report = Duration::ZERO;
            Self::report(&mut world);
        }

        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}

    fn event(&mut self, context: &LayerContext, event: LayerEvent) {
        let LayerEvent::WindowEvent(event) = event;
        if let WindowEvent::KeyboardInput {
            event: key_event, ..
        } = &*event
        {
            if key_event.state == ElementState::Pressed
                && !key_event.repeat
                && key_event.physical_key == PhysicalKey::Code(KeyCode::F1)
            {
                Self::toggle_editor_mode(context);
            }
        }
    }
}
