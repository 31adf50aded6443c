pub use bevy_ecs::world::World;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use winit::{application::ApplicationHandler, event::WindowEvent, window::Window};

use crate::input::InputState;
pub type Result<T> = anyhow::Result<T>;

pub mod asset;
pub mod components;
pub mod input;
pub mod layers;
pub mod prelude;

pub trait Layer: 'static {
    fn frame(&mut self, context: &LayerContext) -> Result<()>;
    fn detach(&mut self, context: &LayerContext);
    fn event(&mut self, _context: &LayerContext, _event: LayerEvent) {}
}

pub trait LayerFactory: 'static {
    fn create(&self, context: &LayerContext) -> Box<dyn Layer>;
}

pub struct LayerContext {
    pub window: Arc<Window>,
    pub world: Arc<Mutex<World>>,
    pub delta_time: Duration,
}

pub enum LayerEvent {
    WindowEvent(Arc<WindowEvent>),
}

pub struct ApplicationBuilder {
    layer_factories: Vec<Box<dyn LayerFactory>>,
    title: String,
    input: InputState,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            layer_factories: Vec::new(),
            title: String::from("gaze"),
            input: InputState::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_input(mut self, input: InputState) -> Self {
        self.input = input;
        self
    }

    pub fn add_layer_factory(mut self, factory: impl LayerFactory) -> Self {
        self.layer_factories.push(Box::new(factory));
        self
    }

    pub fn add_layer<F>(mut self, factory_fn: F) -> Self
    where
        F: Fn(&LayerContext) -> Box<dyn Layer> + 'static,
    {
        self.layer_factories
            .push(Box::new(ClosureLayerFactory::new(factory_fn)));
        self
    }

    pub fn build(self) -> Application {
        let mut world = World::new();
        world.insert_resource(self.input);

        Application {
            layer_factories: self.layer_factories,
            title: self.title,
            state: None,
            world: Arc::new(Mutex::new(world)),
        }
    }
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct ClosureLayerFactory<F> {
    factory_fn: F,
}

impl<F> ClosureLayerFactory<F> {
    fn new(factory_fn: F) -> Self {
        Self { factory_fn }
    }
}

impl<F> LayerFactory for ClosureLayerFactory<F>
where
    F: Fn(&LayerContext) -> Box<dyn Layer> + 'static,
{
    fn create(&self, context: &LayerContext) -> Box<dyn Layer> {
        (self.factory_fn)(context)
    }
}

pub struct Application {
    layer_factories: Vec<Box<dyn LayerFactory>>,
    title: String,
    state: Option<ApplicationState>,
    world: Arc<Mutex<World>>,
}

pub struct ApplicationState {
    window: Arc<Window>,
    layers: Vec<Box<dyn Layer>>,
    last_frame_time: Instant,
}

impl Application {
    fn world(&self) -> Result<MutexGuard<'_, World>> {
        self.world
            .lock()
            .map_err(|_| anyhow::anyhow!("World lock poisoned"))
    }

    fn redraw(&mut self) -> Result<()> {
        let state = match &mut self.state {
            Some(state) => state,
            None => return Ok(()),
        };

        let now = Instant::now();
        let delta_time = now.duration_since(state.last_frame_time);
        state.last_frame_time = now;

        let context = LayerContext {
            window: state.window.clone(),
            world: self.world.clone(),
            delta_time,
        };

        for layer in &mut state.layers {
            layer.frame(&context)?;
        }

        // Input accumulated since the last frame has now been consumed
        let mut world = self.world()?;
        if let Some(mut input_state) = world.get_resource_mut::<InputState>() {
            input_state.reset_frame();
        }
        world.clear_trackers();

        Ok(())
    }

    pub fn spawn<B: bevy_ecs::bundle::Bundle>(
        &mut self,
        label: impl Into<String>,
        bundle: B,
    ) -> Result<bevy_ecs::entity::Entity> {
        use crate::prelude::*;
        let bundle = (
            Tag {
                label: label.into(),
            },
            bundle,
        );
        Ok(self.world()?.spawn(bundle).id())
    }

    pub fn insert_resource<R: bevy_ecs::prelude::Resource>(&mut self, resource: R) -> Result<()> {
        self.world()?.insert_resource(resource);
        Ok(())
    }

    fn handle_input(&self, event: &WindowEvent) -> Result<()> {
        use winit::event::{ElementState, MouseButton};
        use winit::keyboard::PhysicalKey;
        use winit::window::CursorGrabMode;

        let mut world = self.world()?;
        let Some(mut input_state) = world.get_resource_mut::<InputState>() else {
            return Ok(());
        };

        match event {
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if let PhysicalKey::Code(keycode) = key_event.physical_key {
                    match key_event.state {
                        ElementState::Pressed => input_state.press_key(keycode),
                        ElementState::Released => input_state.release_key(keycode),
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                // Toggle mouse capture on right click
                if *button == MouseButton::Right && *state == ElementState::Pressed {
                    input_state.toggle_mouse_capture();

                    if let Some(app_state) = &self.state {
                        if input_state.mouse_captured {
                            app_state.window.set_cursor_visible(false);
                            let _ = app_state
                                .window
                                .set_cursor_grab(CursorGrabMode::Locked)
                                .or_else(|_| {
                                    app_state.window.set_cursor_grab(CursorGrabMode::Confined)
                                });
                            log::info!("Mouse captured - use right-click to release");
                        } else {
                            app_state.window.set_cursor_visible(true);
                            let _ = app_state.window.set_cursor_grab(CursorGrabMode::None);
                            log::info!("Mouse released");
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                input_state.set_mouse_position(position.x as f32, position.y as f32);
            }
            _ => {}
        }

        Ok(())
    }
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let window_attributes = Window::default_attributes().with_title(self.title.clone());
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Unable to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let context = LayerContext {
            window: window.clone(),
            world: self.world.clone(),
            delta_time: Duration::ZERO,
        };

        let layers: Vec<Box<dyn Layer>> = self
            .layer_factories
            .iter()
            .map(|factory| factory.create(&context))
            .collect();

        self.state = Some(ApplicationState {
            window,
            layers,
            last_frame_time: Instant::now(),
        });
    }

    fn suspended(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            let context = LayerContext {
                window: state.window.clone(),
                world: self.world.clone(),
                delta_time: Duration::ZERO,
            };

            for layer in &mut state.layers {
                layer.detach(&context);
            }
        }
        self.state = None;
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        if let Err(e) = self.handle_input(&event) {
            log::error!("Unable to handle input: {}", e);
        }

        let event = Arc::new(event);

        match *event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    log::error!("Unable to run frame: {}", e);
                }
            }
            _ => {}
        }

        if let Some(state) = &mut self.state {
            let context = LayerContext {
                window: state.window.clone(),
                world: self.world.clone(),
                delta_time: Duration::ZERO,
            };

            for layer in &mut state.layers {
                layer.event(&context, LayerEvent::WindowEvent(event.clone()));
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &winit::event_loop::ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        use winit::event::DeviceEvent;

        let DeviceEvent::MouseMotion { delta } = event else {
            return;
        };

        if let Ok(mut world) = self.world.lock() {
            if let Some(mut input_state) = world.get_resource_mut::<InputState>() {
                input_state.add_mouse_delta(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}
