//! Simulation builder and runner.

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::SimulationError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::input::Input;
use crate::particle::FadeConfig;
use crate::spawn::{SpawnConfig, SpawnContext};
use crate::time::Time;

/// A particle field simulation builder.
///
/// Use method chaining to configure, then call `.run()` to start:
///
/// ```ignore
/// use orbfield::Simulation;
///
/// Simulation::new()
///     .with_particle_count(150)
///     .with_resize_count(10)
///     .run()?;
/// ```
pub struct Simulation {
    particle_count: usize,
    resize_count: usize,
    fade: FadeConfig,
    spawn: SpawnConfig,
    title: String,
    seed: Option<u64>,
}

impl Simulation {
    /// Create a new simulation with default settings: 150 particles
    /// initially, 10 after a resize, default glow tuning.
    pub fn new() -> Self {
        Self {
            particle_count: 150,
            resize_count: 10,
            fade: FadeConfig::default(),
            spawn: SpawnConfig::default(),
            title: "Orbfield".to_string(),
            seed: None,
        }
    }

    /// Set the number of particles spawned at startup.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the number of particles respawned after a window resize.
    pub fn with_resize_count(mut self, count: usize) -> Self {
        self.resize_count = count;
        self
    }

    /// Override the proximity-glow tuning.
    pub fn with_fade(mut self, fade: FadeConfig) -> Self {
        self.fade = fade;
        self
    }

    /// Override radius, speed range, and color source for spawned particles.
    pub fn with_spawn(mut self, spawn: SpawnConfig) -> Self {
        self.spawn = spawn;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Fix the RNG seed for reproducible spawns.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the simulation. Blocks until the window is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        // Setup failures inside the handler (window, GPU, spawn) stop the
        // loop and surface here.
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    settings: Simulation,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    field: Option<ParticleField>,
    input: Input,
    time: Time,
    spawn_ctx: SpawnContext,
    /// First fatal setup error; reported by `Simulation::run` after the
    /// event loop stops.
    error: Option<SimulationError>,
}

impl App {
    fn new(settings: Simulation) -> Self {
        let spawn_ctx = match settings.seed {
            Some(seed) => SpawnContext::seeded(seed),
            None => SpawnContext::new(),
        };

        Self {
            settings,
            window: None,
            gpu_state: None,
            field: None,
            input: Input::new(),
            time: Time::new(),
            spawn_ctx,
            error: None,
        }
    }

    /// Stop the loop with a fatal setup error.
    fn fail(&mut self, e: SimulationError, event_loop: &ActiveEventLoop) {
        if self.error.is_none() {
            self.error = Some(e);
        }
        event_loop.exit();
    }

    /// Replace the field wholesale. `count` is the initial count at startup
    /// and the (smaller) resize count afterwards.
    fn respawn(&mut self, count: usize, bounds: Vec2, event_loop: &ActiveEventLoop) {
        match ParticleField::spawn(count, bounds, &self.settings.spawn, &mut self.spawn_ctx) {
            Ok(field) => self.field = Some(field),
            Err(e) => self.fail(e.into(), event_loop),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(SimulationError::Window(e), event_loop);
                return;
            }
        };
        self.window = Some(window.clone());

        let size = window.inner_size();
        self.input.set_window_size(size.width, size.height);

        match pollster::block_on(GpuState::new(window, &[])) {
            Ok(gpu_state) => self.gpu_state = Some(gpu_state),
            Err(e) => {
                self.fail(e.into(), event_loop);
                return;
            }
        }

        // Some platforms report a zero inner size until the first resize
        // event; spawning is deferred to that event in that case.
        if size.width > 0 && size.height > 0 {
            let bounds = Vec2::new(size.width as f32, size.height as f32);
            let count = self.settings.particle_count;
            self.respawn(count, bounds, event_loop);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
                if physical_size.width == 0 || physical_size.height == 0 {
                    return;
                }

                let bounds = Vec2::new(physical_size.width as f32, physical_size.height as f32);
                let count = match &self.field {
                    // First usable size: this is the initial spawn.
                    None => Some(self.settings.particle_count),
                    // A real resize: discard the field and start over small.
                    Some(field) if field.bounds() != bounds => Some(self.settings.resize_count),
                    Some(_) => None,
                };
                if let Some(count) = count {
                    self.respawn(count, bounds, event_loop);
                }
            }
            WindowEvent::RedrawRequested => {
                self.time.update();

                // FPS readout refreshes every half second; repainting the
                // title once a second is plenty.
                if self.time.frame() % 60 == 0 && self.time.fps() > 0.0 {
                    if let Some(window) = &self.window {
                        window.set_title(&format!(
                            "{} ({:.0} FPS)",
                            self.settings.title,
                            self.time.fps()
                        ));
                    }
                }

                if let Some(field) = &mut self.field {
                    field.tick(self.input.position(), &self.settings.fade);

                    if let Some(gpu_state) = &mut self.gpu_state {
                        match gpu_state.render(&field.instances()) {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => {
                                gpu_state.resize(winit::dpi::PhysicalSize {
                                    width: gpu_state.config.width,
                                    height: gpu_state.config.height,
                                })
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                            Err(e) => eprintln!("Render error: {:?}", e),
                        }
                    }
                }

                // The frame callback is one-shot; request the next tick.
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
