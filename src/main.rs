//! Raging Sea - procedural ocean surface
//!
//! A flat grid displaced every frame by a big traveling swell and a few
//! octaves of folded noise, shaded from depth color to crest color.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use ragingsea::camera::CameraSystem;
use ragingsea::cli::Args;
use ragingsea::clock::FrameClock;
use ragingsea::control::{spawn_param_watcher, ParamHandle};
use ragingsea::ocean::OceanSystem;
use ragingsea::params::{RecordingConfig, RenderConfig};
use ragingsea::rendering::{RenderSystem, Uniforms};
use ragingsea::wave::WaveModel;
use ragingsea::{snapshot, Error, Result};

/// How often the preset file is checked in `--watch` mode
const WATCH_INTERVAL: Duration = Duration::from_millis(250);

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    ocean: OceanSystem,
    camera: CameraSystem,
    params: ParamHandle,

    // Configuration
    render_config: RenderConfig,
    recording: Option<RecordingConfig>,

    // Time tracking
    clock: FrameClock,

    /// Startup failure to report once the event loop returns
    fatal: Option<Error>,
}

impl App {
    fn new(
        ocean: OceanSystem,
        camera: CameraSystem,
        params: ParamHandle,
        recording: Option<RecordingConfig>,
    ) -> Self {
        let clock = match &recording {
            Some(config) => FrameClock::fixed_step(config.fps),
            None => FrameClock::realtime(),
        };

        Self {
            window: None,
            render_system: None,
            ocean,
            camera,
            params,
            render_config: RenderConfig::default(),
            recording,
            clock,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        self.fatal = Some(error);
        event_loop.exit();
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.render_config.window_width = width;
        self.render_config.window_height = height;
        if let Some(render_system) = &mut self.render_system {
            render_system.resize(width, height);
        }
    }

    /// Render a single frame
    ///
    /// Returns `Ok(true)` once a recording has captured all of its frames.
    fn render_frame(&mut self) -> std::result::Result<bool, wgpu::SurfaceError> {
        let Some(render_system) = &self.render_system else {
            return Ok(false);
        };

        let time_s = self.clock.time_s();

        // One snapshot per frame: controller edits land at the next frame
        let params = self.params.snapshot();
        self.ocean.update(time_s, &params);

        let (view_proj, _) = self
            .camera
            .create_view_proj_matrix(time_s, &self.render_config);

        render_system.update_vertices(&self.ocean.grid.vertices);
        render_system.update_uniforms(&Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
        });
        render_system.render(self.clock.frame() as usize)?;

        // Only a presented frame moves time forward
        self.clock.advance();

        let Some(config) = &self.recording else {
            return Ok(false);
        };
        let done = self.clock.frame() as usize;
        let total = config.total_frames();
        if done % config.fps.max(1) as usize == 0 {
            log::info!("Recorded {}/{} frames", done, total);
        }
        Ok(done >= total)
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Raging Sea")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                let error = Error::Window(format!("Failed to create window: {}", e));
                return self.fail(event_loop, error);
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.ocean.grid,
            self.recording.clone(),
        )) {
            Ok(render_system) => render_system,
            Err(e) => return self.fail(event_loop, e),
        };

        let (width, height) = render_system.size();
        self.render_config.window_width = width;
        self.render_config.window_height = height;

        log::info!("Raging Sea is running, press ESC to quit");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => match self.render_frame() {
                Ok(true) => {
                    log::info!("Recording complete");
                    event_loop.exit();
                }
                Ok(false) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let config = &self.render_config;
                    let (width, height) = (config.window_width, config.window_height);
                    self.resize(width, height);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    self.fail(event_loop, Error::Gpu("Surface out of memory".to_string()))
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            },
            _ => {}
        }
    }
}

fn run(args: Args) -> Result<()> {
    let params = args.build_wave_params()?;

    if let Some(path) = &args.write_params {
        params.save(path)?;
        log::info!("Wrote parameters to {}", path.display());
        return Ok(());
    }

    let geometry = args.ocean_geometry();

    if let Some(config) = args.snapshot_config() {
        let model = WaveModel::with_seed(geometry.noise_seed);
        return snapshot::write_snapshot(&model, &params, &config);
    }

    let handle = ParamHandle::new(params)?;
    let _watcher = match (&args.params, args.watch) {
        (Some(path), true) => {
            log::info!("Watching {} for changes", path.display());
            Some(spawn_param_watcher(
                path.clone(),
                WATCH_INTERVAL,
                handle.clone(),
                args.overrides(),
            ))
        }
        _ => None,
    };

    let recording = args.recording_config()?;
    if let Some(config) = &recording {
        log::info!(
            "Recording {} frames at {} fps to {}",
            config.total_frames(),
            config.fps,
            config.frames_dir().display()
        );
    }

    let ocean = OceanSystem::new(&geometry);
    log::info!(
        "Ocean grid: {} vertices, {} triangles",
        ocean.grid.vertices.len(),
        ocean.grid.indices.len() / 3
    );

    let camera = CameraSystem::new(args.camera_preset());
    let mut app = App::new(ocean, camera, handle, recording);

    let event_loop = EventLoop::new()
        .map_err(|e| Error::Window(format!("Failed to create event loop: {}", e)))?;
    event_loop
        .run_app(&mut app)
        .map_err(|e| Error::Window(format!("Event loop failed: {}", e)))?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
