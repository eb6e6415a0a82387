//! Goblinrun - a third-person obstacle-course platformer
//!
//! This binary wires the simulation together: window + input events in,
//! one world update per frame. Rendering is consumed from the outside
//! through the world's transform and camera snapshots.

mod settings;

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use goblinrun_assets::{AssetStore, ClipManifest};
use goblinrun_game::{CourseId, GameWorld, InputAction, InputHandler};

use crate::settings::Settings;

/// Application state
struct GoblinrunApp {
    window: Option<Window>,
    input: InputHandler,
    world: GameWorld,
    last_frame: Instant,
}

impl GoblinrunApp {
    fn new(world: GameWorld) -> Self {
        Self {
            window: None,
            input: InputHandler::new(),
            world,
            last_frame: Instant::now(),
        }
    }

    /// Run one frame of the simulation
    fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.input.state.is_just_pressed(InputAction::Pause) {
            self.world.toggle_pause();
            info!(paused = self.world.time.paused, "pause toggled");
        }

        let snapshot = self.input.snapshot();
        self.world.update(delta, &snapshot);
        self.input.end_frame();

        // TODO: hand the frame to the renderer (camera view matrix plus the
        // character's position/orientation/bounding volume)
    }
}

impl ApplicationHandler for GoblinrunApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Goblinrun")
            .with_inner_size(LogicalSize::new(1280, 720));

        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                warn!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Window close requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.handle_keyboard(event.physical_key, event.state);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.tick();
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    info!("Starting Goblinrun...");

    let settings = Settings::load();

    // Course choice: CLI argument wins over the settings file
    let course_index = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(settings.course);
    let course = CourseId::from_index(course_index).unwrap_or_else(|| {
        warn!("Unknown course {course_index}, falling back to course 1");
        CourseId::Ramps
    });
    info!(course = course.label(), "course selected");

    // Register the locomotion clips, standing in for the asset loader's
    // bulk-load completion
    let mut store = AssetStore::new();
    store
        .load_manifest(&ClipManifest::standard())
        .context("Failed to register locomotion clips")?;
    store.take_ready_event();

    let mut world = GameWorld::new(course, settings.movement.clone(), settings.camera.clone());
    world
        .finish_loading(&store)
        .context("Failed to attach animation clips")?;

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GoblinrunApp::new(world);
    event_loop.run_app(&mut app).context("Event loop failed")?;

    Ok(())
}
