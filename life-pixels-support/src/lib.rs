#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod error;
mod layout;

pub use error::{log_error, AppError};
pub use layout::CanvasLayout;

use life_grid::Simulation;
use log::{debug, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, KeyEvent, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Cursor, CursorIcon, Window, WindowId};

const BACKGROUND_COLOR: Color = Color::BLACK;

/// Opens the window and runs `simulation` until the window closes.
pub fn animate(simulation: Simulation) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(simulation);
    event_loop.run_app(&mut handler)?;
    match handler.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Next,
    Reset,
    PlayStop,
    CycleRule,
    Randomize,
    Quit,
}

impl Command {
    fn for_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyN | KeyCode::Enter => Some(Command::Next),
            KeyCode::KeyR => Some(Command::Reset),
            KeyCode::Space | KeyCode::KeyP => Some(Command::PlayStop),
            KeyCode::Tab => Some(Command::CycleRule),
            KeyCode::KeyG => Some(Command::Randomize),
            KeyCode::Escape | KeyCode::KeyQ => Some(Command::Quit),
            _ => None,
        }
    }
}

struct App {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    layout: CanvasLayout,
    cursor: Option<PhysicalPosition<f64>>,
}

impl App {
    fn new(event_loop: &ActiveEventLoop, simulation: &Simulation) -> Result<Self, AppError> {
        let layout = CanvasLayout::new(simulation.grid());
        let window = Arc::new(Self::build_window(event_loop, &layout)?);
        let pixels = Self::build_pixels(&window, &layout)?;
        Ok(Self {
            window,
            pixels,
            layout,
            cursor: None,
        })
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        layout: &CanvasLayout,
    ) -> Result<Window, AppError> {
        let window_attributes = Window::default_attributes()
            .with_title("Game of Life")
            .with_inner_size(LogicalSize::new(layout.width(), layout.height()))
            .with_min_inner_size(LogicalSize::new(layout.width() / 4, layout.height() / 4))
            .with_cursor(Cursor::Icon(CursorIcon::Crosshair))
            .with_visible(false);
        Ok(event_loop.create_window(window_attributes)?)
    }

    fn build_pixels(
        window: &Arc<Window>,
        layout: &CanvasLayout,
    ) -> Result<Pixels<'static>, AppError> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        let pixels = PixelsBuilder::new(layout.width(), layout.height(), surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()?;
        Ok(pixels)
    }

    fn on_create(&mut self, simulation: &Simulation) {
        self.update_title(simulation);
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_grid_changed(&mut self, simulation: &Simulation) {
        self.update_title(simulation);
        self.window.request_redraw();
    }

    fn update_title(&self, simulation: &Simulation) {
        let state = if simulation.is_playing() { "playing" } else { "stopped" };
        self.window.set_title(&format!(
            "Game of Life | {} | {} | generation {} | population {}",
            simulation.rule(),
            state,
            simulation.generation(),
            simulation.grid().population()
        ));
    }

    fn on_click(&mut self, simulation: &mut Simulation) -> bool {
        let Some(position) = self.cursor else {
            return false;
        };
        let Ok((x, y)) = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        else {
            return false;
        };
        match self.layout.cell_at(x, y) {
            Some(loc) => {
                simulation.toggle(loc);
                true
            }
            None => false,
        }
    }

    fn on_redraw(&mut self, simulation: &Simulation) -> Result<(), AppError> {
        self.layout.draw(simulation.grid(), self.pixels.frame_mut());
        self.pixels.render()?;
        Ok(())
    }

    fn on_resize(&mut self, width: u32, height: u32) -> Result<(), AppError> {
        if width > 0 && height > 0 {
            self.pixels.resize_surface(width, height)?;
            self.window.request_redraw();
        }
        Ok(())
    }
}

struct AppEventHandler {
    simulation: Simulation,
    app: Option<App>,
    error: Option<AppError>,
}

impl AppEventHandler {
    fn new(simulation: Simulation) -> Self {
        Self {
            simulation,
            app: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, method_name: &str, err: AppError) {
        log_error(method_name, &err);
        self.simulation.stop();
        self.error = Some(err);
        event_loop.exit();
    }

    fn run_command(&mut self, event_loop: &ActiveEventLoop, command: Command) {
        debug!("Command {command:?}");
        match command {
            Command::Next => self.simulation.step_once(),
            Command::Reset => self.simulation.reset(),
            Command::PlayStop => self.simulation.toggle_play(Instant::now()),
            Command::CycleRule => self.simulation.cycle_rule(),
            Command::Randomize => self.simulation.randomize(),
            Command::Quit => {
                event_loop.exit();
                return;
            }
        }
        if let Some(app) = self.app.as_mut() {
            app.on_grid_changed(&self.simulation);
        }
    }
}

impl ApplicationHandler for AppEventHandler {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause
            && self.simulation.on_tick(Instant::now())
            && let Some(app) = self.app.as_mut()
        {
            app.on_grid_changed(&self.simulation);
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        match App::new(event_loop, &self.simulation) {
            Ok(mut app) => {
                app.on_create(&self.simulation);
                info!(
                    "Grid {}x{}, canvas {}x{}",
                    self.simulation.grid().height(),
                    self.simulation.grid().width(),
                    app.layout.width(),
                    app.layout.height()
                );
                self.app = Some(app);
            }
            Err(err) => self.fail(event_loop, "resumed", err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(command) = Command::for_key(code) {
                    self.run_command(event_loop, command);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                app.cursor = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if app.on_click(&mut self.simulation) {
                    app.on_grid_changed(&self.simulation);
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = app.on_resize(size.width, size.height) {
                    self.fail(event_loop, "on_resize", err);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.on_redraw(&self.simulation) {
                    self.fail(event_loop, "on_redraw", err);
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        match self.simulation.next_tick() {
            Some(wakeup_time) => event_loop.set_control_flow(ControlFlow::WaitUntil(wakeup_time)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.simulation.stop();
        self.app = None;
    }
}
