//! Native demo shell for the Scrawl drawing surface.
//!
//! Hosts an embedded whiteboard the way a surrounding page would: supplies
//! pointer and resize events, presents the raster surface into a window,
//! and maps keys to the external command interface (E toggles erase mode,
//! C clears, 1-6 pick a palette color, Esc quits).

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{Context as _, Result, anyhow};
use scrawl_board::Whiteboard;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Requested mount size. The live window size overrides it immediately.
const REQUESTED_WIDTH: u32 = 400;
const REQUESTED_HEIGHT: u32 = 200;

/// Hex colors on digit keys 1-6, standing in for the color-picker control.
const PALETTE: [&str; 6] = [
    "#000000", "#E74C3C", "#2980B9", "#27AE60", "#F1C40F", "#8E44AD",
];

type SbContext = softbuffer::Context<Rc<Window>>;
type SbSurface = softbuffer::Surface<Rc<Window>, Rc<Window>>;

struct App {
    window: Option<Rc<Window>>,
    surface: Option<SbSurface>,
    _context: Option<SbContext>,
    board: Whiteboard,
    cursor: PhysicalPosition<f64>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            surface: None,
            _context: None,
            board: Whiteboard::new(REQUESTED_WIDTH, REQUESTED_HEIGHT),
            cursor: PhysicalPosition::new(0.0, 0.0),
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            window.set_title(&mode_title(self.board.erase_mode()));
        }
    }

    /// Composite the board over the white page background into a frame.
    fn present(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let Some(pixmap) = self.board.pixmap() else {
            return;
        };
        let (Some(width), Some(height)) =
            (NonZeroU32::new(pixmap.width()), NonZeroU32::new(pixmap.height()))
        else {
            return;
        };
        if let Err(err) = surface.resize(width, height) {
            log::warn!("frame resize failed: {err}");
            return;
        }
        let mut frame = match surface.buffer_mut() {
            Ok(frame) => frame,
            Err(err) => {
                log::warn!("frame unavailable: {err}");
                return;
            }
        };
        for (dst, px) in frame.iter_mut().zip(pixmap.data().chunks_exact(4)) {
            *dst = over_white(px);
        }
        if let Err(err) = frame.present() {
            log::warn!("present failed: {err}");
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        match code {
            KeyCode::KeyE => {
                self.board.toggle_erase_mode();
                self.update_title();
            }
            KeyCode::KeyC => {
                self.board.clear();
                self.request_redraw();
            }
            KeyCode::Escape => event_loop.exit(),
            _ => {
                if let Some(hex) = palette_color(code) {
                    self.board.set_color(hex);
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(mode_title(false))
            .with_inner_size(LogicalSize::new(
                REQUESTED_WIDTH as f64,
                REQUESTED_HEIGHT as f64,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Rc::new(window),
            Err(err) => {
                log::error!("window creation failed: {err}");
                event_loop.exit();
                return;
            }
        };

        match create_surface(&window) {
            Ok((context, surface)) => {
                // The requested mount size was only an intent; the board
                // adopts the live viewport from here on.
                let size = window.inner_size();
                self.board.resize(size.width, size.height);
                self.surface = Some(surface);
                self._context = Some(context);
            }
            Err(err) => {
                log::error!("no presentable surface: {err:#}");
                self.board = Whiteboard::disabled();
            }
        }
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.board.resize(size.width, size.height);
                self.request_redraw();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
                if self.board.handle_pointer_move(position.x, position.y) {
                    self.request_redraw();
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    self.board.handle_pointer_down(self.cursor.x, self.cursor.y);
                }
                // Only release ends a stroke; the cursor leaving the
                // window while pressed does not.
                ElementState::Released => self.board.handle_pointer_up(),
            },
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && let PhysicalKey::Code(code) = event.physical_key
                {
                    self.handle_key(event_loop, code);
                }
            }
            WindowEvent::RedrawRequested => self.present(),
            _ => {}
        }
    }
}

fn create_surface(window: &Rc<Window>) -> Result<(SbContext, SbSurface)> {
    let context = softbuffer::Context::new(window.clone())
        .map_err(|err| anyhow!("display context: {err}"))?;
    let surface = softbuffer::Surface::new(&context, window.clone())
        .map_err(|err| anyhow!("window surface: {err}"))?;
    Ok((context, surface))
}

fn mode_title(erase: bool) -> String {
    format!("Scrawl ({})", if erase { "erase" } else { "draw" })
}

fn palette_color(code: KeyCode) -> Option<&'static str> {
    let index = match code {
        KeyCode::Digit1 => 0,
        KeyCode::Digit2 => 1,
        KeyCode::Digit3 => 2,
        KeyCode::Digit4 => 3,
        KeyCode::Digit5 => 4,
        KeyCode::Digit6 => 5,
        _ => return None,
    };
    Some(PALETTE[index])
}

/// One straight-alpha RGBA pixel over white, packed as softbuffer 0RGB.
fn over_white(px: &[u8]) -> u32 {
    let a = px[3] as u32;
    let r = (px[0] as u32 * a + 255 * (255 - a) + 127) / 255;
    let g = (px[1] as u32 * a + 255 * (255 - a) + 127) / 255;
    let b = (px[2] as u32 * a + 255 * (255 - a) + 127) / 255;
    r << 16 | g << 8 | b
}

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new().context("create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app).context("event loop")?;
    Ok(())
}
