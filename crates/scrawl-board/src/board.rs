//! The embeddable whiteboard: surface, stroke engine, and the drawing
//! configuration external controls mutate.

use kurbo::Point;
use scrawl_core::{BrushConfig, Color};
use scrawl_raster::Pixmap;

use crate::engine::StrokeEngine;
use crate::input::PointerEvent;
use crate::surface::SurfaceManager;

/// The drawing surface as the embedding shell sees it.
///
/// Owns the surface manager, the stroke engine, and the brush
/// configuration. When the host could not provide a raster target the
/// board is inert: pointer events and clears are silent no-ops, because
/// drawing is best-effort UI, not a correctness-critical system.
pub struct Whiteboard {
    surface: Option<SurfaceManager>,
    engine: StrokeEngine,
    config: BrushConfig,
}

impl Whiteboard {
    /// A live board with a software raster context at the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Some(SurfaceManager::initialize(width, height)),
            engine: StrokeEngine::new(),
            config: BrushConfig::default(),
        }
    }

    /// An inert board, for hosts where no raster context is available.
    /// Logged once here; everything after degrades silently.
    pub fn disabled() -> Self {
        log::error!("2D raster context unavailable; drawing is disabled");
        Self {
            surface: None,
            engine: StrokeEngine::new(),
            config: BrushConfig::default(),
        }
    }

    /// Whether the board has a surface to draw on.
    pub fn is_active(&self) -> bool {
        self.surface.is_some()
    }

    /// Host viewport changed. The surface adopts the new size and loses
    /// its content; an in-progress stroke keeps its session and continues
    /// from its stale last point onto the blank surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.on_viewport_resize(width, height);
        }
    }

    /// Offset of the surface inside the host viewport. Raw pointer
    /// coordinates have this subtracted before any rendering.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        if let Some(surface) = self.surface.as_mut() {
            surface.set_origin(x, y);
        }
    }

    pub fn handle_pointer_down(&mut self, x: f64, y: f64) {
        self.dispatch(PointerEvent::Down { x, y });
    }

    /// Returns `true` if a segment was rendered (the shell's cue to
    /// repaint).
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(PointerEvent::Move { x, y })
    }

    pub fn handle_pointer_up(&mut self) {
        self.dispatch(PointerEvent::Up);
    }

    fn dispatch(&mut self, event: PointerEvent) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let origin = surface.origin();
        self.engine
            .handle(&event, origin, &self.config, surface.context_mut())
    }

    /// `set_color` command from the color control. Accepts hex strings;
    /// malformed input is rejected and the previous color stays in effect.
    /// Applies from the next rendered segment, including mid-stroke.
    pub fn set_color(&mut self, hex: &str) -> bool {
        match Color::from_hex(hex) {
            Some(color) => {
                self.config.color = color;
                true
            }
            None => {
                log::warn!("ignoring malformed color {hex:?}");
                false
            }
        }
    }

    pub fn color(&self) -> Color {
        self.config.color
    }

    /// `toggleEraseMode` command. Applies from the next rendered segment,
    /// including mid-stroke.
    pub fn toggle_erase_mode(&mut self) {
        self.config.erase = !self.config.erase;
    }

    pub fn erase_mode(&self) -> bool {
        self.config.erase
    }

    /// `clear` command. Deliberately leaves an in-progress session alone:
    /// clearing the surface does not end the current press, so the next
    /// move renders from the stale last point onto the blank surface.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
    }

    /// Whether a press is currently being captured.
    pub fn is_drawing(&self) -> bool {
        self.engine.is_drawing()
    }

    /// Rendered pixels for presentation; `None` when the board is inert.
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.surface.as_ref().map(SurfaceManager::pixmap)
    }

    /// Current surface size; `(0, 0)` when the board is inert.
    pub fn size(&self) -> (u32, u32) {
        self.surface.as_ref().map_or((0, 0), SurfaceManager::size)
    }

    /// Surface origin, for shells that embed the surface at an offset.
    pub fn origin(&self) -> Point {
        self.surface.as_ref().map_or(Point::ZERO, SurfaceManager::origin)
    }
}
