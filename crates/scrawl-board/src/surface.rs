//! Surface management: a raster target kept in lockstep with the host
//! viewport.

use kurbo::Point;
use scrawl_raster::{Pixmap, RenderContext, SoftwareContext};

/// Owns the raster surface and its rendering context.
///
/// The surface's pixel size always equals the last observed viewport size.
/// Resizing is destructive: strokes do not survive it, and callers must
/// not assume otherwise. Teardown is `Drop`.
pub struct SurfaceManager {
    ctx: SoftwareContext,
    origin: Point,
}

impl SurfaceManager {
    /// Acquire a software raster context at the initial viewport size.
    pub fn initialize(width: u32, height: u32) -> Self {
        Self {
            ctx: SoftwareContext::new(width, height),
            origin: Point::ZERO,
        }
    }

    /// Adopt the new viewport size. Width and height change together, and
    /// this implicitly erases all pixel content.
    pub fn on_viewport_resize(&mut self, width: u32, height: u32) {
        log::debug!("viewport resize to {width}x{height}");
        self.ctx.set_size(width, height);
    }

    /// Fill the whole surface with transparency. Idempotent.
    pub fn clear(&mut self) {
        self.ctx.clear();
    }

    /// Current pixel dimensions.
    pub fn size(&self) -> (u32, u32) {
        self.ctx.size()
    }

    /// Offset of the surface's top-left corner inside the host viewport.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin = Point::new(x, y);
    }

    /// The context the stroke engine draws through.
    pub fn context_mut(&mut self) -> &mut SoftwareContext {
        &mut self.ctx
    }

    /// Read access to the rendered pixels.
    pub fn pixmap(&self) -> &Pixmap {
        self.ctx.pixmap()
    }
}
