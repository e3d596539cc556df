//! The rendering-context seam and its software implementation.
//!
//! The stroke engine draws through [`RenderContext`] so its continuity
//! rules stay independent of any concrete rendering API and can be
//! exercised against a recording double in tests. [`SoftwareContext`] is
//! the production implementation, rasterizing into a [`Pixmap`].

use kurbo::Point;
use scrawl_core::{LineCap, StrokeStyle};

use crate::pixmap::Pixmap;

/// A 2D raster target the stroke engine renders segments into.
///
/// Segment continuity is not context state: the engine passes both
/// endpoints of every segment explicitly. Round joins between consecutive
/// segments fall out of overlapping round caps at the shared endpoint.
pub trait RenderContext {
    /// Current pixel dimensions of the target.
    fn size(&self) -> (u32, u32);

    /// Adopt a new pixel size. Width and height change together, and all
    /// prior content is dropped.
    fn set_size(&mut self, width: u32, height: u32);

    /// Fill the whole target with transparency.
    fn clear(&mut self);

    /// Render one straight segment with the given style.
    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle);
}

/// Software rasterizer over an exclusively-owned [`Pixmap`].
pub struct SoftwareContext {
    pixmap: Pixmap,
}

impl SoftwareContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixmap: Pixmap::new(width, height),
        }
    }

    /// Read access to the rendered pixels, for presentation and tests.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl RenderContext for SoftwareContext {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.pixmap.resize(width, height);
    }

    fn clear(&mut self) {
        self.pixmap.clear();
    }

    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        log::trace!(
            "segment ({:.1},{:.1})->({:.1},{:.1}) width {} {:?}",
            from.x,
            from.y,
            to.x,
            to.y,
            style.width,
            style.op
        );

        let radius = style.width / 2.0;

        // Square caps extend the span by the radius; the cap edge is then
        // the same hard cut a butt cap makes.
        let (a, b) = match style.cap {
            LineCap::Square => extend_span(from, to, radius),
            _ => (from, to),
        };

        // Scan the segment's bounding box, padded one pixel for the AA ramp.
        let pad = radius + 1.0;
        let x0 = (a.x.min(b.x) - pad).floor().max(0.0) as i64;
        let y0 = (a.y.min(b.y) - pad).floor().max(0.0) as i64;
        let x1 = (a.x.max(b.x) + pad).ceil().min(self.pixmap.width() as f64) as i64;
        let y1 = (a.y.max(b.y) + pad).ceil().min(self.pixmap.height() as f64) as i64;

        for y in y0..y1 {
            for x in x0..x1 {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let cov = coverage(p, a, b, radius, style.cap);
                if cov > 0.0 {
                    self.pixmap.blend_pixel(x, y, style.color, cov, style.op);
                }
            }
        }
    }
}

/// Push both endpoints outward along the segment direction.
fn extend_span(from: Point, to: Point, by: f64) -> (Point, Point) {
    let d = to - from;
    let len = d.hypot();
    if len == 0.0 {
        return (from, to);
    }
    let u = d / len;
    (from - u * by, to + u * by)
}

/// Coverage of the pixel centered at `p` by a stroked segment, in [0, 1],
/// with a one-pixel anti-aliasing ramp at the stroke boundary.
fn coverage(p: Point, a: Point, b: Point, radius: f64, cap: LineCap) -> f32 {
    let d = b - a;
    let len2 = d.hypot2();

    let dist = if len2 == 0.0 {
        match cap {
            // A zero-length segment with round caps is a dot.
            LineCap::Round => (p - a).hypot(),
            _ => return 0.0,
        }
    } else {
        let t = (p - a).dot(d) / len2;
        match cap {
            LineCap::Round => (p - a.lerp(b, t.clamp(0.0, 1.0))).hypot(),
            // Butt (and pre-extended square) caps cut hard at the endpoints.
            LineCap::Butt | LineCap::Square => {
                if !(0.0..=1.0).contains(&t) {
                    return 0.0;
                }
                (p - a.lerp(b, t)).hypot()
            }
        }
    };

    ((radius + 0.5 - dist).clamp(0.0, 1.0)) as f32
}
