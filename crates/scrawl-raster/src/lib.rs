//! Software raster backend for Scrawl.
//!
//! [`Pixmap`] is the pixel store; [`SoftwareContext`] implements the
//! [`RenderContext`] seam the stroke engine draws through.

pub mod context;
pub mod pixmap;

pub use context::{RenderContext, SoftwareContext};
pub use pixmap::Pixmap;
