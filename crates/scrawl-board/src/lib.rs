//! Stroke capture and surface management for Scrawl.
//!
//! Two components compose into one control loop: [`SurfaceManager`] keeps
//! the raster target sized to the host viewport, and [`StrokeEngine`]
//! turns the pointer event stream into rendered stroke segments.
//! [`Whiteboard`] embeds both and is what a shell talks to.

pub mod board;
pub mod engine;
pub mod input;
pub mod surface;

pub use board::Whiteboard;
pub use engine::StrokeEngine;
pub use input::PointerEvent;
pub use surface::SurfaceManager;
