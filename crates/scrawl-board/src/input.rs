//! Pointer input abstraction.
//!
//! Normalizes the host's mouse, touch, or stylus events into the minimal
//! event stream the stroke engine consumes. Coordinates are raw host
//! viewport coordinates; the engine subtracts the surface origin itself.

/// A normalized pointer event from any pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    Down { x: f64, y: f64 },
    /// Pointer moved.
    Move { x: f64, y: f64 },
    /// Pointer released. Release position plays no part in stroke capture.
    Up,
}

impl PointerEvent {
    /// The event's position, if it carries one.
    pub fn position(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Down { x, y } | Self::Move { x, y } => Some((x, y)),
            Self::Up => None,
        }
    }
}
