pub mod color;
pub mod style;

pub use color::Color;
pub use style::{
    BrushConfig, CompositeOp, ERASE_WIDTH, LineCap, LineJoin, PAINT_WIDTH, StrokeStyle,
};
