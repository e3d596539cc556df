//! Brush configuration and the per-segment stroke style derived from it.

use crate::color::Color;

/// Stroke width while painting, in surface pixels.
pub const PAINT_WIDTH: f64 = 5.0;
/// Stroke width while erasing, in surface pixels.
pub const ERASE_WIDTH: f64 = 20.0;

/// How a rendered segment combines with pixels already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeOp {
    /// New pixels are painted over existing content.
    SourceOver,
    /// New pixels knock existing coverage out (erase-through).
    DestinationOut,
}

/// Shape of a segment's end caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Shape of the joint where consecutive segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Mutable drawing configuration, owned by the embedding context.
///
/// The stroke engine reads this once per rendered segment, so changes made
/// mid-stroke take effect from the next segment onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushConfig {
    pub color: Color,
    pub erase: bool,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            erase: false,
        }
    }
}

/// Everything a raster context needs to render one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    pub op: CompositeOp,
}

impl StrokeStyle {
    /// Derive the active stroke style from the brush configuration.
    ///
    /// Erase mode means destination-out compositing with the wide stroke;
    /// the ink color is irrelevant under destination-out but stays white
    /// so a debug dump of the style reads sensibly. Paint mode uses the
    /// configured color and the narrow stroke. Caps and joins are round in
    /// both modes.
    pub fn for_brush(config: &BrushConfig) -> Self {
        if config.erase {
            Self {
                color: Color::WHITE,
                width: ERASE_WIDTH,
                cap: LineCap::Round,
                join: LineJoin::Round,
                op: CompositeOp::DestinationOut,
            }
        } else {
            Self {
                color: config.color,
                width: PAINT_WIDTH,
                cap: LineCap::Round,
                join: LineJoin::Round,
                op: CompositeOp::SourceOver,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paint_style_uses_configured_color_and_narrow_stroke() {
        let config = BrushConfig {
            color: Color::rgb(0x29, 0x80, 0xB9),
            erase: false,
        };
        let style = StrokeStyle::for_brush(&config);

        assert_eq!(style.color, config.color);
        assert_eq!(style.width, PAINT_WIDTH);
        assert_eq!(style.cap, LineCap::Round);
        assert_eq!(style.join, LineJoin::Round);
        assert_eq!(style.op, CompositeOp::SourceOver);
    }

    #[test]
    fn erase_style_ignores_configured_color() {
        let config = BrushConfig {
            color: Color::rgb(255, 0, 0),
            erase: true,
        };
        let style = StrokeStyle::for_brush(&config);

        assert_eq!(style.width, ERASE_WIDTH);
        assert_eq!(style.op, CompositeOp::DestinationOut);
        assert_eq!(style.cap, LineCap::Round);
    }
}
