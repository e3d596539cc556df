//! The stroke-capture state machine.
//!
//! The engine is `Idle` until a pointer-down opens a session. Each move
//! while a session is open renders at most one straight segment: the first
//! move only establishes the starting point, every later move draws from
//! the previous point. Pointer-up discards the session, so the next stroke
//! starts a disjoint path and can never connect back to this one.

use kurbo::Point;
use scrawl_core::{BrushConfig, StrokeStyle};
use scrawl_raster::RenderContext;

use crate::input::PointerEvent;

/// Ephemeral per-press state.
///
/// `last_point` stays `None` until the first move of the session seeds the
/// stroke's starting point; it is only meaningful while the session lives.
#[derive(Debug, Clone, Copy, Default)]
struct StrokeSession {
    last_point: Option<Point>,
}

/// Pointer-driven stroke state machine: `Idle` ⇄ `Drawing`.
#[derive(Debug, Default)]
pub struct StrokeEngine {
    session: Option<StrokeSession>,
}

impl StrokeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press is currently being captured.
    pub fn is_drawing(&self) -> bool {
        self.session.is_some()
    }

    /// Feed one pointer event. Returns `true` if a segment was rendered.
    ///
    /// `origin` is the surface's offset inside the host viewport; event
    /// coordinates are raw and converted to surface space here. The brush
    /// configuration is re-read for every segment, so color and mode
    /// changes made by external controls apply mid-stroke.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        origin: Point,
        config: &BrushConfig,
        ctx: &mut dyn RenderContext,
    ) -> bool {
        match *event {
            PointerEvent::Down { .. } => {
                // A second down without an intervening up keeps the open
                // session; devices deliver such sequences on focus changes.
                if self.session.is_none() {
                    self.session = Some(StrokeSession::default());
                }
                false
            }
            PointerEvent::Move { x, y } => {
                let Some(session) = self.session.as_mut() else {
                    // Moves outside a press (pointer re-entering the
                    // surface, stray hover traffic) are ignored.
                    return false;
                };
                let pos = Point::new(x - origin.x, y - origin.y);
                let Some(prev) = session.last_point else {
                    // First motion of the session seeds the starting point
                    // without drawing anything.
                    session.last_point = Some(pos);
                    return false;
                };
                let style = StrokeStyle::for_brush(config);
                ctx.stroke_segment(prev, pos, &style);
                session.last_point = Some(pos);
                true
            }
            PointerEvent::Up => {
                // Close the path: a later session must not connect here.
                self.session = None;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scrawl_core::{Color, CompositeOp, ERASE_WIDTH, LineCap, PAINT_WIDTH};

    /// Records segments instead of rasterizing them.
    #[derive(Default)]
    struct RecordingContext {
        segments: Vec<(Point, Point, StrokeStyle)>,
    }

    impl RenderContext for RecordingContext {
        fn size(&self) -> (u32, u32) {
            (800, 600)
        }
        fn set_size(&mut self, _width: u32, _height: u32) {}
        fn clear(&mut self) {}
        fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
            self.segments.push((from, to, *style));
        }
    }

    fn drive(
        engine: &mut StrokeEngine,
        ctx: &mut RecordingContext,
        config: &BrushConfig,
        events: &[PointerEvent],
    ) {
        for event in events {
            engine.handle(event, Point::ZERO, config, ctx);
        }
    }

    #[test]
    fn segment_count_is_moves_minus_one() {
        let mut engine = StrokeEngine::new();
        let mut ctx = RecordingContext::default();
        let config = BrushConfig::default();

        drive(
            &mut engine,
            &mut ctx,
            &config,
            &[
                PointerEvent::Down { x: 10.0, y: 10.0 },
                PointerEvent::Move { x: 10.0, y: 10.0 },
                PointerEvent::Move { x: 20.0, y: 10.0 },
                PointerEvent::Move { x: 30.0, y: 10.0 },
                PointerEvent::Up,
            ],
        );

        assert_eq!(ctx.segments.len(), 2);
        let (a0, b0, s0) = ctx.segments[0];
        assert_eq!((a0, b0), (Point::new(10.0, 10.0), Point::new(20.0, 10.0)));
        assert_eq!(s0.color, Color::BLACK);
        assert_eq!(s0.width, PAINT_WIDTH);
        assert_eq!(s0.cap, LineCap::Round);
        let (a1, b1, _) = ctx.segments[1];
        assert_eq!((a1, b1), (Point::new(20.0, 10.0), Point::new(30.0, 10.0)));
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut engine = StrokeEngine::new();
        let mut ctx = RecordingContext::default();
        let config = BrushConfig::default();

        let rendered = engine.handle(
            &PointerEvent::Move { x: 5.0, y: 5.0 },
            Point::ZERO,
            &config,
            &mut ctx,
        );

        assert!(!rendered);
        assert!(!engine.is_drawing());
        assert_eq!(ctx.segments.len(), 0);
    }

    #[test]
    fn sessions_do_not_share_continuity() {
        let mut engine = StrokeEngine::new();
        let mut ctx = RecordingContext::default();
        let config = BrushConfig::default();

        // Two seed-only sessions at different locations: neither renders.
        drive(
            &mut engine,
            &mut ctx,
            &config,
            &[
                PointerEvent::Down { x: 10.0, y: 10.0 },
                PointerEvent::Move { x: 10.0, y: 10.0 },
                PointerEvent::Up,
                PointerEvent::Down { x: 90.0, y: 90.0 },
                PointerEvent::Move { x: 90.0, y: 90.0 },
            ],
        );

        assert_eq!(ctx.segments.len(), 0);

        // The second session's first real segment starts from its own seed,
        // not the first session's last point.
        engine.handle(
            &PointerEvent::Move { x: 95.0, y: 90.0 },
            Point::ZERO,
            &config,
            &mut ctx,
        );
        assert_eq!(ctx.segments.len(), 1);
        assert_eq!(ctx.segments[0].0, Point::new(90.0, 90.0));
    }

    #[test]
    fn double_down_keeps_the_open_session() {
        let mut engine = StrokeEngine::new();
        let mut ctx = RecordingContext::default();
        let config = BrushConfig::default();

        drive(
            &mut engine,
            &mut ctx,
            &config,
            &[
                PointerEvent::Down { x: 0.0, y: 0.0 },
                PointerEvent::Move { x: 10.0, y: 10.0 },
                // Stray second press; must not reset the seeded point.
                PointerEvent::Down { x: 50.0, y: 50.0 },
                PointerEvent::Move { x: 20.0, y: 10.0 },
            ],
        );

        assert_eq!(ctx.segments.len(), 1);
        assert_eq!(ctx.segments[0].0, Point::new(10.0, 10.0));
    }

    #[test]
    fn erase_toggle_applies_to_the_next_segment() {
        let mut engine = StrokeEngine::new();
        let mut ctx = RecordingContext::default();
        let mut config = BrushConfig::default();

        drive(
            &mut engine,
            &mut ctx,
            &config,
            &[
                PointerEvent::Down { x: 0.0, y: 0.0 },
                PointerEvent::Move { x: 0.0, y: 0.0 },
                PointerEvent::Move { x: 10.0, y: 0.0 },
            ],
        );

        // Mode flips mid-stroke; the session stays open.
        config.erase = true;
        engine.handle(
            &PointerEvent::Move { x: 20.0, y: 0.0 },
            Point::ZERO,
            &config,
            &mut ctx,
        );

        assert_eq!(ctx.segments.len(), 2);
        assert_eq!(ctx.segments[0].2.op, CompositeOp::SourceOver);
        assert_eq!(ctx.segments[0].2.width, PAINT_WIDTH);
        assert_eq!(ctx.segments[1].2.op, CompositeOp::DestinationOut);
        assert_eq!(ctx.segments[1].2.width, ERASE_WIDTH);
        // Continuity is unbroken across the toggle.
        assert_eq!(ctx.segments[1].0, Point::new(10.0, 0.0));
    }

    #[test]
    fn color_change_applies_to_the_next_segment() {
        let mut engine = StrokeEngine::new();
        let mut ctx = RecordingContext::default();
        let mut config = BrushConfig::default();

        drive(
            &mut engine,
            &mut ctx,
            &config,
            &[
                PointerEvent::Down { x: 0.0, y: 0.0 },
                PointerEvent::Move { x: 0.0, y: 0.0 },
                PointerEvent::Move { x: 10.0, y: 0.0 },
            ],
        );

        config.color = Color::rgb(255, 0, 0);
        engine.handle(
            &PointerEvent::Move { x: 20.0, y: 0.0 },
            Point::ZERO,
            &config,
            &mut ctx,
        );

        assert_eq!(ctx.segments[0].2.color, Color::BLACK);
        assert_eq!(ctx.segments[1].2.color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn origin_offset_is_subtracted_from_raw_coordinates() {
        let mut engine = StrokeEngine::new();
        let mut ctx = RecordingContext::default();
        let config = BrushConfig::default();
        let origin = Point::new(8.0, 32.0);

        for event in [
            PointerEvent::Down { x: 18.0, y: 42.0 },
            PointerEvent::Move { x: 18.0, y: 42.0 },
            PointerEvent::Move { x: 28.0, y: 42.0 },
        ] {
            engine.handle(&event, origin, &config, &mut ctx);
        }

        assert_eq!(ctx.segments.len(), 1);
        let (from, to, _) = ctx.segments[0];
        assert_eq!(from, Point::new(10.0, 10.0));
        assert_eq!(to, Point::new(20.0, 10.0));
    }
}
