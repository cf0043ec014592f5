//! Frame compositing
//!
//! Fixed painter's-algorithm order per frame: clear, spiral path, indicator
//! circle, logged history markers, two dashed rings, two pointer arcs.
//! Later draws land on top of earlier ones.

use glam::Vec2;

use super::canvas::{Canvas, Paint};
use crate::anim::{FrameModel, IndicatorLog};
use crate::consts::{INDICATOR_RADIUS, RING_INNER_RADIUS, RING_OUTER_RADIUS};
use crate::platform::assets::Bitmap;

/// Paint palette (ARGB), from the authored prototype
mod colors {
    pub const BACKGROUND: u32 = 0xFF00_0000;
    pub const SPIRAL_STROKE: u32 = 0x2266_6666;
    pub const INDICATOR_FILL: u32 = 0xFF0F_9D58;
    /// Ring color while progress advances
    pub const RING_ACTIVE: u32 = 0xCC66_6666;
    /// Same hue, lower alpha, while paused
    pub const RING_PAUSED: u32 = 0x6666_6666;
    pub const ARC_STROKE: u32 = 0xFF0E_5DE0;
}

/// Ring dash cadence
const RING_DASH: [f32; 2] = [4.0, 2.0];

/// Draws one frame from an immutable model
#[derive(Debug, Clone)]
pub struct FrameCompositor {
    center: Vec2,
}

impl FrameCompositor {
    pub fn new(center: Vec2) -> Self {
        Self { center }
    }

    pub fn render_frame(
        &self,
        model: &FrameModel,
        log: &IndicatorLog,
        marker: &Bitmap,
        canvas: &mut dyn Canvas,
    ) {
        canvas.clear(colors::BACKGROUND);

        // Spiral path, low-opacity gray; an empty spiral means no path
        if !model.spiral.is_empty() {
            let paint = Paint::stroke(colors::SPIRAL_STROKE, 1.0);
            canvas.draw_path(&model.spiral, &paint);
            canvas.draw_circle(
                model.indicator,
                INDICATOR_RADIUS,
                &Paint::fill(colors::INDICATOR_FILL),
            );
        }

        // History markers, stamped centered on each logged point
        let half = Vec2::new(marker.width() as f32 / 2.0, marker.height() as f32 / 2.0);
        for &pos in log.entries() {
            canvas.draw_bitmap(marker, pos - half);
        }

        // Concentric dashed rings; only alpha distinguishes paused frames
        let ring_color = if model.playing {
            colors::RING_ACTIVE
        } else {
            colors::RING_PAUSED
        };
        let ring_paint = Paint::stroke(ring_color, 1.0).with_dash(&RING_DASH, 0.0);
        canvas.draw_circle(self.center, RING_INNER_RADIUS, &ring_paint);
        canvas.draw_circle(self.center, RING_OUTER_RADIUS, &ring_paint);

        // Pointer-tracking arcs ride on top of everything
        let arc_paint = Paint::stroke(colors::ARC_STROKE, 2.0);
        canvas.draw_arc(&model.arcs.outer, model.arcs.outer_anchor, &arc_paint);
        canvas.draw_arc(&model.arcs.inner, model.arcs.inner_anchor, &arc_paint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{FrameInput, SceneState, SpiralSpec};
    use crate::render::recording::{DrawOp, RecordingCanvas};

    const CENTER: Vec2 = Vec2::new(320.0, 240.0);

    fn frame(state: &mut SceneState) -> FrameModel {
        state.advance(&FrameInput {
            now: 0.0,
            pointer: Vec2::new(420.0, 240.0),
        })
    }

    fn scene(spec: SpiralSpec, index: usize) -> SceneState {
        SceneState::new(spec, index, CENTER, 0.0, 1.0, None).unwrap()
    }

    fn marker() -> Bitmap {
        Bitmap::solid(16, 24)
    }

    #[test]
    fn test_draw_order_contract() {
        let mut state = scene(SpiralSpec::default(), 230);
        state.record_event();
        let model = frame(&mut state);
        state.record_event();

        let mut canvas = RecordingCanvas::new();
        FrameCompositor::new(CENTER).render_frame(&model, &state.log, &marker(), &mut canvas);

        let kinds: Vec<&str> = canvas
            .ops()
            .iter()
            .map(|op| match op {
                DrawOp::Clear { .. } => "clear",
                DrawOp::Path { .. } => "path",
                DrawOp::Circle { .. } => "circle",
                DrawOp::Arc { .. } => "arc",
                DrawOp::Bitmap { .. } => "bitmap",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                "clear", "path", "circle", "bitmap", "bitmap", "circle", "circle", "arc", "arc"
            ]
        );
    }

    #[test]
    fn test_empty_history_draws_no_markers() {
        let mut state = scene(SpiralSpec::default(), 230);
        let model = frame(&mut state);

        let mut canvas = RecordingCanvas::new();
        FrameCompositor::new(CENTER).render_frame(&model, &state.log, &marker(), &mut canvas);
        assert!(
            !canvas
                .ops()
                .iter()
                .any(|op| matches!(op, DrawOp::Bitmap { .. }))
        );
    }

    #[test]
    fn test_markers_are_centered_on_logged_points() {
        let mut state = scene(SpiralSpec::default(), 230);
        let model = frame(&mut state);
        state.record_event();

        let mut canvas = RecordingCanvas::new();
        FrameCompositor::new(CENTER).render_frame(&model, &state.log, &marker(), &mut canvas);

        let stamp = canvas
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Bitmap { top_left, .. } => Some(*top_left),
                _ => None,
            })
            .unwrap();
        assert!((stamp - (model.indicator - Vec2::new(8.0, 12.0))).length() < 1e-4);
    }

    #[test]
    fn test_empty_spiral_skips_path_and_indicator() {
        let spec = SpiralSpec {
            point_count: 1,
            ..Default::default()
        };
        let mut state = scene(spec, 0);
        let mut model = frame(&mut state);
        model.spiral.clear();

        let mut canvas = RecordingCanvas::new();
        FrameCompositor::new(CENTER).render_frame(&model, &state.log, &marker(), &mut canvas);
        // clear + 2 rings + 2 arcs only
        assert_eq!(canvas.ops().len(), 5);
    }

    #[test]
    fn test_pause_changes_ring_alpha_only() {
        let mut state = scene(SpiralSpec::default(), 230);
        let playing = frame(&mut state);
        state.clock.pause();
        let paused = frame(&mut state);

        let ring_color = |model: &FrameModel| {
            let mut canvas = RecordingCanvas::new();
            FrameCompositor::new(CENTER).render_frame(
                model,
                &state.log,
                &marker(),
                &mut canvas,
            );
            canvas
                .ops()
                .iter()
                .find_map(|op| match op {
                    DrawOp::Circle { radius, paint, .. } if *radius == RING_INNER_RADIUS => {
                        Some(paint.color)
                    }
                    _ => None,
                })
                .unwrap()
        };

        let active = ring_color(&playing);
        let inactive = ring_color(&paused);
        assert_ne!(active, inactive);
        // Same RGB, different alpha
        assert_eq!(active & 0x00FF_FFFF, inactive & 0x00FF_FFFF);
    }
}
