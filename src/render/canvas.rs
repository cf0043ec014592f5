//! Drawable-canvas contract
//!
//! The windowing/GPU collaborator supplies the real surface; the core only
//! needs this narrow drawing vocabulary. Colors are 32-bit ARGB, matching
//! the paint values the prototype was authored with.

use glam::Vec2;

use crate::anim::ArcParams;
use crate::platform::assets::Bitmap;

/// Stroke-or-fill paint style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    #[default]
    Stroke,
    Fill,
}

/// Dash intervals plus phase offset for stroked paths
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    pub intervals: Vec<f32>,
    pub phase: f32,
}

impl DashPattern {
    pub fn new(intervals: &[f32], phase: f32) -> Self {
        Self {
            intervals: intervals.to_vec(),
            phase,
        }
    }
}

/// Paint attributes for a single draw call
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub style: PaintStyle,
    /// 32-bit ARGB
    pub color: u32,
    pub stroke_width: f32,
    pub dash: Option<DashPattern>,
    pub anti_alias: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            style: PaintStyle::Stroke,
            color: 0xFF00_0000,
            stroke_width: 1.0,
            dash: None,
            anti_alias: true,
        }
    }
}

impl Paint {
    pub fn stroke(color: u32, stroke_width: f32) -> Self {
        Self {
            style: PaintStyle::Stroke,
            color,
            stroke_width,
            ..Default::default()
        }
    }

    pub fn fill(color: u32) -> Self {
        Self {
            style: PaintStyle::Fill,
            ..Default::default()
        }
        .with_color(color)
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_dash(mut self, intervals: &[f32], phase: f32) -> Self {
        self.dash = Some(DashPattern::new(intervals, phase));
        self
    }
}

/// One frame's worth of drawing surface
///
/// Later calls composite on top of earlier ones; no depth buffering.
pub trait Canvas {
    /// Fill the whole canvas with `color`
    fn clear(&mut self, color: u32);

    /// Draw `points` as one connected path (moveTo first, lineTo rest)
    fn draw_path(&mut self, points: &[Vec2], paint: &Paint);

    /// Draw a circle of `radius` around `center`
    fn draw_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Draw an arc sector, starting its path at `anchor`
    fn draw_arc(&mut self, arc: &ArcParams, anchor: Vec2, paint: &Paint);

    /// Stamp a bitmap with its top-left corner at `top_left`
    fn draw_bitmap(&mut self, bitmap: &Bitmap, top_left: Vec2);
}
