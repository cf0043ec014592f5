//! Draw-op recording canvas
//!
//! Backs the headless demo binary and the compositor tests: every draw call
//! is captured as a `DrawOp` so order and paint attributes can be inspected
//! without a real surface.

use glam::Vec2;

use super::canvas::{Canvas, Paint};
use crate::anim::ArcParams;
use crate::platform::assets::Bitmap;

/// A captured draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear {
        color: u32,
    },
    Path {
        points: Vec<Vec2>,
        paint: Paint,
    },
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    Arc {
        arc: ArcParams,
        anchor: Vec2,
        paint: Paint,
    },
    Bitmap {
        top_left: Vec2,
        width: u32,
        height: u32,
    },
}

/// Canvas implementation that records instead of rasterizing
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: u32) {
        self.ops.push(DrawOp::Clear { color });
    }

    fn draw_path(&mut self, points: &[Vec2], paint: &Paint) {
        self.ops.push(DrawOp::Path {
            points: points.to_vec(),
            paint: paint.clone(),
        });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn draw_arc(&mut self, arc: &ArcParams, anchor: Vec2, paint: &Paint) {
        self.ops.push(DrawOp::Arc {
            arc: *arc,
            anchor,
            paint: paint.clone(),
        });
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, top_left: Vec2) {
        self.ops.push(DrawOp::Bitmap {
            top_left,
            width: bitmap.width(),
            height: bitmap.height(),
        });
    }
}
