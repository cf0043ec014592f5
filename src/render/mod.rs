//! Canvas abstraction and frame compositing

pub mod canvas;
pub mod compositor;
pub mod recording;

pub use canvas::{Canvas, DashPattern, Paint, PaintStyle};
pub use compositor::FrameCompositor;
pub use recording::{DrawOp, RecordingCanvas};
