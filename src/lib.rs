//! Spindle - an animated spiral dial prototype
//!
//! Core modules:
//! - `anim`: Deterministic per-frame geometry (clock, spiral, rotation, arcs)
//! - `render`: Canvas abstraction and frame compositing
//! - `platform`: External shell abstraction (pointer, clock, close signal)
//! - `session`: Long-lived session wiring and the frame loop
//! - `settings`: Data-driven configuration

pub mod anim;
pub mod error;
pub mod platform;
pub mod render;
pub mod session;
pub mod settings;

pub use error::SessionError;
pub use session::Session;
pub use settings::Settings;

use glam::Vec2;

/// Prototype configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const WIDTH: u32 = 640;
    pub const HEIGHT: u32 = 480;

    /// Number of samples along the spiral path
    pub const SPIRAL_POINT_COUNT: usize = 500;
    /// Fixed sample index highlighted as the moving indicator
    pub const INDICATOR_INDEX: usize = 230;
    /// Radius of the filled indicator circle (pixels)
    pub const INDICATOR_RADIUS: f32 = 8.0;

    /// One full spiral revolution per this many seconds of loop progress
    pub const ROTATION_PERIOD_SECS: f64 = 8.0;

    /// Concentric compass rings (pixels from canvas center)
    pub const RING_INNER_RADIUS: f32 = 128.0;
    pub const RING_OUTER_RADIUS: f32 = 160.0;

    /// Angular width of each pointer-tracking arc sector (degrees)
    pub const ARC_SWEEP_DEG: f32 = 30.0;
    /// The arc is anchored this many degrees ahead of the pointer angle
    pub const ARC_LEAD_DEG: f32 = 15.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_deg(angle: f32) -> f32 {
    let a = angle % 360.0;
    if a < 0.0 { a + 360.0 } else { a }
}

/// Canvas center for a given pixel size
#[inline]
pub fn canvas_center(width: u32, height: u32) -> Vec2 {
    Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
}
