//! Pointer-angle tracking
//!
//! Converts the raw pointer position into a direction from the canvas center
//! and an angle in degrees. The convention is "up is the reference": the
//! reported angle is `90 + atan2(dy, dx)` in screen coordinates.
//!
//! A pointer exactly at the center has no direction. That case is branched
//! explicitly and the previous angle retained; letting a zero vector reach
//! `normalize` would leak NaN into every angle-derived shape for the frame.

use glam::Vec2;

/// Stateful tracker; carries the last valid angle as the degenerate fallback
#[derive(Debug, Clone, Default)]
pub struct PointerAngleTracker {
    last_angle_deg: f32,
}

impl PointerAngleTracker {
    /// Angle of `pointer` relative to `center`, degrees
    pub fn angle_of(&mut self, pointer: Vec2, center: Vec2) -> f32 {
        let offset = pointer - center;
        match offset.try_normalize() {
            Some(dir) => {
                self.last_angle_deg = 90.0 + dir.y.atan2(dir.x).to_degrees();
                self.last_angle_deg
            }
            None => self.last_angle_deg,
        }
    }

    /// Most recent valid angle
    #[inline]
    pub fn last_angle_deg(&self) -> f32 {
        self.last_angle_deg
    }
}
