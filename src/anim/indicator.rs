//! Indicator selection and history
//!
//! The indicator is the single spiral sample highlighted each frame. Its
//! index is fixed configuration, validated once at session startup against
//! the spiral point count; per-frame picking then indexes unconditionally.

use glam::Vec2;

use super::spiral::SpiralSpec;
use crate::error::SessionError;

/// Picks the fixed-index sample from the rotated spiral
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSelector {
    index: usize,
}

impl IndicatorSelector {
    /// Fails with a configuration error when `index` cannot address the
    /// spiral described by `spec`. Fatal at startup, never per-frame.
    pub fn new(index: usize, spec: &SpiralSpec) -> Result<Self, SessionError> {
        if index >= spec.point_count {
            return Err(SessionError::Configuration(format!(
                "indicator index {index} out of bounds for spiral of {} points",
                spec.point_count
            )));
        }
        Ok(Self { index })
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current indicator position in the rotated spiral.
    ///
    /// Callers pass the sequence produced from the spec this selector was
    /// validated against; rotation preserves index-to-point correspondence.
    #[inline]
    pub fn pick(&self, rotated: &[Vec2]) -> Vec2 {
        rotated[self.index]
    }
}

/// Append-only log of recorded indicator positions
///
/// One entry per recorded pointer event. Without a capacity the log grows
/// unboundedly for the life of the session; a capacity turns it into a
/// rolling window over the most recent entries.
#[derive(Debug, Clone, Default)]
pub struct IndicatorLog {
    entries: Vec<Vec2>,
    capacity: Option<usize>,
}

impl IndicatorLog {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Append unconditionally, then enforce the rolling window if set
    pub fn record(&mut self, point: Vec2) {
        self.entries.push(point);
        if let Some(cap) = self.capacity {
            if self.entries.len() > cap {
                let overflow = self.entries.len() - cap;
                self.entries.drain(..overflow);
            }
        }
    }

    #[inline]
    pub fn entries(&self) -> &[Vec2] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
