//! Loop-progress accumulation
//!
//! Rotation is driven by "loop progress": seconds accumulated while the
//! session is playing. Pausing freezes the accumulator without rewinding it.

use serde::{Deserialize, Serialize};

/// Wall-clock accumulator for animation progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressClock {
    /// Timestamp of session start (seconds)
    pub start_time: f64,
    /// Timestamp seen by the most recent tick (seconds)
    pub last_time: f64,
    /// Accumulated playing time (seconds), drives the spiral rotation
    pub loop_progress: f64,
    /// Time scale; 0 pauses progression, 1 tracks wall time
    pub play_rate: f64,
}

impl ProgressClock {
    pub fn new(start_time: f64, play_rate: f64) -> Self {
        Self {
            start_time,
            last_time: start_time,
            loop_progress: 0.0,
            play_rate: play_rate.max(0.0),
        }
    }

    /// Advance the accumulator to `now`.
    ///
    /// A `now` earlier than the last tick is a caller error; the negative
    /// step is applied as-is rather than clamped, matching the reference
    /// behavior for non-monotonic clocks.
    pub fn tick(&mut self, now: f64) {
        let step = now - self.last_time;
        if step < 0.0 {
            log::warn!("non-monotonic clock step: {step:.6}s");
        }
        if self.play_rate > 0.0 {
            self.loop_progress += step * self.play_rate;
        }
        self.last_time = now;
    }

    /// Whether progress is currently advancing
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.play_rate > 0.0
    }

    /// Pause progression without losing accumulated progress
    pub fn pause(&mut self) {
        self.play_rate = 0.0;
    }

    /// Resume progression at the given rate
    pub fn resume(&mut self, play_rate: f64) {
        self.play_rate = play_rate.max(0.0);
    }

    /// Current spiral rotation angle in degrees (one revolution per period)
    pub fn rotation_deg(&self, period_secs: f64) -> f32 {
        (self.loop_progress * -360.0 / period_secs) as f32
    }
}
