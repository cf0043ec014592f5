//! Per-frame scene state and the frame pipeline
//!
//! `SceneState` is the one mutable value the frame loop owns. Each frame it
//! is advanced with a `FrameInput` snapshot (clock reading + pointer
//! position, both sampled once) and yields an immutable `FrameModel` the
//! compositor can draw without touching state again.

use glam::Vec2;

use super::arcs::{CompassArcs, build_compass_arcs};
use super::clock::ProgressClock;
use super::indicator::{IndicatorLog, IndicatorSelector};
use super::pointer::PointerAngleTracker;
use super::rotation::Rotation;
use super::spiral::{SpiralPath, SpiralSpec};
use crate::consts::ROTATION_PERIOD_SECS;
use crate::error::SessionError;

/// Inputs for a single frame, sampled once at the top of the iteration
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Wall-clock reading (seconds)
    pub now: f64,
    /// Pointer position in canvas pixels, origin top-left
    pub pointer: Vec2,
}

/// Everything the compositor needs to draw one frame
#[derive(Debug, Clone)]
pub struct FrameModel {
    /// Rotated spiral samples in generation order
    pub spiral: Vec<Vec2>,
    /// Current indicator position (fixed-index sample)
    pub indicator: Vec2,
    /// Pointer angle in degrees (90 = pointer due right of center)
    pub pointer_angle_deg: f32,
    /// The two pointer-tracking arc sectors
    pub arcs: CompassArcs,
    /// Whether progress is advancing (selects ring alpha)
    pub playing: bool,
}

/// Long-lived mutable animation state
#[derive(Debug, Clone)]
pub struct SceneState {
    pub clock: ProgressClock,
    pub center: Vec2,
    spiral: SpiralPath,
    selector: IndicatorSelector,
    pointer: PointerAngleTracker,
    /// Indicator position from the most recent frame, recorded on pointer events
    indicator_pos: Vec2,
    pub log: IndicatorLog,
}

impl SceneState {
    pub fn new(
        spec: SpiralSpec,
        indicator_index: usize,
        center: Vec2,
        start_time: f64,
        play_rate: f64,
        log_capacity: Option<usize>,
    ) -> Result<Self, SessionError> {
        let selector = IndicatorSelector::new(indicator_index, &spec)?;
        Ok(Self {
            clock: ProgressClock::new(start_time, play_rate),
            center,
            spiral: SpiralPath::new(spec, center),
            selector,
            pointer: PointerAngleTracker::default(),
            indicator_pos: center,
            log: IndicatorLog::new(log_capacity),
        })
    }

    /// Advance one frame: tick the clock, rotate the spiral, pick the
    /// indicator, track the pointer angle, and build the compass arcs.
    pub fn advance(&mut self, input: &FrameInput) -> FrameModel {
        self.clock.tick(input.now);

        let angle_deg = self.clock.rotation_deg(ROTATION_PERIOD_SECS);
        let rotation = Rotation::new(angle_deg, self.center);
        let spiral = rotation.apply(self.spiral.points());

        let indicator = self.selector.pick(&spiral);
        self.indicator_pos = indicator;

        let pointer_angle_deg = self.pointer.angle_of(input.pointer, self.center);
        let arcs = build_compass_arcs(pointer_angle_deg, self.center);

        FrameModel {
            spiral,
            indicator,
            pointer_angle_deg,
            arcs,
            playing: self.clock.is_playing(),
        }
    }

    /// Pointer-event hook: log the indicator position current at event time
    pub fn record_event(&mut self) {
        self.log.record(self.indicator_pos);
    }

    /// Indicator position from the most recent `advance`
    #[inline]
    pub fn indicator_pos(&self) -> Vec2 {
        self.indicator_pos
    }

    #[inline]
    pub fn spiral_spec(&self) -> &SpiralSpec {
        self.spiral.spec()
    }
}
