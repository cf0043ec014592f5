//! Session wiring and the frame loop
//!
//! A `Session` owns the scene state, the compositor, and the decoded marker
//! bitmap. Configuration is validated once at construction; after that every
//! frame is infallible.

use glam::Vec2;

use crate::anim::{FrameInput, FrameModel, SceneState};
use crate::canvas_center;
use crate::error::SessionError;
use crate::platform::Shell;
use crate::platform::assets::Bitmap;
use crate::render::{Canvas, FrameCompositor};
use crate::settings::Settings;

/// A running prototype session
#[derive(Debug)]
pub struct Session {
    scene: SceneState,
    compositor: FrameCompositor,
    marker: Bitmap,
    record_on_pointer_event: bool,
    initial_play_rate: f64,
}

impl Session {
    /// Build a session, decoding the marker asset from disk
    pub fn new(settings: &Settings, start_time: f64) -> Result<Self, SessionError> {
        let marker = Bitmap::load(&settings.marker_asset)?;
        Self::with_marker(settings, start_time, marker)
    }

    /// Build a session around an already-decoded marker bitmap
    pub fn with_marker(
        settings: &Settings,
        start_time: f64,
        marker: Bitmap,
    ) -> Result<Self, SessionError> {
        let center = canvas_center(settings.width, settings.height);
        let scene = SceneState::new(
            settings.spiral,
            settings.indicator_index,
            center,
            start_time,
            settings.play_rate,
            settings.history_capacity,
        )?;
        log::info!(
            "session up: {}x{}, {} spiral points, indicator {}",
            settings.width,
            settings.height,
            settings.spiral.point_count,
            settings.indicator_index
        );
        Ok(Self {
            scene,
            compositor: FrameCompositor::new(center),
            marker,
            record_on_pointer_event: settings.record_on_pointer_event,
            initial_play_rate: if settings.play_rate > 0.0 {
                settings.play_rate
            } else {
                1.0
            },
        })
    }

    /// Advance and draw one frame
    pub fn frame(&mut self, input: &FrameInput, canvas: &mut dyn Canvas) -> FrameModel {
        let model = self.scene.advance(input);
        self.compositor
            .render_frame(&model, &self.scene.log, &self.marker, canvas);
        model
    }

    /// Pointer-event hook. When recording is enabled, appends the current
    /// indicator position (not the raw pointer position) to the history log.
    pub fn on_pointer_event(&mut self, _position: Vec2) {
        if self.record_on_pointer_event {
            self.scene.record_event();
            log::debug!("recorded indicator at {:?}", self.scene.indicator_pos());
        }
    }

    /// Freeze loop progress; geometry keeps rendering at the frozen angle
    pub fn pause(&mut self) {
        self.scene.clock.pause();
        log::debug!("paused at progress {:.3}s", self.scene.clock.loop_progress);
    }

    /// Resume progression at the configured rate
    pub fn resume(&mut self) {
        self.scene.clock.resume(self.initial_play_rate);
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.scene.clock.is_playing()
    }

    #[inline]
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Drive the session until the shell signals close. One iteration =
    /// sample clock and pointer, advance, composite, hand the frame back.
    /// Returns the number of frames rendered.
    pub fn run(&mut self, shell: &mut dyn Shell, canvas: &mut dyn Canvas) -> u64 {
        let mut frames = 0_u64;
        while !shell.should_close() {
            let input = FrameInput {
                now: shell.now(),
                pointer: shell.pointer_position(),
            };
            self.frame(&input, canvas);
            frames += 1;
        }
        log::info!("session closed after {frames} frames");
        frames
    }
}
