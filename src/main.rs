//! Spindle entry point
//!
//! The windowed shell (GLFW/GPU surface) is an external collaborator and is
//! not wired up here; the binary runs the full frame pipeline headlessly
//! against a recording canvas and reports what it drew.

use std::path::Path;

use glam::Vec2;

use spindle::Session;
use spindle::Settings;
use spindle::canvas_center;
use spindle::platform::ScriptedShell;
use spindle::platform::assets::Bitmap;
use spindle::render::{DrawOp, RecordingCanvas};

const SETTINGS_PATH: &str = "spindle.json";
const DEMO_FRAMES: u64 = 600;
const DEMO_FRAME_INTERVAL: f64 = 1.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Spindle starting...");

    let settings = Settings::load(Path::new(SETTINGS_PATH));

    // Fall back to a placeholder marker so the headless demo runs without
    // the asset on disk; a windowed shell would treat this as fatal.
    let session = match Session::new(&settings, 0.0) {
        Ok(session) => Ok(session),
        Err(spindle::SessionError::ResourceUnavailable(reason)) => {
            log::warn!("{reason}; using placeholder marker");
            Session::with_marker(&settings, 0.0, Bitmap::solid(16, 16))
        }
        Err(err) => Err(err),
    };

    let mut session = match session {
        Ok(session) => session,
        Err(err) => {
            log::error!("session startup failed: {err}");
            std::process::exit(1);
        }
    };

    let center = canvas_center(settings.width, settings.height);
    let orbit = (spindle::consts::RING_INNER_RADIUS + spindle::consts::RING_OUTER_RADIUS) / 2.0;
    let mut shell = ScriptedShell::new(center, orbit, DEMO_FRAME_INTERVAL, DEMO_FRAMES);
    let mut canvas = RecordingCanvas::new();

    let frames = session.run(&mut shell, &mut canvas);

    let mut paths = 0_usize;
    let mut circles = 0_usize;
    let mut arcs = 0_usize;
    let mut bitmaps = 0_usize;
    for op in canvas.ops() {
        match op {
            DrawOp::Path { .. } => paths += 1,
            DrawOp::Circle { .. } => circles += 1,
            DrawOp::Arc { .. } => arcs += 1,
            DrawOp::Bitmap { .. } => bitmaps += 1,
            DrawOp::Clear { .. } => {}
        }
    }
    log::info!(
        "rendered {frames} frames: {paths} spiral paths, {circles} circles, {arcs} arcs, {bitmaps} marker stamps"
    );

    // Scripted sanity pass over the last frame's geometry
    let progress = session.scene().clock.loop_progress;
    let indicator: Vec2 = session.scene().indicator_pos();
    log::info!(
        "final progress {progress:.2}s, indicator at ({:.1}, {:.1})",
        indicator.x,
        indicator.y
    );
}
