//! External-collaborator abstraction
//!
//! The window/surface/event-loop stack lives outside the core. The frame
//! loop reaches it only through `Shell`: a per-frame clock reading, a
//! pointer snapshot, and the close signal, each sampled once per iteration.

pub mod assets;

use glam::Vec2;

/// What the windowing collaborator must provide to drive a session
pub trait Shell {
    /// Wall-clock reading in seconds
    fn now(&mut self) -> f64;

    /// Current pointer position in canvas pixels, origin top-left
    fn pointer_position(&mut self) -> Vec2;

    /// Close signal, polled at the top of each loop iteration
    fn should_close(&mut self) -> bool;
}

/// Headless shell that replays a scripted pointer sweep for a fixed number
/// of frames, at a fixed synthetic frame interval
#[derive(Debug, Clone)]
pub struct ScriptedShell {
    center: Vec2,
    orbit_radius: f32,
    frame_interval: f64,
    frame_budget: u64,
    frames_served: u64,
}

impl ScriptedShell {
    pub fn new(center: Vec2, orbit_radius: f32, frame_interval: f64, frame_budget: u64) -> Self {
        Self {
            center,
            orbit_radius,
            frame_interval,
            frame_budget,
            frames_served: 0,
        }
    }

    fn elapsed(&self) -> f64 {
        self.frames_served as f64 * self.frame_interval
    }
}

impl Shell for ScriptedShell {
    fn now(&mut self) -> f64 {
        self.frames_served += 1;
        self.elapsed()
    }

    fn pointer_position(&mut self) -> Vec2 {
        // Sweep the pointer around the rings, one lap per four seconds
        let theta = (self.elapsed() * std::f64::consts::TAU / 4.0) as f32;
        self.center + self.orbit_radius * Vec2::new(theta.cos(), theta.sin())
    }

    fn should_close(&mut self) -> bool {
        self.frames_served >= self.frame_budget
    }
}
