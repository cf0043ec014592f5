//! Deterministic animation core
//!
//! All per-frame geometry lives here. This module must be pure and deterministic:
//! - Explicit state passed by reference, mutated once per frame
//! - No rendering or platform dependencies
//! - Stable point ordering (generation index is identity)

pub mod arcs;
pub mod clock;
pub mod indicator;
pub mod pointer;
pub mod rotation;
pub mod scene;
pub mod spiral;

pub use arcs::{ArcParams, CompassArcs, build_compass_arcs};
pub use clock::ProgressClock;
pub use indicator::{IndicatorLog, IndicatorSelector};
pub use pointer::PointerAngleTracker;
pub use rotation::Rotation;
pub use scene::{FrameInput, FrameModel, SceneState};
pub use spiral::{SpiralPath, SpiralSpec, generate_spiral};
