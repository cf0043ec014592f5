//! Session error taxonomy
//!
//! Both variants are fatal at startup; the per-frame pipeline has no failure
//! modes (degenerate pointer geometry is handled locally in `anim::pointer`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Invalid fixed configuration, e.g. an indicator index the spiral
    /// point count cannot address
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An external resource (marker bitmap, window/surface) failed to
    /// come up at session start
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(String),
}
