//! Session settings
//!
//! Everything configurable at session start, persisted as JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::anim::SpiralSpec;
use crate::consts;

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,

    /// Spiral shape
    pub spiral: SpiralSpec,
    /// Fixed sample index highlighted as the indicator
    pub indicator_index: usize,

    /// Initial time scale (0 starts paused)
    pub play_rate: f64,

    /// Whether pointer events append to the indicator history log.
    /// Off by default; the reference behavior ships with the hook disabled.
    pub record_on_pointer_event: bool,
    /// Rolling-window size for the history log; `None` grows unboundedly
    pub history_capacity: Option<usize>,

    /// Path of the bitmap stamped on logged history points
    pub marker_asset: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Spindle visual prototype".to_string(),
            width: consts::WIDTH,
            height: consts::HEIGHT,
            spiral: SpiralSpec::default(),
            indicator_index: consts::INDICATOR_INDEX,
            play_rate: 1.0,
            record_on_pointer_event: false,
            history_capacity: None,
            marker_asset: PathBuf::from("assets/marker.png"),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when the
    /// file is absent or unreadable
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("bad settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_reference() {
        let settings = Settings::default();
        assert_eq!(settings.width, 640);
        assert_eq!(settings.height, 480);
        assert_eq!(settings.indicator_index, 230);
        assert_eq!(settings.spiral.point_count, 500);
        assert!(!settings.record_on_pointer_event);
    }

    #[test]
    fn test_settings_json_round_trip() {
        let mut settings = Settings::default();
        settings.history_capacity = Some(64);
        settings.play_rate = 0.0;

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.history_capacity, Some(64));
        assert_eq!(back.play_rate, 0.0);
        assert_eq!(back.spiral, settings.spiral);
    }
}
