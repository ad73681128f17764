//! Core configuration.

use serde::{Deserialize, Serialize};

/// Rate used when a manifest declares no usable frame rate.
pub const DEFAULT_FPS: f32 = 24.0;

/// Tunables for the catalog and player. Defaults mirror the reference
/// viewer; embedders override what they need.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Substitute rate when a pack reports a non-positive fps.
    pub fallback_fps: f32,
    /// Extension (with dot) the catalog accepts as a pack manifest.
    pub manifest_ext: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_fps: DEFAULT_FPS,
            manifest_ext: ".json".to_string(),
        }
    }
}
