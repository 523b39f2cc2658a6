use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::api::error::Result;

/// Asset manifest describing atlases and named animation strips.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// List of texture atlases.
    pub atlases: Vec<AtlasDescriptor>,
    /// Named animation lookup: sheet path → strip location in an atlas.
    #[serde(default)]
    pub animations: HashMap<String, AnimationDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Human-readable name (e.g., "player").
    pub name: String,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Relative path to the PNG file.
    pub path: String,
}

/// Describes a horizontal animation strip within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    /// Row of the strip in the atlas grid.
    pub row: u32,
    /// Column of the first frame (default: 0).
    #[serde(default)]
    pub start_col: u32,
    /// Number of frames in the strip.
    pub frames: u32,
    /// Ticks each frame is shown (default: 4).
    #[serde(default = "default_ticks_per_frame")]
    pub ticks_per_frame: u32,
    /// Whether playback wraps around (default: true).
    #[serde(default = "default_looping")]
    pub looping: bool,
}

fn default_ticks_per_frame() -> u32 {
    4
}

fn default_looping() -> bool {
    true
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
