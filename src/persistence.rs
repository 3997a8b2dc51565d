//! View-state persistence: save and load track state to/from JSON.
//!
//! Serializable mirror types are used for state whose live form holds
//! non-serde handles (textures, stores).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{TrackConfig, TrackFeatures};
use crate::track::Region;
use crate::wiggle::WiggleImageTrack;

// ---------- Serializable mirror types ----------

/// Serializable version of [`Region`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSerde {
    pub start_bp: f64,
    pub end_bp: f64,
}

impl From<&Region> for RegionSerde {
    fn from(r: &Region) -> Self {
        Self {
            start_bp: r.start_bp,
            end_bp: r.end_bp,
        }
    }
}

impl RegionSerde {
    pub fn to_region(&self) -> Region {
        Region::new(self.start_bp, self.end_bp)
    }
}

/// Serializable version of [`TrackFeatures`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackFeaturesSerde {
    pub scale_bar: bool,
    pub x_tick_labels: bool,
    pub grid: bool,
    pub block_outlines: bool,
}

impl From<&TrackFeatures> for TrackFeaturesSerde {
    fn from(f: &TrackFeatures) -> Self {
        Self {
            scale_bar: f.scale_bar,
            x_tick_labels: f.x_tick_labels,
            grid: f.grid,
            block_outlines: f.block_outlines,
        }
    }
}

impl TrackFeaturesSerde {
    pub fn apply_to(&self, f: &mut TrackFeatures) {
        f.scale_bar = self.scale_bar;
        f.x_tick_labels = self.x_tick_labels;
        f.grid = self.grid;
        f.block_outlines = self.block_outlines;
    }
}

/// Persistable snapshot of a track view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackStateSerde {
    pub region: RegionSerde,
    pub height_px: f32,
    pub y_unit: Option<String>,
    pub scale_ticks: usize,
    pub features: TrackFeaturesSerde,
    /// Stored horizontal layout offset, if one was recorded.
    pub left_offset: Option<f32>,
}

impl TrackStateSerde {
    /// Capture the persistable parts of a track + config pair.
    pub fn capture(track: &WiggleImageTrack, config: &TrackConfig) -> Self {
        Self {
            region: (&track.base().region()).into(),
            height_px: config.height_px,
            y_unit: config.y_unit.clone(),
            scale_ticks: config.scale_ticks,
            features: (&config.features).into(),
            left_offset: track.base().left_offset(),
        }
    }

    /// Apply the stored state back onto a track + config pair.
    ///
    /// The scale bar itself is not restored; it regrows from metadata
    /// on the next tile load, per the build-once lifecycle.
    pub fn apply_to(&self, track: &mut WiggleImageTrack, config: &mut TrackConfig) {
        track.base_mut().set_region(self.region.to_region());
        if let Some(x) = self.left_offset {
            track.update_static_elements(&crate::track::LayoutCoords::x(x));
        }
        config.height_px = self.height_px;
        config.y_unit = self.y_unit.clone();
        config.scale_ticks = self.scale_ticks;
        self.features.apply_to(&mut config.features);
        track.set_unit(self.y_unit.clone());
        track.set_tick_target(self.scale_ticks);
    }
}

// ---------- JSON (de)serialization helpers ----------

pub fn state_to_json(state: &TrackStateSerde) -> Result<String, String> {
    serde_json::to_string_pretty(state).map_err(|e| format!("Failed to serialize state: {e}"))
}

pub fn state_from_json(json: &str) -> Result<TrackStateSerde, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse state: {e}"))
}

pub fn save_state_to_path(state: &TrackStateSerde, path: &Path) -> Result<(), String> {
    let json = state_to_json(state)?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

pub fn load_state_from_path(path: &Path) -> Result<TrackStateSerde, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    state_from_json(&json)
}
