//! Configuration types for the track view.

use crate::pos_format::PosFormatter;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual track features on or off.
///
/// Everything except `block_outlines` defaults to `true` (enabled).
#[derive(Clone, Debug)]
pub struct TrackFeatures {
    /// Show the floating Y-axis scale bar (once metadata allows it).
    pub scale_bar: bool,
    /// Show X-axis (genomic position) tick labels.
    pub x_tick_labels: bool,
    /// Show the plot grid.
    pub grid: bool,
    /// Outline each tile block (debugging aid for tile boundaries).
    pub block_outlines: bool,
}

impl Default for TrackFeatures {
    fn default() -> Self {
        Self {
            scale_bar: true,
            x_tick_labels: true,
            grid: true,
            block_outlines: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TrackConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for a wiggle image track.
#[derive(Clone, Debug)]
pub struct TrackConfig {
    /// Track height in pixels.
    pub height_px: f32,
    /// Optional unit label for scale-bar ticks (e.g. "x cov", "RPKM").
    pub y_unit: Option<String>,
    /// Width of the scale-bar gutter in pixels.
    pub scale_bar_width_px: f32,
    /// Approximate number of scale-bar ticks to aim for.
    pub scale_ticks: usize,
    /// Track background color.
    pub background: egui::Color32,
    /// X-axis position formatter.
    pub pos_formatter: PosFormatter,
    /// Feature toggles.
    pub features: TrackFeatures,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            height_px: 120.0,
            y_unit: None,
            scale_bar_width_px: 54.0,
            scale_ticks: 4,
            background: egui::Color32::from_gray(18),
            pos_formatter: PosFormatter::Auto,
            features: TrackFeatures::default(),
        }
    }
}
