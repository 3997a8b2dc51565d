//! Tiled-image track specialized for quantitative ("wiggle") signal
//! data: identical to the base track, plus a floating Y-axis scale bar
//! built lazily once the store reports global min/max metadata.
//!
//! Construction ordering is the one subtlety here: the scale bar needs
//! metadata that only exists some time after the asynchronous tile
//! pipeline starts delivering, so the attempt is chained onto each
//! tile completion until it succeeds. Missing metadata is a normal
//! "not ready yet" condition and is skipped silently; the next tile
//! completion retries. Once built, the bar is never rebuilt, even if
//! the store later reports different statistics.

use std::sync::Arc;

use crate::store::{SignalStore, TileImage};
use crate::track::{ComposeCallback, ImageTrack, LayoutCoords, Region, TileLoadHandler};
use crate::yscale::{ScaleBar, YScale};

pub struct WiggleImageTrack {
    base: ImageTrack,
    store: Arc<dyn SignalStore>,
    /// Cached range, frozen at scale-bar construction time.
    min: Option<f64>,
    max: Option<f64>,
    yscale: Option<ScaleBar>,
    unit: Option<String>,
    tick_target: usize,
}

impl WiggleImageTrack {
    pub fn new(region: Region, block_span_bp: f64, store: Arc<dyn SignalStore>) -> Self {
        Self {
            base: ImageTrack::new(region, block_span_bp),
            store,
            min: None,
            max: None,
            yscale: None,
            unit: None,
            tick_target: 4,
        }
    }

    /// Unit suffix for scale-bar tick labels.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Approximate number of scale-bar ticks.
    pub fn with_tick_target(mut self, target: usize) -> Self {
        self.tick_target = target.max(1);
        self
    }

    pub fn set_unit(&mut self, unit: Option<String>) {
        self.unit = unit;
    }

    pub fn set_tick_target(&mut self, target: usize) {
        self.tick_target = target.max(1);
    }

    pub fn base(&self) -> &ImageTrack {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut ImageTrack {
        &mut self.base
    }

    pub fn yscale(&self) -> Option<&ScaleBar> {
        self.yscale.as_ref()
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Base layout update, then keep the scale bar's horizontal
    /// position in sync. Tolerates running before the bar exists.
    pub fn update_static_elements(&mut self, coords: &LayoutCoords) {
        self.base.update_static_elements(coords);
        if let Some(x) = coords.x {
            if let Some(scale) = self.yscale.as_mut() {
                scale.set_left(x);
            }
        }
    }

    /// Extension point; currently base behavior only.
    pub fn load_success(&mut self) {
        self.base.load_success();
    }

    /// Same factory surface as the base track. The scale-bar chaining
    /// happens in [`complete_load`](Self::complete_load), so the
    /// handler itself is the base one with the caller's compose
    /// callback preserved.
    pub fn make_image_load_handler(
        &mut self,
        block_index: usize,
        width_bp: f64,
        compose: Option<ComposeCallback>,
    ) -> TileLoadHandler {
        self.base.make_image_load_handler(block_index, width_bp, compose)
    }

    /// Complete a tile load: base placement, then a scale-bar
    /// construction attempt if none exists yet, then the caller's
    /// compose callback. The callback fires exactly once per tile,
    /// whether or not construction happened.
    pub fn complete_load(&mut self, mut handler: TileLoadHandler, image: TileImage) {
        let compose = handler.take_compose();
        self.base.place_tile(&handler, image);
        if self.yscale.is_none() {
            self.make_wiggle_yscale();
        }
        if let Some(cb) = compose {
            cb();
        }
    }

    /// Attempt scale-bar construction from store metadata.
    ///
    /// Returns silently when the store has no statistics yet; nothing
    /// is recorded and a later tile completion will retry. Once the bar
    /// exists this is a no-op: min/max stay frozen even if the store
    /// later reports different statistics.
    pub fn make_wiggle_yscale(&mut self) {
        if self.yscale.is_some() {
            return;
        }
        let Some(stats) = self.store.global_stats() else {
            return;
        };
        self.min = Some(stats.global_min);
        self.max = Some(stats.global_max);
        self.make_yscale();
    }
}

impl YScale for WiggleImageTrack {
    fn scale_range(&self) -> Option<(f64, f64)> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    fn scale_unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    fn scale_tick_target(&self) -> usize {
        self.tick_target
    }

    fn scale_slot(&mut self) -> &mut Option<ScaleBar> {
        &mut self.yscale
    }

    fn scale_left(&self) -> Option<f32> {
        self.base.left_offset()
    }
}
