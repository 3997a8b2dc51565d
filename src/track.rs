//! Base tiled-image track: block bookkeeping, layout offsets, and the
//! per-tile load-handler factory.
//!
//! The track does not fetch or rasterize anything itself. Finished
//! tiles arrive through the channel API in [`crate::store`]; the owner
//! builds a [`TileLoadHandler`] via [`ImageTrack::make_image_load_handler`]
//! and completes it with [`ImageTrack::complete_load`] once the image
//! is in hand. Specialized tracks (see [`crate::wiggle`]) layer extra
//! behavior onto that completion path.

use std::collections::HashMap;

use crate::store::TileImage;

/// Layout-coordinate update payload. Absent fields mean "unchanged".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutCoords {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl LayoutCoords {
    pub fn x(x: f32) -> Self {
        Self {
            x: Some(x),
            y: None,
        }
    }
}

/// Visible genome window in base pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub start_bp: f64,
    pub end_bp: f64,
}

impl Region {
    pub fn new(start_bp: f64, end_bp: f64) -> Self {
        Self { start_bp, end_bp }
    }

    pub fn span_bp(&self) -> f64 {
        self.end_bp - self.start_bp
    }

    /// Whether the block starting at `start_bp` with width `width_bp`
    /// overlaps this region.
    pub fn overlaps(&self, start_bp: f64, width_bp: f64) -> bool {
        start_bp < self.end_bp && start_bp + width_bp > self.start_bp
    }
}

/// One placed tile: its genomic width, pixels, and (lazily) a texture.
pub struct TileBlock {
    pub width_bp: f64,
    pub image: TileImage,
    /// Uploaded on first render; dropped with the block.
    pub texture: Option<egui::TextureHandle>,
}

/// Optional completion callback invoked after a tile has been placed.
pub type ComposeCallback = Box<dyn FnOnce()>;

/// Handler produced by the load-handler factory and consumed exactly
/// once when the tile's image becomes available.
pub struct TileLoadHandler {
    pub block_index: usize,
    pub width_bp: f64,
    pub(crate) compose: Option<ComposeCallback>,
}

impl TileLoadHandler {
    /// Detach the compose callback, leaving the handler otherwise intact.
    pub(crate) fn take_compose(&mut self) -> Option<ComposeCallback> {
        self.compose.take()
    }
}

/// A horizontally scrolling track of pre-rendered image tiles.
pub struct ImageTrack {
    /// Visible genome window.
    region: Region,
    /// Placed blocks, keyed by block index.
    blocks: HashMap<usize, TileBlock>,
    /// Genomic width covered by one block.
    block_span_bp: f64,
    /// Last horizontal layout offset received, in pixels.
    left_offset: Option<f32>,
    /// Set once the initial load has completed.
    loaded: bool,
}

impl ImageTrack {
    pub fn new(region: Region, block_span_bp: f64) -> Self {
        Self {
            region,
            blocks: HashMap::new(),
            block_span_bp,
            left_offset: None,
            loaded: false,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn block_span_bp(&self) -> f64 {
        self.block_span_bp
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn left_offset(&self) -> Option<f32> {
        self.left_offset
    }

    pub fn blocks(&self) -> impl Iterator<Item = (&usize, &TileBlock)> {
        self.blocks.iter()
    }

    pub fn blocks_mut(&mut self) -> impl Iterator<Item = (&usize, &mut TileBlock)> {
        self.blocks.iter_mut()
    }

    pub fn block(&self, block_index: usize) -> Option<&TileBlock> {
        self.blocks.get(&block_index)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Genomic start position of a block.
    pub fn block_start_bp(&self, block_index: usize) -> f64 {
        block_index as f64 * self.block_span_bp
    }

    /// Record updated layout coordinates. Only the horizontal offset is
    /// meaningful for image tracks; a missing `x` leaves it untouched.
    pub fn update_static_elements(&mut self, coords: &LayoutCoords) {
        if let Some(x) = coords.x {
            self.left_offset = Some(x);
        }
    }

    /// Mark the track's initial load as complete and drop any blocks
    /// that no longer intersect the visible region.
    pub fn load_success(&mut self) {
        self.loaded = true;
        let region = self.region;
        let span = self.block_span_bp;
        self.blocks
            .retain(|idx, _| region.overlaps(*idx as f64 * span, span));
    }

    /// Create a completion handler for the tile of `block_index`.
    ///
    /// The handler carries the caller's compose callback; it fires once
    /// when the handler is completed, after the tile has been placed.
    pub fn make_image_load_handler(
        &mut self,
        block_index: usize,
        width_bp: f64,
        compose: Option<ComposeCallback>,
    ) -> TileLoadHandler {
        TileLoadHandler {
            block_index,
            width_bp,
            compose,
        }
    }

    /// Place a finished tile, then invoke the handler's compose
    /// callback (exactly once).
    pub fn complete_load(&mut self, mut handler: TileLoadHandler, image: TileImage) {
        self.place_tile(&handler, image);
        if let Some(cb) = handler.take_compose() {
            cb();
        }
    }

    /// Insert the tile into the block map, replacing any stale tile for
    /// the same block. The texture is uploaded lazily on next render.
    pub(crate) fn place_tile(&mut self, handler: &TileLoadHandler, image: TileImage) {
        self.blocks.insert(
            handler.block_index,
            TileBlock {
                width_bp: handler.width_bp,
                image,
                texture: None,
            },
        );
    }

    /// Move the visible window. Blocks outside the new window are kept
    /// until the next `load_success` sweep so panning back is cheap.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    /// Drop blocks not overlapping `region` immediately.
    pub fn prune_outside(&mut self, region: Region) {
        let span = self.block_span_bp;
        self.blocks
            .retain(|idx, _| region.overlaps(*idx as f64 * span, span));
    }
}
