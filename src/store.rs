//! Data store types and channels for feeding tiles into the track UI.
//!
//! Tiles arrive pre-rendered (the store does not rasterize anything):
//! - Create a channel pair with [`channel_tiles`].
//! - The producer side sends [`TileCommand`]s through a cloneable
//!   [`TileSink`]: dataset metadata once known, then one `Tile` per
//!   rendered block.
//! - The UI thread drains the receiver each frame and hands finished
//!   tiles to the track's load handlers.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Dataset-wide summary statistics used to calibrate the scale bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalStats {
    pub global_min: f64,
    pub global_max: f64,
}

/// A decoded tile image: tightly packed RGBA8 pixels.
#[derive(Debug, Clone)]
pub struct TileImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TileImage {
    /// Wrap an already-decoded RGBA8 buffer.
    ///
    /// Fails if the buffer length does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, String> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(format!(
                "RGBA buffer length {} does not match {}x{} ({} bytes expected)",
                rgba.len(),
                width,
                height,
                expected
            ));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Decode a PNG payload into RGBA8 pixels.
    pub fn from_png(bytes: &[u8]) -> Result<Self, String> {
        let img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
            .map_err(|e| format!("Failed to decode tile PNG: {e}"))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }
}

/// Messages sent over the channel to drive the track UI.
pub enum TileCommand {
    /// Dataset metadata (global min/max) is now known.
    Metadata(SignalStats),
    /// A rendered tile for the given block is ready.
    Tile {
        block_index: usize,
        width_bp: f64,
        image: TileImage,
    },
}

/// Convenience sender for feeding tiles and metadata into the track.
#[derive(Clone)]
pub struct TileSink {
    tx: Sender<TileCommand>,
}

impl TileSink {
    /// Announce dataset metadata. May be sent at any time, including
    /// after tiles; the scale bar picks it up on the next tile load.
    pub fn send_metadata(
        &self,
        stats: SignalStats,
    ) -> Result<(), std::sync::mpsc::SendError<TileCommand>> {
        self.tx.send(TileCommand::Metadata(stats))
    }

    /// Send a decoded tile for a block.
    pub fn send_tile(
        &self,
        block_index: usize,
        width_bp: f64,
        image: TileImage,
    ) -> Result<(), std::sync::mpsc::SendError<TileCommand>> {
        self.tx.send(TileCommand::Tile {
            block_index,
            width_bp,
            image,
        })
    }

    /// Decode a PNG payload and send it as a tile for a block.
    ///
    /// Decoding failures are reported to the caller; nothing is sent.
    pub fn send_tile_png(
        &self,
        block_index: usize,
        width_bp: f64,
        png: &[u8],
    ) -> Result<(), String> {
        let image = TileImage::from_png(png)?;
        self.tx
            .send(TileCommand::Tile {
                block_index,
                width_bp,
                image,
            })
            .map_err(|e| e.to_string())
    }
}

/// Create a new channel pair for tile delivery: `(TileSink, Receiver<TileCommand>)`.
pub fn channel_tiles() -> (TileSink, Receiver<TileCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (TileSink { tx }, rx)
}

/// Metadata query interface exposed by a data store.
///
/// `global_stats` returns `None` while metadata has not been loaded;
/// callers treat that as a normal "not ready yet" condition.
pub trait SignalStore {
    fn global_stats(&self) -> Option<SignalStats>;
}

/// Shared mutable stats slot; the usual [`SignalStore`] implementation.
///
/// The UI loop publishes drained [`TileCommand::Metadata`] messages here.
/// Last write wins; reads are point-in-time snapshots.
#[derive(Clone, Default)]
pub struct StatsCell {
    inner: Arc<Mutex<Option<SignalStats>>>,
}

impl StatsCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish (or replace) the dataset statistics.
    pub fn set_stats(&self, stats: SignalStats) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = Some(stats);
        }
    }

    /// Clear the slot; subsequent queries return `None` again.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = None;
        }
    }
}

impl SignalStore for StatsCell {
    fn global_stats(&self) -> Option<SignalStats> {
        self.inner.lock().ok().and_then(|slot| *slot)
    }
}
