//! Demo: Synthetic coverage track
//!
//! What it demonstrates
//! - Feeding pre-rendered tiles into the track UI using `channel_tiles()`
//!   and `TileSink`.
//! - Metadata arriving *after* the first tiles: the scale bar only
//!   appears once a tile load observes the global min/max.
//!
//! How to run
//! ```bash
//! cargo run --example coverage_track
//! ```
//! The first two tiles render without a scale bar; once metadata is sent
//! (after ~1.5 s) the next tile load constructs it.

use std::time::Duration;

use wiggleview::{channel_tiles, Region, SignalStats, TileImage, TrackConfig};

const TILE_W: u32 = 256;
const TILE_H: u32 = 96;
const TILE_SPAN_BP: f64 = 10_000.0;

/// Rasterize a fake coverage profile into an RGBA tile. Column height
/// tracks a smoothed pseudo-random signal seeded by the block index.
fn render_tile(block_index: usize, max_cov: f64) -> TileImage {
    let mut rgba = vec![0u8; (TILE_W * TILE_H * 4) as usize];
    let mut state = (block_index as u64).wrapping_mul(6364136223846793005).wrapping_add(1);
    let mut level = 0.5;
    for x in 0..TILE_W {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let r = ((state >> 33) as f64) / (u32::MAX as f64 * 2.0);
        level = (level * 0.95 + r * 0.05).clamp(0.05, 1.0);
        let cov = level * max_cov;
        let bar_h = ((cov / max_cov) * TILE_H as f64) as u32;
        for y in 0..TILE_H {
            let idx = ((y * TILE_W + x) * 4) as usize;
            let filled = TILE_H - y <= bar_h;
            if filled {
                rgba[idx] = 90;
                rgba[idx + 1] = 160;
                rgba[idx + 2] = 220;
                rgba[idx + 3] = 255;
            } else {
                rgba[idx + 3] = 0;
            }
        }
    }
    TileImage::from_rgba(TILE_W, TILE_H, rgba).expect("buffer sized above")
}

fn main() -> eframe::Result<()> {
    let (sink, rx) = channel_tiles();

    const MAX_COV: f64 = 48.0;
    std::thread::spawn(move || {
        // two tiles before metadata exists: no scale bar yet
        for block in 0..2usize {
            let _ = sink.send_tile(block, TILE_SPAN_BP, render_tile(block, MAX_COV));
            std::thread::sleep(Duration::from_millis(400));
        }
        std::thread::sleep(Duration::from_millis(700));
        let _ = sink.send_metadata(SignalStats {
            global_min: 0.0,
            global_max: MAX_COV,
        });
        // remaining tiles; the first of these triggers scale construction
        for block in 2..6usize {
            let _ = sink.send_tile(block, TILE_SPAN_BP, render_tile(block, MAX_COV));
            std::thread::sleep(Duration::from_millis(400));
        }
    });

    let mut config = TrackConfig::default();
    config.y_unit = Some("x cov".to_string());
    wiggleview::run_with_config(
        "Coverage track",
        Region::new(0.0, 6.0 * TILE_SPAN_BP),
        TILE_SPAN_BP,
        rx,
        config,
    )
}
