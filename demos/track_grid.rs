//! Demo: stacked multi-track view (requires the `tiles` feature, on by default)
//!
//! Two synthetic signal tracks stacked over the same region, each with
//! its own unit and metadata timing. Buttons jump the shared region to
//! demonstrate cross-track synchronization.
//!
//! How to run
//! ```bash
//! cargo run --example track_grid
//! ```

use std::time::Duration;

use wiggleview::multitrack::{
    build_track_stack, render_track_stack, set_shared_region, TrackPaneRef, TrackTile,
};
use wiggleview::{channel_tiles, Region, SignalStats, TileImage, TrackApp, TrackConfig};

const TILE_W: u32 = 256;
const TILE_H: u32 = 72;
const TILE_SPAN_BP: f64 = 25_000.0;

fn render_tile(block_index: usize, phase: f64, color: [u8; 3]) -> TileImage {
    let mut rgba = vec![0u8; (TILE_W * TILE_H * 4) as usize];
    for x in 0..TILE_W {
        let t = (block_index as f64 + x as f64 / TILE_W as f64) * std::f64::consts::TAU;
        let level = 0.5 + 0.45 * (t * 0.7 + phase).sin();
        let bar_h = (level * TILE_H as f64) as u32;
        for y in 0..TILE_H {
            let idx = ((y * TILE_W + x) * 4) as usize;
            if TILE_H - y <= bar_h {
                rgba[idx] = color[0];
                rgba[idx + 1] = color[1];
                rgba[idx + 2] = color[2];
                rgba[idx + 3] = 255;
            }
        }
    }
    TileImage::from_rgba(TILE_W, TILE_H, rgba).expect("buffer sized above")
}

fn spawn_producer(
    phase: f64,
    color: [u8; 3],
    stats: SignalStats,
    meta_delay_ms: u64,
) -> std::sync::mpsc::Receiver<wiggleview::TileCommand> {
    let (sink, rx) = channel_tiles();
    std::thread::spawn(move || {
        for block in 0..8usize {
            let _ = sink.send_tile(block, TILE_SPAN_BP, render_tile(block, phase, color));
            std::thread::sleep(Duration::from_millis(250));
        }
        std::thread::sleep(Duration::from_millis(meta_delay_ms));
        let _ = sink.send_metadata(stats);
        // one more tile so the scale bar attempt sees the metadata
        let _ = sink.send_tile(8, TILE_SPAN_BP, render_tile(8, phase, color));
    });
    rx
}

struct StackApp {
    tree: egui_tiles::Tree<TrackPaneRef>,
    panes: Vec<TrackTile>,
}

impl eframe::App for StackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Jump to:");
                if ui.button("0 – 125 kb").clicked() {
                    set_shared_region(&mut self.panes, Region::new(0.0, 5.0 * TILE_SPAN_BP));
                }
                if ui.button("100 – 225 kb").clicked() {
                    set_shared_region(
                        &mut self.panes,
                        Region::new(4.0 * TILE_SPAN_BP, 9.0 * TILE_SPAN_BP),
                    );
                }
            });
            ui.separator();
            render_track_stack(ui, &mut self.tree, &mut self.panes, "stack");
        });
        ctx.request_repaint_after(Duration::from_millis(50));
    }
}

fn main() -> eframe::Result<()> {
    let region = Region::new(0.0, 5.0 * TILE_SPAN_BP);

    let rx_a = spawn_producer(
        0.0,
        [90, 160, 220],
        SignalStats { global_min: 0.0, global_max: 60.0 },
        500,
    );
    let rx_b = spawn_producer(
        1.3,
        [220, 140, 90],
        SignalStats { global_min: -1.0, global_max: 1.0 },
        1500,
    );

    let mut cfg_a = TrackConfig::default();
    cfg_a.y_unit = Some("x cov".to_string());
    let mut cfg_b = TrackConfig::default();
    cfg_b.y_unit = Some("phyloP".to_string());

    let panes = vec![
        TrackTile::new(
            "Coverage",
            TrackApp::new(region, TILE_SPAN_BP, rx_a).with_config(cfg_a),
        ),
        TrackTile::new(
            "Conservation",
            TrackApp::new(region, TILE_SPAN_BP, rx_b).with_config(cfg_b),
        ),
    ];
    let tree = build_track_stack("track_stack", panes.len());

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 640.0)),
        ..Default::default()
    };
    eframe::run_native(
        "wiggleview — track stack",
        opts,
        Box::new(|_cc| Ok(Box::new(StackApp { tree, panes }))),
    )
}
