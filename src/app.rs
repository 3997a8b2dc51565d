//! eframe shell around a wiggle image track.
//!
//! [`TrackApp`] owns the track, the stats cell the track's store reads
//! from, and the tile command receiver. All command processing happens
//! on the UI thread, once per frame, so tile completion and scale-bar
//! construction never race.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use crate::config::TrackConfig;
use crate::store::{StatsCell, TileCommand};
use crate::track::Region;
use crate::ui::render_track;
use crate::wiggle::WiggleImageTrack;

pub struct TrackApp {
    track: WiggleImageTrack,
    stats: StatsCell,
    rx: Receiver<TileCommand>,
    config: TrackConfig,
    title: String,
}

impl TrackApp {
    /// Build an app around a fresh track viewing `region`.
    ///
    /// The returned app owns the [`StatsCell`] the track queries; drained
    /// `Metadata` commands are published into it.
    pub fn new(region: Region, block_span_bp: f64, rx: Receiver<TileCommand>) -> Self {
        let stats = StatsCell::new();
        let track = WiggleImageTrack::new(region, block_span_bp, Arc::new(stats.clone()));
        Self {
            track,
            stats,
            rx,
            config: TrackConfig::default(),
            title: "wiggleview".to_string(),
        }
    }

    pub fn with_config(mut self, config: TrackConfig) -> Self {
        self.track.set_unit(config.y_unit.clone());
        self.track.set_tick_target(config.scale_ticks);
        self.config = config;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn track(&self) -> &WiggleImageTrack {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut WiggleImageTrack {
        &mut self.track
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    pub fn stats(&self) -> &StatsCell {
        &self.stats
    }

    /// Pump the tile channel: metadata goes into the stats cell, tiles
    /// run through the track's load-handler pipeline.
    pub fn drain_commands(&mut self) {
        let mut pending = Vec::new();
        while let Ok(cmd) = self.rx.try_recv() {
            pending.push(cmd);
        }
        for cmd in pending {
            match cmd {
                TileCommand::Metadata(stats) => self.stats.set_stats(stats),
                TileCommand::Tile {
                    block_index,
                    width_bp,
                    image,
                } => {
                    let handler = self
                        .track
                        .make_image_load_handler(block_index, width_bp, None);
                    self.track.complete_load(handler, image);
                }
            }
        }
    }

    /// Render the track into an arbitrary UI (embedded use).
    pub fn ui_embed(&mut self, ui: &mut egui::Ui, plot_id: &str) {
        self.drain_commands();
        render_track(ui, &mut self.track, &self.config, plot_id);
    }
}

impl eframe::App for TrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_commands();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.title);
            ui.add_space(4.0);
            render_track(ui, &mut self.track, &self.config, "wiggle_track");
        });
        // keep draining even when no input events arrive
        ctx.request_repaint_after(std::time::Duration::from_millis(50));
    }
}

/// Launch a track viewer in a native window. Blocks until closed.
pub fn run(
    title: &str,
    region: Region,
    block_span_bp: f64,
    rx: Receiver<TileCommand>,
) -> eframe::Result<()> {
    run_with_config(title, region, block_span_bp, rx, TrackConfig::default())
}

/// Launch with an explicit [`TrackConfig`].
pub fn run_with_config(
    title: &str,
    region: Region,
    block_span_bp: f64,
    rx: Receiver<TileCommand>,
    config: TrackConfig,
) -> eframe::Result<()> {
    let app = TrackApp::new(region, block_span_bp, rx)
        .with_config(config)
        .with_title(title);
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 320.0)),
        ..Default::default()
    };
    eframe::run_native(title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
