//! wiggleview crate root: re-exports and module wiring.
//!
//! A tiled-image track viewer for quantitative ("wiggle") genomic
//! signal, built on egui/eframe:
//! - `store`: tile/metadata types and the channel feeding the UI
//! - `track`: the base tiled-image track (blocks, layout, load handlers)
//! - `yscale`: the scale-bar capability trait and tick construction
//! - `wiggle`: the wiggle track — base track plus a lazily built scale bar
//! - `ui`: egui rendering of the track canvas and scale-bar overlay
//! - `app`: eframe shell and run helpers
//! - `persistence`: JSON view-state snapshots

pub mod app;
pub mod config;
pub mod persistence;
pub mod pos_format;
pub mod store;
pub mod track;
pub mod ui;
pub mod wiggle;
pub mod yscale;

#[cfg(feature = "tiles")]
pub mod multitrack;

// Public re-exports for a compact external API
pub use app::{run, run_with_config, TrackApp};
pub use config::{TrackConfig, TrackFeatures};
pub use pos_format::{PosFormatter, PosUnit};
pub use store::{channel_tiles, SignalStats, SignalStore, StatsCell, TileCommand, TileImage, TileSink};
pub use track::{ComposeCallback, ImageTrack, LayoutCoords, Region, TileLoadHandler};
pub use wiggle::WiggleImageTrack;
pub use yscale::{ScaleBar, ScaleTick, YScale};
