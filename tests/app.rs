//! Command-channel plumbing between a producer and the track app.

use std::sync::mpsc::channel;

use wiggleview::{
    Region, SignalStats, SignalStore, TileCommand, TileImage, TrackApp,
};

fn tile_image() -> TileImage {
    TileImage::from_rgba(2, 2, vec![0u8; 16]).expect("valid 2x2 buffer")
}

#[test]
fn drained_commands_feed_stats_and_tiles() {
    let (tx, rx) = channel();
    let mut app = TrackApp::new(Region::new(0.0, 40_000.0), 10_000.0, rx);

    let stats = SignalStats {
        global_min: 0.0,
        global_max: 12.0,
    };
    tx.send(TileCommand::Metadata(stats)).unwrap();
    tx.send(TileCommand::Tile {
        block_index: 0,
        width_bp: 10_000.0,
        image: tile_image(),
    })
    .unwrap();

    app.drain_commands();
    assert_eq!(app.stats().global_stats(), Some(stats));
    assert_eq!(app.track().base().block_count(), 1);
    assert!(
        app.track().yscale().is_some(),
        "metadata drained before the tile lets the load build the scale bar"
    );
}

#[test]
fn drain_survives_a_hung_up_producer() {
    let (tx, rx) = channel::<TileCommand>();
    let mut app = TrackApp::new(Region::new(0.0, 40_000.0), 10_000.0, rx);
    drop(tx);

    app.drain_commands();
    app.drain_commands();
    assert_eq!(app.track().base().block_count(), 0);
    assert!(app.stats().global_stats().is_none());
}
