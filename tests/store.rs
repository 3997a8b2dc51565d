//! Channel delivery and metadata store behaviour.

use wiggleview::{channel_tiles, SignalStats, SignalStore, StatsCell, TileCommand, TileImage};

#[test]
fn stats_cell_starts_empty_and_updates() {
    let cell = StatsCell::new();
    assert!(cell.global_stats().is_none(), "fresh cell has no metadata");

    cell.set_stats(SignalStats {
        global_min: -2.0,
        global_max: 8.0,
    });
    let stats = cell.global_stats().expect("metadata should be readable");
    assert_eq!(stats.global_min, -2.0);
    assert_eq!(stats.global_max, 8.0);

    // last write wins
    cell.set_stats(SignalStats {
        global_min: 0.0,
        global_max: 1.0,
    });
    assert_eq!(cell.global_stats().unwrap().global_max, 1.0);

    cell.clear();
    assert!(cell.global_stats().is_none(), "clear should empty the slot");
}

#[test]
fn clones_share_the_same_slot() {
    let a = StatsCell::new();
    let b = a.clone();
    a.set_stats(SignalStats {
        global_min: 1.0,
        global_max: 2.0,
    });
    assert!(
        b.global_stats().is_some(),
        "clones must observe writes through either handle"
    );
}

#[test]
fn channel_delivers_metadata_then_tiles_in_order() {
    let (sink, rx) = channel_tiles();
    sink.send_metadata(SignalStats {
        global_min: 0.0,
        global_max: 9.0,
    })
    .expect("receiver alive");
    let image = TileImage::from_rgba(1, 1, vec![255, 0, 0, 255]).unwrap();
    sink.send_tile(3, 10_000.0, image).expect("receiver alive");

    match rx.recv().unwrap() {
        TileCommand::Metadata(s) => assert_eq!(s.global_max, 9.0),
        _ => panic!("expected metadata first"),
    }
    match rx.recv().unwrap() {
        TileCommand::Tile {
            block_index,
            width_bp,
            image,
        } => {
            assert_eq!(block_index, 3);
            assert_eq!(width_bp, 10_000.0);
            assert_eq!((image.width, image.height), (1, 1));
        }
        _ => panic!("expected the tile second"),
    }
}

#[test]
fn from_rgba_rejects_mismatched_buffers() {
    let err = TileImage::from_rgba(2, 2, vec![0u8; 15]).unwrap_err();
    assert!(
        err.contains("16 bytes expected"),
        "error should name the expected size, got: {err}"
    );
}

#[test]
fn from_png_rejects_garbage() {
    assert!(
        TileImage::from_png(b"definitely not a png").is_err(),
        "non-PNG bytes must not decode"
    );
}

#[test]
fn send_tile_png_propagates_decode_errors() {
    let (sink, _rx) = channel_tiles();
    assert!(
        sink.send_tile_png(0, 1_000.0, b"nope").is_err(),
        "bad payloads should be reported, not silently dropped"
    );
}
