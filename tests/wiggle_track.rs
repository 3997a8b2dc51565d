//! Lifecycle tests for the wiggle image track: layout sync, lazy
//! scale-bar construction, and compose-callback ordering.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use wiggleview::{
    LayoutCoords, Region, SignalStats, StatsCell, TileImage, WiggleImageTrack,
};

fn tile() -> TileImage {
    TileImage::from_rgba(2, 2, vec![0u8; 16]).expect("valid 2x2 buffer")
}

fn track_with_cell() -> (WiggleImageTrack, StatsCell) {
    let stats = StatsCell::new();
    let track = WiggleImageTrack::new(Region::new(0.0, 40_000.0), 10_000.0, Arc::new(stats.clone()));
    (track, stats)
}

#[test]
fn layout_update_stores_offset_without_scale_bar() {
    let (mut track, _stats) = track_with_cell();
    track.update_static_elements(&LayoutCoords::x(42.0));
    assert_eq!(
        track.base().left_offset(),
        Some(42.0),
        "horizontal offset should be recorded even before the scale bar exists"
    );
    assert!(
        track.yscale().is_none(),
        "a layout update must not create a scale bar as a side effect"
    );
}

#[test]
fn layout_update_without_x_is_a_no_op() {
    let (mut track, _stats) = track_with_cell();
    track.update_static_elements(&LayoutCoords::x(10.0));
    track.update_static_elements(&LayoutCoords::default());
    assert_eq!(
        track.base().left_offset(),
        Some(10.0),
        "a coords update without x should leave the stored offset untouched"
    );
}

#[test]
fn construction_without_metadata_changes_nothing() {
    let (mut track, _stats) = track_with_cell();
    track.make_wiggle_yscale();
    assert!(track.min().is_none(), "min must stay unset without metadata");
    assert!(track.max().is_none(), "max must stay unset without metadata");
    assert!(track.yscale().is_none(), "no scale bar without metadata");
}

#[test]
fn construction_with_metadata_builds_once() {
    let (mut track, stats) = track_with_cell();
    stats.set_stats(SignalStats {
        global_min: 0.0,
        global_max: 100.0,
    });
    track.make_wiggle_yscale();
    assert_eq!(track.min(), Some(0.0));
    assert_eq!(track.max(), Some(100.0));
    let scale = track.yscale().expect("scale bar should exist").clone();
    assert_eq!(scale.min, 0.0);
    assert_eq!(scale.max, 100.0);
    assert!(!scale.ticks.is_empty(), "a non-degenerate range yields ticks");

    // later metadata changes must not rebuild or mutate the bar
    stats.set_stats(SignalStats {
        global_min: -1.0,
        global_max: 1.0,
    });
    track.make_wiggle_yscale();
    assert_eq!(track.min(), Some(0.0), "min is frozen once the bar is built");
    assert_eq!(track.max(), Some(100.0), "max is frozen once the bar is built");
    assert_eq!(track.yscale(), Some(&scale), "the bar itself is untouched");
}

#[test]
fn tile_load_defers_scale_until_metadata_arrives() {
    let (mut track, stats) = track_with_cell();

    // first tile: metadata unavailable, bar silently skipped
    let handler = track.make_image_load_handler(0, 10_000.0, None);
    track.complete_load(handler, tile());
    assert_eq!(track.base().block_count(), 1, "tile should still be placed");
    assert!(track.yscale().is_none(), "no metadata, no scale bar");

    // metadata arrives, second tile triggers construction
    stats.set_stats(SignalStats {
        global_min: -5.0,
        global_max: 5.0,
    });
    let handler = track.make_image_load_handler(1, 10_000.0, None);
    track.complete_load(handler, tile());
    let scale = track.yscale().expect("second load should build the bar");
    assert_eq!(scale.min, -5.0);
    assert_eq!(scale.max, 5.0);

    // subsequent layout update restyles the bar's left position
    track.update_static_elements(&LayoutCoords::x(120.0));
    assert_eq!(
        track.yscale().and_then(|s| s.left),
        Some(120.0),
        "layout updates after construction must move the bar"
    );
}

#[test]
fn compose_callback_fires_exactly_once_per_load() {
    let (mut track, stats) = track_with_cell();

    // without metadata: construction fails silently, callback still fires
    let calls = Rc::new(Cell::new(0u32));
    let c = calls.clone();
    let handler = track.make_image_load_handler(0, 10_000.0, Some(Box::new(move || {
        c.set(c.get() + 1);
    })));
    track.complete_load(handler, tile());
    assert_eq!(calls.get(), 1, "callback fires even when construction is skipped");

    // with metadata: construction succeeds, callback still fires once
    stats.set_stats(SignalStats {
        global_min: 0.0,
        global_max: 10.0,
    });
    let c = calls.clone();
    let handler = track.make_image_load_handler(1, 10_000.0, Some(Box::new(move || {
        c.set(c.get() + 1);
    })));
    track.complete_load(handler, tile());
    assert_eq!(calls.get(), 2, "callback fires once per tile load");
    assert!(track.yscale().is_some());
}

#[test]
fn scale_bar_seeds_left_from_stored_offset() {
    let (mut track, stats) = track_with_cell();
    track.update_static_elements(&LayoutCoords::x(77.0));
    stats.set_stats(SignalStats {
        global_min: 0.0,
        global_max: 1.0,
    });
    let handler = track.make_image_load_handler(0, 10_000.0, None);
    track.complete_load(handler, tile());
    assert_eq!(
        track.yscale().and_then(|s| s.left),
        Some(77.0),
        "a bar built after a layout update starts at the stored offset"
    );
}

#[test]
fn prune_after_region_change_drops_stale_blocks() {
    let (mut track, _stats) = track_with_cell();
    for block_index in 0..4 {
        let handler = track.make_image_load_handler(block_index, 10_000.0, None);
        track.complete_load(handler, tile());
    }
    assert_eq!(track.base().block_count(), 4);

    // jump to 90..130 kbp; only block 9 would overlap, and it was never loaded
    let distant = Region::new(90_000.0, 130_000.0);
    track.base_mut().set_region(distant);
    track.base_mut().prune_outside(distant);
    assert_eq!(
        track.base().block_count(),
        0,
        "pruning right after a region change must not wait for load_success"
    );

    // a partially overlapping window keeps the straddling block
    for block_index in [9, 12, 13] {
        let handler = track.make_image_load_handler(block_index, 10_000.0, None);
        track.complete_load(handler, tile());
    }
    let narrow = Region::new(95_000.0, 105_000.0);
    track.base_mut().set_region(narrow);
    track.base_mut().prune_outside(narrow);
    assert_eq!(track.base().block_count(), 1);
    assert!(
        track.base().block(9).is_some(),
        "a block straddling the region edge survives the prune"
    );
}

#[test]
fn load_success_marks_loaded_and_prunes() {
    let (mut track, _stats) = track_with_cell();
    let handler = track.make_image_load_handler(0, 10_000.0, None);
    track.complete_load(handler, tile());
    // block 9 starts at 90 kbp, outside the 0..40 kbp region
    let handler = track.make_image_load_handler(9, 10_000.0, None);
    track.complete_load(handler, tile());
    assert_eq!(track.base().block_count(), 2);

    track.load_success();
    assert!(track.base().is_loaded());
    assert_eq!(
        track.base().block_count(),
        1,
        "load_success should drop blocks outside the visible region"
    );
    assert!(track.base().block(0).is_some());
}
