//! Headless rendering checks for the track canvas.

use std::sync::Arc;

use wiggleview::ui::render_track;
use wiggleview::{Region, StatsCell, TrackConfig, WiggleImageTrack};

fn run_frame(track: &mut WiggleImageTrack, config: &TrackConfig) -> egui::FullOutput {
    let ctx = egui::Context::default();
    let mut input = egui::RawInput::default();
    input.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(800.0, 300.0),
    ));
    ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            render_track(ui, track, config, "render_test");
        });
    })
}

fn shape_has_fill(shape: &egui::Shape, color: egui::Color32) -> bool {
    match shape {
        egui::Shape::Rect(r) => r.fill == color,
        egui::Shape::Vec(shapes) => shapes.iter().any(|s| shape_has_fill(s, color)),
        _ => false,
    }
}

#[test]
fn configured_background_is_painted() {
    // a color nothing else in the default theme uses
    let bg = egui::Color32::from_rgb(7, 13, 29);
    let mut config = TrackConfig::default();
    config.background = bg;
    let mut track = WiggleImageTrack::new(
        Region::new(0.0, 10_000.0),
        10_000.0,
        Arc::new(StatsCell::new()),
    );

    let output = run_frame(&mut track, &config);
    let painted = output
        .shapes
        .iter()
        .any(|clipped| shape_has_fill(&clipped.shape, bg));
    assert!(painted, "the configured track background must reach the paint list");
}

#[test]
fn rendering_issues_the_layout_update() {
    let config = TrackConfig::default();
    let mut track = WiggleImageTrack::new(
        Region::new(0.0, 10_000.0),
        10_000.0,
        Arc::new(StatsCell::new()),
    );
    assert!(track.base().left_offset().is_none());

    run_frame(&mut track, &config);
    assert!(
        track.base().left_offset().is_some(),
        "each rendered frame should record the track's horizontal offset"
    );
}
