//! egui rendering for wiggle image tracks.
//!
//! The track canvas is an `egui_plot` plot whose X axis is genomic
//! position; each loaded block is drawn as a [`egui_plot::PlotImage`]
//! spanning its genomic extent. Y tick labels are suppressed — the
//! floating scale bar painted on top replaces them, positioned by the
//! track's stored horizontal layout offset.

use egui::{Align2, Color32, FontId, Stroke};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::config::TrackConfig;
use crate::track::LayoutCoords;
use crate::wiggle::WiggleImageTrack;

/// Render the track into the current UI, returning the plot response.
///
/// Also issues the per-frame layout update with the plot rect's left
/// edge, which keeps the scale bar's position in sync with the track.
pub fn render_track(
    ui: &mut egui::Ui,
    track: &mut WiggleImageTrack,
    config: &TrackConfig,
    plot_id: &str,
) -> egui::Response {
    upload_textures(ui.ctx(), track, plot_id);

    let region = track.base().region();
    let span = region.span_bp();
    let formatter = config.pos_formatter;
    let show_x = config.features.x_tick_labels;

    let plot = Plot::new(plot_id.to_owned())
        .height(config.height_px)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .show_axes([show_x, false])
        .show_grid([config.features.grid, false])
        .show_background(false)
        .x_axis_formatter(move |x, _range| formatter.format_value(x.value, span));

    let block_data: Vec<(f64, f64, egui::TextureId)> = track
        .base()
        .blocks()
        .filter_map(|(idx, block)| {
            let start = track.base().block_start_bp(*idx);
            if !region.overlaps(start, block.width_bp) {
                return None;
            }
            block
                .texture
                .as_ref()
                .map(|tex| (start, block.width_bp, tex.id()))
        })
        .collect();

    let outlines = config.features.block_outlines;
    // the plot's own background is disabled above; the frame supplies
    // the configured track background instead
    let frame = egui::Frame::new().fill(config.background);
    let inner = frame
        .show(ui, |frame_ui| {
            plot.show(frame_ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(region.start_bp..=region.end_bp);
                plot_ui.set_plot_bounds_y(0.0..=1.0);
                for (start, width_bp, tex_id) in &block_data {
                    let center = PlotPoint::new(start + width_bp * 0.5, 0.5);
                    let image =
                        PlotImage::new("tile", *tex_id, center, egui::vec2(*width_bp as f32, 1.0));
                    plot_ui.image(image);
                    if outlines {
                        let pts = vec![
                            [*start, 0.0],
                            [*start + *width_bp, 0.0],
                            [*start + *width_bp, 1.0],
                            [*start, 1.0],
                            [*start, 0.0],
                        ];
                        plot_ui.line(
                            egui_plot::Line::new("outline", pts)
                                .color(Color32::from_gray(90))
                                .width(0.5),
                        );
                    }
                }
            })
        })
        .inner;

    let rect = inner.response.rect;
    track.update_static_elements(&LayoutCoords::x(rect.left()));

    if config.features.scale_bar {
        paint_scale_bar(ui, track, config, rect);
    }

    inner.response
}

/// Upload any block pixels that do not have a texture yet.
fn upload_textures(ctx: &egui::Context, track: &mut WiggleImageTrack, plot_id: &str) {
    for (idx, block) in track.base_mut().blocks_mut() {
        if block.texture.is_some() {
            continue;
        }
        let size = [block.image.width as usize, block.image.height as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &block.image.rgba);
        let handle = ctx.load_texture(
            format!("{}-tile-{}", plot_id, idx),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        block.texture = Some(handle);
    }
}

/// Paint the floating scale bar over the track rect.
///
/// Nothing is drawn while the scale bar has not been constructed yet
/// (metadata still pending).
fn paint_scale_bar(
    ui: &egui::Ui,
    track: &WiggleImageTrack,
    config: &TrackConfig,
    rect: egui::Rect,
) {
    let Some(scale) = track.yscale() else {
        return;
    };
    let left = scale.left.unwrap_or(rect.left());
    let width = config.scale_bar_width_px;
    let bar_rect = egui::Rect::from_min_max(
        egui::pos2(left, rect.top()),
        egui::pos2(left + width, rect.bottom()),
    );

    let painter = ui.painter_at(rect);
    painter.rect_filled(bar_rect, 0.0, Color32::from_black_alpha(140));

    let baseline_x = bar_rect.right();
    let line_stroke = Stroke::new(1.0, Color32::from_gray(200));
    painter.line_segment(
        [
            egui::pos2(baseline_x, bar_rect.top()),
            egui::pos2(baseline_x, bar_rect.bottom()),
        ],
        line_stroke,
    );

    let font = FontId::monospace(10.0);
    for tick in &scale.ticks {
        let y = bar_rect.top() + tick.norm * bar_rect.height();
        painter.line_segment(
            [egui::pos2(baseline_x - 4.0, y), egui::pos2(baseline_x, y)],
            line_stroke,
        );
        painter.text(
            egui::pos2(baseline_x - 6.0, y),
            Align2::RIGHT_CENTER,
            &tick.label,
            font.clone(),
            Color32::from_gray(220),
        );
    }
}
