//! Stacked multi-track view built on `egui_tiles`.
//!
//! Genome browsers stack tracks vertically over a single shared region
//! (coverage above conservation above methylation, all showing the
//! same window), so the layout here is a one-column stack and the
//! region is synchronized across panes: [`set_shared_region`] moves
//! every track and immediately prunes tiles that fell out of view.

use crate::app::TrackApp;
use crate::track::Region;
use eframe::egui;
use egui_tiles::{Behavior, Container, ContainerKind, TileId, Tiles, Tree, UiResponse};

/// One pane in the stack: a labelled track.
pub struct TrackTile {
    label: String,
    app: TrackApp,
}

impl TrackTile {
    pub fn new(label: impl Into<String>, app: TrackApp) -> Self {
        Self {
            label: label.into(),
            app,
        }
    }

    /// Pane title shown in the tab bar.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Mutable access to the embedded track for configuration after construction.
    pub fn app_mut(&mut self) -> &mut TrackApp {
        &mut self.app
    }

    /// Render the pane: label and region readout, then the track itself.
    pub fn ui(&mut self, ui: &mut egui::Ui, tile_id: TileId, id_prefix: &str) {
        let region = self.app.track().base().region();
        let span = region.span_bp();
        ui.horizontal(|ui| {
            ui.strong(&self.label);
            ui.weak(format!(
                "{} – {}",
                self.app.config().pos_formatter.format_value(region.start_bp, span),
                self.app.config().pos_formatter.format_value(region.end_bp, span),
            ));
        });
        ui.add_space(2.0);
        let plot_id = format!("{}-{:?}", id_prefix, tile_id);
        self.app.ui_embed(ui, &plot_id);
    }
}

/// Move every track in the stack to the same region.
///
/// Tiles outside the new window are dropped right away rather than
/// waiting for each track's next `load_success` sweep, so a jump to a
/// distant locus frees stale textures immediately.
pub fn set_shared_region(panes: &mut [TrackTile], region: Region) {
    for pane in panes.iter_mut() {
        let track = pane.app.track_mut().base_mut();
        track.set_region(region);
        track.prune_outside(region);
    }
}

/// Identifier stored inside an `egui_tiles::Tree`, referencing a pane by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrackPaneRef {
    pub index: usize,
}

/// Build a vertical stack of `pane_count` tracks.
pub fn build_track_stack(tree_id: &'static str, pane_count: usize) -> Tree<TrackPaneRef> {
    if pane_count == 0 {
        return Tree::empty(tree_id);
    }
    let mut tiles: Tiles<TrackPaneRef> = Tiles::default();
    let pane_ids: Vec<_> = (0..pane_count)
        .map(|index| tiles.insert_pane(TrackPaneRef { index }))
        .collect();
    let root = tiles.insert_container(Container::new(ContainerKind::Vertical, pane_ids));
    Tree::new(tree_id, root, tiles)
}

/// Render the stack, sized to the available region.
pub fn render_track_stack(
    ui: &mut egui::Ui,
    tree: &mut Tree<TrackPaneRef>,
    panes: &mut [TrackTile],
    plot_id_prefix: &str,
) {
    let desired = ui.available_size();
    if desired.min_elem() <= 0.0 {
        ui.label("Expand the window to see the tracks.");
        return;
    }
    tree.set_width(desired.x);
    tree.set_height(desired.y);
    let mut behavior = TrackStackBehavior {
        panes,
        plot_id_prefix,
    };
    tree.ui(&mut behavior, ui);
}

struct TrackStackBehavior<'a> {
    panes: &'a mut [TrackTile],
    plot_id_prefix: &'a str,
}

impl<'a> Behavior<TrackPaneRef> for TrackStackBehavior<'a> {
    fn tab_title_for_pane(&mut self, pane: &TrackPaneRef) -> egui::WidgetText {
        match self.panes.get(pane.index) {
            Some(tile) => tile.label().into(),
            None => format!("Track {}", pane.index + 1).into(),
        }
    }

    fn pane_ui(
        &mut self,
        ui: &mut egui::Ui,
        tile_id: TileId,
        pane: &mut TrackPaneRef,
    ) -> UiResponse {
        match self.panes.get_mut(pane.index) {
            Some(tile) => tile.ui(ui, tile_id, self.plot_id_prefix),
            None => {
                ui.colored_label(egui::Color32::LIGHT_RED, "Missing track pane");
            }
        }
        UiResponse::None
    }
}
