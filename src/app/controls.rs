use std::collections::BTreeSet;

use eframe::egui::{Color32, RichText, Ui};

use super::ViewModel;
use super::graph::kind_color;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.add_space(4.0);
        ui.heading("View");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button("\u{2212}").on_hover_text("Zoom out").clicked() {
                self.zoom_out();
            }
            ui.label(format!(
                "level {} / {}",
                self.ladder.index() + 1,
                self.ladder.ticks()
            ));
            if ui.button("+").on_hover_text("Zoom in").clicked() {
                self.zoom_in();
            }
        });

        ui.label(format!("ratio: {:.2}", self.ladder.current()));
        ui.label(format!(
            "origin: ({:.0}, {:.0})",
            self.viewport.origin_x, self.viewport.origin_y
        ));
        ui.label(format!(
            "visible: {:.0} x {:.0}",
            self.transform.visible_width, self.transform.visible_height
        ));
        if !self.ladder.is_zoomed_out() {
            ui.label(
                RichText::new("move the pointer to a panel edge to scroll")
                    .size(11.0)
                    .color(Color32::from_gray(150)),
            );
        }

        ui.add_space(8.0);
        ui.separator();
        ui.heading("Graph");
        ui.add_space(4.0);

        let pinned = self.model.nodes.iter().filter(|node| node.fixed).count();
        ui.label(format!("nodes: {}", self.model.node_count()));
        ui.label(format!("links: {}", self.model.link_count()));
        ui.label(format!("pinned: {pinned}"));
        ui.label(
            RichText::new("drag a node to pin it, double-click to release")
                .size(11.0)
                .color(Color32::from_gray(150)),
        );

        let kinds = self
            .model
            .nodes
            .iter()
            .map(|node| node.kind.as_str())
            .collect::<BTreeSet<_>>();
        if !kinds.is_empty() {
            ui.add_space(8.0);
            ui.separator();
            ui.heading("Legend");
            ui.add_space(4.0);
            for kind in kinds {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("\u{25cf}").color(kind_color(kind)));
                    ui.label(if kind.is_empty() { "(untyped)" } else { kind });
                });
            }
        }
    }
}
