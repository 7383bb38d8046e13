use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, pos2};

use crate::engine::LayoutEngine;
use crate::render::{self, NODE_RADIUS};
use crate::util::short_name;
use crate::view::pan_towards_edges;

use super::ViewModel;

const KIND_COLORS: &[(&str, Color32)] = &[
    ("library", Color32::from_rgb(101, 156, 239)),
    ("category", Color32::from_rgb(242, 174, 84)),
    ("component", Color32::from_rgb(109, 196, 133)),
];

pub(in crate::app) fn kind_color(kind: &str) -> Color32 {
    KIND_COLORS
        .iter()
        .find(|(name, _)| *name == kind)
        .map(|(_, color)| *color)
        .unwrap_or(Color32::from_rgb(158, 158, 170))
}

impl ViewModel {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        self.adopt_surface(rect.width(), rect.height());
        if !self.engine_loaded {
            self.engine.load(
                &self.model,
                self.transform.visible_width,
                self.transform.visible_height,
            );
            self.engine_loaded = true;
            self.force_render = true;
        }

        if self.model.nodes.is_empty() {
            ui.label("The dependency graph is empty.");
            return;
        }

        self.handle_edge_pan(rect, &response);

        let hovered = self.hovered_node(rect, &response);
        self.handle_node_gestures(hovered, &response);

        let frame_delta = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        let moving = self.engine.step(frame_delta, &mut self.model);
        if moving {
            ui.ctx().request_repaint();
        }

        if moving || self.force_render {
            render::tick(&mut self.model, &self.transform, &mut self.shapes);
            self.force_render = false;
        }

        draw_background(&painter, rect);

        let origin = rect.left_top().to_vec2();
        for link_shape in &self.shapes.links {
            painter.line_segment(
                [link_shape.start + origin, link_shape.end + origin],
                Stroke::new(1.4, Color32::from_rgba_unmultiplied(140, 140, 150, 190)),
            );
        }
        for link_shape in &self.shapes.links {
            let Some(link) = self.model.links.get(link_shape.link) else {
                continue;
            };
            if link.kind.is_empty() {
                continue;
            }
            painter.text(
                link_shape.label + origin,
                Align2::CENTER_CENTER,
                &link.kind,
                FontId::proportional(10.0),
                Color32::from_gray(150),
            );
        }

        for node_shape in &self.shapes.nodes {
            let Some(node) = self.model.nodes.get(node_shape.node) else {
                continue;
            };
            let center = node_shape.center + origin;

            painter.circle_filled(center, NODE_RADIUS, kind_color(&node.kind));
            let stroke = if node.fixed {
                Stroke::new(2.2, Color32::from_rgb(245, 206, 93))
            } else {
                Stroke::new(1.0, Color32::from_rgba_unmultiplied(15, 15, 15, 190))
            };
            painter.circle_stroke(center, NODE_RADIUS, stroke);

            painter.text(
                node_shape.label + origin,
                Align2::LEFT_CENTER,
                short_name(&node.id),
                FontId::proportional(12.0),
                Color32::from_gray(235),
            );
        }

        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }
    }

    fn adopt_surface(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        if (width - self.virtual_width).abs() < 0.5 && (height - self.virtual_height).abs() < 0.5 {
            return;
        }

        self.virtual_width = width;
        self.virtual_height = height;
        self.refresh_transform();
        if self.engine_loaded {
            self.engine
                .resize(self.transform.visible_width, self.transform.visible_height);
            self.engine.resume();
        }
        self.force_render = true;
    }

    /// Pointer near a surface edge scrolls the viewport towards that edge.
    /// Disabled fully zoomed out, where the whole canvas is already visible.
    fn handle_edge_pan(&mut self, rect: Rect, response: &egui::Response) {
        if self.ladder.is_zoomed_out() {
            return;
        }
        let Some(pointer) = response.hover_pos() else {
            return;
        };

        let moved = pan_towards_edges(
            &mut self.viewport,
            pointer.x - rect.left(),
            pointer.y - rect.top(),
            rect.width(),
            rect.height(),
            self.pan_margin,
        );
        if moved {
            self.refresh_transform();
            self.force_render = true;
        }
    }

    /// Drag-start pins the grabbed node against the simulation; dragging
    /// moves it through the engine; double-click releases it.
    fn handle_node_gestures(&mut self, hovered: Option<usize>, response: &egui::Response) {
        if response.drag_started_by(egui::PointerButton::Primary)
            && let Some(index) = hovered
        {
            self.drag_node = Some(index);
            if let Some(node) = self.model.nodes.get_mut(index) {
                node.fixed = true;
            }
            self.engine.set_fixed(index, true);
        }

        if response.dragged_by(egui::PointerButton::Primary)
            && let Some(index) = self.drag_node
            && let Some(node) = self.model.nodes.get(index)
        {
            let delta = response.drag_delta() * self.viewport.zoom_ratio;
            self.engine
                .set_position(index, node.x + delta.x, node.y + delta.y);
            self.engine.resume();
            self.force_render = true;
        }

        if response.drag_stopped() {
            self.drag_node = None;
        }

        if response.double_clicked()
            && let Some(index) = hovered
        {
            if let Some(node) = self.model.nodes.get_mut(index) {
                node.fixed = false;
            }
            self.engine.set_fixed(index, false);
            self.engine.resume();
        }
    }

    fn hovered_node(&self, rect: Rect, response: &egui::Response) -> Option<usize> {
        let pointer = response.hover_pos()?;
        let local = pos2(pointer.x - rect.left(), pointer.y - rect.top());

        self.shapes
            .nodes
            .iter()
            .filter_map(|shape| {
                let distance = shape.center.distance(local);
                if distance <= NODE_RADIUS {
                    Some((shape.node, distance))
                } else {
                    None
                }
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }
}

fn draw_background(painter: &egui::Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let step = 56.0;
    let mut x = rect.left();
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 55)),
        );
        x += step;
    }

    let mut y = rect.top();
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 55)),
        );
        y += step;
    }
}
