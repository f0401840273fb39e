use eframe::egui::{Align2, Color32, FontId, Sense, Stroke, Ui, vec2};

use super::NetAnimApp;

const BACKGROUND: Color32 = Color32::from_rgb(0, 0, 0);
const NODE_COLOR: Color32 = Color32::from_rgb(0, 0, 255);
const LINK_WIDTH: f32 = 1.0;

impl NetAnimApp {
    pub(super) fn draw_scene(&mut self, ui: &mut Ui, motion_enabled: bool) {
        let bounds = self.config.bounds();
        let (rect, _response) = ui.allocate_exact_size(bounds, Sense::hover());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, BACKGROUND);

        // Each node is drawn, linked against the whole set, and stepped before
        // the next node's turn, so links within one frame mix pre- and
        // post-step positions. Steady-state visuals do not depend on this.
        let origin = rect.left_top();
        for index in 0..self.nodes.len() {
            let (pos, radius) = {
                let node = &self.nodes.nodes()[index];
                (node.pos, node.radius)
            };
            painter.circle_filled(origin + pos, radius, NODE_COLOR);

            self.nodes
                .link_endpoints(index, self.config.link_threshold, &mut self.link_scratch);
            for &(start, end) in &self.link_scratch {
                painter.line_segment(
                    [origin + start, origin + end],
                    Stroke::new(LINK_WIDTH, NODE_COLOR),
                );
            }

            if motion_enabled {
                self.nodes.step_node(index, bounds);
            }
        }

        if let Some(text) = self.fps_display_text() {
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                text,
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }
    }
}
