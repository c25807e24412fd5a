use egui::{Color32, Stroke as EguiStroke, pos2};

use crate::canvas::PaintItem;
use crate::renderer::Renderer;
use crate::tool::ToolKind;

/// Square toolbar button showing a miniature of what the tool draws
pub struct ToolButton {
    pub kind: ToolKind,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(kind: ToolKind, selected: bool) -> Self {
        Self { kind, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                Color32::from_gray(70)
            } else {
                Color32::from_gray(50)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let glyph_color = if self.selected { Color32::BLACK } else { Color32::WHITE };
            let origin = rect.min.to_vec2();
            let spec = self.kind.spec();
            if spec.path_following {
                // freehand tools get a squiggle instead of their one-segment geometry
                let squiggle = [(7.0, 20.0), (12.0, 11.0), (17.0, 19.0), (22.0, 10.0), (25.0, 14.0)]
                    .map(|(x, y)| pos2(x, y) + origin);
                ui.painter()
                    .add(egui::Shape::line(squiggle.to_vec(), EguiStroke::new(2.0, glyph_color)));
            } else {
                let glyph = PaintItem {
                    shape: spec.geometry.apply(pos2(8.0, 10.0), pos2(24.0, 22.0)),
                    stroke_color: glyph_color,
                    stroke_width: 2.0,
                    filled: false,
                    fill_color: glyph_color,
                };
                ui.painter().extend(Renderer::shapes_for(&glyph, origin));
            }

            if !spec.paints_foreground {
                ui.painter().line_segment(
                    [rect.left_bottom() + egui::vec2(6.0, -6.0), rect.right_bottom() + egui::vec2(-6.0, -6.0)],
                    EguiStroke::new(3.0, glyph_color),
                );
            }

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    EguiStroke::new(2.0, Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.kind.name())
    }
}
