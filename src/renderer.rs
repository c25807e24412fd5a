// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Stroke as EguiStroke, Vec2};

use crate::canvas::{Canvas, PaintItem};
use crate::shape::Shape;

/// Paints a canvas' paintable sequence with an egui painter
#[derive(Debug)]
pub struct Renderer {
    /// Draw a thin frame around the canvas area
    pub show_border: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self { show_border: true }
    }

    /// Renders the canvas into `rect`
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): Screen area of the canvas; canvas coordinates start at `rect.min`
    ///     canvas (Canvas): The canvas to draw
    pub fn render(&self, painter: &Painter, rect: Rect, canvas: &Canvas) {
        painter.rect_filled(rect, 0.0, canvas.background_color());

        let clipped = painter.with_clip_rect(rect);
        let origin = rect.min.to_vec2();
        for item in canvas.paintable_sequence() {
            clipped.extend(Self::shapes_for(&item, origin));
        }

        if self.show_border {
            painter.rect_stroke(rect, 0.0, EguiStroke::new(1.0, Color32::GRAY));
        }
    }

    /// egui shapes for one item: the outline first, then the fill on top
    pub fn shapes_for(item: &PaintItem, origin: Vec2) -> Vec<egui::Shape> {
        let mut shapes = Vec::with_capacity(2);
        let shape = item.shape.translate(origin);
        let outline = EguiStroke::new(item.stroke_width, item.stroke_color);

        if item.stroke_width > 0.0 {
            shapes.push(match shape {
                Shape::Line { start, end } => egui::Shape::line_segment([start, end], outline),
                Shape::Rectangle { rect } => egui::Shape::rect_stroke(rect, 0.0, outline),
                Shape::Ellipse { rect } => {
                    let (center, radius) = ellipse_params(rect);
                    egui::Shape::ellipse_stroke(center, radius, outline)
                }
            });
        }

        if item.filled {
            match shape {
                // a line has no interior
                Shape::Line { .. } => {}
                Shape::Rectangle { rect } => {
                    shapes.push(egui::Shape::rect_filled(rect, 0.0, item.fill_color));
                }
                Shape::Ellipse { rect } => {
                    let (center, radius) = ellipse_params(rect);
                    shapes.push(egui::Shape::ellipse_filled(center, radius, item.fill_color));
                }
            }
        }

        shapes
    }
}

fn ellipse_params(rect: Rect) -> (Pos2, Vec2) {
    (rect.center(), rect.size() / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PaintSettings;
    use crate::tool::ToolKind;
    use egui::{PointerButton, pos2, vec2};

    fn item(shape: Shape, stroke_width: f32, filled: bool) -> PaintItem {
        PaintItem {
            shape,
            stroke_color: Color32::BLUE,
            stroke_width,
            filled,
            fill_color: Color32::RED,
        }
    }

    #[test]
    fn test_outline_then_fill() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0));
        let shapes = Renderer::shapes_for(&item(Shape::Rectangle { rect }, 2.0, true), Vec2::ZERO);
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn test_strokeless_fill() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 4.0));
        let shapes = Renderer::shapes_for(&item(Shape::Ellipse { rect }, 0.0, true), Vec2::ZERO);
        assert_eq!(shapes.len(), 1);
    }

    #[test]
    fn test_filled_line_only_draws_outline() {
        let line = Shape::Line { start: pos2(0.0, 0.0), end: pos2(3.0, 3.0) };
        assert_eq!(Renderer::shapes_for(&item(line, 1.0, true), Vec2::ZERO).len(), 1);
        assert!(Renderer::shapes_for(&item(line, 0.0, false), Vec2::ZERO).is_empty());
    }

    #[test]
    fn test_render_basics() {
        let mut canvas = Canvas::new(PaintSettings::default());
        canvas.set_active_tool(ToolKind::Square);
        canvas.on_press(pos2(5.0, 5.0), PointerButton::Primary).unwrap();
        canvas.on_drag(pos2(20.0, 30.0)).unwrap();
        canvas.on_release();

        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx.clone(), layer_id, rect);

        Renderer::new().render(&painter, rect, &canvas);
    }

    #[test]
    fn test_default_matches_new() {
        assert!(Renderer::default().show_border);
        assert_eq!(Renderer::default().show_border, Renderer::new().show_border);
    }
}
