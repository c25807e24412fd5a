use crate::canvas::{CANVAS_SIZE, Canvas};
use crate::input::InputHandler;
use crate::renderer::Renderer;

/// The drawing area: forwards pointer input to the canvas, then paints it
pub fn central_panel(
    canvas: &mut Canvas,
    input: &mut InputHandler,
    renderer: &Renderer,
    ctx: &egui::Context,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available = ui.available_size();
        let size = egui::vec2(available.x.max(CANVAS_SIZE.x), available.y.max(CANVAS_SIZE.y));
        let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
        let canvas_rect = response.rect;

        input.set_canvas_rect(canvas_rect);
        for event in input.process_input(ctx, painter.layer_id()) {
            if let Err(err) = event.apply(canvas) {
                log::warn!("Dropped pointer event {event:?}: {err}");
            }
        }

        if response.hovered() || input.is_pointer_held() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }

        renderer.render(&painter, canvas_rect, canvas);
    });
}
