use egui::{Context, LayerId, PointerButton, Pos2, Rect};

use crate::canvas::Canvas;
use crate::error::PaintResult;

/// Pointer events in canvas coordinates (origin at the canvas' top-left corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button was pressed over the canvas
    PointerDown { position: Pos2, button: PointerButton },
    /// The pointer moved while the gesture's button is held
    PointerMove { position: Pos2 },
    /// The gesture's button was released (anywhere)
    PointerUp { position: Pos2 },
}

impl InputEvent {
    /// Feeds the event to the canvas' pointer session
    pub fn apply(self, canvas: &mut Canvas) -> PaintResult<()> {
        match self {
            InputEvent::PointerDown { position, button } => canvas.on_press(position, button),
            InputEvent::PointerMove { position } => canvas.on_drag(position),
            InputEvent::PointerUp { .. } => {
                canvas.on_release();
                Ok(())
            }
        }
    }
}

/// Converts raw egui pointer events into [`InputEvent`]s, keeping every
/// intermediate move so path-following tools see the whole path.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    active_button: Option<PointerButton>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            active_button: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_pointer_held(&self) -> bool {
        self.active_button.is_some()
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// `layer` is the canvas' layer: presses landing on a window, menu or
    /// popup drawn above it are left to that layer.
    pub fn process_input(&mut self, ctx: &Context, layer: LayerId) -> Vec<InputEvent> {
        let raw: Vec<egui::Event> = ctx.input(|input| input.raw.events.clone());
        self.process_events(&raw, |pos| {
            ctx.layer_id_at(pos).is_none_or(|top| top == layer)
        })
    }

    /// Translates a frame's worth of raw events, in delivery order.
    ///
    /// A gesture only starts on a press inside the canvas rect for which
    /// `owns_press` holds.
    pub fn process_events(
        &mut self,
        raw: &[egui::Event],
        owns_press: impl Fn(Pos2) -> bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw {
            match *event {
                egui::Event::PointerButton { pos, button, pressed: true, .. }
                    if self.active_button.is_none()
                        && self.canvas_rect.contains(pos)
                        && owns_press(pos) =>
                {
                    self.active_button = Some(button);
                    events.push(InputEvent::PointerDown {
                        position: self.to_canvas(pos),
                        button,
                    });
                }
                egui::Event::PointerMoved(pos) if self.active_button.is_some() => {
                    events.push(InputEvent::PointerMove {
                        position: self.to_canvas(pos),
                    });
                }
                egui::Event::PointerButton { pos, button, pressed: false, .. }
                    if self.active_button == Some(button) =>
                {
                    self.active_button = None;
                    events.push(InputEvent::PointerUp {
                        position: self.to_canvas(pos),
                    });
                }
                _ => {}
            }
        }

        events
    }
}
