use egui::Color32;

use crate::canvas::Canvas;
use crate::error::PaintResult;
use crate::stroke::Stroke;
use crate::tool::ToolKind;

/// Actions issued by menus, toolbars and shortcuts against the canvas
#[derive(Clone, PartialEq)]
pub enum Command {
    SelectTool(ToolKind),
    SetStrokeWidth(u8),
    SetFillEnabled(bool),
    SetEraseOverride(bool),
    SetPrimaryColor(Color32),
    SetSecondaryColor(Color32),
    SetFillColor(Color32),
    SetBackgroundColor(Color32),
    Undo,
    Redo,
    Clear,
    /// Merge strokes loaded from a file after the current drawing
    Import(Vec<Stroke>),
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SelectTool(kind) => f.debug_tuple("SelectTool").field(kind).finish(),
            Command::SetStrokeWidth(width) => f.debug_tuple("SetStrokeWidth").field(width).finish(),
            Command::SetFillEnabled(enabled) => f.debug_tuple("SetFillEnabled").field(enabled).finish(),
            Command::SetEraseOverride(enabled) => {
                f.debug_tuple("SetEraseOverride").field(enabled).finish()
            }
            Command::SetPrimaryColor(color) => f.debug_tuple("SetPrimaryColor").field(color).finish(),
            Command::SetSecondaryColor(color) => {
                f.debug_tuple("SetSecondaryColor").field(color).finish()
            }
            Command::SetFillColor(color) => f.debug_tuple("SetFillColor").field(color).finish(),
            Command::SetBackgroundColor(color) => {
                f.debug_tuple("SetBackgroundColor").field(color).finish()
            }
            Command::Undo => write!(f, "Undo"),
            Command::Redo => write!(f, "Redo"),
            Command::Clear => write!(f, "Clear"),
            // Stroke lists can be huge; only show how many
            Command::Import(strokes) => f
                .debug_struct("Import")
                .field("strokes", &strokes.len())
                .finish(),
        }
    }
}

impl Command {
    pub fn execute(self, canvas: &mut Canvas) -> PaintResult<()> {
        match self {
            Command::SelectTool(kind) => canvas.set_active_tool(kind),
            Command::SetStrokeWidth(width) => canvas.set_stroke_width(width)?,
            Command::SetFillEnabled(enabled) => canvas.set_fill_enabled(enabled),
            Command::SetEraseOverride(enabled) => canvas.set_erase_override(enabled),
            Command::SetPrimaryColor(color) => canvas.set_primary_color(color),
            Command::SetSecondaryColor(color) => canvas.set_secondary_color(color),
            Command::SetFillColor(color) => canvas.set_fill_color(color),
            Command::SetBackgroundColor(color) => canvas.set_background_color(color),
            Command::Undo => canvas.undo(),
            Command::Redo => canvas.redo(),
            Command::Clear => canvas.clear(),
            Command::Import(strokes) => {
                canvas.import_state(strokes);
            }
        }
        Ok(())
    }
}
