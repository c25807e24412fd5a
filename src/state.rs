use egui::{Color32, PointerButton};
use serde::{Deserialize, Serialize};

use crate::id_generator::GroupId;
use crate::stroke::StrokeWidth;
use crate::tool::ToolKind;

/// Where the canvas is in a press/drag/release gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// A button is held; every stroke committed now belongs to `group_id`
    Drawing {
        group_id: GroupId,
        button: PointerButton,
    },
}

impl EditorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
        }
    }
}

/// User-adjustable canvas settings, persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // settings saved by older versions keep working
pub struct PaintSettings {
    pub tool: ToolKind,
    pub stroke_width: StrokeWidth,
    pub fill_enabled: bool,
    pub primary_color: Color32,
    pub secondary_color: Color32,
    pub fill_color: Color32,
    pub background_color: Color32,
    /// File used by the last save or load
    pub last_path: String,
}

impl PaintSettings {
    pub const PRIMARY_COLOR: Color32 = Color32::from_rgb(51, 0, 111);
    pub const SECONDARY_COLOR: Color32 = Color32::from_rgb(232, 211, 162);
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            stroke_width: StrokeWidth::DEFAULT,
            fill_enabled: false,
            primary_color: Self::PRIMARY_COLOR,
            secondary_color: Self::SECONDARY_COLOR,
            fill_color: Color32::BLACK,
            background_color: Color32::WHITE,
            last_path: "drawing.shp".to_owned(),
        }
    }
}
