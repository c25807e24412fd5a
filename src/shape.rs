use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

/// A geometric primitive produced by a tool.
///
/// Rectangles and ellipses are both described by their bounding box; an
/// ellipse is the one inscribed in `rect`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Line { start: Pos2, end: Pos2 },
    Rectangle { rect: Rect },
    Ellipse { rect: Rect },
}

impl Shape {
    /// True for shapes with an interior that can be filled
    pub fn is_rectangular(&self) -> bool {
        matches!(self, Self::Rectangle { .. } | Self::Ellipse { .. })
    }

    /// The bounding box of the shape
    pub fn bounds(&self) -> Rect {
        match *self {
            Self::Line { start, end } => Rect::from_two_pos(start, end),
            Self::Rectangle { rect } | Self::Ellipse { rect } => rect,
        }
    }

    /// Returns the same shape moved by `offset`
    pub fn translate(&self, offset: egui::Vec2) -> Self {
        match *self {
            Self::Line { start, end } => Self::Line {
                start: start + offset,
                end: end + offset,
            },
            Self::Rectangle { rect } => Self::Rectangle {
                rect: rect.translate(offset),
            },
            Self::Ellipse { rect } => Self::Ellipse {
                rect: rect.translate(offset),
            },
        }
    }
}
