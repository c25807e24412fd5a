use serde::{Deserialize, Serialize};

use super::geometry::GeometryRule;

/// Every tool the canvas offers, in toolbar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    Pencil,
    #[default]
    Line,
    Rectangle,
    Square,
    Ellipse,
    Circle,
    Eraser,
}

/// Static description of a tool variant.
///
/// Variants differ only in these fields; the drawing behavior all lives in
/// [`GeometryRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub geometry: GeometryRule,
    /// Every drag movement commits a segment instead of one shape at release
    pub path_following: bool,
    /// False means the tool always paints in the background color
    pub paints_foreground: bool,
    pub display_name: &'static str,
    pub icon: &'static str,
}

impl ToolKind {
    pub const ALL: [ToolKind; 7] = [
        ToolKind::Pencil,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Square,
        ToolKind::Ellipse,
        ToolKind::Circle,
        ToolKind::Eraser,
    ];

    pub const fn spec(self) -> ToolSpec {
        match self {
            ToolKind::Pencil => ToolSpec {
                geometry: GeometryRule::Segment,
                path_following: true,
                paints_foreground: true,
                display_name: "Pencil",
                icon: "images/pencil_bw.gif",
            },
            ToolKind::Line => ToolSpec {
                geometry: GeometryRule::Segment,
                path_following: false,
                paints_foreground: true,
                display_name: "Line",
                icon: "images/line_bw.gif",
            },
            ToolKind::Rectangle => ToolSpec {
                geometry: GeometryRule::Rectangle,
                path_following: false,
                paints_foreground: true,
                display_name: "Rectangle",
                icon: "images/rectangle_bw.gif",
            },
            ToolKind::Square => ToolSpec {
                geometry: GeometryRule::Square,
                path_following: false,
                paints_foreground: true,
                display_name: "Square",
                icon: "images/square_bw.gif",
            },
            ToolKind::Ellipse => ToolSpec {
                geometry: GeometryRule::Ellipse,
                path_following: false,
                paints_foreground: true,
                display_name: "Ellipse",
                icon: "images/ellipse_bw.gif",
            },
            ToolKind::Circle => ToolSpec {
                geometry: GeometryRule::Circle,
                path_following: false,
                paints_foreground: true,
                display_name: "Circle",
                icon: "images/circle_bw.gif",
            },
            ToolKind::Eraser => ToolSpec {
                geometry: GeometryRule::Segment,
                path_following: true,
                paints_foreground: false,
                display_name: "Eraser",
                icon: "images/eraser.gif",
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().display_name
    }
}
