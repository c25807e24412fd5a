use egui::{Pos2, Rect, vec2};

use crate::shape::Shape;

/// How a tool turns its start and end points into a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryRule {
    Segment,
    Rectangle,
    Square,
    Ellipse,
    Circle,
}

impl GeometryRule {
    pub fn apply(self, start: Pos2, end: Pos2) -> Shape {
        match self {
            Self::Segment => Shape::Line { start, end },
            Self::Rectangle => Shape::Rectangle {
                rect: normalized_box(start, end),
            },
            Self::Square => Shape::Rectangle {
                rect: square_box(start, end),
            },
            Self::Ellipse => Shape::Ellipse {
                rect: normalized_box(start, end),
            },
            Self::Circle => Shape::Ellipse {
                rect: square_box(start, end),
            },
        }
    }
}

/// Bounding box of the drag with non-negative width and height
pub fn normalized_box(start: Pos2, end: Pos2) -> Rect {
    let min = Pos2::new(start.x.min(end.x), start.y.min(end.y));
    let size = vec2((end.x - start.x).abs(), (end.y - start.y).abs());
    Rect::from_min_size(min, size)
}

/// Square with side `max(w, h)` of the drag box, anchored at `start` and
/// shifted back along each axis the drag went "before" the start point.
pub fn square_box(start: Pos2, end: Pos2) -> Rect {
    let bounds = normalized_box(start, end);
    let side = bounds.width().max(bounds.height());

    let mut anchor = start;
    if end.x < start.x && end.y < start.y {
        anchor.x -= side;
        anchor.y -= side;
    } else if end.y < start.y {
        anchor.y -= side;
    } else if end.x < start.x {
        anchor.x -= side;
    }

    Rect::from_min_size(anchor, vec2(side, side))
}
