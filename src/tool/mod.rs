pub mod geometry;
pub mod types;

use egui::Pos2;

use crate::error::{PaintError, PaintResult};
use crate::shape::Shape;

pub use geometry::GeometryRule;
pub use types::{ToolKind, ToolSpec};

/// Where a tool's points rest when nothing is being drawn (off canvas)
pub const INITIAL_POINT: Pos2 = Pos2::new(-10.0, -10.0);

/// A drawing tool: a variant from [`ToolKind`] plus the current drag anchors
#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    kind: ToolKind,
    start: Pos2,
    end: Pos2,
}

impl Default for Tool {
    fn default() -> Self {
        Self::new(ToolKind::default())
    }
}

impl Tool {
    pub fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            start: INITIAL_POINT,
            end: INITIAL_POINT,
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.spec().display_name
    }

    pub fn icon(&self) -> &'static str {
        self.kind.spec().icon
    }

    pub fn is_path_following(&self) -> bool {
        self.kind.spec().path_following
    }

    pub fn paints_foreground(&self) -> bool {
        self.kind.spec().paints_foreground
    }

    pub fn start_point(&self) -> Pos2 {
        self.start
    }

    pub fn end_point(&self) -> Pos2 {
        self.end
    }

    /// Anchors a fresh drag at `point`; the end point moves with it
    pub fn set_start_point(&mut self, point: Pos2) -> PaintResult<()> {
        check_point(point)?;
        self.start = point;
        self.end = point;
        Ok(())
    }

    pub fn set_end_point(&mut self, point: Pos2) -> PaintResult<()> {
        check_point(point)?;
        self.end = point;
        Ok(())
    }

    pub fn reset_to_initial(&mut self) {
        self.start = INITIAL_POINT;
        self.end = INITIAL_POINT;
    }

    /// The shape spanned by the current start and end points
    pub fn compute_shape(&self) -> Shape {
        self.kind.spec().geometry.apply(self.start, self.end)
    }
}

fn check_point(point: Pos2) -> PaintResult<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(PaintError::invalid(format!("point {point:?} is not a finite coordinate")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Rect, pos2, vec2};

    #[test]
    fn test_new_tool_rests_at_sentinel() {
        let tool = Tool::new(ToolKind::Rectangle);
        assert_eq!(tool.start_point(), INITIAL_POINT);
        assert_eq!(tool.end_point(), INITIAL_POINT);
        assert_eq!(tool.name(), "Rectangle");
    }

    #[test]
    fn test_set_start_resets_end() {
        let mut tool = Tool::new(ToolKind::Line);
        tool.set_start_point(pos2(1.0, 2.0)).unwrap();
        tool.set_end_point(pos2(5.0, 5.0)).unwrap();
        tool.set_start_point(pos2(7.0, 8.0)).unwrap();
        assert_eq!(tool.end_point(), pos2(7.0, 8.0));
    }

    #[test]
    fn test_rejects_undefined_points() {
        let mut tool = Tool::new(ToolKind::Pencil);
        assert!(matches!(
            tool.set_start_point(pos2(f32::NAN, 0.0)),
            Err(PaintError::InvalidArgument(_))
        ));
        assert!(tool.set_end_point(pos2(0.0, f32::INFINITY)).is_err());
        assert_eq!(tool.start_point(), INITIAL_POINT);
    }

    #[test]
    fn test_compute_shape_does_not_mutate() {
        let mut tool = Tool::new(ToolKind::Ellipse);
        tool.set_start_point(pos2(4.0, 4.0)).unwrap();
        tool.set_end_point(pos2(0.0, 1.0)).unwrap();
        let first = tool.compute_shape();
        assert_eq!(first, tool.compute_shape());
        assert_eq!(
            first,
            Shape::Ellipse { rect: Rect::from_min_size(pos2(0.0, 1.0), vec2(4.0, 3.0)) }
        );
    }

    #[test]
    fn test_reset_to_initial() {
        let mut tool = Tool::new(ToolKind::Square);
        tool.set_start_point(pos2(3.0, 3.0)).unwrap();
        tool.reset_to_initial();
        assert_eq!(tool.start_point(), INITIAL_POINT);
        assert_eq!(tool.end_point(), INITIAL_POINT);
    }

    #[test]
    fn test_eraser_shares_pencil_geometry() {
        let mut pencil = Tool::new(ToolKind::Pencil);
        let mut eraser = Tool::new(ToolKind::Eraser);
        for tool in [&mut pencil, &mut eraser] {
            tool.set_start_point(pos2(1.0, 1.0)).unwrap();
            tool.set_end_point(pos2(2.0, 3.0)).unwrap();
        }
        assert_eq!(pencil.compute_shape(), eraser.compute_shape());
        assert!(eraser.is_path_following());
        assert!(!eraser.paints_foreground());
    }
}
