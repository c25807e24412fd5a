//! The drawing surface: turns pointer gestures into committed strokes and
//! exposes the operations the shell needs (tools, settings, undo/redo, import/export).

use egui::{Color32, PointerButton, Pos2};

use crate::error::{PaintError, PaintResult};
use crate::history::StrokeHistory;
use crate::id_generator::{GroupId, IdSource};
use crate::persistence;
use crate::shape::Shape;
use crate::state::{EditorState, PaintSettings};
use crate::stroke::{Paint, Stroke, StrokeWidth};
use crate::tool::{Tool, ToolKind};

/// Preferred canvas size in points
pub const CANVAS_SIZE: egui::Vec2 = egui::vec2(500.0, 300.0);

/// Everything the renderer needs to draw one shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintItem {
    pub shape: Shape,
    pub stroke_color: Color32,
    pub stroke_width: f32,
    pub filled: bool,
    pub fill_color: Color32,
}

#[derive(Debug)]
pub struct Canvas {
    history: StrokeHistory,
    tool: Tool,
    settings: PaintSettings,
    /// Paint with the background color regardless of the tool
    erase_override: bool,
    /// Id reserved for the next gesture
    group_id: GroupId,
    state: EditorState,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(PaintSettings::default())
    }
}

impl Canvas {
    pub fn new(settings: PaintSettings) -> Self {
        Self::with_history(settings, StrokeHistory::new())
    }

    /// A canvas whose group ids come from `source`, for reproducible sessions
    pub fn with_id_source(settings: PaintSettings, source: impl IdSource + 'static) -> Self {
        Self::with_history(settings, StrokeHistory::with_id_source(source))
    }

    fn with_history(settings: PaintSettings, mut history: StrokeHistory) -> Self {
        let tool = Tool::new(settings.tool);
        let group_id = history.allocate_group_id();
        Self {
            history,
            erase_override: !tool.paints_foreground(),
            tool,
            settings,
            group_id,
            state: EditorState::Idle,
        }
    }

    // ------------------------------------------------------------------
    // Pointer session

    /// Starts a gesture at `point`. Nothing is committed yet.
    pub fn on_press(&mut self, point: Pos2, button: PointerButton) -> PaintResult<()> {
        self.tool.set_start_point(point)?;
        self.state = EditorState::Drawing {
            group_id: self.group_id,
            button,
        };
        Ok(())
    }

    /// Moves the gesture's end point. Path-following tools commit a segment
    /// here and restart from `point`.
    pub fn on_drag(&mut self, point: Pos2) -> PaintResult<()> {
        if !self.state.is_drawing() {
            log::debug!("Ignoring drag to {point:?} without a press");
            return Ok(());
        }

        self.tool.set_end_point(point)?;
        if self.tool.is_path_following() && self.settings.stroke_width.is_visible() {
            self.commit_current_shape();
            self.tool.set_start_point(point)?;
        }
        Ok(())
    }

    /// Ends the gesture, committing the shape for tools that draw one shape per drag
    pub fn on_release(&mut self) {
        if !self.state.is_drawing() {
            log::debug!("Ignoring release without a press");
            return;
        }

        if !self.tool.is_path_following() && self.release_leaves_mark() {
            self.commit_current_shape();
        }
        self.state = EditorState::Idle;
        self.group_id = self.history.allocate_group_id();
    }

    /// A visible outline, or a fill on a shape that has an interior
    fn release_leaves_mark(&self) -> bool {
        self.settings.stroke_width.is_visible()
            || (self.settings.fill_enabled && self.tool.compute_shape().is_rectangular())
    }

    /// Primary color for the primary button, secondary for any other
    fn gesture_color(&self) -> Color32 {
        match self.state {
            EditorState::Drawing { button, .. } if button != PointerButton::Primary => {
                self.settings.secondary_color
            }
            _ => self.settings.primary_color,
        }
    }

    fn current_paint(&self) -> Paint {
        Paint {
            color: self.gesture_color(),
            fill_color: self.settings.fill_color,
            filled: self.settings.fill_enabled,
            erase_mode: self.erase_override,
            width: self.settings.stroke_width,
        }
    }

    fn commit_current_shape(&mut self) {
        let EditorState::Drawing { group_id, .. } = self.state else {
            return;
        };
        let stroke = Stroke::new(self.tool.compute_shape(), self.current_paint(), group_id);
        self.history.commit(stroke);
    }

    // ------------------------------------------------------------------
    // Tool and paint settings

    pub fn active_tool_name(&self) -> &'static str {
        self.tool.name()
    }

    pub fn active_tool(&self) -> &Tool {
        &self.tool
    }

    /// Switches tools. Erasing follows the new tool until overridden.
    pub fn set_active_tool(&mut self, kind: ToolKind) {
        log::info!("Tool selected: {}", kind.name());
        self.tool = Tool::new(kind);
        self.settings.tool = kind;
        self.erase_override = !self.tool.paints_foreground();
    }

    pub fn stroke_width(&self) -> StrokeWidth {
        self.settings.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: u8) -> PaintResult<()> {
        self.settings.stroke_width = StrokeWidth::new(width)?;
        Ok(())
    }

    pub fn is_fill_enabled(&self) -> bool {
        self.settings.fill_enabled
    }

    pub fn set_fill_enabled(&mut self, enabled: bool) {
        self.settings.fill_enabled = enabled;
    }

    pub fn is_erase_override(&self) -> bool {
        self.erase_override
    }

    pub fn set_erase_override(&mut self, enabled: bool) {
        self.erase_override = enabled;
    }

    pub fn primary_color(&self) -> Color32 {
        self.settings.primary_color
    }

    pub fn set_primary_color(&mut self, color: Color32) {
        self.settings.primary_color = color;
    }

    pub fn secondary_color(&self) -> Color32 {
        self.settings.secondary_color
    }

    pub fn set_secondary_color(&mut self, color: Color32) {
        self.settings.secondary_color = color;
    }

    pub fn fill_color(&self) -> Color32 {
        self.settings.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color32) {
        self.settings.fill_color = color;
    }

    pub fn background_color(&self) -> Color32 {
        self.settings.background_color
    }

    pub fn set_background_color(&mut self, color: Color32) {
        self.settings.background_color = color;
    }

    pub fn settings(&self) -> &PaintSettings {
        &self.settings
    }

    pub fn set_last_path(&mut self, path: impl Into<String>) {
        self.settings.last_path = path.into();
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The group id the current gesture commits under, or the next one's while idle
    pub fn current_group_id(&self) -> GroupId {
        match self.state {
            EditorState::Drawing { group_id, .. } => group_id,
            EditorState::Idle => self.group_id,
        }
    }

    // ------------------------------------------------------------------
    // History

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    /// Removes the last gesture. Ignored while a gesture is in progress.
    pub fn undo(&mut self) {
        if self.state.is_drawing() {
            log::debug!("Ignoring undo during a gesture");
            return;
        }
        self.tool.reset_to_initial();
        let removed = self.history.undo();
        if removed > 0 {
            log::info!("Undo removed {removed} strokes");
        }
    }

    /// Restores the last undone gesture. Ignored while a gesture is in progress.
    pub fn redo(&mut self) {
        if self.state.is_drawing() {
            log::debug!("Ignoring redo during a gesture");
            return;
        }
        let restored = self.history.redo();
        if restored > 0 {
            log::info!("Redo restored {restored} strokes");
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drops every stroke and used id, then reserves the pending gesture's id anew
    pub fn clear(&mut self) {
        self.history.clear();
        self.tool.reset_to_initial();
        self.state = EditorState::Idle;
        self.group_id = self.history.allocate_group_id();
        log::info!("Canvas cleared");
    }

    pub fn export_state(&self) -> Vec<Stroke> {
        self.history.export_state()
    }

    /// Merges strokes from another drawing after the current ones.
    ///
    /// Each group's strokes must be contiguous in `strokes`.
    pub fn import_state(&mut self, strokes: Vec<Stroke>) -> usize {
        self.history.import_state(strokes)
    }

    /// Parses a saved drawing and merges it. Nothing is merged if parsing fails.
    pub fn load_json(&mut self, json: &str) -> PaintResult<usize> {
        let strokes = persistence::from_json(json)?;
        Ok(self.import_state(strokes))
    }

    pub fn save_json(&self) -> PaintResult<String> {
        persistence::to_json(self.history.strokes()).map_err(PaintError::from)
    }

    // ------------------------------------------------------------------
    // Rendering

    /// Shapes to draw, in paint order: committed strokes, then the gesture in progress
    pub fn paintable_sequence(&self) -> Vec<PaintItem> {
        let background = self.settings.background_color;
        let mut items: Vec<PaintItem> = self
            .history
            .strokes()
            .iter()
            .map(|stroke| PaintItem {
                shape: *stroke.shape(),
                stroke_color: if stroke.is_erase_mode() { background } else { stroke.color() },
                stroke_width: f32::from(stroke.width().get()),
                filled: stroke.is_filled(),
                fill_color: stroke.fill_color(),
            })
            .collect();

        if self.state.is_drawing()
            && (self.settings.stroke_width.is_visible() || self.settings.fill_enabled)
        {
            items.push(PaintItem {
                shape: self.tool.compute_shape(),
                stroke_color: if self.erase_override { background } else { self.gesture_color() },
                stroke_width: f32::from(self.settings.stroke_width.get()),
                filled: self.settings.fill_enabled,
                fill_color: self.settings.fill_color,
            });
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn canvas(tool: ToolKind) -> Canvas {
        let mut next = 0;
        let mut canvas = Canvas::with_id_source(PaintSettings::default(), move || {
            next += 1;
            next
        });
        canvas.set_active_tool(tool);
        canvas
    }

    #[test]
    fn test_press_selects_color_by_button() {
        let mut canvas = canvas(ToolKind::Line);
        canvas.on_press(pos2(0.0, 0.0), PointerButton::Secondary).unwrap();
        canvas.on_drag(pos2(5.0, 5.0)).unwrap();
        canvas.on_release();
        assert_eq!(canvas.export_state()[0].color(), PaintSettings::SECONDARY_COLOR);
    }

    #[test]
    fn test_release_allocates_next_group() {
        let mut canvas = canvas(ToolKind::Line);
        let first = canvas.current_group_id();
        canvas.on_press(pos2(0.0, 0.0), PointerButton::Primary).unwrap();
        canvas.on_release();
        assert_ne!(canvas.current_group_id(), first);
        assert!(canvas.history().is_group_id_used(canvas.current_group_id()));
    }

    #[test]
    fn test_events_without_press_are_ignored() {
        let mut canvas = canvas(ToolKind::Pencil);
        let group = canvas.current_group_id();
        canvas.on_drag(pos2(3.0, 3.0)).unwrap();
        canvas.on_release();
        assert!(!canvas.can_undo());
        assert_eq!(canvas.current_group_id(), group);
    }

    #[test]
    fn test_selecting_eraser_turns_on_erase() {
        let mut canvas = canvas(ToolKind::Eraser);
        assert!(canvas.is_erase_override());
        canvas.set_active_tool(ToolKind::Pencil);
        assert!(!canvas.is_erase_override());
        canvas.set_erase_override(true);
        assert!(canvas.is_erase_override());
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        let mut canvas = canvas(ToolKind::Line);
        assert!(matches!(canvas.set_stroke_width(21), Err(PaintError::InvalidArgument(_))));
        assert_eq!(canvas.stroke_width().get(), 10);
    }

    #[test]
    fn test_preview_only_while_drawing() {
        let mut canvas = canvas(ToolKind::Rectangle);
        assert!(canvas.paintable_sequence().is_empty());
        canvas.on_press(pos2(1.0, 1.0), PointerButton::Primary).unwrap();
        canvas.on_drag(pos2(4.0, 4.0)).unwrap();
        assert_eq!(canvas.paintable_sequence().len(), 1);
        canvas.on_release();
        // the committed rectangle, no preview
        assert_eq!(canvas.paintable_sequence().len(), 1);
    }

    #[test]
    fn test_erased_strokes_follow_background() {
        let mut canvas = canvas(ToolKind::Eraser);
        canvas.on_press(pos2(0.0, 0.0), PointerButton::Primary).unwrap();
        canvas.on_drag(pos2(2.0, 0.0)).unwrap();
        canvas.on_release();
        canvas.set_background_color(Color32::GREEN);
        let items = canvas.paintable_sequence();
        assert_eq!(items[0].stroke_color, Color32::GREEN);
    }

    #[test]
    fn test_undo_resets_tool() {
        let mut canvas = canvas(ToolKind::Line);
        canvas.on_press(pos2(2.0, 2.0), PointerButton::Primary).unwrap();
        canvas.on_drag(pos2(8.0, 8.0)).unwrap();
        canvas.on_release();
        canvas.undo();
        assert_eq!(canvas.active_tool().start_point(), crate::tool::INITIAL_POINT);
        assert!(canvas.can_redo());
    }

    #[test]
    fn test_undo_mid_gesture_is_ignored() {
        let mut canvas = canvas(ToolKind::Line);
        canvas.on_press(pos2(0.0, 0.0), PointerButton::Primary).unwrap();
        canvas.on_drag(pos2(4.0, 4.0)).unwrap();
        canvas.on_release();

        canvas.on_press(pos2(10.0, 10.0), PointerButton::Primary).unwrap();
        canvas.undo();
        canvas.redo();
        assert_eq!(canvas.history().len(), 1);
        canvas.on_drag(pos2(20.0, 30.0)).unwrap();
        canvas.on_release();

        // the second line keeps its press point instead of the off-canvas rest point
        assert_eq!(
            *canvas.history().strokes()[1].shape(),
            Shape::Line { start: pos2(10.0, 10.0), end: pos2(20.0, 30.0) }
        );
    }

    #[test]
    fn test_gesture_commits_under_its_own_id() {
        let mut canvas = canvas(ToolKind::Pencil);
        let pending = canvas.current_group_id();
        canvas.on_press(pos2(0.0, 0.0), PointerButton::Primary).unwrap();
        assert_eq!(canvas.state(), EditorState::Drawing { group_id: pending, button: PointerButton::Primary });
        canvas.on_drag(pos2(3.0, 0.0)).unwrap();
        canvas.on_drag(pos2(6.0, 0.0)).unwrap();
        canvas.on_release();
        assert!(canvas.history().strokes().iter().all(|s| s.group_id() == pending));
        assert_ne!(canvas.current_group_id(), pending);
    }
}
