//! The ordered stroke history with grouped undo/redo.
//!
//! Strokes are painted, and undone, in insertion order. All strokes that share
//! a [`GroupId`] are undone and redone together, so a freehand line made of
//! many segments behaves as a single edit.

mod merge;

use crate::id_generator::{GroupId, IdAllocator, IdSource};
use crate::stroke::Stroke;

/// Owns the committed strokes, the redo stack and the set of used group ids
#[derive(Debug, Default)]
pub struct StrokeHistory {
    /// Committed strokes, oldest first
    strokes: Vec<Stroke>,
    /// Undone strokes; the top of the stack is the last element
    redo_stack: Vec<Stroke>,
    ids: IdAllocator,
}

impl StrokeHistory {
    /// Creates an empty history drawing group ids from the system RNG
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history drawing group ids from `source`
    pub fn with_id_source(source: impl IdSource + 'static) -> Self {
        Self {
            strokes: Vec::new(),
            redo_stack: Vec::new(),
            ids: IdAllocator::new(source),
        }
    }

    /// Appends a stroke.
    ///
    /// The redo stack is left alone: undone groups stay redoable until they
    /// are redone or the history is cleared.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Removes the most recent group, moving it onto the redo stack.
    ///
    /// Returns how many strokes were moved; zero when there is nothing to undo.
    pub fn undo(&mut self) -> usize {
        let Some(id) = self.strokes.last().map(Stroke::group_id) else {
            return 0;
        };

        let mut moved = 0;
        while self.strokes.last().is_some_and(|s| s.group_id() == id) {
            if let Some(stroke) = self.strokes.pop() {
                self.redo_stack.push(stroke);
                moved += 1;
            }
        }
        log::debug!("Undid group {id} ({moved} strokes)");
        moved
    }

    /// Restores the most recently undone group.
    ///
    /// Returns how many strokes were restored; zero when there is nothing to redo.
    pub fn redo(&mut self) -> usize {
        let Some(id) = self.redo_stack.last().map(Stroke::group_id) else {
            return 0;
        };

        let mut moved = 0;
        while self.redo_stack.last().is_some_and(|s| s.group_id() == id) {
            if let Some(stroke) = self.redo_stack.pop() {
                self.strokes.push(stroke);
                moved += 1;
            }
        }
        log::debug!("Redid group {id} ({moved} strokes)");
        moved
    }

    /// Forgets every stroke and every used group id
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.redo_stack.clear();
        self.ids.clear();
    }

    /// An independent copy of the committed strokes, in paint order
    pub fn export_state(&self) -> Vec<Stroke> {
        self.strokes.clone()
    }

    /// Appends externally loaded strokes, renumbering groups whose id is
    /// already in use.
    ///
    /// `incoming` must keep each group's strokes contiguous; a group that is
    /// split up is treated as several groups. Returns the number of strokes
    /// appended, which is always `incoming.len()`.
    pub fn import_state(&mut self, incoming: Vec<Stroke>) -> usize {
        let count = incoming.len();
        merge::merge_into(&mut self.strokes, &mut self.ids, incoming);
        log::info!("Imported {count} strokes");
        count
    }

    /// Allocates a group id not used anywhere in this session
    pub fn allocate_group_id(&mut self) -> GroupId {
        self.ids.allocate()
    }

    pub fn is_group_id_used(&self, id: GroupId) -> bool {
        self.ids.contains(id)
    }

    /// Number of group ids currently marked as used
    pub fn used_id_count(&self) -> usize {
        self.ids.len()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn redo_stack(&self) -> &[Stroke] {
        &self.redo_stack
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
