//! Undo/redo over full-bitmap snapshots.
//!
//! `undo` holds pre-stroke captures oldest to newest. `redo` is newest-first:
//! undo pushes onto its front and redo takes from its front. Starting a stroke
//! abandons the redo branch.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use crate::surface::{Snapshot, Surface, SurfaceError};

/// Undo and redo stacks of bitmap snapshots.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: VecDeque<Snapshot>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the pre-stroke bitmap. Call once per stroke, before the first segment.
    pub fn record_before_stroke(&mut self, surface: &Surface) {
        self.checkpoint(surface, "stroke");
    }

    /// Capture the bitmap before a whole-canvas clear so the clear can be undone.
    pub fn record_before_clear(&mut self, surface: &Surface) {
        self.checkpoint(surface, "clear");
    }

    fn checkpoint(&mut self, surface: &Surface, edit: &'static str) {
        self.undo.push(surface.snapshot());
        if !self.redo.is_empty() {
            tracing::trace!(dropped = self.redo.len(), edit, "new edit abandons redo branch");
            self.redo.clear();
        }
    }

    /// Step back one stroke. Returns `false` when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Fails only if a stored snapshot no longer matches the surface size; the
    /// stacks are left as they were.
    pub fn undo(&mut self, surface: &mut Surface) -> Result<bool, SurfaceError> {
        let Some(previous) = self.undo.pop() else {
            return Ok(false);
        };
        let current = surface.snapshot();
        if let Err(e) = surface.restore(&previous) {
            self.undo.push(previous);
            return Err(e);
        }
        self.redo.push_front(current);
        Ok(true)
    }

    /// Re-apply the most recently undone stroke. Returns `false` when there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Fails only if a stored snapshot no longer matches the surface size; the
    /// stacks are left as they were.
    pub fn redo(&mut self, surface: &mut Surface) -> Result<bool, SurfaceError> {
        let Some(next) = self.redo.pop_front() else {
            return Ok(false);
        };
        let current = surface.snapshot();
        if let Err(e) = surface.restore(&next) {
            self.redo.push_front(next);
            return Err(e);
        }
        self.undo.push(current);
        Ok(true)
    }

    /// Drop both stacks.
    pub fn reset(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}
