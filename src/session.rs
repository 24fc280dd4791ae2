//! Session — the single owner of all board state for one page load.
//!
//! DESIGN
//! ======
//! Drawing state (bitmap, history, tools, labels) lives in `EngineCore`; the
//! session adds what only matters across recognition round-trips: the
//! variable binding table and a request epoch.
//!
//! Submitting is split in two so the host can release its borrow of the
//! session while the request is in flight: `prepare_submission` captures the
//! drawing and tags it with the current epoch, and `complete_submission`
//! applies the outcome. `reset` bumps the epoch, so a response that arrives
//! after a reset is discarded instead of labelling a board it never saw.

use canvas::engine::{Action, EngineCore};
use canvas::export::{self, ExportError};
use canvas::geom::{InkBounds, Point};
use canvas::overlay::Label;
use uuid::Uuid;

use crate::bindings::VariableBindings;
use crate::config::BoardConfig;
use crate::recognize::{CalculateRequest, RecognizeError, Recognizer, ResultItem};
use crate::toolbar::{ToolbarCommand, ToolbarView};

/// Errors surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The bitmap could not be encoded for submission.
    #[error("snapshot export failed: {0}")]
    Export(#[from] ExportError),

    /// The recognition request failed; the board is unchanged.
    #[error(transparent)]
    Recognize(#[from] RecognizeError),
}

/// A captured drawing ready to send, tagged with the epoch it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub epoch: u64,
    /// Correlates log lines for one request.
    pub request_id: Uuid,
    pub request: CalculateRequest,
    /// Ink extent of the submitted bitmap; results are anchored here.
    pub ink: Option<InkBounds>,
}

/// What happened to a completed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Results were applied to the board.
    Applied { labels_added: usize, assignments: usize },
    /// The board was reset while the request was in flight; nothing was applied.
    Stale { epoch: u64, current: u64 },
}

/// Result of routing a toolbar command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The command was handled synchronously.
    Actions(Vec<Action>),
    /// The host should send this submission and hand the result to
    /// [`Session::complete_submission`].
    Submit(Submission),
}

/// Board state for one session.
#[derive(Debug, Clone)]
pub struct Session {
    engine: EngineCore,
    bindings: VariableBindings,
    epoch: u64,
    clear_ink_on_result: bool,
}

impl Session {
    /// A blank board of the given pixel size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { engine: EngineCore::new(width, height), bindings: VariableBindings::new(), epoch: 0, clear_ink_on_result: true }
    }

    /// A blank board honoring the behavioral flags in `config`.
    #[must_use]
    pub fn with_config(width: u32, height: u32, config: &BoardConfig) -> Self {
        Self { clear_ink_on_result: config.clear_ink_on_result, ..Self::new(width, height) }
    }

    // --- Accessors ---

    #[must_use]
    pub fn engine(&self) -> &EngineCore {
        &self.engine
    }

    /// Mutable engine access for pointer routing.
    pub fn engine_mut(&mut self) -> &mut EngineCore {
        &mut self.engine
    }

    #[must_use]
    pub fn bindings(&self) -> &VariableBindings {
        &self.bindings
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        self.engine.labels()
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn toolbar_view(&self) -> ToolbarView {
        ToolbarView::from_engine(&self.engine)
    }

    // --- Commands ---

    /// Route a toolbar command.
    ///
    /// # Errors
    ///
    /// Only `Submit` can fail, when the bitmap cannot be encoded.
    pub fn dispatch(&mut self, command: ToolbarCommand) -> Result<Dispatch, SessionError> {
        let actions = match command {
            ToolbarCommand::Undo => self.engine.undo(),
            ToolbarCommand::Redo => self.engine.redo(),
            ToolbarCommand::Reset => self.reset(),
            ToolbarCommand::Submit => return Ok(Dispatch::Submit(self.prepare_submission()?)),
            ToolbarCommand::SetColor(color) => {
                self.engine.set_color(&color);
                Vec::new()
            }
            ToolbarCommand::SetBrushSize(size) => {
                self.engine.set_brush_size(size);
                Vec::new()
            }
            ToolbarCommand::ToggleEraser => {
                self.engine.toggle_eraser();
                Vec::new()
            }
        };
        Ok(Dispatch::Actions(actions))
    }

    /// Move a result label to where the user dropped it.
    pub fn drag_label(&mut self, index: usize, position: Point) -> bool {
        self.engine.drag_label(index, position)
    }

    /// Clear the board, history, labels and variables, and invalidate in-flight requests.
    pub fn reset(&mut self) -> Vec<Action> {
        self.epoch += 1;
        self.bindings.clear();
        tracing::debug!(epoch = self.epoch, "session reset");
        self.engine.reset()
    }

    // --- Recognition ---

    /// Capture the current drawing and bindings for sending.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Export`] if the bitmap cannot be encoded.
    pub fn prepare_submission(&self) -> Result<Submission, SessionError> {
        let image = export::png_data_url(&self.engine.surface.snapshot())?;
        let submission = Submission {
            epoch: self.epoch,
            request_id: Uuid::new_v4(),
            request: CalculateRequest { image, dict_of_vars: self.bindings.clone() },
            ink: self.engine.ink_bounds(),
        };
        tracing::debug!(
            epoch = submission.epoch,
            request_id = %submission.request_id,
            vars = self.bindings.len(),
            "prepared submission"
        );
        Ok(submission)
    }

    /// Apply the outcome of a submission.
    ///
    /// Responses from before the latest reset are dropped. On failure the
    /// board, labels and bindings are left untouched. Labels are anchored on
    /// the submitted ink; the clear that follows is one undoable step, so ink
    /// drawn while the request was in flight can be brought back.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Recognize`] with the request's error for a
    /// current-epoch failure.
    pub fn complete_submission(
        &mut self,
        submission: &Submission,
        result: Result<Vec<ResultItem>, RecognizeError>,
    ) -> Result<SubmitOutcome, SessionError> {
        if submission.epoch != self.epoch {
            tracing::warn!(
                request_id = %submission.request_id,
                epoch = submission.epoch,
                current = self.epoch,
                "discarding response from before reset"
            );
            return Ok(SubmitOutcome::Stale { epoch: submission.epoch, current: self.epoch });
        }

        let items = result.inspect_err(|e| {
            tracing::warn!(
                request_id = %submission.request_id,
                error = %e,
                code = e.error_code(),
                "recognition failed"
            );
        })?;

        let assignments = self.bindings.apply_assignments(&items);
        let labels_added = self.engine.place_labels_for(submission.ink, items.iter().map(ResultItem::label_text));
        if labels_added > 0 && self.clear_ink_on_result {
            self.engine.clear_ink();
        }
        tracing::info!(
            request_id = %submission.request_id,
            labels_added,
            assignments,
            "recognition applied"
        );
        Ok(SubmitOutcome::Applied { labels_added, assignments })
    }

    /// Prepare, send, and apply one submission.
    ///
    /// For hosts that can hold the session across the request; otherwise use
    /// [`Session::prepare_submission`] and [`Session::complete_submission`].
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the recognizer fails.
    pub async fn submit<R>(&mut self, recognizer: &R) -> Result<SubmitOutcome, SessionError>
    where
        R: Recognizer + ?Sized,
    {
        let submission = self.prepare_submission()?;
        let result = recognizer.recognize(&submission.request).await;
        self.complete_submission(&submission, result)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
