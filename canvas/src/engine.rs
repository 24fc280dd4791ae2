use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::geom::{InkBounds, Point};
use crate::history::History;
use crate::input::{InputState, PointerEvent, ToolState};
use crate::overlay::{Label, Overlay};
use crate::render;
use crate::surface::Surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The bitmap changed and should be blitted.
    RenderNeeded,
    /// Undo/redo availability changed; toolbar buttons may need refreshing.
    HistoryChanged { can_undo: bool, can_redo: bool },
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub surface: Surface,
    pub history: History,
    pub tools: ToolState,
    pub input: InputState,
    pub overlay: Overlay,
    /// Client-space position of the canvas element's top-left corner.
    pub canvas_origin: Point,
}

impl EngineCore {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Surface::new(width, height),
            history: History::new(),
            tools: ToolState::default(),
            input: InputState::Idle,
            overlay: Overlay::new(),
            canvas_origin: Point::default(),
        }
    }

    /// Record where the canvas sits in client space (its bounding rect's left/top).
    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.canvas_origin = origin;
    }

    // --- Input events ---

    /// Start a stroke: snapshot for undo, then open a path at the pointer.
    pub fn on_pointer_down(&mut self, event: PointerEvent) -> Vec<Action> {
        if self.input.is_drawing() {
            self.surface.end_stroke();
        }
        let point = event.client.relative_to(self.canvas_origin);
        self.history.record_before_stroke(&self.surface);
        self.surface.begin_stroke(point);
        self.input = InputState::Drawing;
        vec![self.history_changed()]
    }

    /// Extend the stroke in progress. Ignored while idle.
    pub fn on_pointer_move(&mut self, event: PointerEvent) -> Vec<Action> {
        if !self.input.is_drawing() {
            return Vec::new();
        }
        let point = event.client.relative_to(self.canvas_origin);
        let width = self.tools.effective_width(event.pressure);
        let drawn = self.surface.extend_stroke(point, width, self.tools.paint());
        if drawn { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// Finish the stroke in progress. Ignored while idle.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.input.is_drawing() {
            self.surface.end_stroke();
            self.input = InputState::Idle;
        }
        Vec::new()
    }

    /// The pointer left the canvas; treated exactly like pointer-up.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    // --- History ---

    /// Step back one stroke. No-op on an empty history.
    pub fn undo(&mut self) -> Vec<Action> {
        match self.history.undo(&mut self.surface) {
            Ok(true) => vec![Action::RenderNeeded, self.history_changed()],
            Ok(false) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "undo failed");
                Vec::new()
            }
        }
    }

    /// Re-apply the last undone stroke. No-op on an empty redo stack.
    pub fn redo(&mut self) -> Vec<Action> {
        match self.history.redo(&mut self.surface) {
            Ok(true) => vec![Action::RenderNeeded, self.history_changed()],
            Ok(false) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "redo failed");
                Vec::new()
            }
        }
    }

    // --- Tool state ---

    /// Select a swatch; unknown colors are ignored.
    pub fn set_color(&mut self, color: &str) -> bool {
        self.tools.set_color(color)
    }

    /// Set the brush size, clamped to `1..=20`.
    pub fn set_brush_size(&mut self, size: i64) {
        self.tools.set_brush_size(size);
    }

    pub fn toggle_eraser(&mut self) {
        self.tools.toggle_eraser();
    }

    // --- Overlay ---

    /// Place a batch of result labels at the position derived from the current ink.
    ///
    /// Returns the number of labels appended.
    pub fn place_labels<I>(&mut self, texts: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        self.place_labels_for(self.surface.ink_bounds(), texts)
    }

    /// Place a batch of result labels for ink captured earlier (e.g. when it was submitted).
    pub fn place_labels_for<I>(&mut self, bounds: Option<InkBounds>, texts: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        self.overlay.place_from_ink(
            bounds,
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        );
        let mut appended = 0;
        for text in texts {
            self.overlay.append_label(text);
            appended += 1;
        }
        appended
    }

    /// Move a label to a user-chosen position.
    pub fn drag_label(&mut self, index: usize, position: Point) -> bool {
        self.overlay.drag_to(index, position)
    }

    // --- Clearing ---

    /// Wipe the ink as one undoable step. Labels stay. A blank surface is left alone.
    pub fn clear_ink(&mut self) -> Vec<Action> {
        if self.surface.ink_bounds().is_none() {
            return Vec::new();
        }
        self.history.record_before_clear(&self.surface);
        self.surface.clear();
        vec![Action::RenderNeeded, self.history_changed()]
    }

    /// Full reset: blank bitmap, empty history, no labels, default anchor.
    pub fn reset(&mut self) -> Vec<Action> {
        self.surface.end_stroke();
        self.input = InputState::Idle;
        self.surface.clear();
        self.history.reset();
        self.overlay.reset();
        vec![Action::RenderNeeded, self.history_changed()]
    }

    // --- Queries ---

    #[must_use]
    pub fn ink_bounds(&self) -> Option<InkBounds> {
        self.surface.ink_bounds()
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        self.overlay.labels()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }

    fn history_changed(&self) -> Action {
        Action::HistoryChanged { can_undo: self.history.can_undo(), can_redo: self.history.can_redo() }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine sized to the canvas element's current pixel dimensions.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let core = EngineCore::new(canvas.width(), canvas.height());
        Self { canvas, core }
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, event: PointerEvent) -> Vec<Action> {
        self.core.on_pointer_down(event)
    }

    pub fn on_pointer_move(&mut self, event: PointerEvent) -> Vec<Action> {
        self.core.on_pointer_move(event)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Draw the current bitmap to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or rejects the image data.
    pub fn render(&self) -> Result<(), JsValue> {
        render::blit(&self.canvas, &self.core.surface)
    }
}
