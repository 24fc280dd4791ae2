//! Toolbar command surface and the read-only view it renders from.
//!
//! DESIGN
//! ======
//! The toolbar owns no logic. Buttons and sliders emit `ToolbarCommand`s that
//! the session routes; the toolbar redraws from a `ToolbarView` snapshot.

use canvas::color::SWATCHES;
use canvas::engine::EngineCore;
use serde::Serialize;

/// Everything the toolbar can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarCommand {
    Undo,
    Redo,
    Reset,
    /// Send the drawing for recognition.
    Submit,
    /// Pick a swatch; unrecognized colors are ignored.
    SetColor(String),
    /// Slider value; clamped to `1..=20`.
    SetBrushSize(i64),
    ToggleEraser,
}

/// State the toolbar renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolbarView {
    pub is_erasing: bool,
    pub brush_size: u8,
    pub color: String,
    pub swatches: &'static [&'static str],
    pub can_undo: bool,
    pub can_redo: bool,
}

impl ToolbarView {
    #[must_use]
    pub fn from_engine(engine: &EngineCore) -> Self {
        Self {
            is_erasing: engine.tools.erasing,
            brush_size: engine.tools.brush_size,
            color: engine.tools.color_name.clone(),
            swatches: SWATCHES,
            can_undo: engine.history.can_undo(),
            can_redo: engine.history.can_redo(),
        }
    }
}

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod tests;
