//! Input model: tool state, pointer events, and the stroke state machine.
//!
//! `ToolState` is what the toolbar edits and what every pointer-move reads.
//! `InputState` tracks whether a stroke is in progress between pointer-down
//! and pointer-up. The transitions themselves live on
//! [`crate::engine::EngineCore`], which owns the surface and history they drive.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::color::{self, DEFAULT_COLOR, Rgba};
use crate::consts::{DEFAULT_BRUSH_SIZE, DEFAULT_PRESSURE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::geom::Point;
use crate::surface::Paint;

/// Current brush settings, mutated only by toolbar actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolState {
    /// Parsed stroke color.
    pub color: Rgba,
    /// The swatch string the color was selected from.
    pub color_name: String,
    /// Brush diameter in pixels, always within `MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE`.
    pub brush_size: u8,
    /// Whether strokes currently erase instead of drawing.
    pub erasing: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: Rgba::opaque(255, 255, 255),
            color_name: DEFAULT_COLOR.to_string(),
            brush_size: DEFAULT_BRUSH_SIZE,
            erasing: false,
        }
    }
}

impl ToolState {
    /// Select a swatch. Unrecognized colors are ignored and return `false`.
    ///
    /// Picking a color also leaves eraser mode.
    pub fn set_color(&mut self, raw: &str) -> bool {
        let parsed = match color::parse_color(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(color = raw, error = %e, "ignoring unrecognized color");
                return false;
            }
        };
        self.color = parsed;
        self.color_name = raw.trim().to_string();
        self.erasing = false;
        true
    }

    /// Set the brush size, clamped to the supported range.
    pub fn set_brush_size(&mut self, size: i64) {
        let clamped = size.clamp(i64::from(MIN_BRUSH_SIZE), i64::from(MAX_BRUSH_SIZE));
        self.brush_size = u8::try_from(clamped).unwrap_or(DEFAULT_BRUSH_SIZE);
    }

    /// Flip eraser mode.
    pub fn toggle_eraser(&mut self) {
        self.erasing = !self.erasing;
    }

    /// What the next segment writes.
    #[must_use]
    pub fn paint(&self) -> Paint {
        if self.erasing { Paint::Erase } else { Paint::Color(self.color) }
    }

    /// Stroke width for a pointer sample with the given pressure.
    #[must_use]
    pub fn effective_width(&self, pressure: Option<f64>) -> f64 {
        f64::from(self.brush_size) * normalize_pressure(pressure)
    }
}

/// Map a device-reported pressure into `(0, 1]`.
///
/// Devices that report no pressure, zero, or garbage are treated as full pressure.
#[must_use]
pub fn normalize_pressure(pressure: Option<f64>) -> f64 {
    match pressure {
        Some(p) if p.is_finite() && p > 0.0 => p.min(1.0),
        _ => DEFAULT_PRESSURE,
    }
}

/// A pointer sample as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in client (viewport) coordinates.
    pub client: Point,
    /// Reported pressure in `0..=1`, if the device provides one.
    pub pressure: Option<f64>,
}

impl PointerEvent {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { client: Point::new(x, y), pressure: None }
    }

    #[must_use]
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }
}

/// Internal state for the stroke state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No stroke in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A stroke is in progress; the surface's pen holds its position.
    Drawing,
}

impl InputState {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing)
    }
}
