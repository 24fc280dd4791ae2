//! Shared numeric constants for the canvas crate.

// ── Tool defaults ───────────────────────────────────────────────

/// Smallest brush size the toolbar can select, in pixels.
pub const MIN_BRUSH_SIZE: u8 = 1;

/// Largest brush size the toolbar can select, in pixels.
pub const MAX_BRUSH_SIZE: u8 = 20;

/// Brush size at session start.
pub const DEFAULT_BRUSH_SIZE: u8 = 3;

/// Pressure used when the device reports none.
pub const DEFAULT_PRESSURE: f64 = 1.0;

// ── Rasterization ───────────────────────────────────────────────

/// Lower bound on the stroke radius so hairline strokes still cover a pixel.
pub const MIN_STROKE_RADIUS_PX: f64 = 0.5;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

// ── Overlay placement ───────────────────────────────────────────

/// Horizontal compression applied to the ink extent sum when placing labels.
pub const LABEL_X_DIVISOR: f64 = 9.5;

/// Vertical divisor applied to the ink extent sum when placing labels.
pub const LABEL_Y_DIVISOR: f64 = 2.0;

/// Label anchor before any result has been placed, in canvas pixels.
pub const DEFAULT_LABEL_X: f64 = 10.0;

/// Label anchor before any result has been placed, in canvas pixels.
pub const DEFAULT_LABEL_Y: f64 = 200.0;
