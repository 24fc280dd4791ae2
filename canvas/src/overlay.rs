//! Result labels drawn over the canvas.
//!
//! A batch of labels is placed at an anchor derived from the ink bounding box
//! when results arrive. Each label keeps its own position from then on, so
//! dragging one never moves the others and later batches never move earlier
//! labels.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use serde::Serialize;

use crate::consts::{DEFAULT_LABEL_X, DEFAULT_LABEL_Y, LABEL_X_DIVISOR, LABEL_Y_DIVISOR};
use crate::geom::{InkBounds, Point};

/// A rendered expression label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub position: Point,
}

/// Initial label position for a drawing with the given ink bounds.
///
/// The horizontal divisor biases labels toward the left of the ink rather than
/// its centroid; both coordinates are capped at the canvas size.
#[must_use]
pub fn compute_initial_position(bounds: InkBounds, canvas_width: f64, canvas_height: f64) -> Point {
    let x = (f64::from(bounds.min_x) + f64::from(bounds.max_x)) / LABEL_X_DIVISOR;
    let y = (f64::from(bounds.min_y) + f64::from(bounds.max_y)) / LABEL_Y_DIVISOR;
    Point::new(x.min(canvas_width), y.min(canvas_height))
}

/// Anchor position before any result has been placed.
#[must_use]
pub fn default_anchor() -> Point {
    Point::new(DEFAULT_LABEL_X, DEFAULT_LABEL_Y)
}

/// Ordered labels plus the anchor new labels are appended at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    anchor: Point,
    labels: Vec<Label>,
}

impl Default for Overlay {
    fn default() -> Self {
        Self { anchor: default_anchor(), labels: Vec::new() }
    }
}

impl Overlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the next appended label will appear.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Move the anchor to the position derived from `bounds`. Without ink the anchor stays put.
    pub fn place_from_ink(&mut self, bounds: Option<InkBounds>, canvas_width: f64, canvas_height: f64) {
        if let Some(b) = bounds {
            self.anchor = compute_initial_position(b, canvas_width, canvas_height);
        }
    }

    /// Append a label at the current anchor and return its index.
    pub fn append_label(&mut self, text: impl Into<String>) -> usize {
        self.labels.push(Label { text: text.into(), position: self.anchor });
        self.labels.len() - 1
    }

    /// Move one label to a user-chosen position. Returns `false` for an unknown index.
    pub fn drag_to(&mut self, index: usize, position: Point) -> bool {
        let Some(label) = self.labels.get_mut(index) else {
            return false;
        };
        label.position = position;
        true
    }

    /// Drop all labels and restore the default anchor.
    pub fn reset(&mut self) {
        self.labels.clear();
        self.anchor = default_anchor();
    }
}
