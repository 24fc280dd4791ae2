//! Canvas-space geometry: points and ink bounds.
//!
//! All coordinates are CSS pixels relative to the top-left corner of the
//! canvas element, which is also the bitmap's pixel grid (one CSS pixel per
//! bitmap pixel).

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate a client-space point into the space whose origin is `origin`.
    #[must_use]
    pub fn relative_to(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }

    /// Squared distance from this point to the segment `a`–`b`.
    #[must_use]
    pub fn dist_sq_to_segment(self, a: Point, b: Point) -> f64 {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq > 0.0 {
            (((self.x - a.x) * dx + (self.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (px, py) = (a.x + t * dx, a.y + t * dy);
        (self.x - px) * (self.x - px) + (self.y - py) * (self.y - py)
    }
}

/// Inclusive pixel bounds of every non-transparent pixel on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InkBounds {
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

impl InkBounds {
    /// Bounds covering a single pixel.
    #[must_use]
    pub fn at(x: u32, y: u32) -> Self {
        Self { min_x: x, max_x: x, min_y: y, max_y: y }
    }

    /// Grow the bounds to include pixel `(x, y)`.
    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }
}
