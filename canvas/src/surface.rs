//! Raster surface: the single RGBA bitmap strokes are drawn into.
//!
//! The surface owns the pixel buffer and the position of the stroke in
//! progress. It knows nothing about undo; [`crate::history::History`] takes
//! snapshots of it from the outside. Segments are rasterized as capsules (every
//! pixel whose center lies within half the stroke width of the segment), which
//! gives round caps and round joins so fast pointer motion leaves no gaps.
//! Pixels are written, never blended.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::color::{BACKGROUND, Rgba};
use crate::consts::{BYTES_PER_PIXEL, MIN_STROKE_RADIUS_PX};
use crate::geom::{InkBounds, Point};

/// What a segment writes into the bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Ink of the given color.
    Color(Rgba),
    /// The background pixel.
    Erase,
}

impl Paint {
    /// The pixel value this paint writes.
    #[must_use]
    pub fn pixel(self) -> Rgba {
        match self {
            Self::Color(c) => c,
            Self::Erase => BACKGROUND,
        }
    }
}

/// Errors produced by surface operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// A snapshot taken from a surface of a different size was restored.
    #[error("snapshot is {got_width}x{got_height}, surface is {width}x{height}")]
    DimensionMismatch { width: u32, height: u32, got_width: u32, got_height: u32 },
}

/// Immutable full-bitmap capture used for undo/redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Box<[u8]>,
}

impl Snapshot {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Mutable RGBA bitmap plus the stroke in progress.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    /// End of the last drawn segment (or the stroke origin) while a stroke is active.
    pen: Option<Point>,
}

impl Surface {
    /// Create a surface filled with the background pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * BYTES_PER_PIXEL;
        let mut surface = Self { width, height, pixels: vec![0; len], pen: None };
        surface.clear();
        surface
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the bitmap.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Rgba([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]))
    }

    /// Where the next segment starts, if a stroke is in progress.
    #[must_use]
    pub fn pen(&self) -> Option<Point> {
        self.pen
    }

    // --- Stroke lifecycle ---

    /// Start a new path at `point`. Draws nothing; width is given per segment.
    pub fn begin_stroke(&mut self, point: Point) {
        self.pen = Some(point);
    }

    /// Draw a segment from the pen position to `point` and move the pen there.
    ///
    /// Returns `false` (and draws nothing) when no stroke is active.
    pub fn extend_stroke(&mut self, point: Point, width: f64, paint: Paint) -> bool {
        let Some(from) = self.pen else {
            return false;
        };
        self.stamp_segment(from, point, width, paint.pixel());
        self.pen = Some(point);
        true
    }

    /// Finish the current path.
    pub fn end_stroke(&mut self) {
        self.pen = None;
    }

    // --- Whole-bitmap operations ---

    /// Capture the full bitmap.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { width: self.width, height: self.height, pixels: self.pixels.clone().into_boxed_slice() }
    }

    /// Replace every pixel with the snapshot's content.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::DimensionMismatch`] if the snapshot was taken
    /// from a surface of a different size.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SurfaceError> {
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(SurfaceError::DimensionMismatch {
                width: self.width,
                height: self.height,
                got_width: snapshot.width,
                got_height: snapshot.height,
            });
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
        Ok(())
    }

    /// Set every pixel to the background.
    pub fn clear(&mut self) {
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&BACKGROUND.0);
        }
    }

    /// Bounds of every pixel with non-zero alpha, or `None` on a blank surface.
    #[must_use]
    pub fn ink_bounds(&self) -> Option<InkBounds> {
        let mut bounds: Option<InkBounds> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.pixels[self.offset(x, y) + 3] == 0 {
                    continue;
                }
                match bounds.as_mut() {
                    Some(b) => b.include(x, y),
                    None => bounds = Some(InkBounds::at(x, y)),
                }
            }
        }
        bounds
    }

    // --- Rasterization ---

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    fn stamp_segment(&mut self, a: Point, b: Point, width: f64, color: Rgba) {
        let radius = (width / 2.0).max(MIN_STROKE_RADIUS_PX);
        let Some((x0, x1)) = pixel_span(a.x.min(b.x) - radius, a.x.max(b.x) + radius, self.width) else {
            return;
        };
        let Some((y0, y1)) = pixel_span(a.y.min(b.y) - radius, a.y.max(b.y) + radius, self.height) else {
            return;
        };
        let r_sq = radius * radius;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if center.dist_sq_to_segment(a, b) <= r_sq {
                    let i = self.offset(x, y);
                    self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.0);
                }
            }
        }
    }
}

/// Clip the continuous range `lo..hi` to pixel indices `0..extent`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_span(lo: f64, hi: f64, extent: u32) -> Option<(u32, u32)> {
    if extent == 0 || !lo.is_finite() || !hi.is_finite() || hi < 0.0 || lo >= f64::from(extent) {
        return None;
    }
    let first = lo.floor().max(0.0) as u32;
    let last = (hi.ceil() as u32).min(extent - 1);
    Some((first, last))
}
