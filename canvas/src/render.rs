//! Rendering: copies the surface bitmap onto the browser canvas.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the surface and produces pixels; it does not mutate any engine state.
//! Labels are DOM elements positioned by the host, so nothing here draws them.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::surface::Surface;

/// Replace the canvas content with the surface bitmap.
///
/// # Errors
///
/// Returns `Err` if the 2D context is unavailable or the image data is rejected.
pub fn blit(canvas: &HtmlCanvasElement, surface: &Surface) -> Result<(), JsValue> {
    let ctx = context_2d(canvas)?;
    let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(surface.pixels()), surface.width(), surface.height())?;
    ctx.put_image_data(&image, 0.0, 0.0)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}
