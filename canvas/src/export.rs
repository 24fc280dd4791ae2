//! PNG export of bitmap snapshots for the recognition request.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ExtendedColorType;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;

use crate::surface::Snapshot;

/// Prefix of a base64 PNG data URL.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Errors produced while exporting a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("png encode failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Encode a snapshot as PNG bytes.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] if the encoder rejects the image.
pub fn encode_png(snapshot: &Snapshot) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        snapshot.pixels(),
        snapshot.width(),
        snapshot.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encode a snapshot as a `data:image/png;base64,…` URL.
///
/// # Errors
///
/// Propagates [`encode_png`] failures.
pub fn png_data_url(snapshot: &Snapshot) -> Result<String, ExportError> {
    let bytes = encode_png(snapshot)?;
    Ok(format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(bytes)))
}
