//! Color parsing for toolbar swatches.
//!
//! Swatches arrive as CSS color strings. Only the forms the toolbar actually
//! emits are understood: `#rgb`, `#rrggbb`, and `rgb(r, g, b)`. Anything else
//! is rejected with a [`ColorError`] the caller can log and ignore.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::num::ParseIntError;

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Opaque color from RGB channels.
    #[must_use]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Alpha channel.
    #[must_use]
    pub fn alpha(self) -> u8 {
        self.0[3]
    }
}

/// Pixel value of an empty (erased or cleared) canvas.
pub const BACKGROUND: Rgba = Rgba([0, 0, 0, 0]);

/// Stroke color at session start.
pub const DEFAULT_COLOR: &str = "rgb(255, 255, 255)";

/// Swatches offered by the toolbar, in display order.
pub const SWATCHES: &[&str] = &[
    "rgb(255, 255, 255)",
    "#ee3333",
    "#e64980",
    "#be4bdb",
    "#893200",
    "#228be6",
    "#3333ee",
    "#40c057",
    "#00aa00",
    "#fab005",
    "#fd7e14",
];

/// Why a swatch string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("unsupported color syntax '{0}'")]
    Syntax(String),

    #[error("bad color channel '{digits}': {source}")]
    Channel { digits: String, source: ParseIntError },
}

/// Parse a swatch string into an opaque color.
///
/// # Errors
///
/// Returns [`ColorError::Syntax`] for forms other than `#rgb`, `#rrggbb` and
/// `rgb(r, g, b)`, and [`ColorError::Channel`] for a channel that is not a
/// valid hex or `0..=255` value.
pub fn parse_color(raw: &str) -> Result<Rgba, ColorError> {
    let trimmed = raw.trim();
    let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
        parse_hex_rgb(hex)
    } else if let Some(inner) = trimmed.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
        parse_css_rgb(inner)
    } else {
        None
    };
    let (r, g, b) = parsed.ok_or_else(|| ColorError::Syntax(trimmed.to_string()))??;
    Ok(Rgba::opaque(r, g, b))
}

type Channels = Result<(u8, u8, u8), ColorError>;

/// `RGB` or `RRGGBB` hex digits. `None` for any other shape.
fn parse_hex_rgb(hex: &str) -> Option<Channels> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let [r, g, b] = match hex.len() {
        3 => [hex[0..1].repeat(2), hex[1..2].repeat(2), hex[2..3].repeat(2)],
        6 => [hex[0..2].to_string(), hex[2..4].to_string(), hex[4..6].to_string()],
        _ => return None,
    };
    Some(channels([&r, &g, &b], 16))
}

/// `r, g, b` decimal channels. `None` unless there are exactly three.
fn parse_css_rgb(inner: &str) -> Option<Channels> {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    let &[r, g, b] = parts.as_slice() else {
        return None;
    };
    Some(channels([r, g, b], 10))
}

fn channels([r, g, b]: [&str; 3], radix: u32) -> Channels {
    Ok((channel(r, radix)?, channel(g, radix)?, channel(b, radix)?))
}

fn channel(digits: &str, radix: u32) -> Result<u8, ColorError> {
    u8::from_str_radix(digits, radix).map_err(|source| ColorError::Channel { digits: digits.to_string(), source })
}
