use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::*;
use crate::color::Rgba;
use crate::geom::Point;
use crate::surface::{Paint, Surface};

fn drawn_surface() -> Surface {
    let mut s = Surface::new(12, 8);
    s.begin_stroke(Point::new(1.0, 4.0));
    s.extend_stroke(Point::new(10.0, 4.0), 2.0, Paint::Color(Rgba([255, 0, 0, 255])));
    s.end_stroke();
    s
}

#[test]
fn png_bytes_decode_to_same_pixels() {
    let snap = drawn_surface().snapshot();
    let bytes = encode_png(&snap).unwrap();

    let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8();
    assert_eq!(decoded.width(), 12);
    assert_eq!(decoded.height(), 8);
    assert_eq!(decoded.as_raw().as_slice(), snap.pixels());
}

#[test]
fn data_url_has_png_prefix_and_valid_base64() {
    let snap = drawn_surface().snapshot();
    let url = png_data_url(&snap).unwrap();
    let payload = url.strip_prefix(PNG_DATA_URL_PREFIX).unwrap();
    let bytes = STANDARD.decode(payload).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn blank_surface_still_encodes() {
    let snap = Surface::new(4, 4).snapshot();
    assert!(png_data_url(&snap).is_ok());
}

