//! Assertion helpers for tests.

use std::path::Path;

use e1002_convert::rendering::decode_png;
use image::RgbImage;
use pretty_assertions::assert_eq;
use spectra_dither::{Palette, Rgb};

/// Assert the file is a 4-bit indexed PNG and return its header info
pub fn assert_indexed_png(path: &Path) -> (u32, u32) {
    let bytes = std::fs::read(path).expect("Failed to read output PNG");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "Not a PNG signature");

    let decoder = png::Decoder::new(std::io::Cursor::new(&bytes));
    let reader = decoder.read_info().expect("Output PNG should parse");
    let info = reader.info();
    assert_eq!(info.color_type, png::ColorType::Indexed);
    (info.width, info.height)
}

/// Decode an output PNG back to RGB
pub fn decode_output(path: &Path) -> RgbImage {
    let bytes = std::fs::read(path).expect("Failed to read output PNG");
    decode_png(&bytes).expect("Output PNG should decode")
}

/// Assert every pixel is one of the given colors
pub fn assert_only_colors(img: &RgbImage, colors: &[Rgb]) {
    for (x, y, p) in img.enumerate_pixels() {
        let c = Rgb::from_bytes(p.0);
        assert!(
            colors.contains(&c),
            "pixel ({x}, {y}) has color {c}, not in the palette"
        );
    }
}

/// Assert every pixel is a Spectra 6 output color
pub fn assert_spectra6_output(img: &RgbImage) {
    assert_only_colors(img, Palette::spectra6().output_colors());
}
