//! Exact-match index encoding.

use crate::color::Rgb;
use crate::palette::Palette;

/// Palette indices for a dithered image, one `u8` per pixel in row-major
/// order. Every value is in `0..6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    indices: Vec<u8>,
    width: usize,
    height: usize,
}

impl IndexedImage {
    /// Encode finalized output colors as palette indices.
    ///
    /// # Panics
    ///
    /// Panics if a pixel is not exactly one of the palette's output colors,
    /// or if `pixels.len() != width * height`. Dithered output is closed over
    /// the output palette, so either case is a bug upstream rather than bad
    /// input.
    pub fn encode(pixels: &[Rgb], width: usize, height: usize, palette: &Palette) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{}={})",
            pixels.len(),
            width,
            height,
            width * height,
        );
        let indices = pixels
            .iter()
            .enumerate()
            .map(|(i, &px)| match palette.index_of(px) {
                Some(idx) => idx as u8,
                None => panic!(
                    "pixel {} at ({}, {}) is {}, not an output palette color",
                    i,
                    i % width,
                    i / width,
                    px
                ),
            })
            .collect();
        Self {
            indices,
            width,
            height,
        }
    }

    /// Palette indices in row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Consume the image and return its indices.
    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// One row of indices.
    pub fn row(&self, y: usize) -> &[u8] {
        &self.indices[y * self.width..(y + 1) * self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::SPECTRA6_OUTPUT;

    #[test]
    fn test_encode_every_output_color() {
        let palette = Palette::spectra6();
        let img = IndexedImage::encode(&SPECTRA6_OUTPUT, 3, 2, &palette);
        assert_eq!(img.indices(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(img.row(1), &[3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "not an output palette color")]
    fn test_encode_rejects_reference_color() {
        let palette = Palette::spectra6();
        let pixels = [palette.color_at(0), palette.reference_at(1)];
        let _ = IndexedImage::encode(&pixels, 2, 1, &palette);
    }

    #[test]
    #[should_panic(expected = "must match width * height")]
    fn test_encode_size_mismatch() {
        let palette = Palette::spectra6();
        let _ = IndexedImage::encode(&[palette.color_at(0)], 2, 1, &palette);
    }
}
