//! DitheredImage struct holding the finalized output buffer.
//!
//! The engine writes one output-palette color per pixel. Indices and the
//! reference-color preview are derived from that buffer on demand.

use super::indexed::IndexedImage;
use crate::color::Rgb;
use crate::palette::Palette;

/// The output of a dithering pass.
///
/// Every pixel equals one of the palette's six output colors.
///
/// # Example
///
/// ```
/// use spectra_dither::{DitheredImage, Palette};
///
/// let palette = Palette::spectra6();
/// let pixels = vec![palette.color_at(0), palette.color_at(1)];
/// let image = DitheredImage::new(pixels, 2, 1, palette);
///
/// assert_eq!(image.to_indexed().indices(), &[0, 1]);
/// assert_eq!(image.to_rgb_bytes(), vec![0, 0, 0, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitheredImage {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl DitheredImage {
    /// Wrap an output buffer.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixels length ({}) must match width * height ({}x{}={})",
            pixels.len(),
            width,
            height,
            width * height,
        );
        Self {
            pixels,
            width,
            height,
            palette,
        }
    }

    /// Output colors in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Output color at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the palette used for this image.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Map every pixel to its palette index.
    ///
    /// # Panics
    ///
    /// Panics if a pixel is not an output palette color; see
    /// [`IndexedImage::encode`].
    pub fn to_indexed(&self) -> IndexedImage {
        IndexedImage::encode(&self.pixels, self.width, self.height, &self.palette)
    }

    /// Flat `[R, G, B, ...]` bytes of the output colors.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }

    /// Flat `[R, G, B, ...]` bytes using the measured reference colors.
    ///
    /// Approximates how the image will look on the physical panel.
    pub fn to_reference_rgb_bytes(&self) -> Vec<u8> {
        self.to_indexed()
            .indices()
            .iter()
            .flat_map(|&idx| self.palette.reference_at(idx as usize).to_bytes())
            .collect()
    }
}
