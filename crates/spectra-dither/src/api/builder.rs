//! SpectraDitherer builder -- the primary entry point for the crate.

use crate::color::SourcePixel;
use crate::dither::{dither_with_kernel, DitherMethod};
use crate::output::DitheredImage;
use crate::palette::Palette;

/// High-level dithering builder for Spectra 6 panels.
///
/// - Constructor requires a [`Palette`], so there is no unconfigured state
/// - Configuration methods consume and return `self`
/// - [`dither()`](Self::dither) takes `&self`, so one ditherer can process
///   many images
///
/// # Example
///
/// ```
/// use spectra_dither::{DitherMethod, Palette, Rgb, SpectraDitherer};
///
/// let ditherer = SpectraDitherer::new(Palette::spectra6())
///     .method(DitherMethod::FloydSteinberg);
///
/// let pixels = vec![Rgb::new(128, 128, 128); 4];
/// let result = ditherer.dither(&pixels, 2, 2);
///
/// assert_eq!(result.width(), 2);
/// assert_eq!(result.to_indexed().indices(), &[2, 5, 5, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct SpectraDitherer {
    palette: Palette,
    method: DitherMethod,
}

impl SpectraDitherer {
    /// Create a ditherer using the Stucki kernel.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            method: DitherMethod::default(),
        }
    }

    /// Set the dithering method.
    #[inline]
    pub fn method(mut self, method: DitherMethod) -> Self {
        self.method = method;
        self
    }

    /// The configured method.
    #[inline]
    pub fn current_method(&self) -> DitherMethod {
        self.method
    }

    /// The configured palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Dither row-major source pixels into a [`DitheredImage`].
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn dither<P: SourcePixel>(&self, pixels: &[P], width: usize, height: usize) -> DitheredImage {
        let output = dither_with_kernel(pixels, width, height, &self.palette, self.method.kernel());
        DitheredImage::new(output, width, height, self.palette.clone())
    }
}

impl Default for SpectraDitherer {
    fn default() -> Self {
        Self::new(Palette::spectra6())
    }
}
