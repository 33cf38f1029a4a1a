#![allow(clippy::module_inception)]

//! spectra-dither: error diffusion dithering for six-color Spectra e-ink
//! panels
//!
//! The crate turns an RGB raster into an image made only of the panel's six
//! colors (black, white, blue, green, red, yellow), plus a parallel grid of
//! palette indices for compact storage.
//!
//! # Quick Start
//!
//! ```
//! use spectra_dither::{Palette, Rgb, SpectraDitherer};
//!
//! let ditherer = SpectraDitherer::new(Palette::spectra6());
//! let pixels = vec![Rgb::new(128, 128, 128); 4];
//! let result = ditherer.dither(&pixels, 2, 2);
//!
//! assert_eq!(result.to_indexed().indices(), &[2, 5, 5, 2]);
//! ```
//!
//! # Matching against measured colors
//!
//! The panel does not show the colors it is driven with. Pure red comes out
//! as a dull brick, white as light grey. [`Palette`] therefore holds two
//! tables: nearest-color matching uses the measured reference colors, the
//! result is written with the idealized output colors. Quantization error
//! is the difference between the pixel and the *output* color.
//!
//! Distance is squared Euclidean RGB. Ties go to the lower palette index.
//!
//! # The diffusion pass
//!
//! Pixels are visited in raster order over an `f64` working buffer:
//!
//! ```text
//! for each pixel (y outer, x inner):
//!     old    = clamp(buffer[x, y])
//!     idx    = nearest reference color to trunc(old)
//!     new    = output[idx]            -> written, final
//!     error  = old - new
//!     skip if |error| summed < 8
//!     skip if old and new are both near-white (> 245) or near-black (< 10)
//!     else   buffer[x+dx, y+dy] = clamp(buffer[..] + error * w)
//! ```
//!
//! Taps that fall outside the image are dropped. Every neighbor update
//! clamps to `[0, 255]` straight away, so accumulated error cannot drift.
//!
//! # Kernels
//!
//! Selected with [`DitherMethod`]:
//!
//! - Floyd-Steinberg (4 taps)
//! - Atkinson footprint (6 taps, 1/6 each)
//! - Stucki (12 taps, default)
//!
//! Every kernel propagates the full error.

pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;


pub use api::{DitherError, SpectraDitherer};
pub use color::{Rgb, SourcePixel};
pub use dither::{dither_with_kernel, DitherMethod, Kernel};
pub use output::{DitheredImage, IndexedImage};
pub use palette::{Palette, PaletteError, ParseColorError};
