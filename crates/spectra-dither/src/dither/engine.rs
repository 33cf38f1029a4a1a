//! The raster-order error diffusion pass.

use crate::color::{Rgb, SourcePixel};
use crate::palette::Palette;

use super::buffer::{clamp_channel, WorkBuffer};
use super::kernel::Kernel;

/// Total absolute error below which nothing is diffused.
pub const SKIP_THRESHOLD: f64 = 8.0;

/// Every channel above this counts as near-white.
pub const NEAR_WHITE: f64 = 245.0;

/// Every channel below this counts as near-black.
pub const NEAR_BLACK: f64 = 10.0;

/// What happened to a pixel's quantization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Diffusion {
    /// Error was spread to the kernel's neighbors.
    Spread,
    /// Total error was under [`SKIP_THRESHOLD`].
    BelowThreshold,
    /// Source and output were both near-white or both near-black.
    Saturated,
}

/// Dither `image` against `palette` with the given kernel.
///
/// Pixels are visited top-to-bottom, left-to-right. Each resolved pixel is
/// final; error only ever flows to pixels later in raster order. The source
/// slice is not modified.
///
/// # Panics
///
/// Panics if `image.len() != width * height`.
pub fn dither_with_kernel<P: SourcePixel>(
    image: &[P],
    width: usize,
    height: usize,
    palette: &Palette,
    kernel: &Kernel,
) -> Vec<Rgb> {
    let mut buf = WorkBuffer::from_source(image, width, height);
    let mut output = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let (idx, _) = quantize_pixel(&mut buf, x, y, palette, kernel);
            output.push(palette.color_at(idx));
        }
    }

    output
}

/// Resolve one pixel and diffuse its error.
///
/// Returns the chosen palette index and what was done with the error.
pub(crate) fn quantize_pixel(
    buf: &mut WorkBuffer,
    x: usize,
    y: usize,
    palette: &Palette,
    kernel: &Kernel,
) -> (usize, Diffusion) {
    let old = buf.get(x, y).map(clamp_channel);
    let idx = palette.nearest_index(Rgb::from_clamped(old));
    let new = palette.color_at(idx).to_f64();

    let error = [old[0] - new[0], old[1] - new[1], old[2] - new[2]];
    let total_error: f64 = error.iter().map(|e| e.abs()).sum();
    if total_error < SKIP_THRESHOLD {
        return (idx, Diffusion::BelowThreshold);
    }

    let near_white = |c: [f64; 3]| c.iter().all(|&v| v > NEAR_WHITE);
    let near_black = |c: [f64; 3]| c.iter().all(|&v| v < NEAR_BLACK);
    if (near_white(old) && near_white(new)) || (near_black(old) && near_black(new)) {
        return (idx, Diffusion::Saturated);
    }

    for (dx, dy, weight) in kernel.fractions() {
        buf.add_clamped(x as i64 + dx as i64, y as i64 + dy as i64, error, weight);
    }
    (idx, Diffusion::Spread)
}
