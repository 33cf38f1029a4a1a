//! Floating-point working buffer for error accumulation.

use crate::color::SourcePixel;

/// Full-image buffer of floating channel accumulators.
///
/// Every value is kept inside `[0, 255]`: the initial load clamps, and
/// [`add_clamped`](Self::add_clamped) clamps after each addition. Storage is
/// `f64` so fractional error shares are not rounded away before the pixel is
/// visited.
#[derive(Debug, Clone)]
pub struct WorkBuffer {
    pixels: Vec<[f64; 3]>,
    width: usize,
    height: usize,
}

impl WorkBuffer {
    /// Load a buffer from source pixels in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `image.len() != width * height`.
    pub fn from_source<P: SourcePixel>(image: &[P], width: usize, height: usize) -> Self {
        assert_eq!(
            image.len(),
            width * height,
            "image has {} pixels, expected {}x{} = {}",
            image.len(),
            width,
            height,
            width * height
        );
        let pixels = image
            .iter()
            .map(|p| p.channels().map(clamp_channel))
            .collect();
        Self {
            pixels,
            width,
            height,
        }
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

    /// Current channel values at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [f64; 3] {
        self.pixels[y * self.width + x]
    }

    /// Add `error * weight` to the pixel at `(x, y)` and clamp the result.
    ///
    /// Offsets outside the image are dropped silently, which is how kernel
    /// taps past an edge are handled.
    #[inline]
    pub fn add_clamped(&mut self, x: i64, y: i64, error: [f64; 3], weight: f64) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let px = &mut self.pixels[y as usize * self.width + x as usize];
        for c in 0..3 {
            px[c] = clamp_channel(px[c] + error[c] * weight);
        }
    }
}

/// Clamp a channel value to `[0, 255]`.
#[inline]
pub(crate) fn clamp_channel(value: f64) -> f64 {
    value.clamp(0.0, 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_load_preserves_values() {
        let img = [Rgb::new(1, 2, 3), Rgb::new(250, 128, 0)];
        let buf = WorkBuffer::from_source(&img, 2, 1);
        assert_eq!(buf.get(0, 0), [1.0, 2.0, 3.0]);
        assert_eq!(buf.get(1, 0), [250.0, 128.0, 0.0]);
    }

    #[test]
    fn test_add_clamps_immediately() {
        let img = [Rgb::new(250, 5, 100)];
        let mut buf = WorkBuffer::from_source(&img, 1, 1);
        buf.add_clamped(0, 0, [42.0, -42.0, 21.0], 0.5);
        assert_eq!(buf.get(0, 0), [255.0, 0.0, 110.5]);
    }

    #[test]
    fn test_add_out_of_bounds_is_dropped() {
        let img = [Rgb::new(10, 10, 10); 4];
        let mut buf = WorkBuffer::from_source(&img, 2, 2);
        buf.add_clamped(2, 0, [50.0; 3], 1.0);
        buf.add_clamped(-1, 1, [50.0; 3], 1.0);
        buf.add_clamped(0, 2, [50.0; 3], 1.0);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(buf.get(x, y), [10.0; 3]);
            }
        }
    }

    #[test]
    #[should_panic(expected = "expected 2x2")]
    fn test_size_mismatch_panics() {
        let img = [Rgb::new(0, 0, 0); 3];
        let _ = WorkBuffer::from_source(&img, 2, 2);
    }
}
