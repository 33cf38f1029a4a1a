//! Input pixel normalization.

use super::rgb::Rgb;

/// A decoded source pixel the ditherer can consume.
///
/// Implementations normalize their channels to the 8-bit scale as `f64`,
/// which is what the working buffer accumulates error in. Alpha is not part
/// of this contract; composite or drop it before dithering.
pub trait SourcePixel {
    /// Red, green and blue on the 0..=255 scale.
    fn channels(&self) -> [f64; 3];
}

impl SourcePixel for Rgb {
    #[inline]
    fn channels(&self) -> [f64; 3] {
        self.to_f64()
    }
}

impl SourcePixel for [u8; 3] {
    #[inline]
    fn channels(&self) -> [f64; 3] {
        [self[0] as f64, self[1] as f64, self[2] as f64]
    }
}

/// 16-bit samples keep their high byte.
impl SourcePixel for [u16; 3] {
    #[inline]
    fn channels(&self) -> [f64; 3] {
        [
            (self[0] >> 8) as f64,
            (self[1] >> 8) as f64,
            (self[2] >> 8) as f64,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_sources_agree() {
        let rgb = Rgb::new(12, 200, 255);
        assert_eq!(rgb.channels(), [12u8, 200, 255].channels());
        assert_eq!(rgb.channels(), [12.0, 200.0, 255.0]);
    }

    #[test]
    fn test_u16_keeps_high_byte() {
        assert_eq!([0xFFFFu16, 0x8000, 0x00FF].channels(), [255.0, 128.0, 0.0]);
    }
}
