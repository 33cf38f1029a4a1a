//! 8-bit RGB color type
//!
//! Palette entries and finalized output pixels are plain 8-bit triples.
//! There is no alpha channel in the palette domain.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color with three 8-bit channels.
///
/// # Example
///
/// ```
/// use spectra_dither::Rgb;
///
/// let yellow: Rgb = "#FFFF00".parse().unwrap();
/// assert_eq!(yellow, Rgb::new(255, 255, 0));
/// assert_eq!(yellow.to_string(), "#FFFF00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from floating channel values.
    ///
    /// Each channel is clamped to `[0, 255]` and then truncated toward zero,
    /// so `127.9` becomes `127`.
    #[inline]
    pub fn from_clamped(channels: [f64; 3]) -> Self {
        Self::new(
            channels[0].clamp(0.0, 255.0) as u8,
            channels[1].clamp(0.0, 255.0) as u8,
            channels[2].clamp(0.0, 255.0) as u8,
        )
    }

    /// Channels as `f64`, in the same 0..=255 scale.
    #[inline]
    pub fn to_f64(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    /// Squared Euclidean distance to another color.
    ///
    /// No square root is taken; the ordering of distances is unchanged.
    #[inline]
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // #RGB expands each digit: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_clamped_truncates() {
        assert_eq!(
            Rgb::from_clamped([127.9, 0.4, 254.99]),
            Rgb::new(127, 0, 254)
        );
    }

    #[test]
    fn test_from_clamped_saturates() {
        assert_eq!(
            Rgb::from_clamped([-12.0, 300.0, 255.0]),
            Rgb::new(0, 255, 255)
        );
    }

    #[test]
    fn test_distance_sq() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(3, 4, 12);
        assert_eq!(a.distance_sq(b), 9 + 16 + 144);
        assert_eq!(b.distance_sq(a), a.distance_sq(b));
        assert_eq!(a.distance_sq(a), 0);
    }

    #[test]
    fn test_distance_sq_max() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.distance_sq(white), 3 * 255 * 255);
    }

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Rgb = "#FFFFFF".parse().unwrap();
        assert_eq!(white, Rgb::new(255, 255, 255));

        let measured_blue: Rgb = "2157BA".parse().unwrap();
        assert_eq!(measured_blue, Rgb::new(0x21, 0x57, 0xBA));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let red: Rgb = "#f00".parse().unwrap();
        assert_eq!(red, Rgb::new(255, 0, 0));

        let color: Rgb = "#ABC".parse().unwrap();
        assert_eq!(color, Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength)));
        assert!(matches!(
            "#éé".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let upper: Rgb = "  #ABCDEF ".parse().unwrap();
        let lower: Rgb = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_display_is_uppercase_hex() {
        assert_eq!(Rgb::new(0x19, 0x1E, 0x21).to_string(), "#191E21");
    }
}
