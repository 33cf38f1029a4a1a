//! Palette struct with dual color storage and nearest-color matching.
//!
//! A Spectra 6 panel is driven with six idealized color codes, but what the
//! panel actually shows is noticeably duller. `Palette` keeps both tables in
//! parallel: matching runs against the measured (reference) colors, output
//! is written with the idealized (output) colors.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Rgb;

/// Number of colors on a Spectra 6 panel.
pub const PALETTE_SIZE: usize = 6;

/// Idealized colors written to the result, in index order:
/// black, white, blue, green, red, yellow.
pub const SPECTRA6_OUTPUT: [Rgb; PALETTE_SIZE] = [
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0xFF, 0xFF, 0xFF), // white
    Rgb::new(0x00, 0x00, 0xFF), // blue
    Rgb::new(0x00, 0xFF, 0x00), // green
    Rgb::new(0xFF, 0x00, 0x00), // red
    Rgb::new(0xFF, 0xFF, 0x00), // yellow
];

/// Colors as measured on the physical panel, parallel to [`SPECTRA6_OUTPUT`].
pub const SPECTRA6_REFERENCE: [Rgb; PALETTE_SIZE] = [
    Rgb::new(0x19, 0x1E, 0x21), // black
    Rgb::new(0xE8, 0xE8, 0xE8), // white
    Rgb::new(0x21, 0x57, 0xBA), // blue
    Rgb::new(0x12, 0x5F, 0x20), // green
    Rgb::new(0xB2, 0x13, 0x18), // red
    Rgb::new(0xEF, 0xDE, 0x44), // yellow
];

/// A six-color palette with parallel output and reference tables.
///
/// Index `i` of both tables names the same logical color. The index is also
/// the value stored in indexed output, so table order is significant.
///
/// # Example
///
/// ```
/// use spectra_dither::{Palette, Rgb};
///
/// let palette = Palette::spectra6();
///
/// // Mid grey is closest to the measured blue, and comes out as pure blue.
/// let idx = palette.nearest_index(Rgb::new(128, 128, 128));
/// assert_eq!(idx, 2);
/// assert_eq!(palette.color_at(idx), Rgb::new(0, 0, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    output: [Rgb; PALETTE_SIZE],
    reference: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// The built-in Spectra 6 palette.
    pub const fn spectra6() -> Self {
        Self {
            output: SPECTRA6_OUTPUT,
            reference: SPECTRA6_REFERENCE,
        }
    }

    /// Create a calibrated palette.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DuplicateColor`] if either table lists the
    /// same color twice. Duplicate output colors would make indexed encoding
    /// ambiguous, duplicate reference colors would make one entry
    /// unreachable.
    pub fn new(
        output: [Rgb; PALETTE_SIZE],
        reference: [Rgb; PALETTE_SIZE],
    ) -> Result<Self, PaletteError> {
        check_unique(&output)?;
        check_unique(&reference)?;
        Ok(Self { output, reference })
    }

    /// Create a palette from hex color strings.
    ///
    /// If `reference` is `None`, the output colors double as the reference
    /// colors.
    ///
    /// # Example
    ///
    /// ```
    /// use spectra_dither::Palette;
    ///
    /// let palette = Palette::from_hex(
    ///     &["#000", "#FFF", "#00F", "#0F0", "#F00", "#FF0"],
    ///     Some(&["#191E21", "#E8E8E8", "#2157BA", "#125F20", "#B21318", "#EFDE44"]),
    /// )
    /// .unwrap();
    /// assert_eq!(palette, Palette::spectra6());
    /// ```
    pub fn from_hex(output: &[&str], reference: Option<&[&str]>) -> Result<Self, PaletteError> {
        let output = parse_table(output)?;
        let reference = match reference {
            Some(r) => parse_table(r)?,
            None => output,
        };
        Self::new(output, reference)
    }

    /// Returns the number of colors in the palette (always six).
    #[inline]
    pub const fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Output color for a resolved index.
    ///
    /// This is what gets written into the result.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 6`.
    #[inline]
    pub fn color_at(&self, idx: usize) -> Rgb {
        self.output[idx]
    }

    /// Measured reference color for an index.
    #[inline]
    pub fn reference_at(&self, idx: usize) -> Rgb {
        self.reference[idx]
    }

    /// The output table.
    #[inline]
    pub fn output_colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.output
    }

    /// The reference table.
    #[inline]
    pub fn reference_colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.reference
    }

    /// Index of the reference color closest to `pixel`.
    ///
    /// Distance is squared Euclidean RGB distance. On a tie the earlier
    /// entry wins, so equidistant pixels always resolve to the lower index.
    /// Channels are taken as given; clamping floating values into range is
    /// the caller's job.
    pub fn nearest_index(&self, pixel: Rgb) -> usize {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (i, &candidate) in self.reference.iter().enumerate() {
            let dist = pixel.distance_sq(candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        best_idx
    }

    /// Index of the output color that equals `color` exactly.
    ///
    /// Unlike [`nearest_index`](Self::nearest_index) this is an equality
    /// lookup against the output table.
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.output.iter().position(|&c| c == color)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::spectra6()
    }
}

fn check_unique(colors: &[Rgb; PALETTE_SIZE]) -> Result<(), PaletteError> {
    let mut seen = HashSet::new();
    for (i, color) in colors.iter().enumerate() {
        if !seen.insert(*color) {
            return Err(PaletteError::DuplicateColor { index: i });
        }
    }
    Ok(())
}

fn parse_table(hex: &[&str]) -> Result<[Rgb; PALETTE_SIZE], PaletteError> {
    if hex.len() != PALETTE_SIZE {
        return Err(PaletteError::WrongSize { found: hex.len() });
    }
    let mut table = [Rgb::default(); PALETTE_SIZE];
    for (slot, s) in table.iter_mut().zip(hex) {
        *slot = s.parse()?;
    }
    Ok(table)
}
