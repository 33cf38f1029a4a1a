//! Error diffusion kernel definitions.
//!
//! Each kernel lists the not-yet-visited neighbors that receive a share of a
//! pixel's quantization error during a raster scan.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` and an integer weight; a neighbor
/// receives `error * weight / divisor`. All kernels here propagate the full
/// error, so the weights sum to the divisor.
///
/// Entries never point backwards in raster order: `dy >= 0`, and entries on
/// the current row (`dy == 0`) have `dx > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

impl Kernel {
    /// Entries with their weights normalized to fractions of one.
    pub fn fractions(&self) -> impl Iterator<Item = (i32, i32, f64)> + '_ {
        let divisor = self.divisor as f64;
        self.entries
            .iter()
            .map(move |&(dx, dy, w)| (dx, dy, w as f64 / divisor))
    }

    /// Sum of the normalized weights.
    pub fn total_weight(&self) -> f64 {
        self.fractions().map(|(_, _, w)| w).sum()
    }
}

/// Floyd-Steinberg dithering kernel (compact, 4 taps).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Atkinson-footprint kernel (medium, 6 taps).
///
/// Classic Atkinson hands 1/8 to each neighbor and drops a quarter of the
/// error. Here each neighbor receives 1/6 so the full error is carried.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 6,
};

/// Stucki dithering kernel (wide, 12 taps).
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};
