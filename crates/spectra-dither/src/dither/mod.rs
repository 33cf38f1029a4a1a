//! Error diffusion dithering.
//!
//! Three kernels are available, selected through [`DitherMethod`]:
//!
//! - **Floyd-Steinberg**: compact 4-tap kernel
//! - **Atkinson**: medium 6-tap footprint, full propagation
//! - **Stucki**: wide 12-tap kernel, smoothest gradients (default)
//!
//! # Example
//!
//! ```
//! use spectra_dither::{dither_with_kernel, DitherMethod, Palette, Rgb};
//!
//! let pixels = vec![Rgb::new(128, 128, 128); 4];
//! let kernel = DitherMethod::Stucki.kernel();
//! let out = dither_with_kernel(&pixels, 2, 2, &Palette::spectra6(), kernel);
//! assert_eq!(out.len(), 4);
//! ```

mod buffer;
mod engine;
mod kernel;

pub use buffer::WorkBuffer;
pub use engine::{dither_with_kernel, NEAR_BLACK, NEAR_WHITE, SKIP_THRESHOLD};
pub use kernel::{Kernel, ATKINSON, FLOYD_STEINBERG, STUCKI};

#[cfg(test)]
pub(crate) use engine::{quantize_pixel, Diffusion};

use std::fmt;
use std::str::FromStr;

use crate::api::DitherError;

/// Dithering method selection.
///
/// A closed set of three kernels. Unknown names either fail
/// ([`parse`](Self::parse)) or fall back to [`Stucki`](Self::Stucki)
/// ([`from_name`](Self::from_name)), depending on whether the caller wants
/// to validate user input or just get an image out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherMethod {
    /// Floyd-Steinberg, 4 neighbors over 2 rows.
    FloydSteinberg,

    /// Atkinson footprint, 6 neighbors over 3 rows, each receiving 1/6.
    Atkinson,

    /// Stucki, 12 neighbors over 3 rows.
    #[default]
    Stucki,
}

impl DitherMethod {
    /// All methods, in the order they are listed to users.
    pub const ALL: [DitherMethod; 3] = [
        DitherMethod::Stucki,
        DitherMethod::FloydSteinberg,
        DitherMethod::Atkinson,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            DitherMethod::FloydSteinberg => "floyd-steinberg",
            DitherMethod::Atkinson => "atkinson",
            DitherMethod::Stucki => "stucki",
        }
    }

    /// Strict lookup by canonical name.
    ///
    /// ```
    /// use spectra_dither::DitherMethod;
    ///
    /// assert_eq!(DitherMethod::parse("atkinson"), Some(DitherMethod::Atkinson));
    /// assert_eq!(DitherMethod::parse("bayer"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Lookup by name, falling back to [`Stucki`](Self::Stucki).
    ///
    /// ```
    /// use spectra_dither::DitherMethod;
    ///
    /// assert_eq!(DitherMethod::from_name("bayer"), DitherMethod::Stucki);
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// The diffusion kernel for this method.
    pub const fn kernel(self) -> &'static Kernel {
        match self {
            DitherMethod::FloydSteinberg => &FLOYD_STEINBERG,
            DitherMethod::Atkinson => &ATKINSON,
            DitherMethod::Stucki => &STUCKI,
        }
    }
}

impl fmt::Display for DitherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherMethod {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DitherError::UnknownMethod(s.to_string()))
    }
}
