//! Unified error type for the spectra-dither public API.

use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the spectra-dither public API.
///
/// Wraps the crate's error types into a single enum for convenient `?`
/// propagation in application code.
///
/// # Example
///
/// ```
/// use spectra_dither::{DitherError, DitherMethod, Palette};
///
/// fn configure(name: &str) -> Result<(Palette, DitherMethod), DitherError> {
///     let palette = Palette::from_hex(
///         &["#000", "#FFF", "#00F", "#0F0", "#F00", "#FF0"],
///         None,
///     )?;
///     let method = name.parse()?;
///     Ok((palette, method))
/// }
///
/// assert!(configure("stucki").is_ok());
/// assert!(configure("bayer").is_err());
/// ```
#[derive(Debug)]
pub enum DitherError {
    /// Palette validation error (wrong size, duplicate, or parse error)
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Dither method name is not one of the known kernels
    UnknownMethod(String),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::Palette(err) => write!(f, "palette error: {}", err),
            DitherError::ParseColor(err) => write!(f, "color parse error: {}", err),
            DitherError::UnknownMethod(name) => write!(
                f,
                "unknown dither method '{}' (expected stucki, floyd-steinberg or atkinson)",
                name
            ),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Palette(err) => Some(err),
            DitherError::ParseColor(err) => Some(err),
            DitherError::UnknownMethod(_) => None,
        }
    }
}

impl From<PaletteError> for DitherError {
    fn from(err: PaletteError) -> Self {
        DitherError::Palette(err)
    }
}

impl From<ParseColorError> for DitherError {
    fn from(err: ParseColorError) -> Self {
        DitherError::ParseColor(err)
    }
}
