//! Palette types and utilities
//!
//! The Spectra 6 palette carries two parallel color tables: the output
//! colors written into results and the measured reference colors used for
//! nearest-color matching.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PALETTE_SIZE, SPECTRA6_OUTPUT, SPECTRA6_REFERENCE};
